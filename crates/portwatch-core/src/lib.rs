//! Scrape-and-aggregate pipeline between `portwatch-api` and the HTTP
//! presenter.
//!
//! - **[`extract`]** -- Pattern-based recovery of script variables embedded
//!   in switch HTML. Total functions: absence is an empty result.
//!
//! - **[`topology`]** -- Port-count inference (declarations first, sequence
//!   lengths last) and PoE probing as an explicit [`PoeStatus`].
//!
//! - **[`poll_device`]** -- One switch, one session, one [`DeviceReport`].
//!   Login and transport failures end here as an offline report.
//!
//! - **[`Fleet`]** -- Concurrent fan-out over a [`FleetConfig`], results
//!   reassembled in configured order into a [`FleetReport`], whose
//!   `Serialize` impl is the published JSON document.

pub mod config;
pub mod error;
pub mod extract;
pub mod fleet;
pub mod model;
pub mod poller;
pub mod report;
pub mod topology;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_TIMEOUT, DeviceConfig, FleetConfig};
pub use error::CoreError;
pub use extract::KeyValueBlock;
pub use fleet::Fleet;
pub use poller::poll_device;
pub use topology::PoeStatus;

pub use model::{
    DeviceOutcome, DeviceReport, FleetReport, LINK_DOWN, LinkSpeed, PoeState, PortStatus,
};
