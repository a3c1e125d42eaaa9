// ── Domain model ──
//
// Canonical types produced by a poll cycle. Nothing here knows how the
// switch encodes them; see `extract` and `topology` for that.

pub mod device;
pub mod fleet;
pub mod port;

pub use device::{DeviceOutcome, DeviceReport};
pub use fleet::FleetReport;
pub use port::{LINK_DOWN, LinkSpeed, PoeState, PortStatus};
