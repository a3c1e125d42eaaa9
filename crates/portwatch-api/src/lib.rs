//! Session client for the web-management interface of TP-Link easy smart
//! switches.
//!
//! - **[`SwitchClient`]** -- one cookie-backed session per switch:
//!   [`login`](SwitchClient::login), then raw page fetches such as
//!   [`port_statistics`](SwitchClient::port_statistics) and
//!   [`poe_recovery`](SwitchClient::poe_recovery).
//! - **[`TransportConfig`]** -- timeout and TLS knobs shared by every
//!   client built for a poll cycle.
//!
//! Pages come back as [`RawPage`] (status + body). Interpreting the
//! embedded script variables is left to `portwatch-core`.

pub mod auth;
pub mod client;
pub mod error;
pub mod pages;
pub mod transport;

pub use auth::LOGIN_PATH;
pub use client::{RawPage, SwitchClient};
pub use error::Error;
pub use pages::{POE_RECOVERY_PATH, PORT_STATISTICS_PATH};
pub use transport::TransportConfig;

pub use reqwest::StatusCode;
