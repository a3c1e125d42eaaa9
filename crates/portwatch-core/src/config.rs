// ── Runtime fleet configuration ──
//
// These types describe *which* switches to poll and how to log in.
// They carry credential data and per-call timeouts, but never touch disk.
// The binary builds a `FleetConfig` through `portwatch-config` and hands it in.

use std::time::Duration;

use secrecy::SecretString;

/// Default per-request timeout when a device doesn't set its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for a single switch.
///
/// Identity is the position in [`FleetConfig::devices`]; names are for
/// display only and need not be unique.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Display name.
    pub name: String,
    /// Host, `host:port`, or full base URL of the web interface.
    pub address: String,
    pub username: String,
    pub password: SecretString,
    /// Timeout for each HTTP call made against this switch.
    pub timeout: Duration,
}

impl DeviceConfig {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            username: username.into(),
            password: SecretString::from(password.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The full, ordered list of switches polled together in one cycle.
///
/// Built once at startup and shared read-only with the aggregator.
#[derive(Debug, Clone, Default)]
pub struct FleetConfig {
    pub devices: Vec<DeviceConfig>,
}

impl FleetConfig {
    pub fn new(devices: Vec<DeviceConfig>) -> Self {
        Self { devices }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
