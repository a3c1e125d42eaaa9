// ── Device report types ──

use serde::{Deserialize, Serialize};

use super::port::PortStatus;

/// Result of polling one switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceOutcome {
    Online {
        /// One entry per port, numbered `1..=len`.
        ports: Vec<PortStatus>,
        /// Authoritative PoE-capable port count (a prefix of `ports`).
        poe_port_count: u32,
    },
    Offline {
        /// Never empty.
        error: String,
    },
}

/// One switch's status for one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceReport {
    /// 1-based position in the configured device list.
    pub ordinal: usize,
    pub name: String,
    pub address: String,
    pub outcome: DeviceOutcome,
}

impl DeviceReport {
    pub fn online(
        ordinal: usize,
        name: impl Into<String>,
        address: impl Into<String>,
        ports: Vec<PortStatus>,
        poe_port_count: u32,
    ) -> Self {
        Self {
            ordinal,
            name: name.into(),
            address: address.into(),
            outcome: DeviceOutcome::Online {
                ports,
                poe_port_count,
            },
        }
    }

    /// Offline report. An empty error text is replaced, so offline entries
    /// always explain themselves.
    pub fn offline(
        ordinal: usize,
        name: impl Into<String>,
        address: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        let mut error = error.into();
        if error.trim().is_empty() {
            error = "unknown error".into();
        }
        Self {
            ordinal,
            name: name.into(),
            address: address.into(),
            outcome: DeviceOutcome::Offline { error },
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self.outcome, DeviceOutcome::Online { .. })
    }

    /// Ports of an online device; empty when offline.
    pub fn ports(&self) -> &[PortStatus] {
        match &self.outcome {
            DeviceOutcome::Online { ports, .. } => ports,
            DeviceOutcome::Offline { .. } => &[],
        }
    }

    pub fn ports_total(&self) -> usize {
        self.ports().len()
    }

    pub fn ports_up(&self) -> usize {
        self.ports().iter().filter(|p| p.is_up()).count()
    }

    pub fn poe_port_count(&self) -> u32 {
        match self.outcome {
            DeviceOutcome::Online { poe_port_count, .. } => poe_port_count,
            DeviceOutcome::Offline { .. } => 0,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            DeviceOutcome::Offline { error } => Some(error),
            DeviceOutcome::Online { .. } => None,
        }
    }
}
