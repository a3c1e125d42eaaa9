// ── Fleet report ──

use super::device::DeviceReport;

/// Aggregate of one poll cycle over every configured switch.
///
/// Rebuilt from scratch on every poll. Summary counters are derived from
/// `devices` on demand and only ever count online switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetReport {
    /// In configured order (ordinal 1 first).
    pub devices: Vec<DeviceReport>,
}

impl FleetReport {
    /// Build a report, putting the devices back into configured order.
    pub fn from_devices(mut devices: Vec<DeviceReport>) -> Self {
        devices.sort_by_key(|d| d.ordinal);
        Self { devices }
    }

    fn online(&self) -> impl Iterator<Item = &DeviceReport> {
        self.devices.iter().filter(|d| d.is_online())
    }

    pub fn total_devices(&self) -> usize {
        self.devices.len()
    }

    pub fn online_devices(&self) -> usize {
        self.online().count()
    }

    pub fn total_ports(&self) -> usize {
        self.online().map(DeviceReport::ports_total).sum()
    }

    pub fn total_ports_up(&self) -> usize {
        self.online().map(DeviceReport::ports_up).sum()
    }

    pub fn total_poe_ports(&self) -> u64 {
        self.online().map(|d| u64::from(d.poe_port_count())).sum()
    }
}
