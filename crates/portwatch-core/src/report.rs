// ── Wire format of the fleet report ──
//
// The published JSON keys switches and ports by their 1-based position as
// strings ("1", "2", ...). Maps keep insertion order so the keys come out
// in configured order, not lexical order ("10" after "9").

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::model::{DeviceOutcome, DeviceReport, FleetReport};

#[derive(Serialize)]
struct WireFleet<'a> {
    switches_total: usize,
    switches_online: usize,
    total_ports: usize,
    total_ports_up: usize,
    total_poe_ports: u64,
    switch: IndexMap<String, WireSwitch<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum WireStatus {
    Online,
    Offline,
}

#[derive(Serialize)]
struct WireSwitch<'a> {
    name: &'a str,
    ip: &'a str,
    status: WireStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    ports_total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ports_up: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    poe_ports: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<IndexMap<String, WirePort>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct WirePort {
    text: String,
}

impl<'a> From<&'a DeviceReport> for WireSwitch<'a> {
    fn from(device: &'a DeviceReport) -> Self {
        match &device.outcome {
            DeviceOutcome::Online {
                ports,
                poe_port_count,
            } => Self {
                name: &device.name,
                ip: &device.address,
                status: WireStatus::Online,
                ports_total: Some(device.ports_total()),
                ports_up: Some(device.ports_up()),
                poe_ports: Some(*poe_port_count),
                port: Some(
                    ports
                        .iter()
                        .map(|p| (p.number.to_string(), WirePort { text: p.text() }))
                        .collect(),
                ),
                error: None,
            },
            DeviceOutcome::Offline { error } => Self {
                name: &device.name,
                ip: &device.address,
                status: WireStatus::Offline,
                ports_total: None,
                ports_up: None,
                poe_ports: None,
                port: None,
                error: Some(error.as_str()),
            },
        }
    }
}

impl Serialize for FleetReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireFleet {
            switches_total: self.total_devices(),
            switches_online: self.online_devices(),
            total_ports: self.total_ports(),
            total_ports_up: self.total_ports_up(),
            total_poe_ports: self.total_poe_ports(),
            switch: self
                .devices
                .iter()
                .map(|d| (d.ordinal.to_string(), WireSwitch::from(d)))
                .collect(),
        }
        .serialize(serializer)
    }
}
