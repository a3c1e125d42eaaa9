// ── Device poller ──
//
// One switch, one fresh session, one report. Transport and login failures
// end here as an offline report; parse misses become defaults.

use std::time::Instant;

use portwatch_api::{SwitchClient, TransportConfig};
use tracing::{debug, info, warn};

use crate::config::DeviceConfig;
use crate::error::CoreError;
use crate::extract;
use crate::model::{DeviceReport, LinkSpeed, PortStatus};
use crate::topology::{self, PORT_LIMIT, PoeStatus, STATS_OBJECT};

/// Per-port sequences recovered from the statistics page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSequences {
    /// Administrative state digit per port.
    pub state: Vec<u8>,
    /// Link code per port (see [`LinkSpeed::from_code`]).
    pub link_status: Vec<u8>,
    /// Port count from the inferencer, 0 when undeclared.
    pub inferred_ports: u32,
}

impl PortSequences {
    /// Recover sequences and port count from the statistics page body.
    pub fn parse(page: &str) -> Self {
        let stats = extract::extract_object(page, STATS_OBJECT);
        let field = |name: &str| stats.get(name).map(|v| extract::digits(v)).unwrap_or_default();
        Self {
            state: field("state"),
            link_status: field("link_status"),
            inferred_ports: topology::infer_port_count_with(page, &stats),
        }
    }

    /// Inferred port count, or the shorter of the two sequences without one.
    pub fn port_count(&self) -> u32 {
        let count = if self.inferred_ports > 0 {
            self.inferred_ports
        } else {
            let shortest = self.state.len().min(self.link_status.len());
            u32::try_from(shortest).unwrap_or(u32::MAX)
        };
        count.min(PORT_LIMIT)
    }
}

/// Build the numbered port list.
///
/// Port `i + 1` takes link code `links[i]` (down when the page has fewer
/// codes than ports) and its PoE state from `poe`.
pub fn build_ports(count: u32, links: &[u8], poe: &PoeStatus) -> Vec<PortStatus> {
    (1..=count)
        .zip(0usize..)
        .map(|(number, index)| PortStatus {
            number,
            link: LinkSpeed::from_code(links.get(index).copied().unwrap_or(0)),
            poe: poe.state(index),
        })
        .collect()
}

/// Poll one switch. Never fails; errors become an offline report.
pub async fn poll_device(ordinal: usize, device: &DeviceConfig) -> DeviceReport {
    let started = Instant::now();
    match scrape(device).await {
        Ok((ports, poe_port_count)) => {
            let report =
                DeviceReport::online(ordinal, &device.name, &device.address, ports, poe_port_count);
            info!(
                ordinal,
                device = %device.name,
                ports = report.ports_total(),
                ports_up = report.ports_up(),
                poe_ports = poe_port_count,
                elapsed_ms = started.elapsed().as_millis(),
                "switch polled"
            );
            report
        }
        Err(e) => {
            let e = e.with_timeout(device.timeout);
            warn!(ordinal, device = %device.name, error = %e, "switch offline");
            DeviceReport::offline(ordinal, &device.name, &device.address, e.to_string())
        }
    }
}

async fn scrape(device: &DeviceConfig) -> Result<(Vec<PortStatus>, u32), CoreError> {
    let base_url = SwitchClient::base_url_for(&device.address)?;
    let client = SwitchClient::new(base_url, &TransportConfig::with_timeout(device.timeout))?;
    debug!(device = %device.name, url = %client.base_url(), "session opened");

    client.login(&device.username, &device.password).await?;

    let page = client.port_statistics().await?;
    let sequences = PortSequences::parse(&page.body);
    let count = sequences.port_count();
    debug!(
        device = %device.name,
        inferred = sequences.inferred_ports,
        state_len = sequences.state.len(),
        link_len = sequences.link_status.len(),
        count,
        "port topology"
    );

    let poe = topology::fetch_poe(&client).await;
    let ports = build_ports(count, &sequences.link_status, &poe);

    Ok((ports, poe.port_count()))
}
