// ── Fleet aggregator ──
//
// Fan-out one task per configured switch, fan-in by completion, then put
// the reports back into configured order. Every task owns its own session;
// the only shared value is the read-only fleet config.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tracing::{error, info};

use crate::config::{DeviceConfig, FleetConfig};
use crate::model::{DeviceReport, FleetReport};
use crate::poller;

/// Polls every configured switch concurrently.
#[derive(Debug, Clone)]
pub struct Fleet {
    config: Arc<FleetConfig>,
}

impl Fleet {
    pub fn new(config: Arc<FleetConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Run one poll cycle over the whole fleet.
    ///
    /// Always returns a report with one entry per configured switch.
    pub async fn poll(&self) -> FleetReport {
        self.poll_with(|ordinal, device| async move {
            poller::poll_device(ordinal, &device).await
        })
        .await
    }

    /// Run one poll cycle with a custom per-device poll function.
    ///
    /// Each call runs on its own task. A task that panics or is cancelled
    /// is reported as an offline switch carrying the fault text; it never
    /// affects the other switches.
    pub async fn poll_with<F, Fut>(&self, poll: F) -> FleetReport
    where
        F: Fn(usize, DeviceConfig) -> Fut,
        Fut: Future<Output = DeviceReport> + Send + 'static,
    {
        let started = Instant::now();

        let mut pending: FuturesUnordered<_> = self
            .config
            .devices
            .iter()
            .enumerate()
            .map(|(index, device)| {
                let ordinal = index + 1;
                let handle = tokio::spawn(poll(ordinal, device.clone()));
                let name = device.name.clone();
                let address = device.address.clone();
                async move { (ordinal, name, address, handle.await) }
            })
            .collect();

        let mut reports = Vec::with_capacity(self.config.len());
        while let Some((ordinal, name, address, joined)) = pending.next().await {
            let report = joined.unwrap_or_else(|e| {
                error!(ordinal, device = %name, error = %e, "poll task failed");
                DeviceReport::offline(ordinal, name, address, format!("poll task failed: {e}"))
            });
            reports.push(report);
        }

        let report = FleetReport::from_devices(reports);
        info!(
            switches = report.total_devices(),
            online = report.online_devices(),
            ports = report.total_ports(),
            elapsed_ms = started.elapsed().as_millis(),
            "fleet poll complete"
        );
        report
    }
}
