// Switch management pages
//
// The two pages the poller reads. Both return HTML with script-variable
// assignments; parsing happens in `portwatch-core`.

use tracing::debug;

use crate::client::{RawPage, SwitchClient};
use crate::error::Error;

/// Port statistics page (`all_info` object, port-count declarations).
pub const PORT_STATISTICS_PATH: &str = "/PortStatisticsRpm.htm";

/// PoE recovery page (`poe_port_num`, `portRecoveryConfig` object).
pub const POE_RECOVERY_PATH: &str = "/PoeRecoveryRpm.htm";

impl SwitchClient {
    /// Fetch the port statistics page.
    ///
    /// `GET /PortStatisticsRpm.htm` -- a non-success status is an error,
    /// since without this page nothing about the ports is known.
    pub async fn port_statistics(&self) -> Result<RawPage, Error> {
        debug!("fetching port statistics");
        self.fetch_ok(PORT_STATISTICS_PATH).await
    }

    /// Fetch the PoE recovery page.
    ///
    /// `GET /PoeRecoveryRpm.htm` -- returned as-is, whatever the status.
    /// Switches without PoE answer 404 or an unrelated page here.
    pub async fn poe_recovery(&self) -> Result<RawPage, Error> {
        debug!("fetching PoE recovery config");
        self.fetch(POE_RECOVERY_PATH).await
    }
}
