// ── Port topology inference ──
//
// Firmware across models declares its port layout inconsistently. Port
// counts are resolved through a fixed chain of strategies, most reliable
// first; PoE support is checked separately and may simply be absent.

use portwatch_api::{RawPage, SwitchClient};
use tracing::debug;

use crate::extract::{self, KeyValueBlock};
use crate::model::PoeState;

/// Script object on the statistics page carrying per-port sequences.
pub const STATS_OBJECT: &str = "all_info";
/// Script object on the PoE page carrying the per-port recovery settings.
pub const POE_OBJECT: &str = "portRecoveryConfig";

/// Upper bound on ports per switch; larger declarations are clamped.
pub const PORT_LIMIT: u32 = 512;

/// Total port count from the statistics page, or 0 when nothing is declared.
///
/// 1. `max_port_num` declaration
/// 2. `port_num` declaration
/// 3. length of `all_info.state` (comma tokens, or digits without commas)
///
/// A declared count of zero falls through to the next strategy.
pub fn infer_port_count(page: &str) -> u32 {
    infer_port_count_with(page, &extract::extract_object(page, STATS_OBJECT))
}

/// As [`infer_port_count`], reusing an already extracted `all_info` block.
pub fn infer_port_count_with(page: &str, stats: &KeyValueBlock) -> u32 {
    let declared = ["max_port_num", "port_num"]
        .into_iter()
        .filter_map(|name| extract::declared_number(page, name))
        .find(|&n| n > 0);

    if let Some(n) = declared {
        return n;
    }

    stats
        .get("state")
        .map(|state| extract::sequence_len(state))
        .and_then(|len| u32::try_from(len).ok())
        .unwrap_or(0)
}

/// PoE capability of one switch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PoeStatus {
    /// No PoE page, or a page without a PoE port declaration.
    #[default]
    Absent,
    Present {
        /// Declared number of PoE-capable ports (ports `1..=port_count`).
        port_count: u32,
        /// State of each PoE port, `states[i]` is port `i + 1`.
        states: Vec<PoeState>,
    },
}

impl PoeStatus {
    pub fn port_count(&self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present { port_count, .. } => *port_count,
        }
    }

    /// PoE state of a port by 0-based index.
    ///
    /// `NotApplicable` outside the PoE range, `Off` for a PoE port with no
    /// recorded state.
    pub fn state(&self, index: usize) -> PoeState {
        match self {
            Self::Absent => PoeState::NotApplicable,
            Self::Present { port_count, states } => {
                if u32::try_from(index).is_ok_and(|i| i < *port_count) {
                    states.get(index).copied().unwrap_or(PoeState::Off)
                } else {
                    PoeState::NotApplicable
                }
            }
        }
    }
}

/// Interpret the PoE recovery page.
///
/// Port `n` maps to slot `n - 1` of `portRecoveryConfig.ip`; a non-empty
/// slot means PoE is on. Without a locatable list every port is `Off`.
/// The declared count is clamped to [`PORT_LIMIT`].
pub fn parse_poe(page: &RawPage) -> PoeStatus {
    if !page.is_success() {
        return PoeStatus::Absent;
    }
    let Some(declared) = extract::declared_number(&page.body, "poe_port_num") else {
        return PoeStatus::Absent;
    };
    let port_count = declared.min(PORT_LIMIT);

    let slots = extract::quoted_list(&page.body, POE_OBJECT, "ip").unwrap_or_default();
    let states = (0..port_count)
        .map(|i| {
            let on = usize::try_from(i)
                .ok()
                .and_then(|i| slots.get(i))
                .is_some_and(|slot| !slot.is_empty());
            if on { PoeState::On } else { PoeState::Off }
        })
        .collect();

    PoeStatus::Present { port_count, states }
}

/// Fetch and parse the PoE page over an already authenticated session.
///
/// Never fails: an unreachable or unhelpful PoE page means the switch has
/// no PoE as far as the report is concerned.
pub async fn fetch_poe(client: &SwitchClient) -> PoeStatus {
    match client.poe_recovery().await {
        Ok(page) => {
            let poe = parse_poe(&page);
            debug!(status = %page.status, poe_ports = poe.port_count(), "PoE page parsed");
            poe
        }
        Err(e) => {
            debug!(error = %e, "PoE page unavailable, treating as no PoE");
            PoeStatus::Absent
        }
    }
}
