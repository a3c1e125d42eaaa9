// ── Port domain types ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// Link text for a port without carrier. Also the fallback when the
/// statistics page has fewer link codes than ports.
pub const LINK_DOWN: &str = "Link Down";

/// Negotiated link state as encoded by the firmware (`link_status` digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkSpeed {
    Down,
    /// Code 1: reported by the firmware, meaning undocumented.
    Ls1,
    Half10M,
    Full10M,
    /// Code 4: reported by the firmware, meaning undocumented.
    Ls4,
    Full100M,
    Full1G,
    Unknown,
}

impl LinkSpeed {
    /// Map a firmware link code to its speed; codes above 6 are `Unknown`.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Down,
            1 => Self::Ls1,
            2 => Self::Half10M,
            3 => Self::Full10M,
            4 => Self::Ls4,
            5 => Self::Full100M,
            6 => Self::Full1G,
            _ => Self::Unknown,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Down => LINK_DOWN,
            Self::Ls1 => "LS 1",
            Self::Half10M => "10M Half",
            Self::Full10M => "10M Full",
            Self::Ls4 => "LS 4",
            Self::Full100M => "100M Full",
            Self::Full1G => "1 Gb/s Full",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_up(self) -> bool {
        !matches!(self, Self::Down)
    }
}

impl fmt::Display for LinkSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// PoE state of one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoeState {
    On,
    Off,
    /// Port lies outside the switch's PoE-capable range.
    NotApplicable,
}

impl PoeState {
    pub fn is_applicable(self) -> bool {
        !matches!(self, Self::NotApplicable)
    }
}

impl fmt::Display for PoeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "On",
            Self::Off => "Off",
            Self::NotApplicable => "n/a",
        })
    }
}

/// Status of one physical port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortStatus {
    /// 1-based, contiguous within a device.
    pub number: u32,
    pub link: LinkSpeed,
    pub poe: PoeState,
}

impl PortStatus {
    pub fn is_up(&self) -> bool {
        self.link.is_up()
    }

    /// Human-readable status line, e.g. `"1 Gb/s Full – PoE: On"`.
    ///
    /// The PoE part is only present for PoE-capable ports.
    pub fn text(&self) -> String {
        if self.poe.is_applicable() {
            format!("{} – PoE: {}", self.link, self.poe)
        } else {
            self.link.description().to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_table_matches_firmware_codes() {
        let texts: Vec<_> = (0..=7).map(|c| LinkSpeed::from_code(c).description()).collect();
        assert_eq!(
            texts,
            [
                "Link Down",
                "LS 1",
                "10M Half",
                "10M Full",
                "LS 4",
                "100M Full",
                "1 Gb/s Full",
                "unknown",
            ]
        );
    }

    #[test]
    fn unknown_link_counts_as_up() {
        assert!(LinkSpeed::Unknown.is_up());
        assert!(!LinkSpeed::Down.is_up());
    }

    #[test]
    fn text_with_and_without_poe() {
        let poe = PortStatus {
            number: 1,
            link: LinkSpeed::Full1G,
            poe: PoeState::On,
        };
        assert_eq!(poe.text(), "1 Gb/s Full – PoE: On");

        let off = PortStatus {
            number: 2,
            link: LinkSpeed::Down,
            poe: PoeState::Off,
        };
        assert_eq!(off.text(), "Link Down – PoE: Off");

        let plain = PortStatus {
            number: 9,
            link: LinkSpeed::Full100M,
            poe: PoeState::NotApplicable,
        };
        assert_eq!(plain.text(), "100M Full");
    }
}
