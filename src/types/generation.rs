//! Wireless generation enumeration and its display mappings.
//!
//! The generation numbering follows the Wi-Fi Alliance's retroactive scheme:
//! generation 1 is 802.11b and generation 7 is 802.11be. `Unknown` covers a
//! disconnected link or a link whose diagnostic output carried no usable
//! marker. The enum derives `Ord` with `Unknown` least, so "newest advertised
//! generation" is a plain `max()`.

use serde::{Deserialize, Serialize};

/// Wireless protocol generation of a link or access point.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum WifiGeneration {
    /// Disconnected, or no generation marker recognized.
    #[default]
    Unknown,
    /// 802.11b
    Wifi1,
    /// 802.11a
    Wifi2,
    /// 802.11g
    Wifi3,
    /// 802.11n
    Wifi4,
    /// 802.11ac
    Wifi5,
    /// 802.11ax
    Wifi6,
    /// 802.11be
    Wifi7,
}

impl WifiGeneration {
    /// IEEE standard label for a known generation.
    pub const fn standard(&self) -> Option<&'static str> {
        match self {
            WifiGeneration::Unknown => None,
            WifiGeneration::Wifi1 => Some("802.11b"),
            WifiGeneration::Wifi2 => Some("802.11a"),
            WifiGeneration::Wifi3 => Some("802.11g"),
            WifiGeneration::Wifi4 => Some("802.11n"),
            WifiGeneration::Wifi5 => Some("802.11ac"),
            WifiGeneration::Wifi6 => Some("802.11ax"),
            WifiGeneration::Wifi7 => Some("802.11be"),
        }
    }

    /// Style class used by the presentation layer. Total over the enum;
    /// `Unknown` maps to the dedicated disconnected class.
    pub const fn display_class(&self) -> &'static str {
        match self {
            WifiGeneration::Unknown => "disconnected",
            WifiGeneration::Wifi1 => "wifi-1",
            WifiGeneration::Wifi2 => "wifi-2",
            WifiGeneration::Wifi3 => "wifi-3",
            WifiGeneration::Wifi4 => "wifi-4",
            WifiGeneration::Wifi5 => "wifi-5",
            WifiGeneration::Wifi6 => "wifi-6",
            WifiGeneration::Wifi7 => "wifi-7",
        }
    }

    /// Icon identifier for a known generation.
    pub const fn icon(&self) -> Option<&'static str> {
        match self {
            WifiGeneration::Unknown => None,
            WifiGeneration::Wifi1 => Some("wifi-gen-1"),
            WifiGeneration::Wifi2 => Some("wifi-gen-2"),
            WifiGeneration::Wifi3 => Some("wifi-gen-3"),
            WifiGeneration::Wifi4 => Some("wifi-gen-4"),
            WifiGeneration::Wifi5 => Some("wifi-gen-5"),
            WifiGeneration::Wifi6 => Some("wifi-gen-6"),
            WifiGeneration::Wifi7 => Some("wifi-gen-7"),
        }
    }

    /// Whether this is a recognized generation rather than `Unknown`.
    pub const fn is_known(&self) -> bool {
        !matches!(self, WifiGeneration::Unknown)
    }
}
