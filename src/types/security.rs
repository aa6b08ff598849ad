//! Security capability decoding.

use serde::{Deserialize, Serialize};

/// Raw security capability bitmask as reported by the network manager.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct SecurityFlags(pub u32);

impl SecurityFlags {
    /// Create a new bitmask from a raw u32 value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Check if a specific flag is set using a bitmask.
    pub const fn has_flag(&self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Get the raw u32 value.
    pub const fn value(&self) -> u32 {
        self.0
    }
}

/// Named security protocol of an access point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum SecurityProtocol {
    Open,
    Wpa,
    WpaEnterprise,
    Wpa2,
    Wpa2Enterprise,
    Wpa3,
    /// Capability bits present but none of the known suites.
    Unknown,
}

impl SecurityProtocol {
    /// Display label.
    pub const fn label(&self) -> &'static str {
        match self {
            SecurityProtocol::Open => "Open",
            SecurityProtocol::Wpa => "WPA",
            SecurityProtocol::WpaEnterprise => "WPA-Enterprise",
            SecurityProtocol::Wpa2 => "WPA2",
            SecurityProtocol::Wpa2Enterprise => "WPA2-Enterprise",
            SecurityProtocol::Wpa3 => "WPA3",
            SecurityProtocol::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for SecurityProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Decode the legacy WPA mask and the RSN mask into the strongest protocol
/// the access point offers.
///
/// Checks run strongest-first, so the first hit is the one reported:
/// WPA3 (SAE) ahead of everything, the RSN suites ahead of their legacy
/// counterparts. Masks that are non-zero but carry no known key-management
/// bit classify as `Unknown`; only a pair of all-zero masks is `Open`.
pub fn classify_security(wpa: SecurityFlags, rsn: SecurityFlags) -> SecurityProtocol {
    use super::nm_flags::key_mgmt;

    if rsn.has_flag(key_mgmt::SAE) {
        SecurityProtocol::Wpa3
    } else if rsn.has_flag(key_mgmt::IEEE_802_1X) {
        SecurityProtocol::Wpa2Enterprise
    } else if rsn.has_flag(key_mgmt::PSK) {
        SecurityProtocol::Wpa2
    } else if wpa.has_flag(key_mgmt::IEEE_802_1X) {
        SecurityProtocol::WpaEnterprise
    } else if wpa.has_flag(key_mgmt::PSK) {
        SecurityProtocol::Wpa
    } else if wpa.value() == 0 && rsn.value() == 0 {
        SecurityProtocol::Open
    } else {
        SecurityProtocol::Unknown
    }
}
