//! Constants for interpreting NetworkManager access-point security bitmasks.
//!
//! These are the key-management bits of `NM80211ApSecurityFlags`, reported
//! per access point once for the legacy WPA mask and once for the RSN mask.

// Key management suites (shared bit layout across both masks)
pub mod key_mgmt {
    pub const PSK: u32 = 0x0000_0100; // NM_802_11_AP_SEC_KEY_MGMT_PSK
    pub const IEEE_802_1X: u32 = 0x0000_0200; // NM_802_11_AP_SEC_KEY_MGMT_802_1X
    pub const SAE: u32 = 0x0000_0400; // NM_802_11_AP_SEC_KEY_MGMT_SAE
}
