//! Scanned-network records and scan-result shaping helpers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cache::GenerationCache;

use super::band::{Band, channel_number};
use super::generation::WifiGeneration;
use super::quality::{SignalQuality, SpeedQuality};
use super::security::{SecurityFlags, SecurityProtocol, classify_security};
use super::units::{BitrateMbps, ChannelWidthMhz, FrequencyMhz};

/// Scan entries older than this relative to the newest completed scan are
/// dropped as stale.
pub const STALE_AFTER_SECS: i64 = 10;

/// Raw per-access-point payload handed over by the scan-result collaborator.
///
/// Timestamps are boottime seconds as the network manager reports them;
/// `last_seen` is negative for an access point that has never been seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct AccessPointRecord {
    pub ssid: String,
    pub bssid: String,
    pub frequency: FrequencyMhz,
    pub bandwidth: ChannelWidthMhz,
    pub max_bitrate: BitrateMbps,
    pub signal_percent: u8,
    pub wpa_flags: SecurityFlags,
    pub rsn_flags: SecurityFlags,
    pub last_seen: i64,
}

/// One discovered access point, classified and ready for display.
///
/// Rebuilt fresh on every scan read; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ScannedNetwork {
    /// Network name.
    pub ssid: String,
    /// Access-point MAC, lower-cased colon-separated form.
    pub bssid: String,
    /// Channel center frequency.
    pub frequency: FrequencyMhz,
    /// Channel number derived from the frequency, 0 outside numbered ranges.
    pub channel: u32,
    /// Band derived from the frequency.
    pub band: Band,
    /// Advertised channel bandwidth.
    pub bandwidth: ChannelWidthMhz,
    /// Maximum advertised bitrate.
    pub max_bitrate: BitrateMbps,
    /// Signal strength percentage, 0–100.
    pub signal_percent: u8,
    /// Strongest security protocol advertised.
    pub security: SecurityProtocol,
    /// Last generation observed for this BSSID, `Unknown` until a scan dump
    /// has mentioned it.
    pub generation: WifiGeneration,
}

impl ScannedNetwork {
    /// Build a display-ready record from a collaborator payload, consulting
    /// the generation cache for the BSSID's last-known generation.
    pub fn from_record(record: &AccessPointRecord, generations: &GenerationCache) -> Self {
        let bssid = record.bssid.to_ascii_lowercase();
        let generation = generations.lookup(&bssid);
        Self {
            ssid: record.ssid.clone(),
            bssid,
            frequency: record.frequency,
            channel: channel_number(record.frequency),
            band: Band::for_frequency(record.frequency),
            bandwidth: record.bandwidth,
            max_bitrate: record.max_bitrate,
            signal_percent: record.signal_percent,
            security: classify_security(record.wpa_flags, record.rsn_flags),
            generation,
        }
    }

    /// Signal tier of this entry.
    pub fn signal_quality(&self) -> SignalQuality {
        SignalQuality::from_percent(self.signal_percent)
    }

    /// Speed tier of this entry's advertised maximum.
    pub fn speed_quality(&self) -> SpeedQuality {
        SpeedQuality::from_bitrate(self.max_bitrate)
    }
}

/// Whether a scan entry should be dropped as stale.
///
/// Before any scan has completed nothing is stale. Afterwards an entry is
/// stale when it was never seen (negative sentinel) or its last sighting
/// trails the newest completed scan by more than [`STALE_AFTER_SECS`].
pub fn is_stale(last_seen: i64, newest_scan: Option<i64>) -> bool {
    match newest_scan {
        None => false,
        Some(scan) => last_seen < 0 || last_seen < scan - STALE_AFTER_SECS,
    }
}

/// Sort networks by descending signal percentage. Stable, so entries with
/// equal signal keep their scan order.
pub fn sort_by_signal(networks: &mut [ScannedNetwork]) {
    networks.sort_by(|a, b| b.signal_percent.cmp(&a.signal_percent));
}

/// Group networks by SSID, preserving the order each SSID is first seen.
///
/// Run [`sort_by_signal`] first and each group's head is its strongest
/// member, with groups ordered by their strongest signals.
pub fn group_by_ssid(networks: Vec<ScannedNetwork>) -> IndexMap<String, Vec<ScannedNetwork>> {
    let mut groups: IndexMap<String, Vec<ScannedNetwork>> = IndexMap::new();
    for network in networks {
        groups.entry(network.ssid.clone()).or_default().push(network);
    }
    groups
}
