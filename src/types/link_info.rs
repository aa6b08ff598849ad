//! Parsed state of the currently associated link.

use serde::{Deserialize, Serialize};

use super::generation::WifiGeneration;
use super::guard::GuardInterval;
use super::units::{
    BitrateMbps, ChannelWidthMhz, FrequencyMhz, McsIndex, SignalDbm, SpatialStreams,
};

/// Immutable snapshot of one link-status dump.
///
/// Every field the grammars fail to find stays `None`; the disconnected
/// record is `LinkInfo::default()`. `standard` is present exactly when
/// `generation` is known — [`LinkInfo::seal`] derives it, and nothing mutates
/// the record afterwards.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct LinkInfo {
    /// Detected protocol generation.
    pub generation: WifiGeneration,
    /// IEEE standard label for the detected generation.
    pub standard: Option<String>,
    /// Modulation and coding scheme index from the bitrate line.
    pub mcs: Option<McsIndex>,
    /// Spatial-stream count from the bitrate line.
    pub spatial_streams: Option<SpatialStreams>,
    /// Guard interval negotiated on the link.
    pub guard_interval: Option<GuardInterval>,
    /// Channel width from the bitrate line.
    pub channel_width: Option<ChannelWidthMhz>,
    /// Transmit bitrate.
    pub tx_bitrate: Option<BitrateMbps>,
    /// Receive bitrate.
    pub rx_bitrate: Option<BitrateMbps>,
    /// Signal strength.
    pub signal: Option<SignalDbm>,
    /// Channel center frequency.
    pub frequency: Option<FrequencyMhz>,
    /// Network name, as printed in the dump.
    pub ssid: Option<String>,
    /// Access-point MAC address, casing preserved from the dump.
    pub bssid: Option<String>,
}

impl LinkInfo {
    /// Derive the standard label from the generation and return the finished
    /// record. Call once, after all fields are populated.
    pub(crate) fn seal(mut self) -> Self {
        self.standard = self.generation.standard().map(str::to_owned);
        self
    }

    /// Whether the dump described an associated link at all.
    pub fn is_connected(&self) -> bool {
        self.bssid.is_some() || self.ssid.is_some()
    }

    /// The larger of the two directional bitrates, if either was reported.
    pub fn max_bitrate(&self) -> Option<BitrateMbps> {
        match (self.tx_bitrate, self.rx_bitrate) {
            (Some(tx), Some(rx)) => Some(if tx.value() >= rx.value() { tx } else { rx }),
            (tx, rx) => tx.or(rx),
        }
    }
}
