//! Measurement newtypes for link telemetry quantities.
//!
//! Each quantity gets its own single-field wrapper so a bitrate can never be
//! handed to something expecting a channel width. Construction is total:
//! these are measurement labels, not validated ranges, and the values always
//! originate from system tooling. An implausible reading (say, a negative
//! frequency) is carried through verbatim rather than rejected.

use serde::{Deserialize, Serialize};

/// Radio frequency in MHz.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct FrequencyMhz(pub f64);

impl FrequencyMhz {
    /// Create a new frequency from a MHz value.
    pub const fn new(mhz: f64) -> Self {
        Self(mhz)
    }

    /// Get the raw MHz value.
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// Received signal strength in dBm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct SignalDbm(pub i32);

impl SignalDbm {
    pub const fn new(dbm: i32) -> Self {
        Self(dbm)
    }

    pub const fn value(&self) -> i32 {
        self.0
    }
}

/// Negotiated or advertised bitrate in Mbit/s.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct BitrateMbps(pub f64);

impl BitrateMbps {
    pub const fn new(mbps: f64) -> Self {
        Self(mbps)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// Channel width in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ChannelWidthMhz(pub u32);

impl ChannelWidthMhz {
    pub const fn new(mhz: u32) -> Self {
        Self(mhz)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

/// Modulation and coding scheme index. Range and meaning depend on the
/// generation that reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct McsIndex(pub u32);

impl McsIndex {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Spatial-stream count implied by an 802.11n index, where each block of
    /// eight indices adds a stream. Newer generations report streams
    /// explicitly and never need this.
    pub const fn implied_streams(&self) -> SpatialStreams {
        SpatialStreams(self.0 / 8 + 1)
    }
}

/// Count of simultaneous MIMO spatial streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct SpatialStreams(pub u32);

impl SpatialStreams {
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}
