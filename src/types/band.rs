//! Frequency to band and channel-number mapping.
//!
//! The band-label ranges and the channel-number ranges come from different
//! parts of the original tooling and deliberately do not share boundaries:
//! band membership switches from 5 GHz to 6 GHz across 5900–5925 MHz, while
//! channel numbering switches across 5825–5955 MHz. Inside that gap a
//! frequency resolves to channel 0 but may still carry a band label. The two
//! tables are kept independent rather than unified; real 6 GHz allocations
//! depend on the exact thresholds.

use serde::{Deserialize, Serialize};

use super::units::FrequencyMhz;

/// Wireless band a frequency falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Band {
    /// 2400–2500 MHz
    Band24,
    /// 5150–5900 MHz
    Band5,
    /// 5925–7125 MHz
    Band6,
    /// Outside every known allocation.
    Unknown,
}

impl Band {
    /// Band containing a frequency.
    pub fn for_frequency(freq: FrequencyMhz) -> Self {
        let mhz = freq.value();
        if (2400.0..2500.0).contains(&mhz) {
            Band::Band24
        } else if (5150.0..5900.0).contains(&mhz) {
            Band::Band5
        } else if (5925.0..=7125.0).contains(&mhz) {
            Band::Band6
        } else {
            Band::Unknown
        }
    }

    /// Human-readable band label.
    pub const fn label(&self) -> &'static str {
        match self {
            Band::Band24 => "2.4 GHz",
            Band::Band5 => "5 GHz",
            Band::Band6 => "6 GHz",
            Band::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Channel number for a center frequency, or 0 outside the numbered ranges.
///
/// 2.4 GHz channels sit on a 5 MHz raster from 2412 MHz, with channel 14 at
/// its Japanese-only 2484 MHz offset. 5 GHz and 6 GHz channels are numbered
/// from their respective 5000/5950 MHz anchors.
pub fn channel_number(freq: FrequencyMhz) -> u32 {
    let mhz = freq.value();
    if (2412.0..=2484.0).contains(&mhz) {
        if mhz == 2484.0 { 14 } else { ((mhz - 2412.0) / 5.0).round() as u32 + 1 }
    } else if (5170.0..=5825.0).contains(&mhz) {
        ((mhz - 5000.0) / 5.0).round() as u32
    } else if (5955.0..=7115.0).contains(&mhz) {
        ((mhz - 5950.0) / 5.0).round() as u32
    } else {
        0
    }
}
