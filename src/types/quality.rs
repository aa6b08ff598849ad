//! Signal and speed quality tiers.
//!
//! Both tiers are closed orderings derived from a numeric value by a fixed
//! boundary table. They exist so the presentation layer never hard-codes
//! thresholds; everything downstream switches on the tier.

use serde::{Deserialize, Serialize};

use super::units::BitrateMbps;

/// Quality tier for a 0–100 signal percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum SignalQuality {
    Poor,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl SignalQuality {
    /// Classify a signal percentage.
    pub const fn from_percent(percent: u8) -> Self {
        match percent {
            80.. => SignalQuality::Excellent,
            60.. => SignalQuality::Good,
            40.. => SignalQuality::Fair,
            20.. => SignalQuality::Weak,
            _ => SignalQuality::Poor,
        }
    }

    /// Style class used by the presentation layer.
    pub const fn display_class(&self) -> &'static str {
        match self {
            SignalQuality::Poor => "signal-poor",
            SignalQuality::Weak => "signal-weak",
            SignalQuality::Fair => "signal-fair",
            SignalQuality::Good => "signal-good",
            SignalQuality::Excellent => "signal-excellent",
        }
    }
}

/// Quality tier for a bitrate in Mbit/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum SpeedQuality {
    Poor,
    Weak,
    Ok,
    Good,
    VeryGood,
    Excellent,
}

impl SpeedQuality {
    /// Classify a bitrate.
    pub fn from_bitrate(bitrate: BitrateMbps) -> Self {
        Self::from_mbps(bitrate.value())
    }

    /// Classify a raw Mbit/s value.
    pub fn from_mbps(mbps: f64) -> Self {
        if mbps >= 1000.0 {
            SpeedQuality::Excellent
        } else if mbps >= 300.0 {
            SpeedQuality::VeryGood
        } else if mbps >= 100.0 {
            SpeedQuality::Good
        } else if mbps >= 50.0 {
            SpeedQuality::Ok
        } else if mbps >= 20.0 {
            SpeedQuality::Weak
        } else {
            SpeedQuality::Poor
        }
    }
}
