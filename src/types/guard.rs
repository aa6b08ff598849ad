//! Guard interval between transmitted symbols.

use serde::{Deserialize, Serialize};

/// Idle time inserted between symbols to absorb inter-symbol interference.
///
/// 802.11n/ac negotiate either the normal 0.8 µs interval or the short
/// 0.4 µs one; 802.11ax/be replace the short option with extended 1.6 µs
/// and 3.2 µs intervals selected by an index on the bitrate line.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum GuardInterval {
    /// 0.4 µs
    Short,
    /// 0.8 µs
    #[default]
    Normal,
    /// 1.6 µs
    Long,
    /// 3.2 µs
    ExtraLong,
}

impl GuardInterval {
    /// Interval length in microseconds.
    pub const fn micros(&self) -> f64 {
        match self {
            GuardInterval::Short => 0.4,
            GuardInterval::Normal => 0.8,
            GuardInterval::Long => 1.6,
            GuardInterval::ExtraLong => 3.2,
        }
    }

    /// Decode the HE/EHT guard-interval index from a bitrate line.
    ///
    /// An absent or unrecognized index decodes as `Normal`, matching what the
    /// radio falls back to.
    pub const fn from_he_index(index: Option<u32>) -> Self {
        match index {
            Some(1) => GuardInterval::Long,
            Some(2) => GuardInterval::ExtraLong,
            _ => GuardInterval::Normal,
        }
    }

    /// Decode the binary short-GI annotation used by 802.11n/ac lines.
    pub const fn from_short_gi(short: bool) -> Self {
        if short { GuardInterval::Short } else { GuardInterval::Normal }
    }
}
