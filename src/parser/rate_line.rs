//! Generation detection over a single bitrate line.
//!
//! Four generations of drivers annotate bitrate lines differently:
//!
//! ```text
//! tx bitrate: 2882.4 MBit/s 160MHz EHT-MCS 13 EHT-NSS 2 EHT-GI 0   (802.11be)
//! tx bitrate: 573.5 MBit/s 40MHz HE-MCS 11 HE-NSS 2 HE-GI 0        (802.11ax)
//! tx bitrate: 866.7 MBit/s VHT-MCS 9 80MHz short GI VHT-NSS 2      (802.11ac)
//! tx bitrate: 144.4 MBit/s MCS 15 short GI                         (802.11n)
//! ```
//!
//! Matchers run newest-first and the first hit wins. Within one bitrate line
//! only a single grammar ever appears; the ordering matters for capability
//! summaries, where a block advertises several generations at once and must
//! report the newest.

use serde::{Deserialize, Serialize};

use crate::types::{GuardInterval, McsIndex, SpatialStreams, WifiGeneration};

use super::int_after;

/// Modulation parameters recovered from one bitrate line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLineModulation {
    pub generation: WifiGeneration,
    pub mcs: Option<McsIndex>,
    pub spatial_streams: Option<SpatialStreams>,
    pub guard_interval: Option<GuardInterval>,
}

/// Run the detection chain over one line.
///
/// A line with no recognized marker yields `Unknown` with every modulation
/// field absent; the caller decides whether a frequency/bitrate fallback
/// applies.
pub fn detect_rate_line(line: &str) -> RateLineModulation {
    if line.contains("EHT-MCS") {
        RateLineModulation {
            generation: WifiGeneration::Wifi7,
            mcs: int_after(line, "EHT-MCS").map(McsIndex::new),
            spatial_streams: int_after(line, "EHT-NSS").map(SpatialStreams::new),
            guard_interval: Some(GuardInterval::from_he_index(int_after(line, "EHT-GI"))),
        }
    } else if line.contains("HE-MCS") {
        RateLineModulation {
            generation: WifiGeneration::Wifi6,
            mcs: int_after(line, "HE-MCS").map(McsIndex::new),
            spatial_streams: int_after(line, "HE-NSS").map(SpatialStreams::new),
            guard_interval: Some(GuardInterval::from_he_index(int_after(line, "HE-GI"))),
        }
    } else if line.contains("VHT-MCS") {
        RateLineModulation {
            generation: WifiGeneration::Wifi5,
            mcs: int_after(line, "VHT-MCS").map(McsIndex::new),
            spatial_streams: int_after(line, "VHT-NSS").map(SpatialStreams::new),
            guard_interval: Some(GuardInterval::from_short_gi(line.contains("short GI"))),
        }
    } else if let Some(mcs) = bare_mcs_index(line) {
        // 802.11n prints a bare `MCS n` with no stream count; each block of
        // eight indices is one more spatial stream.
        let streams = int_after(line, "NSS")
            .map(SpatialStreams::new)
            .unwrap_or_else(|| mcs.implied_streams());
        RateLineModulation {
            generation: WifiGeneration::Wifi4,
            mcs: Some(mcs),
            spatial_streams: Some(streams),
            guard_interval: Some(GuardInterval::from_short_gi(line.contains("short GI"))),
        }
    } else {
        RateLineModulation::default()
    }
}

/// Index following a bare `MCS` token — one not spelled `XXX-MCS`, which
/// belongs to a newer grammar.
fn bare_mcs_index(line: &str) -> Option<McsIndex> {
    for (idx, _) in line.match_indices("MCS") {
        if idx > 0 && line.as_bytes()[idx - 1] == b'-' {
            continue;
        }
        if let Some(value) = int_after(&line[idx..], "MCS") {
            return Some(McsIndex::new(value));
        }
    }
    None
}
