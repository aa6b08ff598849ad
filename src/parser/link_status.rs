//! Link-status dump parser.
//!
//! Turns the text of one link-status dump into a [`LinkInfo`]. The grammar
//! is line-oriented and order-insensitive: each recognized prefix is matched
//! independently, malformed lines are skipped, and anything the dump does not
//! mention stays absent. This parser cannot fail — partial diagnostic output
//! produces a partial record, never an error.

use crate::types::{
    BitrateMbps, ChannelWidthMhz, FrequencyMhz, LinkInfo, SignalDbm, WifiGeneration,
};

use super::rate_line::{RateLineModulation, detect_rate_line};
use super::{int_before, is_mac_address, number_before};

/// Parse a complete link-status dump.
///
/// Empty input and the tool's `Not connected` marker both produce the
/// all-absent disconnected record.
pub fn parse_link_status(text: &str) -> LinkInfo {
    if text.trim().is_empty() || text.contains("Not connected") {
        return LinkInfo::default();
    }

    let mut info = LinkInfo::default();
    let mut tx = RateLineModulation::default();
    let mut rx = RateLineModulation::default();
    let mut tx_width = None;
    let mut rx_width = None;

    for raw in text.lines() {
        let line = raw.trim();
        if let Some(rest) = line.strip_prefix("SSID:") {
            let ssid = rest.trim();
            if !ssid.is_empty() {
                info.ssid = Some(ssid.to_owned());
            }
        } else if let Some(rest) = line.strip_prefix("Connected to ") {
            if let Some(mac) = rest.split_whitespace().next() {
                if is_mac_address(mac) {
                    info.bssid = Some(mac.to_owned());
                }
            }
        } else if let Some(rest) = line.strip_prefix("freq:") {
            info.frequency = rest
                .split_whitespace()
                .next()
                .and_then(|token| token.parse().ok())
                .map(FrequencyMhz::new);
        } else if let Some(rest) = line.strip_prefix("signal:") {
            info.signal = rest
                .split_whitespace()
                .next()
                .and_then(|token| token.parse().ok())
                .map(SignalDbm::new);
        } else if let Some(rest) = line.strip_prefix("tx bitrate:") {
            info.tx_bitrate = number_before(rest, "MBit/s").map(BitrateMbps::new);
            tx_width = int_before(rest, "MHz").map(ChannelWidthMhz::new);
            tx = detect_rate_line(rest);
        } else if let Some(rest) = line.strip_prefix("rx bitrate:") {
            info.rx_bitrate = number_before(rest, "MBit/s").map(BitrateMbps::new);
            rx_width = int_before(rest, "MHz").map(ChannelWidthMhz::new);
            rx = detect_rate_line(rest);
        }
    }

    // Modulation comes from the tx line; rx only fills in when tx carried no
    // usable marker. The numeric bitrates above were already recorded per
    // direction and are unaffected by this choice.
    let modulation = if tx.generation.is_known() { tx } else { rx };
    info.generation = modulation.generation;
    info.mcs = modulation.mcs;
    info.spatial_streams = modulation.spatial_streams;
    info.guard_interval = modulation.guard_interval;
    info.channel_width = tx_width.or(rx_width);

    // Pre-802.11n output has no modulation markers at all; frequency and raw
    // bitrate are the only remaining evidence.
    if !info.generation.is_known() {
        if let Some(freq) = info.frequency {
            if freq.value() >= 5000.0 {
                info.generation = WifiGeneration::Wifi2;
            } else if let Some(max) = info.max_bitrate() {
                if max.value() > 0.0 {
                    info.generation = if max.value() <= 11.0 {
                        WifiGeneration::Wifi1
                    } else {
                        WifiGeneration::Wifi3
                    };
                }
            }
        }
    }

    info.seal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GuardInterval, McsIndex, SpatialStreams, WifiGeneration};

    const HE_LINK: &str = "\
Connected to d8:47:32:a1:b2:c3 (on wlan0)
	SSID: LaccordeonCoworking
	freq: 5220.0
	RX: 102483585 bytes (76963 packets)
	TX: 7093235 bytes (32386 packets)
	signal: -39 dBm
	rx bitrate: 573.5 MBit/s 40MHz HE-MCS 11 HE-NSS 2 HE-GI 0
	tx bitrate: 573.5 MBit/s 40MHz HE-MCS 11 HE-NSS 2 HE-GI 0
";

    #[test]
    fn parses_a_complete_he_link() {
        let info = parse_link_status(HE_LINK);
        assert_eq!(info.generation, WifiGeneration::Wifi6);
        assert_eq!(info.standard.as_deref(), Some("802.11ax"));
        assert_eq!(info.mcs, Some(McsIndex::new(11)));
        assert_eq!(info.spatial_streams, Some(SpatialStreams::new(2)));
        assert_eq!(info.guard_interval, Some(GuardInterval::Normal));
        assert_eq!(info.guard_interval.unwrap().micros(), 0.8);
        assert_eq!(info.channel_width, Some(ChannelWidthMhz::new(40)));
        assert_eq!(info.tx_bitrate, Some(BitrateMbps::new(573.5)));
        assert_eq!(info.rx_bitrate, Some(BitrateMbps::new(573.5)));
        assert_eq!(info.signal, Some(SignalDbm::new(-39)));
        assert_eq!(info.frequency, Some(FrequencyMhz::new(5220.0)));
        assert_eq!(info.ssid.as_deref(), Some("LaccordeonCoworking"));
        assert_eq!(info.bssid.as_deref(), Some("d8:47:32:a1:b2:c3"));
    }

    #[test]
    fn empty_and_not_connected_parse_identically() {
        let empty = parse_link_status("");
        let blank = parse_link_status("  \n\t\n");
        let disconnected = parse_link_status("Not connected.\n");
        assert_eq!(empty, LinkInfo::default());
        assert_eq!(blank, empty);
        assert_eq!(disconnected, empty);
        assert_eq!(empty.generation, WifiGeneration::Unknown);
        assert!(empty.standard.is_none());
    }

    #[test]
    fn line_order_does_not_matter() {
        let reordered = "\
	signal: -39 dBm
	tx bitrate: 573.5 MBit/s 40MHz HE-MCS 11 HE-NSS 2 HE-GI 0
	SSID: LaccordeonCoworking
	freq: 5220.0
	rx bitrate: 573.5 MBit/s 40MHz HE-MCS 11 HE-NSS 2 HE-GI 0
Connected to d8:47:32:a1:b2:c3 (on wlan0)
";
        assert_eq!(parse_link_status(reordered), parse_link_status(HE_LINK));
    }

    #[test]
    fn rx_modulation_applies_only_when_tx_has_no_marker() {
        let text = "\
	freq: 5180
	tx bitrate: 54.0 MBit/s
	rx bitrate: 866.7 MBit/s VHT-MCS 9 80MHz short GI VHT-NSS 2
";
        let info = parse_link_status(text);
        assert_eq!(info.generation, WifiGeneration::Wifi5);
        assert_eq!(info.standard.as_deref(), Some("802.11ac"));
        assert_eq!(info.mcs, Some(McsIndex::new(9)));
        assert_eq!(info.spatial_streams, Some(SpatialStreams::new(2)));
        assert_eq!(info.guard_interval, Some(GuardInterval::Short));
        // Both numeric bitrates survive regardless of which line won
        assert_eq!(info.tx_bitrate, Some(BitrateMbps::new(54.0)));
        assert_eq!(info.rx_bitrate, Some(BitrateMbps::new(866.7)));
        assert_eq!(info.channel_width, Some(ChannelWidthMhz::new(80)));
    }

    #[test]
    fn tx_modulation_shadows_a_marked_rx_line() {
        let text = "\
	tx bitrate: 144.4 MBit/s MCS 15 short GI
	rx bitrate: 866.7 MBit/s VHT-MCS 9 80MHz VHT-NSS 2
";
        let info = parse_link_status(text);
        assert_eq!(info.generation, WifiGeneration::Wifi4);
        assert_eq!(info.mcs, Some(McsIndex::new(15)));
        assert_eq!(info.rx_bitrate, Some(BitrateMbps::new(866.7)));
    }

    #[test]
    fn legacy_fallback_5ghz_is_80211a() {
        let info = parse_link_status("	freq: 5180\n	signal: -60 dBm\n");
        assert_eq!(info.generation, WifiGeneration::Wifi2);
        assert_eq!(info.standard.as_deref(), Some("802.11a"));
    }

    #[test]
    fn legacy_fallback_24ghz_splits_on_11_mbit() {
        let b = parse_link_status("	freq: 2437\n	tx bitrate: 11.0 MBit/s\n");
        assert_eq!(b.generation, WifiGeneration::Wifi1);
        assert_eq!(b.standard.as_deref(), Some("802.11b"));

        let g = parse_link_status("	freq: 2437\n	tx bitrate: 12.0 MBit/s\n");
        assert_eq!(g.generation, WifiGeneration::Wifi3);
        assert_eq!(g.standard.as_deref(), Some("802.11g"));
    }

    #[test]
    fn legacy_fallback_needs_both_frequency_and_bitrate() {
        let no_bitrate = parse_link_status("	freq: 2437\n	signal: -55 dBm\n");
        assert_eq!(no_bitrate.generation, WifiGeneration::Unknown);
        assert!(no_bitrate.standard.is_none());

        let no_freq = parse_link_status("	tx bitrate: 54.0 MBit/s\n	signal: -55 dBm\n");
        assert_eq!(no_freq.generation, WifiGeneration::Unknown);
        assert!(no_freq.standard.is_none());
    }

    #[test]
    fn malformed_lines_are_ignored() {
        let text = "\
Connected to not-a-mac (on wlan0)
	SSID:
	freq: whenever
	signal: loud
	tx bitrate: lots
	garbage line with no prefix
";
        let info = parse_link_status(text);
        assert!(info.bssid.is_none());
        assert!(info.ssid.is_none());
        assert!(info.frequency.is_none());
        assert!(info.signal.is_none());
        assert!(info.tx_bitrate.is_none());
        assert_eq!(info.generation, WifiGeneration::Unknown);
    }

    #[test]
    fn parsing_is_idempotent() {
        assert_eq!(parse_link_status(HE_LINK), parse_link_status(HE_LINK));
    }

    #[test]
    fn integer_frequency_parses_like_the_float_form() {
        let int_form = parse_link_status("	freq: 5220\n");
        let float_form = parse_link_status("	freq: 5220.0\n");
        assert_eq!(int_form.frequency, float_form.frequency);
    }
}
