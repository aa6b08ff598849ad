//! Scan-dump parser.
//!
//! A scan dump is a concatenation of per-access-point blocks, each opened by
//! a `BSS <mac>` line and followed by that access point's advertised
//! capability sections. Only the capability-section headers matter here:
//! they are the fastest reliable signal of the newest generation an access
//! point speaks, long before a link to it exists.

use std::collections::HashMap;

use tracing::trace;

use crate::types::WifiGeneration;

use super::is_mac_address;

/// Parse a scan dump into a BSSID → generation mapping.
///
/// BSSIDs are lower-cased; blocks whose leading token is not a MAC address
/// are skipped. An empty dump yields an empty map — the caller decides
/// whether that replaces previous knowledge.
pub fn parse_scan_dump(text: &str) -> HashMap<String, WifiGeneration> {
    let mut generations = HashMap::new();

    let mut current: Option<(String, String)> = None;
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("BSS ") {
            if let Some((bssid, block)) = current.take() {
                generations.insert(bssid, classify_block(&block));
            }
            current = block_bssid(rest).map(|bssid| (bssid, String::new()));
            if current.is_none() {
                trace!(line, "skipping scan block without a parseable BSSID");
            }
        } else if let Some((_, block)) = current.as_mut() {
            block.push_str(line);
            block.push('\n');
        }
    }
    if let Some((bssid, block)) = current {
        generations.insert(bssid, classify_block(&block));
    }

    generations
}

/// Leading MAC of a `BSS` line, lower-cased. The tool may glue an
/// `(on <ifname>)` suffix straight onto the address.
fn block_bssid(rest: &str) -> Option<String> {
    let token = rest.split(|c: char| c.is_whitespace() || c == '(').next()?;
    is_mac_address(token).then(|| token.to_ascii_lowercase())
}

/// Newest generation a capability block advertises.
///
/// Headers are tested newest-first. Once `EHT capabilities` and
/// `VHT capabilities` have both missed, a bare `HT capabilities` hit cannot
/// be the tail of either, so plain containment is sufficient.
fn classify_block(block: &str) -> WifiGeneration {
    if block.contains("EHT capabilities") {
        WifiGeneration::Wifi7
    } else if block.contains("HE capabilities") {
        WifiGeneration::Wifi6
    } else if block.contains("VHT capabilities") {
        WifiGeneration::Wifi5
    } else if block.contains("HT capabilities") {
        WifiGeneration::Wifi4
    } else {
        WifiGeneration::Unknown
    }
}
