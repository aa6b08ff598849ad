//! Text grammars over wireless diagnostic dumps.
//!
//! The diagnostic tooling prints for humans, not machines: field names vary
//! across driver generations, tokens are optional, and truncated output is
//! routine. Every grammar here is therefore tolerant by construction —
//! unrecognized lines are skipped, missing tokens leave their field absent,
//! and no parser in this module has an error path.

pub mod link_status;
pub mod rate_line;
pub mod scan_dump;

pub use link_status::parse_link_status;
pub use rate_line::{RateLineModulation, detect_rate_line};
pub use scan_dump::parse_scan_dump;

/// First whitespace-separated token after `marker`, parsed as an integer.
pub(crate) fn int_after(line: &str, marker: &str) -> Option<u32> {
    let rest = &line[line.find(marker)? + marker.len()..];
    rest.split_whitespace().next()?.parse().ok()
}

/// Numeric token immediately preceding `suffix`, attached or space-separated.
pub(crate) fn number_before(line: &str, suffix: &str) -> Option<f64> {
    let head = line[..line.find(suffix)?].trim_end();
    let start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.' || *c == '-')
        .last()
        .map(|(i, _)| i)?;
    head[start..].parse().ok()
}

/// Digit run immediately preceding `suffix`, parsed as an integer.
pub(crate) fn int_before(line: &str, suffix: &str) -> Option<u32> {
    let head = line[..line.find(suffix)?].trim_end();
    let start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    head[start..].parse().ok()
}

/// Whether a token is a colon-separated MAC address.
pub(crate) fn is_mac_address(token: &str) -> bool {
    let mut groups = 0;
    for group in token.split(':') {
        if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return false;
        }
        groups += 1;
    }
    groups == 6
}
