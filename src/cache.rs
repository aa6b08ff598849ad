//! Last-known generation per access point.
//!
//! Scan dumps are the only place an access point's generation can be read
//! before associating with it, and scans fail transiently: an empty dump
//! usually means the radio was busy, not that every network vanished. The
//! cache therefore replaces its mapping wholesale on each successful parse
//! and refuses to regress to an emptier one.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

use crate::types::WifiGeneration;

/// Process-wide BSSID → generation snapshot.
///
/// Readers load the current snapshot without blocking; the single writer
/// swaps in a complete replacement. A reader always observes one coherent
/// mapping, never a partial update.
#[derive(Debug, Default)]
pub struct GenerationCache {
    snapshot: ArcSwap<HashMap<String, WifiGeneration>>,
}

impl GenerationCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last generation observed for a BSSID, `Unknown` if never seen.
    /// Matching is case-insensitive; stored keys are lower-case.
    pub fn lookup(&self, bssid: &str) -> WifiGeneration {
        let snapshot = self.snapshot.load();
        if let Some(generation) = snapshot.get(bssid) {
            return *generation;
        }
        // Callers that already lower-cased their key skip the allocation
        snapshot.get(&bssid.to_ascii_lowercase()).copied().unwrap_or_default()
    }

    /// Replace the whole mapping with a freshly parsed one.
    ///
    /// An empty mapping is treated as a transient scan failure: the previous
    /// snapshot is kept and `false` is returned.
    pub fn replace(&self, generations: HashMap<String, WifiGeneration>) -> bool {
        if generations.is_empty() {
            debug!("ignoring empty scan result, keeping previous generations");
            return false;
        }
        debug!(entries = generations.len(), "replacing generation snapshot");
        self.snapshot.store(Arc::new(generations));
        true
    }

    /// Current snapshot for bulk enrichment of scan results.
    pub fn snapshot(&self) -> Arc<HashMap<String, WifiGeneration>> {
        self.snapshot.load_full()
    }

    /// Number of access points in the current snapshot.
    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    /// Whether no scan has populated the cache yet.
    pub fn is_empty(&self) -> bool {
        self.snapshot.load().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(&str, WifiGeneration)]) -> HashMap<String, WifiGeneration> {
        entries.iter().map(|(bssid, generation)| (bssid.to_string(), *generation)).collect()
    }

    #[test]
    fn lookup_on_a_fresh_cache_is_unknown() {
        let cache = GenerationCache::new();
        assert_eq!(cache.lookup("d8:47:32:a1:b2:c3"), WifiGeneration::Unknown);
        assert!(cache.is_empty());
    }

    #[test]
    fn replace_swaps_the_whole_mapping() {
        let cache = GenerationCache::new();
        assert!(cache.replace(mapping(&[
            ("aa:bb:cc:dd:ee:01", WifiGeneration::Wifi6),
            ("aa:bb:cc:dd:ee:02", WifiGeneration::Wifi4),
        ])));
        assert_eq!(cache.lookup("aa:bb:cc:dd:ee:01"), WifiGeneration::Wifi6);
        assert_eq!(cache.len(), 2);

        assert!(cache.replace(mapping(&[("aa:bb:cc:dd:ee:03", WifiGeneration::Wifi7)])));
        assert_eq!(cache.lookup("aa:bb:cc:dd:ee:03"), WifiGeneration::Wifi7);
        // Wholesale replacement: entries absent from the new scan are gone
        assert_eq!(cache.lookup("aa:bb:cc:dd:ee:01"), WifiGeneration::Unknown);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn empty_replacement_keeps_previous_knowledge() {
        let cache = GenerationCache::new();
        cache.replace(mapping(&[("aa:bb:cc:dd:ee:01", WifiGeneration::Wifi5)]));

        assert!(!cache.replace(HashMap::new()));
        assert_eq!(cache.lookup("aa:bb:cc:dd:ee:01"), WifiGeneration::Wifi5);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let cache = GenerationCache::new();
        cache.replace(mapping(&[("aa:bb:cc:dd:ee:01", WifiGeneration::Wifi6)]));
        assert_eq!(cache.lookup("AA:BB:CC:DD:EE:01"), WifiGeneration::Wifi6);
    }

    #[test]
    fn snapshot_is_stable_across_a_concurrent_replace() {
        let cache = GenerationCache::new();
        cache.replace(mapping(&[("aa:bb:cc:dd:ee:01", WifiGeneration::Wifi4)]));

        let before = cache.snapshot();
        cache.replace(mapping(&[("aa:bb:cc:dd:ee:02", WifiGeneration::Wifi7)]));

        // The held snapshot still reflects the state at load time
        assert_eq!(before.get("aa:bb:cc:dd:ee:01"), Some(&WifiGeneration::Wifi4));
        assert!(!before.contains_key("aa:bb:cc:dd:ee:02"));
        assert_eq!(cache.lookup("aa:bb:cc:dd:ee:02"), WifiGeneration::Wifi7);
    }
}
