//! Monitor spawns and manages the telemetry polling task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace, warn};

use crate::cache::GenerationCache;
use crate::parser::{parse_link_status, parse_scan_dump};
use crate::provider::DiagnosticSource;
use crate::types::LinkInfo;

/// Polling configuration for the monitor task.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Delay between link-status polls. `None` uses the source's own
    /// suggestion.
    pub link_interval: Option<Duration>,
    /// Delay between scan-dump polls.
    pub scan_interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self { link_interval: None, scan_interval: Duration::from_secs(30) }
    }
}

/// Result of spawning the monitor task.
pub struct MonitorChannels {
    /// Receiver for link-state snapshots. Starts at the disconnected record.
    pub links: watch::Receiver<Arc<LinkInfo>>,
    /// Shared generation knowledge, refreshed from scan polls.
    pub generations: Arc<GenerationCache>,
    /// Cancellation token for graceful shutdown.
    pub cancel: CancellationToken,
}

impl MonitorChannels {
    /// Link snapshots as an async stream, for consumers that prefer
    /// `StreamExt` combinators over the raw watch receiver.
    pub fn link_stream(&self) -> WatchStream<Arc<LinkInfo>> {
        WatchStream::new(self.links.clone())
    }
}

/// Monitor spawns and manages the telemetry polling task.
///
/// One task owns the [`DiagnosticSource`], parses each link-status dump into
/// a [`LinkInfo`] published over a watch channel, and refreshes the shared
/// [`GenerationCache`] from periodic scan polls. A failing source degrades
/// to the disconnected record rather than tearing anything down.
pub struct Monitor;

impl Monitor {
    /// Spawn the polling task for the given source.
    ///
    /// Returns the watch receiver, the shared generation cache, and a
    /// cancellation token for shutdown. Requires a running tokio runtime.
    pub fn spawn<S>(source: S, config: MonitorConfig) -> MonitorChannels
    where
        S: DiagnosticSource,
    {
        let (link_tx, link_rx) = watch::channel(Arc::new(LinkInfo::default()));
        let generations = Arc::new(GenerationCache::new());
        let cancel = CancellationToken::new();

        let cancel_task = cancel.clone();
        let generations_task = Arc::clone(&generations);
        tokio::spawn(async move {
            Self::poll_task(source, config, link_tx, generations_task, cancel_task).await;
        });

        MonitorChannels { links: link_rx, generations, cancel }
    }

    /// Polling task - reads dumps, publishes records, refreshes the cache.
    async fn poll_task<S>(
        mut source: S,
        config: MonitorConfig,
        link_tx: watch::Sender<Arc<LinkInfo>>,
        generations: Arc<GenerationCache>,
        cancel: CancellationToken,
    ) where
        S: DiagnosticSource,
    {
        info!("Telemetry poll task started");
        let link_interval = config.link_interval.unwrap_or_else(|| source.poll_interval());
        let mut poll_count = 0u64;
        let mut error_count = 0u32;
        let mut next_scan = Instant::now();
        const MAX_ERRORS: u32 = 10;

        loop {
            if cancel.is_cancelled() {
                info!("Poll task cancelled");
                break;
            }

            // Scan polls ride the link cadence; they are only due every
            // scan_interval and a failure never disturbs link publishing.
            if Instant::now() >= next_scan {
                next_scan = Instant::now() + config.scan_interval;
                match source.scan_dump().await {
                    Ok(Some(dump)) => {
                        let parsed = parse_scan_dump(&dump);
                        if generations.replace(parsed) {
                            debug!(entries = generations.len(), "Generation snapshot refreshed");
                        }
                    }
                    Ok(None) => {
                        trace!("Source has no scan data");
                    }
                    Err(e) => {
                        // Previous generation knowledge stays in place
                        warn!("Scan poll failed: {}", e);
                    }
                }
            }

            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Poll task cancelled during read");
                    break;
                }
                result = source.link_status() => result,
            };

            match result {
                Ok(Some(dump)) => {
                    poll_count += 1;
                    error_count = 0;
                    let info = Arc::new(parse_link_status(&dump));
                    trace!(
                        "Poll {}: generation={:?}, connected={}",
                        poll_count,
                        info.generation,
                        info.is_connected()
                    );
                    if link_tx.send(info).is_err() {
                        debug!("Link receiver dropped, shutting down");
                        break;
                    }
                }
                Ok(None) => {
                    info!("Source ended after {} polls", poll_count);
                    let _ = link_tx.send(Arc::new(LinkInfo::default()));
                    break;
                }
                Err(e) => {
                    // A missing or failing tool reads as a disconnected link,
                    // exactly like empty text would
                    error_count += 1;
                    warn!("Source error ({}/{}): {}", error_count, MAX_ERRORS, e);
                    if link_tx.send(Arc::new(LinkInfo::default())).is_err() {
                        debug!("Link receiver dropped, shutting down");
                        break;
                    }

                    if error_count >= MAX_ERRORS {
                        error!("Too many source errors, shutting down");
                        break;
                    }

                    // Exponential backoff: 50ms, 100ms, 200ms, ...
                    let backoff = Duration::from_millis(50 * (1 << error_count.min(5)));
                    tokio::time::sleep(backoff).await;
                }
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Poll task cancelled between polls");
                    break;
                }
                _ = tokio::time::sleep(link_interval) => {}
            }
        }

        info!("Telemetry poll task ended ({} polls)", poll_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use crate::types::WifiGeneration;

    /// Source that fails a fixed number of times before recovering.
    struct FlakySource {
        failures_left: u32,
        link: String,
    }

    #[async_trait::async_trait]
    impl DiagnosticSource for FlakySource {
        async fn link_status(&mut self) -> Result<Option<String>> {
            if self.failures_left > 0 {
                self.failures_left -= 1;
                return Err(crate::TelemetryError::source_failed("tool unavailable"));
            }
            Ok(Some(self.link.clone()))
        }

        async fn scan_dump(&mut self) -> Result<Option<String>> {
            Ok(None)
        }

        fn poll_interval(&self) -> Duration {
            Duration::from_millis(1)
        }
    }

    #[tokio::test]
    async fn failures_publish_the_disconnected_record_then_recover() {
        let source = FlakySource {
            failures_left: 1,
            link: "\tfreq: 5180\n\tsignal: -52 dBm\n".to_owned(),
        };
        let mut channels = Monitor::spawn(source, MonitorConfig::default());

        // The watch starts at the disconnected record; the failure publish
        // keeps it there
        assert_eq!(channels.links.borrow().generation, WifiGeneration::Unknown);

        // After the source recovers, the legacy 5 GHz fallback kicks in
        loop {
            channels.links.changed().await.unwrap();
            let generation = channels.links.borrow().generation;
            if generation != WifiGeneration::Unknown {
                assert_eq!(generation, WifiGeneration::Wifi2);
                break;
            }
        }

        channels.cancel.cancel();
    }

    #[tokio::test]
    async fn cancellation_stops_publishing() {
        let source = FlakySource { failures_left: 0, link: String::new() };
        let mut channels = Monitor::spawn(source, MonitorConfig::default());

        channels.links.changed().await.unwrap();
        channels.cancel.cancel();

        // Drain any in-flight publishes; once the task observes cancellation
        // the sender is dropped and changed() reports closure
        while channels.links.changed().await.is_ok() {}
    }
}
