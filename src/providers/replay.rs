//! Replay source for captured diagnostic dumps.
//!
//! A capture directory holds the raw output of the wireless tooling, one
//! file per dump kind:
//!
//! ```text
//! capture/
//!   link.txt    link-status dump
//!   scan.txt    scan dump (optional)
//! ```
//!
//! Files are re-read on every poll, so a capture that is being appended to
//! by an external recorder replays as it grows.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::time::{Interval, interval};
use tracing::{debug, info};

use crate::provider::DiagnosticSource;
use crate::{Result, TelemetryError};

const LINK_FILE: &str = "link.txt";
const SCAN_FILE: &str = "scan.txt";

/// Diagnostic source that replays captured dump files.
pub struct ReplaySource {
    link_path: PathBuf,
    scan_path: Option<PathBuf>,
    poll_interval: Duration,
    /// Paces link polls so a monitor on top replays at capture-like speed.
    interval: Interval,
}

impl ReplaySource {
    /// Open a capture directory.
    ///
    /// The link capture must exist; the scan capture is optional and its
    /// absence simply means no generation enrichment during replay.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let link_path = dir.join(LINK_FILE);
        if !link_path.is_file() {
            return Err(TelemetryError::file_error(
                link_path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing link capture"),
            ));
        }

        let scan_path = Some(dir.join(SCAN_FILE)).filter(|path| path.is_file());
        if scan_path.is_none() {
            debug!(dir = %dir.display(), "capture has no scan dump");
        }

        info!(dir = %dir.display(), "opened capture directory");

        let poll_interval = Duration::from_millis(500);
        Ok(Self { link_path, scan_path, poll_interval, interval: interval(poll_interval) })
    }

    /// Override the replay pacing.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self.interval = interval(poll_interval);
        self
    }
}

#[async_trait::async_trait]
impl DiagnosticSource for ReplaySource {
    async fn link_status(&mut self) -> Result<Option<String>> {
        self.interval.tick().await;
        let text = tokio::fs::read_to_string(&self.link_path)
            .await
            .map_err(|e| TelemetryError::file_error(self.link_path.clone(), e))?;
        Ok(Some(text))
    }

    async fn scan_dump(&mut self) -> Result<Option<String>> {
        let Some(path) = &self.scan_path else {
            return Ok(None);
        };
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TelemetryError::file_error(path.clone(), e))?;
        Ok(Some(text))
    }

    fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}
