//! In-memory diagnostic source serving fixed dumps.

use std::time::Duration;

use crate::Result;
use crate::provider::DiagnosticSource;

/// Source that serves the same dumps on every poll.
///
/// Useful for tests and demos; also the natural adapter when the embedding
/// application captures text itself and only needs the parsing pipeline.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    link: Option<String>,
    scan: Option<String>,
    poll_interval: Duration,
}

impl FixedSource {
    /// Create a source from optional link and scan dumps.
    pub fn new(link: Option<String>, scan: Option<String>) -> Self {
        Self { link, scan, poll_interval: Duration::from_millis(10) }
    }

    /// Override the suggested poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

#[async_trait::async_trait]
impl DiagnosticSource for FixedSource {
    async fn link_status(&mut self) -> Result<Option<String>> {
        Ok(Some(self.link.clone().unwrap_or_default()))
    }

    async fn scan_dump(&mut self) -> Result<Option<String>> {
        Ok(self.scan.clone())
    }

    fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}
