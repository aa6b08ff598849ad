//! Source trait for diagnostic text.

use std::time::Duration;

use crate::Result;

/// Trait for diagnostic text sources.
///
/// Sources abstract over where the dumps come from (the live wireless
/// tooling, captured files, an in-memory fixture) and handle their own
/// timing internally. The parsers never see a source — they receive the
/// complete text a source produced.
#[async_trait::async_trait]
pub trait DiagnosticSource: Send + 'static {
    /// Get the next link-status dump.
    ///
    /// Returns:
    /// - `Ok(Some(text))` - A dump was captured (possibly empty text)
    /// - `Ok(None)` - Source ended (replay exhausted, normal termination)
    /// - `Err(e)` - Capture failed; the caller degrades to empty input
    async fn link_status(&mut self) -> Result<Option<String>>;

    /// Get the current scan dump.
    ///
    /// Returns:
    /// - `Ok(Some(text))` - A dump was captured
    /// - `Ok(None)` - No scan data available from this source
    /// - `Err(e)` - Capture failed; previous scan knowledge is kept
    async fn scan_dump(&mut self) -> Result<Option<String>>;

    /// Suggested delay between link-status polls for this source.
    fn poll_interval(&self) -> Duration;
}
