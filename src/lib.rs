//! Modern, type-safe Rust library for wireless link telemetry.
//!
//! Linklens turns the textual diagnostic output of OS wireless tooling into
//! strongly-typed, immutable records: protocol generation, modulation
//! parameters, channel geometry, and signal/speed quality tiers.
//!
//! # Features
//!
//! - **Tolerant parsing**: four generations of bitrate-line grammars, never
//!   a crash on malformed or truncated input
//! - **Type safety**: measurement newtypes keep frequencies, bitrates and
//!   channel widths from mixing at compile time
//! - **Generation cache**: atomically swapped scan knowledge that never
//!   regresses on a transient empty scan
//! - **Async monitoring**: watch-channel publishing with graceful
//!   degradation when the tooling disappears
//!
//! # Quick Start
//!
//! Parsing is pure and needs no runtime:
//!
//! ```rust
//! use linklens::{WifiGeneration, parse_link_status};
//!
//! let info = parse_link_status(
//!     "\tfreq: 5220.0\n\ttx bitrate: 573.5 MBit/s 40MHz HE-MCS 11 HE-NSS 2 HE-GI 0\n",
//! );
//! assert_eq!(info.generation, WifiGeneration::Wifi6);
//! assert_eq!(info.standard.as_deref(), Some("802.11ax"));
//! ```
//!
//! ## Example (continuous monitoring)
//!
//! ```rust,no_run
//! use linklens::{Linklens, MonitorConfig};
//!
//! #[tokio::main]
//! async fn main() -> linklens::Result<()> {
//!     let source = Linklens::replay("capture/")?;
//!     let mut channels = Linklens::monitor(source, MonitorConfig::default());
//!
//!     while channels.links.changed().await.is_ok() {
//!         let info = channels.links.borrow().clone();
//!         println!("{:?} ({:?})", info.generation, info.signal);
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Parsing and classification
pub mod cache;
pub mod parser;

// Stream-based monitoring architecture
pub mod monitor;
pub mod provider;
pub mod providers;

// Core exports
pub use error::*;
pub use types::*;

// Parser exports
pub use cache::GenerationCache;
pub use parser::{parse_link_status, parse_scan_dump};

// Monitoring exports
pub use monitor::{Monitor, MonitorChannels, MonitorConfig};
pub use provider::DiagnosticSource;
pub use providers::{FixedSource, ReplaySource};

/// Unified entry point for Linklens telemetry monitoring.
///
/// This factory provides a consistent API for the common source and monitor
/// combinations; everything it does is also reachable through the underlying
/// modules.
///
/// # Examples
///
/// ## Replay a capture directory
/// ```rust,no_run
/// use linklens::{Linklens, MonitorConfig};
///
/// # #[tokio::main]
/// # async fn main() -> linklens::Result<()> {
/// let source = Linklens::replay("capture/")?;
/// let channels = Linklens::monitor(source, MonitorConfig::default());
/// # Ok(())
/// # }
/// ```
pub struct Linklens;

impl Linklens {
    /// Open a capture directory for replay.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory has no link capture.
    pub fn replay<P: AsRef<std::path::Path>>(path: P) -> Result<ReplaySource> {
        ReplaySource::open(path)
    }

    /// Spawn the monitor task over any diagnostic source.
    ///
    /// Requires a running tokio runtime; see [`Monitor::spawn`].
    pub fn monitor<S: DiagnosticSource>(source: S, config: MonitorConfig) -> MonitorChannels {
        Monitor::spawn(source, config)
    }
}
