//! Error types for the collaborator boundary.
//!
//! The parsers in this crate never fail: malformed diagnostic text degrades
//! to absent fields and an `Unknown` generation. Errors exist only at the
//! boundary where text is obtained — a diagnostic tool that is missing, a
//! fixture file that cannot be read, a collaborator that timed out. The
//! monitor maps every one of these to the same empty-input path the parsers
//! already handle, so nothing in this crate is fatal.
//!
//! ## Recovery and Retry
//!
//! Errors report whether retrying is worthwhile:
//!
//! ```rust
//! use linklens::TelemetryError;
//!
//! let error = TelemetryError::source_failed("iw exited with status 255");
//! if error.is_retryable() {
//!     // back off and poll again
//! }
//! ```

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for telemetry operations.
pub type Result<T, E = TelemetryError> = std::result::Result<T, E>;

/// Main error type for telemetry operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TelemetryError {
    #[error("Diagnostic source failed: {reason}")]
    Source {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Capture file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Operation timed out after {duration:?}")]
    Timeout { duration: Duration },
}

impl TelemetryError {
    /// Returns whether this error is potentially recoverable through retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            TelemetryError::Source { .. } => true,
            TelemetryError::Timeout { .. } => true,
            TelemetryError::File { .. } => false,
            TelemetryError::Parse { .. } => false,
        }
    }

    /// Helper constructor for diagnostic-source failures.
    pub fn source_failed(reason: impl Into<String>) -> Self {
        TelemetryError::Source { reason: reason.into(), source: None }
    }

    /// Helper constructor for diagnostic-source failures with a cause.
    pub fn source_failed_with(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        TelemetryError::Source { reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for capture-file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        TelemetryError::File { path, source }
    }

    /// Helper constructor for parse errors with context.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        TelemetryError::Parse { context: context.into(), details: details.into() }
    }
}

impl From<std::io::Error> for TelemetryError {
    fn from(err: std::io::Error) -> Self {
        TelemetryError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    use proptest::prelude::*;

    #[test]
    fn error_constructors_validation() {
        let file_error = TelemetryError::file_error(
            PathBuf::from("/test"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "test"),
        );
        assert!(matches!(file_error, TelemetryError::File { .. }));

        let source_error = TelemetryError::source_failed("test");
        assert!(matches!(source_error, TelemetryError::Source { .. }));

        let parse_error = TelemetryError::parse_error("scan dump", "truncated block");
        assert!(matches!(parse_error, TelemetryError::Parse { .. }));
    }

    #[test]
    fn error_traits_validation() {
        // Compile-time check: TelemetryError must be Send + Sync + 'static
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<TelemetryError>();

        let error = TelemetryError::source_failed("test");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn retryability_classification() {
        assert!(TelemetryError::source_failed("tool missing").is_retryable());
        assert!(TelemetryError::Timeout { duration: Duration::from_secs(2) }.is_retryable());
        assert!(!TelemetryError::parse_error("x", "y").is_retryable());
        assert!(
            !TelemetryError::file_error(
                PathBuf::from("/test"),
                std::io::Error::new(std::io::ErrorKind::NotFound, "test"),
            )
            .is_retryable()
        );
    }

    #[test]
    fn from_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no capture");
        let telemetry_err: TelemetryError = io_err.into();

        match telemetry_err {
            TelemetryError::File { source, .. } => {
                assert_eq!(source.to_string(), "no capture");
            }
            _ => panic!("Expected File error variant"),
        }
    }

    proptest! {
        #[test]
        fn prop_error_messages_contain_their_context(
            reason in ".*",
            context in "\\w+",
            details in ".*",
            duration_ms in 1u64..60000u64
        ) {
            let source_error = TelemetryError::Source { reason: reason.clone(), source: None };
            let parse_error =
                TelemetryError::Parse { context: context.clone(), details: details.clone() };
            let timeout_error =
                TelemetryError::Timeout { duration: Duration::from_millis(duration_ms) };

            prop_assert!(source_error.to_string().contains(&reason));
            prop_assert!(parse_error.to_string().contains(&context));
            prop_assert!(parse_error.to_string().contains(&details));
            prop_assert!(!timeout_error.to_string().is_empty());
        }

        #[test]
        fn prop_error_source_chaining_preserves_the_base_cause(
            base_message in "[a-z ]{1,40}",
            reasons in prop::collection::vec("[a-z ]{1,20}", 1..4)
        ) {
            let mut current: Box<dyn std::error::Error + Send + Sync> =
                Box::new(std::io::Error::other(base_message.clone()));
            for reason in &reasons {
                current = Box::new(TelemetryError::Source {
                    reason: reason.clone(),
                    source: Some(current),
                });
            }
            let top = TelemetryError::Source { reason: "top".to_string(), source: Some(current) };

            let mut found = false;
            let mut next = std::error::Error::source(&top);
            while let Some(err) = next {
                if err.to_string().contains(&base_message) {
                    found = true;
                }
                next = std::error::Error::source(err);
            }
            prop_assert!(found, "base cause '{}' lost in chain", base_message);
        }
    }
}
