//! Test utilities for consistent fixture path resolution.
//!
//! Captured diagnostic dumps live under `test-data/` at the crate root.
//! Tests and benches resolve them through these helpers so the working
//! directory at invocation time does not matter.

#![cfg(any(test, feature = "benchmark"))]

use std::path::{Path, PathBuf};

/// Guidance shown when a capture fixture is missing from the checkout.
pub const FIXTURE_INSTALL_GUIDANCE: &str =
    "Capture fixtures are stored under test-data/. Check out the full repository to get them.";

/// Error returned when a required capture fixture cannot be located.
#[derive(Debug, Clone)]
pub struct FixtureError {
    message: String,
}

impl FixtureError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FixtureError {}

/// Require that a capture fixture exists on disk.
///
/// Relative paths resolve against the crate root, so tests behave the same
/// from the workspace root and from the package directory.
pub fn require_fixture<P: AsRef<Path>>(path: P) -> Result<PathBuf, FixtureError> {
    let path_ref = path.as_ref();
    let resolved = if path_ref.is_absolute() {
        path_ref.to_path_buf()
    } else {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(path_ref)
    };
    if resolved.exists() {
        Ok(resolved)
    } else {
        Err(FixtureError::new(format!(
            "Missing capture fixture: {}. {}",
            resolved.display(),
            FIXTURE_INSTALL_GUIDANCE
        )))
    }
}

/// Read a capture fixture to a string, panicking with install guidance when
/// it is absent. Test-only convenience.
pub fn read_fixture<P: AsRef<Path>>(path: P) -> String {
    let resolved = require_fixture(path).unwrap_or_else(|e| panic!("{e}"));
    std::fs::read_to_string(&resolved)
        .unwrap_or_else(|e| panic!("Unreadable fixture {}: {e}", resolved.display()))
}
