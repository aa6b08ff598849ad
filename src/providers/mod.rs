//! Diagnostic source implementations.
//!
//! Live capture — running the wireless tooling and collecting its output —
//! belongs to the embedding application. The sources here cover everything
//! else: replaying captured dumps from disk and serving fixed dumps from
//! memory.

pub mod fixed;
pub mod replay;

pub use fixed::FixedSource;
pub use replay::ReplaySource;
