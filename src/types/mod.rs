//! Core types for wireless link telemetry.
//!
//! This module provides the foundational data structures of the crate:
//! measurement newtypes, the generation enumeration with its total display
//! mappings, quality tiers, channel geometry, security decoding, and the two
//! immutable output records.
//!
//! ## Architecture
//!
//! - Measurement newtypes in `units` keep quantities from mixing at compile
//!   time; construction is total and performs no validation.
//! - [`WifiGeneration`] is a closed enum whose label/class/icon mappings are
//!   exhaustive `match`es, so adding a generation forces every table to grow.
//! - [`LinkInfo`] and [`ScannedNetwork`] are value records with no shared
//!   state; both are safe to hand across threads or serialize to a frontend.
//! - [`classify_security`] and the quality tiers are pure functions over the
//!   raw values, called by the presentation layer on demand.

mod band;
mod generation;
mod guard;
mod link_info;
mod network;
pub mod nm_flags;
mod quality;
mod security;
mod units;

// Re-export all public types
pub use band::{Band, channel_number};
pub use generation::WifiGeneration;
pub use guard::GuardInterval;
pub use link_info::LinkInfo;
pub use network::{
    AccessPointRecord, STALE_AFTER_SECS, ScannedNetwork, group_by_ssid, is_stale, sort_by_signal,
};
pub use quality::{SignalQuality, SpeedQuality};
pub use units::{BitrateMbps, ChannelWidthMhz, FrequencyMhz, McsIndex, SignalDbm, SpatialStreams};
pub use security::{SecurityFlags, SecurityProtocol, classify_security};
