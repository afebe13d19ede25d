#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Risk aggregation and warning ranking.
//!
//! Pure functions from a batch of warnings to what the dashboard draws:
//! the per-region maximum severity that colors the map, and the display
//! ordering of the warning list.

pub mod rank;
pub mod risk;

pub use rank::rank_warnings;
pub use risk::aggregate_region_risk;
