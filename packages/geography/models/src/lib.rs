#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geographic primitives and fixed province reference tables.
//!
//! [`GeoPoint`] is the coordinate type used everywhere a location flows
//! through the system. The [`capitals`] module carries the hand-maintained
//! representative coordinate per top-level administrative region.

pub mod capitals;

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate pair.
///
/// The location form and every wire payload work at 4-decimal precision
/// (roughly 11 m); [`Self::rounded`] applies that quantization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Rounds both coordinates to 4 decimal places.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            lat: (self.lat * 10_000.0).round() / 10_000.0,
            lon: (self.lon * 10_000.0).round() / 10_000.0,
        }
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}
