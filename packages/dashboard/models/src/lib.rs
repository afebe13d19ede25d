#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Request and response types for the dashboard feed.
//!
//! These types mirror the upstream JSON contract field for field. The
//! upstream already uses `snake_case` keys, so no renaming is applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use weather_map_warning_models::Warning;

/// The location a dashboard snapshot is requested for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationQuery {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Free-text address, when one is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Province hint, when one is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

impl LocationQuery {
    /// A bare coordinate query with no address or province hint.
    #[must_use]
    pub const fn at(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            address: None,
            province: None,
        }
    }
}

/// One province entry in the snapshot's province list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceListing {
    /// Province display name.
    pub name: String,
    /// Pinyin initial used for grouping in pickers.
    pub pinyin_initial: String,
    /// Whether the feed flags this province as notable right now.
    pub highlighted: bool,
}

/// One point of the short-term forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Time the forecast is valid for.
    pub forecast_time: DateTime<Utc>,
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Relative humidity in percent.
    pub humidity_pct: f64,
}

/// Everything the dashboard shows for one location, in one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Province the queried location falls in, when the feed knows it.
    pub current_province: Option<String>,
    /// All provinces the feed reports on.
    pub provinces: Vec<ProvinceListing>,
    /// Active weather warnings nationwide.
    pub warnings: Vec<Warning>,
    /// Short-term forecast for the queried location.
    pub forecast_points: Vec<ForecastPoint>,
    /// When the feed last refreshed its own sources.
    pub last_refresh_at: Option<DateTime<Utc>>,
    /// How often the feed refreshes, in minutes.
    pub refresh_interval_minutes: u32,
}
