//! Declarative scene descriptions consumed by rendering surfaces.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use weather_map_dashboard_models::ForecastPoint;
use weather_map_geography::{AliasIndex, BoundaryDataset};
use weather_map_geography_models::GeoPoint;
use weather_map_warning_models::WarningSeverity;

/// Fill instruction for one named region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionFill {
    /// Region display name as the boundary dataset spells it.
    pub name: String,
    /// Severity fill value, 1-4; 0 means "no data" and renders as the
    /// neutral fill outside the severity color ramp.
    pub value: u8,
}

/// Everything a surface needs to draw the warning map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapScene {
    /// Mainland regions with their fill values.
    pub main_regions: Vec<RegionFill>,
    /// Inset regions, drawn apart from the mainland and never interactive.
    pub inset_regions: Vec<RegionFill>,
    /// Region to draw with the prominent focus border, if any. The fill
    /// value stays whatever the risk gives it; only the border differs.
    pub highlighted: Option<String>,
    /// Marker for the currently selected location.
    pub marker: GeoPoint,
}

/// Composes the map scene from the aggregated risk and the focus state.
///
/// Every region in the dataset appears exactly once, in dataset order, so
/// a surface can diff successive scenes cheaply. Inset regions always carry
/// fill value 0.
#[must_use]
pub fn compose_scene(
    dataset: &BoundaryDataset,
    aliases: &AliasIndex,
    risk: &BTreeMap<String, WarningSeverity>,
    focus_province: Option<&str>,
    marker: GeoPoint,
) -> MapScene {
    let main_regions = dataset
        .main_regions()
        .iter()
        .map(|name| RegionFill {
            name: name.clone(),
            value: risk.get(name.as_str()).map_or(0, |severity| severity.value()),
        })
        .collect();

    let inset_regions = dataset
        .inset_regions()
        .iter()
        .map(|name| RegionFill {
            name: name.clone(),
            value: 0,
        })
        .collect();

    let highlighted =
        focus_province.map(|province| aliases.resolve_boundary_name(province).to_string());

    MapScene {
        main_regions,
        inset_regions,
        highlighted,
        marker,
    }
}

/// Axis-ready view of the forecast series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastScene {
    /// Forecast validity times, in feed order.
    pub times: Vec<DateTime<Utc>>,
    /// Temperature series in degrees Celsius, parallel to `times`.
    pub temperature_c: Vec<f64>,
    /// Humidity series in percent, parallel to `times`.
    pub humidity_pct: Vec<f64>,
}

impl ForecastScene {
    /// Splits forecast points into the parallel series a chart consumes.
    #[must_use]
    pub fn from_points(points: &[ForecastPoint]) -> Self {
        Self {
            times: points.iter().map(|p| p.forecast_time).collect(),
            temperature_c: points.iter().map(|p| p.temperature_c).collect(),
            humidity_pct: points.iter().map(|p| p.humidity_pct).collect(),
        }
    }
}
