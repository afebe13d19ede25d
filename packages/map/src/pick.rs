//! Coordinate picking from map clicks.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;
use weather_map_geography::BoundaryDataset;
use weather_map_geography_models::GeoPoint;

use crate::project::{MapProjection, PixelPoint};

/// Which logical map series a click landed on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MapSeries {
    /// The primary mainland map.
    Main,
    /// The detached islands inset.
    Inset,
}

/// A click event emitted by the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapClick {
    /// Which logical series was clicked.
    pub series: MapSeries,
    /// Clicked region's display name, when the click hit a region.
    pub region: Option<String>,
    /// Raw pixel position of the click.
    pub pixel: PixelPoint,
}

/// Why a pick produced no coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    /// The click landed on the non-interactive inset.
    #[error("The inset region is not pick-interactive")]
    OutOfRegion,

    /// The surface has no inverse projection.
    #[error("The map surface has no inverse projection")]
    NoProjection,

    /// Inverse projection yielded no result for the pixel.
    #[error("Pixel position does not map to a geographic coordinate")]
    NoCoordinate,

    /// Inverse projection yielded a non-finite coordinate.
    #[error("Pixel position mapped to a non-finite coordinate")]
    NonFinite,
}

/// Translates a click's pixel position into geographic coordinates.
///
/// Only the primary series is pick-interactive. Inset clicks are rejected
/// rather than projected: the inset sits wherever the layout puts it, so a
/// projection of its pixels would yield a coordinate with no relation to
/// the islands it depicts.
///
/// # Errors
///
/// Returns [`PickError`] when the click is out of region, no projection is
/// available, or the projection yields no finite coordinate.
pub fn pick_coordinate(
    click: &MapClick,
    projection: Option<&dyn MapProjection>,
    dataset: &BoundaryDataset,
) -> Result<GeoPoint, PickError> {
    if click.series == MapSeries::Inset {
        return Err(PickError::OutOfRegion);
    }

    if click
        .region
        .as_deref()
        .is_some_and(|name| dataset.is_inset(name))
    {
        return Err(PickError::OutOfRegion);
    }

    let projection = projection.ok_or(PickError::NoProjection)?;
    let point = projection
        .unproject(click.pixel)
        .ok_or(PickError::NoCoordinate)?;

    if !point.is_finite() {
        return Err(PickError::NonFinite);
    }

    Ok(point)
}
