//! Pixel-to-geographic projection seam.

use serde::{Deserialize, Serialize};
use weather_map_geography_models::GeoPoint;

/// A pixel position on the rendered map surface, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Pixels right of the surface's left edge.
    pub x: f64,
    /// Pixels below the surface's top edge.
    pub y: f64,
}

impl PixelPoint {
    /// Creates a pixel position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Inverse-projection capability of a rendering surface.
pub trait MapProjection {
    /// Converts a pixel position on the primary map to geographic
    /// coordinates. Returns `None` when the pixel lies outside the
    /// projectable area.
    fn unproject(&self, pixel: PixelPoint) -> Option<GeoPoint>;
}

/// Equirectangular mapping of a rectangular drawing area onto a
/// longitude/latitude window. This is the projection of the terminal
/// surface; richer surfaces bring their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearViewport {
    width: f64,
    height: f64,
    west: f64,
    east: f64,
    south: f64,
    north: f64,
}

impl LinearViewport {
    /// Creates a viewport of `width` x `height` pixels spanning the given
    /// geographic window.
    #[must_use]
    pub const fn new(
        width: f64,
        height: f64,
        west: f64,
        east: f64,
        south: f64,
        north: f64,
    ) -> Self {
        Self {
            width,
            height,
            west,
            east,
            south,
            north,
        }
    }

    /// Viewport spanning the mainland China extent (lon 73..135, lat 18..54).
    #[must_use]
    pub const fn china(width: f64, height: f64) -> Self {
        Self::new(width, height, 73.0, 135.0, 18.0, 54.0)
    }
}

impl MapProjection for LinearViewport {
    fn unproject(&self, pixel: PixelPoint) -> Option<GeoPoint> {
        if !(0.0..=self.width).contains(&pixel.x) || !(0.0..=self.height).contains(&pixel.y) {
            return None;
        }

        let lon = self.west + (pixel.x / self.width) * (self.east - self.west);
        let lat = self.north - (pixel.y / self.height) * (self.north - self.south);

        Some(GeoPoint::new(lat, lon))
    }
}
