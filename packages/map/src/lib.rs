#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map scene description, projection seam, and coordinate picking.
//!
//! The engine never draws anything itself. It hands the rendering surface a
//! declarative [`MapScene`] (region fills, one highlighted region, one
//! location marker) and receives [`MapClick`] events back. Translating a
//! click's pixel position into geographic coordinates goes through the
//! [`MapProjection`] capability of whatever surface is attached.

pub mod pick;
pub mod project;
pub mod scene;

pub use pick::{MapClick, MapSeries, PickError, pick_coordinate};
pub use project::{LinearViewport, MapProjection, PixelPoint};
pub use scene::{ForecastScene, MapScene, RegionFill, compose_scene};
