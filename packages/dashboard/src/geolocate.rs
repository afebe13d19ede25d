//! Device geolocation seam.
//!
//! The engine never talks to positioning hardware directly; a driver plugs in
//! whatever source it has (IP lookup, GPS daemon, a fixed test point) behind
//! [`GeolocationProvider`]. A successful fix only ever feeds
//! [`crate::DashboardState::apply_geolocation`]; failures stay with the driver
//! so dashboard state is untouched by construction.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use weather_map_geography_models::GeoPoint;

/// Why a position fix could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocateError {
    #[error("positioning permission was denied")]
    PermissionDenied,
    #[error("positioning timed out")]
    Timeout,
    #[error("positioning unavailable: {message}")]
    Unavailable { message: String },
}

/// A source of device position fixes.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Resolves the device's current coordinate.
    ///
    /// # Errors
    ///
    /// * If the user or platform refused the position request.
    /// * If no fix could be produced.
    async fn locate(&self) -> Result<GeoPoint, GeolocateError>;
}

/// Resolves a position fix, giving up after `wait`.
///
/// # Errors
///
/// * `GeolocateError::Timeout` if the provider takes longer than `wait`.
/// * Whatever the provider itself returns.
pub async fn locate_within(
    provider: &dyn GeolocationProvider,
    wait: Duration,
) -> Result<GeoPoint, GeolocateError> {
    match tokio::time::timeout(wait, provider.locate()).await {
        Ok(result) => result,
        Err(_elapsed) => Err(GeolocateError::Timeout),
    }
}
