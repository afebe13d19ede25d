//! IP-based position source.
//!
//! The browser dashboard asks the platform for a device fix; a terminal has
//! no such API, so the closest stand-in is the machine's public-IP location
//! from the free `ip-api.com` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use weather_map_dashboard::{GeolocateError, GeolocationProvider};
use weather_map_geography_models::GeoPoint;

const ENDPOINT: &str = "http://ip-api.com/json";

/// Fields read from the ip-api.com response.
#[derive(Debug, serde::Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

/// [`GeolocationProvider`] backed by an ip-api.com lookup.
pub struct IpGeolocationProvider {
    client: reqwest::Client,
    timeout: Duration,
}

impl IpGeolocationProvider {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

fn unavailable(message: impl Into<String>) -> GeolocateError {
    GeolocateError::Unavailable {
        message: message.into(),
    }
}

#[async_trait]
impl GeolocationProvider for IpGeolocationProvider {
    async fn locate(&self) -> Result<GeoPoint, GeolocateError> {
        let resp = self
            .client
            .get(ENDPOINT)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|error| unavailable(error.to_string()))?;

        let body = resp
            .text()
            .await
            .map_err(|error| unavailable(error.to_string()))?;
        let parsed: IpApiResponse =
            serde_json::from_str(&body).map_err(|error| unavailable(error.to_string()))?;

        if parsed.status != "success" {
            return Err(unavailable(
                parsed
                    .message
                    .unwrap_or_else(|| "ip-api lookup failed".to_string()),
            ));
        }

        let point = GeoPoint::new(parsed.lat, parsed.lon);
        if !point.is_finite() {
            return Err(unavailable("ip-api returned a non-finite coordinate"));
        }
        Ok(point)
    }
}
