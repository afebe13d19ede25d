//! CLI configuration: defaults, an optional TOML file, and `WEATHER_MAP_*`
//! environment overrides, in that order. Command-line flags are applied on
//! top by `main`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use weather_map_client::GatewayConfig;

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which position source the locate action uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeolocationSource {
    /// Approximate position from the machine's public IP. City-level
    /// precision, which is plenty for a province-scoped dashboard.
    #[default]
    Ip,
    /// No position source; the locate action reports it is unsupported.
    Disabled,
}

/// Dashboard CLI settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend origin serving `POST /api/v1/dashboard`.
    pub backend_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Boundary GeoJSON file; the built-in region table is used when unset.
    pub boundaries: Option<PathBuf>,
    /// Position source for the locate action.
    pub geolocation: GeolocationSource,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 10,
            boundaries: None,
            geolocation: GeolocationSource::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config file when one is given, then applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// * If the config file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("WEATHER_MAP_BACKEND_URL") {
            self.backend_url = url;
        }
        if let Some(secs) = std::env::var("WEATHER_MAP_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
        {
            self.timeout_secs = secs;
        }
        if let Ok(path) = std::env::var("WEATHER_MAP_BOUNDARIES") {
            self.boundaries = Some(PathBuf::from(path));
        }
        if let Ok(raw) = std::env::var("WEATHER_MAP_GEOLOCATION") {
            match raw.to_ascii_lowercase().as_str() {
                "ip" => self.geolocation = GeolocationSource::Ip,
                "disabled" => self.geolocation = GeolocationSource::Disabled,
                other => log::warn!(
                    "Unknown WEATHER_MAP_GEOLOCATION value {other:?}; keeping {:?}",
                    self.geolocation
                ),
            }
        }
    }

    /// Gateway settings derived from this config.
    #[must_use]
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            base_url: self.backend_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            backend_url = "http://weather.internal:9000"
            timeout_secs = 30
            boundaries = "data/china.json"
            geolocation = "disabled"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend_url, "http://weather.internal:9000");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.boundaries, Some(PathBuf::from("data/china.json")));
        assert_eq!(config.geolocation, GeolocationSource::Disabled);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str(r#"backend_url = "http://backend:8000""#).unwrap();

        assert_eq!(config.backend_url, "http://backend:8000");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.boundaries, None);
        assert_eq!(config.geolocation, GeolocationSource::Ip);
    }

    #[test]
    fn maps_onto_gateway_settings() {
        let config = AppConfig {
            backend_url: "http://backend:8000".to_string(),
            timeout_secs: 3,
            ..AppConfig::default()
        };

        let gateway = config.gateway_config();

        assert_eq!(gateway.base_url, "http://backend:8000");
        assert_eq!(gateway.timeout, Duration::from_secs(3));
    }
}
