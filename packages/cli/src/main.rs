#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal surface for the extreme-weather dashboard.
//!
//! Wires the configured backend gateway, boundary dataset, and position
//! source into a [`weather_map_dashboard::DashboardSession`], then hands
//! control to the interactive menu loop.

mod config;
mod geolocate;
mod interactive;
mod render;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use weather_map_client::HttpDashboardGateway;
use weather_map_dashboard::{DashboardSession, DashboardState, GeolocationProvider};
use weather_map_geography::BoundaryDataset;

use crate::config::{AppConfig, GeolocationSource};

#[derive(Parser)]
#[command(name = "weather_map_cli", about = "China extreme-weather dashboard")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Backend origin, e.g. `http://127.0.0.1:8000`.
    #[arg(long)]
    backend_url: Option<String>,
    /// Boundary GeoJSON file; the built-in region table is used when omitted.
    #[arg(long)]
    boundaries: Option<PathBuf>,
    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.backend_url {
        config.backend_url = url;
    }
    if let Some(path) = cli.boundaries {
        config.boundaries = Some(path);
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout_secs = secs;
    }

    let dataset = match &config.boundaries {
        Some(path) => BoundaryDataset::from_geojson_file(path)?,
        None => BoundaryDataset::builtin(),
    };
    let state = DashboardState::new(dataset)?;
    let gateway = Arc::new(HttpDashboardGateway::new(&config.gateway_config()));
    let session = DashboardSession::new(gateway, state);

    let provider: Option<Box<dyn GeolocationProvider>> = match config.geolocation {
        GeolocationSource::Ip => Some(Box::new(geolocate::IpGeolocationProvider::new(
            Duration::from_secs(config.timeout_secs),
        ))),
        GeolocationSource::Disabled => None,
    };

    interactive::run(&session, provider.as_deref()).await
}
