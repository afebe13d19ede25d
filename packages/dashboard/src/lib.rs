#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core dashboard engine: the selected-location/focus state machine, the
//! reducers behind every user trigger, and a session wrapper that sequences
//! concurrent reloads so only the most recently issued one lands.

pub mod geolocate;
pub mod session;
pub mod state;

pub use geolocate::{GeolocateError, GeolocationProvider, locate_within};
pub use session::{DashboardSession, ReloadOutcome};
pub use state::{
    DashboardState, FocusInteractionState, FormPatch, MapClickOutcome, default_location,
};
