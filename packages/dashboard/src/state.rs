//! Selected-location and focus state, with one reducer per user trigger.
//!
//! Every interaction the dashboard supports funnels through exactly one
//! method here: form edits, form submission, geolocation fixes, map clicks
//! in both focus and pick mode, and warning-list clicks. Each reducer
//! mutates only the fields its trigger owns and reports whether the caller
//! must reload, so reload policy lives with the trigger instead of being
//! re-derived by every surface.

use std::collections::BTreeMap;

use weather_map_analytics::{aggregate_region_risk, rank_warnings};
use weather_map_dashboard_models::{DashboardSnapshot, LocationQuery};
use weather_map_geography::{
    AliasConflict, AliasIndex, BoundaryDataset, normalize_name, resolve_capital,
};
use weather_map_geography_models::GeoPoint;
use weather_map_map::{
    ForecastScene, MapClick, MapProjection, MapScene, MapSeries, PickError, compose_scene,
    pick_coordinate,
};
use weather_map_warning_models::{Warning, WarningKey, WarningSeverity};

/// Startup location: Beijing city center.
#[must_use]
pub fn default_location() -> LocationQuery {
    LocationQuery {
        lat: 39.9042,
        lon: 116.4074,
        address: None,
        province: Some("北京".to_string()),
    }
}

/// Touched-field form update; unset fields keep their current values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPatch {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// An empty string clears the stored address.
    pub address: Option<String>,
    pub province: Option<String>,
}

/// Map interaction flags that live outside the location itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusInteractionState {
    /// When on, map clicks stage coordinates instead of refocusing + reloading.
    pub pick_mode: bool,
    /// Identity of the warning pinned to the top of the ranked list.
    pub active_warning: Option<WarningKey>,
}

/// What a map click did, and whether the caller owes a reload.
#[derive(Debug, Clone, PartialEq)]
pub enum MapClickOutcome {
    /// Focus-mode click on a named region; the caller reloads with `query`.
    Focused {
        province: String,
        query: LocationQuery,
    },
    /// Pick-mode click converted to a coordinate. No reload is issued; the
    /// staged values go out with the next form submission.
    Staged {
        point: GeoPoint,
        province: Option<String>,
    },
    /// Pick-mode click that could not be converted. Coordinates are kept;
    /// a named region still refocuses.
    PickFailed {
        error: PickError,
        province: Option<String>,
    },
    /// Click on the decorative islands inset; nothing changed.
    OutOfRegion,
    /// Click carried nothing actionable; nothing changed.
    Ignored,
}

/// The whole client-side dashboard state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    dataset: BoundaryDataset,
    aliases: AliasIndex,
    location: LocationQuery,
    interaction: FocusInteractionState,
    snapshot: Option<DashboardSnapshot>,
}

impl DashboardState {
    /// Builds the initial state over a boundary dataset.
    ///
    /// # Errors
    ///
    /// * If two boundary display names collapse to the same canonical name.
    pub fn new(dataset: BoundaryDataset) -> Result<Self, AliasConflict> {
        let aliases = dataset.alias_index()?;
        Ok(Self {
            dataset,
            aliases,
            location: default_location(),
            interaction: FocusInteractionState::default(),
            snapshot: None,
        })
    }

    /// Applies edited form fields. Never triggers a reload.
    pub fn edit_form(&mut self, patch: FormPatch) {
        if let Some(lat) = patch.lat {
            self.location.lat = lat;
        }
        if let Some(lon) = patch.lon {
            self.location.lon = lon;
        }
        if let Some(address) = patch.address {
            self.location.address = if address.is_empty() {
                None
            } else {
                Some(address)
            };
        }
        if let Some(province) = patch.province {
            self.location.province = Some(province);
        }
    }

    /// Form submission: the caller reloads with the location exactly as
    /// the form holds it.
    #[must_use]
    pub fn submit(&self) -> LocationQuery {
        self.location.clone()
    }

    /// Applies a geolocation fix: coordinates only, rounded to 4 decimals.
    /// Province and address keep their values and no reload is issued.
    pub fn apply_geolocation(&mut self, point: GeoPoint) {
        let point = point.rounded();
        self.location.lat = point.lat;
        self.location.lon = point.lon;
    }

    /// Turns coordinate pick mode on or off.
    pub const fn set_pick_mode(&mut self, enabled: bool) {
        self.interaction.pick_mode = enabled;
    }

    /// Routes a map click through the active mode.
    ///
    /// Clicks on the islands inset are rejected without touching any state.
    /// In focus mode a named region becomes the selected province and the
    /// returned query must be reloaded; coordinates stay put. In pick mode
    /// the click pixel is inverted to a coordinate and staged without a
    /// reload; a named region still updates the province even when the
    /// inversion fails.
    #[must_use]
    pub fn click_map(
        &mut self,
        click: &MapClick,
        projection: Option<&dyn MapProjection>,
    ) -> MapClickOutcome {
        if click.series == MapSeries::Inset
            || click
                .region
                .as_deref()
                .is_some_and(|name| self.dataset.is_inset(name))
        {
            return MapClickOutcome::OutOfRegion;
        }

        if !self.interaction.pick_mode {
            let Some(province) = canonical_region(click) else {
                return MapClickOutcome::Ignored;
            };
            self.interaction.active_warning = None;
            self.location.province = Some(province.clone());
            return MapClickOutcome::Focused {
                province,
                query: self.location.clone(),
            };
        }

        let province = canonical_region(click);
        match pick_coordinate(click, projection, &self.dataset) {
            Ok(point) => {
                let point = point.rounded();
                self.interaction.active_warning = None;
                self.location.lat = point.lat;
                self.location.lon = point.lon;
                if let Some(name) = province.clone() {
                    self.location.province = Some(name);
                }
                MapClickOutcome::Staged { point, province }
            }
            Err(error) => {
                log::debug!("coordinate pick failed: {error}");
                if let Some(name) = province.clone() {
                    self.interaction.active_warning = None;
                    self.location.province = Some(name);
                }
                MapClickOutcome::PickFailed { error, province }
            }
        }
    }

    /// Pins a warning: it becomes the active list entry, the location jumps
    /// to its province's capital when one is known, and the caller reloads
    /// with the returned query.
    #[must_use]
    pub fn click_warning(&mut self, warning: &Warning) -> LocationQuery {
        self.interaction.active_warning = Some(warning.key());
        if let Some(capital) = resolve_capital(&warning.province) {
            self.location.lat = capital.lat;
            self.location.lon = capital.lon;
        }
        self.location.province = Some(normalize_name(&warning.province));
        self.location.clone()
    }

    /// Installs a freshly fetched snapshot.
    pub fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.snapshot = Some(snapshot);
    }

    #[must_use]
    pub const fn location(&self) -> &LocationQuery {
        &self.location
    }

    #[must_use]
    pub const fn interaction(&self) -> &FocusInteractionState {
        &self.interaction
    }

    #[must_use]
    pub const fn dataset(&self) -> &BoundaryDataset {
        &self.dataset
    }

    #[must_use]
    pub const fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    /// Province the dashboard is focused on: the user's selection when one
    /// is set, otherwise whatever the last snapshot reported. An empty
    /// selection counts as no focus.
    #[must_use]
    pub fn focus_province(&self) -> Option<&str> {
        match self.location.province.as_deref() {
            Some(name) => Some(name),
            None => self
                .snapshot
                .as_ref()
                .and_then(|snapshot| snapshot.current_province.as_deref()),
        }
        .filter(|name| !name.is_empty())
    }

    /// Per-region maximum severity from the current snapshot's warnings.
    #[must_use]
    pub fn region_risk(&self) -> BTreeMap<String, WarningSeverity> {
        self.snapshot.as_ref().map_or_else(BTreeMap::new, |snapshot| {
            aggregate_region_risk(&snapshot.warnings, &self.aliases)
        })
    }

    /// Current snapshot's warnings in display order.
    #[must_use]
    pub fn ranked_warnings(&self) -> Vec<Warning> {
        self.snapshot.as_ref().map_or_else(Vec::new, |snapshot| {
            rank_warnings(
                &snapshot.warnings,
                self.focus_province(),
                self.interaction.active_warning.as_ref(),
            )
        })
    }

    /// Map scene for the current risk, focus, and marker position.
    #[must_use]
    pub fn scene(&self) -> MapScene {
        let risk = self.region_risk();
        compose_scene(
            &self.dataset,
            &self.aliases,
            &risk,
            self.focus_province(),
            GeoPoint::new(self.location.lat, self.location.lon),
        )
    }

    /// Forecast series from the current snapshot.
    #[must_use]
    pub fn forecast_scene(&self) -> ForecastScene {
        self.snapshot
            .as_ref()
            .map_or_else(ForecastScene::default, |snapshot| {
                ForecastScene::from_points(&snapshot.forecast_points)
            })
    }
}

/// Canonical province name carried by a click, if the click named a region.
fn canonical_region(click: &MapClick) -> Option<String> {
    click
        .region
        .as_deref()
        .map(normalize_name)
        .filter(|name| !name.is_empty())
}
