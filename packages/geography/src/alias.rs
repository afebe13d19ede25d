//! Alias resolution between canonical province names and the display
//! names a boundary dataset actually uses.
//!
//! A warning feed may say `广西壮族自治区` while the loaded boundary file
//! labels the same polygon `广西` (or the other way around). The
//! [`AliasIndex`] is built once per dataset and answers "which boundary
//! display name does this raw province string belong to" from then on.

use std::collections::BTreeMap;

use thiserror::Error;
use weather_map_geography_models::{GeoPoint, capitals};

use crate::normalize::normalize_name;

/// Two distinct display names in one dataset normalized to the same
/// canonical key.
#[derive(Debug, Error)]
#[error("boundary names {first:?} and {second:?} both normalize to {canonical:?}")]
pub struct AliasConflict {
    /// Display name that claimed the canonical key first.
    pub first: String,
    /// Display name that collided with it.
    pub second: String,
    /// The shared canonical form.
    pub canonical: String,
}

/// Canonical province name → boundary display name lookup table.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    by_canonical: BTreeMap<String, String>,
}

impl AliasIndex {
    /// Builds the index from a boundary dataset's display names.
    ///
    /// Repeated occurrences of the same display name are allowed (a
    /// region split across several features is still one region).
    ///
    /// # Errors
    ///
    /// Returns [`AliasConflict`] if two distinct display names normalize
    /// to the same canonical form, e.g. `吉林省` and `吉林市`.
    pub fn build<I, S>(display_names: I) -> Result<Self, AliasConflict>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut by_canonical: BTreeMap<String, String> = BTreeMap::new();

        for display in display_names {
            let display = display.into();
            let canonical = normalize_name(&display);

            if let Some(existing) = by_canonical.get(&canonical) {
                if *existing == display {
                    continue;
                }
                return Err(AliasConflict {
                    first: existing.clone(),
                    second: display,
                    canonical,
                });
            }

            by_canonical.insert(canonical, display);
        }

        Ok(Self { by_canonical })
    }

    /// Resolves a raw province string to the dataset's display name.
    ///
    /// Unknown names fall through unchanged so a warning for a region the
    /// dataset doesn't cover is still keyed consistently.
    #[must_use]
    pub fn resolve_boundary_name<'a>(&'a self, raw: &'a str) -> &'a str {
        let canonical = normalize_name(raw);

        if let Some(display) = self.by_canonical.get(&canonical) {
            return display;
        }

        log::debug!("no boundary alias for {raw:?} (canonical {canonical:?}); keeping raw name");
        raw
    }

    /// Number of indexed regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_canonical.len()
    }

    /// Whether the index holds no regions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_canonical.is_empty()
    }
}

/// Looks up the provincial capital coordinate for any spelling of a
/// province name.
#[must_use]
pub fn resolve_capital(raw: &str) -> Option<GeoPoint> {
    capitals::capital_coordinate(&normalize_name(raw))
}
