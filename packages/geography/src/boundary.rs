//! Boundary datasets describing which named regions the map can draw.
//!
//! The engine ships a builtin dataset covering the 34 provincial-level
//! divisions plus the 南海诸岛 inset, and can load replacement datasets from
//! `GeoJSON` feature collections (one feature per region, with the region's
//! display name in the `name` property).

use std::collections::BTreeSet;
use std::path::Path;

use geojson::GeoJson;
use thiserror::Error;
use weather_map_geography_models::capitals;

use crate::alias::{AliasConflict, AliasIndex};

/// Display name of the South China Sea islands inset. The inset is drawn
/// as a miniature beside the mainland, so its on-screen position has no
/// geographic meaning and it never participates in coordinate picking.
pub const SOUTH_SEA_INSET: &str = "南海诸岛";

/// Errors that can occur while loading a boundary dataset.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Reading the boundary file failed.
    #[error("Failed to read boundary file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid `GeoJSON`.
    #[error("Failed to parse boundary GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    /// The document parsed, but is not a feature collection.
    #[error("Boundary GeoJSON is not a FeatureCollection")]
    NotACollection,
}

/// The set of named regions a map scene is built over.
///
/// Regions are partitioned into mainland regions and inset regions; the
/// inset is rendered but excluded from geographic interactions.
#[derive(Debug, Clone)]
pub struct BoundaryDataset {
    main_regions: Vec<String>,
    inset_regions: Vec<String>,
}

impl BoundaryDataset {
    /// The builtin dataset: every provincial-level division by its short
    /// name, plus the 南海诸岛 inset.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            main_regions: capitals::PROVINCE_NAMES
                .iter()
                .map(|&name| name.to_string())
                .collect(),
            inset_regions: vec![SOUTH_SEA_INSET.to_string()],
        }
    }

    /// Loads a boundary dataset from a `GeoJSON` file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain a
    /// `GeoJSON` feature collection.
    pub fn from_geojson_file(path: impl AsRef<Path>) -> Result<Self, BoundaryError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_geojson_str(&raw)
    }

    /// Parses a boundary dataset from `GeoJSON` feature collection text.
    ///
    /// Features without a non-empty `name` property are skipped. Repeated
    /// names collapse into a single region.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a `GeoJSON` feature collection.
    pub fn from_geojson_str(raw: &str) -> Result<Self, BoundaryError> {
        let geojson: GeoJson = raw.parse()?;

        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(BoundaryError::NotACollection);
        };

        let mut main_regions = Vec::new();
        let mut inset_regions = Vec::new();
        let mut seen = BTreeSet::new();

        for feature in collection.features {
            let name = feature
                .properties
                .as_ref()
                .and_then(|props| props.get("name"))
                .and_then(|value| value.as_str())
                .filter(|name| !name.is_empty());

            let Some(name) = name else {
                log::warn!("Skipping boundary feature without a name property");
                continue;
            };

            if !seen.insert(name.to_string()) {
                continue;
            }

            if name == SOUTH_SEA_INSET {
                inset_regions.push(name.to_string());
            } else {
                main_regions.push(name.to_string());
            }
        }

        log::info!(
            "Loaded {} boundary regions ({} inset) from GeoJSON",
            main_regions.len() + inset_regions.len(),
            inset_regions.len()
        );

        Ok(Self {
            main_regions,
            inset_regions,
        })
    }

    /// Mainland region display names, in dataset order.
    #[must_use]
    pub fn main_regions(&self) -> &[String] {
        &self.main_regions
    }

    /// Inset region display names, in dataset order.
    #[must_use]
    pub fn inset_regions(&self) -> &[String] {
        &self.inset_regions
    }

    /// All region display names, mainland first.
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.main_regions
            .iter()
            .chain(self.inset_regions.iter())
            .map(String::as_str)
    }

    /// Whether a display name belongs to an inset region.
    #[must_use]
    pub fn is_inset(&self, name: &str) -> bool {
        self.inset_regions.iter().any(|region| region == name)
    }

    /// Builds the alias index over this dataset's mainland display names.
    /// Inset regions are excluded: they are decorative and never the target
    /// of name resolution.
    ///
    /// # Errors
    ///
    /// Returns [`AliasConflict`] if two display names normalize to the
    /// same canonical form.
    pub fn alias_index(&self) -> Result<AliasIndex, AliasConflict> {
        AliasIndex::build(self.main_regions.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_province_plus_inset() {
        let dataset = BoundaryDataset::builtin();

        assert_eq!(dataset.main_regions().len(), 34);
        assert_eq!(dataset.inset_regions(), [SOUTH_SEA_INSET.to_string()]);
        assert!(dataset.is_inset(SOUTH_SEA_INSET));
        assert!(!dataset.is_inset("广西"));
    }

    #[test]
    fn builtin_alias_index_resolves_full_names() {
        let index = BoundaryDataset::builtin().alias_index().unwrap();

        assert_eq!(index.resolve_boundary_name("新疆维吾尔自治区"), "新疆");
        assert_eq!(index.resolve_boundary_name("香港特别行政区"), "香港");
    }

    #[test]
    fn every_builtin_region_resolves_to_itself() {
        let dataset = BoundaryDataset::builtin();
        let index = dataset.alias_index().unwrap();

        for name in dataset.main_regions() {
            assert_eq!(index.resolve_boundary_name(name), name);
        }
    }

    #[test]
    fn parses_feature_collection_and_partitions_inset() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "北京"}, "geometry": null},
                {"type": "Feature", "properties": {"name": "南海诸岛"}, "geometry": null}
            ]
        }"#;

        let dataset = BoundaryDataset::from_geojson_str(raw).unwrap();

        assert_eq!(dataset.main_regions(), ["北京".to_string()]);
        assert_eq!(dataset.inset_regions(), [SOUTH_SEA_INSET.to_string()]);
    }

    #[test]
    fn full_named_datasets_resolve_through_alias_index() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "广西壮族自治区"}, "geometry": null}
            ]
        }"#;

        let dataset = BoundaryDataset::from_geojson_str(raw).unwrap();
        let index = dataset.alias_index().unwrap();

        assert_eq!(index.resolve_boundary_name("广西"), "广西壮族自治区");
    }

    #[test]
    fn skips_features_without_names() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": null, "geometry": null},
                {"type": "Feature", "properties": {"name": ""}, "geometry": null},
                {"type": "Feature", "properties": {"name": "西藏"}, "geometry": null}
            ]
        }"#;

        let dataset = BoundaryDataset::from_geojson_str(raw).unwrap();

        assert_eq!(dataset.main_regions(), ["西藏".to_string()]);
    }

    #[test]
    fn repeated_feature_names_collapse() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "甘肃"}, "geometry": null},
                {"type": "Feature", "properties": {"name": "甘肃"}, "geometry": null}
            ]
        }"#;

        let dataset = BoundaryDataset::from_geojson_str(raw).unwrap();

        assert_eq!(dataset.main_regions().len(), 1);
    }

    #[test]
    fn rejects_bare_geometry_documents() {
        let raw = r#"{"type": "Point", "coordinates": [116.0, 39.0]}"#;

        let err = BoundaryDataset::from_geojson_str(raw).unwrap_err();

        assert!(matches!(err, BoundaryError::NotACollection));
    }
}
