//! Per-region risk aggregation.
//!
//! The map colors each region by the worst warning currently touching it.
//! Warnings name provinces in whatever spelling their feed uses, so every
//! province string is resolved through the alias index before keying.

use std::collections::BTreeMap;

use weather_map_geography::AliasIndex;
use weather_map_warning_models::{Warning, WarningSeverity};

/// Folds a batch of warnings into the maximum severity per boundary
/// display name.
///
/// Full and short spellings of the same province merge into one entry, and
/// provinces the alias index doesn't know keep their raw name so no warning
/// is silently dropped. Taking the maximum makes the result independent of
/// input order.
#[must_use]
pub fn aggregate_region_risk(
    warnings: &[Warning],
    aliases: &AliasIndex,
) -> BTreeMap<String, WarningSeverity> {
    let mut risk: BTreeMap<String, WarningSeverity> = BTreeMap::new();

    for warning in warnings {
        let region = aliases.resolve_boundary_name(&warning.province).to_string();
        let severity = warning.severity();

        risk.entry(region)
            .and_modify(|current| *current = (*current).max(severity))
            .or_insert(severity);
    }

    risk
}
