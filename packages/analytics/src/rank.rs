//! Display ordering for the warning list.

use std::cmp::Reverse;

use weather_map_geography::normalize_name;
use weather_map_warning_models::{Warning, WarningKey};

/// Orders warnings for display.
///
/// Warnings for the focused province come first (compared by canonical
/// name, so any spelling of the focus matches any spelling in the feed),
/// then the actively selected warning, then higher severities, then more
/// recent issue times. The sort is stable, so warnings equal on all four
/// keys keep their feed order. Nothing is ever filtered out.
#[must_use]
pub fn rank_warnings(
    warnings: &[Warning],
    focus_province: Option<&str>,
    active: Option<&WarningKey>,
) -> Vec<Warning> {
    let focus = focus_province
        .map(normalize_name)
        .filter(|name| !name.is_empty());

    let mut ranked = warnings.to_vec();

    ranked.sort_by_key(|warning| {
        let focused = focus
            .as_deref()
            .is_some_and(|focus| normalize_name(&warning.province) == focus);
        let active = active.is_some_and(|key| key.matches(warning));

        (
            !focused,
            !active,
            Reverse(warning.severity()),
            Reverse(warning.issue_time),
        )
    });

    ranked
}
