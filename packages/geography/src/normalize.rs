//! Province name normalization for warning feeds and boundary files.
//!
//! Upstream data spells the same province many ways:
//! - Full official names: `"广西壮族自治区"`, `"新疆维吾尔自治区"`
//! - Suffixed short names: `"河北省"`, `"北京市"`
//! - Special administrative regions: `"香港特别行政区"`
//! - Already-short names: `"上海"`
//!
//! This module reduces all of them to the short canonical form used as
//! the join key across risk aggregation, alias lookup, and capital lookup.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for the special administrative region qualifier (Hong Kong, Macao).
static SAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("特别行政区").expect("valid regex"));

/// Regex for autonomous region qualifiers. The ethnic forms come before the
/// bare `自治区` so the whole tail drops in one pass.
static AUTONOMOUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("维吾尔自治区|回族自治区|壮族自治区|自治区").expect("valid regex"));

/// Regex for the generic province / municipality qualifier.
static GENERIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[省市]").expect("valid regex"));

/// Reduces an administrative division name to its short canonical form.
///
/// Qualifiers are stripped wherever they occur, in order: `特别行政区`,
/// then the autonomous region forms, then `省`/`市`, and the result is
/// trimmed. Applying the function twice yields the same output as applying
/// it once, so already-canonical names pass through unchanged.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let name = SAR_RE.replace_all(raw, "");
    let name = AUTONOMOUS_RE.replace_all(&name, "");
    let name = GENERIC_RE.replace_all(&name, "");
    name.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_municipality_suffix() {
        assert_eq!(normalize_name("北京市"), "北京");
        assert_eq!(normalize_name("重庆市"), "重庆");
    }

    #[test]
    fn strips_province_suffix() {
        assert_eq!(normalize_name("河北省"), "河北");
        assert_eq!(normalize_name("黑龙江省"), "黑龙江");
    }

    #[test]
    fn strips_ethnic_autonomous_qualifiers() {
        assert_eq!(normalize_name("广西壮族自治区"), "广西");
        assert_eq!(normalize_name("新疆维吾尔自治区"), "新疆");
        assert_eq!(normalize_name("宁夏回族自治区"), "宁夏");
    }

    #[test]
    fn strips_plain_autonomous_qualifier() {
        assert_eq!(normalize_name("西藏自治区"), "西藏");
        assert_eq!(normalize_name("内蒙古自治区"), "内蒙古");
    }

    #[test]
    fn strips_special_administrative_region_qualifier() {
        assert_eq!(normalize_name("香港特别行政区"), "香港");
        assert_eq!(normalize_name("澳门特别行政区"), "澳门");
    }

    #[test]
    fn leaves_short_names_unchanged() {
        assert_eq!(normalize_name("上海"), "上海");
        assert_eq!(normalize_name("台湾"), "台湾");
        assert_eq!(normalize_name("南海诸岛"), "南海诸岛");
    }

    #[test]
    fn qualifiers_are_stripped_even_when_padded() {
        assert_eq!(normalize_name(" 广东省 "), "广东");
        assert_eq!(normalize_name("\t青海省\n"), "青海");
    }

    #[test]
    fn city_level_names_also_canonicalize() {
        assert_eq!(normalize_name("石家庄市"), "石家庄");
        assert_eq!(normalize_name("乌鲁木齐市"), "乌鲁木齐");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn input_of_only_qualifiers_normalizes_to_empty() {
        assert_eq!(normalize_name("省"), "");
        assert_eq!(normalize_name("自治区"), "");
    }

    #[test]
    fn is_idempotent() {
        for raw in [
            "北京市",
            "广西壮族自治区",
            "香港特别行政区",
            "内蒙古自治区",
            " 河北省 ",
            "石家庄市",
            "上海",
            "",
        ] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once, "re-normalizing {raw:?}");
        }
    }
}
