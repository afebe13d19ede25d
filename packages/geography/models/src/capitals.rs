//! Representative coordinates per top-level administrative region.
//!
//! The table is fixed and hand-maintained: one capital (or seat) coordinate
//! per canonical province name, covering all 34 regions. Warning clicks and
//! the CLI use it to move the map pin when a province is all we know.

use crate::GeoPoint;

/// Canonical short names of the 34 top-level administrative regions.
pub const PROVINCE_NAMES: &[&str] = &[
    "北京", "天津", "上海", "重庆", "河北", "山西", "辽宁", "吉林", "黑龙江", "江苏", "浙江",
    "安徽", "福建", "江西", "山东", "河南", "湖北", "湖南", "广东", "海南", "四川", "贵州",
    "云南", "陕西", "甘肃", "青海", "内蒙古", "广西", "西藏", "宁夏", "新疆", "香港", "澳门",
    "台湾",
];

/// Maps a canonical province name to its representative coordinate.
///
/// Returns `None` for names outside the fixed table; callers keep their
/// previous coordinate in that case.
#[must_use]
pub fn capital_coordinate(canonical: &str) -> Option<GeoPoint> {
    match canonical {
        "北京" => Some(GeoPoint::new(39.9042, 116.4074)),
        "天津" => Some(GeoPoint::new(39.3434, 117.3616)),
        "上海" => Some(GeoPoint::new(31.2304, 121.4737)),
        "重庆" => Some(GeoPoint::new(29.4316, 106.9123)),
        "河北" => Some(GeoPoint::new(38.0428, 114.5149)),
        "山西" => Some(GeoPoint::new(37.8706, 112.5489)),
        "辽宁" => Some(GeoPoint::new(41.8057, 123.4315)),
        "吉林" => Some(GeoPoint::new(43.8171, 125.3235)),
        "黑龙江" => Some(GeoPoint::new(45.756, 126.6425)),
        "江苏" => Some(GeoPoint::new(32.0603, 118.7969)),
        "浙江" => Some(GeoPoint::new(30.2741, 120.1551)),
        "安徽" => Some(GeoPoint::new(31.8206, 117.2272)),
        "福建" => Some(GeoPoint::new(26.0745, 119.2965)),
        "江西" => Some(GeoPoint::new(28.6829, 115.8579)),
        "山东" => Some(GeoPoint::new(36.6512, 117.12)),
        "河南" => Some(GeoPoint::new(34.7466, 113.6254)),
        "湖北" => Some(GeoPoint::new(30.5928, 114.3055)),
        "湖南" => Some(GeoPoint::new(28.2282, 112.9388)),
        "广东" => Some(GeoPoint::new(23.1291, 113.2644)),
        "海南" => Some(GeoPoint::new(20.0442, 110.1999)),
        "四川" => Some(GeoPoint::new(30.5728, 104.0668)),
        "贵州" => Some(GeoPoint::new(26.647, 106.6302)),
        "云南" => Some(GeoPoint::new(25.0389, 102.7183)),
        "陕西" => Some(GeoPoint::new(34.3416, 108.9398)),
        "甘肃" => Some(GeoPoint::new(36.0611, 103.8343)),
        "青海" => Some(GeoPoint::new(36.6171, 101.7782)),
        "内蒙古" => Some(GeoPoint::new(40.8426, 111.7492)),
        "广西" => Some(GeoPoint::new(22.817, 108.3669)),
        "西藏" => Some(GeoPoint::new(29.652, 91.1721)),
        "宁夏" => Some(GeoPoint::new(38.4872, 106.2309)),
        "新疆" => Some(GeoPoint::new(43.8256, 87.6168)),
        "香港" => Some(GeoPoint::new(22.3193, 114.1694)),
        "澳门" => Some(GeoPoint::new(22.1987, 113.5439)),
        "台湾" => Some(GeoPoint::new(25.033, 121.5654)),
        _ => None,
    }
}
