//! Plain-text rendering of the dashboard panels.

use std::fmt::Write as _;

use weather_map_dashboard::DashboardState;
use weather_map_warning_models::WarningSeverity;

fn fill_label(value: u8) -> &'static str {
    WarningSeverity::from_value(value).map_or("无预警", WarningSeverity::color_label)
}

/// Location line, focus, pick-mode flag, and refresh metadata.
#[must_use]
pub fn render_status(state: &DashboardState) -> String {
    let mut out = String::new();
    let location = state.location();
    let _ = writeln!(
        out,
        "当前经纬度：{:.4}, {:.4}",
        location.lat, location.lon
    );
    if let Some(address) = location.address.as_deref() {
        let _ = writeln!(out, "详细地址：{address}");
    }
    match state.focus_province() {
        Some(province) => {
            let _ = writeln!(out, "当前省份：{province}");
        }
        None => {
            let _ = writeln!(out, "当前省份：未选择");
        }
    }
    if state.interaction().pick_mode {
        let _ = writeln!(out, "点击地图取点（不自动刷新）：开启");
    }
    if let Some(snapshot) = state.snapshot() {
        if let Some(at) = snapshot.last_refresh_at {
            let _ = writeln!(out, "最近刷新：{}", at.format("%Y-%m-%d %H:%M:%S"));
        }
        let _ = writeln!(out, "刷新周期：{} 分钟", snapshot.refresh_interval_minutes);
    }
    out
}

/// Map panel: regions carrying warnings, the focused region, and the pin.
#[must_use]
pub fn render_scene(state: &DashboardState) -> String {
    let scene = state.scene();
    let mut out = String::new();
    let _ = writeln!(out, "【全国省级预警地图】");

    let mut quiet = 0_usize;
    for fill in &scene.main_regions {
        let focused = scene.highlighted.as_deref() == Some(fill.name.as_str());
        if fill.value == 0 && !focused {
            quiet += 1;
            continue;
        }
        let marker = if focused { '▶' } else { ' ' };
        let _ = writeln!(out, "{marker} {}：{}", fill.name, fill_label(fill.value));
    }
    if quiet > 0 {
        let _ = writeln!(out, "  （其余 {quiet} 个区域无预警）");
    }
    for fill in &scene.inset_regions {
        let _ = writeln!(out, "  {}（插图，不参与取点）", fill.name);
    }
    let _ = writeln!(
        out,
        "  标注位置：{:.4}, {:.4}",
        scene.marker.lat, scene.marker.lon
    );
    out
}

/// Province ordering strip; highlighted entries are bracketed.
#[must_use]
pub fn render_provinces(state: &DashboardState) -> String {
    let Some(snapshot) = state.snapshot() else {
        return String::new();
    };
    if snapshot.provinces.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "【省份排序与高亮】");
    let strip = snapshot
        .provinces
        .iter()
        .map(|item| {
            if item.highlighted {
                format!("【{}·{}】", item.name, item.pinyin_initial)
            } else {
                format!("{}·{}", item.name, item.pinyin_initial)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "  {strip}");
    out
}

/// Ranked warning list; the pinned entry carries the arrow marker.
#[must_use]
pub fn render_warnings(state: &DashboardState) -> String {
    let ranked = state.ranked_warnings();
    let mut out = String::new();
    let _ = writeln!(out, "【预警信息】");
    if ranked.is_empty() {
        let _ = writeln!(out, "  暂无预警");
        return out;
    }

    let active = state.interaction().active_warning.clone();
    for warning in &ranked {
        let marker = if active.as_ref().is_some_and(|key| key.matches(warning)) {
            '▶'
        } else {
            ' '
        };
        let _ = writeln!(out, "{marker} {}（{}）", warning.title, warning.level);
        if !warning.summary.is_empty() {
            let _ = writeln!(out, "    {}", warning.summary);
        }
        let _ = writeln!(
            out,
            "    {} | {} | {}",
            warning.province,
            warning.hazard_type,
            warning.issue_time.format("%Y-%m-%d %H:%M")
        );
        let augmented = if warning.is_ai_augmented {
            "（辅助解读）"
        } else {
            ""
        };
        let _ = writeln!(out, "    来源：{}{augmented}", warning.source);
    }
    out
}

/// Forecast table, one row per point.
#[must_use]
pub fn render_forecast(state: &DashboardState) -> String {
    let forecast = state.forecast_scene();
    let mut out = String::new();
    let _ = writeln!(out, "【未来 7 天温湿度曲线】");
    if forecast.times.is_empty() {
        let _ = writeln!(out, "  暂无预报数据");
        return out;
    }

    for ((time, temperature), humidity) in forecast
        .times
        .iter()
        .zip(&forecast.temperature_c)
        .zip(&forecast.humidity_pct)
    {
        let _ = writeln!(
            out,
            "  {}  {temperature:>5.1}°C  湿度 {humidity:>3.0}%",
            time.format("%m-%d %H:%M")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};
    use weather_map_dashboard::FormPatch;
    use weather_map_dashboard_models::{DashboardSnapshot, ForecastPoint, ProvinceListing};
    use weather_map_geography::BoundaryDataset;
    use weather_map_warning_models::Warning;

    use super::*;

    fn warning(province: &str, level: &str, title: &str) -> Warning {
        Warning {
            source: "CMA".to_string(),
            title: title.to_string(),
            level: level.to_string(),
            hazard_type: "暴雨".to_string(),
            province: province.to_string(),
            issue_time: Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
            expires_at: None,
            detail_url: String::new(),
            summary: "局地有大到暴雨。".to_string(),
            confidence: 0.9,
            is_ai_augmented: true,
        }
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::new(BoundaryDataset::builtin()).unwrap();
        state.apply_snapshot(DashboardSnapshot {
            current_province: Some("北京".to_string()),
            provinces: vec![
                ProvinceListing {
                    name: "北京".to_string(),
                    pinyin_initial: "B".to_string(),
                    highlighted: true,
                },
                ProvinceListing {
                    name: "广西".to_string(),
                    pinyin_initial: "G".to_string(),
                    highlighted: false,
                },
            ],
            warnings: vec![warning("广西壮族自治区", "红色", "台风红色预警")],
            forecast_points: vec![ForecastPoint {
                forecast_time: Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap(),
                temperature_c: 28.5,
                humidity_pct: 62.0,
            }],
            last_refresh_at: Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()),
            refresh_interval_minutes: 30,
        });
        state
    }

    #[test]
    fn status_shows_location_and_refresh_metadata() {
        let text = render_status(&loaded_state());

        assert!(text.contains("当前经纬度：39.9042, 116.4074"));
        assert!(text.contains("当前省份：北京"));
        assert!(text.contains("刷新周期：30 分钟"));
    }

    #[test]
    fn scene_lists_risky_regions_and_marks_the_focus() {
        let text = render_scene(&loaded_state());

        assert!(text.contains("广西：红色"));
        assert!(text.contains("▶ 北京：无预警"));
        assert!(text.contains("其余 32 个区域无预警"));
        assert!(text.contains("南海诸岛（插图，不参与取点）"));
    }

    #[test]
    fn warnings_show_badge_meta_and_source() {
        let text = render_warnings(&loaded_state());

        assert!(text.contains("台风红色预警（红色）"));
        assert!(text.contains("广西壮族自治区 | 暴雨 | 2024-06-01 08:00"));
        assert!(text.contains("来源：CMA（辅助解读）"));
    }

    #[test]
    fn empty_snapshot_renders_placeholders() {
        let state = DashboardState::new(BoundaryDataset::builtin()).unwrap();

        assert!(render_warnings(&state).contains("暂无预警"));
        assert!(render_forecast(&state).contains("暂无预报数据"));
        assert!(render_provinces(&state).is_empty());
    }

    #[test]
    fn provinces_bracket_highlighted_entries() {
        let text = render_provinces(&loaded_state());

        assert!(text.contains("【北京·B】"));
        assert!(text.contains("广西·G"));
    }

    #[test]
    fn forecast_rows_carry_both_series() {
        let text = render_forecast(&loaded_state());

        assert!(text.contains("06-01 14:00"));
        assert!(text.contains("28.5°C"));
        assert!(text.contains("湿度  62%"));
    }

    #[test]
    fn pick_mode_and_address_appear_in_the_status() {
        let mut state = loaded_state();
        state.set_pick_mode(true);
        state.edit_form(FormPatch {
            address: Some("朝阳区望京街道".to_string()),
            ..FormPatch::default()
        });

        let text = render_status(&state);

        assert!(text.contains("点击地图取点（不自动刷新）：开启"));
        assert!(text.contains("详细地址：朝阳区望京街道"));
    }
}
