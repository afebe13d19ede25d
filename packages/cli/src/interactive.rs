//! Menu-driven dashboard surface.
//!
//! Each menu entry maps onto exactly one state-machine trigger, so the
//! terminal surface exercises the same reducers and reload policy as any
//! graphical one would.

use std::time::Duration;

use dialoguer::{Input, Select};
use weather_map_dashboard::{
    DashboardSession, DashboardState, FormPatch, GeolocateError, GeolocationProvider,
    MapClickOutcome, ReloadOutcome, locate_within,
};
use weather_map_dashboard_models::LocationQuery;
use weather_map_geography_models::capitals::PROVINCE_NAMES;
use weather_map_map::{LinearViewport, MapClick, MapSeries, PickError, PixelPoint};

use crate::render;

/// Terminal stand-in for the browser map viewport.
const VIEWPORT_WIDTH: f64 = 800.0;
const VIEWPORT_HEIGHT: f64 = 600.0;

/// How long a position fix may take before it is reported as timed out.
const GEOLOCATE_WAIT: Duration = Duration::from_secs(10);

/// Top-level actions available in the dashboard menu.
enum DashboardAction {
    Refresh,
    EditForm,
    Locate,
    ClickMap,
    TogglePickMode,
    OpenWarning,
    Exit,
}

impl DashboardAction {
    const ALL: &[Self] = &[
        Self::Refresh,
        Self::EditForm,
        Self::Locate,
        Self::ClickMap,
        Self::TogglePickMode,
        Self::OpenWarning,
        Self::Exit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Refresh => "更新看板",
            Self::EditForm => "编辑位置表单",
            Self::Locate => "定位",
            Self::ClickMap => "点击地图",
            Self::TogglePickMode => "切换取点模式",
            Self::OpenWarning => "查看预警",
            Self::Exit => "退出",
        }
    }
}

/// Runs the dashboard loop: an initial load, then one trigger per menu pick.
///
/// # Errors
///
/// Returns an error if a terminal prompt fails.
pub async fn run(
    session: &DashboardSession,
    geolocation: Option<&dyn GeolocationProvider>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("全国极端天气展示看板");
    println!();

    // Opening the dashboard loads it once, before any interaction.
    reload(session, session.with_state(DashboardState::submit)).await;
    render(session);

    let labels: Vec<&str> = DashboardAction::ALL
        .iter()
        .map(DashboardAction::label)
        .collect();

    loop {
        let idx = Select::new()
            .with_prompt("请选择操作")
            .items(&labels)
            .default(0)
            .interact()?;

        match DashboardAction::ALL[idx] {
            DashboardAction::Refresh => {
                reload(session, session.with_state(DashboardState::submit)).await;
            }
            DashboardAction::EditForm => edit_form(session)?,
            DashboardAction::Locate => locate(session, geolocation).await,
            DashboardAction::ClickMap => click_map(session).await?,
            DashboardAction::TogglePickMode => toggle_pick_mode(session),
            DashboardAction::OpenWarning => open_warning(session).await?,
            DashboardAction::Exit => break,
        }
        render(session);
    }

    Ok(())
}

fn render(session: &DashboardSession) {
    let text = session.with_state(|state| {
        format!(
            "{}\n{}{}{}{}",
            render::render_status(state),
            render::render_scene(state),
            render::render_provinces(state),
            render::render_warnings(state),
            render::render_forecast(state),
        )
    });
    println!("{text}");
}

async fn reload(session: &DashboardSession, query: LocationQuery) {
    match session.reload(query).await {
        Ok(ReloadOutcome::Applied) => {}
        Ok(ReloadOutcome::Stale) => log::debug!("Reload superseded before it landed"),
        Err(error) => println!("加载失败：{error}"),
    }
}

/// Prompts for each form field, defaulting to the current value. Edits are
/// staged only; nothing reloads until the form is submitted.
fn edit_form(session: &DashboardSession) -> Result<(), Box<dyn std::error::Error>> {
    let current = session.with_state(|state| state.location().clone());

    let lat_str: String = Input::new()
        .with_prompt("纬度")
        .default(format!("{:.4}", current.lat))
        .interact_text()?;
    let lon_str: String = Input::new()
        .with_prompt("经度")
        .default(format!("{:.4}", current.lon))
        .interact_text()?;
    let address: String = Input::new()
        .with_prompt("详细地址（留空清除）")
        .allow_empty(true)
        .interact_text()?;

    let default_idx = current
        .province
        .as_deref()
        .and_then(|name| PROVINCE_NAMES.iter().position(|p| *p == name))
        .unwrap_or(0);
    let province_idx = Select::new()
        .with_prompt("省份")
        .items(PROVINCE_NAMES)
        .default(default_idx)
        .interact()?;

    session.update(|state| {
        state.edit_form(FormPatch {
            lat: lat_str.parse().ok(),
            lon: lon_str.parse().ok(),
            address: Some(address),
            province: Some(PROVINCE_NAMES[province_idx].to_string()),
        });
    });
    println!("表单已更新（未自动刷新），选择“更新看板”提交。");
    Ok(())
}

async fn locate(session: &DashboardSession, provider: Option<&dyn GeolocationProvider>) {
    let Some(provider) = provider else {
        println!("当前环境不支持定位，请手动输入经纬度或省份。");
        return;
    };

    println!("正在请求定位权限...");
    match locate_within(provider, GEOLOCATE_WAIT).await {
        Ok(point) => {
            session.update(|state| state.apply_geolocation(point));
            println!("定位成功，已更新经纬度。");
        }
        Err(GeolocateError::PermissionDenied) => {
            println!("定位被拒绝，请允许定位权限后重试。");
        }
        Err(GeolocateError::Timeout) => {
            println!("定位超时，请重试或手动输入经纬度。");
        }
        Err(GeolocateError::Unavailable { message }) => {
            log::debug!("Position lookup failed: {message}");
            println!("定位失败，请重试或手动输入经纬度。");
        }
    }
}

/// Simulates a map click: pick a region (or blank area), and in pick mode a
/// pixel position inside the viewport.
async fn click_map(session: &DashboardSession) -> Result<(), Box<dyn std::error::Error>> {
    let (mut items, pick_mode) = session.with_state(|state| {
        let names: Vec<String> = state.dataset().region_names().map(str::to_string).collect();
        (names, state.interaction().pick_mode)
    });
    items.push("（空白区域）".to_string());

    let prompt = if pick_mode {
        "点击位置（取点模式）"
    } else {
        "点击位置"
    };
    let idx = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    let region = (idx + 1 < items.len()).then(|| items[idx].clone());

    let (x, y) = if pick_mode {
        let x_str: String = Input::new()
            .with_prompt("像素 X")
            .default((VIEWPORT_WIDTH / 2.0).to_string())
            .interact_text()?;
        let y_str: String = Input::new()
            .with_prompt("像素 Y")
            .default((VIEWPORT_HEIGHT / 2.0).to_string())
            .interact_text()?;
        (
            x_str.parse().unwrap_or(VIEWPORT_WIDTH / 2.0),
            y_str.parse().unwrap_or(VIEWPORT_HEIGHT / 2.0),
        )
    } else {
        (VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0)
    };

    let is_inset = region
        .as_deref()
        .is_some_and(|name| session.with_state(|state| state.dataset().is_inset(name)));
    let click = MapClick {
        series: if is_inset {
            MapSeries::Inset
        } else {
            MapSeries::Main
        },
        region,
        pixel: PixelPoint::new(x, y),
    };
    let viewport = LinearViewport::china(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);

    let outcome = session.update(|state| state.click_map(&click, Some(&viewport)));
    match outcome {
        MapClickOutcome::Focused { province, query } => {
            println!("已切换到 {province} 省份（已自动刷新）");
            reload(session, query).await;
        }
        MapClickOutcome::Staged { point, .. } => {
            println!("已回填坐标：{}, {}（未自动刷新）", point.lat, point.lon);
        }
        MapClickOutcome::PickFailed {
            error: PickError::NoProjection,
            ..
        } => {
            println!("该区域无法取点，请重试。");
        }
        MapClickOutcome::PickFailed { .. } => {
            println!("该区域无法取点，请点击省份区域。");
        }
        MapClickOutcome::OutOfRegion => {
            if pick_mode {
                println!("该区域无法取点，请点击省份区域。");
            }
        }
        MapClickOutcome::Ignored => {}
    }
    Ok(())
}

fn toggle_pick_mode(session: &DashboardSession) {
    let enabled = session.update(|state| {
        let next = !state.interaction().pick_mode;
        state.set_pick_mode(next);
        next
    });
    let flag = if enabled { "开启" } else { "关闭" };
    println!("点击地图取点（不自动刷新）：已{flag}");
}

/// Picks a warning from the ranked list and pins it.
async fn open_warning(session: &DashboardSession) -> Result<(), Box<dyn std::error::Error>> {
    let ranked = session.with_state(DashboardState::ranked_warnings);
    if ranked.is_empty() {
        println!("暂无预警");
        return Ok(());
    }

    let labels: Vec<String> = ranked
        .iter()
        .map(|warning| {
            format!(
                "{}（{}） · {}",
                warning.title, warning.level, warning.province
            )
        })
        .collect();
    let idx = Select::new()
        .with_prompt("选择预警")
        .items(&labels)
        .default(0)
        .interact()?;

    let query = session.update(|state| state.click_warning(&ranked[idx]));
    reload(session, query).await;
    Ok(())
}
