use anyhow::{bail, Context};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Build-time overrides, e.g. `HRMS_API_URL=https://hr.example.com/api trunk build`.
const BUILD_API_BASE_URL: Option<&str> = option_env!("HRMS_API_URL");
const BUILD_TIME_ZONE: Option<&str> = option_env!("HRMS_TIME_ZONE");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

/// First non-blank candidate wins; the fallback is used when all are blank.
pub fn resolve_base_url<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .map(normalize_base_url)
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn parse_time_zone(value: Option<&str>) -> Tz {
    value
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .and_then(|name| match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                log::warn!("Unknown time zone '{}', falling back to UTC", name);
                None
            }
        })
        .unwrap_or(Tz::UTC)
}

#[cfg(target_arch = "wasm32")]
fn read_global(object: &str, keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &object.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&any, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_object: &str, _keys: &[&str]) -> Option<String> {
    None
}

// window.__HRMS_ENV = { API_URL: "..." } is written by env.js at deploy time.
fn base_url_from_globals() -> Option<String> {
    read_global("__HRMS_ENV", &["API_URL", "API_BASE_URL", "api_base_url"])
        .or_else(|| read_global("__HRMS_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

fn time_zone_from_globals() -> Option<String> {
    read_global("__HRMS_ENV", &["TIME_ZONE", "time_zone"])
        .or_else(|| read_global("__HRMS_CONFIG", &["time_zone"]))
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let response = reqwest::get(config_json_url())
        .await
        .context("config.json request failed")?;
    if !response.status().is_success() {
        bail!("config.json returned {}", response.status());
    }
    response
        .json::<RuntimeConfig>()
        .await
        .context("config.json is not valid")
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/config.json", origin))
        .unwrap_or_else(|| "./config.json".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> String {
    "http://localhost/config.json".to_string()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let from_globals = base_url_from_globals();
    let from_file = if from_globals.is_none() {
        load_runtime_config().await.api_base_url
    } else {
        None
    };
    let resolved = resolve_base_url([
        from_globals.as_deref(),
        from_file.as_deref(),
        BUILD_API_BASE_URL,
    ]);
    API_BASE_URL.get_or_init(|| resolved).clone()
}

async fn load_runtime_config() -> RuntimeConfig {
    static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();
    if let Some(cfg) = RUNTIME_CONFIG.get() {
        return cfg.clone();
    }
    let cfg = match fetch_runtime_config().await {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("Runtime config unavailable, using defaults: {:#}", err);
            RuntimeConfig::default()
        }
    };
    RUNTIME_CONFIG.get_or_init(|| cfg).clone()
}

pub fn current_time_zone() -> Tz {
    *TIME_ZONE.get_or_init(|| {
        let from_globals = time_zone_from_globals();
        parse_time_zone(from_globals.as_deref().or(BUILD_TIME_ZONE))
    })
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    if TIME_ZONE.get().is_none() && time_zone_from_globals().is_none() {
        if let Some(name) = load_runtime_config().await.time_zone {
            let _ = TIME_ZONE.set(parse_time_zone(Some(&name)));
        }
    }
    log::info!(
        "API base URL: {} (time zone {})",
        base_url,
        current_time_zone().name()
    );
}
