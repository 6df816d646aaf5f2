use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(alias = "API_URL")]
    pub api_url: Option<String>,
}

const DEFAULT_API_ORIGIN: &str = "http://localhost:5000";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Turns an API origin into the base every endpoint path is joined to.
pub fn normalize_base_url(origin: &str) -> String {
    let trimmed = origin.trim().trim_end_matches('/');
    if trimmed.ends_with("/api") {
        trimmed.to_string()
    } else {
        format!("{}/api", trimmed)
    }
}

fn compile_time_origin() -> Option<String> {
    option_env!("CAPE_API_URL")
        .map(str::to_string)
        .filter(|value| !value.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn read_global(object: &str, keys: &[&str]) -> Option<String> {
    // window.__CAPE_ENV = { API_URL: "..." } (env.js) or
    // window.__CAPE_CONFIG = { api_url: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &object.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
        .filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    read_global("__CAPE_ENV", &["API_URL", "api_url"])
        .or_else(|| read_global("__CAPE_CONFIG", &["api_url", "API_URL"]))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    let (Some(url), Some(w)) = (&cfg.api_url, web_sys::window()) else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__CAPE_CONFIG".into(), &obj);
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    let cfg = resp.json::<RuntimeConfig>().await.ok()?;
    write_window_config(&cfg);
    Some(cfg)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn cache_base_url(origin: &str) -> String {
    let value = normalize_base_url(origin);
    let _ = API_BASE_URL.set(value.clone());
    log::info!("API base URL: {}", value);
    value
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config().await.and_then(|cfg| cfg.api_url) {
        return cache_base_url(&url);
    }
    let origin = compile_time_origin().unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string());
    cache_base_url(&origin)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
