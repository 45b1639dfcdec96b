use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// The backend keeps all business dates in Polish local time.
pub fn current_time_zone() -> Tz {
    chrono_tz::Europe::Warsaw
}

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

fn get_from_env_js() -> Option<String> {
    // Expect optional global object: window.__HRHELPER_ENV = { API_BASE_URL: "..." }
    let w = window()?;
    let any = js_sys::Reflect::get(&w, &"__HRHELPER_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

fn get_from_window_config() -> Option<String> {
    // Expect optional global object: window.__HRHELPER_CONFIG = { api_base_url: "..." }
    let w = window()?;
    let any = js_sys::Reflect::get(&w, &"__HRHELPER_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"api_base_url".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"API_BASE_URL".into()).ok());
    val.and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    if let Some(env_url) = get_from_env_js() {
        return Some(env_url);
    }
    get_from_window_config()
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    if cfg.api_base_url.is_none() {
        return;
    }
    let w = match window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    if let Some(url) = &cfg.api_base_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    let _ = js_sys::Reflect::set(&w, &"__HRHELPER_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await?;
    if !resp.status().is_success() {
        anyhow::bail!("config.json request failed: {}", resp.status());
    }
    Ok(resp.json::<RuntimeConfig>().await?)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(cfg) => {
            write_window_config(&cfg);
            if let Some(url) = cfg.api_base_url {
                return cache_base_url(&url);
            }
        }
        Err(err) => log::warn!("Runtime config not loaded, using default: {err}"),
    }
    cache_base_url("http://localhost:8888/api/v1")
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
