// src/config.rs

use crate::model::CorrectnessMode;

#[cfg(target_arch = "wasm32")]
const DEFAULT_ENDPOINT: &str = "/api/questoes_pas_uem";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_ENDPOINT: &str = "http://127.0.0.1:5000/api/questoes_pas_uem";

const ENDPOINT_VAR: &str = "BANCO_QUESTOES_ENDPOINT";
const CORRECTNESS_VAR: &str = "BANCO_QUESTOES_CORRECAO";

/// Configuração resolvida uma vez, na inicialização.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub correctness: CorrectnessMode,
}

impl AppConfig {
    pub fn new(endpoint: impl Into<String>, correctness: CorrectnessMode) -> Self {
        Self {
            endpoint: endpoint.into(),
            correctness,
        }
    }

    pub fn resolve() -> Self {
        let correctness = correctness_setting()
            .as_deref()
            .and_then(|value| {
                let mode = CorrectnessMode::parse(value);
                if mode.is_none() {
                    log::warn!("{CORRECTNESS_VAR}={value:?} desconhecido, usando soma");
                }
                mode
            })
            .unwrap_or_default();

        Self {
            endpoint: default_endpoint(),
            correctness,
        }
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_endpoint() -> String {
    std::env::var(ENDPOINT_VAR)
        .ok()
        .as_deref()
        .and_then(normalize)
        .unwrap_or_else(|| DEFAULT_NATIVE_ENDPOINT.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn correctness_setting() -> Option<String> {
    std::env::var(CORRECTNESS_VAR).ok().as_deref().and_then(normalize)
}

#[cfg(target_arch = "wasm32")]
fn correctness_setting() -> Option<String> {
    option_env!("BANCO_QUESTOES_CORRECAO").and_then(normalize)
}

#[cfg(target_arch = "wasm32")]
fn default_endpoint() -> String {
    endpoint_from_build_env()
        .or_else(endpoint_from_querystring)
        .or_else(endpoint_from_meta)
        .or_else(endpoint_from_local_storage)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_build_env() -> Option<String> {
    option_env!("BANCO_QUESTOES_ENDPOINT").and_then(normalize)
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let value = query_param(&search, "endpoint")?;
    let decoded = js_sys::decode_uri_component(value).ok()?;
    normalize(&decoded.as_string()?)
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='banco-questoes-endpoint']")
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize)
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_local_storage() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item("banco_questoes_endpoint")
        .ok()?
        .as_deref()
        .and_then(normalize)
}

/// Valor cru (sem decodificar) de `key` numa query string `?a=1&b=2`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn query_param<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        (k == key).then_some(v)
    })
}
