// src/config/error.rs

use thiserror::Error;
use wasm_bindgen::JsValue;

/// 設定の読み込み・検証で起きるエラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config value `{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: f32 },
}

// wasm の境界では JS の Error として投げる (message でそのまま読める)
impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from(js_sys::Error::new(&err.to_string()))
    }
}
