//! Gets the current card state from the Simulation and converts it to JSON.

use std::sync::{Arc, Mutex};

use log::error;
use wasm_bindgen::JsValue;

use crate::app::browser_event_manager::lock_simulation;
use crate::simulation::Simulation;

/// 全カードの状態を JSON 文字列で返す。デバッグ用。
pub fn get_state_json(simulation: &Arc<Mutex<Simulation>>) -> Result<String, JsValue> {
    let snapshot = lock_simulation(simulation).snapshot();
    serde_json::to_string(&snapshot).map_err(|e| {
        let error_msg = format!("Failed to serialize card state: {}", e);
        error!("{}", error_msg);
        JsValue::from_str(&error_msg)
    })
}
