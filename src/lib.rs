// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！
pub mod app;
pub mod components;
pub mod config;
pub mod ecs;
pub mod input;
pub mod simulation;
pub mod systems;

pub use app::physics_app::PhysicsCardsApp;
pub use config::{AppConfig, ContainerBounds, PhysicsConfig};
pub use input::InputEvent;
pub use simulation::{CardSnapshot, Simulation};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
// パニックをコンソールに出すフックと、log クレートの出力先をつなぐ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger already set: {}", e)));
    }
    log::info!("physics_cards loaded");
}
