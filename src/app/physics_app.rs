// src/app/physics_app.rs

use std::sync::{Arc, Mutex};

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;

use super::browser_event_manager::{self, ListenerHandle, Ticker};
use super::init_handler;
use super::renderer::Renderer;
use super::state_getter;
use crate::config::{AppConfig, ContainerBounds};
use crate::input::InputEvent;
use crate::simulation::Simulation;

/// ページ上の物理カードウィジェット 1 つ分。JS から `new PhysicsCardsApp()` で作る。
///
/// 自動では起動しないので、ホストページが DOM を用意したあとに自分で作ること。
/// コンテナが見つからないときもエラーにはせず、何もしないウィジェットになる。
#[wasm_bindgen]
pub struct PhysicsCardsApp {
    simulation: Arc<Mutex<Simulation>>,
    // コンテナが無いときは None (描画するものがない)
    renderer: Option<Arc<Mutex<Renderer>>>,
    listeners: Vec<ListenerHandle>,
    ticker: Option<Ticker>,
}

#[wasm_bindgen]
impl PhysicsCardsApp {
    /// デフォルトの要素名 (`#physicsContainer`, `.physics-card`, `#shuffleBtn`, `#throwBtn`) で起動する。
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PhysicsCardsApp, JsValue> {
        Self::mount(AppConfig::default())
    }

    /// JSON の設定で起動する。省略したフィールドはデフォルト。
    /// 壊れた JSON や範囲外の値は例外になる。
    pub fn with_config(config_json: &str) -> Result<PhysicsCardsApp, JsValue> {
        let config = AppConfig::from_json(config_json)?;
        Self::mount(config)
    }

    /// シャッフルボタンと同じ。次のティックで処理される。止まってるアプリでは何もしない。
    pub fn shuffle(&self) {
        self.push_input(InputEvent::Shuffle);
    }

    /// スローボタンと同じ。次のティックで処理される。止まってるアプリでは何もしない。
    pub fn throw_all(&self) {
        self.push_input(InputEvent::Throw);
    }

    /// 手動で 1 ティック進めて描画する。
    pub fn step(&self) {
        match &self.renderer {
            Some(renderer) => browser_event_manager::run_frame(&self.simulation, renderer),
            None => browser_event_manager::lock_simulation(&self.simulation).tick(),
        }
    }

    pub fn card_count(&self) -> usize {
        browser_event_manager::lock_simulation(&self.simulation).card_count()
    }

    pub fn is_active(&self) -> bool {
        self.ticker.is_some()
    }

    /// 全カードの状態を JSON で。
    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_state_json(&self.simulation)
    }

    /// ティックを止めてリスナーを全部外す。2 回呼んでも大丈夫。
    pub fn destroy(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            browser_event_manager::stop_ticker(ticker);
        }
        if !self.listeners.is_empty() {
            browser_event_manager::detach_listeners(&mut self.listeners);
            info!("PhysicsCardsApp: detached all listeners");
        }
    }
}

impl PhysicsCardsApp {
    fn mount(config: AppConfig) -> Result<PhysicsCardsApp, JsValue> {
        config.physics.validate()?;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or("Failed to get document")?;

        let Some(widget) = init_handler::discover_widget(&document, &config)? else {
            warn!("PhysicsCardsApp: running without a container, nothing to animate");
            return Ok(Self::inert(config));
        };

        let simulation = Arc::new(Mutex::new(widget.simulation));
        let mut listeners = browser_event_manager::attach_card_listeners(&simulation, &widget.cards)?;
        listeners.extend(browser_event_manager::attach_document_listeners(&simulation, &document)?);
        listeners.extend(browser_event_manager::attach_action_buttons(&simulation, &document, &config.dom)?);

        let renderer = Renderer::new(
            widget.cards,
            config.dom.dragging_class.clone(),
            config.physics.shuffle_duration_ms,
        );
        // 最初の 1 回は位置を揃えるためにすぐ描く
        renderer.render(&browser_event_manager::lock_simulation(&simulation).snapshot());
        let renderer = Arc::new(Mutex::new(renderer));

        let ticker = browser_event_manager::start_ticker(&simulation, &renderer, config.physics.tick_interval_ms)?;

        info!("PhysicsCardsApp: mounted with {} listeners", listeners.len());
        Ok(PhysicsCardsApp {
            simulation,
            renderer: Some(renderer),
            listeners,
            ticker: Some(ticker),
        })
    }

    fn inert(config: AppConfig) -> PhysicsCardsApp {
        PhysicsCardsApp {
            simulation: Arc::new(Mutex::new(Simulation::new(ContainerBounds::default(), config.physics))),
            renderer: None,
            listeners: Vec::new(),
            ticker: None,
        }
    }

    // 止まってるとキューを流す人がいないので積まない
    fn push_input(&self, event: InputEvent) {
        if !self.is_active() {
            debug!("PhysicsCardsApp: not active, dropping {:?}", event);
            return;
        }
        browser_event_manager::lock_simulation(&self.simulation).push_input(event);
    }
}

// 捨てられたらタイマーとリスナーを片付ける
impl Drop for PhysicsCardsApp {
    fn drop(&mut self) {
        self.destroy();
    }
}
