// src/app/renderer.rs
//! Simulation の状態をカード要素のスタイルに書き出す。
//! 書くだけで、DOM から値を読み戻すことはしないよ (Simulation -> DOM の一方通行)。

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::components::Rotation;
use crate::ecs::Entity;
use crate::simulation::CardSnapshot;

pub(crate) struct Renderer {
    elements: HashMap<Entity, HtmlElement>,
    dragging_class: String,
    transition_css: String,
}

impl Renderer {
    pub fn new(cards: Vec<(Entity, HtmlElement)>, dragging_class: String, shuffle_duration_ms: u32) -> Self {
        Renderer {
            elements: cards.into_iter().collect(),
            dragging_class,
            transition_css: transition_css(shuffle_duration_ms),
        }
    }

    /// 全カード分書き出す。1 枚失敗しても残りは続ける。
    pub fn render(&self, snapshot: &[CardSnapshot]) {
        for card in snapshot {
            let Some(element) = self.elements.get(&card.entity) else {
                continue;
            };
            if let Err(e) = self.render_card(element, card) {
                log::error!("App::Renderer: failed to render {:?}: {:?}", card.entity, e);
            }
        }
    }

    fn render_card(&self, element: &HtmlElement, card: &CardSnapshot) -> Result<(), JsValue> {
        let style = element.style();
        style.set_property("left", &format!("{}px", card.x))?;
        style.set_property("top", &format!("{}px", card.y))?;

        if let Some(degrees) = card.rotation_deg {
            style.set_property("transform", &Rotation { degrees }.to_css())?;
        }

        // シャッフル中だけアニメーション。それ以外は即時に置く
        let transition = if card.transitioning { self.transition_css.as_str() } else { "" };
        style.set_property("transition", transition)?;

        element
            .class_list()
            .toggle_with_force(&self.dragging_class, card.dragging)?;
        Ok(())
    }
}

/// `shuffle_duration_ms` から `all 0.5s ease` みたいな値を作る。
pub(crate) fn transition_css(duration_ms: u32) -> String {
    format!("all {}s ease", duration_ms as f32 / 1000.0)
}
