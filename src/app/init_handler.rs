// src/app/init_handler.rs
//! 起動時に 1 回だけやる DOM の読み取り。
//! コンテナの大きさを測って、カード要素を集めて、Simulation を組み立てる。

use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::config::{AppConfig, ContainerBounds};
use crate::ecs::Entity;
use crate::simulation::Simulation;

/// 見つかったウィジェット一式。
pub(crate) struct DiscoveredWidget {
    pub simulation: Simulation,
    /// エンティティと DOM 要素の対応 (ID 順)
    pub cards: Vec<(Entity, HtmlElement)>,
}

/// コンテナとカードを探して Simulation を作る。
///
/// コンテナが無ければ `Ok(None)`。呼び出し側はウィジェットを無効のまま動かす。
pub(crate) fn discover_widget(document: &Document, config: &AppConfig) -> Result<Option<DiscoveredWidget>, JsValue> {
    let Some(container) = document.get_element_by_id(&config.dom.container_id) else {
        warn!("App::Init: container #{} not found", config.dom.container_id);
        return Ok(None);
    };

    let rect = container.get_bounding_client_rect();
    let bounds = ContainerBounds::new(rect.x() as f32, rect.y() as f32, rect.width() as f32, rect.height() as f32);
    info!("App::Init: container bounds {:?}", bounds);

    let mut simulation = Simulation::new(bounds, config.physics.clone());
    let mut cards = Vec::new();

    // カードはドキュメント全体から 1 回だけ集める。後から増えたカードは拾わない
    let collection = document.get_elements_by_class_name(&config.dom.card_class);
    for index in 0..collection.length() {
        let Some(element) = collection.item(index) else {
            continue;
        };
        let element = match element.dyn_into::<HtmlElement>() {
            Ok(element) => element,
            Err(_) => {
                warn!("App::Init: .{} element #{} is not an HtmlElement, skipping", config.dom.card_class, index);
                continue;
            }
        };

        let style = element.style();
        let left = parse_px(&style.get_property_value("left")?);
        let top = parse_px(&style.get_property_value("top")?);
        let entity = simulation.add_card(
            element.offset_width() as f32,
            element.offset_height() as f32,
            left,
            top,
        );
        cards.push((entity, element));
    }

    info!("App::Init: found {} cards", cards.len());
    Ok(Some(DiscoveredWidget { simulation, cards }))
}

/// `"120px"` みたいな CSS の長さを数値にする。
///
/// 空、`auto`、壊れた値は全部 0。NaN を物理計算に入れないため。
pub fn parse_px(value: &str) -> f32 {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    match number.parse::<f32>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => 0.0,
    }
}
