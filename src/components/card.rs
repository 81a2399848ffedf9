// src/components/card.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// 「このエンティティは管理対象のカードだよ」っていう印 + カードの大きさ。
///
/// 大きさは初期化時にレイアウト (`offsetWidth` / `offsetHeight`) から読んだ値で、
/// その後は変わらない。境界判定の `containerSize - cardSize` に使う。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub width: f32,
    pub height: f32,
}

impl Component for Card {}

impl Card {
    pub fn new(width: f32, height: f32) -> Self {
        // 変な値 (NaN や負の数) が来たら 0 扱いにしておく
        Card {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }
}

fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
