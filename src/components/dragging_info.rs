// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use crate::components::position::Position;
use crate::ecs::component::Component;

/// ドラッグ中のカードにだけ付くコンポーネントだよ！🖱️➡️🃏
///
/// これが付いてるカードは物理ステップの対象外になる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DraggingInfo {
    /// ドラッグ開始時のポインタとカード左上のオフセット X
    pub offset_x: f32,
    /// ドラッグ開始時のポインタとカード左上のオフセット Y
    pub offset_y: f32,
    /// 直前のティックで記録したカード位置。離したときの速度はここからの差分で決まる。
    /// ドラッグ開始からまだ 1 回もティックが回ってなければ `None`。
    pub last_tick: Option<Position>,
}

impl Component for DraggingInfo {}

impl DraggingInfo {
    pub fn new(offset_x: f32, offset_y: f32) -> Self {
        DraggingInfo {
            offset_x,
            offset_y,
            last_tick: None,
        }
    }
}
