// src/components/position.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// カードの左上の位置 (コンテナ内ローカルのピクセル座標) だよ！📍
///
/// これがカード位置の「正」で、描画側はここを読んで `left` / `top` に書くだけ。
/// DOM から位置を読み戻すことはしない。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Component for Position {}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_position_component() {
        let pos = Position::new(100.5, -50.0);
        assert_eq!(pos.x, 100.5);
        assert_eq!(pos.y, -50.0);
        assert_eq!(Position::default(), Position::new(0.0, 0.0));

        // Component トレイトが実装されているかチェック
        fn needs_component<T: Component>(_: T) {}
        needs_component(pos);
    }
}
