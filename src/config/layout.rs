// src/config/layout.rs
//! コンテナの大きさと、カードをその中に収めるための計算。

use serde::{Deserialize, Serialize};

use crate::components::{Card, Position};

/// カードを閉じ込める矩形。初期化時に 1 回だけ測って、その後は変えない (リサイズ非対応)。
///
/// `origin_x` / `origin_y` はコンテナ左上のクライアント座標で、
/// ポインタ座標をコンテナ内ローカル座標に直すのに使う。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerBounds {
    pub fn new(origin_x: f32, origin_y: f32, width: f32, height: f32) -> Self {
        ContainerBounds {
            origin_x: finite_or_zero(origin_x),
            origin_y: finite_or_zero(origin_y),
            width: finite_or_zero(width).max(0.0),
            height: finite_or_zero(height).max(0.0),
        }
    }

    /// 原点 (0, 0) のコンテナ。テストやオフスクリーンで使う。
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// カード左上の X が取れる最大値 (`containerWidth - cardWidth`)。
    /// カードの方が大きいと負になる。
    pub fn max_x(&self, card: &Card) -> f32 {
        self.width - card.width
    }

    /// カード左上の Y が取れる最大値。
    pub fn max_y(&self, card: &Card) -> f32 {
        self.height - card.height
    }

    /// 位置をカードが全部コンテナ内に収まる範囲 `[0, container - card]` に丸める。
    /// カードの方が大きいときは 0 に張り付く。
    pub fn clamp(&self, card: &Card, x: f32, y: f32) -> Position {
        Position {
            x: clamp_axis(x, self.max_x(card)),
            y: clamp_axis(y, self.max_y(card)),
        }
    }

    /// クライアント座標 -> コンテナ内ローカル座標
    pub fn to_local(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        (client_x - self.origin_x, client_y - self.origin_y)
    }
}

/// `max(0, min(value, max))`。NaN は 0 に落とす。
pub fn clamp_axis(value: f32, max: f32) -> f32 {
    finite_or_zero(value).min(max).max(0.0)
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_card_inside() {
        let bounds = ContainerBounds::sized(400.0, 300.0);
        let card = Card::new(100.0, 50.0);

        assert_eq!(bounds.clamp(&card, -20.0, 10.0), Position::new(0.0, 10.0));
        assert_eq!(bounds.clamp(&card, 350.0, 280.0), Position::new(300.0, 250.0));
        assert_eq!(bounds.clamp(&card, 120.0, 80.0), Position::new(120.0, 80.0));
    }

    #[test]
    fn oversized_card_sticks_to_origin() {
        let bounds = ContainerBounds::sized(50.0, 50.0);
        let card = Card::new(80.0, 80.0);
        assert_eq!(bounds.clamp(&card, 30.0, -5.0), Position::new(0.0, 0.0));
    }

    #[test]
    fn nan_never_leaks_out_of_clamp() {
        assert_eq!(clamp_axis(f32::NAN, 100.0), 0.0);
        let bounds = ContainerBounds::new(f32::NAN, 5.0, f32::INFINITY, 20.0);
        assert_eq!(bounds.origin_x, 0.0);
        assert_eq!(bounds.width, 0.0);
    }

    #[test]
    fn to_local_subtracts_origin() {
        let bounds = ContainerBounds::new(30.0, 40.0, 500.0, 500.0);
        assert_eq!(bounds.to_local(130.0, 45.0), (100.0, 5.0));
    }
}
