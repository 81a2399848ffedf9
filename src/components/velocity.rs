// src/components/velocity.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// 1 ティックあたりの移動量 (px/tick)。
///
/// World の `HashMap<Entity, Velocity>` がそのまま「速度テーブル」になる。
/// エントリが無いカードは速度 0 として扱うよ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

impl Component for Velocity {}

impl Velocity {
    pub const ZERO: Velocity = Velocity { vx: 0.0, vy: 0.0 };

    pub fn new(vx: f32, vy: f32) -> Self {
        Velocity { vx, vy }
    }

    /// 両方の軸が 0 なら止まってる。
    pub fn is_at_rest(&self) -> bool {
        self.vx == 0.0 && self.vy == 0.0
    }

    /// ベクトルの大きさ。
    pub fn magnitude(&self) -> f32 {
        self.vx.hypot(self.vy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_velocity_is_at_rest() {
        assert!(Velocity::ZERO.is_at_rest());
        assert!(Velocity::default().is_at_rest());
        assert!(!Velocity::new(0.0, -0.5).is_at_rest());
    }

    #[test]
    fn magnitude_is_euclidean() {
        assert_eq!(Velocity::new(3.0, 4.0).magnitude(), 5.0);
    }
}
