// src/config/physics.rs
//! 物理まわりの調整値。
//!
//! 離したときの速度倍率 0.5 と跳ね返り係数 0.7 は見た目で決めた値なので、
//! 全部フィールドにして上書きできるようにしてある。

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

pub const DEFAULT_TICK_INTERVAL_MS: u32 = 16; // だいたい 60fps
pub const DEFAULT_FRICTION: f32 = 0.98;
pub const DEFAULT_RESTITUTION: f32 = 0.7;
pub const DEFAULT_RELEASE_VELOCITY_SCALE: f32 = 0.5;
pub const DEFAULT_VELOCITY_FLOOR: f32 = 0.1;
pub const DEFAULT_MAX_THROW_SPEED: f32 = 10.0;
pub const DEFAULT_MAX_ROTATION_DEG: f32 = 30.0;
pub const DEFAULT_SHUFFLE_DURATION_MS: u32 = 500;
/// setInterval に渡せる上限。これより長いティックは意味がないので弾く
pub const MAX_TICK_INTERVAL_MS: u32 = 60_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// ティックの間隔 (ms)
    pub tick_interval_ms: u32,
    /// 毎ティック速度に掛ける係数
    pub friction: f32,
    /// 壁に当たったときに速度に掛ける係数 (符号反転は別)
    pub restitution: f32,
    /// 離したときの「最後の 1 ティックの移動量」に掛ける係数
    pub release_velocity_scale: f32,
    /// これより遅い軸はぴったり 0 にする
    pub velocity_floor: f32,
    /// スローで付ける速度の各成分の上限 (px/tick)
    pub max_throw_speed: f32,
    /// シャッフルの回転の上限 (度)
    pub max_rotation_deg: f32,
    /// シャッフルのアニメーション時間 (ms)
    pub shuffle_duration_ms: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
            release_velocity_scale: DEFAULT_RELEASE_VELOCITY_SCALE,
            velocity_floor: DEFAULT_VELOCITY_FLOOR,
            max_throw_speed: DEFAULT_MAX_THROW_SPEED,
            max_rotation_deg: DEFAULT_MAX_ROTATION_DEG,
            shuffle_duration_ms: DEFAULT_SHUFFLE_DURATION_MS,
        }
    }
}

impl PhysicsConfig {
    /// 値の範囲チェック。
    ///
    /// friction は (0, 1)。1 以上だと速度が減らないので止まらなくなる。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 || self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(ConfigError::OutOfRange {
                field: "tick_interval_ms",
                value: self.tick_interval_ms as f32,
            });
        }
        check_range("friction", self.friction, |v| v > 0.0 && v < 1.0)?;
        check_range("restitution", self.restitution, |v| (0.0..=1.0).contains(&v))?;
        check_range("release_velocity_scale", self.release_velocity_scale, |v| v >= 0.0)?;
        check_range("velocity_floor", self.velocity_floor, |v| v > 0.0)?;
        check_range("max_throw_speed", self.max_throw_speed, |v| v >= 0.0)?;
        check_range("max_rotation_deg", self.max_rotation_deg, |v| (0.0..=180.0).contains(&v))?;
        Ok(())
    }

    /// ティック間隔を f32 の ms で。
    pub fn tick_ms(&self) -> f32 {
        self.tick_interval_ms as f32
    }
}

fn check_range(field: &'static str, value: f32, ok: impl Fn(f32) -> bool) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PhysicsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval_ms, 16);
        assert_eq!(config.friction, 0.98);
        assert_eq!(config.restitution, 0.7);
        assert_eq!(config.release_velocity_scale, 0.5);
        assert_eq!(config.velocity_floor, 0.1);
    }

    #[test]
    fn friction_of_one_never_settles_and_is_rejected() {
        let config = PhysicsConfig {
            friction: 1.0,
            ..PhysicsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "friction", .. })
        ));
    }

    #[test]
    fn nan_and_zero_interval_are_rejected() {
        let nan_floor = PhysicsConfig {
            velocity_floor: f32::NAN,
            ..PhysicsConfig::default()
        };
        assert!(nan_floor.validate().is_err());

        let zero_tick = PhysicsConfig {
            tick_interval_ms: 0,
            ..PhysicsConfig::default()
        };
        assert!(matches!(
            zero_tick.validate(),
            Err(ConfigError::OutOfRange { field: "tick_interval_ms", .. })
        ));
    }

    #[test]
    fn huge_tick_interval_is_rejected() {
        let at_limit = PhysicsConfig {
            tick_interval_ms: MAX_TICK_INTERVAL_MS,
            ..PhysicsConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        // i32 に収まらない値は setInterval に渡すと負になってしまう
        let huge = PhysicsConfig {
            tick_interval_ms: u32::MAX,
            ..PhysicsConfig::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(ConfigError::OutOfRange { field: "tick_interval_ms", .. })
        ));
    }
}
