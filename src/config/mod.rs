// src/config/mod.rs
//! ウィジェットの設定値まわり。
//! 物理の定数 (`physics`)、DOM の要素名 (`dom`)、コンテナの大きさ (`layout`)、
//! それと設定読み込みのエラー (`error`)。

pub mod dom;
pub mod error;
pub mod layout;
pub mod physics;

use serde::{Deserialize, Serialize};

pub use dom::DomConfig;
pub use error::ConfigError;
pub use layout::ContainerBounds;
pub use physics::PhysicsConfig;

/// JS から JSON で渡してもらう設定の全体。どのフィールドも省略可。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub physics: PhysicsConfig,
    pub dom: DomConfig,
}

impl AppConfig {
    /// JSON 文字列から読み込んで、値の範囲チェックまでやる。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.physics.validate()?;
        Ok(config)
    }
}
