// src/config/dom.rs
//! ホストページ側の要素を探すための名前たち。

use serde::{Deserialize, Serialize};

/// ホストページが用意する要素の ID とクラス名。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    /// カードを閉じ込めるコンテナの ID
    pub container_id: String,
    /// カード要素に付いてるクラス名
    pub card_class: String,
    /// ドラッグ中のカードに付けるクラス名
    pub dragging_class: String,
    /// シャッフルボタンの ID
    pub shuffle_button_id: String,
    /// スローボタンの ID
    pub throw_button_id: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        DomConfig {
            container_id: "physicsContainer".to_string(),
            card_class: "physics-card".to_string(),
            dragging_class: "dragging".to_string(),
            shuffle_button_id: "shuffleBtn".to_string(),
            throw_button_id: "throwBtn".to_string(),
        }
    }
}
