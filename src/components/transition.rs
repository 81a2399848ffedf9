// src/components/transition.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// シャッフル直後の「アニメーション中」フラグ。
///
/// これが付いてる間、描画側はカードに CSS トランジションを付ける。
/// 時間は `TransitionTimerSystem` がティックごとに減らして、0 以下で外すよ。
/// 外れた後は普通の即時配置に戻る。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShuffleTransition {
    pub remaining_ms: f32,
}

impl Component for ShuffleTransition {}
