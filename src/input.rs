// src/input.rs
//! ブラウザから来た入力を溜めておくキュー。
//!
//! イベントハンドラはここに積むだけで、実際の処理は `Simulation::tick` の頭で
//! 古い順にまとめて流す。こうすると入力の処理順とティックの順番が常に決まるので、
//! テストで合成イベントを積んでステップを進めるだけで再現できる。

use std::collections::VecDeque;

use crate::ecs::entity::Entity;

/// シミュレーションに流す入力イベント。座標はクライアント座標 (`clientX` / `clientY`)。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// カードの上でマウスボタン押下 or 指 1 本でタッチ開始
    PointerDown { entity: Entity, client_x: f32, client_y: f32 },
    /// ドキュメント上でのポインタ移動
    PointerMove { client_x: f32, client_y: f32 },
    /// ボタンを離した or 指を離した
    PointerUp,
    /// シャッフルボタン
    Shuffle,
    /// スローボタン
    Throw,
}

#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントを積む。
    ///
    /// 直前も `PointerMove` だったら、新しい座標で上書きする。ティックの間に
    /// mousemove が何十回来ても、使うのは最後の位置だけだから。
    pub fn push(&mut self, event: InputEvent) {
        let replaces_last = matches!(event, InputEvent::PointerMove { .. })
            && matches!(self.events.back(), Some(InputEvent::PointerMove { .. }));
        if replaces_last {
            self.events.pop_back();
        }
        self.events.push_back(event);
    }

    /// 溜まってるイベントを全部取り出す (古い順)。
    pub fn drain(&mut self) -> Vec<InputEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
