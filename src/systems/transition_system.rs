// src/systems/transition_system.rs

use crate::components::ShuffleTransition;
use crate::ecs::{System, World};

/// シャッフルのアニメーション時間を減らして、終わったものを外すシステム。
///
/// ブラウザの setTimeout 代わり。ティック単位で進むので、テストでも時間を再現できる。
pub struct TransitionTimerSystem {
    elapsed_ms: f32,
}

impl TransitionTimerSystem {
    pub fn new(elapsed_ms: f32) -> Self {
        Self { elapsed_ms }
    }
}

impl System for TransitionTimerSystem {
    fn run(&mut self, world: &mut World) {
        for entity in world.get_all_entities_with_component::<ShuffleTransition>() {
            let finished = match world.get_component_mut::<ShuffleTransition>(entity) {
                Some(transition) => {
                    transition.remaining_ms -= self.elapsed_ms;
                    transition.remaining_ms <= 0.0
                }
                None => false,
            };
            if finished {
                world.remove_component::<ShuffleTransition>(entity);
                log::trace!("Shuffle transition finished for {:?}", entity);
            }
        }
    }
}
