// src/systems/throw_system.rs

use rand::Rng;

use crate::components::{Card, Velocity};
use crate::config::PhysicsConfig;
use crate::ecs::{System, World};

/// 全カードにランダムな速度を与えてばらまくシステム 🎯
///
/// 各成分は `[-max_throw_speed, +max_throw_speed]` の一様乱数。
/// あとは毎ティックの摩擦と壁の減衰で勝手に止まる。
pub struct ThrowSystem<'r, R: Rng> {
    max_speed: f32,
    rng: &'r mut R,
}

impl<'r, R: Rng> ThrowSystem<'r, R> {
    pub fn new(config: &PhysicsConfig, rng: &'r mut R) -> Self {
        Self {
            max_speed: config.max_throw_speed,
            rng,
        }
    }

    fn random_component(&mut self) -> f32 {
        (self.rng.gen::<f32>() - 0.5) * 2.0 * self.max_speed
    }
}

impl<R: Rng> System for ThrowSystem<'_, R> {
    fn run(&mut self, world: &mut World) {
        let cards = world.get_all_entities_with_component::<Card>();
        log::info!("Throwing {} cards", cards.len());

        for entity in cards {
            let velocity = Velocity::new(self.random_component(), self.random_component());
            world.add_component(entity, velocity);
        }
    }
}
