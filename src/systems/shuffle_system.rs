// src/systems/shuffle_system.rs

use rand::Rng;

use crate::components::{Card, Rotation, ShuffleTransition};
use crate::config::{ContainerBounds, PhysicsConfig};
use crate::ecs::{System, World};

/// 全カードをコンテナ内のランダムな位置に飛ばして、少し傾けるシステム 🔀
///
/// 移動そのものは CSS のトランジションで見せるので、カードには
/// `ShuffleTransition` を付けておく。速度はいじらない。
pub struct ShuffleSystem<'r, R: Rng> {
    bounds: ContainerBounds,
    duration_ms: f32,
    max_rotation_deg: f32,
    rng: &'r mut R,
}

impl<'r, R: Rng> ShuffleSystem<'r, R> {
    pub fn new(bounds: ContainerBounds, config: &PhysicsConfig, rng: &'r mut R) -> Self {
        Self {
            bounds,
            duration_ms: config.shuffle_duration_ms as f32,
            max_rotation_deg: config.max_rotation_deg,
            rng,
        }
    }
}

impl<R: Rng> System for ShuffleSystem<'_, R> {
    fn run(&mut self, world: &mut World) {
        let cards = world.get_all_entities_with_component::<Card>();
        log::info!("Shuffling {} cards", cards.len());

        for entity in cards {
            let Some(card) = world.get_component::<Card>(entity).copied() else {
                continue;
            };
            // [0, max) の一様乱数。カードが入りきらないときは 0
            let x = self.rng.gen::<f32>() * self.bounds.max_x(&card).max(0.0);
            let y = self.rng.gen::<f32>() * self.bounds.max_y(&card).max(0.0);
            let degrees = self.rng.gen::<f32>() * 2.0 * self.max_rotation_deg - self.max_rotation_deg;

            world.add_component(entity, self.bounds.clamp(&card, x, y));
            world.add_component(entity, Rotation { degrees });
            world.add_component(entity, ShuffleTransition { remaining_ms: self.duration_ms });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Position, Velocity};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_places_cards_inside_and_tilts_them() {
        let mut world = World::new();
        let bounds = ContainerBounds::sized(600.0, 400.0);
        let mut entities = Vec::new();
        for i in 0..8 {
            let entity = world.create_entity();
            world.add_component(entity, Card::new(80.0, 120.0));
            world.add_component(entity, Position::new(i as f32, 0.0));
            world.add_component(entity, Velocity::new(1.5, -2.5));
            entities.push(entity);
        }

        let mut rng = StdRng::seed_from_u64(7);
        ShuffleSystem::new(bounds, &PhysicsConfig::default(), &mut rng).run(&mut world);

        for entity in entities {
            let pos = world.get_component::<Position>(entity).expect("position");
            assert!((0.0..=520.0).contains(&pos.x), "x = {}", pos.x);
            assert!((0.0..=280.0).contains(&pos.y), "y = {}", pos.y);

            let rotation = world.get_component::<Rotation>(entity).expect("rotation");
            assert!((-30.0..=30.0).contains(&rotation.degrees), "deg = {}", rotation.degrees);

            assert_eq!(
                world.get_component::<ShuffleTransition>(entity),
                Some(&ShuffleTransition { remaining_ms: 500.0 })
            );
            // 速度はそのまま
            assert_eq!(world.get_component::<Velocity>(entity), Some(&Velocity::new(1.5, -2.5)));
        }
    }

    #[test]
    fn shuffle_with_card_larger_than_container_stays_at_origin() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, Card::new(500.0, 500.0));

        let mut rng = StdRng::seed_from_u64(1);
        ShuffleSystem::new(ContainerBounds::sized(100.0, 100.0), &PhysicsConfig::default(), &mut rng)
            .run(&mut world);

        assert_eq!(world.get_component::<Position>(entity), Some(&Position::new(0.0, 0.0)));
    }
}
