// src/systems/physics_system.rs

use crate::components::{Card, DraggingInfo, Position, Velocity};
use crate::config::layout::clamp_axis;
use crate::config::{ContainerBounds, PhysicsConfig};
use crate::ecs::{System, World};

/// 1 ティック分の物理を進めるシステムだよ！🏃💨
///
/// ドラッグ中のカード (`DraggingInfo` 持ち) 以外の全カードについて、
/// 移動 -> 壁との衝突 -> 摩擦 -> 最低速度で止める、の順で処理する。
/// カード同士の当たり判定はしない。
pub struct PhysicsSystem {
    bounds: ContainerBounds,
    config: PhysicsConfig,
}

impl PhysicsSystem {
    pub fn new(bounds: ContainerBounds, config: PhysicsConfig) -> Self {
        Self { bounds, config }
    }
}

impl System for PhysicsSystem {
    fn run(&mut self, world: &mut World) {
        for entity in world.get_all_entities_with_component::<Card>() {
            if world.has_component::<DraggingInfo>(entity) {
                continue;
            }
            let Some(card) = world.get_component::<Card>(entity).copied() else {
                continue;
            };
            let position = world.get_component::<Position>(entity).copied().unwrap_or_default();
            // 速度テーブルにまだ居なければここで 0 として作る
            let velocity = world.get_component::<Velocity>(entity).copied().unwrap_or_default();

            let (next_position, next_velocity) =
                step_card(&card, position, velocity, &self.bounds, &self.config);

            world.add_component(entity, next_position);
            world.add_component(entity, next_velocity);
        }
    }
}

/// カード 1 枚を 1 ティック進める。
pub fn step_card(
    card: &Card,
    position: Position,
    velocity: Velocity,
    bounds: &ContainerBounds,
    config: &PhysicsConfig,
) -> (Position, Velocity) {
    // 1. 位置 += 速度
    let x = position.x + velocity.vx;
    let y = position.y + velocity.vy;

    // 2. 壁との衝突 (軸ごとに別々)
    let (x, vx) = resolve_boundary(x, velocity.vx, bounds.max_x(card), config.restitution);
    let (y, vy) = resolve_boundary(y, velocity.vy, bounds.max_y(card), config.restitution);

    // 3. 摩擦 4. 最低速度
    let vx = settle(vx * config.friction, config.velocity_floor);
    let vy = settle(vy * config.friction, config.velocity_floor);

    // 5. 最後にもう一度収める (カードがコンテナより大きいと max が負になるので)
    let next_position = Position {
        x: clamp_axis(x, bounds.max_x(card)),
        y: clamp_axis(y, bounds.max_y(card)),
    };
    (next_position, Velocity { vx, vy })
}

/// 1 軸分の壁判定。はみ出してたら壁にぴったり置いて、速度を反転して減衰させる。
pub fn resolve_boundary(pos: f32, vel: f32, max: f32, restitution: f32) -> (f32, f32) {
    if pos < 0.0 {
        (0.0, vel * -restitution)
    } else if pos > max {
        (max, vel * -restitution)
    } else {
        (pos, vel)
    }
}

/// `floor` より遅ければぴったり 0 に。NaN も 0。
fn settle(vel: f32, floor: f32) -> f32 {
    if vel.is_nan() || vel.abs() < floor {
        0.0
    } else {
        vel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(card: Card, position: Position, velocity: Option<Velocity>) -> (World, crate::ecs::Entity) {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, card);
        world.add_component(entity, position);
        if let Some(velocity) = velocity {
            world.add_component(entity, velocity);
        }
        (world, entity)
    }

    fn system(width: f32, height: f32) -> PhysicsSystem {
        PhysicsSystem::new(ContainerBounds::sized(width, height), PhysicsConfig::default())
    }

    #[test]
    fn resolve_boundary_rebounds_and_clamps_exactly() {
        let (pos, vel) = resolve_boundary(-4.0, -10.0, 300.0, 0.7);
        assert_eq!(pos, 0.0);
        assert!((vel - 7.0).abs() < 1e-6);
        let (pos, vel) = resolve_boundary(305.0, 10.0, 300.0, 0.7);
        assert_eq!(pos, 300.0);
        assert!((vel - -7.0).abs() < 1e-6);
        // 範囲内なら何もしない
        assert_eq!(resolve_boundary(150.0, 3.0, 300.0, 0.7), (150.0, 3.0));
    }

    #[test]
    fn free_flight_moves_and_applies_friction() {
        let (mut world, entity) = setup(
            Card::new(10.0, 10.0),
            Position::new(100.0, 100.0),
            Some(Velocity::new(5.0, -2.0)),
        );
        system(1000.0, 1000.0).run(&mut world);

        assert_eq!(world.get_component::<Position>(entity), Some(&Position::new(105.0, 98.0)));
        let velocity = world.get_component::<Velocity>(entity).expect("velocity");
        assert!((velocity.vx - 4.9).abs() < 1e-5);
        assert!((velocity.vy - -1.96).abs() < 1e-5);
    }

    #[test]
    fn card_without_velocity_gets_zero_entry_lazily() {
        let (mut world, entity) = setup(Card::new(10.0, 10.0), Position::new(3.0, 4.0), None);
        assert!(!world.has_component::<Velocity>(entity));

        system(100.0, 100.0).run(&mut world);

        assert_eq!(world.get_component::<Velocity>(entity), Some(&Velocity::ZERO));
        assert_eq!(world.get_component::<Position>(entity), Some(&Position::new(3.0, 4.0)));
    }

    #[test]
    fn hitting_right_wall_rebounds_with_damping_then_friction() {
        // max_x = 200 - 50 = 150。145 + 10 = 155 ではみ出す
        let (mut world, entity) = setup(
            Card::new(50.0, 50.0),
            Position::new(145.0, 20.0),
            Some(Velocity::new(10.0, 0.0)),
        );
        system(200.0, 200.0).run(&mut world);

        assert_eq!(world.get_component::<Position>(entity).map(|p| p.x), Some(150.0));
        let vx = world.get_component::<Velocity>(entity).expect("velocity").vx;
        assert!((vx - 10.0 * -0.7 * 0.98).abs() < 1e-5, "vx = {}", vx);
    }

    #[test]
    fn hitting_top_wall_rebounds_downwards() {
        let (mut world, entity) = setup(
            Card::new(20.0, 20.0),
            Position::new(50.0, 3.0),
            Some(Velocity::new(0.0, -8.0)),
        );
        system(200.0, 200.0).run(&mut world);

        assert_eq!(world.get_component::<Position>(entity), Some(&Position::new(50.0, 0.0)));
        let vy = world.get_component::<Velocity>(entity).expect("velocity").vy;
        assert!((vy - 8.0 * 0.7 * 0.98).abs() < 1e-5, "vy = {}", vy);
    }

    #[test]
    fn slow_axis_snaps_to_zero() {
        let (mut world, entity) = setup(
            Card::new(10.0, 10.0),
            Position::new(50.0, 50.0),
            Some(Velocity::new(0.1, 3.0)),
        );
        system(500.0, 500.0).run(&mut world);

        // 0.1 * 0.98 = 0.098 < 0.1
        let velocity = world.get_component::<Velocity>(entity).expect("velocity");
        assert_eq!(velocity.vx, 0.0);
        assert!(velocity.vy > 0.0);
    }

    #[test]
    fn dragged_card_is_left_alone() {
        let (mut world, entity) = setup(
            Card::new(10.0, 10.0),
            Position::new(50.0, 50.0),
            Some(Velocity::new(5.0, 5.0)),
        );
        world.add_component(entity, DraggingInfo::new(1.0, 1.0));
        system(500.0, 500.0).run(&mut world);

        assert_eq!(world.get_component::<Position>(entity), Some(&Position::new(50.0, 50.0)));
        assert_eq!(world.get_component::<Velocity>(entity), Some(&Velocity::new(5.0, 5.0)));
    }

    #[test]
    fn oversized_card_is_pinned_at_origin() {
        let (mut world, entity) = setup(
            Card::new(300.0, 300.0),
            Position::new(0.0, 0.0),
            Some(Velocity::new(4.0, -4.0)),
        );
        system(100.0, 100.0).run(&mut world);
        assert_eq!(world.get_component::<Position>(entity), Some(&Position::new(0.0, 0.0)));
    }
}
