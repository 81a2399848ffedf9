// src/systems/drag_system.rs
//! カードのドラッグ処理 (開始・移動・終了)。
//!
//! ここの関数は World だけを触る。「今どのカードをドラッグ中か」は
//! `Simulation` が持ってて、ここには対象のエンティティを渡してもらう。

use crate::components::{Card, DraggingInfo, Position, Velocity};
use crate::config::{ContainerBounds, PhysicsConfig};
use crate::ecs::{Entity, World};

/// ドラッグ開始。管理対象のカードじゃなければ何もせず `false`。
///
/// つかんだ位置のオフセット (ポインタ - カード左上) を覚えて、速度を 0 にする。
pub fn begin_drag(
    world: &mut World,
    bounds: &ContainerBounds,
    entity: Entity,
    client_x: f32,
    client_y: f32,
) -> bool {
    if !world.has_component::<Card>(entity) {
        log::debug!("begin_drag: {:?} is not a managed card, ignoring", entity);
        return false;
    }

    let position = world.get_component::<Position>(entity).copied().unwrap_or_default();
    let (local_x, local_y) = bounds.to_local(client_x, client_y);
    let dragging_info = DraggingInfo::new(local_x - position.x, local_y - position.y);

    world.add_component(entity, dragging_info);
    world.add_component(entity, Velocity::ZERO);
    log::debug!("Drag started on {:?} with offset {:?}", entity, dragging_info);
    true
}

/// ドラッグ中の位置更新。ポインタ - コンテナ原点 - オフセット をコンテナ内に収めて書き込む。
pub fn drag_to(world: &mut World, bounds: &ContainerBounds, entity: Entity, client_x: f32, client_y: f32) {
    let (Some(info), Some(card)) = (
        world.get_component::<DraggingInfo>(entity).copied(),
        world.get_component::<Card>(entity).copied(),
    ) else {
        log::warn!("drag_to: {:?} is not being dragged", entity);
        return;
    };

    let (local_x, local_y) = bounds.to_local(client_x, client_y);
    let clamped = bounds.clamp(&card, local_x - info.offset_x, local_y - info.offset_y);
    world.add_component(entity, clamped);
}

/// ティックが回ったときに、ドラッグ中のカードの今の位置を覚えておく。
pub fn record_last_tick(world: &mut World, entity: Entity) {
    let position = world.get_component::<Position>(entity).copied().unwrap_or_default();
    if let Some(info) = world.get_component_mut::<DraggingInfo>(entity) {
        info.last_tick = Some(position);
    }
}

/// ドラッグ終了。
///
/// 直前のティックの位置が記録されていれば、(今の位置 - その位置) * 倍率 を
/// 離したときの速度にして返す。記録がなければ速度はいじらず `None`。
pub fn end_drag(world: &mut World, config: &PhysicsConfig, entity: Entity) -> Option<Velocity> {
    let Some(info) = world.remove_component::<DraggingInfo>(entity) else {
        log::warn!("end_drag: {:?} had no DraggingInfo", entity);
        return None;
    };

    let last = info.last_tick?;
    let current = world.get_component::<Position>(entity).copied().unwrap_or_default();
    let release = Velocity::new(
        (current.x - last.x) * config.release_velocity_scale,
        (current.y - last.y) * config.release_velocity_scale,
    );
    world.add_component(entity, release);
    log::debug!("Drag ended on {:?}, release velocity {:?}", entity, release);
    Some(release)
}
