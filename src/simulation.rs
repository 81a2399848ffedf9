// src/simulation.rs
//! カードの物理シミュレーションの本体。
//!
//! World (カードと速度テーブル)、コンテナの大きさ、設定値、入力キュー、
//! 乱数、今ドラッグ中のカード、を全部この 1 つの構造体が持つ。
//! ブラウザ側はこれを `Arc<Mutex<..>>` で共有して、イベントを積んで `tick` を呼ぶだけ。
//! テストでは DOM なしでこれを直接作って動かせるよ。

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::components::{Card, DraggingInfo, Position, Rotation, ShuffleTransition, Velocity};
use crate::config::{ContainerBounds, PhysicsConfig};
use crate::ecs::{Entity, System, World};
use crate::input::{InputEvent, InputQueue};
use crate::systems::{drag_system, PhysicsSystem, ShuffleSystem, ThrowSystem, TransitionTimerSystem};

/// 描画や JS 向けに取り出すカード 1 枚分の状態。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSnapshot {
    pub entity: Entity,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    /// シャッフルで付いた回転。まだ一度もシャッフルしてなければ `None`。
    pub rotation_deg: Option<f32>,
    pub dragging: bool,
    pub transitioning: bool,
}

pub struct Simulation {
    world: World,
    bounds: ContainerBounds,
    config: PhysicsConfig,
    input: InputQueue,
    /// ドラッグ中のカード。同時に 1 枚まで。
    active_drag: Option<Entity>,
    rng: StdRng,
    tick_count: u64,
}

impl Simulation {
    /// 乱数の種は OS (ブラウザなら `crypto.getRandomValues`) からもらう。
    pub fn new(bounds: ContainerBounds, config: PhysicsConfig) -> Self {
        Self::with_rng(bounds, config, StdRng::from_entropy())
    }

    /// 乱数の種を固定して作る。テスト用。
    pub fn with_seed(bounds: ContainerBounds, config: PhysicsConfig, seed: u64) -> Self {
        Self::with_rng(bounds, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: ContainerBounds, config: PhysicsConfig, rng: StdRng) -> Self {
        let mut world = World::new();
        world.register_component::<Card>();
        world.register_component::<Position>();
        world.register_component::<Velocity>();
        world.register_component::<DraggingInfo>();
        world.register_component::<Rotation>();
        world.register_component::<ShuffleTransition>();

        Simulation {
            world,
            bounds,
            config,
            input: InputQueue::new(),
            active_drag: None,
            rng,
            tick_count: 0,
        }
    }

    /// カードを 1 枚登録する。初期化のときにしか呼ばない想定。
    ///
    /// 初期位置はコンテナ内に収めてから置く。速度はまだ持たせない (0 扱い)。
    pub fn add_card(&mut self, width: f32, height: f32, x: f32, y: f32) -> Entity {
        let card = Card::new(width, height);
        let entity = self.world.create_entity();
        self.world.add_component(entity, card);
        self.world.add_component(entity, self.bounds.clamp(&card, x, y));
        log::debug!("Registered card {:?} ({}x{}) at ({}, {})", entity, card.width, card.height, x, y);
        entity
    }

    // --- 参照系 ---

    pub fn bounds(&self) -> &ContainerBounds {
        &self.bounds
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// 全カード (ID 順)
    pub fn cards(&self) -> Vec<Entity> {
        self.world.get_all_entities_with_component::<Card>()
    }

    pub fn card_count(&self) -> usize {
        self.cards().len()
    }

    pub fn position(&self, entity: Entity) -> Option<Position> {
        self.world.get_component::<Position>(entity).copied()
    }

    /// 速度テーブルに無いカードは 0。
    pub fn velocity(&self, entity: Entity) -> Velocity {
        self.world.get_component::<Velocity>(entity).copied().unwrap_or_default()
    }

    pub fn rotation(&self, entity: Entity) -> Option<Rotation> {
        self.world.get_component::<Rotation>(entity).copied()
    }

    pub fn active_drag(&self) -> Option<Entity> {
        self.active_drag
    }

    pub fn is_dragging(&self, entity: Entity) -> bool {
        self.active_drag == Some(entity)
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn pending_inputs(&self) -> usize {
        self.input.len()
    }

    // --- 入力 ---

    /// 入力を積むだけ。処理は次の `tick` で。
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// 入力を 1 つすぐに処理する。
    pub fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { entity, client_x, client_y } => {
                self.begin_drag(entity, client_x, client_y);
            }
            InputEvent::PointerMove { client_x, client_y } => self.drag_to(client_x, client_y),
            InputEvent::PointerUp => {
                self.end_drag();
            }
            InputEvent::Shuffle => self.shuffle(),
            InputEvent::Throw => self.throw_all(),
        }
    }

    /// ドラッグ開始。もう別のカードをドラッグ中なら無視する。
    pub fn begin_drag(&mut self, entity: Entity, client_x: f32, client_y: f32) -> bool {
        if let Some(current) = self.active_drag {
            log::debug!("Ignoring drag start on {:?}: {:?} is already being dragged", entity, current);
            return false;
        }
        let started = drag_system::begin_drag(&mut self.world, &self.bounds, entity, client_x, client_y);
        if started {
            self.active_drag = Some(entity);
        }
        started
    }

    /// ドラッグ中じゃなければ何もしない。
    pub fn drag_to(&mut self, client_x: f32, client_y: f32) {
        if let Some(entity) = self.active_drag {
            drag_system::drag_to(&mut self.world, &self.bounds, entity, client_x, client_y);
        }
    }

    /// ドラッグ終了。離したときの速度が付いたらそれを返す。
    pub fn end_drag(&mut self) -> Option<Velocity> {
        let entity = self.active_drag.take()?;
        drag_system::end_drag(&mut self.world, &self.config, entity)
    }

    pub fn shuffle(&mut self) {
        ShuffleSystem::new(self.bounds, &self.config, &mut self.rng).run(&mut self.world);
    }

    pub fn throw_all(&mut self) {
        ThrowSystem::new(&self.config, &mut self.rng).run(&mut self.world);
    }

    /// 速度を直接書き込む。管理外のエンティティなら無視。
    pub fn set_velocity(&mut self, entity: Entity, velocity: Velocity) {
        if self.world.has_component::<Card>(entity) {
            self.world.add_component(entity, velocity);
        }
    }

    // --- ティック ---

    /// 1 ティック進める。
    ///
    /// 1. 溜まってる入力を古い順に処理
    /// 2. シャッフルのアニメーション時間を進める
    /// 3. ドラッグ中なら、そのカードの位置を記録するだけで物理はお休み
    /// 4. そうでなければ全カードの物理を 1 ステップ
    pub fn tick(&mut self) {
        for event in self.input.drain() {
            self.apply_input(event);
        }

        TransitionTimerSystem::new(self.config.tick_ms()).run(&mut self.world);

        if let Some(entity) = self.active_drag {
            drag_system::record_last_tick(&mut self.world, entity);
        } else {
            PhysicsSystem::new(self.bounds, self.config.clone()).run(&mut self.world);
        }

        self.tick_count += 1;
    }

    /// 全カードの今の状態 (ID 順)。
    pub fn snapshot(&self) -> Vec<CardSnapshot> {
        self.cards()
            .into_iter()
            .filter_map(|entity| {
                let card = self.world.get_component::<Card>(entity)?;
                let position = self.position(entity).unwrap_or_default();
                let velocity = self.velocity(entity);
                Some(CardSnapshot {
                    entity,
                    x: position.x,
                    y: position.y,
                    vx: velocity.vx,
                    vy: velocity.vy,
                    width: card.width,
                    height: card.height,
                    rotation_deg: self.rotation(entity).map(|r| r.degrees),
                    dragging: self.world.has_component::<DraggingInfo>(entity),
                    transitioning: self.world.has_component::<ShuffleTransition>(entity),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod simulation_tests;
