// src/ecs/system.rs

use crate::ecs::world::World;

/// System（システム）トレイトだよ！
///
/// システムは World の中のコンポーネントを読んだり書き換えたりするロジックの塊。
/// このクレートだと「物理ステップ」「シャッフル」「スロー」「トランジションのタイマー」が
/// それぞれシステムになってて、`Simulation::tick` やアクションから呼ばれるよ。
///
/// コンテナの大きさや設定値みたいな World の外の情報は、
/// システム構造体のフィールドとして持たせておく作り。
pub trait System {
    /// このシステムを 1 回実行する。
    fn run(&mut self, world: &mut World);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::component::Component;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Counter(u32);
    impl Component for Counter {}

    // 全エンティティの Counter を 1 増やすだけのダミーシステム
    struct IncrementSystem;

    impl System for IncrementSystem {
        fn run(&mut self, world: &mut World) {
            for entity in world.get_all_entities_with_component::<Counter>() {
                if let Some(counter) = world.get_component_mut::<Counter>(entity) {
                    counter.0 += 1;
                }
            }
        }
    }

    #[test]
    fn dummy_system_runs_and_modifies_world() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        world.add_component(a, Counter(0));
        // b には Counter を付けない

        let mut system = IncrementSystem;
        system.run(&mut world);
        system.run(&mut world);

        assert_eq!(world.get_component::<Counter>(a), Some(&Counter(2)));
        assert_eq!(world.get_component::<Counter>(b), None);
    }
}
