// src/ecs/world.rs

// Any: コンポーネントストレージを型に関係なく保持するために使う。
// TypeId: コンポーネントの種類を区別するキー。
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// ウィジェットの全カードとそのコンポーネントを管理する中心的な構造体 (自作ECSのコア！)。
///
/// コンポーネントは型ごとに `HashMap<Entity, T>` に入ってて、それを `Box<dyn Any>` で
/// 型消去して `component_stores` にまとめてる。だから「速度テーブル」は
/// `HashMap<Entity, Velocity>` そのもので、1 枚のカードに速度は最大 1 つ、って不変条件が
/// HashMap のキーの一意性でそのまま守られるんだ。
pub struct World {
    /// 生存しているエンティティ ID のセット。
    entities: HashSet<Entity>,
    /// 次に割り当てる ID。カードは初期化時にしか作らないので単純な連番で十分。
    next_entity_id: usize,
    /// TypeId -> Box<HashMap<Entity, T>>
    component_stores: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// 新しい空の World を作る。
    pub fn new() -> Self {
        World {
            entities: HashSet::new(),
            next_entity_id: 0,
            component_stores: HashMap::new(),
        }
    }

    /// 新しいエンティティを作って返す。ID は 0 からの連番。
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(entity);
        log::trace!("World: Created entity with ID {}", entity.0);
        entity
    }

    /// 指定されたエンティティが存在するか。
    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// 生存しているエンティティの数。
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// コンポーネント型 `T` 用のストレージを用意する。
    ///
    /// 既に登録済みなら何もしない (中身を消したりしない) よ。
    /// `add_component` が必要なときに勝手に呼ぶので、明示的に呼ぶのは
    /// 「まだ誰も持ってないけど空のストアは欲しい」ときだけ。
    pub fn register_component<T: Component>(&mut self) {
        let type_id = TypeId::of::<T>();
        if self.component_stores.contains_key(&type_id) {
            return;
        }
        log::trace!("World: Registering component type {}", std::any::type_name::<T>());
        let new_storage: HashMap<Entity, T> = HashMap::new();
        self.component_stores.insert(type_id, Box::new(new_storage));
    }

    /// エンティティにコンポーネントを追加する。同じ型が既にあれば上書き。
    ///
    /// 存在しないエンティティへの追加は無視されるよ。
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.is_entity_alive(entity) {
            log::warn!(
                "World: Ignoring {} for non-existent entity {:?}",
                std::any::type_name::<T>(),
                entity
            );
            return;
        }

        self.register_component::<T>();
        if let Some(storage) = self.store_mut::<T>() {
            storage.insert(entity, component);
        }
    }

    /// コンポーネントへの読み取り専用参照。
    /// エンティティがいない、型が未登録、持ってない、のどれでも `None`。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.store::<T>().and_then(|storage| storage.get(&entity))
    }

    /// コンポーネントへの書き込み可能な参照。
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        // 死んだエンティティのコンポーネントを書き換えないように先にチェック
        if !self.is_entity_alive(entity) {
            return None;
        }
        self.store_mut::<T>().and_then(|storage| storage.get_mut(&entity))
    }

    /// コンポーネントを削除して、その値を返す。
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.store_mut::<T>().and_then(|storage| storage.remove(&entity))
    }

    /// エンティティが型 `T` のコンポーネントを持ってるか。
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.get_component::<T>(entity).is_some()
    }

    /// 型 `T` のコンポーネントを持つ生存エンティティを **ID 順で** 返す。
    ///
    /// HashMap の走査順はバラバラなので、ここでソートしておく。
    /// 物理ステップの結果が毎回同じになるようにするためのもの。
    pub fn get_all_entities_with_component<T: Component>(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = match self.store::<T>() {
            Some(storage) => storage
                .keys()
                .copied()
                .filter(|e| self.is_entity_alive(*e))
                .collect(),
            None => Vec::new(),
        };
        entities.sort();
        entities
    }

    // --- 型付きストレージへのアクセス (内部用) ---

    fn store<T: Component>(&self) -> Option<&HashMap<Entity, T>> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|storage| storage.downcast_ref::<HashMap<Entity, T>>())
    }

    fn store_mut<T: Component>(&mut self) -> Option<&mut HashMap<Entity, T>> {
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.downcast_mut::<HashMap<Entity, T>>())
    }

    /// 型 `T` のストアに入っているエントリ数。（テストやデバッグ用）
    #[allow(dead_code)]
    pub(crate) fn component_count<T: Component>(&self) -> usize {
        self.store::<T>().map_or(0, HashMap::len)
    }
}

// テストコードは world_tests.rs に置いてある
#[cfg(test)]
#[path = "world_tests.rs"]
mod world_tests;
