// src/ecs/entity.rs

use serde::{Deserialize, Serialize};

/// Entity（エンティティ）は、ウィジェットに登場する「モノ」を表すただの ID だよ！
/// このクレートだと、画面上のカード 1 枚 1 枚がエンティティになる。
///
/// ID 自体には意味がなくて、`Position` や `Velocity` みたいなコンポーネントと
/// 組み合わせることで「ID 3 のカードは (120, 40) にあって右に動いてる」って意味を持つんだ。
///
/// `Ord` を derive してるのは、物理ステップでカードを毎回同じ順番で処理したいから。
/// `Serialize` は状態スナップショットを JSON で JS に渡すときに使うよ。
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Entity(pub usize);

impl Entity {
    /// 中身の数値 ID を取り出す。JS 側に渡すときに使う。
    pub fn id(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_order_by_id() {
        let mut entities = vec![Entity(3), Entity(0), Entity(2)];
        entities.sort();
        assert_eq!(entities, vec![Entity(0), Entity(2), Entity(3)]);
        assert_eq!(Entity(7).id(), 7);
    }

    #[test]
    fn entity_serializes_as_plain_number() {
        let json = serde_json::to_string(&Entity(5)).expect("Entity should serialize");
        assert_eq!(json, "5", "タプル構造体はただの数値として出てくるはず");
    }
}
