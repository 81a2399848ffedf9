// src/ecs/component.rs

/// Component（コンポーネント）トレイトだよ！
///
/// 構造体がエンティティにくっつけられるデータであることを示すマーカー。
/// `Debug` はログ出力用、`Send + Sync + 'static` は `World` を
/// `Arc<Mutex<..>>` で包んでブラウザのクロージャと共有するために付けてる。
pub trait Component: std::fmt::Debug + Send + Sync + 'static {}
