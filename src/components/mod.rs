// src/components/mod.rs

// カード 1 枚に付くコンポーネントたち。
pub mod card;
pub mod dragging_info;
pub mod position;
pub mod rotation;
pub mod transition;
pub mod velocity;

pub use card::Card;
pub use dragging_info::DraggingInfo;
pub use position::Position;
pub use rotation::Rotation;
pub use transition::ShuffleTransition;
pub use velocity::Velocity;
