// src/systems/mod.rs
//! World を書き換えるロジックたち。

pub mod drag_system;
pub mod physics_system;
pub mod shuffle_system;
pub mod throw_system;
pub mod transition_system;

pub use physics_system::PhysicsSystem;
pub use shuffle_system::ShuffleSystem;
pub use throw_system::ThrowSystem;
pub use transition_system::TransitionTimerSystem;
