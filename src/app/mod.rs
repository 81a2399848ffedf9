// src/app/mod.rs
//! ブラウザ側の配線。DOM を読む・リスナーを付ける・描画する・JS に公開する。

pub mod browser_event_manager;
pub mod init_handler;
pub mod physics_app;
pub mod renderer;
pub mod state_getter;
