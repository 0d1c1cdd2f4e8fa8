// src/config/mod.rs
//! 定数と設定まわり。

pub mod game;
pub mod layout;

pub use game::GameConfig;
