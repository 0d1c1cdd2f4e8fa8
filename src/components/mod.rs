// src/components/mod.rs

// 盤面やプレイヤーを表す、ただのデータ型たちをここにまとめるよ！
// ロジック (落下・勝利判定) は logic モジュール側に置いて、ここはデータだけ。
pub mod cell;
pub mod player;
pub mod game_status;

// よく使う型は再エクスポートして `crate::components::Cell` みたいに書けるようにしておく！
pub use cell::Cell;
pub use player::{Player, PlayerId};
pub use game_status::GameStatus;
