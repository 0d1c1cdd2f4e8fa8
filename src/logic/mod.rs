// src/logic/mod.rs
//! コネクトフォーのルール本体だよ！ UI には一切触らない、純粋なロジックだけ。

pub mod board;
pub mod game;
pub mod win_detector;


pub use board::Board;
pub use game::{DropResult, GameState, PlayResult};
pub use win_detector::has_four_in_a_row;
