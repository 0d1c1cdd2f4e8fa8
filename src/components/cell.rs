// src/components/cell.rs

use serde::{Serialize, Deserialize};

use super::player::PlayerId;

/// 盤面のマス1つ分の状態だよ！
///
/// 空っぽか、どちらかのプレイヤーのコマが入っているかの2択。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// コマが入っていれば、その持ち主を返す。
    pub fn occupant(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// このマスが `player` のコマで埋まっているか？ 勝利判定で使うよ。
    pub fn is_occupied_by(self, player: PlayerId) -> bool {
        self == Cell::Occupied(player)
    }
}
