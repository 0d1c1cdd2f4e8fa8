// src/components/game_status.rs

// serde を使う宣言！ゲームの状態を JS 側に JSON で渡すよ！
use serde::{Serialize, Deserialize};

use super::player::PlayerId;

/// ゲーム全体の現在の状態を表す列挙型だよ！
///
/// まだプレイ中なのか、誰かが4つ並べて勝ったのか、盤面が埋まって引き分けなのか。🏆🏁
/// `Won` と `Tied` は終端状態で、そこから別の状態には戻らないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    #[default]
    InProgress,
    /// 勝者が決まった状態
    Won(PlayerId),
    /// 一番上の行まで埋まって、誰も勝っていない状態
    Tied,
}

impl GameStatus {
    /// 終端状態 (もうコマを落とせない) かどうか。
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}
