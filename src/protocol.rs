// src/protocol.rs

// このファイルは、Rust (WASM) 側から JavaScript 側に渡すデータの形を定義するよ！💌
// `serde` で JSON にして渡すので、JS 側は JSON.parse するだけで使える。
// ゲームの状態を自前で描画したいページや、デバッグ表示向け。
use serde::{Serialize, Deserialize};

use crate::components::{Cell, GameStatus, PlayerId};
use crate::logic::{GameState, PlayResult};

/// ゲームの状態全体を表すデータ構造だよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    pub width: usize,
    pub height: usize,
    /// `cells[row][col]`。行 0 が一番上。
    pub cells: Vec<Vec<Cell>>,
    pub current_player: PlayerId,
    pub status: GameStatus,
    pub players: Vec<PlayerData>,
}

/// プレイヤーの情報を表すデータ構造。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerData {
    pub id: PlayerId,
    /// 1 始まりの番号 (表示用)
    pub number: u8,
    pub color: String,
}

/// 1手の結果。`GameApp::play_column` が JS に返すよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayResultData {
    pub placed: Option<PlacedData>,
    pub outcome: GameStatus,
}

/// コマが置かれたマス
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PlacedData {
    pub row: usize,
    pub col: usize,
}

impl From<&GameState> for GameStateData {
    fn from(game: &GameState) -> Self {
        let players = [PlayerId::FIRST, PlayerId::SECOND]
            .into_iter()
            .zip(game.players())
            .map(|(id, player)| PlayerData {
                id,
                number: id.number(),
                color: player.color.clone(),
            })
            .collect();

        GameStateData {
            width: game.width(),
            height: game.height(),
            cells: game.board().rows().map(|row| row.to_vec()).collect(),
            current_player: game.current_player(),
            status: game.status(),
            players,
        }
    }
}

impl From<PlayResult> for PlayResultData {
    fn from(result: PlayResult) -> Self {
        PlayResultData {
            placed: result.placed.map(|(row, col)| PlacedData { row, col }),
            outcome: result.outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Player;

    #[test]
    fn game_state_data_mirrors_the_board() {
        let mut game =
            GameState::new_game(Player::new("red"), Player::new("blue"), 3, 2).unwrap();
        game.play_column(1).unwrap();

        let data = GameStateData::from(&game);
        assert_eq!(data.width, 3);
        assert_eq!(data.height, 2);
        assert_eq!(data.cells.len(), 2);
        assert_eq!(data.cells[1][1], Cell::Occupied(PlayerId::FIRST));
        assert_eq!(data.cells[0][1], Cell::Empty);
        assert_eq!(data.current_player, PlayerId::SECOND);
        assert_eq!(data.players[1].number, 2);
        assert_eq!(data.players[1].color, "blue");
    }

    #[test]
    fn play_result_data_json() {
        let data = PlayResultData::from(PlayResult {
            placed: Some((5, 2)),
            outcome: GameStatus::Won(PlayerId::SECOND),
        });
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"placed":{"row":5,"col":2},"outcome":{"Won":1}}"#);

        let nothing = PlayResultData::from(PlayResult {
            placed: None,
            outcome: GameStatus::Tied,
        });
        assert_eq!(
            serde_json::to_string(&nothing).unwrap(),
            r#"{"placed":null,"outcome":"Tied"}"#
        );
        println!("PlayResultData の JSON テスト、成功！🎉");
    }
}
