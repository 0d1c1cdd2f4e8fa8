// src/logic/game.rs
//! 1試合分のゲーム状態と、その状態遷移。
//!
//! ```text
//! InProgress --4つ並んだ-->              Won(player)
//! InProgress --一番上の行が埋まった-->   Tied
//! InProgress --どちらでもない-->         InProgress (手番交代)
//! ```
//! Won と Tied からはもうどこにも行かないよ。

use log::{debug, info, warn};
use serde::{Serialize, Deserialize};

use crate::components::{Cell, GameStatus, Player, PlayerId};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::logic::board::Board;
use crate::logic::win_detector::has_four_in_a_row;

/// `drop_piece` の結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropResult {
    /// コマが `(row, col)` に置かれた
    Placed { row: usize, col: usize },
    /// 列が埋まっていた or ゲームが終わっていたので何もしなかった
    NoPlacement,
}

/// `play_column` の結果。描画側はこれを見て画面を更新するよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResult {
    /// 置かれたマス `(row, col)`。何も置かれなかったら `None`。
    pub placed: Option<(usize, usize)>,
    /// この手を打った後のゲームの状態
    pub outcome: GameStatus,
}

/// 1試合分の状態。盤面・2人のプレイヤー・今の手番・勝敗。
///
/// 新しい試合を始める時は、これを丸ごと作り直す (使い回さない)。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current_player: PlayerId,
    status: GameStatus,
}

impl GameState {
    /// 新しい試合を作る。盤面は空っぽで、先手 (`player1`) の手番から始まるよ。
    pub fn new_game(
        player1: Player,
        player2: Player,
        width: usize,
        height: usize,
    ) -> Result<Self, GameError> {
        let board = Board::new(width, height)?;
        info!(
            "new game: {}x{} board, {} vs {}",
            width, height, player1.color, player2.color
        );
        Ok(GameState {
            board,
            players: [player1, player2],
            current_player: PlayerId::FIRST,
            status: GameStatus::InProgress,
        })
    }

    /// 設定 (`GameConfig`) から試合を作る。
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Self::new_game(
            Player::new(config.player1_color.as_str()),
            Player::new(config.player2_color.as_str()),
            config.width,
            config.height,
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// 今の手番のプレイヤー
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// 描画用: `(row, col)` のマス。盤面の外なら `None`。
    pub fn get_cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// 列 `col` の一番下の空き行 (`Board::find_lowest_empty_row` と同じ)。
    pub fn find_lowest_empty_row(&self, col: usize) -> Option<usize> {
        self.board.find_lowest_empty_row(col)
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// 列 `col` に `player` のコマを落とす。
    ///
    /// - 列番号が範囲外なら `Err(ColumnOutOfRange)` (状態は変えない)
    /// - ゲームが終わっていたら何もしないで `NoPlacement`
    /// - 列が埋まっていたら何もしないで `NoPlacement`
    /// - それ以外は一番下の空きマスにコマを書き込んで `Placed { row, col }`
    ///
    /// 手番の交代や勝敗の判定はここではやらないよ (`play_column` がやる)。
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<DropResult, GameError> {
        if col >= self.board.width() {
            warn!("rejected drop into column {} (width {})", col, self.board.width());
            return Err(GameError::ColumnOutOfRange {
                col,
                width: self.board.width(),
            });
        }
        if self.is_terminal() {
            debug!("ignored drop into column {}: game is over", col);
            return Ok(DropResult::NoPlacement);
        }
        let Some(row) = self.board.find_lowest_empty_row(col) else {
            debug!("ignored drop into column {}: column is full", col);
            return Ok(DropResult::NoPlacement);
        };

        self.board.place(row, col, player);
        debug!("player {} dropped a piece at ({}, {})", player.number(), row, col);
        Ok(DropResult::Placed { row, col })
    }

    /// 手番をもう一人のプレイヤーに渡す。
    pub fn switch_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// `player` の勝ちでゲームを終わらせる。もう終わっていたら何もしない。
    pub fn mark_won(&mut self, player: PlayerId) {
        if self.is_terminal() {
            warn!("mark_won ignored: game already ended with {:?}", self.status);
            return;
        }
        info!("player {} won", player.number());
        self.status = GameStatus::Won(player);
    }

    /// 引き分けでゲームを終わらせる。もう終わっていたら何もしない。
    pub fn mark_tied(&mut self) {
        if self.is_terminal() {
            warn!("mark_tied ignored: game already ended with {:?}", self.status);
            return;
        }
        info!("game tied");
        self.status = GameStatus::Tied;
    }

    /// 入力ハンドラが呼ぶ唯一の入り口。今の手番のプレイヤーが列 `col` にコマを落とす。
    ///
    /// 落とす → 勝利判定 → 引き分け判定 → 手番交代 を1回でまとめてやるよ。
    /// 勝ち or 引き分けになったら手番は交代しない。
    pub fn play_column(&mut self, col: usize) -> Result<PlayResult, GameError> {
        let player = self.current_player;
        let placed = match self.drop_piece(col, player)? {
            DropResult::Placed { row, col } => (row, col),
            DropResult::NoPlacement => {
                return Ok(PlayResult {
                    placed: None,
                    outcome: self.status,
                })
            }
        };

        if has_four_in_a_row(&self.board, player) {
            self.mark_won(player);
        } else if self.board.is_full() {
            self.mark_tied();
        } else {
            self.switch_turn();
        }

        Ok(PlayResult {
            placed: Some(placed),
            outcome: self.status,
        })
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    fn new_standard_game() -> GameState {
        GameState::new_game(Player::new("red"), Player::new("blue"), 7, 6).unwrap()
    }

    #[test]
    fn initial_state() {
        let game = new_standard_game();
        assert_eq!(game.current_player(), PlayerId::FIRST);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_terminal());
        assert_eq!(game.width(), 7);
        assert_eq!(game.height(), 6);
        assert_eq!(game.player(PlayerId::SECOND).color, "blue");
        assert_eq!(game.get_cell(5, 0), Some(Cell::Empty));
        assert_eq!(game.get_cell(6, 0), None);
        println!("初期状態テスト、成功！🎉");
    }

    #[test]
    fn new_game_rejects_zero_dimensions() {
        let result = GameState::new_game(Player::new("red"), Player::new("blue"), 0, 6);
        assert_eq!(result, Err(GameError::InvalidDimensions { width: 0, height: 6 }));
    }

    #[test]
    fn new_game_rejects_dimensions_that_overflow() {
        let result = GameState::new_game(Player::new("red"), Player::new("blue"), usize::MAX, 2);
        assert_eq!(
            result,
            Err(GameError::InvalidDimensions { width: usize::MAX, height: 2 })
        );
    }

    #[test]
    fn from_config_uses_its_dimensions_and_colors() {
        let config = GameConfig {
            width: 5,
            height: 4,
            player1_color: "green".into(),
            player2_color: "gold".into(),
        };
        let game = GameState::from_config(&config).unwrap();
        assert_eq!((game.width(), game.height()), (5, 4));
        assert_eq!(game.player(PlayerId::FIRST).color, "green");
    }

    #[test]
    fn drop_piece_writes_one_cell_without_switching_turn() {
        let mut game = new_standard_game();
        let result = game.drop_piece(3, PlayerId::FIRST).unwrap();

        assert_eq!(result, DropResult::Placed { row: 5, col: 3 });
        assert_eq!(game.get_cell(5, 3), Some(Cell::Occupied(PlayerId::FIRST)));
        assert_eq!(game.board().occupied_count(), 1);
        // 手番はそのまま
        assert_eq!(game.current_player(), PlayerId::FIRST);
    }

    #[test]
    fn drop_into_out_of_range_column_is_an_error() {
        let mut game = new_standard_game();
        let before = game.clone();

        assert_eq!(
            game.drop_piece(7, PlayerId::FIRST),
            Err(GameError::ColumnOutOfRange { col: 7, width: 7 })
        );
        assert_eq!(
            game.play_column(usize::MAX),
            Err(GameError::ColumnOutOfRange { col: usize::MAX, width: 7 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn switch_turn_toggles() {
        let mut game = new_standard_game();
        game.switch_turn();
        assert_eq!(game.current_player(), PlayerId::SECOND);
        game.switch_turn();
        assert_eq!(game.current_player(), PlayerId::FIRST);
    }

    #[test]
    fn mark_won_is_terminal_and_sticky() {
        let mut game = new_standard_game();
        game.mark_won(PlayerId::SECOND);
        assert_eq!(game.status(), GameStatus::Won(PlayerId::SECOND));

        // 終端状態からは動かない
        game.mark_tied();
        game.mark_won(PlayerId::FIRST);
        assert_eq!(game.status(), GameStatus::Won(PlayerId::SECOND));

        let before = game.clone();
        assert_eq!(game.drop_piece(0, PlayerId::FIRST), Ok(DropResult::NoPlacement));
        assert_eq!(game, before);
    }

    #[test]
    fn mark_tied_blocks_further_drops() {
        let mut game = new_standard_game();
        game.mark_tied();
        let result = game.play_column(2).unwrap();
        assert_eq!(result, PlayResult { placed: None, outcome: GameStatus::Tied });
        assert_eq!(game.board().occupied_count(), 0);
    }

    #[test]
    fn play_column_alternates_turns() {
        let mut game = new_standard_game();

        let first = game.play_column(0).unwrap();
        assert_eq!(first, PlayResult { placed: Some((5, 0)), outcome: GameStatus::InProgress });
        assert_eq!(game.current_player(), PlayerId::SECOND);

        let second = game.play_column(0).unwrap();
        assert_eq!(second.placed, Some((4, 0)));
        assert_eq!(game.get_cell(4, 0), Some(Cell::Occupied(PlayerId::SECOND)));
        assert_eq!(game.current_player(), PlayerId::FIRST);
    }

    #[test]
    fn play_into_full_column_keeps_the_turn() {
        let mut game = GameState::new_game(Player::new("red"), Player::new("blue"), 7, 2).unwrap();
        game.play_column(0).unwrap(); // P1
        game.play_column(0).unwrap(); // P2 -> 列 0 が満杯
        assert_eq!(game.current_player(), PlayerId::FIRST);

        let result = game.play_column(0).unwrap();
        assert_eq!(result, PlayResult { placed: None, outcome: GameStatus::InProgress });
        // 無効な手だったので手番はそのまま
        assert_eq!(game.current_player(), PlayerId::FIRST);
    }
}
