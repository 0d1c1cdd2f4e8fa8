// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::sync::{Arc, Mutex};

use wasm_bindgen::prelude::*;
// log クレートのマクロをインポート
use log::{error, info};

use crate::app::browser_event_manager::{self, ColumnListener};
use crate::app::{event_handler, lock_game, renderer, state_getter, SharedGame};
use crate::components::Player;
use crate::config::GameConfig;
use crate::logic::GameState;
use crate::protocol::PlayResultData;

// --- 1試合分のアプリケーション状態を管理する構造体 ---
//
// 新しい試合を始める時は GameApp ごと作り直す (盤面の DOM もリスナーも丸ごと交換)。
#[wasm_bindgen]
pub struct GameApp {
    game: SharedGame,
    // 列の上の <td> に付けたクリックリスナー。Drop で外すよ。
    column_listeners: Vec<ColumnListener>,
}

// GameApp 構造体のメソッドを実装していくよ！
#[wasm_bindgen]
impl GameApp {
    /// 2人の色と盤面サイズ (width = 列の数, height = 行の数) で試合を始める。
    /// `#board` の中身はこの試合の盤面で置き換わるよ。
    #[wasm_bindgen(constructor)]
    pub fn new(
        player1_color: String,
        player2_color: String,
        width: usize,
        height: usize,
    ) -> Result<GameApp, JsValue> {
        let game = GameState::new_game(
            Player::new(player1_color),
            Player::new(player2_color),
            width,
            height,
        )?;
        Self::start(game)
    }

    /// `GameConfig` の JSON から試合を始める。省略したフィールドはデフォルト値。
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(config_json: &str) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(config_json)?;
        Self::start(GameState::from_config(&config)?)
    }

    /// JS から呼ぶ1手分のコマンド。クリックされた時と同じ処理をするよ。
    ///
    /// # 戻り値
    /// * `Ok(json)`: `PlayResultData` の JSON (`placed` が null ならコマは置かれていない)
    /// * `Err`: 列番号が範囲外、または描画に失敗した
    #[wasm_bindgen]
    pub fn play_column(&self, col: usize) -> Result<JsValue, JsValue> {
        let result = event_handler::handle_column_play(&self.game, col)?;
        let json = serde_json::to_string(&PlayResultData::from(result))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize play result: {}", e)))?;
        Ok(JsValue::from_str(&json))
    }

    /// `(row, col)` のマスを JSON (`"Empty"` か `{"Occupied":0}`) で返す。盤面の外ならエラー。
    #[wasm_bindgen]
    pub fn get_cell(&self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        let cell = lock_game(&self.game)
            .get_cell(row, col)
            .ok_or_else(|| JsValue::from_str(&format!("Cell ({}, {}) is outside the board", row, col)))?;
        let json = serde_json::to_string(&cell)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize cell: {}", e)))?;
        Ok(JsValue::from_str(&json))
    }

    /// 今の手番のプレイヤー番号 (1 or 2)
    #[wasm_bindgen]
    pub fn current_player(&self) -> u8 {
        lock_game(&self.game).current_player().number()
    }

    #[wasm_bindgen]
    pub fn is_game_over(&self) -> bool {
        lock_game(&self.game).is_terminal()
    }

    /// ゲームの状態全体を `GameStateData` の JSON で返す (デバッグや自前の描画用)。
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_game_state_json(&self.game)
    }
}

impl GameApp {
    /// 盤面の <table> を作って、今の状態を描いて、クリックリスナーを付ける。
    pub(crate) fn start(game: GameState) -> Result<GameApp, JsValue> {
        let document = renderer::document()?;
        let top_cells = renderer::build_html_board(&document, game.width(), game.height())?;
        renderer::render_pieces(&document, &game)?;

        let game: SharedGame = Arc::new(Mutex::new(game));
        let column_listeners = browser_event_manager::attach_column_listeners(top_cells, &game)?;

        info!("GameApp: new match started");
        Ok(GameApp {
            game,
            column_listeners,
        })
    }

    /// Rust 側から状態を覗くためのアクセサ (テスト用)。
    pub fn game(&self) -> &SharedGame {
        &self.game
    }
}

// GameApp が不要になった時 (新しい試合に交換された時) にリスナーを外す
impl Drop for GameApp {
    fn drop(&mut self) {
        if let Err(e) = browser_event_manager::detach_column_listeners(&mut self.column_listeners) {
            error!("GameApp: failed to detach column listeners: {:?}", e);
        }
    }
}

