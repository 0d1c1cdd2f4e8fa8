//! Gets the current game state and converts it to JSON.

use wasm_bindgen::JsValue;

use crate::app::{lock_game, SharedGame};
use crate::logic::GameState;
use crate::protocol::GameStateData;

/// ゲームの状態を `GameStateData` の JSON 文字列にする。
pub fn game_state_json(game: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&GameStateData::from(game))
}

/// ゲームの状態を取得し、JSON 文字列として返します。
/// (GameApp::get_state_json のロジック)
pub fn get_game_state_json(game: &SharedGame) -> Result<JsValue, JsValue> {
    let json = {
        let game = lock_game(game);
        game_state_json(&game)
    };
    match json {
        Ok(json_string) => Ok(JsValue::from_str(&json_string)),
        Err(e) => {
            let error_msg = format!("Failed to serialize game state: {}", e);
            log::error!("{}", error_msg);
            Err(JsValue::from_str(&error_msg))
        }
    }
}
