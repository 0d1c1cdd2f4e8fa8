// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ ロジックと UI をはっきり分けて整理してるよ。
pub mod app; // ブラウザ (DOM) との接着剤
pub mod components; // Cell, Player, GameStatus みたいなデータ型
pub mod config; // デフォルト値と設定
pub mod error; // GameError
pub mod logic; // 盤面・勝利判定・ゲーム状態 (UI に依存しない)
pub mod protocol; // JS に渡す JSON の形

pub use app::game_app::GameApp;
pub use components::{Cell, GameStatus, Player, PlayerId};
pub use config::GameConfig;
pub use error::GameError;
pub use logic::{has_four_in_a_row, Board, DropResult, GameState, PlayResult};

// JavaScript の console.log / warn / error を Rust から呼び出すための準備 (extern ブロック)。
// ネイティブ (cargo test) では呼べないので、ロジック側は log クレートのマクロだけを使うこと！
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    pub fn console_warn(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    app::console_logger::init();
    log::info!("connect four wasm module loaded");
}

/// ページに "New Game!" ボタンを置いて、押されたら試合を始めるようにする。
/// ページの JS から wasm の初期化後に一度だけ呼んでね。
#[wasm_bindgen]
pub fn mount_page() -> Result<(), JsValue> {
    app::init_handler::mount_new_game_button()
}
