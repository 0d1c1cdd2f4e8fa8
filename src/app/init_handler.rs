// src/app/init_handler.rs
//! ページの初期化と、"New Game!" ボタンで試合を始めるロジック。

use std::sync::{Arc, Mutex};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

use crate::app::game_app::GameApp;
use crate::app::renderer;
use crate::config::layout::{
    DEFAULT_PLAYER1_COLOR, DEFAULT_PLAYER2_COLOR, NEW_GAME_BUTTON_LABEL, PLAYER1_COLOR_INPUT_ID,
    PLAYER2_COLOR_INPUT_ID,
};
use crate::config::GameConfig;
use crate::logic::GameState;

/// `input#{id}` の値を読む。要素が無いか空なら `fallback`。
fn read_color_input(document: &Document, id: &str, fallback: &str) -> String {
    let value = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value());

    match value {
        Some(color) if !color.trim().is_empty() => color,
        _ => {
            log::warn!("color input #{} missing or empty, using {}", id, fallback);
            fallback.to_string()
        }
    }
}

/// 色ピッカー (#p1, #p2) から新しい試合の設定を作る。盤面サイズはデフォルト。
pub(crate) fn config_from_page(document: &Document) -> GameConfig {
    GameConfig {
        player1_color: read_color_input(document, PLAYER1_COLOR_INPUT_ID, DEFAULT_PLAYER1_COLOR),
        player2_color: read_color_input(document, PLAYER2_COLOR_INPUT_ID, DEFAULT_PLAYER2_COLOR),
        ..GameConfig::default()
    }
}

/// ページの色ピッカーの値で新しい試合 (GameApp) を作る。
pub fn start_game_from_page() -> Result<GameApp, JsValue> {
    let document = renderer::document()?;
    let config = config_from_page(&document);
    let game = GameState::from_config(&config)?;
    GameApp::start(game)
}

/// "New Game!" ボタンを body に追加する。
///
/// 押されるたびに GameApp を丸ごと作り直して、前の試合と入れ替えるよ。
/// 新しい盤面を作ってから古い GameApp を捨てるので、古いリスナーは消えた要素から外れるだけ。
pub fn mount_new_game_button() -> Result<(), JsValue> {
    let document = renderer::document()?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Document has no body"))?;

    let button = document.create_element("button")?;
    button.set_text_content(Some(NEW_GAME_BUTTON_LABEL));
    body.append_child(&button)?;

    // 今の試合。ボタンのコールバックからだけ書き換える
    let current_app: Arc<Mutex<Option<GameApp>>> = Arc::new(Mutex::new(None));

    let closure = Closure::wrap(Box::new(move |_event: Event| {
        match start_game_from_page() {
            Ok(app) => {
                let mut slot = match current_app.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                *slot = Some(app); // 古い GameApp はここで Drop
            }
            Err(e) => log::error!("failed to start a new game: {:?}", e),
        }
    }) as Box<dyn FnMut(Event)>);

    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // ボタンはページが閉じるまで残るので、クロージャも手放して JS 側に持たせる
    closure.forget();

    log::info!("new game button mounted");
    Ok(())
}
