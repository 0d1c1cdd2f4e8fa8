// src/app/event_handler.rs
//! クリックを列番号に変換して、ゲームに1手を打たせるロジック。

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event};

use crate::app::{lock_game, renderer, SharedGame};
use crate::components::GameStatus;
use crate::config::layout::COLUMN_TOP_CELL_PREFIX;
use crate::logic::PlayResult;

/// クリックされた <td> の ID (`top-{x}`) から列番号を取り出す。
/// 形が違う ID なら `None` (そのクリックは無視する)。
pub fn column_from_target_id(id: &str) -> Option<usize> {
    id.strip_prefix(COLUMN_TOP_CELL_PREFIX)?.parse().ok()
}

/// 試合終了時に出すメッセージ。まだ続いているなら `None`。
pub fn end_game_message(status: GameStatus) -> Option<String> {
    if !status.is_terminal() {
        return None;
    }
    Some(match status.winner() {
        Some(player) => format!("Player {} won!", player.number()),
        None => "Tie!".to_string(),
    })
}

/// 列 `col` に今の手番のプレイヤーがコマを落として、画面に反映する。
///
/// ゲームの状態遷移はロックを握ったまま `play_column` の中で全部終わらせて、
/// 描画とアラートはロックを離してからやるよ。
pub fn handle_column_play(game: &SharedGame, col: usize) -> Result<PlayResult, JsValue> {
    let (result, color) = {
        let mut game = lock_game(game);
        let color = game.player(game.current_player()).color.clone();
        let result = game.play_column(col)?;
        (result, color)
    };

    if let Some((row, col)) = result.placed {
        let document = renderer::document()?;
        renderer::place_in_table(&document, row, col, &color)?;

        if let Some(message) = end_game_message(result.outcome) {
            renderer::announce_end(&message)?;
        }
    }
    Ok(result)
}

/// `td#top-{x}` のクリックイベントの処理。
pub fn handle_column_click(game: &SharedGame, event: &Event) {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        log::warn!("click event without an element target");
        return;
    };

    let id = target.id();
    let Some(col) = column_from_target_id(&id) else {
        log::warn!("ignored click on element with id '{}'", id);
        return;
    };

    if let Err(e) = handle_column_play(game, col) {
        log::error!("failed to play column {}: {:?}", col, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PlayerId;

    #[test]
    fn parses_column_from_top_cell_id() {
        assert_eq!(column_from_target_id("top-0"), Some(0));
        assert_eq!(column_from_target_id("top-6"), Some(6));
        assert_eq!(column_from_target_id("top-12"), Some(12));
    }

    #[test]
    fn ignores_other_ids() {
        assert_eq!(column_from_target_id("c-5-0"), None);
        assert_eq!(column_from_target_id("top-"), None);
        assert_eq!(column_from_target_id("top-x"), None);
        assert_eq!(column_from_target_id("top--1"), None);
        assert_eq!(column_from_target_id(""), None);
    }

    #[test]
    fn end_game_messages() {
        assert_eq!(end_game_message(GameStatus::InProgress), None);
        assert_eq!(
            end_game_message(GameStatus::Won(PlayerId::FIRST)).as_deref(),
            Some("Player 1 won!")
        );
        assert_eq!(
            end_game_message(GameStatus::Won(PlayerId::SECOND)).as_deref(),
            Some("Player 2 won!")
        );
        assert_eq!(end_game_message(GameStatus::Tied).as_deref(), Some("Tie!"));
    }
}
