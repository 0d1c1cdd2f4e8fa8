// src/app/renderer.rs
//! 盤面を HTML の <table> として描画するロジック。
//! ゲームの状態は読むだけで、絶対に書き換えないよ。

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::config::layout::{
    cell_element_id, column_top_element_id, BOARD_ELEMENT_ID, COLUMN_TOP_ROW_ID, PIECE_CLASS,
};
use crate::logic::GameState;

/// window.document を取ってくる。
pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("Failed to get document"))
}

/// `#board` の中身を作り直す。
///
/// 一番上にクリック用の行 (`tr#column-top` > `td#top-{x}`) を置いて、
/// その下に `height` 行 x `width` 列のマス (`td#c-{y}-{x}`) を並べるよ。
/// 戻り値はクリック用の <td> たち (列番号の順)。リスナーを付けるのに使う。
pub fn build_html_board(
    document: &Document,
    width: usize,
    height: usize,
) -> Result<Vec<Element>, JsValue> {
    let board = document
        .get_element_by_id(BOARD_ELEMENT_ID)
        .ok_or_else(|| JsValue::from_str("Element #board not found"))?;
    // 前の試合の盤面 (とそこに付いていたリスナー) はここで丸ごと消える
    board.set_inner_html("");

    // --- クリック用の一番上の行 ---
    let top = document.create_element("tr")?;
    top.set_attribute("id", COLUMN_TOP_ROW_ID)?;
    let mut top_cells = Vec::with_capacity(width);
    for x in 0..width {
        let head_cell = document.create_element("td")?;
        head_cell.set_attribute("id", &column_top_element_id(x))?;
        top.append_child(&head_cell)?;
        top_cells.push(head_cell);
    }
    board.append_child(&top)?;

    // --- 盤面本体 ---
    for y in 0..height {
        let row = document.create_element("tr")?;
        for x in 0..width {
            let cell = document.create_element("td")?;
            cell.set_attribute("id", &cell_element_id(y, x))?;
            row.append_child(&cell)?;
        }
        board.append_child(&row)?;
    }

    log::debug!("built html board {}x{}", width, height);
    Ok(top_cells)
}

/// `td#c-{row}-{col}` にコマ (`div.piece`) を入れる。色はプレイヤーの色。
pub fn place_in_table(
    document: &Document,
    row: usize,
    col: usize,
    color: &str,
) -> Result<(), JsValue> {
    let piece: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("Created div is not an HtmlElement"))?;
    piece.class_list().add_1(PIECE_CLASS)?;
    piece.style().set_property("background-color", color)?;

    let spot = document
        .get_element_by_id(&cell_element_id(row, col))
        .ok_or_else(|| JsValue::from_str(&format!("Cell c-{}-{} not found", row, col)))?;
    spot.append_child(&piece)?;
    Ok(())
}

/// ゲームの状態から、置かれているコマを全部描き直す。
/// `build_html_board` の直後 (まっさらな表) に呼ぶ前提だよ。
pub fn render_pieces(document: &Document, game: &GameState) -> Result<(), JsValue> {
    for (row, cells) in game.board().rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(owner) = cell.occupant() {
                place_in_table(document, row, col, &game.player(owner).color)?;
            }
        }
    }
    Ok(())
}

/// 試合終了をアラートで知らせる。
pub fn announce_end(message: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Failed to get window"))?;
    window.alert_with_message(message)
}
