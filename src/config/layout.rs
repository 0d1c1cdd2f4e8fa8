// src/config/layout.rs
//! 盤面サイズのデフォルト値と、HTML 側の要素 ID やクラス名を定義するよ！
//! width が列の数、height が行の数。行 0 が一番上だよ。

pub const DEFAULT_WIDTH: usize = 7; // 列の数 (コマを落とす場所の数)
pub const DEFAULT_HEIGHT: usize = 6; // 行の数
pub const MAX_DIMENSION: usize = 1000; // 幅も高さもこれ以下
pub const DEFAULT_PLAYER1_COLOR: &str = "red";
pub const DEFAULT_PLAYER2_COLOR: &str = "blue";

// --- ページ側にある (or こちらで作る) 要素 ---
pub const BOARD_ELEMENT_ID: &str = "board"; // <table id="board">
pub const PLAYER1_COLOR_INPUT_ID: &str = "p1"; // 先手の色ピッカー
pub const PLAYER2_COLOR_INPUT_ID: &str = "p2"; // 後手の色ピッカー
pub const COLUMN_TOP_ROW_ID: &str = "column-top"; // クリック用の一番上の行
pub const COLUMN_TOP_CELL_PREFIX: &str = "top-"; // top-{x}
pub const PIECE_CLASS: &str = "piece"; // 落としたコマの <div class="piece">
pub const NEW_GAME_BUTTON_LABEL: &str = "New Game!";

/// 盤面のマス `(row, col)` に対応する <td> の ID。
pub fn cell_element_id(row: usize, col: usize) -> String {
    format!("c-{}-{}", row, col)
}

/// 列 `col` の上にあるクリック用 <td> の ID。
pub fn column_top_element_id(col: usize) -> String {
    format!("{}{}", COLUMN_TOP_CELL_PREFIX, col)
}
