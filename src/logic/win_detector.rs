// src/logic/win_detector.rs
//! 4つ並び (four-in-a-row) の判定だよ！🏆
//!
//! 盤面の全マスを起点にして、4方向 (横・縦・右下がり・左下がり) の4マスを候補にする。
//! 候補の4マスが全部盤面の中にあって、全部 `player` のコマなら勝ち！
//! 起点は上の行から、行の中は左から、方向は横→縦→右下→左下の順で見ていくよ。

use itertools::iproduct;

use crate::components::PlayerId;
use crate::logic::board::Board;

/// 何個並べたら勝ちか
pub const LINE_LENGTH: isize = 4;

/// 起点からの進み方 (行の増分, 列の増分)。
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // 横: (y, x), (y, x+1), ...
    (1, 0),  // 縦: (y, x), (y+1, x), ...
    (1, 1),  // 右下がり
    (1, -1), // 左下がり
];

/// `player` のコマが4つ並んでいる場所が盤面のどこかにあれば true。
///
/// 直前に置いたコマの周りだけじゃなく、全マスを起点に調べるよ。
/// 盤面は小さいし、1手につき1回しか呼ばれないので O(height x width) で十分！
pub fn has_four_in_a_row(board: &Board, player: PlayerId) -> bool {
    iproduct!(0..board.height(), 0..board.width(), DIRECTIONS.iter())
        .any(|(row, col, &(d_row, d_col))| is_winning_line(board, player, row, col, d_row, d_col))
}

/// 起点 `(row, col)` から `(d_row, d_col)` 方向に4マスが全部 `player` のものか？
/// 盤面の外にはみ出したマスがあれば、その時点で false。
fn is_winning_line(
    board: &Board,
    player: PlayerId,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
) -> bool {
    (0..LINE_LENGTH).all(|step| {
        let r = row as isize + d_row * step;
        let c = col as isize + d_col * step;
        board
            .get_signed(r, c)
            .map_or(false, |cell| cell.is_occupied_by(player))
    })
}
