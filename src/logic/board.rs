// src/logic/board.rs
//! 盤面 (マスの2次元グリッド) そのもの。
//! サイズは作る時に決めたら最後まで変わらないよ。行 0 が一番上、行 `height-1` が一番下！

use crate::components::{Cell, PlayerId};
use crate::config::layout::MAX_DIMENSION;
use crate::error::GameError;

/// `height` 行 x `width` 列の盤面。
///
/// 中身は行優先 (row-major) の `Vec<Cell>` で持つよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// 空っぽの盤面を作る。幅か高さが 0、または `MAX_DIMENSION` より大きいならエラー。
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let invalid = GameError::InvalidDimensions { width, height };
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(invalid);
        }
        let size = width.checked_mul(height).ok_or(invalid)?;
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; size],
        })
    }

    /// 列の数
    pub fn width(&self) -> usize {
        self.width
    }

    /// 行の数
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(row, col)` のマス。盤面の外なら `None`。
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// 符号付き座標でマスを引く。勝利判定で盤面の外 (マイナス含む) をはみ出す
    /// 候補を作るので、範囲チェックはここでまとめてやるよ。
    pub(crate) fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// 列 `col` の一番下の空きマスの行番号を返す。
    ///
    /// 一番下の行 (`height-1`) から上に向かって探して、最初に見つかった空きマス。
    /// 列が埋まっている (or 列番号が範囲外) なら `None`。盤面は変更しないよ。
    pub fn find_lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_empty())
    }

    /// 一番上の行が全部埋まっていれば盤面は満杯。
    /// コマは重力で下から積もるので、上が埋まっていれば下も全部埋まってる！
    pub fn is_full(&self) -> bool {
        self.cells[..self.width].iter().all(|cell| !cell.is_empty())
    }

    /// `(row, col)` にコマを置く。呼び出し側 (GameState) が範囲と空きを確認済みの前提。
    pub(crate) fn place(&mut self, row: usize, col: usize, player: PlayerId) {
        debug_assert!(row < self.height && col < self.width);
        debug_assert!(self.cells[row * self.width + col].is_empty());
        self.cells[row * self.width + col] = Cell::Occupied(player);
    }

    /// 上の行から順に、1行ずつのスライスを返すイテレータ。描画や JSON 化で使うよ。
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// 埋まっているマスの数
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}
