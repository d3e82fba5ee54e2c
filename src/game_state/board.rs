//! Fixed-size grid of pieces.
//!
//! The board is the single source of truth for which piece stands where.
//! Queries are total over every integer pair: off-board squares read as
//! empty. Mutation is purely structural; callers establish legality.

use crate::game_state::chess_types::{Piece, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    num_rows: usize,
    num_cols: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// An empty `num_rows` x `num_cols` board. Dimensions never change after this.
    pub fn new_empty(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            cells: vec![None; num_rows * num_cols],
        }
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    #[inline]
    pub fn is_on_board(&self, position: Position) -> bool {
        position.row >= 0
            && (position.row as usize) < self.num_rows
            && position.col >= 0
            && (position.col as usize) < self.num_cols
    }

    #[inline]
    fn cell_index(&self, position: Position) -> Option<usize> {
        if self.is_on_board(position) {
            Some(position.row as usize * self.num_cols + position.col as usize)
        } else {
            None
        }
    }

    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.cell_index(position).and_then(|idx| self.cells[idx])
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// Overwrite a cell and return what it held. Off-board writes are ignored.
    pub fn place(&mut self, position: Position, piece: Option<Piece>) -> Option<Piece> {
        let idx = self.cell_index(position)?;
        std::mem::replace(&mut self.cells[idx], piece)
    }

    /// Move whatever stands on `from` to `to`, returning the displaced
    /// occupant of `to`. No legality checks are made.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Option<Piece> {
        if !self.is_on_board(from) || !self.is_on_board(to) {
            return None;
        }
        let moving = self.place(from, None);
        self.place(to, moving)
    }

    /// Every square in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.num_cols;
        (0..self.num_rows).flat_map(move |row| {
            (0..cols).map(move |col| Position::new(row as i32, col as i32))
        })
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares()
            .filter_map(|position| self.piece_at(position).map(|piece| (position, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
