//! Board-description parser.
//!
//! A board is a sequence of equal-length rows, one symbol per cell: piece
//! letters (`k q r b n p`, lowercase light, uppercase dark) or `.` for empty.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;

pub fn parse_board_rows<S: AsRef<str>>(rows: &[S]) -> ChessResult<Board> {
    let first = rows.first().ok_or(ChessErrors::EmptyBoard)?;
    let num_cols = first.as_ref().chars().count();
    if num_cols == 0 {
        return Err(ChessErrors::EmptyBoard);
    }

    let mut board = Board::new_empty(rows.len(), num_cols);
    for (row, text) in rows.iter().enumerate() {
        let found = text.as_ref().chars().count();
        if found != num_cols {
            return Err(ChessErrors::RaggedBoard {
                row,
                expected: num_cols,
                found,
            });
        }

        for (col, symbol) in text.as_ref().chars().enumerate() {
            let piece = parse_cell(symbol).ok_or(ChessErrors::InvalidBoardSymbol { symbol, row, col })?;
            board.place(Position::new(row as i32, col as i32), piece);
        }
    }

    Ok(board)
}

/// Parse newline-separated rows. Blank lines and surrounding whitespace are ignored.
pub fn parse_board_text(text: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    parse_board_rows(&rows)
}

// Outer None: not a valid symbol. Inner None: empty cell.
fn parse_cell(symbol: char) -> Option<Option<Piece>> {
    if symbol == EMPTY_SYMBOL {
        return Some(None);
    }
    Piece::from_symbol(symbol).map(Some)
}
