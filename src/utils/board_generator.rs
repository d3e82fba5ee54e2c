//! Board-to-rows generator, the inverse of [`crate::utils::board_parser`].

use crate::game_state::chess_types::*;

pub fn board_to_rows(board: &Board) -> Vec<String> {
    (0..board.num_rows())
        .map(|row| {
            (0..board.num_cols())
                .map(|col| {
                    board
                        .piece_at(Position::new(row as i32, col as i32))
                        .map_or(EMPTY_SYMBOL, Piece::symbol)
                })
                .collect::<String>()
        })
        .collect()
}
