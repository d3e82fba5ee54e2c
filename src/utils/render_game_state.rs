//! Terminal-oriented Unicode board renderer.
//!
//! Draws row and column indices around the grid. The pending selection is
//! drawn as `[♘]`, displacement targets as ` * ` and capture targets as `(♟)`.

use std::fmt::Write;

use crate::game_state::chess_types::*;

pub fn render_game_state(game_state: &GameState) -> String {
    let highlights = game_state
        .pending_selection()
        .map(|from| game_state.moves_from(from))
        .unwrap_or(&[]);
    render_board(game_state.board(), game_state.pending_selection(), highlights)
}

pub fn render_board(board: &Board, selected: Option<Position>, highlights: &[Move]) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..board.num_cols() {
        let _ = write!(out, "{col:^3}");
    }
    out.push('\n');

    for row in 0..board.num_rows() {
        let _ = write!(out, "{row:>2} ");
        for col in 0..board.num_cols() {
            let position = Position::new(row as i32, col as i32);
            let glyph = board.piece_at(position).map_or('·', piece_to_unicode);
            let highlight = highlights.iter().find(|m| m.destination == position);

            if selected == Some(position) {
                let _ = write!(out, "[{glyph}]");
            } else {
                match highlight.map(|m| m.effect) {
                    Some(MoveEffect::Capture) => {
                        let _ = write!(out, "({glyph})");
                    }
                    Some(MoveEffect::Displace) => out.push_str(" * "),
                    None => {
                        let _ = write!(out, " {glyph} ");
                    }
                }
            }
        }
        out.push('\n');
    }

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::King) => '♔',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Dark, PieceKind::King) => '♚',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Pawn) => '♟',
    }
}
