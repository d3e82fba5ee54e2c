//! King step rules.
//!
//! A step is rejected when it leaves the board, lands on a friendly piece,
//! or (unless king safety is ignored) lands on a square the opponent would
//! attack once the king stands there.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_destination_attacked;
use crate::move_generation::move_generator::{KingSafety, MoveContext};

pub fn king_step(ctx: &MoveContext<'_>, from: Position, piece: Piece, step: Position) -> Option<Move> {
    let dest = from.sum(step.oriented(ctx.orientation_of(piece.color)));
    if !ctx.board.is_on_board(dest) {
        return None;
    }

    let occupant = ctx.board.piece_at(dest);
    if occupant.is_some_and(|p| p.color == piece.color) {
        return None;
    }

    if ctx.king_safety == KingSafety::Checked
        && is_king_destination_attacked(ctx, from, dest, piece.color)
    {
        return None;
    }

    Some(match occupant {
        Some(_) => Move::capture(dest),
        None => Move::displace(dest),
    })
}

/// Castling hook. Not part of this rule set; never yields a move.
pub fn king_castle(_ctx: &MoveContext<'_>, _from: Position, _piece: Piece) -> Option<Move> {
    None
}
