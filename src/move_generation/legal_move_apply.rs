//! Validated move application.
//!
//! `apply_move` is the only public way to mutate a game. It checks the move
//! against the current index first and leaves the state untouched on error.

use log::{debug, warn};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;

/// Record of one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub effect: MoveEffect,
    pub captured: Option<Piece>,
}

pub fn validate_move(game_state: &GameState, from: Position, to: Position) -> ChessResult<(Piece, Move)> {
    let piece = game_state
        .piece_at(from)
        .ok_or(ChessErrors::EmptyOrigin(from))?;
    if piece.color != game_state.side_to_move() {
        return Err(ChessErrors::NotSideToMove(from));
    }
    let mv = game_state
        .legal_move_index()
        .find_move(from, to)
        .ok_or(ChessErrors::IllegalDestination { from, to })?;
    Ok((piece, mv))
}

pub fn apply_move(game_state: &mut GameState, from: Position, to: Position) -> ChessResult<AppliedMove> {
    let (piece, mv) = validate_move(game_state, from, to).inspect_err(|e| {
        warn!("rejected move {from} -> {to}: {e}");
    })?;

    let captured = game_state.commit_move(from, to);
    let applied = AppliedMove {
        from,
        to,
        piece,
        effect: mv.effect,
        captured,
    };
    debug!(
        "ply {}: {} {:?} {from} -> {to} ({})",
        game_state.ply(),
        piece.color,
        piece.kind,
        mv.effect
    );
    Ok(applied)
}
