//! Per-square move generation.
//!
//! A piece's moves come from two sources, concatenated in this order:
//! conditional rules (kings and pawns, each rule yielding zero or one move)
//! and rays (sliders and knights). Within rays, table order then distance.

use std::collections::HashMap;

use crate::game_state::chess_rules::DoubleStepRule;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_king::{king_castle, king_step};
use crate::move_generation::legal_moves_pawn::{
    pawn_capture, pawn_en_passant, pawn_front_double, pawn_front_single, pawn_promote,
};
use crate::move_generation::legal_moves_rays::generate_ray_moves;
use crate::moves::directions::{KING_STEPS, LEFT, RIGHT};

/// Whether king steps must avoid attacked squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KingSafety {
    Checked,
    /// Used when asking what a side attacks, so king rules do not recurse.
    Ignored,
}

/// Everything the rules read while generating moves.
///
/// Borrowing the board separately from the rest of the game state lets the
/// attack checks generate against a throwaway hypothetical board.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    pub board: &'a Board,
    pub light_orientation: Orientation,
    pub double_step: DoubleStepRule,
    pub moves_made: &'a HashMap<Position, u32>,
    pub king_safety: KingSafety,
}

impl<'a> MoveContext<'a> {
    #[inline]
    pub fn orientation_of(&self, color: Color) -> Orientation {
        match color {
            Color::Light => self.light_orientation,
            Color::Dark => self.light_orientation.flipped(),
        }
    }

    #[inline]
    pub fn is_unmoved_piece(&self, position: Position) -> bool {
        self.moves_made.get(&position).copied().unwrap_or(0) == 0
    }

    /// Same rules, different board, no king-safety recursion.
    #[inline]
    pub fn for_attacks<'b>(&self, board: &'b Board) -> MoveContext<'b>
    where
        'a: 'b,
    {
        MoveContext {
            board,
            light_orientation: self.light_orientation,
            double_step: self.double_step,
            moves_made: self.moves_made,
            king_safety: KingSafety::Ignored,
        }
    }
}

/// One conditional rule. Each evaluates to at most one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCondition {
    KingStep(Position),
    KingCastle,
    PawnFrontSingle,
    PawnFrontDouble,
    PawnCapture(Position),
    PawnEnPassant,
    PawnPromote,
}

impl MoveCondition {
    pub fn evaluate(self, ctx: &MoveContext<'_>, from: Position, piece: Piece) -> Option<Move> {
        match self {
            MoveCondition::KingStep(step) => king_step(ctx, from, piece, step),
            MoveCondition::KingCastle => king_castle(ctx, from, piece),
            MoveCondition::PawnFrontSingle => pawn_front_single(ctx, from, piece),
            MoveCondition::PawnFrontDouble => pawn_front_double(ctx, from, piece),
            MoveCondition::PawnCapture(side) => pawn_capture(ctx, from, piece, side),
            MoveCondition::PawnEnPassant => pawn_en_passant(ctx, from, piece),
            MoveCondition::PawnPromote => pawn_promote(ctx, from, piece),
        }
    }
}

pub const KING_CONDITIONS: [MoveCondition; 9] = [
    MoveCondition::KingStep(KING_STEPS[0]),
    MoveCondition::KingStep(KING_STEPS[1]),
    MoveCondition::KingStep(KING_STEPS[2]),
    MoveCondition::KingStep(KING_STEPS[3]),
    MoveCondition::KingStep(KING_STEPS[4]),
    MoveCondition::KingStep(KING_STEPS[5]),
    MoveCondition::KingStep(KING_STEPS[6]),
    MoveCondition::KingStep(KING_STEPS[7]),
    MoveCondition::KingCastle,
];

pub const PAWN_CONDITIONS: [MoveCondition; 6] = [
    MoveCondition::PawnFrontSingle,
    MoveCondition::PawnFrontDouble,
    MoveCondition::PawnCapture(LEFT),
    MoveCondition::PawnCapture(RIGHT),
    MoveCondition::PawnEnPassant,
    MoveCondition::PawnPromote,
];

pub fn conditions_for(kind: PieceKind) -> &'static [MoveCondition] {
    match kind {
        PieceKind::King => &KING_CONDITIONS,
        PieceKind::Pawn => &PAWN_CONDITIONS,
        PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight => &[],
    }
}

/// Moves for whatever stands on `from`; empty for an empty or off-board square.
pub fn generate_moves(ctx: &MoveContext<'_>, from: Position) -> Vec<Move> {
    let Some(piece) = ctx.board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(16);
    generate_conditional_moves(ctx, from, piece, &mut out);
    generate_ray_moves(ctx, from, piece, &mut out);
    out
}

fn generate_conditional_moves(
    ctx: &MoveContext<'_>,
    from: Position,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    out.extend(
        conditions_for(piece.kind)
            .iter()
            .filter_map(|condition| condition.evaluate(ctx, from, piece)),
    );
}

/// Moves for the piece on `position` in the given game state.
pub fn legal_moves(position: Position, game_state: &GameState) -> Vec<Move> {
    generate_moves(&game_state.move_context(), position)
}
