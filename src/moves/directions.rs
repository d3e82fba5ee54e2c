//! Direction table written once in the light player's frame.
//!
//! Front points toward row 0. Rule code scales these by the mover's
//! orientation, so the dark side reuses the same tables mirrored.

use crate::game_state::chess_types::{PieceKind, Position};

pub const FRONT: Position = Position::new(-1, 0);
pub const BACK: Position = Position::new(1, 0);
pub const LEFT: Position = Position::new(0, -1);
pub const RIGHT: Position = Position::new(0, 1);

pub const FRONT_LEFT: Position = FRONT.sum(LEFT);
pub const FRONT_RIGHT: Position = FRONT.sum(RIGHT);
pub const BACK_LEFT: Position = BACK.sum(LEFT);
pub const BACK_RIGHT: Position = BACK.sum(RIGHT);

/// One ray: a direction plus an optional step cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ray {
    pub direction: Position,
    pub max_steps: Option<u32>,
}

impl Ray {
    pub const fn unbounded(direction: Position) -> Self {
        Self {
            direction,
            max_steps: None,
        }
    }

    pub const fn single(direction: Position) -> Self {
        Self {
            direction,
            max_steps: Some(1),
        }
    }
}

pub const ROOK_RAYS: [Ray; 4] = [
    Ray::unbounded(FRONT),
    Ray::unbounded(BACK),
    Ray::unbounded(LEFT),
    Ray::unbounded(RIGHT),
];

pub const BISHOP_RAYS: [Ray; 4] = [
    Ray::unbounded(FRONT_LEFT),
    Ray::unbounded(FRONT_RIGHT),
    Ray::unbounded(BACK_LEFT),
    Ray::unbounded(BACK_RIGHT),
];

pub const QUEEN_RAYS: [Ray; 8] = [
    ROOK_RAYS[0],
    ROOK_RAYS[1],
    ROOK_RAYS[2],
    ROOK_RAYS[3],
    BISHOP_RAYS[0],
    BISHOP_RAYS[1],
    BISHOP_RAYS[2],
    BISHOP_RAYS[3],
];

// Knights are leapers: rays of exactly one step along each L offset.
pub const KNIGHT_RAYS: [Ray; 8] = [
    Ray::single(FRONT.scaled(2).sum(LEFT)),
    Ray::single(FRONT.scaled(2).sum(RIGHT)),
    Ray::single(BACK.scaled(2).sum(LEFT)),
    Ray::single(BACK.scaled(2).sum(RIGHT)),
    Ray::single(LEFT.scaled(2).sum(FRONT)),
    Ray::single(LEFT.scaled(2).sum(BACK)),
    Ray::single(RIGHT.scaled(2).sum(FRONT)),
    Ray::single(RIGHT.scaled(2).sum(BACK)),
];

/// King step offsets in rule-evaluation order.
pub const KING_STEPS: [Position; 8] = [
    LEFT,
    RIGHT,
    FRONT,
    BACK,
    FRONT_LEFT,
    FRONT_RIGHT,
    BACK_LEFT,
    BACK_RIGHT,
];

/// Diagonal sides a pawn may capture toward, combined with its front.
pub const PAWN_CAPTURE_SIDES: [Position; 2] = [LEFT, RIGHT];

/// Ray table for a piece kind. Kings and pawns move by conditional rules only.
pub fn rays_for(kind: PieceKind) -> &'static [Ray] {
    match kind {
        PieceKind::Rook => &ROOK_RAYS,
        PieceKind::Bishop => &BISHOP_RAYS,
        PieceKind::Queen => &QUEEN_RAYS,
        PieceKind::Knight => &KNIGHT_RAYS,
        PieceKind::King | PieceKind::Pawn => &[],
    }
}
