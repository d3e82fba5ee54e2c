//! Core value types shared by the board, the rule tables and the turn logic.
//!
//! Everything here is `Copy` and compared by value. Piece identity lives on
//! the board; a `Piece` is only ever a snapshot of what a cell holds.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase board symbol for this kind.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A colored piece as read from a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Decode a board symbol. Lowercase letters are light pieces, uppercase
    /// letters are dark pieces; anything else is not a piece.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let color = if symbol.is_ascii_lowercase() {
            Color::Light
        } else if symbol.is_ascii_uppercase() {
            Color::Dark
        } else {
            return None;
        };

        let kind = match symbol.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Self { kind, color })
    }

    pub fn symbol(self) -> char {
        match self.color {
            Color::Light => self.kind.symbol(),
            Color::Dark => self.kind.symbol().to_ascii_uppercase(),
        }
    }
}

/// Board symbol for an empty cell.
pub const EMPTY_SYMBOL: char = '.';

/// A (row, column) pair. Row 0 is the top of the board as written.
///
/// Positions carry no bounds of their own; see [`Board::is_on_board`].
/// The derived ordering is row-major, which the move index relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Sign that mirrors the "front" direction for one player.
///
/// `+1` keeps the direction table as written (front points toward row 0),
/// `-1` mirrors it across both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Orientation(i32);

impl Orientation {
    pub const FORWARD: Orientation = Orientation(1);
    pub const REVERSED: Orientation = Orientation(-1);

    #[inline]
    pub const fn sign(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn flipped(self) -> Self {
        Orientation(-self.0)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::FORWARD
    }
}

impl TryFrom<i32> for Orientation {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Orientation::FORWARD),
            -1 => Ok(Orientation::REVERSED),
            other => Err(format!("orientation must be 1 or -1, got {other}")),
        }
    }
}

impl From<Orientation> for i32 {
    fn from(value: Orientation) -> Self {
        value.0
    }
}

/// What a move does to its destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveEffect {
    Displace,
    Capture,
}

impl fmt::Display for MoveEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveEffect::Displace => write!(f, "displace"),
            MoveEffect::Capture => write!(f, "capture"),
        }
    }
}

/// A generated destination for one piece. Never stored past the next rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub destination: Position,
    pub effect: MoveEffect,
}

impl Move {
    #[inline]
    pub const fn displace(destination: Position) -> Self {
        Self {
            destination,
            effect: MoveEffect::Displace,
        }
    }

    #[inline]
    pub const fn capture(destination: Position) -> Self {
        Self {
            destination,
            effect: MoveEffect::Capture,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.effect == MoveEffect::Capture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_through_case() {
        let light_knight = Piece::from_symbol('n').expect("n is a piece");
        assert_eq!(light_knight, Piece::new(PieceKind::Knight, Color::Light));
        assert_eq!(light_knight.symbol(), 'n');

        let dark_queen = Piece::from_symbol('Q').expect("Q is a piece");
        assert_eq!(dark_queen, Piece::new(PieceKind::Queen, Color::Dark));
        assert_eq!(dark_queen.symbol(), 'Q');

        assert_eq!(Piece::from_symbol(EMPTY_SYMBOL), None);
        assert_eq!(Piece::from_symbol('x'), None);
        assert_eq!(Piece::from_symbol('3'), None);
    }

    #[test]
    fn orientation_only_accepts_unit_signs() {
        assert_eq!(Orientation::try_from(1), Ok(Orientation::FORWARD));
        assert_eq!(Orientation::try_from(-1), Ok(Orientation::REVERSED));
        assert!(Orientation::try_from(0).is_err());
        assert_eq!(Orientation::FORWARD.flipped(), Orientation::REVERSED);
        assert_eq!(Orientation::REVERSED.flipped().sign(), 1);
    }

    #[test]
    fn positions_order_row_major() {
        let mut squares = vec![
            Position::new(1, 0),
            Position::new(0, 7),
            Position::new(0, 2),
        ];
        squares.sort();
        assert_eq!(
            squares,
            vec![Position::new(0, 2), Position::new(0, 7), Position::new(1, 0)]
        );
    }
}
