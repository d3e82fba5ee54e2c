//! Vector arithmetic over board coordinates.
//!
//! Positions double as offsets: a direction is just a `Position` that is
//! added to a square, usually after being scaled by a step count and an
//! orientation sign.

use std::ops::{Add, Mul, Neg};

use crate::game_state::chess_types::{Orientation, Position};

impl Position {
    #[inline]
    pub const fn sum(self, other: Position) -> Position {
        Position::new(self.row + other.row, self.col + other.col)
    }

    /// Scale both components. A negative factor mirrors across both axes.
    #[inline]
    pub const fn scaled(self, factor: i32) -> Position {
        Position::new(self.row * factor, self.col * factor)
    }

    #[inline]
    pub const fn oriented(self, orientation: Orientation) -> Position {
        self.scaled(orientation.sign())
    }

    #[inline]
    pub const fn equals(self, other: Position) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Add for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Position) -> Self::Output {
        self.sum(rhs)
    }
}

impl Mul<i32> for Position {
    type Output = Position;

    #[inline]
    fn mul(self, rhs: i32) -> Self::Output {
        self.scaled(rhs)
    }
}

impl Neg for Position {
    type Output = Position;

    #[inline]
    fn neg(self) -> Self::Output {
        self.scaled(-1)
    }
}
