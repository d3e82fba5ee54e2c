//! Errors used throughout the engine.
//!
//! `ChessErrors` is the single error type for construction, configuration
//! loading and explicit move application. Board queries never fail; an
//! off-board or empty square simply reads as "nothing there".

use crate::game_state::chess_types::Position;

/// Unified error type for the engine.
///
/// Treat the parsing and configuration variants as input errors suitable for
/// showing to a user. The move variants mean the caller asked for something
/// the current position does not allow; the game state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessErrors {
    /// The board description had no rows, or its first row had no cells.
    #[error("board description is empty")]
    EmptyBoard,

    /// A row's length differs from the first row's.
    #[error("board row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell symbol is neither a piece letter nor the empty marker.
    #[error("invalid board symbol '{symbol}' at row {row}, column {col}")]
    InvalidBoardSymbol { symbol: char, row: usize, col: usize },

    /// Tried to move from a square with no piece on it.
    #[error("no piece to move at {0}")]
    EmptyOrigin(Position),

    /// Tried to move a piece that belongs to the side not on move.
    #[error("piece at {0} does not belong to the side to move")]
    NotSideToMove(Position),

    /// The destination is not among the origin piece's generated moves.
    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination { from: Position, to: Position },

    /// The rules configuration could not be read or parsed.
    #[error("invalid rules configuration: {0}")]
    InvalidRulesConfig(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
