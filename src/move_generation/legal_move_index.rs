//! Per-turn snapshot of every occupied square's generated moves.
//!
//! The index is rebuilt from scratch after each applied move and never
//! patched in place, so it always matches the board as of the last move.

use std::collections::BTreeMap;

use log::trace;

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_moves;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoveIndex {
    entries: BTreeMap<Position, Vec<Move>>,
}

impl LegalMoveIndex {
    /// Generate moves for every occupied square in row-major order.
    pub fn rebuild(game_state: &GameState) -> Self {
        let ctx = game_state.move_context();
        let entries: BTreeMap<Position, Vec<Move>> = game_state
            .board()
            .occupied()
            .map(|(position, _)| (position, generate_moves(&ctx, position)))
            .collect();

        trace!(
            "rebuilt legal move index: {} squares, {} moves",
            entries.len(),
            entries.values().map(Vec::len).sum::<usize>()
        );

        Self { entries }
    }

    pub fn moves_from(&self, position: Position) -> &[Move] {
        self.entries.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_destination(&self, from: Position, to: Position) -> bool {
        self.moves_from(from).iter().any(|m| m.destination == to)
    }

    pub fn find_move(&self, from: Position, to: Position) -> Option<Move> {
        self.moves_from(from).iter().copied().find(|m| m.destination == to)
    }

    /// Entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &[Move])> + '_ {
        self.entries.iter().map(|(p, moves)| (*p, moves.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total moves available to `color` pieces on `board`.
    pub fn move_count_for(&self, board: &Board, color: Color) -> usize {
        self.entries_for(board, color).map(|(_, moves)| moves.len()).sum()
    }

    /// Entries whose square holds a `color` piece on `board`.
    pub fn entries_for<'a>(
        &'a self,
        board: &'a Board,
        color: Color,
    ) -> impl Iterator<Item = (Position, &'a [Move])> + 'a {
        self.iter()
            .filter(move |(p, _)| board.piece_at(*p).is_some_and(|piece| piece.color == color))
    }

    /// Snapshot attack query: does any piece not belonging to `side_to_move`
    /// have an indexed capture landing on `position`?
    pub fn is_under_attack(&self, board: &Board, position: Position, side_to_move: Color) -> bool {
        self.entries_for(board, side_to_move.opposite())
            .any(|(_, moves)| moves.iter().any(|m| m.is_capture() && m.destination == position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::RulesConfig;

    #[test]
    fn rebuild_is_deterministic() {
        let state = GameState::new_game();
        let first = LegalMoveIndex::rebuild(&state);
        let second = LegalMoveIndex::rebuild(&state);
        assert_eq!(first, second);
        assert_eq!(first, *state.legal_move_index());
    }

    #[test]
    fn start_position_indexes_every_piece() {
        let state = GameState::new_game();
        let index = state.legal_move_index();
        assert_eq!(index.len(), 32);
        assert_eq!(index.move_count_for(state.board(), Color::Light), 20);
        assert_eq!(index.move_count_for(state.board(), Color::Dark), 20);
        assert!(index.moves_from(Position::new(7, 0)).is_empty());
        assert!(index.moves_from(Position::new(4, 4)).is_empty());
    }

    #[test]
    fn entries_are_row_major() {
        let state = GameState::new_game();
        let squares: Vec<Position> = state.legal_move_index().iter().map(|(p, _)| p).collect();
        let mut sorted = squares.clone();
        sorted.sort();
        assert_eq!(squares, sorted);
        assert_eq!(squares.first(), Some(&Position::new(0, 0)));
        assert_eq!(squares.last(), Some(&Position::new(7, 7)));
    }

    #[test]
    fn snapshot_attack_ignores_the_side_to_move() {
        let state = GameState::from_rows(
            &[
                "R..", //
                "...", //
                "n..",
            ],
            RulesConfig::default(),
        )
        .expect("test board should parse");
        let index = state.legal_move_index();
        assert!(index.is_under_attack(state.board(), Position::new(2, 0), Color::Light));
        assert!(!index.is_under_attack(state.board(), Position::new(0, 0), Color::Light));
        assert!(!index.is_under_attack(state.board(), Position::new(2, 0), Color::Dark));
    }
}
