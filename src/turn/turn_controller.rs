//! Click-driven turn state machine.
//!
//! `select_square` is the single input event. Each call runs one transition
//! to completion:
//!
//! - awaiting selection: a square with a piece of the side to move becomes
//!   the pending selection; anything else is ignored.
//! - awaiting destination: the same square deselects; another friendly piece
//!   re-dispatches the selection to it; a square outside the selected piece's
//!   moves aborts; a listed destination applies the move and hands the turn
//!   over.

use log::{debug, warn};

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, AppliedMove};
use crate::move_generation::legal_move_index::LegalMoveIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    AwaitingDestination(Position),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing to pick up on that square.
    Ignored,
    /// A piece was picked up; `moves` are its destinations to highlight.
    Selected { from: Position, moves: Vec<Move> },
    /// The selected piece was clicked again.
    Deselected,
    /// The click was not one of the selected piece's destinations.
    Aborted,
    Moved(AppliedMove),
}

#[derive(Debug, Clone, Default)]
pub struct TurnController {
    state: GameState,
}

impl TurnController {
    pub fn new(board: Board, rules: RulesConfig) -> Self {
        Self::from_state(GameState::new(board, rules))
    }

    pub fn from_rows(rows: &[&str], rules: RulesConfig) -> ChessResult<Self> {
        Ok(Self::from_state(GameState::from_rows(rows, rules)?))
    }

    pub fn new_game() -> Self {
        Self::from_state(GameState::new_game())
    }

    pub fn from_state(mut state: GameState) -> Self {
        state.pending_selection = None;
        Self { state }
    }

    pub fn phase(&self) -> Phase {
        match self.state.pending_selection() {
            None => Phase::AwaitingSelection,
            Some(from) => Phase::AwaitingDestination(from),
        }
    }

    pub fn select_square(&mut self, position: Position) -> SelectionOutcome {
        let outcome = match self.state.pending_selection() {
            None => self.pick_up(position),
            Some(from) => self.choose_destination(from, position),
        };
        debug!("select {position}: {outcome:?}, now {:?}", self.phase());
        outcome
    }

    fn pick_up(&mut self, position: Position) -> SelectionOutcome {
        if !self.is_own_piece(position) {
            return SelectionOutcome::Ignored;
        }
        self.state.pending_selection = Some(position);
        SelectionOutcome::Selected {
            from: position,
            moves: self.state.moves_from(position).to_vec(),
        }
    }

    fn choose_destination(&mut self, from: Position, position: Position) -> SelectionOutcome {
        self.state.pending_selection = None;

        if position == from {
            return SelectionOutcome::Deselected;
        }
        if self.is_own_piece(position) {
            return self.pick_up(position);
        }
        if !self.state.legal_move_index().contains_destination(from, position) {
            return SelectionOutcome::Aborted;
        }

        match apply_move(&mut self.state, from, position) {
            Ok(applied) => SelectionOutcome::Moved(applied),
            Err(e) => {
                warn!("selection {from} -> {position} rejected: {e}");
                SelectionOutcome::Aborted
            }
        }
    }

    fn is_own_piece(&self, position: Position) -> bool {
        self.state
            .piece_at(position)
            .is_some_and(|piece| piece.color == self.state.side_to_move())
    }

    /// Apply a move directly, bypassing the click flow. Clears any pending
    /// selection on success; on error nothing changes.
    pub fn apply_move(&mut self, from: Position, to: Position) -> ChessResult<AppliedMove> {
        apply_move(&mut self.state, from, to)
    }

    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.state.piece_at(position)
    }

    pub fn moves_from(&self, position: Position) -> &[Move] {
        self.state.moves_from(position)
    }

    pub fn legal_move_index(&self) -> &LegalMoveIndex {
        self.state.legal_move_index()
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    pub fn orientation(&self) -> Orientation {
        self.state.orientation()
    }

    pub fn pending_selection(&self) -> Option<Position> {
        self.state.pending_selection()
    }

    pub fn is_pending_selection(&self, position: Position) -> bool {
        self.state.pending_selection() == Some(position)
    }

    /// Destinations of the pending selection, or nothing when none is pending.
    pub fn highlighted_moves(&self) -> &[Move] {
        match self.state.pending_selection() {
            Some(from) => self.state.moves_from(from),
            None => &[],
        }
    }

    pub fn is_under_attack(&self, position: Position) -> bool {
        self.state.is_under_attack(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_awaiting_selection_with_light_to_move() {
        let controller = TurnController::new_game();
        assert_eq!(controller.phase(), Phase::AwaitingSelection);
        assert_eq!(controller.side_to_move(), Color::Light);
        assert_eq!(controller.orientation(), Orientation::FORWARD);
        assert!(controller.highlighted_moves().is_empty());
    }

    #[test]
    fn ignores_empty_and_opponent_squares() {
        let mut controller = TurnController::new_game();
        assert_eq!(controller.select_square(Position::new(4, 4)), SelectionOutcome::Ignored);
        assert_eq!(controller.select_square(Position::new(1, 4)), SelectionOutcome::Ignored);
        assert_eq!(controller.select_square(Position::new(-3, 9)), SelectionOutcome::Ignored);
        assert_eq!(controller.phase(), Phase::AwaitingSelection);
    }

    #[test]
    fn selecting_a_pawn_highlights_its_two_advances() {
        let mut controller = TurnController::new_game();
        let pawn = Position::new(6, 4);
        let outcome = controller.select_square(pawn);
        let expected = vec![
            Move::displace(Position::new(5, 4)),
            Move::displace(Position::new(4, 4)),
        ];
        assert_eq!(
            outcome,
            SelectionOutcome::Selected {
                from: pawn,
                moves: expected.clone(),
            }
        );
        assert_eq!(controller.phase(), Phase::AwaitingDestination(pawn));
        assert!(controller.is_pending_selection(pawn));
        assert_eq!(controller.highlighted_moves(), expected.as_slice());
    }

    #[test]
    fn clicking_the_selection_again_deselects() {
        let mut controller = TurnController::new_game();
        let knight = Position::new(7, 1);
        controller.select_square(knight);
        assert_eq!(controller.select_square(knight), SelectionOutcome::Deselected);
        assert_eq!(controller.phase(), Phase::AwaitingSelection);
    }

    #[test]
    fn clicking_another_friendly_piece_redispatches() {
        let mut controller = TurnController::new_game();
        let before = controller.board().clone();
        controller.select_square(Position::new(6, 4));

        let knight = Position::new(7, 1);
        let outcome = controller.select_square(knight);
        assert_eq!(
            outcome,
            SelectionOutcome::Selected {
                from: knight,
                moves: vec![
                    Move::displace(Position::new(5, 0)),
                    Move::displace(Position::new(5, 2)),
                ],
            }
        );
        assert_eq!(controller.phase(), Phase::AwaitingDestination(knight));
        assert_eq!(controller.board(), &before);
        assert_eq!(controller.side_to_move(), Color::Light);
    }

    #[test]
    fn clicking_a_non_destination_aborts() {
        let mut controller = TurnController::new_game();
        controller.select_square(Position::new(6, 4));
        assert_eq!(controller.select_square(Position::new(3, 4)), SelectionOutcome::Aborted);
        assert_eq!(controller.phase(), Phase::AwaitingSelection);
        assert_eq!(controller.side_to_move(), Color::Light);
    }

    #[test]
    fn clicking_a_destination_moves_and_hands_over_the_turn() {
        let mut controller = TurnController::new_game();
        let from = Position::new(6, 4);
        let to = Position::new(4, 4);
        controller.select_square(from);

        let outcome = controller.select_square(to);
        let SelectionOutcome::Moved(applied) = outcome else {
            panic!("expected a move, got {outcome:?}");
        };
        assert_eq!(applied.from, from);
        assert_eq!(applied.to, to);
        assert_eq!(applied.effect, MoveEffect::Displace);
        assert_eq!(applied.captured, None);

        assert_eq!(controller.phase(), Phase::AwaitingSelection);
        assert_eq!(controller.side_to_move(), Color::Dark);
        assert_eq!(controller.orientation(), Orientation::REVERSED);
        assert_eq!(controller.piece_at(from), None);
        assert_eq!(
            controller.piece_at(to),
            Some(Piece::new(PieceKind::Pawn, Color::Light))
        );
        // The index was rebuilt for the new board.
        assert!(controller.moves_from(from).is_empty());
        assert_eq!(controller.moves_from(to), &[Move::displace(Position::new(3, 4))]);

        // Light pieces can no longer be picked up.
        assert_eq!(controller.select_square(Position::new(6, 3)), SelectionOutcome::Ignored);
    }

    #[test]
    fn lone_king_cannot_step_onto_the_rooks_rank() {
        let mut controller = TurnController::from_rows(
            &[
                "........",
                "........",
                "........",
                "........",
                "R...k...",
                "........",
                "........",
                "........",
            ],
            RulesConfig::default(),
        )
        .expect("test board should parse");
        let king = Position::new(4, 4);
        let SelectionOutcome::Selected { moves, .. } = controller.select_square(king) else {
            panic!("king should be selectable");
        };
        assert!(!moves.iter().any(|m| m.destination == Position::new(4, 3)));
        assert!(!moves.iter().any(|m| m.destination == Position::new(4, 5)));
        assert_eq!(moves.len(), 6);

        assert_eq!(controller.select_square(Position::new(4, 3)), SelectionOutcome::Aborted);
        assert_eq!(controller.piece_at(king), Some(Piece::new(PieceKind::King, Color::Light)));
    }

    #[test]
    fn direct_apply_clears_a_pending_selection() {
        let mut controller = TurnController::new_game();
        controller.select_square(Position::new(6, 0));
        controller
            .apply_move(Position::new(7, 6), Position::new(5, 5))
            .expect("knight move should be legal");
        assert_eq!(controller.phase(), Phase::AwaitingSelection);
        assert_eq!(controller.side_to_move(), Color::Dark);
    }
}
