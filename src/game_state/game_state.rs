//! Game state: the board plus everything derived from it for the current turn.
//!
//! `GameState` owns the board, the side to move and its orientation, the
//! per-square move counters, the current move index and the pending
//! selection. Board mutation and index rebuild only happen together, through
//! [`GameState::commit_move`].

use std::collections::HashMap;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{RulesConfig, STARTING_POSITION};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_index::LegalMoveIndex;
use crate::move_generation::move_generator::{KingSafety, MoveContext};
use crate::utils::board_parser::parse_board_rows;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rules: RulesConfig,
    side_to_move: Color,
    orientation: Orientation,
    // Moves made by the piece now standing on each square; absent means zero.
    moves_made: HashMap<Position, u32>,
    ply: u32,
    legal_moves: LegalMoveIndex,
    pub(crate) pending_selection: Option<Position>,
}

impl GameState {
    pub fn new(board: Board, rules: RulesConfig) -> Self {
        let side_to_move = rules.first_player;
        let orientation = rules.orientation_of(side_to_move);
        let mut state = Self {
            board,
            rules,
            side_to_move,
            orientation,
            moves_made: HashMap::new(),
            ply: 0,
            legal_moves: LegalMoveIndex::default(),
            pending_selection: None,
        };
        state.rebuild_legal_moves();
        state
    }

    pub fn from_rows(rows: &[&str], rules: RulesConfig) -> ChessResult<Self> {
        Ok(Self::new(parse_board_rows(rows)?, rules))
    }

    pub fn new_game() -> Self {
        Self::from_rows(&STARTING_POSITION, RulesConfig::default())
            .expect("starting position should always parse")
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[inline]
    pub fn legal_move_index(&self) -> &LegalMoveIndex {
        &self.legal_moves
    }

    #[inline]
    pub fn pending_selection(&self) -> Option<Position> {
        self.pending_selection
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.board.piece_at(position)
    }

    pub fn moves_from(&self, position: Position) -> &[Move] {
        self.legal_moves.moves_from(position)
    }

    pub fn num_moves_made_by_piece(&self, position: Position) -> u32 {
        self.moves_made.get(&position).copied().unwrap_or(0)
    }

    pub fn is_unmoved_piece(&self, position: Position) -> bool {
        self.num_moves_made_by_piece(position) == 0
    }

    /// Orientation used for `color`'s pieces this turn.
    pub fn orientation_of(&self, color: Color) -> Orientation {
        if color == self.side_to_move {
            self.orientation
        } else {
            self.orientation.flipped()
        }
    }

    pub fn move_context(&self) -> MoveContext<'_> {
        MoveContext {
            board: &self.board,
            light_orientation: self.orientation_of(Color::Light),
            double_step: self.rules.double_step,
            moves_made: &self.moves_made,
            king_safety: KingSafety::Checked,
        }
    }

    /// Snapshot query over the current index: is `position` a capture target
    /// for the side not to move?
    pub fn is_under_attack(&self, position: Position) -> bool {
        self.legal_moves
            .is_under_attack(&self.board, position, self.side_to_move)
    }

    /// Fresh query against the current board: could `attacker` capture on
    /// `position` right now?
    pub fn is_attacked_by(&self, position: Position, attacker: Color) -> bool {
        is_square_attacked(&self.move_context(), position, attacker)
    }

    pub fn rebuild_legal_moves(&mut self) {
        self.legal_moves = LegalMoveIndex::rebuild(self);
    }

    /// Move a piece, hand the turn over and rebuild the index, as one unit.
    ///
    /// Legality is the caller's responsibility; see
    /// [`crate::move_generation::legal_move_apply::apply_move`].
    pub(crate) fn commit_move(&mut self, from: Position, to: Position) -> Option<Piece> {
        let captured = self.board.move_piece(from, to);

        let moved_count = self.moves_made.remove(&from).unwrap_or(0) + 1;
        self.moves_made.insert(to, moved_count);

        self.side_to_move = self.side_to_move.opposite();
        self.orientation = self.orientation.flipped();
        self.ply += 1;
        self.pending_selection = None;
        self.rebuild_legal_moves();
        captured
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
