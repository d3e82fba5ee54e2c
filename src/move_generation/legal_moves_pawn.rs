//! Pawn rules: single and double advance, diagonal captures, and the
//! en-passant and promotion hooks.

use crate::game_state::chess_rules::DoubleStepRule;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveContext;
use crate::moves::directions::FRONT;

fn pawn_front(ctx: &MoveContext<'_>, from: Position, piece: Piece, steps: i32) -> Option<Move> {
    let front = FRONT.oriented(ctx.orientation_of(piece.color));
    let dest = from.sum(front.scaled(steps));
    if ctx.board.is_on_board(dest) && ctx.board.is_empty(dest) {
        Some(Move::displace(dest))
    } else {
        None
    }
}

pub fn pawn_front_single(ctx: &MoveContext<'_>, from: Position, piece: Piece) -> Option<Move> {
    pawn_front(ctx, from, piece, 1)
}

/// Two squares forward through an empty square, if this pawn may still do so.
pub fn pawn_front_double(ctx: &MoveContext<'_>, from: Position, piece: Piece) -> Option<Move> {
    pawn_front_single(ctx, from, piece)?;
    let eligible = match ctx.double_step {
        DoubleStepRule::Always => true,
        DoubleStepRule::UnmovedOnly => ctx.is_unmoved_piece(from),
    };
    if !eligible {
        return None;
    }
    pawn_front(ctx, from, piece, 2)
}

/// Capture one square diagonally forward toward `side`.
pub fn pawn_capture(ctx: &MoveContext<'_>, from: Position, piece: Piece, side: Position) -> Option<Move> {
    let orientation = ctx.orientation_of(piece.color);
    let dest = from.sum(side.oriented(orientation)).sum(FRONT.oriented(orientation));
    match ctx.board.piece_at(dest) {
        Some(target) if target.color != piece.color => Some(Move::capture(dest)),
        _ => None,
    }
}

/// En-passant hook. Needs move history this rule set does not track.
pub fn pawn_en_passant(_ctx: &MoveContext<'_>, _from: Position, _piece: Piece) -> Option<Move> {
    None
}

/// Promotion hook. Reaching the far row changes nothing here.
pub fn pawn_promote(_ctx: &MoveContext<'_>, _from: Position, _piece: Piece) -> Option<Move> {
    None
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::game_state::chess_rules::RulesConfig;
    use crate::move_generation::move_generator::{generate_moves, legal_moves, KingSafety};

    fn game(rows: &[&str]) -> GameState {
        GameState::from_rows(rows, RulesConfig::default()).expect("test board should parse")
    }

    #[test]
    fn blocked_pawn_cannot_jump_two() {
        let state = game(&[
            "...", //
            "...", //
            ".n.", //
            ".p.",
        ]);
        assert!(legal_moves(Position::new(3, 1), &state).is_empty());
    }

    #[test]
    fn double_step_respects_move_history() {
        let board = crate::utils::board_parser::parse_board_rows(&[
            "...", //
            "...", //
            "...", //
            ".p.",
        ])
        .expect("test board should parse");
        let from = Position::new(3, 1);
        let mut moves_made = HashMap::new();
        moves_made.insert(from, 1);

        let ctx = MoveContext {
            board: &board,
            light_orientation: Orientation::FORWARD,
            double_step: DoubleStepRule::UnmovedOnly,
            moves_made: &moves_made,
            king_safety: KingSafety::Checked,
        };
        assert_eq!(generate_moves(&ctx, from), vec![Move::displace(Position::new(2, 1))]);

        let always = MoveContext {
            double_step: DoubleStepRule::Always,
            ..ctx
        };
        assert_eq!(
            generate_moves(&always, from),
            vec![
                Move::displace(Position::new(2, 1)),
                Move::displace(Position::new(1, 1)),
            ]
        );
    }

    #[test]
    fn pawn_captures_diagonally_forward_only() {
        let state = game(&[
            ".....", //
            ".P.N.", //
            "..p..", //
            ".R.R.", //
            ".....",
        ]);
        let moves = legal_moves(Position::new(2, 2), &state);
        assert_eq!(
            moves,
            vec![
                Move::displace(Position::new(1, 2)),
                Move::displace(Position::new(0, 2)),
                Move::capture(Position::new(1, 1)),
                Move::capture(Position::new(1, 3)),
            ]
        );
    }

    #[test]
    fn pawn_on_the_far_row_has_no_off_board_advance() {
        let state = game(&[
            ".p.", //
            "...",
        ]);
        assert!(legal_moves(Position::new(0, 1), &state).is_empty());
    }
}
