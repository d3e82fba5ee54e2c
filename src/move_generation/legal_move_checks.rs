//! Attack detection.
//!
//! Attacks are read from freshly generated moves against a board the caller
//! supplies, so king safety can ask about a hypothetical position without
//! touching the game's move index.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{generate_moves, MoveContext};

/// Whether any `attacker` piece on `ctx.board` has a capture landing on `square`.
///
/// King rules are evaluated without their own safety check here.
pub fn is_square_attacked(ctx: &MoveContext<'_>, square: Position, attacker: Color) -> bool {
    let attack_ctx = ctx.for_attacks(ctx.board);
    ctx.board
        .occupied()
        .filter(|(_, piece)| piece.color == attacker)
        .any(|(from, _)| {
            generate_moves(&attack_ctx, from)
                .iter()
                .any(|m| m.is_capture() && m.destination == square)
        })
}

/// Whether a king of `color` stepping from `from` to `dest` would stand attacked.
pub fn is_king_destination_attacked(
    ctx: &MoveContext<'_>,
    from: Position,
    dest: Position,
    color: Color,
) -> bool {
    let mut hypothetical = ctx.board.clone();
    hypothetical.move_piece(from, dest);
    let hypothetical_ctx = ctx.for_attacks(&hypothetical);
    is_square_attacked(&hypothetical_ctx, dest, color.opposite())
}

/// Squares holding a `color` piece that `color.opposite()` could capture.
pub fn attacked_pieces(ctx: &MoveContext<'_>, color: Color) -> Vec<Position> {
    ctx.board
        .occupied()
        .filter(|(_, piece)| piece.color == color)
        .map(|(position, _)| position)
        .filter(|&position| is_square_attacked(ctx, position, color.opposite()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::RulesConfig;

    fn game(rows: &[&str]) -> GameState {
        GameState::from_rows(rows, RulesConfig::default()).expect("test board should parse")
    }

    #[test]
    fn only_occupied_targets_count_as_attacked() {
        let state = game(&[
            "R...", //
            "....", //
            "n...", //
            "....",
        ]);
        let ctx = state.move_context();
        assert!(is_square_attacked(&ctx, Position::new(2, 0), Color::Dark));
        assert!(!is_square_attacked(&ctx, Position::new(1, 0), Color::Dark));
        assert!(!is_square_attacked(&ctx, Position::new(2, 0), Color::Light));
    }

    #[test]
    fn blocked_lines_do_not_attack() {
        let state = game(&[
            "R...", //
            "p...", //
            "n...", //
            "....",
        ]);
        let ctx = state.move_context();
        assert_eq!(attacked_pieces(&ctx, Color::Light), vec![Position::new(1, 0)]);
    }

    #[test]
    fn hypothetical_step_leaves_the_real_board_alone() {
        let state = game(&[
            "R...", //
            "....", //
            ".k..", //
            "....",
        ]);
        let ctx = state.move_context();
        assert!(is_king_destination_attacked(
            &ctx,
            Position::new(2, 1),
            Position::new(2, 0),
            Color::Light
        ));
        assert!(!is_king_destination_attacked(
            &ctx,
            Position::new(2, 1),
            Position::new(2, 2),
            Color::Light
        ));
        assert_eq!(
            state.board().piece_at(Position::new(2, 1)),
            Some(Piece::new(PieceKind::King, Color::Light))
        );
    }
}
