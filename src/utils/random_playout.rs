//! Seeded random playouts through the click interface.
//!
//! Each ply picks a random movable piece of the side to move and a random
//! destination, then feeds both squares to `select_square` exactly as a
//! presentation layer would.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::AppliedMove;
use crate::turn::turn_controller::{SelectionOutcome, TurnController};

/// Play up to `plies` random moves. Stops early when the side to move has no
/// moves at all. Returns what was applied, in order.
pub fn random_playout(controller: &mut TurnController, plies: usize, seed: u64) -> Vec<AppliedMove> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played = Vec::with_capacity(plies);

    for _ in 0..plies {
        let side = controller.side_to_move();
        let movable: Vec<(Position, &[Move])> = controller
            .legal_move_index()
            .entries_for(controller.board(), side)
            .filter(|(_, moves)| !moves.is_empty())
            .collect();

        let Some(&(from, moves)) = movable.choose(&mut rng) else {
            break;
        };
        let Some(mv) = moves.choose(&mut rng).copied() else {
            break;
        };

        controller.select_square(from);
        match controller.select_square(mv.destination) {
            SelectionOutcome::Moved(applied) => played.push(applied),
            _ => break,
        }
    }

    played
}
