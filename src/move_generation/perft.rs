//! Move-path enumeration for regression testing and benchmarking.
//!
//! Counts every sequence of moves the side to move can make, down to a fixed
//! number of plies, by cloning the state and applying each indexed move.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let side = game_state.side_to_move();
    let candidates: Vec<(Position, Move)> = game_state
        .legal_move_index()
        .entries_for(game_state.board(), side)
        .flat_map(|(from, moves)| moves.iter().map(move |m| (from, *m)))
        .collect();

    let mut total = PerftCounts::default();
    for (from, mv) in candidates {
        if depth == 1 {
            total.nodes += 1;
            if mv.is_capture() {
                total.captures += 1;
            }
            continue;
        }

        let mut next = game_state.clone();
        apply_move(&mut next, from, mv.destination)?;
        total.merge(perft(&next, depth - 1)?);
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 0).expect("perft runs").nodes, 1);
        assert_eq!(perft(&game, 1).expect("perft runs").nodes, 20);
        let two = perft(&game, 2).expect("perft runs");
        assert_eq!(two.nodes, 400);
        assert_eq!(two.captures, 0);
    }
}
