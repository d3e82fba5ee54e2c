//! Ray-cast move generation for sliders and knights.
//!
//! Each ray walks outward one step at a time. An empty square is a
//! displacement and the walk continues; an occupied square ends the ray,
//! yielding a capture first if the occupant is an opponent.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveContext;
use crate::moves::directions::{rays_for, Ray};

pub fn generate_ray_moves(ctx: &MoveContext<'_>, from: Position, piece: Piece, out: &mut Vec<Move>) {
    let orientation = ctx.orientation_of(piece.color);
    for ray in rays_for(piece.kind) {
        cast_ray(ctx.board, from, piece.color, *ray, orientation, out);
    }
}

fn cast_ray(
    board: &Board,
    from: Position,
    mover: Color,
    ray: Ray,
    orientation: Orientation,
    out: &mut Vec<Move>,
) {
    let direction = ray.direction.oriented(orientation);
    let mut step: u32 = 1;
    loop {
        if ray.max_steps.is_some_and(|max| step > max) {
            return;
        }

        let dest = from.sum(direction.scaled(step as i32));
        if !board.is_on_board(dest) {
            return;
        }

        match board.piece_at(dest) {
            Some(blocker) => {
                if blocker.color != mover {
                    out.push(Move::capture(dest));
                }
                return;
            }
            None => out.push(Move::displace(dest)),
        }

        step += 1;
    }
}
