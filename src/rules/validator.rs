//! Move validation.
//!
//! A move is legal iff the source peg has a disk, the destination is a
//! different peg, and the destination is either empty or topped by a
//! larger disk.

use crate::core::{IllegalMove, Move, PegId, PuzzleState, Rank};

/// Decide whether moving the top disk of `from` onto `to` is legal.
///
/// Returns the rank of the disk that would move.
pub fn validate(state: &PuzzleState, from: PegId, to: PegId) -> Result<Rank, IllegalMove> {
    let moving = state.peg(from).top().ok_or(IllegalMove::EmptySource)?;

    if from == to {
        return Err(IllegalMove::SamePeg);
    }

    match state.peg(to).top() {
        Some(resting) if !moving.fits_on(resting) => Err(IllegalMove::LargerOntoSmaller {
            moving: moving.rank(),
            resting: resting.rank(),
        }),
        _ => Ok(moving.rank()),
    }
}

/// Validate and perform a move. Illegal moves leave `state` untouched.
pub fn apply_move(state: &mut PuzzleState, movement: Move) -> Result<Rank, IllegalMove> {
    validate(state, movement.from, movement.to)?;
    state
        .transfer(movement.from, movement.to)
        .map(|disk| disk.rank())
        .ok_or(IllegalMove::EmptySource)
}

/// Enumerate every legal move from `state`, in board order.
#[must_use]
pub fn legal_moves(state: &PuzzleState) -> Vec<Move> {
    let mut moves = Vec::new();

    for from in PegId::ALL {
        for to in PegId::ALL {
            if validate(state, from, to).is_ok() {
                moves.push(Move::new(from, to));
            }
        }
    }

    moves
}
