//! Optimal three-peg solver.
//!
//! To move a tower of height `h` from `source` to `destination`:
//! 1. move the top `h - 1` disks from `source` to `auxiliary`
//! 2. move the remaining disk from `source` to `destination`
//! 3. move the `h - 1` disks from `auxiliary` onto it
//!
//! This takes exactly `2^h - 1` single-disk moves, the minimum.
//!
//! ## Entry points
//!
//! - [`solve`]: the recursive formulation, recording a [`MoveRecord`] per move
//! - [`solve_iterative`]: same records, explicit stack instead of recursion
//! - [`moves`]: lazy iterator over the bare [`Move`]s, no snapshots
//! - [`minimal_move_count`]: `2^n - 1`
//!
//! [`MoveRecord`]: crate::core::MoveRecord
//! [`Move`]: crate::core::Move

mod iterative;
mod recursive;

pub use iterative::{moves, solve_iterative, MoveIter};
pub use recursive::solve;

use crate::core::{HanoiError, HanoiResult, PegId, PuzzleState};

/// Number of moves in the optimal solution for `disk_count` disks.
///
/// Saturates at `u128::MAX` for towers of 128 disks or more.
///
/// ```
/// use hanoi_engine::solver::minimal_move_count;
///
/// assert_eq!(minimal_move_count(0), 0);
/// assert_eq!(minimal_move_count(3), 7);
/// assert_eq!(minimal_move_count(64), 18_446_744_073_709_551_615);
/// ```
#[must_use]
pub fn minimal_move_count(disk_count: u32) -> u128 {
    if disk_count >= u128::BITS {
        u128::MAX
    } else {
        (1u128 << disk_count) - 1
    }
}

/// Validate a solve request and return the tower height.
///
/// Rejects negative heights, repeated pegs, and towers taller than the
/// source peg.
fn check_request(
    start: &PuzzleState,
    disk_count: i64,
    source: PegId,
    destination: PegId,
    auxiliary: PegId,
) -> HanoiResult<u32> {
    if disk_count < 0 {
        return Err(HanoiError::invalid_configuration(format!(
            "cannot solve a tower of {disk_count} disks"
        )));
    }
    if source == destination || source == auxiliary || destination == auxiliary {
        return Err(HanoiError::invalid_configuration(format!(
            "source, destination and auxiliary must be distinct, got {source}, {destination}, {auxiliary}"
        )));
    }
    let available = start.peg(source).len();
    match u32::try_from(disk_count) {
        Ok(height) if height as usize <= available => Ok(height),
        _ => Err(HanoiError::invalid_configuration(format!(
            "tower of {disk_count} disks requested but {source} holds {available}"
        ))),
    }
}
