//! Win detection.
//!
//! A peg wins when it holds every disk of the puzzle. Manual moves check the
//! peg that just received a disk; playback checks [`GOAL_PEG`].

use crate::core::{Peg, PegId, PuzzleState};

/// Peg that solution playback finishes on.
pub const GOAL_PEG: PegId = PegId::Right;

/// True iff `peg` holds all `total_disks` disks.
#[must_use]
pub fn is_solved(peg: &Peg, total_disks: u32) -> bool {
    peg.len() == total_disks as usize
}

/// True iff `peg` of `state` holds the whole tower.
#[must_use]
pub fn state_is_solved(state: &PuzzleState, peg: PegId) -> bool {
    is_solved(state.peg(peg), state.disk_count())
}
