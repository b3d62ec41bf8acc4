//! Moves, move outcomes and recorded board snapshots.
//!
//! A `Move` names a source and destination peg. Validating it yields a
//! `MoveOutcome`; a rejected gesture is an ordinary value (`IllegalMove`),
//! not an error.
//!
//! The solver emits one `MoveRecord` per single-disk move. Each record holds
//! the post-move contents of all three pegs so that playback can restore the
//! board verbatim.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::disk::Rank;
use super::peg::{Peg, PegId, Pegs};

/// Relocation of the top disk of one peg onto another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Peg the disk is taken from.
    pub from: PegId,
    /// Peg the disk is placed on.
    pub to: PegId,
}

impl Move {
    #[must_use]
    pub const fn new(from: PegId, to: PegId) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Why a manual move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum IllegalMove {
    /// The source peg holds no disk.
    #[display("source peg is empty")]
    EmptySource,
    /// Source and destination are the same peg.
    #[display("source and destination are the same peg")]
    SamePeg,
    /// The destination's top disk is smaller than the moving disk.
    #[display("disk {moving} cannot rest on disk {resting}")]
    LargerOntoSmaller {
        /// Rank of the disk being moved.
        moving: Rank,
        /// Rank of the disk it would land on.
        resting: Rank,
    },
}

/// Result of attempting a manual move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The disk was moved.
    Legal {
        /// Rank of the moved disk.
        disk: Rank,
        /// Win flag after checking the destination peg.
        solved: bool,
    },
    /// Nothing changed.
    Illegal(IllegalMove),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_legal(&self) -> bool {
        matches!(self, MoveOutcome::Legal { .. })
    }

    /// Win flag reported by a legal move; `false` for rejected ones.
    #[must_use]
    pub fn solved(&self) -> bool {
        matches!(self, MoveOutcome::Legal { solved: true, .. })
    }
}

/// A captured board snapshot produced by the solver.
///
/// Records are pure data: a sequence of them can be replayed any number of
/// times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Zero-based position in the solution.
    pub step: usize,

    /// The single-disk move that produced this snapshot.
    pub movement: Move,

    /// Post-move contents of all three pegs.
    pub pegs: Pegs<Peg>,
}

impl MoveRecord {
    #[must_use]
    pub fn new(step: usize, movement: Move, pegs: Pegs<Peg>) -> Self {
        Self {
            step,
            movement,
            pegs,
        }
    }

    /// Ranks per peg, top first.
    #[must_use]
    pub fn ranks(&self) -> [Vec<u32>; 3] {
        self.pegs.map(Peg::ranks).into_array()
    }
}
