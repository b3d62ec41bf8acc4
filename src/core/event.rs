//! Notifications emitted by the engine.
//!
//! The engine appends events as it mutates the puzzle; the rendering or
//! notification layer drains them (e.g. to show a "You win" toast on
//! `Solved`). Events are informational only: dropping them never changes
//! engine behavior.

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::disk::Rank;
use super::peg::PegId;

/// Something observable happened to the puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleEvent {
    /// A fresh puzzle was created.
    PuzzleCreated {
        /// Disks stacked on peg 1.
        disk_count: u32,
    },

    /// A manual move was accepted.
    DiskMoved {
        /// The move performed.
        movement: Move,
        /// Rank of the moved disk.
        disk: Rank,
    },

    /// Solution playback began.
    PlaybackStarted {
        /// Number of steps to replay.
        steps: usize,
    },

    /// One recorded step was applied.
    PlaybackStep {
        /// Zero-based step index.
        step: usize,
        /// Steps still pending.
        remaining: usize,
    },

    /// Playback consumed its last step (or had none).
    PlaybackFinished,

    /// The win flag went from false to true.
    Solved {
        /// Peg that satisfied the win check.
        peg: PegId,
        /// Move counter at the time of the win.
        moves: u64,
    },
}

impl PuzzleEvent {
    /// Check if this event announces a win.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, PuzzleEvent::Solved { .. })
    }
}
