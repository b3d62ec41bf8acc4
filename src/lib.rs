//! # hanoi-engine
//!
//! Interactive Tower of Hanoi engine with an optimal solver and timed
//! solution playback.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Agnostic**: The engine owns puzzle state and rules only.
//!    Drawing disks, drag-and-drop and toasts live in the front end, which
//!    reads pegs through observers and drains [`PuzzleEvent`]s.
//!
//! 2. **Snapshot Playback**: The solver records a full board snapshot per
//!    move; playback restores snapshots rather than re-applying moves.
//!
//! 3. **No Blocking**: Playback asks a [`Scheduler`] for deferred ticks.
//!    Tests and headless callers use the [`VirtualClock`].
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Pegs are `im::Vector`s, so the
//!   `2^n - 1` snapshots of a solution share structure.
//!
//! - **Ranks Decide**: Legality and win detection look only at disk ranks.
//!   Widths, heights and colors are cosmetic.
//!
//! ## Modules
//!
//! - `core`: Disks, pegs, state, moves, configuration, RNG, errors, events
//! - `board`: Board initializer
//! - `rules`: Move validator and win detector
//! - `solver`: Recursive and iterative optimal solvers
//! - `playback`: Simulation player and schedulers
//! - `engine`: The `HanoiEngine` facade

pub mod board;
pub mod core;
pub mod engine;
pub mod playback;
pub mod rules;
pub mod solver;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardGeometry, Color, Disk, HanoiError, HanoiResult, IllegalMove, Move, MoveOutcome,
    MoveRecord, Peg, PegId, Pegs, PuzzleConfig, PuzzleEvent, PuzzleState, Rank, ReplayDelay,
};

pub use crate::board::{initialize, new_puzzle};

pub use crate::rules::{apply_move, legal_moves, state_is_solved, validate, GOAL_PEG};

pub use crate::solver::{minimal_move_count, solve, solve_iterative};

pub use crate::playback::{PlaybackStatus, Scheduler, SimulationPlayer, TimerToken, VirtualClock};

pub use crate::engine::HanoiEngine;
