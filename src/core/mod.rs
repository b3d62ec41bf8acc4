//! Core engine types: disks, pegs, state, moves, configuration, RNG, errors.
//!
//! Everything here is plain data. The rules, solver and playback modules
//! build on these types; the engine facade ties them together.

pub mod action;
pub mod config;
pub mod disk;
pub mod error;
pub mod event;
pub mod peg;
pub mod rng;
pub mod state;

pub use action::{IllegalMove, Move, MoveOutcome, MoveRecord};
pub use config::{
    parse_disk_count, validate_disk_count, BoardGeometry, PuzzleConfig, ReplayDelay,
    DEFAULT_DISK_COUNT, DEFAULT_MAX_ANIMATED_DISKS, DEFAULT_MAX_DISKS,
};
pub use disk::{Color, Disk, Rank};
pub use error::{HanoiError, HanoiResult};
pub use event::PuzzleEvent;
pub use peg::{Peg, PegId, Pegs};
pub use rng::PuzzleRng;
pub use state::PuzzleState;
