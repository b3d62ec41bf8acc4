//! Puzzle rules.
//!
//! - Move validation: which manual moves are legal and how they change the
//!   board
//! - Win detection: when the puzzle counts as solved
//!
//! Rules are pure functions over `PuzzleState`. Move counting and
//! notifications belong to the engine facade.

pub mod validator;
pub mod win;

pub use validator::{apply_move, legal_moves, validate};
pub use win::{is_solved, state_is_solved, GOAL_PEG};
