//! Board initializer.
//!
//! Builds the starting tower for a new puzzle: `disk_count` disks on one
//! peg, smallest on top, sized by interpolating between a base width and a
//! top width. Sizes and colors are cosmetic; only ranks reach the rules.

mod initializer;

pub use initializer::{initialize, new_puzzle, TowerSizing};
