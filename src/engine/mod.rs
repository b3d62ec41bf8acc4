//! Engine facade used by the rendering/input layer.
//!
//! `HanoiEngine` owns the only mutable puzzle state and exposes:
//! - `create_puzzle`: start a fresh game
//! - `attempt_move`: a drag-and-drop gesture between two pegs
//! - `solve_and_animate`: compute the optimal solution and replay it
//! - observers for pegs, move count, win flag and playback status
//!
//! Every mutation happens inside one of these calls or inside
//! `on_timer`, which the front end invokes when a scheduled playback tick
//! fires. Nothing here blocks.

mod game;

pub use game::HanoiEngine;
