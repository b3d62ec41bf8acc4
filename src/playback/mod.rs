//! Timed replay of a recorded solution.
//!
//! Playback is cooperative and single-threaded. Instead of sleeping, the
//! player asks a [`Scheduler`] for a deferred tick and is handed the
//! matching [`TimerToken`] when it fires:
//!
//! ```text
//!   Idle --start(non-empty)--> Playing --last tick--> Finished
//!     \                                                 ^
//!      `----------------start(empty)-------------------'
//! ```
//!
//! Starting again, or abandoning, cancels the pending tick and forgets its
//! token, so a stale tick that still fires is ignored.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use hanoi_engine::core::{Disk, Peg, PegId, PuzzleState, ReplayDelay};
//! use hanoi_engine::playback::{PlaybackStatus, SimulationPlayer, VirtualClock};
//! use hanoi_engine::solver::solve;
//!
//! let start = PuzzleState::with_tower((1..=2).map(Disk::plain).collect::<Peg>());
//! let records = solve(&start, 2, PegId::Left, PegId::Right, PegId::Middle).unwrap();
//!
//! let mut clock = VirtualClock::new();
//! let mut player = SimulationPlayer::new();
//! player.start(records, ReplayDelay::from_millis(10), &mut clock);
//! assert_eq!(player.status(), PlaybackStatus::Playing);
//!
//! while let Some(token) = clock.pop_due(Duration::from_secs(1)) {
//!     player.tick(token, &mut clock);
//! }
//! assert_eq!(player.status(), PlaybackStatus::Finished);
//! ```

mod player;
mod scheduler;

pub use player::{PlaybackStatus, SimulationPlayer, TickOutcome};
pub use scheduler::{Scheduler, TimerToken, VirtualClock};
