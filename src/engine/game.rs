//! The Tower of Hanoi game.

use tracing::{debug, info, instrument, warn};

use crate::board::new_puzzle;
use crate::core::{
    parse_disk_count, HanoiError, HanoiResult, Move, MoveOutcome, Peg,
    PegId, PuzzleConfig, PuzzleEvent, PuzzleRng, PuzzleState, ReplayDelay,
};
use crate::playback::{PlaybackStatus, Scheduler, SimulationPlayer, TickOutcome, TimerToken, VirtualClock};
use crate::rules::{apply_move, legal_moves, state_is_solved, GOAL_PEG};
use crate::solver::solve;

/// Interactive puzzle with solver playback.
///
/// Generic over the [`Scheduler`] that delivers playback ticks; the default
/// [`VirtualClock`] is driven with [`advance`](HanoiEngine::advance).
///
/// ## Example
///
/// ```
/// use hanoi_engine::core::{MoveOutcome, PegId, PuzzleConfig};
/// use hanoi_engine::engine::HanoiEngine;
///
/// let mut engine = HanoiEngine::new(PuzzleConfig::default().with_disk_count(1)).unwrap();
///
/// let outcome = engine.attempt_move(PegId::Left, PegId::Middle);
/// assert!(outcome.is_legal());
/// assert!(outcome.solved());
/// assert_eq!(engine.move_count(), 1);
/// ```
pub struct HanoiEngine<S: Scheduler = VirtualClock> {
    config: PuzzleConfig,
    rng: PuzzleRng,
    state: PuzzleState,
    move_count: u64,
    solved: bool,
    player: SimulationPlayer,
    scheduler: S,
    events: Vec<PuzzleEvent>,
}

impl HanoiEngine<VirtualClock> {
    /// Create an engine driven by a [`VirtualClock`], with a fresh puzzle of
    /// `config.disk_count` disks.
    pub fn new(config: PuzzleConfig) -> HanoiResult<Self> {
        Self::with_scheduler(config, VirtualClock::new())
    }

    /// Advance virtual time by `by`, delivering every playback tick that
    /// falls due. Returns the number of ticks delivered.
    pub fn advance(&mut self, by: std::time::Duration) -> usize {
        let target = self.scheduler.now() + by;
        let mut delivered = 0;
        while let Some(token) = self.scheduler.pop_due(target) {
            self.on_timer(token);
            delivered += 1;
        }
        self.scheduler.advance_to(target);
        delivered
    }

    /// Deliver ticks until nothing is scheduled. Returns the number of
    /// ticks delivered.
    pub fn run_to_completion(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(deadline) = self.scheduler.next_deadline() {
            if let Some(token) = self.scheduler.pop_due(deadline) {
                self.on_timer(token);
                delivered += 1;
            }
        }
        delivered
    }
}

impl<S: Scheduler> HanoiEngine<S> {
    /// Create an engine using the front end's own scheduler.
    pub fn with_scheduler(config: PuzzleConfig, scheduler: S) -> HanoiResult<Self> {
        config.validate()?;
        let mut rng = PuzzleRng::new(config.color_seed).for_context("disk-colors");
        let state = new_puzzle(i64::from(config.disk_count), &config.geometry, &mut rng)?;

        info!(disk_count = config.disk_count, "engine ready");
        Ok(Self {
            events: vec![PuzzleEvent::PuzzleCreated {
                disk_count: config.disk_count,
            }],
            config,
            rng,
            state,
            move_count: 0,
            solved: false,
            player: SimulationPlayer::new(),
            scheduler,
        })
    }

    // === Actions ===

    /// Start a fresh game with `disk_count` disks on peg 1.
    ///
    /// Abandons any playback in flight and resets the move counter and win
    /// flag. A non-positive count, or one above `max_disks`, is rejected and
    /// the current puzzle kept.
    #[instrument(skip(self))]
    pub fn create_puzzle(&mut self, disk_count: i64) -> HanoiResult<&PuzzleState> {
        let n = self.config.check_disk_count(disk_count)?;
        let state = new_puzzle(i64::from(n), &self.config.geometry, &mut self.rng)?;
        self.replace_puzzle(state);
        Ok(&self.state)
    }

    /// Start a fresh game from a disk count typed by the user.
    pub fn create_from_input(&mut self, input: &str) -> HanoiResult<&PuzzleState> {
        let disk_count = parse_disk_count(input)?;
        self.create_puzzle(i64::from(disk_count))
    }

    /// Try to move the top disk of `from` onto `to`.
    ///
    /// Legal moves bump the move counter and re-check the win condition on
    /// `to`. Illegal moves change nothing.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, from: PegId, to: PegId) -> MoveOutcome {
        let movement = Move::new(from, to);
        match apply_move(&mut self.state, movement) {
            Ok(disk) => {
                self.move_count += 1;
                self.events.push(PuzzleEvent::DiskMoved { movement, disk });
                debug!(%movement, %disk, moves = self.move_count, "disk moved");
                let solved = self.check_win(to);
                MoveOutcome::Legal { disk, solved }
            }
            Err(reason) => {
                debug!(%movement, %reason, "move rejected");
                MoveOutcome::Illegal(reason)
            }
        }
    }

    /// Recreate the puzzle with `disk_count` disks, solve it onto peg 3 and
    /// start replaying the solution every `step_delay`.
    ///
    /// Supersedes any playback in flight. A valid tower always has at least
    /// one move, so the returned status is `Playing`.
    #[instrument(skip(self, step_delay))]
    pub fn solve_and_animate(
        &mut self,
        disk_count: i64,
        step_delay: impl Into<ReplayDelay>,
    ) -> HanoiResult<PlaybackStatus> {
        let height = self.config.check_disk_count(disk_count)?;
        if height > self.config.max_animated_disks {
            warn!(height, max = self.config.max_animated_disks, "tower too tall to animate");
            return Err(HanoiError::invalid_configuration(format!(
                "cannot animate {height} disks, the limit is {}",
                self.config.max_animated_disks
            )));
        }

        let auxiliary = PegId::third(PegId::Left, GOAL_PEG).ok_or_else(|| {
            HanoiError::invalid_configuration("goal peg must differ from the starting peg")
        })?;

        self.create_puzzle(i64::from(height))?;
        let records = solve(&self.state, i64::from(height), PegId::Left, GOAL_PEG, auxiliary)?;

        let delay = step_delay.into();
        self.config.step_delay = delay;

        let steps = records.len();
        let status = self.player.start(records, delay, &mut self.scheduler);
        self.events.push(PuzzleEvent::PlaybackStarted { steps });
        info!(steps, "solution playback started");
        Ok(status)
    }

    /// `solve_and_animate` with the configured disk count and delay.
    pub fn solve_with_config(&mut self) -> HanoiResult<PlaybackStatus> {
        let PuzzleConfig {
            disk_count,
            step_delay,
            ..
        } = self.config;
        self.solve_and_animate(i64::from(disk_count), step_delay)
    }

    /// Deliver a fired playback tick.
    ///
    /// Restores the board from the next record and bumps the move counter.
    /// Returns `false` for stale ticks, which change nothing.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        match self.player.tick(token, &mut self.scheduler) {
            TickOutcome::Ignored => false,
            TickOutcome::Applied { record, remaining } => {
                self.state.restore(&record.pegs);
                self.move_count += 1;
                self.events.push(PuzzleEvent::PlaybackStep {
                    step: record.step,
                    remaining,
                });
                if remaining == 0 {
                    self.finish_playback();
                }
                true
            }
        }
    }

    // === Observers ===

    /// Current board.
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Current contents of one peg.
    #[must_use]
    pub fn peg(&self, peg: PegId) -> &Peg {
        self.state.peg(peg)
    }

    /// Moves made since the puzzle was created, manual or replayed.
    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Result of the most recent win check.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub fn playback_status(&self) -> PlaybackStatus {
        self.player.status()
    }

    /// Playback records not yet applied.
    #[must_use]
    pub fn remaining_steps(&self) -> usize {
        self.player.remaining()
    }

    /// Every move currently legal, for hints.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.state)
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Events emitted since the last drain.
    #[must_use]
    pub fn events(&self) -> &[PuzzleEvent] {
        &self.events
    }

    /// Take all pending events.
    pub fn drain_events(&mut self) -> Vec<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }

    // === Internals ===

    fn replace_puzzle(&mut self, state: PuzzleState) {
        self.player.abandon(&mut self.scheduler);
        self.config.disk_count = state.disk_count();
        self.state = state;
        self.move_count = 0;
        self.solved = false;
        self.events.push(PuzzleEvent::PuzzleCreated {
            disk_count: self.config.disk_count,
        });
        info!(disk_count = self.config.disk_count, "puzzle created");
    }

    fn finish_playback(&mut self) {
        self.events.push(PuzzleEvent::PlaybackFinished);
        self.check_win(GOAL_PEG);
    }

    /// Recompute the win flag against `peg`, announcing a transition to
    /// solved.
    fn check_win(&mut self, peg: PegId) -> bool {
        let solved = state_is_solved(&self.state, peg);
        if solved && !self.solved {
            info!(%peg, moves = self.move_count, "puzzle solved");
            self.events.push(PuzzleEvent::Solved {
                peg,
                moves: self.move_count,
            });
        }
        self.solved = solved;
        solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_MAX_DISKS;
    use std::time::Duration;

    fn engine(disks: u32) -> HanoiEngine {
        HanoiEngine::new(PuzzleConfig::default().with_disk_count(disks)).unwrap()
    }

    #[test]
    fn test_new_engine_starts_on_first_peg() {
        let e = engine(3);
        assert_eq!(e.state().ranks(), [vec![1, 2, 3], vec![], vec![]]);
        assert_eq!(e.move_count(), 0);
        assert!(!e.is_solved());
        assert_eq!(e.playback_status(), PlaybackStatus::Idle);
        assert_eq!(e.events(), &[PuzzleEvent::PuzzleCreated { disk_count: 3 }]);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = HanoiEngine::new(PuzzleConfig::default().with_disk_count(0));
        assert!(result.is_err());
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut e = engine(2);
        let before = e.state().clone();

        let outcome = e.attempt_move(PegId::Middle, PegId::Left);
        assert!(!outcome.is_legal());
        assert_eq!(e.state(), &before);
        assert_eq!(e.move_count(), 0);
    }

    #[test]
    fn test_win_flag_follows_destination_peg() {
        let mut e = engine(1);

        assert!(e.attempt_move(PegId::Left, PegId::Middle).solved());
        assert!(e.is_solved());

        // moving on again re-checks the new destination
        assert!(e.attempt_move(PegId::Middle, PegId::Right).solved());
        assert_eq!(e.move_count(), 2);

        let wins = e.events().iter().filter(|ev| ev.is_solved()).count();
        assert_eq!(wins, 1);
    }

    #[test]
    fn test_create_rejects_zero_and_keeps_state() {
        let mut e = engine(2);
        e.attempt_move(PegId::Left, PegId::Right);
        let before = e.state().clone();

        assert!(e.create_puzzle(0).is_err());
        assert!(e.create_from_input("lots").is_err());
        assert_eq!(e.state(), &before);
        assert_eq!(e.move_count(), 1);
        assert_eq!(e.config().disk_count, 2);
    }

    #[test]
    fn test_create_rejects_oversized_input() {
        let mut e = engine(3);
        e.attempt_move(PegId::Left, PegId::Middle);
        let before = e.state().clone();

        let err = e.create_from_input("3000000000").unwrap_err();
        assert!(matches!(err, HanoiError::InvalidConfiguration { .. }));
        assert!(e.create_puzzle(i64::from(DEFAULT_MAX_DISKS) + 1).is_err());
        assert!(e.solve_and_animate(4_000_000_000, ReplayDelay::unset()).is_err());

        assert_eq!(e.state(), &before);
        assert_eq!(e.move_count(), 1);
        assert_eq!(e.playback_status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_create_resets_counters() {
        let mut e = engine(2);
        e.attempt_move(PegId::Left, PegId::Right);

        e.create_from_input(" 4 ").unwrap();
        assert_eq!(e.state().ranks(), [vec![1, 2, 3, 4], vec![], vec![]]);
        assert_eq!(e.move_count(), 0);
        assert_eq!(e.config().disk_count, 4);
    }

    #[test]
    fn test_solve_and_animate_plays_to_goal() {
        let mut e = engine(5);
        let status = e.solve_and_animate(3, Duration::from_millis(100)).unwrap();
        assert_eq!(status, PlaybackStatus::Playing);
        assert_eq!(e.remaining_steps(), 7);

        assert_eq!(e.advance(Duration::from_millis(250)), 2);
        assert_eq!(e.move_count(), 2);
        assert_eq!(e.state().ranks(), [vec![3], vec![2], vec![1]]);

        assert_eq!(e.run_to_completion(), 5);
        assert_eq!(e.state().ranks(), [vec![], vec![], vec![1, 2, 3]]);
        assert_eq!(e.move_count(), 7);
        assert!(e.is_solved());
        assert_eq!(e.playback_status(), PlaybackStatus::Finished);
    }

    #[test]
    fn test_solve_rejects_tall_towers() {
        let mut e = HanoiEngine::new(
            PuzzleConfig::default()
                .with_disk_count(3)
                .with_max_animated_disks(4),
        )
        .unwrap();

        assert!(e.solve_and_animate(5, ReplayDelay::unset()).is_err());
        assert!(e.solve_and_animate(-1, ReplayDelay::unset()).is_err());
        assert_eq!(e.state().disk_count(), 3);
        assert_eq!(e.playback_status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_solve_with_config_uses_fallback_delay() {
        let mut e = HanoiEngine::new(
            PuzzleConfig::default()
                .with_disk_count(1)
                .with_step_delay(ReplayDelay::from_millis(-10)),
        )
        .unwrap();

        e.solve_with_config().unwrap();
        assert_eq!(e.advance(Duration::from_millis(999)), 0);
        assert_eq!(e.advance(Duration::from_millis(1)), 1);
        assert!(e.is_solved());
    }

    #[test]
    fn test_create_during_playback_discards_stale_ticks() {
        let mut e = engine(3);
        e.solve_and_animate(3, Duration::from_millis(10)).unwrap();
        e.advance(Duration::from_millis(10));
        let stale = e.player.pending_timer().unwrap();

        e.create_puzzle(2).unwrap();
        assert_eq!(e.playback_status(), PlaybackStatus::Idle);

        assert!(!e.on_timer(stale));
        assert_eq!(e.run_to_completion(), 0);
        assert_eq!(e.state().ranks(), [vec![1, 2], vec![], vec![]]);
        assert_eq!(e.move_count(), 0);
    }

    #[test]
    fn test_drain_events() {
        let mut e = engine(1);
        e.attempt_move(PegId::Left, PegId::Right);

        let events = e.drain_events();
        assert_eq!(events.len(), 3);
        assert!(events[2].is_solved());
        assert!(e.events().is_empty());
    }
}
