//! Simulation player state machine.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, warn};

use super::scheduler::{Scheduler, TimerToken};
use crate::core::{MoveRecord, ReplayDelay};

/// Playback lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Nothing loaded.
    #[default]
    Idle,
    /// Records remain and a tick is scheduled.
    Playing,
    /// The last record was applied, or the sequence was empty.
    Finished,
}

/// Result of delivering a tick to the player.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The token does not belong to the current playback. Nothing changed.
    Ignored,
    /// The next record is due. The caller restores the board from it.
    Applied {
        /// Snapshot to restore.
        record: MoveRecord,
        /// Records still pending after this one.
        remaining: usize,
    },
}

/// Replays a recorded solution one record per tick.
///
/// The player owns only the pending sequence and its timer; restoring the
/// board and counting moves is left to the caller, which receives each due
/// record from [`tick`](Self::tick).
#[derive(Clone, Debug, Default)]
pub struct SimulationPlayer {
    status: PlaybackStatus,
    pending: VecDeque<MoveRecord>,
    delay: Duration,
    timer: Option<TimerToken>,
}

impl SimulationPlayer {
    /// Create an idle player.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Records not yet applied.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Effective per-step delay of the current playback.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Token of the tick the player is waiting for, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.timer
    }

    /// Begin replaying `records`, replacing any playback in flight.
    ///
    /// An empty sequence finishes immediately; the caller runs win detection
    /// in that case just as it would after the last tick.
    pub fn start<S: Scheduler>(
        &mut self,
        records: Vec<MoveRecord>,
        delay: ReplayDelay,
        scheduler: &mut S,
    ) -> PlaybackStatus {
        self.abandon(scheduler);
        self.delay = delay.effective();

        if records.is_empty() {
            self.status = PlaybackStatus::Finished;
            debug!("playback started with no records");
            return self.status;
        }

        self.pending = records.into();
        self.timer = Some(scheduler.schedule(self.delay));
        self.status = PlaybackStatus::Playing;
        debug!(steps = self.pending.len(), delay = ?self.delay, "playback started");
        self.status
    }

    /// Deliver a fired tick.
    ///
    /// Ticks whose token is not the one the player is waiting for are stale
    /// (from an abandoned playback) and are ignored. Otherwise the front
    /// record is consumed and the next tick scheduled, or playback finishes.
    pub fn tick<S: Scheduler>(&mut self, token: TimerToken, scheduler: &mut S) -> TickOutcome {
        if self.status != PlaybackStatus::Playing || self.timer != Some(token) {
            warn!(%token, status = ?self.status, "ignoring stale playback tick");
            return TickOutcome::Ignored;
        }
        self.timer = None;

        let Some(record) = self.pending.pop_front() else {
            self.status = PlaybackStatus::Finished;
            return TickOutcome::Ignored;
        };

        let remaining = self.pending.len();
        if remaining > 0 {
            self.timer = Some(scheduler.schedule(self.delay));
        } else {
            self.status = PlaybackStatus::Finished;
        }

        debug!(step = record.step, remaining, "playback tick");
        TickOutcome::Applied { record, remaining }
    }

    /// Drop any playback in flight and return to `Idle`.
    pub fn abandon<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(token) = self.timer.take() {
            scheduler.cancel(token);
            debug!(%token, discarded = self.pending.len(), "playback abandoned");
        }
        self.pending.clear();
        self.status = PlaybackStatus::Idle;
    }
}
