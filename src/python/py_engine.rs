//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::time::Duration;

use crate::core::{HanoiError, MoveOutcome, PegId, PuzzleConfig, ReplayDelay};
use crate::engine::HanoiEngine;
use crate::playback::PlaybackStatus;
use crate::solver;

fn to_py_err(err: HanoiError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

fn peg_from_number(number: u8) -> PyResult<PegId> {
    PegId::from_number(number)
        .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("no peg numbered {number}")))
}

/// Number of moves in the optimal solution for `disk_count` disks.
#[pyfunction]
pub fn minimal_move_count(disk_count: u32) -> u128 {
    solver::minimal_move_count(disk_count)
}

/// Python wrapper for HanoiEngine.
///
/// Pegs are numbered 1 to 3. Playback runs on a virtual clock advanced with
/// `advance`.
#[pyclass(name = "Hanoi")]
pub struct PyHanoi {
    engine: HanoiEngine,
}

#[pymethods]
impl PyHanoi {
    /// Create a new puzzle.
    ///
    /// # Arguments
    /// - disk_count: Disks stacked on peg 1
    /// - step_delay_ms: Playback delay; non-positive or None uses 1000 ms
    /// - seed: Seed for disk colors
    #[new]
    #[pyo3(signature = (disk_count = 8, step_delay_ms = Some(300), seed = 42))]
    fn new(disk_count: u32, step_delay_ms: Option<i64>, seed: u64) -> PyResult<Self> {
        let delay = step_delay_ms.map_or_else(ReplayDelay::unset, ReplayDelay::from_millis);
        let config = PuzzleConfig::default()
            .with_disk_count(disk_count)
            .with_step_delay(delay)
            .with_color_seed(seed);
        let engine = HanoiEngine::new(config).map_err(to_py_err)?;
        Ok(Self { engine })
    }

    /// Start a fresh game.
    fn create_puzzle(&mut self, disk_count: i64) -> PyResult<()> {
        self.engine.create_puzzle(disk_count).map_err(to_py_err)?;
        Ok(())
    }

    /// Move the top disk of `from_peg` onto `to_peg`.
    ///
    /// Returns True if the move was legal.
    fn attempt_move(&mut self, from_peg: u8, to_peg: u8) -> PyResult<bool> {
        let from = peg_from_number(from_peg)?;
        let to = peg_from_number(to_peg)?;
        Ok(matches!(
            self.engine.attempt_move(from, to),
            MoveOutcome::Legal { .. }
        ))
    }

    /// Solve a fresh puzzle and start replaying it.
    #[pyo3(signature = (disk_count, step_delay_ms = None))]
    fn solve_and_animate(&mut self, disk_count: i64, step_delay_ms: Option<i64>) -> PyResult<String> {
        let delay = step_delay_ms.map_or_else(ReplayDelay::unset, ReplayDelay::from_millis);
        let status = self
            .engine
            .solve_and_animate(disk_count, delay)
            .map_err(to_py_err)?;
        Ok(status_name(status).to_string())
    }

    /// Advance the playback clock. Returns the number of steps replayed.
    fn advance(&mut self, millis: u64) -> usize {
        self.engine.advance(Duration::from_millis(millis))
    }

    /// Replay every remaining step.
    fn run_to_completion(&mut self) -> usize {
        self.engine.run_to_completion()
    }

    /// Disk ranks on each peg, top first.
    fn pegs(&self) -> Vec<Vec<u32>> {
        self.engine.state().ranks().into_iter().collect()
    }

    /// Disk colors on each peg as `#rrggbb`, top first.
    fn colors(&self) -> Vec<Vec<String>> {
        PegId::ALL
            .iter()
            .map(|&peg| {
                self.engine
                    .peg(peg)
                    .iter()
                    .map(|disk| disk.color().to_string())
                    .collect()
            })
            .collect()
    }

    #[getter]
    fn move_count(&self) -> u64 {
        self.engine.move_count()
    }

    #[getter]
    fn is_solved(&self) -> bool {
        self.engine.is_solved()
    }

    #[getter]
    fn playback_status(&self) -> &'static str {
        status_name(self.engine.playback_status())
    }

    /// ASCII rendering of the board.
    fn render(&self) -> String {
        self.engine.state().render()
    }

    fn __repr__(&self) -> String {
        format!(
            "Hanoi(disks={}, moves={}, solved={})",
            self.engine.state().disk_count(),
            self.engine.move_count(),
            self.engine.is_solved()
        )
    }
}

fn status_name(status: PlaybackStatus) -> &'static str {
    match status {
        PlaybackStatus::Idle => "idle",
        PlaybackStatus::Playing => "playing",
        PlaybackStatus::Finished => "finished",
    }
}
