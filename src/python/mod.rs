//! Python bindings for the hanoi-engine puzzle.
//!
//! # Quick Start
//!
//! ```python
//! import hanoi_engine as hanoi
//!
//! game = hanoi.Hanoi(disk_count=3)
//! game.attempt_move(1, 3)
//!
//! game.solve_and_animate(3, step_delay_ms=300)
//! game.advance(600)          # two steps replayed
//! game.run_to_completion()
//! assert game.is_solved
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// hanoi_engine: Tower of Hanoi puzzle with solver playback.
#[pymodule]
fn hanoi_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHanoi>()?;
    m.add_function(wrap_pyfunction!(minimal_move_count, m)?)?;
    Ok(())
}
