//! Tower construction and disk sizing.

use tracing::debug;

use crate::core::{
    validate_disk_count, BoardGeometry, Disk, HanoiResult, Peg, PuzzleRng, PuzzleState, Rank,
};

/// Sizes derived from the geometry for a given disk count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerSizing {
    /// Width of the bottom (largest) disk.
    pub base: f64,
    /// Width floor the interpolation steps towards.
    pub top: f64,
    /// Uniform height of every disk.
    pub disk_height: f64,
    /// Width lost per step up the tower.
    pub step: f64,
}

impl TowerSizing {
    /// Compute sizing for `disk_count` disks. `disk_count` must be positive.
    #[must_use]
    pub fn compute(disk_count: u32, geometry: &BoardGeometry) -> Self {
        let n = f64::from(disk_count);
        let base = (n * geometry.base_rate).min(geometry.base_width_max);
        let top = (n * geometry.top_rate).min(geometry.top_width_max);
        let disk_height = (geometry.column_height / n).min(geometry.height_rate_max);

        Self {
            base,
            top,
            disk_height,
            step: (base - top) / n,
        }
    }

    /// Width of the disk `index` positions above the bottom.
    #[must_use]
    pub fn width_at(&self, index: u32) -> f64 {
        self.base - f64::from(index) * self.step
    }
}

/// Build a tower of `disk_count` disks, top of the returned peg holding the
/// smallest disk (rank 1) and the bottom holding rank `disk_count`.
///
/// Colors are drawn from `rng`, bottom disk first.
pub fn initialize(
    disk_count: i64,
    geometry: &BoardGeometry,
    rng: &mut PuzzleRng,
) -> HanoiResult<Peg> {
    let n = validate_disk_count(disk_count)?;
    let sizing = TowerSizing::compute(n, geometry);

    // generated bottom-up, then reversed so the smallest disk sits at position 0
    let mut disks: Vec<Disk> = (0..n)
        .map(|i| {
            Disk::new(
                Rank::new(n - i),
                sizing.width_at(i),
                sizing.disk_height,
                rng.gen_color(),
            )
        })
        .collect();
    disks.reverse();

    debug!(disk_count = n, base = sizing.base, top = sizing.top, "tower initialized");
    Ok(Peg::from_top(disks))
}

/// Build a fresh puzzle with the whole tower on peg 1.
pub fn new_puzzle(
    disk_count: i64,
    geometry: &BoardGeometry,
    rng: &mut PuzzleRng,
) -> HanoiResult<PuzzleState> {
    Ok(PuzzleState::with_tower(initialize(disk_count, geometry, rng)?))
}
