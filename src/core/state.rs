//! Puzzle state: the contents of all three pegs at one instant.
//!
//! The total number of disks across the pegs never changes for the
//! lifetime of one puzzle. `PuzzleState` itself performs no legality
//! checks; the rules module decides what may be moved.

use serde::{Deserialize, Serialize};

use super::disk::Disk;
use super::peg::{Peg, PegId, Pegs};

/// The triple of peg contents plus the puzzle's disk count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleState {
    pegs: Pegs<Peg>,
    disk_count: u32,
}

impl PuzzleState {
    /// Create a state with `tower` on peg 1 and the other pegs empty.
    #[must_use]
    pub fn with_tower(tower: Peg) -> Self {
        let disk_count = tower.len() as u32;
        Self {
            pegs: Pegs::from_array([tower, Peg::new(), Peg::new()]),
            disk_count,
        }
    }

    /// Create a state from explicit peg contents.
    #[must_use]
    pub fn from_pegs(pegs: Pegs<Peg>) -> Self {
        let disk_count = pegs.iter().map(|(_, p)| p.len() as u32).sum();
        Self { pegs, disk_count }
    }

    /// Total disks in this puzzle.
    #[must_use]
    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    #[must_use]
    pub fn peg(&self, peg: PegId) -> &Peg {
        &self.pegs[peg]
    }

    /// All three pegs.
    #[must_use]
    pub fn pegs(&self) -> &Pegs<Peg> {
        &self.pegs
    }

    /// Replace all three pegs verbatim, as a playback step does.
    pub fn restore(&mut self, pegs: &Pegs<Peg>) {
        self.pegs = pegs.clone();
    }

    /// Move the top disk of `from` onto `to` without checking legality.
    ///
    /// Returns the moved disk, or `None` if `from` is empty or equals `to`.
    pub fn transfer(&mut self, from: PegId, to: PegId) -> Option<Disk> {
        let (source, destination) = self.pegs.pair_mut(from, to)?;
        let disk = source.pop_top()?;
        destination.push_top(disk);
        Some(disk)
    }

    /// Disks currently on the board. Equals `disk_count` for any state
    /// reached through legal moves.
    #[must_use]
    pub fn disks_on_board(&self) -> usize {
        self.pegs.iter().map(|(_, p)| p.len()).sum()
    }

    /// True when every peg is strictly increasing from top to bottom.
    #[must_use]
    pub fn is_well_ordered(&self) -> bool {
        self.pegs.iter().all(|(_, p)| p.is_well_ordered())
    }

    /// Ranks per peg, top first. Convenient for assertions and logging.
    #[must_use]
    pub fn ranks(&self) -> [Vec<u32>; 3] {
        self.pegs.map(Peg::ranks).into_array()
    }

    /// Render the board as ASCII, top row first.
    ///
    /// ```text
    ///  1   .   .
    ///  2   .   .
    /// ---------
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let height = self.pegs.iter().map(|(_, p)| p.len()).max().unwrap_or(0);
        let width = self.disk_count.to_string().len().max(1);
        let mut out = String::new();

        for row in 0..height {
            let cells: Vec<String> = PegId::ALL
                .iter()
                .map(|&id| {
                    let peg = &self.pegs[id];
                    // pegs are bottom-aligned
                    let offset = height - peg.len();
                    if row >= offset {
                        let rank = peg.get(row - offset).map_or(0, |d| d.rank().raw());
                        format!("{:>width$}", rank)
                    } else {
                        format!("{:>width$}", ".")
                    }
                })
                .collect();
            out.push_str(&cells.join("   "));
            out.push('\n');
        }
        out.push_str(&"-".repeat(width * 3 + 6));
        out.push('\n');
        out
    }
}
