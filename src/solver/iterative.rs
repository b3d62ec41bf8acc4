//! Explicit-stack solver.
//!
//! Emits the same moves, in the same order, as the recursive formulation
//! without using the call stack, so tower height is bounded only by memory
//! and patience.

use tracing::debug;

use super::{check_request, minimal_move_count};
use crate::core::{HanoiResult, Move, MoveRecord, PegId, PuzzleState};

/// Pending work on the explicit stack.
#[derive(Clone, Copy, Debug)]
enum Frame {
    /// Move a whole tower.
    Tower {
        height: u32,
        source: PegId,
        destination: PegId,
        auxiliary: PegId,
    },
    /// Move a single disk.
    Disk(Move),
}

/// Lazy iterator over the optimal move sequence.
///
/// The stack never holds more than `2 * height + 1` frames.
#[derive(Clone, Debug)]
pub struct MoveIter {
    stack: Vec<Frame>,
    remaining: u128,
}

impl MoveIter {
    fn new(height: u32, source: PegId, destination: PegId, auxiliary: PegId) -> Self {
        Self {
            stack: vec![Frame::Tower {
                height,
                source,
                destination,
                auxiliary,
            }],
            remaining: minimal_move_count(height),
        }
    }

    /// Moves not yet yielded. Saturated for towers of 128 disks or more.
    #[must_use]
    pub fn remaining(&self) -> u128 {
        self.remaining
    }
}

impl Iterator for MoveIter {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Disk(movement) => {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(movement);
                }
                Frame::Tower { height: 0, .. } => {}
                Frame::Tower {
                    height,
                    source,
                    destination,
                    auxiliary,
                } => {
                    // pushed in reverse so the first sub-tower is handled first
                    self.stack.push(Frame::Tower {
                        height: height - 1,
                        source: auxiliary,
                        destination,
                        auxiliary: source,
                    });
                    self.stack.push(Frame::Disk(Move::new(source, destination)));
                    self.stack.push(Frame::Tower {
                        height: height - 1,
                        source,
                        destination: auxiliary,
                        auxiliary: destination,
                    });
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Iterate the optimal moves for a tower of `height` disks.
///
/// Unlike [`solve`](super::solve) this needs no board; it yields bare moves.
///
/// ```
/// use hanoi_engine::core::PegId;
/// use hanoi_engine::solver::moves;
///
/// let first: Vec<_> = moves(40, PegId::Left, PegId::Right, PegId::Middle)
///     .take(3)
///     .collect();
/// assert_eq!(first.len(), 3);
/// ```
#[must_use]
pub fn moves(height: u32, source: PegId, destination: PegId, auxiliary: PegId) -> MoveIter {
    MoveIter::new(height, source, destination, auxiliary)
}

/// Same contract and output as [`solve`](super::solve), computed with an
/// explicit stack.
pub fn solve_iterative(
    start: &PuzzleState,
    disk_count: i64,
    source: PegId,
    destination: PegId,
    auxiliary: PegId,
) -> HanoiResult<Vec<MoveRecord>> {
    let height = check_request(start, disk_count, source, destination, auxiliary)?;
    let mut pegs = start.pegs().clone();
    let mut records = Vec::with_capacity(usize::try_from(minimal_move_count(height)).unwrap_or(0));

    for (step, movement) in moves(height, source, destination, auxiliary).enumerate() {
        if let Some((from, to)) = pegs.pair_mut(movement.from, movement.to) {
            if let Some(disk) = from.pop_top() {
                to.push_top(disk);
            }
        }
        records.push(MoveRecord::new(step, movement, pegs.clone()));
    }

    debug!(height, records = records.len(), "solved iteratively");
    Ok(records)
}
