//! Recursive solver producing board snapshots.

use tracing::{debug, trace};

use super::check_request;
use crate::core::{HanoiResult, Move, MoveRecord, Peg, PegId, Pegs, PuzzleState};

/// Compute the optimal solution for moving the top `disk_count` disks of
/// `source` onto `destination`, using `auxiliary` as the spare.
///
/// Works on a copy of `start`; each single-disk move appends a
/// [`MoveRecord`] holding the post-move contents of all three pegs.
/// `disk_count = 0` yields an empty sequence.
///
/// # Errors
///
/// `InvalidConfiguration` for a negative `disk_count`, for pegs that are not
/// all distinct, and for a `disk_count` larger than the number of disks on
/// `source`. Moving more disks than the peg holds would leave the records
/// describing moves from empty pegs, so such requests are refused instead of
/// being solved.
///
/// ```
/// use hanoi_engine::core::{Disk, Peg, PegId, PuzzleState};
/// use hanoi_engine::solver::solve;
///
/// let start = PuzzleState::with_tower((1..=3).map(Disk::plain).collect::<Peg>());
/// let records = solve(&start, 3, PegId::Left, PegId::Right, PegId::Middle).unwrap();
///
/// assert_eq!(records.len(), 7);
/// assert_eq!(records[6].ranks(), [vec![], vec![], vec![1, 2, 3]]);
/// ```
pub fn solve(
    start: &PuzzleState,
    disk_count: i64,
    source: PegId,
    destination: PegId,
    auxiliary: PegId,
) -> HanoiResult<Vec<MoveRecord>> {
    let height = check_request(start, disk_count, source, destination, auxiliary)?;

    let mut recorder = Recorder {
        pegs: start.pegs().clone(),
        records: Vec::new(),
    };
    recorder.move_tower(height, source, destination, auxiliary);

    debug!(height, records = recorder.records.len(), "solved recursively");
    Ok(recorder.records)
}

/// Working pegs plus the records emitted so far.
struct Recorder {
    pegs: Pegs<Peg>,
    records: Vec<MoveRecord>,
}

impl Recorder {
    fn move_tower(&mut self, height: u32, source: PegId, destination: PegId, auxiliary: PegId) {
        if height == 0 {
            return;
        }
        self.move_tower(height - 1, source, auxiliary, destination);
        self.move_disk(Move::new(source, destination));
        self.move_tower(height - 1, auxiliary, destination, source);
    }

    fn move_disk(&mut self, movement: Move) {
        if let Some((from, to)) = self.pegs.pair_mut(movement.from, movement.to) {
            if let Some(disk) = from.pop_top() {
                to.push_top(disk);
            }
        }

        let step = self.records.len();
        trace!(step, %movement, "recorded move");
        // im::Vector clones share structure, so each snapshot is O(1)
        self.records
            .push(MoveRecord::new(step, movement, self.pegs.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Disk, HanoiError};

    fn start(n: u32) -> PuzzleState {
        PuzzleState::with_tower((1..=n).map(Disk::plain).collect::<Peg>())
    }

    #[test]
    fn test_zero_disks_is_empty() {
        let records = solve(&start(3), 0, PegId::Left, PegId::Right, PegId::Middle).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_negative_disks_rejected() {
        let err = solve(&start(3), -1, PegId::Left, PegId::Right, PegId::Middle).unwrap_err();
        assert!(matches!(err, HanoiError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_one_disk() {
        let records = solve(&start(1), 1, PegId::Left, PegId::Middle, PegId::Right).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].movement, Move::new(PegId::Left, PegId::Middle));
        assert_eq!(records[0].ranks(), [vec![], vec![1], vec![]]);
    }

    #[test]
    fn test_three_disks_canonical_sequence() {
        let records = solve(&start(3), 3, PegId::Left, PegId::Right, PegId::Middle).unwrap();
        let (l, m, r) = (PegId::Left, PegId::Middle, PegId::Right);

        let expected_moves = vec![
            Move::new(l, r),
            Move::new(l, m),
            Move::new(r, m),
            Move::new(l, r),
            Move::new(m, l),
            Move::new(m, r),
            Move::new(l, r),
        ];
        let actual: Vec<Move> = records.iter().map(|r| r.movement).collect();
        assert_eq!(actual, expected_moves);

        assert_eq!(records[0].ranks(), [vec![2, 3], vec![], vec![1]]);
        assert_eq!(records[3].ranks(), [vec![], vec![1, 2], vec![3]]);
        assert_eq!(records[6].ranks(), [vec![], vec![], vec![1, 2, 3]]);
    }

    #[test]
    fn test_steps_are_numbered() {
        let records = solve(&start(4), 4, PegId::Left, PegId::Right, PegId::Middle).unwrap();
        assert!(records.iter().enumerate().all(|(i, r)| r.step == i));
    }

    #[test]
    fn test_start_state_untouched() {
        let s = start(3);
        let before = s.clone();
        solve(&s, 3, PegId::Left, PegId::Right, PegId::Middle).unwrap();
        assert_eq!(s, before);
    }

    #[test]
    fn test_partial_tower() {
        // only the top two disks move
        let records = solve(&start(3), 2, PegId::Left, PegId::Middle, PegId::Right).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[2].ranks(), [vec![3], vec![1, 2], vec![]]);
    }

    #[test]
    fn test_every_snapshot_is_well_ordered() {
        let records = solve(&start(6), 6, PegId::Left, PegId::Right, PegId::Middle).unwrap();
        for record in &records {
            assert!(PuzzleState::from_pegs(record.pegs.clone()).is_well_ordered());
        }
    }
}
