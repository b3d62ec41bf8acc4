//! Peg identification and per-peg storage.
//!
//! ## PegId
//!
//! The three fixed peg labels. The rendering layer calls them "peg 1",
//! "peg 2" and "peg 3"; the puzzle always starts on peg 1.
//!
//! ## Peg
//!
//! An ordered stack of disks with position 0 as the top. Backed by an
//! `im::Vector` so that snapshotting a whole board is O(1).
//!
//! ## Pegs
//!
//! Fixed three-slot storage indexed by `PegId`, the peg analogue of a
//! per-player map.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::disk::Disk;

/// One of the three pegs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PegId {
    /// Peg 1, where every new puzzle starts.
    Left,
    /// Peg 2.
    Middle,
    /// Peg 3, the default goal peg.
    Right,
}

impl PegId {
    /// All pegs in board order.
    pub const ALL: [PegId; 3] = [PegId::Left, PegId::Middle, PegId::Right];

    /// Zero-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PegId::Left => 0,
            PegId::Middle => 1,
            PegId::Right => 2,
        }
    }

    /// One-based peg number as shown to users.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Look up a peg by zero-based index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PegId::Left),
            1 => Some(PegId::Middle),
            2 => Some(PegId::Right),
            _ => None,
        }
    }

    /// Look up a peg by its one-based number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::from_index(i as usize))
    }

    /// The peg that is neither `a` nor `b`.
    ///
    /// Returns `None` when `a == b`.
    #[must_use]
    pub fn third(a: PegId, b: PegId) -> Option<PegId> {
        if a == b {
            return None;
        }
        Self::ALL.into_iter().find(|&p| p != a && p != b)
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "peg {}", self.number())
    }
}

/// An ordered stack of disks. Position 0 is the top.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Peg {
    disks: Vector<Disk>,
}

impl Peg {
    /// Create an empty peg.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a peg from disks listed top first.
    pub fn from_top(disks: impl IntoIterator<Item = Disk>) -> Self {
        Self {
            disks: disks.into_iter().collect(),
        }
    }

    /// Number of disks on the peg.
    #[must_use]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// The only accessible disk.
    #[must_use]
    pub fn top(&self) -> Option<&Disk> {
        self.disks.front()
    }

    /// Disk at `position` counted from the top.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Disk> {
        self.disks.get(position)
    }

    /// Place a disk on top. Does not check legality.
    pub fn push_top(&mut self, disk: Disk) {
        self.disks.push_front(disk);
    }

    /// Remove and return the top disk.
    pub fn pop_top(&mut self) -> Option<Disk> {
        self.disks.pop_front()
    }

    /// Iterate disks from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Disk> {
        self.disks.iter()
    }

    /// Raw ranks from top to bottom.
    #[must_use]
    pub fn ranks(&self) -> Vec<u32> {
        self.disks.iter().map(|d| d.rank().raw()).collect()
    }

    /// True when ranks strictly increase from top to bottom.
    #[must_use]
    pub fn is_well_ordered(&self) -> bool {
        self.disks
            .iter()
            .zip(self.disks.iter().skip(1))
            .all(|(upper, lower)| upper.fits_on(lower))
    }
}

impl FromIterator<Disk> for Peg {
    fn from_iter<I: IntoIterator<Item = Disk>>(iter: I) -> Self {
        Self::from_top(iter)
    }
}

/// Fixed storage with one slot per peg.
///
/// ```
/// use hanoi_engine::core::{PegId, Pegs};
///
/// let mut counts: Pegs<u32> = Pegs::with_value(0);
/// counts[PegId::Right] += 3;
///
/// assert_eq!(counts[PegId::Left], 0);
/// assert_eq!(counts[PegId::Right], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pegs<T> {
    slots: [T; 3],
}

impl<T> Pegs<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(PegId) -> T) -> Self {
        Self {
            slots: PegId::ALL.map(factory),
        }
    }

    /// Create from values in board order (peg 1, peg 2, peg 3).
    pub fn from_array(slots: [T; 3]) -> Self {
        Self { slots }
    }

    /// Create with every slot set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, peg: PegId) -> &T {
        &self.slots[peg.index()]
    }

    pub fn get_mut(&mut self, peg: PegId) -> &mut T {
        &mut self.slots[peg.index()]
    }

    /// Mutable access to two distinct slots at once.
    ///
    /// Returns `None` when `a == b`.
    pub fn pair_mut(&mut self, a: PegId, b: PegId) -> Option<(&mut T, &mut T)> {
        if a == b {
            return None;
        }
        let (i, j) = (a.index(), b.index());
        if i < j {
            let (head, tail) = self.slots.split_at_mut(j);
            Some((&mut head[i], &mut tail[0]))
        } else {
            let (head, tail) = self.slots.split_at_mut(i);
            Some((&mut tail[0], &mut head[j]))
        }
    }

    /// Iterate over (PegId, &T) pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (PegId, &T)> {
        PegId::ALL.into_iter().zip(self.slots.iter())
    }

    /// Map every slot to a new value.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Pegs<U> {
        Pegs {
            slots: [f(&self.slots[0]), f(&self.slots[1]), f(&self.slots[2])],
        }
    }

    /// Consume into the underlying array in board order.
    pub fn into_array(self) -> [T; 3] {
        self.slots
    }
}

impl<T> Index<PegId> for Pegs<T> {
    type Output = T;

    fn index(&self, peg: PegId) -> &Self::Output {
        self.get(peg)
    }
}

impl<T> IndexMut<PegId> for Pegs<T> {
    fn index_mut(&mut self, peg: PegId) -> &mut Self::Output {
        self.get_mut(peg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peg(ranks: &[u32]) -> Peg {
        ranks.iter().map(|&r| Disk::plain(r)).collect()
    }

    #[test]
    fn test_peg_id_numbering() {
        assert_eq!(PegId::Left.number(), 1);
        assert_eq!(PegId::Right.index(), 2);
        assert_eq!(PegId::from_number(2), Some(PegId::Middle));
        assert_eq!(PegId::from_number(0), None);
        assert_eq!(PegId::from_number(4), None);
        assert_eq!(format!("{}", PegId::Right), "peg 3");
    }

    #[test]
    fn test_third_peg() {
        assert_eq!(PegId::third(PegId::Left, PegId::Right), Some(PegId::Middle));
        assert_eq!(PegId::third(PegId::Right, PegId::Middle), Some(PegId::Left));
        assert_eq!(PegId::third(PegId::Left, PegId::Left), None);
    }

    #[test]
    fn test_push_and_pop_work_on_top() {
        let mut p = peg(&[2, 3]);
        p.push_top(Disk::plain(1));

        assert_eq!(p.ranks(), vec![1, 2, 3]);
        assert_eq!(p.top().map(|d| d.rank().raw()), Some(1));

        let popped = p.pop_top().unwrap();
        assert_eq!(popped.rank().raw(), 1);
        assert_eq!(p.ranks(), vec![2, 3]);
    }

    #[test]
    fn test_pop_empty() {
        let mut p = Peg::new();
        assert!(p.pop_top().is_none());
        assert!(p.top().is_none());
        assert!(p.is_empty());
    }

    #[test]
    fn test_well_ordered() {
        assert!(peg(&[]).is_well_ordered());
        assert!(peg(&[4]).is_well_ordered());
        assert!(peg(&[1, 2, 5]).is_well_ordered());
        assert!(!peg(&[2, 1]).is_well_ordered());
        assert!(!peg(&[1, 1]).is_well_ordered());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut p = peg(&[1, 2]);
        let snapshot = p.clone();
        p.pop_top();

        assert_eq!(snapshot.ranks(), vec![1, 2]);
        assert_eq!(p.ranks(), vec![2]);
    }

    #[test]
    fn test_pegs_pair_mut() {
        let mut pegs: Pegs<u32> = Pegs::from_array([1, 2, 3]);

        let (a, b) = pegs.pair_mut(PegId::Right, PegId::Left).unwrap();
        std::mem::swap(a, b);
        assert_eq!(pegs.into_array(), [3, 2, 1]);

        let mut pegs: Pegs<u32> = Pegs::with_value(0);
        assert!(pegs.pair_mut(PegId::Middle, PegId::Middle).is_none());
    }

    #[test]
    fn test_pegs_iter_and_map() {
        let pegs: Pegs<usize> = Pegs::new(|p| p.index() * 10);
        let pairs: Vec<_> = pegs.iter().collect();

        assert_eq!(pairs[0], (PegId::Left, &0));
        assert_eq!(pairs[2], (PegId::Right, &20));
        assert_eq!(pegs.map(|v| v + 1).into_array(), [1, 11, 21]);
    }

    #[test]
    fn test_peg_serialization() {
        let p = peg(&[1, 3]);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Peg = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
