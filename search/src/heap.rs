//! Indexed binary min-heap over stable arena slots.
//!
//! Entries live in heap order in `entries`; `positions` maps an arena slot to
//! the entry's current heap position. A [`Handle`] names a slot plus the
//! sequence number of the entry that was pushed into it, so a handle goes
//! stale as soon as its entry is popped (or the heap is cleared), even if
//! the slot is later reused.
//!
//! Ordering is `(key, tie(item, item), seq)`; `seq` is unique, so the order
//! is total and pops are deterministic.

use std::cmp::Ordering;

/// Stable reference to a live heap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    slot: usize,
    seq: u64,
}

struct Entry<T, C> {
    item: T,
    key: C,
    seq: u64,
    slot: usize,
}

pub(crate) struct IndexedHeap<T, C> {
    entries: Vec<Entry<T, C>>,
    positions: Vec<Option<usize>>,
    free: Vec<usize>,
    next_seq: u64,
    high_water: usize,
}

impl<T, C: Ord + Copy> IndexedHeap<T, C> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: Vec::new(),
            free: Vec::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn high_water(&self) -> usize {
        self.high_water
    }

    /// Drop every entry. Outstanding handles become stale.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
        self.free.clear();
    }

    pub(crate) fn push<F>(&mut self, item: T, key: C, tie: &F) -> Handle
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let slot = if let Some(slot) = self.free.pop() {
            slot
        } else {
            self.positions.push(None);
            self.positions.len() - 1
        };
        let seq = self.next_seq;
        self.next_seq += 1;

        let pos = self.entries.len();
        self.entries.push(Entry {
            item,
            key,
            seq,
            slot,
        });
        self.positions[slot] = Some(pos);
        self.sift_up(pos, tie);

        self.high_water = self.high_water.max(self.entries.len());
        Handle { slot, seq }
    }

    /// Remove and return the minimum entry with its key.
    pub(crate) fn pop<F>(&mut self, tie: &F) -> Option<(T, C)>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let entry = self.entries.pop()?;
        self.positions[entry.slot] = None;
        self.free.push(entry.slot);
        if !self.entries.is_empty() {
            self.sift_down(0, tie);
        }
        Some((entry.item, entry.key))
    }

    pub(crate) fn peek(&self) -> Option<(&T, C)> {
        self.entries.first().map(|e| (&e.item, e.key))
    }

    pub(crate) fn get(&self, handle: Handle) -> Option<&T> {
        self.position(handle).map(|pos| &self.entries[pos].item)
    }

    pub(crate) fn key(&self, handle: Handle) -> Option<C> {
        self.position(handle).map(|pos| self.entries[pos].key)
    }

    /// Swap in a new item and key for a live entry, restoring heap order.
    ///
    /// The entry keeps its sequence number, so the handle stays valid and the
    /// replacement keeps the original generation slot for tie-breaking.
    /// Returns the previous item, or `None` if the handle is stale.
    pub(crate) fn replace<F>(&mut self, handle: Handle, item: T, key: C, tie: &F) -> Option<T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let pos = self.position(handle)?;
        let entry = &mut self.entries[pos];
        let previous = std::mem::replace(&mut entry.item, item);
        entry.key = key;
        let pos = self.sift_up(pos, tie);
        self.sift_down(pos, tie);
        Some(previous)
    }

    /// Items in heap (not pop) order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&T, C)> {
        self.entries.iter().map(|e| (&e.item, e.key))
    }

    /// Position table and heap property both hold.
    pub(crate) fn is_consistent<F>(&self, tie: &F) -> bool
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let positions_ok = self.entries.iter().enumerate().all(|(pos, e)| {
            self.positions.get(e.slot).copied().flatten() == Some(pos)
        });
        let live = self.positions.iter().filter(|p| p.is_some()).count();
        let heap_ok = (1..self.entries.len()).all(|pos| !self.less(pos, (pos - 1) / 2, tie));
        positions_ok && live == self.entries.len() && heap_ok
    }

    fn position(&self, handle: Handle) -> Option<usize> {
        let pos = (*self.positions.get(handle.slot)?)?;
        let entry = self.entries.get(pos)?;
        (entry.seq == handle.seq).then_some(pos)
    }

    fn less<F>(&self, i: usize, j: usize, tie: &F) -> bool
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let (a, b) = (&self.entries[i], &self.entries[j]);
        a.key
            .cmp(&b.key)
            .then_with(|| tie(&a.item, &b.item))
            .then(a.seq.cmp(&b.seq))
            == Ordering::Less
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.positions[self.entries[i].slot] = Some(i);
        self.positions[self.entries[j].slot] = Some(j);
    }

    fn sift_up<F>(&mut self, mut pos: usize, tie: &F) -> usize
    where
        F: Fn(&T, &T) -> Ordering,
    {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent, tie) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down<F>(&mut self, mut pos: usize, tie: &F)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let best = if right < len && self.less(right, left, tie) {
                right
            } else {
                left
            };
            if !self.less(best, pos, tie) {
                break;
            }
            self.swap(pos, best);
            pos = best;
        }
    }
}
