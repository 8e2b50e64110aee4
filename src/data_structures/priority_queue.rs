use std::fmt::Debug;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy)]
struct HeapEntry<K> {
    key: K,
    /// Insertion order, used to break key ties deterministically
    sequence: u64,
    item: usize,
}

/// An index-addressable binary min-heap with decrease-key
///
/// Items are dense vertex indices. The heap keeps its own position table, so
/// locating an item for `decrease_key` is O(1) and two heaps (forward and
/// backward frontier) can hold the same vertex at once.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K>
where
    K: Ord + Copy + Debug,
{
    heap: Vec<HeapEntry<K>>,
    /// Slot of each item in `heap`; `None` when the item is not queued
    positions: Vec<Option<usize>>,
    next_sequence: u64,
}

impl<K> IndexedMinHeap<K>
where
    K: Ord + Copy + Debug,
{
    /// Creates an empty queue for items in `0..items`
    pub fn with_capacity(items: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::new(),
            positions: vec![None; items],
            next_sequence: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the item is currently in the open set
    pub fn contains(&self, item: usize) -> bool {
        matches!(self.positions.get(item), Some(Some(_)))
    }

    /// Current key of a queued item
    pub fn key_of(&self, item: usize) -> Option<K> {
        let slot = (*self.positions.get(item)?)?;
        Some(self.heap[slot].key)
    }

    /// Returns the minimum item and its key without removing it
    pub fn peek(&self) -> Option<(usize, K)> {
        self.heap.first().map(|entry| (entry.item, entry.key))
    }

    /// Adds an item that is not yet queued
    pub fn insert(&mut self, item: usize, key: K) -> Result<()> {
        if self.contains(item) {
            return Err(Error::AlreadyQueued { vertex: item });
        }
        if item >= self.positions.len() {
            self.positions.resize(item + 1, None);
        }

        let slot = self.heap.len();
        self.heap.push(HeapEntry {
            key,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;
        self.positions[item] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the item with the smallest key
    pub fn extract_min(&mut self) -> Result<(usize, K)> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop().ok_or(Error::EmptyQueue)?;
        self.positions[entry.item] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.item, entry.key))
    }

    /// Lowers the key of a queued item; the new key must be strictly smaller
    pub fn decrease_key(&mut self, item: usize, key: K) -> Result<()> {
        let slot = self
            .positions
            .get(item)
            .copied()
            .flatten()
            .ok_or(Error::NotInQueue { vertex: item })?;
        if key >= self.heap[slot].key {
            return Err(Error::KeyNotDecreased { vertex: item });
        }

        self.heap[slot].key = key;
        self.sift_up(slot);
        Ok(())
    }

    /// Inserts the item, or lowers its key when it is already queued
    ///
    /// A key that does not improve on the queued one is ignored; relaxation can
    /// produce that when a shorter distance rounds to the same priority.
    pub fn push_or_decrease(&mut self, item: usize, key: K) -> Result<()> {
        match self.key_of(item) {
            None => self.insert(item, key),
            Some(current) if key < current => self.decrease_key(item, key),
            Some(_) => Ok(()),
        }
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            self.positions[entry.item] = None;
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.heap[a], &self.heap[b]);
        (a.key, a.sequence) < (b.key, b.sequence)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].item] = Some(a);
        self.positions[self.heap[b].item] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
