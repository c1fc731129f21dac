//! Array-backed binary min-heap used to pick the two lightest nodes while
//! building the tree.
//!
//! Entries with equal weight come out in the order they went in, so the
//! shape of a tree built through the heap is reproducible.

use crate::error::{HuffmanError, Result};

/// Anything the heap can rank.
pub trait Weighted {
    fn weight(&self) -> u64;
}

impl Weighted for u64 {
    fn weight(&self) -> u64 {
        *self
    }
}

#[derive(Debug, Clone)]
struct Entry<T> {
    weight: u64,
    seq: u64,
    item: T,
}

impl<T> Entry<T> {
    // Lower weight first, then earlier insertion.
    fn precedes(&self, other: &Self) -> bool {
        (self.weight, self.seq) < (other.weight, other.seq)
    }
}

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }

    /// Checks `key(parent) <= key(child)` for every pair in the backing array.
    pub fn is_heap(&self) -> bool {
        (1..self.entries.len())
            .all(|i| self.entries[Self::parent(i)].weight <= self.entries[i].weight)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = Self::parent(i);
            if !self.entries[i].precedes(&self.entries[parent]) {
                break;
            }
            self.entries.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.entries.len();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;

            if l < n && self.entries[l].precedes(&self.entries[smallest]) {
                smallest = l;
            }
            if r < n && self.entries[r].precedes(&self.entries[smallest]) {
                smallest = r;
            }

            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T: Weighted> MinHeap<T> {
    pub fn insert(&mut self, item: T) {
        let entry = Entry {
            weight: item.weight(),
            seq: self.next_seq,
            item,
        };
        self.next_seq += 1;
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        self.sift_up(last);
    }

    pub fn extract_min(&mut self) -> Result<T> {
        if self.entries.is_empty() {
            return Err(HuffmanError::EmptyQueue);
        }
        // swap_remove moves the last entry into the root slot
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(min.item)
    }

    pub fn peek(&self) -> Result<&T> {
        self.entries
            .first()
            .map(|entry| &entry.item)
            .ok_or(HuffmanError::EmptyQueue)
    }

    /// Drains the heap in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.size());
        while let Ok(item) = self.extract_min() {
            sorted.push(item);
        }
        sorted
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Weighted> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Weighted> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}
