/*!
Minimum priority queue used by the tree builder.

A binary min-heap over a `Vec`, ordered by the key only. The builder keys nodes with [`NodeKey`],
which is a total order, so the sequence of `remove_min` results does not depend on the insertion
order.

[`NodeKey`]: crate::tree::NodeKey
*/

use common::HuffError;
use common::Result;

#[derive(Debug, Clone)]
pub struct MinHeap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: Ord, V> MinHeap<K, V> {
    pub fn new() -> Self {
        MinHeap { entries: vec![] }
    }

    /// The tree builder never needs more than the initial number of leaves.
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn peek_key(&self) -> Option<&K> {
        self.entries.first().map(|(key, _)| key)
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.push((key, value));
        self.sift_up(self.entries.len() - 1);
    }

    pub fn remove_min(&mut self) -> Result<(K, V)> {
        if self.entries.is_empty() {
            return Err(HuffError::EmptyQueue);
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop().ok_or(HuffError::EmptyQueue)?;
        self.sift_down(0);
        Ok(min)
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.entries[pos].0 >= self.entries[parent].0 {
                break;
            }
            self.entries.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.entries.swap(pos, smallest);
            pos = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid_heap(&self) -> bool {
        (1..self.entries.len()).all(|pos| self.entries[(pos - 1) / 2].0 <= self.entries[pos].0)
    }
}

impl<K: Ord, V> Default for MinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
