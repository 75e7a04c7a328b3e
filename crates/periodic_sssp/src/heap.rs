use crate::error::GraphError;

/// One pending relaxation: the accumulated weight of a walk, the vertex it
/// ends at, and how many hops it took (phase is `step % period`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct QueueEntry {
    pub weight: u64,
    pub vertex: u32,
    pub step: usize,
}

/// Array-backed binary min-heap keyed by accumulated weight.
///
/// Ties between equal weights are broken arbitrarily, so equal-cost optimal
/// paths are not returned in any guaranteed order. There is no decrease-key:
/// superseded entries stay in the heap and the search discards them against
/// the authoritative distance table when popped.
#[derive(Debug)]
pub(crate) struct MinHeap {
    entries: Vec<QueueEntry>,
}

impl MinHeap {
    /// `capacity` is a sizing hint (the live-entry bound is `V * period`);
    /// the heap still grows past it if more entries are pushed.
    pub fn with_capacity(capacity: usize) -> Result<Self, GraphError> {
        let mut entries = Vec::new();
        entries.try_reserve(capacity)?;
        Ok(Self { entries })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: QueueEntry) -> Result<(), GraphError> {
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<QueueEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        min
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].weight >= self.entries[parent].weight {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = idx * 2 + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.entries[right].weight < self.entries[left].weight {
                child = right;
            }
            // Swap only on strict greater-than; equal children stay put.
            if self.entries[idx].weight > self.entries[child].weight {
                self.entries.swap(idx, child);
                idx = child;
            } else {
                break;
            }
        }
    }
}
