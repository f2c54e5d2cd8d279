//! Min-priority frontier backed by [BinaryHeap]. Entries are never updated in place: a node whose
//! cost improves is simply pushed again and the search discards the outdated entry when it is
//! popped.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct FrontierEntry<T, K> {
    priority: K,
    sequence: u64,
    item: T,
}

impl<T, K: PartialEq> Eq for FrontierEntry<T, K> {}

impl<T, K: PartialEq> PartialEq for FrontierEntry<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.sequence == other.sequence
    }
}

impl<T, K: Ord> PartialOrd for FrontierEntry<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: Ord> Ord for FrontierEntry<T, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: smallest priority wins, then the earliest push
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Priority queue that hands out items in increasing priority, first-in-first-out among equal
/// priorities. The same item may be present any number of times.
pub struct Frontier<T, K> {
    heap: BinaryHeap<FrontierEntry<T, K>>,
    pushed: u64,
}

impl<T, K: Ord + Copy> Frontier<T, K> {
    pub fn new() -> Frontier<T, K> {
        Frontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: K) {
        self.heap.push(FrontierEntry {
            priority,
            sequence: self.pushed,
            item,
        });
        self.pushed += 1;
    }

    /// Removes the entry with the smallest priority, or returns [None] when empty.
    pub fn pop_min(&mut self) -> Option<(T, K)> {
        self.heap.pop().map(|e| (e.item, e.priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.pushed = 0;
    }
}

impl<T, K: Ord + Copy> Default for Frontier<T, K> {
    fn default() -> Self {
        Frontier::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, K: Ord + Copy>(frontier: &mut Frontier<T, K>) -> Vec<T> {
        std::iter::from_fn(|| frontier.pop_min().map(|(item, _)| item)).collect()
    }

    #[test]
    fn pops_in_increasing_priority() {
        let mut frontier = Frontier::new();
        for (item, priority) in [("d", 40), ("a", 10), ("c", 30), ("b", 20)] {
            frontier.push(item, priority);
        }
        assert_eq!(frontier.len(), 4);
        assert_eq!(drain(&mut frontier), vec!["a", "b", "c", "d"]);
        assert!(frontier.pop_min().is_none());
    }

    /// Equal priorities come out in insertion order.
    #[test]
    fn ties_are_fifo() {
        let mut frontier = Frontier::new();
        for item in 0..20 {
            frontier.push(item, 7);
        }
        frontier.push(100, 3);
        assert_eq!(frontier.pop_min(), Some((100, 3)));
        assert_eq!(drain(&mut frontier), (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut frontier = Frontier::new();
        frontier.push('n', 50);
        frontier.push('m', 30);
        frontier.push('n', 20);
        assert_eq!(frontier.pop_min(), Some(('n', 20)));
        assert_eq!(frontier.pop_min(), Some(('m', 30)));
        assert_eq!(frontier.pop_min(), Some(('n', 50)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn clear_resets() {
        let mut frontier = Frontier::default();
        frontier.push(1, 1);
        frontier.clear();
        assert!(frontier.is_empty());
        frontier.push(2, 1);
        assert_eq!(frontier.pop_min(), Some((2, 1)));
    }
}
