use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::Position;

/// An entry in the frontier: a position keyed by its estimated total cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    priority: u32,
    pos: Position,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on priority so BinaryHeap behaves as a min-heap. Ties
        // fall back to position to keep Ord consistent with Eq; any
        // tie-break order is correct for A*.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.pos.cmp(&other.pos))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue over grid positions.
///
/// There is no decrease-key operation: a position whose cost improves is
/// simply inserted again with the lower priority. The cheaper entry is
/// popped first, and stale duplicates are neutralized by the search's
/// cost-so-far check when they eventually surface.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Inserts a position with the given priority. Duplicates are allowed.
    pub fn put(&mut self, pos: Position, priority: u32) {
        self.heap.push(Entry { priority, pos });
    }

    /// Removes and returns the minimum-priority position, or `None` when
    /// the frontier is exhausted.
    pub fn get(&mut self) -> Option<Position> {
        self.heap.pop().map(|entry| entry.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut frontier = Frontier::new();
        frontier.put(Position::new(0, 0), 7);
        frontier.put(Position::new(1, 0), 2);
        frontier.put(Position::new(2, 0), 5);

        assert_eq!(frontier.get(), Some(Position::new(1, 0)));
        assert_eq!(frontier.get(), Some(Position::new(2, 0)));
        assert_eq!(frontier.get(), Some(Position::new(0, 0)));
        assert_eq!(frontier.get(), None);
    }

    #[test]
    fn duplicate_insertion_keeps_both_entries() {
        let mut frontier = Frontier::new();
        let pos = Position::new(3, 4);
        frontier.put(pos, 10);
        frontier.put(pos, 4);
        frontier.put(Position::new(0, 0), 6);

        // The cheaper duplicate comes out first, the stale one last.
        assert_eq!(frontier.get(), Some(pos));
        assert_eq!(frontier.get(), Some(Position::new(0, 0)));
        assert_eq!(frontier.get(), Some(pos));
        assert!(frontier.is_empty());
    }

    #[test]
    fn empty_frontier_reports_itself() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.get(), None);

        frontier.put(Position::new(1, 1), 0);
        assert!(!frontier.is_empty());
    }
}
