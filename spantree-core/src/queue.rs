//! Min-priority queue driving the Prim frontier.
//!
//! Entries order by ascending priority, then ascending label, so equal-weight
//! frontier candidates dequeue deterministically. Relaxation never removes
//! superseded entries; the traversal skips them once their vertex is visited.

use std::{cmp::Ordering, collections::BinaryHeap};

use thiserror::Error;

/// Error raised by [`MinPriorityQueue::dequeue`] on an empty queue.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("dequeue called on an empty queue")]
pub(crate) struct EmptyQueue;

/// A queued (label, priority) pair.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct QueueEntry {
    label: String,
    priority: f64,
}

impl QueueEntry {
    pub(crate) const fn new(label: String, priority: f64) -> Self {
        Self { label, priority }
    }

    #[rustfmt::skip]
    pub(crate) fn label(&self) -> &str { &self.label }

    #[rustfmt::skip]
    pub(crate) const fn priority(&self) -> f64 { self.priority }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap surfaces its maximum, so the comparison is reversed to
        // make the lowest (priority, label) pair the maximum.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.label.cmp(&self.label))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary-heap-backed min-priority queue over vertex labels.
#[derive(Debug, Default)]
pub(crate) struct MinPriorityQueue {
    entries: BinaryHeap<QueueEntry>,
}

impl MinPriorityQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. Duplicate labels are permitted and coexist.
    pub(crate) fn enqueue(&mut self, label: String, priority: f64) {
        self.entries.push(QueueEntry::new(label, priority));
    }

    /// Removes and returns the minimum entry.
    ///
    /// # Errors
    /// Returns [`EmptyQueue`] when no entries remain; callers guard with
    /// [`Self::is_empty`] rather than relying on this failure.
    pub(crate) fn dequeue(&mut self) -> Result<QueueEntry, EmptyQueue> {
        self.entries.pop().ok_or(EmptyQueue)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
