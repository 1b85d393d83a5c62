//! Deferred action scheduling.
//!
//! Every delayed effect on the page (heart spawns, bursts, fades, timer
//! commits) is an entry in one [`Timeline`]. The host advances it with a
//! monotonic clock and dispatches whatever is due; tests do the same with a
//! hand-driven clock, which keeps sequencing fully deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<A> {
    at_ms: f64,
    seq: u64,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    // Reversed so the max-heap pops the earliest entry; ties keep insertion order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .at_ms
            .total_cmp(&self.at_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Time-ordered queue of `(at_ms, action)` pairs.
pub struct Timeline<A> {
    heap: BinaryHeap<Entry<A>>,
    next_seq: u64,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `action` at the absolute time `at_ms`.
    pub fn schedule(&mut self, at_ms: f64, action: impl Into<A>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            at_ms,
            seq,
            action: action.into(),
        });
    }

    #[inline]
    pub fn schedule_after(&mut self, now_ms: f64, delay_ms: f64, action: impl Into<A>) {
        self.schedule(now_ms + delay_ms, action);
    }

    /// Pop the earliest action due at or before `now_ms`, with its scheduled time.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(f64, A)> {
        if self.heap.peek().is_some_and(|e| e.at_ms <= now_ms) {
            self.heap.pop().map(|e| (e.at_ms, e.action))
        } else {
            None
        }
    }

    /// Scheduled time of the earliest pending action.
    pub fn next_due(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.at_ms)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
