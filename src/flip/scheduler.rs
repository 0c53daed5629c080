use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

/// Handle returned by [`TimerScheduler::schedule`], used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// The two timed events of a page turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Swap the turning leaf from its front face to its back face.
    FaceSwap,
    /// Commit the target spread and return to idle.
    Complete,
}

/// A timer that has come due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FiredTimer {
    /// Handle the timer was registered under.
    pub id: TimerId,
    /// What the timer stands for.
    pub kind: TimerKind,
    /// Clock value the timer was due at.
    pub due_ms: u64,
}

/// Deterministic delayed-event queue driven by a host clock.
///
/// Determinism rule: timers fire in `due_ms` order; equal deadlines fire in registration
/// order. Cancelled timers are dropped lazily when they reach the head of the queue.
#[derive(Debug, Default)]
pub struct TimerScheduler {
    queue: BinaryHeap<Reverse<(u64, u64, TimerKind)>>,
    cancelled: BTreeSet<u64>,
    next_seq: u64,
}

impl TimerScheduler {
    /// Empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `kind` to fire at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, kind: TimerKind) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse((due_ms, seq, kind)));
        TimerId(seq)
    }

    /// Cancel one timer. Cancelling an already-fired or unknown timer is a no-op.
    pub fn cancel(&mut self, id: TimerId) {
        if self.queue.iter().any(|Reverse((_, seq, _))| *seq == id.0) {
            self.cancelled.insert(id.0);
        }
    }

    /// Cancel every pending timer.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.cancelled.clear();
    }

    /// Number of live (not cancelled) timers.
    pub fn pending(&self) -> usize {
        self.queue.len() - self.cancelled.len()
    }

    /// `true` when no live timers remain.
    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }

    /// Earliest live deadline.
    pub fn next_due(&self) -> Option<u64> {
        self.queue
            .iter()
            .filter(|Reverse((_, seq, _))| !self.cancelled.contains(seq))
            .map(|Reverse((due, _, _))| *due)
            .min()
    }

    /// Pop the earliest live timer if it is due at `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<FiredTimer> {
        self.drop_cancelled_head();
        let Reverse((due_ms, seq, kind)) = *self.queue.peek()?;
        if due_ms > now_ms {
            return None;
        }
        self.queue.pop();
        Some(FiredTimer {
            id: TimerId(seq),
            kind,
            due_ms,
        })
    }

    fn drop_cancelled_head(&mut self) {
        while let Some(Reverse((_, seq, _))) = self.queue.peek() {
            if !self.cancelled.remove(seq) {
                break;
            }
            self.queue.pop();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flip/scheduler.rs"]
mod tests;
