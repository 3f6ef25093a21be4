use std::time::{Duration, Instant};

/// Whether a packing pass is waiting for its settle delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TriggerState {
    /// No pass scheduled.
    Idle,
    /// At least one pass scheduled and not yet run.
    Pending,
}

/// Schedules packing passes a fixed settle delay after each resize.
///
/// With `coalesce` enabled a new resize cancels every pass still pending (trailing-edge
/// debounce); otherwise each resize keeps its own pass. Time is supplied by the caller,
/// which keeps the trigger usable from any event loop and deterministic under test.
#[derive(Clone, Debug)]
pub struct ReflowTrigger {
    delay: Duration,
    coalesce: bool,
    deadlines: Vec<Instant>,
}

impl ReflowTrigger {
    /// Idle trigger.
    pub fn new(delay: Duration, coalesce: bool) -> Self {
        Self {
            delay,
            coalesce,
            deadlines: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> TriggerState {
        if self.deadlines.is_empty() {
            TriggerState::Idle
        } else {
            TriggerState::Pending
        }
    }

    /// Settle delay between a resize and its pass.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a pass at `now + delay`. Returns how many pending passes it superseded.
    pub fn schedule(&mut self, now: Instant) -> usize {
        let superseded = if self.coalesce { self.cancel() } else { 0 };
        self.deadlines.push(now + self.delay);
        superseded
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().min().copied()
    }

    /// Number of passes still pending.
    pub fn pending_passes(&self) -> usize {
        self.deadlines.len()
    }

    /// Remove and count every pass whose deadline is at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> usize {
        let before = self.deadlines.len();
        self.deadlines.retain(|&d| d > now);
        before - self.deadlines.len()
    }

    /// Drop every pending pass. Returns how many were dropped.
    pub fn cancel(&mut self) -> usize {
        let n = self.deadlines.len();
        self.deadlines.clear();
        n
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/trigger.rs"]
mod tests;
