//! Cancellable one-shot timers.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Something that can fire a callback after a delay.
///
/// The callback itself is delivered by the owner of the scheduler, which
/// hands fired handles back to whoever armed them.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

/// Scheduler backed by wall-clock deadlines, polled by an event loop.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    next_id: u64,
    pending: BTreeMap<TimerHandle, Instant>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest pending deadline, used to bound the input poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    /// Remove and return every handle whose deadline is at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerHandle> {
        let due: Vec<TimerHandle> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(handle, _)| *handle)
            .collect();

        for handle in &due {
            self.pending.remove(handle);
        }

        due
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.insert(handle, Instant::now() + delay);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.remove(&handle);
    }
}
