//! Debounced subnav dismissal
//!
//! The state machine never owns a clock. It asks a [`DismissScheduler`] to
//! deliver a [`DismissToken`] back after a delay, and keeps the returned
//! handle. Dropping the handle cancels the timer, so a machine that is torn
//! down can never receive a callback. Tokens are monotonic; a firing whose
//! token is not the live one is ignored.

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Identifies one armed dismiss timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DismissToken(pub(crate) u64);

impl DismissToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Something that can run a one-shot delayed callback.
///
/// Implementations route the token back to
/// `HeaderMachine::dismiss_elapsed` when the delay expires.
pub trait DismissScheduler {
    type Handle: DismissHandle;

    fn schedule(&mut self, delay: Duration, token: DismissToken) -> Self::Handle;
}

/// Cancels a scheduled dismissal. Cancelling an already fired timer is a no-op.
pub trait DismissHandle {
    fn cancel(&mut self);
}

/// The one live timer of a machine; cancels itself when replaced or dropped
#[derive(Debug)]
pub(crate) struct PendingDismiss<H: DismissHandle> {
    token: DismissToken,
    handle: H,
}

impl<H: DismissHandle> PendingDismiss<H> {
    pub(crate) fn new(token: DismissToken, handle: H) -> Self {
        Self { token, handle }
    }

    pub(crate) fn token(&self) -> DismissToken {
        self.token
    }
}

impl<H: DismissHandle> Drop for PendingDismiss<H> {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}

// ============================================================================
// Manual scheduler
// ============================================================================

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    entries: Vec<ManualEntry>,
}

#[derive(Debug)]
struct ManualEntry {
    id: u64,
    deadline: Duration,
    token: DismissToken,
}

/// Scheduler driven by an explicit virtual clock.
///
/// Cloning shares the clock, so a host can keep one clone to call
/// [`ManualScheduler::advance`] while the machine owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward and return the tokens that came due, in
    /// deadline order.
    pub fn advance(&self, by: Duration) -> Vec<DismissToken> {
        let mut clock = self.clock.lock();
        clock.now += by;
        let now = clock.now;

        let mut due: Vec<ManualEntry> = Vec::new();
        let mut remaining = Vec::with_capacity(clock.entries.len());
        for entry in clock.entries.drain(..) {
            if entry.deadline <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        clock.entries = remaining;

        due.sort_by_key(|e| (e.deadline, e.id));
        due.into_iter().map(|e| e.token).collect()
    }

    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Timers scheduled and not yet fired or cancelled
    pub fn pending(&self) -> usize {
        self.clock.lock().entries.len()
    }
}

impl DismissScheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&mut self, delay: Duration, token: DismissToken) -> ManualHandle {
        let mut clock = self.clock.lock();
        let id = clock.next_id;
        clock.next_id += 1;
        let deadline = clock.now + delay;
        clock.entries.push(ManualEntry {
            id,
            deadline,
            token,
        });

        ManualHandle {
            clock: Arc::clone(&self.clock),
            id,
        }
    }
}

#[derive(Debug)]
pub struct ManualHandle {
    clock: Arc<Mutex<ManualClock>>,
    id: u64,
}

impl DismissHandle for ManualHandle {
    fn cancel(&mut self) {
        let id = self.id;
        self.clock.lock().entries.retain(|e| e.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_fires_in_order() {
        let mut scheduler = ManualScheduler::new();
        let _late = scheduler.schedule(Duration::from_millis(200), DismissToken(2));
        let _early = scheduler.schedule(Duration::from_millis(100), DismissToken(1));

        assert!(scheduler.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(
            scheduler.advance(Duration::from_millis(150)),
            vec![DismissToken(1), DismissToken(2)]
        );
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_dropping_pending_cancels() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(Duration::from_millis(100), DismissToken(1));
        let pending = PendingDismiss::new(DismissToken(1), handle);
        assert_eq!(scheduler.pending(), 1);

        drop(pending);
        assert_eq!(scheduler.pending(), 0);
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }
}
