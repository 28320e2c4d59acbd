//! Mobile slide-down menu state and its scroll lock

use crate::scroll_lock::{ScrollLock, ScrollLockGuard};
use crate::viewport::ViewportClass;
use std::sync::Arc;
use tracing::{debug, warn};

/// Open/closed state of the mobile panel.
///
/// While open on a mobile viewport the controller holds the shared scroll
/// lock. [`MobileMenuController::sync_scroll_lock`] must run after every
/// change to either input; dropping the controller releases the lock.
#[derive(Debug)]
pub struct MobileMenuController {
    open: bool,
    owner: u64,
    lock: Arc<ScrollLock>,
    guard: Option<ScrollLockGuard>,
}

impl MobileMenuController {
    pub fn new(owner: u64, lock: Arc<ScrollLock>) -> Self {
        Self {
            open: false,
            owner,
            lock,
            guard: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(owner = self.owner, open = self.open, "Mobile menu toggled");
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        if self.open != open {
            debug!(owner = self.owner, open, "Mobile menu set");
        }
        self.open = open;
    }

    /// Whether this controller currently holds the scroll lock
    pub fn holds_scroll_lock(&self) -> bool {
        self.guard.is_some()
    }

    /// Reconcile the scroll lock with `open && viewport == Mobile`.
    ///
    /// Contention with another holder is logged and retried on the next call.
    pub fn sync_scroll_lock(&mut self, viewport: ViewportClass) {
        let wanted = self.open && viewport.is_mobile();

        match (wanted, self.guard.is_some()) {
            (true, false) => match self.lock.try_acquire(self.owner) {
                Ok(guard) => self.guard = Some(guard),
                Err(e) => warn!(owner = self.owner, error = %e, "Scroll lock unavailable"),
            },
            (false, true) => self.guard = None,
            _ => {}
        }
    }

    /// Drop the scroll lock regardless of state (unmount path)
    pub fn release(&mut self) {
        self.guard = None;
    }
}
