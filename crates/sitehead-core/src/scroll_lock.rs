//! Process-wide background scroll lock
//!
//! The document scroll is a single shared resource. Exactly one header
//! instance may hold the lock; holding it is represented by a
//! [`ScrollLockGuard`] that releases on drop.

use crate::error::CoreError;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace};

/// The thing whose scrolling gets suppressed (the page body in a browser)
pub trait ScrollSurface: Send + Sync {
    fn set_scroll_locked(&self, locked: bool);
}

/// Surface that only records state, for hosts with no real document
#[derive(Debug, Default)]
pub struct DetachedSurface;

impl ScrollSurface for DetachedSurface {
    fn set_scroll_locked(&self, locked: bool) {
        trace!(locked, "Detached scroll surface updated");
    }
}

/// Shared lock over a [`ScrollSurface`]
pub struct ScrollLock {
    surface: Box<dyn ScrollSurface>,
    holder: Mutex<Option<u64>>,
}

impl std::fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holder", &*self.holder.lock())
            .finish_non_exhaustive()
    }
}

impl ScrollLock {
    pub fn new(surface: impl ScrollSurface + 'static) -> Arc<Self> {
        Arc::new(Self {
            surface: Box::new(surface),
            holder: Mutex::new(None),
        })
    }

    /// Lock with no backing surface
    pub fn detached() -> Arc<Self> {
        Self::new(DetachedSurface)
    }

    /// Acquire the lock for `holder`.
    ///
    /// Fails when another holder owns it. The same holder acquiring twice is
    /// an error too, since the first guard is still alive.
    pub fn try_acquire(self: &Arc<Self>, holder: u64) -> Result<ScrollLockGuard, CoreError> {
        let mut current = self.holder.lock();
        if let Some(existing) = *current {
            return Err(CoreError::ScrollLockHeld { holder: existing });
        }
        *current = Some(holder);
        self.surface.set_scroll_locked(true);
        debug!(holder, "Scroll lock acquired");

        Ok(ScrollLockGuard {
            lock: Arc::clone(self),
            holder,
        })
    }

    pub fn is_locked(&self) -> bool {
        self.holder.lock().is_some()
    }

    pub fn holder(&self) -> Option<u64> {
        *self.holder.lock()
    }

    fn release(&self, holder: u64) {
        let mut current = self.holder.lock();
        if *current == Some(holder) {
            *current = None;
            self.surface.set_scroll_locked(false);
            debug!(holder, "Scroll lock released");
        }
    }
}

/// Proof of holding the scroll lock; releases it when dropped
#[derive(Debug)]
pub struct ScrollLockGuard {
    lock: Arc<ScrollLock>,
    holder: u64,
}

impl ScrollLockGuard {
    pub fn holder(&self) -> u64 {
        self.holder
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release(self.holder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct Recording {
        locked: AtomicBool,
        writes: AtomicUsize,
    }

    impl ScrollSurface for Arc<Recording> {
        fn set_scroll_locked(&self, locked: bool) {
            self.locked.store(locked, Ordering::SeqCst);
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let surface = Arc::new(Recording::default());
        let lock = ScrollLock::new(Arc::clone(&surface));

        let guard = lock.try_acquire(1).unwrap();
        assert!(surface.locked.load(Ordering::SeqCst));
        assert_eq!(lock.holder(), Some(1));

        drop(guard);
        assert!(!surface.locked.load(Ordering::SeqCst));
        assert!(!lock.is_locked());
        assert_eq!(surface.writes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_second_holder_rejected() {
        let lock = ScrollLock::detached();
        let _guard = lock.try_acquire(1).unwrap();

        let err = lock.try_acquire(2).unwrap_err();
        assert!(matches!(err, CoreError::ScrollLockHeld { holder: 1 }));
        assert_eq!(lock.holder(), Some(1));
    }
}
