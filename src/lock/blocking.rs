//! Blocking lock with a lock-free try-lock.
//!
//! A runtime mutex normally hides its locked bit, so a non-blocking
//! acquisition would have to compare-and-set the primitive's private state
//! word. That only works for as long as the primitive keeps the same layout.
//! `std::sync::Mutex` gives no such access, so [`BlockingLock`] owns the bit
//! itself: `try_lock` is a single compare-and-set on it, and the
//! `Mutex` + `Condvar` pair only parks callers of `lock` while the bit is
//! taken.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};

use super::{Lock, LockError, LockKind};

/// Blocking mutual exclusion over an owned atomic locked bit.
pub struct BlockingLock {
    locked: AtomicBool,
    parked: Mutex<()>,
    wake: Condvar,
}

impl BlockingLock {
    pub fn new() -> Self {
        BlockingLock {
            locked: AtomicBool::new(false),
            parked: Mutex::new(()),
            wake: Condvar::new(),
        }
    }
}

impl Default for BlockingLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Lock for BlockingLock {
    fn lock(&self) {
        if self.try_lock() {
            return;
        }
        // The bit is retried while `parked` is held, and `unlock` takes
        // `parked` before notifying, so a release can't slip in between the
        // failed attempt and the wait.
        let mut parked = self.parked.lock().unwrap_or_else(PoisonError::into_inner);
        while !self.try_lock() {
            parked = self
                .wake
                .wait(parked)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn try_lock(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    fn unlock(&self) -> Result<(), LockError> {
        if !self.locked.swap(false, Ordering::Release) {
            return Err(LockError::DoubleUnlock(LockKind::Blocking));
        }
        let _parked = self.parked.lock().unwrap_or_else(PoisonError::into_inner);
        self.wake.notify_one();
        Ok(())
    }

    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }

    fn kind(&self) -> LockKind {
        LockKind::Blocking
    }
}
