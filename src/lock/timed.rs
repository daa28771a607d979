use std::time::Duration;

use super::token::TokenSlot;
use super::{Lock, LockError, LockKind, TryLockTimeout};

/// Token-holder lock whose try-lock can wait for a bounded time.
///
/// Behaves exactly like [`TokenLock`](super::TokenLock) and additionally
/// implements [`TryLockTimeout`]. Waiting is a `Condvar` timed wait, so no
/// timer outlives a successful acquisition.
pub struct TimedLock {
    slot: TokenSlot,
}

impl TimedLock {
    pub fn new() -> Self {
        TimedLock {
            slot: TokenSlot::new(),
        }
    }
}

impl Default for TimedLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Lock for TimedLock {
    fn lock(&self) {
        self.slot.take();
    }

    fn try_lock(&self) -> bool {
        self.slot.try_take()
    }

    fn unlock(&self) -> Result<(), LockError> {
        if self.slot.put() {
            Ok(())
        } else {
            Err(LockError::DoubleUnlock(LockKind::Timed))
        }
    }

    fn is_locked(&self) -> bool {
        self.slot.is_empty()
    }

    fn kind(&self) -> LockKind {
        LockKind::Timed
    }
}

impl TryLockTimeout for TimedLock {
    fn try_lock_for(&self, timeout: Duration) -> bool {
        if timeout.is_zero() {
            return self.slot.try_take();
        }
        self.slot.take_timeout(timeout)
    }
}
