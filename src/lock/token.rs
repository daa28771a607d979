use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::{Lock, LockError, LockKind};

/// The single token a [`TokenSlot`] can hold.
#[derive(Debug)]
struct Token;

/// Capacity-one token holder backed by `Mutex<Option<Token>>` + `Condvar`.
///
/// A full slot means unlocked, an empty slot means locked. Shared by
/// [`TokenLock`] and [`TimedLock`](super::TimedLock).
pub(super) struct TokenSlot {
    slot: Mutex<Option<Token>>,
    wake: Condvar,
}

impl TokenSlot {
    pub(super) fn new() -> Self {
        TokenSlot {
            slot: Mutex::new(Some(Token)),
            wake: Condvar::new(),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<Token>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Take the token, blocking until one is available.
    pub(super) fn take(&self) {
        let mut slot = self.slot();
        while slot.take().is_none() {
            slot = self.wake.wait(slot).unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Take the token if one is available right now.
    pub(super) fn try_take(&self) -> bool {
        self.slot().take().is_some()
    }

    /// Take the token, waiting at most `timeout` for one to be returned.
    ///
    /// The outcome is read from the slot once, under the mutex, after the
    /// wait ends: a token present at that point is taken even if the timeout
    /// elapsed at the same moment.
    pub(super) fn take_timeout(&self, timeout: Duration) -> bool {
        let (mut slot, _) = self
            .wake
            .wait_timeout_while(self.slot(), timeout, |slot| slot.is_none())
            .unwrap_or_else(PoisonError::into_inner);
        slot.take().is_some()
    }

    /// Return the token. Returns `false`, leaving the slot unchanged, when
    /// the slot already holds one.
    pub(super) fn put(&self) -> bool {
        let mut slot = self.slot();
        if slot.is_some() {
            return false;
        }
        *slot = Some(Token);
        self.wake.notify_one();
        true
    }

    pub(super) fn is_empty(&self) -> bool {
        self.slot().is_none()
    }
}

/// Lock represented as a single-slot token holder.
///
/// Starts holding its one token. `lock` takes it (blocking), `try_lock` takes
/// it only if present, and `unlock` puts it back. Returning a token to a full
/// slot is reported as [`LockError::DoubleUnlock`] instead of being queued.
pub struct TokenLock {
    slot: TokenSlot,
}

impl TokenLock {
    pub fn new() -> Self {
        TokenLock {
            slot: TokenSlot::new(),
        }
    }
}

impl Default for TokenLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Lock for TokenLock {
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
            Err(LockError::DoubleUnlock(LockKind::Token))
        }
    }

    fn is_locked(&self) -> bool {
        self.slot.is_empty()
    }

    fn kind(&self) -> LockKind {
        LockKind::Token
    }
}
