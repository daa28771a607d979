use std::time::Duration;

use super::{LockError, LockKind};

/// Trait for a single lock instance.
///
/// Implementations provide blocking lock, non-blocking try-lock, unlock and a
/// diagnostic snapshot of the current state.
pub trait Lock: Send + Sync {
    /// Acquire the lock, blocking until it becomes available.
    fn lock(&self);

    /// Try to acquire the lock without blocking.
    /// Returns `true` if acquired, `false` if already held.
    fn try_lock(&self) -> bool;

    /// Release the lock.
    ///
    /// Fails with [`LockError::DoubleUnlock`] if the lock is not held. The
    /// lock state is left untouched in that case.
    fn unlock(&self) -> Result<(), LockError>;

    /// Whether the lock is currently held.
    ///
    /// The answer may be stale by the time it is returned. Use it for
    /// diagnostics only, never to predict whether an acquisition succeeds.
    fn is_locked(&self) -> bool;

    /// The variant implementing this lock.
    fn kind(&self) -> LockKind;
}

/// Try-lock that waits up to a bounded duration.
pub trait TryLockTimeout: Lock {
    /// Try to acquire the lock, waiting at most `timeout`.
    ///
    /// Returns `true` as soon as the lock is acquired within `timeout` and
    /// `false` once `timeout` elapses first. A zero timeout behaves like
    /// [`Lock::try_lock`].
    fn try_lock_for(&self, timeout: Duration) -> bool;
}
