use thiserror::Error;

use super::LockKind;

/// Error type for lock operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LockError {
    /// `unlock` was called on a lock that is not held.
    #[error("unlock of unlocked {0} lock")]
    DoubleUnlock(LockKind),
}
