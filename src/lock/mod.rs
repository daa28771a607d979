//! Mutual exclusion with blocking, non-blocking and timed acquisition.
//!
//! Three variants share the [`Lock`] contract:
//!
//! - [`BlockingLock`]: an owned atomic locked bit, with a `Mutex` + `Condvar`
//!   pair to park blocked callers.
//! - [`TokenLock`]: a single-slot token holder. Locking takes the token,
//!   unlocking puts it back.
//! - [`TimedLock`]: a token holder whose try-lock can wait up to a deadline
//!   (see [`TryLockTimeout`]).
//!
//! None of the variants track an owner. Any caller may unlock a lock it did
//! not acquire; unlocking a lock that is not held fails with
//! [`LockError::DoubleUnlock`].

mod blocking;
mod error;
mod kind;
mod lock;
mod lock_manager;
mod timed;
mod token;

pub use blocking::BlockingLock;
pub use error::LockError;
pub use kind::{LockKind, ParseLockKindError};
pub use lock::{Lock, TryLockTimeout};
pub use lock_manager::LockManager;
pub use timed::TimedLock;
pub use token::TokenLock;
