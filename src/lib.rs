//! Try-lockable mutual exclusion and first-signal-wins aggregation.
//!
//! - [`lock`]: a lock family with blocking, non-blocking and timed
//!   acquisition ([`BlockingLock`], [`TokenLock`], [`TimedLock`]).
//! - [`signal`] (feature `signal`, on by default): one-shot [`Signal`]s and
//!   [`or`], which fires as soon as any of its sources does.
//!
//! The two halves are independent. [`Config`] lets a host pick the lock
//! variant and aggregation strategy from a config file.

mod config;
pub mod lock;
#[cfg(feature = "signal")]
pub mod signal;

pub use config::Config;
pub use lock::{
    BlockingLock, Lock, LockError, LockKind, LockManager, TimedLock, TokenLock, TryLockTimeout,
};
#[cfg(feature = "signal")]
pub use signal::{or, or_with, Signal, Strategy, Trigger};
