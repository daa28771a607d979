use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{BlockingLock, Lock, TimedLock, TokenLock};

/// The lock variants this crate provides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockKind {
    /// [`BlockingLock`]
    #[default]
    Blocking,
    /// [`TokenLock`]
    Token,
    /// [`TimedLock`]
    Timed,
}

impl LockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LockKind::Blocking => "blocking",
            LockKind::Token => "token",
            LockKind::Timed => "timed",
        }
    }

    /// Build a fresh, unlocked lock of this kind.
    pub fn new_lock(self) -> Arc<dyn Lock> {
        match self {
            LockKind::Blocking => Arc::new(BlockingLock::new()),
            LockKind::Token => Arc::new(TokenLock::new()),
            LockKind::Timed => Arc::new(TimedLock::new()),
        }
    }
}

impl fmt::Display for LockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`LockKind`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lock kind `{0}` (expected blocking, token or timed)")]
pub struct ParseLockKindError(String);

impl FromStr for LockKind {
    type Err = ParseLockKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blocking" => Ok(LockKind::Blocking),
            "token" => Ok(LockKind::Token),
            "timed" => Ok(LockKind::Timed),
            other => Err(ParseLockKindError(other.to_string())),
        }
    }
}
