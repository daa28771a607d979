use serde::{Deserialize, Serialize};

use crate::lock::{Lock, LockKind, LockManager};
#[cfg(feature = "signal")]
use crate::signal::{Signal, Strategy};

/// Host-facing selection of lock variant and aggregation strategy.
///
/// Every field has a default, so an empty document is a valid config:
///
/// ```
/// let config: sync_or::Config = serde_json::from_str(r#"{ "lock": "timed" }"#).unwrap();
/// assert_eq!(config.lock, sync_or::lock::LockKind::Timed);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Variant built by [`Config::new_lock`] and [`Config::lock_manager`].
    pub lock: LockKind,
    /// Strategy used by [`Config::or`].
    #[cfg(feature = "signal")]
    pub strategy: Strategy,
}

impl Config {
    pub fn new_lock(&self) -> std::sync::Arc<dyn Lock> {
        self.lock.new_lock()
    }

    pub fn lock_manager(&self) -> LockManager<dyn Lock> {
        LockManager::for_kind(self.lock)
    }

    /// Aggregate `sources` with the configured strategy.
    #[cfg(feature = "signal")]
    pub fn or<I>(&self, sources: I) -> Signal
    where
        I: IntoIterator<Item = Signal>,
    {
        self.strategy.aggregate(sources)
    }
}
