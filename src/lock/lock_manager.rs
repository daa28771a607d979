use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::{Lock, LockKind};

/// Keyed registry of locks.
///
/// Lazily creates one lock per unique key and returns the same `Arc` for
/// repeated lookups, so callers that only share a key (an entity id, a file
/// path) contend on the same lock.
///
/// ```
/// use sync_or::lock::{Lock, LockKind, LockManager, TimedLock};
///
/// let timed: LockManager<TimedLock> = LockManager::new();
/// assert!(timed.get_lock("order-1").try_lock());
/// assert!(timed.get_lock("order-1").is_locked());
///
/// let by_kind = LockManager::for_kind(LockKind::Token);
/// assert_eq!(by_kind.get_lock("order-1").kind(), LockKind::Token);
/// ```
pub struct LockManager<L: ?Sized + Lock> {
    locks: Mutex<HashMap<String, Arc<L>>>,
    make: Box<dyn Fn() -> Arc<L> + Send + Sync>,
}

impl<L: Lock + Default + 'static> LockManager<L> {
    pub fn new() -> Self {
        Self::with_factory(|| Arc::new(L::default()))
    }
}

impl<L: Lock + Default + 'static> Default for LockManager<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl LockManager<dyn Lock> {
    /// Manager handing out type-erased locks of the given variant.
    pub fn for_kind(kind: LockKind) -> Self {
        Self::with_factory(move || kind.new_lock())
    }
}

impl<L: ?Sized + Lock> LockManager<L> {
    /// Manager that builds each new lock with `make`.
    pub fn with_factory<F>(make: F) -> Self
    where
        F: Fn() -> Arc<L> + Send + Sync + 'static,
    {
        LockManager {
            locks: Mutex::new(HashMap::new()),
            make: Box::new(make),
        }
    }

    fn locks(&self) -> MutexGuard<'_, HashMap<String, Arc<L>>> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get (or create) the lock for the given identifier.
    ///
    /// Repeated calls with the same `id` return the same `Arc`.
    pub fn get_lock(&self, id: &str) -> Arc<L> {
        let mut locks = self.locks();
        if let Some(lock) = locks.get(id) {
            return Arc::clone(lock);
        }
        let lock = (self.make)();
        debug!(id, kind = %lock.kind(), "created lock");
        locks.insert(id.to_string(), Arc::clone(&lock));
        lock
    }

    /// Forget the lock for `id`. Holders of the returned `Arc` keep a working
    /// lock, but the next `get_lock(id)` creates a new one.
    pub fn remove(&self, id: &str) -> Option<Arc<L>> {
        self.locks().remove(id)
    }

    pub fn len(&self) -> usize {
        self.locks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks().is_empty()
    }
}
