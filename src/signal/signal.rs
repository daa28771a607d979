use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Debug, Default)]
struct State {
    fired: AtomicBool,
    notify: Notify,
}

/// Observer side of a one-shot signal.
///
/// Cloning is cheap and every clone observes the same state. Once fired, a
/// signal stays fired.
#[derive(Debug, Clone)]
pub struct Signal {
    state: Arc<State>,
}

/// Writer side of a one-shot signal.
///
/// Clones share the signal; whichever clone fires first performs the
/// transition and every later call is a no-op.
#[derive(Debug, Clone)]
pub struct Trigger {
    state: Arc<State>,
}

/// Create a pending signal together with the trigger that fires it.
pub fn channel() -> (Trigger, Signal) {
    let state = Arc::new(State::default());
    (
        Trigger {
            state: Arc::clone(&state),
        },
        Signal { state },
    )
}

impl Trigger {
    /// Fire the signal.
    ///
    /// Returns `true` for the one call that moved the signal from pending to
    /// fired, `false` if it had already fired.
    pub fn fire(&self) -> bool {
        let won = self
            .state
            .fired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if won {
            self.state.notify.notify_waiters();
        }
        won
    }

    /// The signal this trigger fires.
    pub fn signal(&self) -> Signal {
        Signal {
            state: Arc::clone(&self.state),
        }
    }
}

impl Signal {
    /// A signal that never fires.
    pub fn never() -> Self {
        Signal {
            state: Arc::new(State::default()),
        }
    }

    /// A signal that has already fired.
    pub fn ready() -> Self {
        let (trigger, signal) = channel();
        trigger.fire();
        signal
    }

    /// A signal that fires when `future` completes.
    ///
    /// The future is driven by a spawned task. Must be called from within a
    /// Tokio runtime.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let (trigger, signal) = channel();
        tokio::spawn(async move {
            future.await;
            trigger.fire();
        });
        signal
    }

    pub fn is_fired(&self) -> bool {
        self.state.fired.load(Ordering::Acquire)
    }

    /// Wait until the signal has fired. Returns immediately if it already
    /// has.
    pub async fn fired(&self) {
        loop {
            // Registered before the flag is read, so a concurrent
            // `notify_waiters` can't be missed.
            let notified = self.state.notify.notified();
            if self.is_fired() {
                return;
            }
            notified.await;
        }
    }

    /// Whether both handles observe the same signal.
    pub fn same_as(&self, other: &Signal) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// Live handles (signals and triggers) sharing this signal's state.
    #[cfg(test)]
    pub(crate) fn handle_count(&self) -> usize {
        Arc::strong_count(&self.state)
    }
}
