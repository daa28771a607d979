//! One-shot signals and first-signal-wins aggregation.
//!
//! A [`Signal`] starts pending and fires at most once; the matching
//! [`Trigger`] is the only way to fire it. [`or`] turns any number of
//! signals into one that fires as soon as the first of them does, after
//! which nothing keeps watching the rest.
//!
//! ```
//! use std::time::Duration;
//! use sync_or::signal::{self, Signal};
//!
//! # #[tokio::main(flavor = "multi_thread")]
//! # async fn main() {
//! let (fast, fast_signal) = signal::channel();
//! let slow_signal = Signal::from_future(tokio::time::sleep(Duration::from_secs(60)));
//!
//! let any = signal::or([fast_signal, slow_signal]);
//! fast.fire();
//! any.fired().await;
//! assert!(any.is_fired());
//! # }
//! ```

mod or;
mod signal;
mod strategy;

pub use or::{or, or_with};
pub use signal::{channel, Signal, Trigger};
pub use strategy::{ParseStrategyError, Strategy};
