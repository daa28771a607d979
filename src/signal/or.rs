use futures::future::select_all;
use tracing::trace;

use super::{channel, Signal, Strategy, Trigger};

/// Aggregate `sources` into one signal that fires when the first of them
/// does, using the default [`Strategy`].
///
/// - No sources: a signal that never fires.
/// - One source: that source itself.
/// - Two or more: a new signal that fires once, shortly after the first
///   source fires. From then on no task keeps waiting on the other sources.
///
/// When several sources fire at the same time, which one counts as first is
/// unspecified. Sources that never fire simply never cause the aggregate to
/// fire.
///
/// Must be called from within a Tokio runtime.
pub fn or<I>(sources: I) -> Signal
where
    I: IntoIterator<Item = Signal>,
{
    or_with(Strategy::default(), sources)
}

/// [`or`] with an explicit [`Strategy`].
pub fn or_with<I>(strategy: Strategy, sources: I) -> Signal
where
    I: IntoIterator<Item = Signal>,
{
    let mut sources: Vec<Signal> = sources.into_iter().collect();
    match sources.len() {
        0 => Signal::never(),
        1 => sources.swap_remove(0),
        _ => match strategy {
            Strategy::Watchers => watchers(sources),
            Strategy::Select => select(sources),
            Strategy::Halving => halving(sources),
        },
    }
}

fn watchers(sources: Vec<Signal>) -> Signal {
    let (trigger, aggregate) = channel();
    for (index, source) in sources.into_iter().enumerate() {
        let trigger = trigger.clone();
        let aggregate = aggregate.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = source.fired() => {
                    if trigger.fire() {
                        trace!(strategy = "watchers", index, "aggregate fired");
                    }
                }
                () = aggregate.fired() => {}
            }
        });
    }
    aggregate
}

fn select(sources: Vec<Signal>) -> Signal {
    let (trigger, aggregate) = channel();
    tokio::spawn(async move {
        let waits = sources.iter().map(|source| Box::pin(source.fired()));
        let ((), index, _) = select_all(waits).await;
        trigger.fire();
        trace!(strategy = "select", index, "aggregate fired");
    });
    aggregate
}

fn halving(sources: Vec<Signal>) -> Signal {
    let (trigger, aggregate) = channel();
    join(sources, trigger, aggregate.clone());
    aggregate
}

/// Spawn the task that fires `trigger` when either half of `sources` fires.
///
/// Every join in the tree also watches `root`, so once the top-level
/// aggregate fires the whole tree unwinds, including the losing branches.
fn join(mut sources: Vec<Signal>, trigger: Trigger, root: Signal) {
    tokio::spawn(async move {
        let width = sources.len();
        let right = sources.split_off(width / 2);
        let left = half(sources, &root);
        let right = half(right, &root);
        let won = tokio::select! {
            () = left.fired() => trigger.fire(),
            () = right.fired() => trigger.fire(),
            () = root.fired() => false,
        };
        if won {
            trace!(strategy = "halving", width, "join fired");
        }
    });
}

fn half(mut sources: Vec<Signal>, root: &Signal) -> Signal {
    if sources.len() < 2 {
        return sources.pop().unwrap_or_else(Signal::never);
    }
    let (trigger, signal) = channel();
    join(sources, trigger, root.clone());
    signal
}
