use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Signal;

/// How an aggregate over two or more sources watches them.
///
/// All strategies have the same observable behaviour; they differ in how
/// many tasks they keep alive while waiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One task per source. The first to see its source fire fires the
    /// aggregate; the rest exit once the aggregate has fired.
    Watchers,
    /// A single task selecting over every source at once.
    Select,
    /// Split the sources in half, aggregate each half, and wait on the pair.
    /// The tree is log2(N) joins deep.
    #[default]
    Halving,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Watchers => "watchers",
            Strategy::Select => "select",
            Strategy::Halving => "halving",
        }
    }

    /// Aggregate `sources` with this strategy. See [`or`](super::or).
    pub fn aggregate<I>(self, sources: I) -> Signal
    where
        I: IntoIterator<Item = Signal>,
    {
        super::or_with(self, sources)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Strategy`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown aggregation strategy `{0}` (expected watchers, select or halving)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "watchers" => Ok(Strategy::Watchers),
            "select" => Ok(Strategy::Select),
            "halving" => Ok(Strategy::Halving),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
