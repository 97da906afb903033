//! Ordering modes for the indexed priority queue.
//!
//! A queue is built max-first or min-first and keeps that ordering for its
//! whole lifetime. [`OrderMode`] is the configuration knob: it selects the
//! strict comparison every sift decision runs through, and it parses from
//! the `"max"` / `"min"` strings a hosting layer hands in, so an unknown
//! mode is rejected before a queue ever exists.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Whether the queue surfaces its largest or its smallest key first.
///
/// # Example
///
/// ```rust
/// use indexed_priority_queue::OrderMode;
///
/// let mode: OrderMode = "min".parse()?;
/// assert_eq!(mode, OrderMode::Min);
/// assert!("fifo".parse::<OrderMode>().is_err());
/// # Ok::<(), indexed_priority_queue::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderMode {
    /// Parents hold keys at least as large as their children; `pop` yields
    /// the largest key.
    #[default]
    Max,
    /// Parents hold keys at most as large as their children; `pop` yields
    /// the smallest key.
    Min,
}

impl OrderMode {
    /// True when key `a` belongs strictly closer to the root than key `b`.
    ///
    /// Equal keys never outrank each other, so sifting leaves ties where
    /// they are.
    pub(crate) fn outranks<P: Ord>(self, a: &P, b: &P) -> bool {
        match self {
            OrderMode::Max => a > b,
            OrderMode::Min => a < b,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            OrderMode::Max => "max",
            OrderMode::Min => "min",
        }
    }
}

impl FromStr for OrderMode {
    type Err = Error;

    /// Accepts exactly `"max"` and `"min"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max" => Ok(OrderMode::Max),
            "min" => Ok(OrderMode::Min),
            other => Err(Error::InvalidConfiguration {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
