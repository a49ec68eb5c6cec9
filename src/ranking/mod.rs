//! Ranking of selector candidates.
//!
//! Only whole zero bytes count, so a candidate improves on the current best
//! when it has strictly more leading zero nibbles and that count is even.
//! Golden selectors outrank everything else.

mod score;

pub use score::{aggregate, Aggregator, Score, SelectorResult};
