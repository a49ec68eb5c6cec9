//! Scores, search results and result aggregation.

use std::cmp::Reverse;
use std::fmt;
use std::time::Duration;

use crate::crypto::{leading_zero_count, Selector, GOLDEN_ZEROS};

/// Rank of a selector. Ordered by golden first, then even zero count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    golden: bool,
    zero_nibbles: u32,
}

impl Score {
    /// Scores a selector with `zeros` leading zero nibbles.
    ///
    /// Odd counts contribute nothing unless the selector is golden.
    #[inline]
    pub fn from_zero_count(zeros: u32) -> Self {
        Self {
            golden: zeros >= GOLDEN_ZEROS,
            zero_nibbles: if zeros % 2 == 0 { zeros } else { 0 },
        }
    }

    #[inline]
    pub fn of(selector: &Selector) -> Self {
        Self::from_zero_count(selector.leading_zeros())
    }

    /// Returns true if this score strictly beats `best`.
    #[inline]
    pub fn improves_on(self, best: Score) -> bool {
        self > best
    }

    pub fn is_golden(self) -> bool {
        self.golden
    }
}

/// Best candidate reported by a worker or a whole search.
///
/// The default value is the empty sentinel: no improving candidate found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorResult {
    /// Candidate signature, e.g. `mint252(uint256,address)`
    pub name: String,
    /// Hex selector without 0x prefix, empty for the sentinel
    pub selector: String,
    /// Placeholder value that produced `name`
    pub index: u64,
    /// Elapsed search time, stamped by the coordinator
    pub duration: Duration,
    /// Candidates hashed across all workers, stamped by the coordinator
    pub candidates: u64,
}

impl SelectorResult {
    /// Builds a result for a scanned candidate.
    pub fn new(name: String, selector: &Selector, index: u64) -> Self {
        Self {
            name,
            selector: selector.to_hex(),
            index,
            ..Self::default()
        }
    }

    /// Returns true for the "nothing found" sentinel.
    pub fn is_empty(&self) -> bool {
        self.selector.is_empty()
    }

    /// Leading zero nibbles of the selector.
    pub fn zeros(&self) -> usize {
        leading_zero_count(&self.selector)
    }

    pub fn score(&self) -> Score {
        Score::from_zero_count(self.zeros() as u32)
    }

    pub fn is_golden(&self) -> bool {
        self.score().is_golden()
    }

    /// Returns true if `self` should replace `other` as the global best.
    ///
    /// Higher score wins; equal scores go to the lower placeholder index.
    pub fn outranks(&self, other: &SelectorResult) -> bool {
        if self.is_empty() {
            return false;
        }
        if other.is_empty() {
            return self.score().improves_on(Score::default());
        }
        (self.score(), Reverse(self.index)) > (other.score(), Reverse(other.index))
    }
}

impl fmt::Display for SelectorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "no selector found")
        } else {
            write!(f, "{} -> 0x{}", self.name, self.selector)
        }
    }
}

/// Folds worker results into a single global best.
///
/// The outcome depends only on the set of offered results, not their order.
#[derive(Debug, Default)]
pub struct Aggregator {
    best: SelectorResult,
    received: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers one worker's result.
    pub fn offer(&mut self, result: SelectorResult) {
        self.received += 1;
        if result.outranks(&self.best) {
            self.best = result;
        }
    }

    /// Number of results offered so far, sentinels included.
    pub fn received(&self) -> usize {
        self.received
    }

    pub fn finish(self) -> SelectorResult {
        self.best
    }
}

/// Reduces a set of results to the global best.
pub fn aggregate<I>(results: I) -> SelectorResult
where
    I: IntoIterator<Item = SelectorResult>,
{
    let mut aggregator = Aggregator::new();
    for result in results {
        aggregator.offer(result);
    }
    aggregator.finish()
}
