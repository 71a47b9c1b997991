//! Immutable rank table produced by [`Capture::build`](crate::Capture::build).

use crate::error::{Arity, Operation, Result};
use crate::validate::{IntoCandidate, validate};

/// Per-value record computed by the build pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rank {
    /// Occurrences of the value itself.
    pub count: u64,
    /// Occurrences of strictly smaller values.
    pub less_than: u64,
    /// Occurrences of strictly larger values.
    pub greater_than: u64,
}

/// Constant-time answers to less/greater/between queries.
///
/// A snapshot never changes after it is built and does not observe later
/// inserts into the capture it came from. It can be shared freely between
/// threads.
#[derive(Clone, Debug)]
pub struct Snapshot {
    ranks: Box<[Rank]>,
    total: u64,
    max_value: u32,
}

impl Snapshot {
    /// Runs the prefix/suffix pass over `counts` in ascending value order.
    ///
    /// `counts` must hold one slot per value in `0..=max_value` and sum to
    /// `total`.
    pub(crate) fn from_counts(counts: &[u64], total: u64, max_value: u32) -> Self {
        debug_assert_eq!(counts.len(), max_value as usize + 1);

        let mut lesser = 0u64;
        let mut greater = total;
        let ranks = counts
            .iter()
            .map(|&count| {
                let rank = Rank {
                    count,
                    less_than: lesser,
                    greater_than: greater - count,
                };
                lesser += count;
                greater -= count;
                rank
            })
            .collect();

        Self {
            ranks,
            total,
            max_value,
        }
    }

    /// Number of values captured at build time.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Inclusive ceiling inherited from the capture.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Returns how many captured values are strictly below `value`.
    ///
    /// Every captured value is at most [`max_value`](Self::max_value), so any
    /// query past the ceiling counts everything.
    pub fn less<V: IntoCandidate>(&self, value: V) -> Result<u64> {
        let value = validate(value.into_candidate(), Operation::Less, Arity::One)?;
        Ok(self.less_unchecked(value))
    }

    /// Returns how many captured values are strictly above `value`.
    pub fn greater<V: IntoCandidate>(&self, value: V) -> Result<u64> {
        let value = validate(value.into_candidate(), Operation::Greater, Arity::One)?;
        Ok(match self.slot(value) {
            Some(rank) => rank.greater_than,
            None => 0,
        })
    }

    /// Returns how many captured values lie in the inclusive range spanned by
    /// `a` and `b`, in either order.
    ///
    /// Both bounds are validated before anything is computed.
    pub fn between<A, B>(&self, a: A, b: B) -> Result<u64>
    where
        A: IntoCandidate,
        B: IntoCandidate,
    {
        let a = validate(a.into_candidate(), Operation::Between, Arity::Many)?;
        let b = validate(b.into_candidate(), Operation::Between, Arity::Many)?;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        // Relies on the capture never accepting values above the ceiling.
        let Some(high_rank) = self.slot(high) else {
            return Ok(self.total - self.less_unchecked(low));
        };
        let up_to_high = high_rank.less_than + high_rank.count;
        let below_low = self.ranks[low as usize].less_than;
        Ok(up_to_high - below_low)
    }

    /// Occurrences of `value`; zero for anything outside the table.
    pub fn count(&self, value: u64) -> u64 {
        self.slot(value).map_or(0, |rank| rank.count)
    }

    /// Full rank record for `value`, if it lies within `0..=max_value`.
    pub fn rank(&self, value: u64) -> Option<Rank> {
        self.slot(value).copied()
    }

    /// Iterates over observed values in ascending order.
    pub fn iter_ranks(&self) -> impl Iterator<Item = (u32, Rank)> + '_ {
        self.ranks
            .iter()
            .enumerate()
            .filter(|(_, rank)| rank.count > 0)
            .map(|(value, rank)| (value as u32, *rank))
    }

    fn less_unchecked(&self, value: u64) -> u64 {
        match self.slot(value) {
            Some(rank) => rank.less_than,
            None => self.total,
        }
    }

    fn slot(&self, value: u64) -> Option<&Rank> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| self.ranks.get(idx))
    }
}
