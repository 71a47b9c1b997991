//! Capture phase: a dense per-value count table over `0..=max_value`.
//!
//! Inserts are `O(1)`. [`Capture::build`] walks the whole table once, so its
//! cost depends only on the ceiling and not on how many values were added.
//! The resulting [`Snapshot`] then answers every query in `O(1)`.

use crate::MAX_VALUE;
use crate::error::{Arity, CaptureError, Operation, Result};
use crate::snapshot::Snapshot;
use crate::validate::{IntoCandidate, validate};

/// Accumulates positive integers up to an inclusive ceiling.
///
/// A capture has a single owner; wrap it in a lock if several writers must
/// share it. Snapshots produced by [`build`](Self::build) are independent
/// copies and do not track later inserts.
#[derive(Clone, Debug)]
pub struct Capture {
    max_value: u32,
    total: u64,
    counts: Vec<u64>,
}

impl Default for Capture {
    fn default() -> Self {
        Self::new()
    }
}

impl Capture {
    /// Creates an empty capture bounded by [`MAX_VALUE`].
    pub fn new() -> Self {
        Self::with_max_value(MAX_VALUE)
    }

    /// Creates an empty capture with a custom inclusive ceiling.
    ///
    /// # Panics
    ///
    /// Panics if `max_value` is zero, since no positive integer would fit.
    pub fn with_max_value(max_value: u32) -> Self {
        assert!(max_value >= 1, "max_value must be at least 1");
        Self {
            max_value,
            total: 0,
            counts: vec![0; max_value as usize + 1],
        }
    }

    /// Returns the inclusive ceiling.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Number of accepted inserts.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Occurrences of `value` so far; zero for anything outside the table.
    pub fn count(&self, value: u64) -> u64 {
        usize::try_from(value)
            .ok()
            .and_then(|idx| self.counts.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// Records one occurrence of `value`.
    ///
    /// Rejects non-integers, integers below 1, and integers above
    /// [`max_value`](Self::max_value). Nothing is recorded on error.
    pub fn add<V: IntoCandidate>(&mut self, value: V) -> Result<()> {
        let value = self.check(value).inspect_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_err, "rejected insert");
        })?;

        self.counts[value] += 1;
        self.total += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(value, total = self.total, "captured value");
        Ok(())
    }

    /// Computes a [`Snapshot`] from the current counts.
    ///
    /// Does not consume the capture: more values may be added afterwards and
    /// another snapshot built.
    pub fn build(&self) -> Snapshot {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "build_snapshot",
            max_value = self.max_value,
            total = self.total
        )
        .entered();

        Snapshot::from_counts(&self.counts, self.total, self.max_value)
    }

    /// Removes all captured values, keeping the ceiling.
    pub fn clear(&mut self) {
        self.counts.fill(0);
        self.total = 0;
    }

    /// Adds every count from `other` into `self`.
    ///
    /// The result is the same as if all of `other`'s values had been added
    /// here directly.
    ///
    /// # Panics
    ///
    /// Panics if the two captures have different ceilings.
    pub fn merge_from(&mut self, other: &Capture) {
        assert_eq!(
            self.max_value, other.max_value,
            "cannot merge captures with different max_value"
        );
        for (dst, src) in self.counts.iter_mut().zip(&other.counts) {
            *dst += src;
        }
        self.total += other.total;
    }

    fn check<V: IntoCandidate>(&self, value: V) -> Result<usize> {
        let value = validate(value.into_candidate(), Operation::Add, Arity::One)?;
        if value > u64::from(self.max_value) {
            return Err(CaptureError::DomainExceeded {
                operation: Operation::Add,
                value,
                ceiling: self.max_value,
            });
        }
        // Bounded by max_value, which is a u32.
        Ok(value as usize)
    }
}
