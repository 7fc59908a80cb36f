//! # Configuration
//!
//! Explicit configuration passed to store constructors. There is no
//! process-wide mutable state anywhere in the workspace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Widest bucket id the hash compressor can produce.
pub const MAX_BUCKET_BITS: u8 = 32;

/// Bucket-exponent schedule for the nearest-vector store.
///
/// An ascending sequence of `(size threshold, bits)` pairs defining the
/// number of hash bits used for bucketing as a monotonic step function of
/// store size: the exponent is the bits of the first entry whose threshold
/// exceeds the current size. Sizes past the largest threshold keep the last
/// entry's bits, so the final threshold is effectively unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSchedule {
    thresholds: BTreeMap<usize, u8>,
}

impl Default for BucketSchedule {
    fn default() -> Self {
        // One bucket up to 10k vectors, 16 buckets up to 100k, 65536 beyond.
        Self {
            thresholds: BTreeMap::from([
                (10_000, 0),
                (100_000, 4),
                (usize::MAX, 16),
            ]),
        }
    }
}

impl BucketSchedule {
    /// Build a schedule from `(threshold, bits)` pairs.
    ///
    /// Pairs may be given in any order but thresholds must be distinct and
    /// every bits value must not exceed [`MAX_BUCKET_BITS`].
    pub fn new(pairs: impl IntoIterator<Item = (usize, u8)>) -> Result<Self> {
        let mut thresholds = BTreeMap::new();
        for (threshold, bits) in pairs {
            if bits > MAX_BUCKET_BITS {
                return Err(Error::invalid_argument(format!(
                    "schedule bits {} exceeds maximum {}",
                    bits, MAX_BUCKET_BITS
                )));
            }
            if thresholds.insert(threshold, bits).is_some() {
                return Err(Error::invalid_argument(format!(
                    "duplicate schedule threshold {}",
                    threshold
                )));
            }
        }
        if thresholds.is_empty() {
            return Err(Error::invalid_argument("schedule must not be empty"));
        }
        Ok(Self { thresholds })
    }

    /// Bucket bits in effect for a store holding `size` vectors.
    ///
    /// Thresholds are kept sorted ascending; the first one past `size` wins.
    /// Past every threshold the widest configured exponent stays in effect.
    pub fn bits_for(&self, size: usize) -> u8 {
        let mut bits = 0;
        for (&threshold, &step_bits) in &self.thresholds {
            bits = step_bits;
            if size < threshold {
                break;
            }
        }
        bits
    }

    /// Number of configured steps.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Iterate `(threshold, bits)` in ascending threshold order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.thresholds.iter().map(|(&t, &b)| (t, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_steps() {
        let schedule = BucketSchedule::default();
        assert_eq!(schedule.bits_for(0), 0);
        assert_eq!(schedule.bits_for(9_999), 0);
        assert_eq!(schedule.bits_for(10_000), 4);
        assert_eq!(schedule.bits_for(99_999), 4);
        assert_eq!(schedule.bits_for(100_000), 16);
        assert_eq!(schedule.bits_for(usize::MAX - 1), 16);
    }

    #[test]
    fn rejects_oversized_bits() {
        let err = BucketSchedule::new([(100, 33)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn rejects_empty_and_duplicates() {
        assert!(BucketSchedule::new([]).is_err());
        assert!(BucketSchedule::new([(10, 0), (10, 4)]).is_err());
    }

    #[test]
    fn unordered_pairs_are_sorted() {
        let schedule = BucketSchedule::new([(usize::MAX, 16), (5, 0), (10, 4)]).unwrap();
        assert_eq!(
            schedule.iter().collect::<Vec<_>>(),
            vec![(5, 0), (10, 4), (usize::MAX, 16)]
        );
    }
}
