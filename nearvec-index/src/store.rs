//! # Nearest-Vector Store
//!
//! Buckets vectors by their similarity hash for K-NN queries over a small
//! search space, re-partitioning itself online as it grows.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   NearestVectorStore                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  add(v) ──► schedule lookup ──► bucket = compress(hash(v))  │
//! │                  │                                          │
//! │                  └─► exponent changed? rehash every vector  │
//! │                                                             │
//! │  query(probe, k) ──► probe's bucket only ──► dot products   │
//! │                                     │                       │
//! │                                     └─► BoundedTopK(k)      │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Candidates are ranked by raw dot product against the probe. Insert
//! unit-normalized vectors when magnitude should not influence ranking; the
//! score then equals the cosine similarity. Because recall hinges entirely
//! on the coarse similarity hash, dense embeddings are the intended input;
//! sparse vectors bucket poorly.
//!
//! Not thread-safe: mutating operations take `&mut self` and there is no
//! internal locking. Share across threads only under external mutual
//! exclusion. In particular the rehash pass is not interruptible; no caller
//! can observe a partially rehashed store.

use std::collections::HashMap;

use tracing::{debug, trace};

use nearvec_core::config::BucketSchedule;
use nearvec_core::error::Result;
use nearvec_core::metrics::StoreMetrics;

use crate::topk::BoundedTopK;
use crate::vector::Vector;

/// Adaptive-granularity bucketed vector store.
pub struct NearestVectorStore {
    schedule: BucketSchedule,
    buckets: HashMap<u32, Vec<Vector>>,
    len: usize,
    bucket_bits: u8,
    metrics: StoreMetrics,
}

impl Default for NearestVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NearestVectorStore {
    /// Create a store with the default bucket-exponent schedule.
    pub fn new() -> Self {
        Self::with_schedule(BucketSchedule::default())
    }

    /// Create a store with an explicit schedule.
    pub fn with_schedule(schedule: BucketSchedule) -> Self {
        let bucket_bits = schedule.bits_for(0);
        Self {
            schedule,
            buckets: HashMap::new(),
            len: 0,
            bucket_bits,
            metrics: StoreMetrics::new(),
        }
    }

    /// Insert a vector. Never fails; the store accepts vectors of any
    /// dimension or width, though only same-shaped vectors are comparable
    /// at query time.
    pub fn add(&mut self, vector: Vector) {
        self.len += 1;
        self.apply_schedule();
        let bucket = self.bucket_of(&vector);
        self.buckets.entry(bucket).or_default().push(vector);
        self.metrics.record_add();
    }

    /// Remove a vector by equality from its current bucket. Returns whether
    /// a removal occurred; the size and schedule only move on success.
    pub fn remove(&mut self, vector: &Vector) -> bool {
        let bucket = self.bucket_of(vector);
        let Some(held) = self.buckets.get_mut(&bucket) else {
            return false;
        };
        let Some(position) = held.iter().position(|candidate| candidate == vector) else {
            return false;
        };
        // Order within a bucket carries no meaning.
        held.swap_remove(position);
        if held.is_empty() {
            self.buckets.remove(&bucket);
        }
        self.len -= 1;
        self.apply_schedule();
        self.metrics.record_remove();
        true
    }

    /// Return up to `k` vectors from the probe's bucket, ranked by dot
    /// product against the probe. Vectors outside the probe's bucket are
    /// never considered; that is the approximate-search trade-off.
    ///
    /// An empty or missing bucket yields an empty result. A candidate whose
    /// dimension or width differs from the probe surfaces
    /// [`DimensionMismatch`](nearvec_core::Error::DimensionMismatch).
    pub fn query(&self, probe: &Vector, k: usize) -> Result<Vec<Vector>> {
        let bucket = self.bucket_of(probe);
        let candidates = self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or(&[]);

        let mut selector = BoundedTopK::new(k);
        for candidate in candidates {
            let score = candidate.dot_product(probe)?;
            selector.add(candidate, score);
        }

        self.metrics.record_query(candidates.len() as u64);
        trace!(bucket, candidates = candidates.len(), k, "scored query bucket");
        Ok(selector.into_vec().into_iter().cloned().collect())
    }

    /// Empty the store and reset the exponent to the schedule's value at
    /// size zero.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
        self.apply_schedule();
    }

    /// Number of stored vectors.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of hash bits currently used for bucketing.
    pub fn bucket_size_exponent(&self) -> u8 {
        self.bucket_bits
    }

    /// Number of non-empty buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Activity counters for this store.
    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    fn bucket_of(&self, vector: &Vector) -> u32 {
        // Schedule bits are validated against MAX_BUCKET_BITS at
        // construction, so compression cannot fail here.
        vector
            .bucket(self.bucket_bits)
            .expect("schedule bits are within the compressor's range")
    }

    /// Re-evaluate the exponent for the current size and, if it changed,
    /// move every stored vector to the bucket implied by the new exponent.
    /// The pass visits each vector exactly once.
    fn apply_schedule(&mut self) {
        let bits = self.schedule.bits_for(self.len);
        if bits == self.bucket_bits {
            return;
        }
        let old_bits = self.bucket_bits;
        self.bucket_bits = bits;

        let mut rebucketed: HashMap<u32, Vec<Vector>> = HashMap::new();
        for (_, held) in self.buckets.drain() {
            for vector in held {
                let bucket = vector
                    .bucket(bits)
                    .expect("schedule bits are within the compressor's range");
                rebucketed.entry(bucket).or_default().push(vector);
            }
        }
        self.buckets = rebucketed;

        self.metrics.record_rehash();
        debug!(
            old_bits,
            new_bits = bits,
            vectors = self.len,
            "bucket exponent changed, store rehashed"
        );
    }
}
