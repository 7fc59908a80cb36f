//! # Hash Compression
//!
//! Reduces a wide-domain integer hash down to a small, uniformly distributed
//! bucket id by dividing the hash's value range into `2^output_bits`
//! equal-width segments.

use nearvec_core::error::{Error, Result};
use nearvec_core::MAX_BUCKET_BITS;

/// Widest hash the compressor accepts, in bits.
pub const MAX_INPUT_BITS: u8 = 64;

/// Reduce `hash` down to one of `2^output_bits` bucket ids.
///
/// Only the lowest `input_bits` bits of `hash` participate; anything above
/// them is ignored. For a hash drawn uniformly from the `2^input_bits`
/// domain every bucket is reachable with equal probability. Deterministic:
/// the same inputs always produce the same bucket.
pub fn compress_hash(output_bits: u8, hash: u64, input_bits: u8) -> Result<u32> {
    if output_bits == 0 || output_bits > MAX_BUCKET_BITS {
        return Err(Error::invalid_argument(format!(
            "output_bits must be in 1..={}, got {}",
            MAX_BUCKET_BITS, output_bits
        )));
    }
    if input_bits == 0 || input_bits > MAX_INPUT_BITS {
        return Err(Error::invalid_argument(format!(
            "input_bits must be in 1..={}, got {}",
            MAX_INPUT_BITS, input_bits
        )));
    }
    // When the output is at least as wide as the input, no compression is
    // needed.
    if output_bits >= input_bits {
        return Ok(hash as u32);
    }

    let buckets = 1u64 << output_bits;
    let (hash, segment_size) = if input_bits == 64 {
        // The hash already occupies the full word; the segment width must be
        // computed with unsigned arithmetic or it overflows.
        (hash, u64::MAX / buckets)
    } else {
        let relevant_bits_mask = (1u64 << input_bits) - 1;
        (hash & relevant_bits_mask, (1u64 << input_bits) / buckets)
    };

    // The mask keeps the extreme hash value from computing a bucket one past
    // the valid range.
    let bucket = hash / segment_size;
    Ok((bucket as u32) & ((buckets - 1) as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_when_output_covers_input() {
        assert_eq!(compress_hash(16, 0xABCD, 16).unwrap(), 0xABCD);
        assert_eq!(compress_hash(32, 7, 8).unwrap(), 7);
    }

    #[test]
    fn bits_above_input_width_are_ignored() {
        assert_eq!(compress_hash(8, 0xFFFF_0000_0000, 16).unwrap(), 0);
        let in_range = compress_hash(8, 0xFFFF, 16).unwrap();
        assert!(in_range <= 255);
    }

    #[test]
    fn full_width_input_does_not_overflow() {
        for output_bits in [1, 8, 16, 32] {
            let bucket = compress_hash(output_bits, u64::MAX - 1, 64).unwrap();
            assert!(bucket < 1u32.checked_shl(output_bits as u32).unwrap_or(u32::MAX));
        }
        assert_eq!(compress_hash(1, 0, 64).unwrap(), 0);
        assert_eq!(compress_hash(1, u64::MAX / 2 + 1, 64).unwrap(), 1);
    }

    #[test]
    fn rejects_out_of_range_widths() {
        assert!(compress_hash(0, 1, 16).is_err());
        assert!(compress_hash(33, 1, 64).is_err());
        assert!(compress_hash(8, 1, 0).is_err());
        assert!(compress_hash(8, 1, 65).is_err());
    }

    #[test]
    fn deterministic() {
        let first = compress_hash(12, 0xDEAD_BEEF, 32).unwrap();
        for _ in 0..10 {
            assert_eq!(compress_hash(12, 0xDEAD_BEEF, 32).unwrap(), first);
        }
    }
}
