//! Bloom filter with a seeded rolling hash
//!
//! A Bloom filter is a space-efficient probabilistic data structure that
//! tests whether an item is a member of a set. False positives are possible,
//! but false negatives are not.

use crate::math;
use crate::traits::{ConfigError, MembershipFilter, MergeError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{format, vec, vec::Vec};

/// Bloom filter for set membership testing
///
/// The filter owns `capacity` bits and derives `hash_count` bit positions
/// per item with a seeded rolling hash. Both parameters are fixed at
/// construction. Bits are only ever set, never cleared, so membership
/// reports are monotone: once [`contains`](BloomFilter::contains) returns
/// `true` for an inserted item, it returns `true` for the rest of the
/// filter's lifetime.
///
/// There is no interior mutability; [`insert`](BloomFilter::insert) takes
/// `&mut self`, so sharing a filter across threads requires external
/// synchronization (e.g. a lock).
///
/// # Example
///
/// ```
/// use bloomsieve::BloomFilter;
///
/// let mut filter = BloomFilter::new(100, 3).unwrap();
///
/// filter.insert("apple");
/// filter.insert("banana");
///
/// assert!(filter.contains("apple"));   // true - definitely inserted
/// assert!(filter.contains("banana"));  // true - definitely inserted
/// assert!(!filter.contains("grape"));  // false - definitely not present
/// ```
///
/// # False Positive Rate
///
/// The false positive rate grows with the fill ratio of the bit array.
/// Once every bit is set, the filter reports `true` for all inputs; see
/// [`estimated_false_positive_rate`](BloomFilter::estimated_false_positive_rate).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BloomFilter {
    /// Packed bit array
    bits: Vec<u64>,
    /// Number of addressable bits (the reduction modulus)
    capacity: usize,
    /// Number of seeded index derivations per item
    hash_count: usize,
    /// Number of insertions performed
    count: u64,
}

impl BloomFilter {
    /// Create a filter with `capacity` bits and `hash_count` derivations per item
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of bits in the filter
    /// * `hash_count` - Number of bit positions derived per item
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] if `capacity` is zero, and
    /// [`ConfigError::InvalidHashCount`] if `hash_count` is zero. A filter
    /// with no bits has no index space to reduce into, and a filter with no
    /// hash derivations would vacuously report every item as present.
    pub fn new(capacity: usize, hash_count: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidCapacity);
        }
        if hash_count == 0 {
            return Err(ConfigError::InvalidHashCount);
        }

        // Indices are reduced by `capacity`, not the padded word length,
        // so the spare bits in the last word are never addressed.
        let num_words = (capacity + 63) / 64;

        Ok(Self {
            bits: vec![0u64; num_words],
            capacity,
            hash_count,
            count: 0,
        })
    }

    /// Derive the bit position for `item` under `seed`.
    ///
    /// Rolling hash over the item's UTF-16 code units: `h = h*33 + code + seed`
    /// per unit, in wrapping 32-bit signed arithmetic. The seed folds into
    /// every character step, so each seed produces a structurally different
    /// hash rather than a shifted variant of the same one. The result is
    /// reduced to `[0, capacity)` by truncating remainder and absolute value.
    ///
    /// The wrap-at-32-bits behavior is load-bearing: it keeps derived
    /// indices reproducible bit-for-bit across processes, which is what
    /// makes serialized filters comparable and mergeable.
    fn index_for(&self, item: &str, seed: i32) -> usize {
        let mut h: i32 = 0;
        for code in item.encode_utf16() {
            h = h
                .wrapping_mul(33)
                .wrapping_add(code as i32)
                .wrapping_add(seed);
        }
        // A zero-length item runs no character steps; the hash degenerates
        // to the bare seed so distinct seeds still spread across the table.
        if item.is_empty() {
            h = seed;
        }
        (h as i64 % self.capacity as i64).unsigned_abs() as usize
    }

    /// Insert an item into the filter
    ///
    /// Re-inserting an item sets the same bits again and has no further
    /// effect on membership.
    pub fn insert(&mut self, item: &str) {
        self.count += 1;

        for seed in 0..self.hash_count {
            let bit_idx = self.index_for(item, seed as i32);
            self.bits[bit_idx / 64] |= 1u64 << (bit_idx % 64);
        }
    }

    /// Check if an item might be in the filter
    ///
    /// Returns `true` if the item might be in the set (possibly a false
    /// positive), or `false` if the item is definitely not in the set.
    /// Bails out on the first unset bit, skipping the remaining hash
    /// derivations for clearly-absent items.
    pub fn contains(&self, item: &str) -> bool {
        for seed in 0..self.hash_count {
            let bit_idx = self.index_for(item, seed as i32);
            if self.bits[bit_idx / 64] & (1u64 << (bit_idx % 64)) == 0 {
                return false;
            }
        }
        true
    }

    /// Get the number of bits in the filter
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of hash derivations per item
    pub fn hash_count(&self) -> usize {
        self.hash_count
    }

    /// Get the number of bits set to 1
    pub fn bits_set(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Estimate the current false positive rate
    ///
    /// This is based on the actual fill ratio of the filter.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        let fill_ratio = self.bits_set() as f64 / self.capacity as f64;
        math::powi(fill_ratio, self.hash_count as i32)
    }

    /// Estimate the number of distinct items in the filter
    ///
    /// Uses the fill ratio to estimate cardinality. Returns infinity once
    /// every bit is set.
    pub fn estimated_count(&self) -> f64 {
        let bits_set = self.bits_set() as f64;
        let m = self.capacity as f64;
        let k = self.hash_count as f64;

        if bits_set >= m {
            return f64::INFINITY;
        }

        // n ≈ -m/k * ln(1 - X/m) where X is bits set
        -(m / k) * math::ln(1.0 - bits_set / m)
    }
}

impl MembershipFilter for BloomFilter {
    type Item = str;

    fn insert(&mut self, item: &str) {
        self.insert(item);
    }

    fn contains(&self, item: &str) -> bool {
        self.contains(item)
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        if self.capacity != other.capacity || self.hash_count != other.hash_count {
            return Err(MergeError::IncompatibleConfig {
                expected: format!("capacity={}, hashes={}", self.capacity, self.hash_count),
                found: format!("capacity={}, hashes={}", other.capacity, other.hash_count),
            });
        }

        for (a, b) in self.bits.iter_mut().zip(other.bits.iter()) {
            *a |= *b;
        }
        self.count += other.count;

        Ok(())
    }

    fn false_positive_rate(&self) -> f64 {
        self.estimated_false_positive_rate()
    }

    fn size_bytes(&self) -> usize {
        self.bits.len() * 8 + 24
    }

    fn count(&self) -> u64 {
        self.count
    }
}
