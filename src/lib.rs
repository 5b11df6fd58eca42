//! # Bloomsieve
//!
//! A seeded Bloom filter for approximate set membership.
//!
//! A Bloom filter answers "have I seen this item?" with one-sided error:
//! it may report a false positive for an item that was never inserted, but
//! it never reports a false negative for an item that was. In exchange it
//! stores membership for arbitrarily many items in a fixed number of bits.
//!
//! ## Quick Start
//!
//! ```rust
//! use bloomsieve::BloomFilter;
//!
//! // 100 bits, 3 bit positions per item
//! let mut filter = BloomFilter::new(100, 3).unwrap();
//!
//! filter.insert("apple");
//! filter.insert("banana");
//!
//! assert!(filter.contains("apple"));
//! assert!(filter.contains("banana"));
//! assert!(!filter.contains("grape"));
//! ```
//!
//! ## Determinism
//!
//! Bit positions are derived with a seeded rolling hash in fixed-width
//! 32-bit arithmetic, with no per-instance randomization. Two filters with
//! the same configuration and the same insert history are bit-identical —
//! including across processes — so filters can be serialized, compared,
//! and merged:
//!
//! ```rust
//! use bloomsieve::prelude::*;
//!
//! let mut shard_a = BloomFilter::new(1024, 4).unwrap();
//! let mut shard_b = BloomFilter::new(1024, 4).unwrap();
//!
//! shard_a.insert("user_a");
//! shard_b.insert("user_b");
//!
//! // Union of the two shards
//! shard_a.merge(&shard_b).unwrap();
//! assert!(shard_a.contains("user_a"));
//! assert!(shard_a.contains("user_b"));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization of filters

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core trait and error types always available
pub mod traits;

pub mod bloom;

mod math;

pub mod prelude {
    pub use crate::bloom::BloomFilter;
    pub use crate::traits::*;
}

pub use bloom::BloomFilter;
