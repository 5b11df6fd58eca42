//! Core trait and error types for membership filters
//!
//! Filters implement the [`MembershipFilter`] trait, which covers insertion,
//! probabilistic membership queries, and merging of equally-configured
//! filters.

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error constructing a filter from degenerate parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Requested a filter with zero bits
    InvalidCapacity,
    /// Requested zero hash derivations per item
    InvalidHashCount,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidCapacity => write!(f, "capacity must be positive"),
            ConfigError::InvalidHashCount => write!(f, "hash count must be positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Error during filter merge operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Filters have incompatible configurations
    IncompatibleConfig {
        expected: String,
        found: String,
    },
}

impl core::fmt::Display for MergeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MergeError::IncompatibleConfig { expected, found } => {
                write!(f, "incompatible config: expected {}, found {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MergeError {}

/// Core trait for membership filters
pub trait MembershipFilter: Clone + Debug {
    /// The type of item this filter processes
    type Item: ?Sized;

    /// Record an item as a member
    fn insert(&mut self, item: &Self::Item);

    /// Test if an item might be a member
    ///
    /// - `true` means the item might be present (possible false positive)
    /// - `false` means the item is definitely not present
    fn contains(&self, item: &Self::Item) -> bool;

    /// Merge another filter into this one
    ///
    /// Returns an error if the filters are incompatible
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>;

    /// Estimated false positive rate given current state
    fn false_positive_rate(&self) -> f64;

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of insertions performed
    fn count(&self) -> u64;

    /// Check if the filter has never been inserted into
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
