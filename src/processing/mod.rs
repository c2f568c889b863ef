//! Prefix processing logic.
//!
//! This module contains the business logic applied to parsed prefixes:
//! - [`aggregate`] - Subsumption removal and sibling merging to a fixed point
//! - [`filter`] - Family and length filters applied while reading input

mod aggregate;
mod filter;

// Re-export public functions
pub use aggregate::{
    aggregate, aggregate_strs, aggregate_with_stats, merge_siblings, remove_covered, AggregateStats,
};
pub use filter::{accepts, parse_token};
