//! Domain models for prefix aggregation.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Prefix`] - IPv4/IPv6 network address with prefix length
//! - [`PrefixSet`] - Trie-backed set of unique prefixes

mod prefix;
mod prefix_set;

// Re-export public types
pub use prefix::{cut_addr, get_cidr_mask, Family, Prefix, MAX_LENGTH_V4, MAX_LENGTH_V6};
pub use prefix_set::{Iter, PrefixSet};
