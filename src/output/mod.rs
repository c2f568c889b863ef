//! Output formatting for aggregated prefixes.
//!
//! This module handles rendering the result:
//! - [`terminal`] - One prefix per line, or a colored before/after diff
//! - [`json`] - JSON array output

mod json;
mod terminal;

pub use json::write_json;
pub use terminal::{write_diff, write_prefixes};
