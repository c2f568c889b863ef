//! Reading prefixes from line-oriented text.

use crate::config::FilterConfig;
use crate::models::PrefixSet;
use crate::processing::{accepts, parse_token};
use std::error::Error;
use std::io::{BufRead, Write};

/// Counters for one or more input sources.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ReadStats {
    /// Non-blank lines read.
    pub lines: usize,
    /// Whitespace-separated tokens seen.
    pub tokens: usize,
    /// Tokens rejected as invalid.
    pub invalid: usize,
    /// Valid prefixes discarded by the family or length filter.
    pub filtered: usize,
    /// Prefixes that passed the filter (duplicates included).
    pub accepted: usize,
}

impl ReadStats {
    pub fn merge(&mut self, other: ReadStats) {
        self.lines += other.lines;
        self.tokens += other.tokens;
        self.invalid += other.invalid;
        self.filtered += other.filtered;
        self.accepted += other.accepted;
    }
}

/// Read every token from `reader` into `set`.
///
/// Each line may hold several whitespace-separated tokens. Invalid tokens are
/// reported on `errors` and skipped; they never stop the read.
///
/// # Arguments
/// * `reader` - The line source
/// * `config` - Parsing and filter options
/// * `set` - The set receiving accepted prefixes
/// * `errors` - Where per-token diagnostics are written
///
/// # Returns
/// * `Ok(ReadStats)` - Counters for this source
/// * `Err` - If reading the source or writing a diagnostic fails
pub fn read_prefixes<R: BufRead, E: Write>(
    reader: R,
    config: &FilterConfig,
    set: &mut PrefixSet,
    errors: &mut E,
) -> Result<ReadStats, Box<dyn Error>> {
    let mut stats = ReadStats::default();

    for line in reader.lines() {
        let line = line.map_err(|e| format!("Error reading input: {e}"))?;
        if line.trim().is_empty() {
            continue;
        }
        stats.lines += 1;

        for token in line.split_whitespace() {
            stats.tokens += 1;
            match parse_token(token, config) {
                Ok(prefix) if accepts(&prefix, config) => {
                    stats.accepted += 1;
                    set.insert(prefix);
                }
                Ok(_) => stats.filtered += 1,
                Err(e) => {
                    stats.invalid += 1;
                    log::debug!("rejected token: {e}");
                    writeln!(errors, "ERROR: '{token}' is not a valid IP network, ignoring.")?;
                }
            }
        }
    }

    Ok(stats)
}
