//! Compress lists of IPv4 and IPv6 prefixes.
//!
//! Prefixes covered by a broader prefix are dropped and adjacent siblings are
//! merged into their parent until nothing changes:
//!
//! ```
//! use prefix_aggregate::aggregate_strs;
//! let out = aggregate_strs(&["10.0.0.0/24", "10.0.1.0/24", "10.0.0.0/32"]).unwrap();
//! assert_eq!(out, vec!["10.0.0.0/23"]);
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use args::{Args, ColorWhen};
use config::FilterConfig;
use std::error::Error;
use std::io::{BufRead, IsTerminal, Write};

pub use error::InvalidPrefix;
pub use models::{Family, Prefix, PrefixSet};
pub use processing::{aggregate, aggregate_strs, aggregate_with_stats};

/// Read, aggregate and print, as the command line tool does.
///
/// # Arguments
/// * `args` - Parsed command line arguments
/// * `stdin` - Input used when no files (or `-`) are given
/// * `stdout` - Where results are written
/// * `stderr` - Where per-token diagnostics are written
pub fn run<R: BufRead, W: Write, E: Write>(
    args: &Args,
    stdin: R,
    stdout: &mut W,
    stderr: &mut E,
) -> Result<(), Box<dyn Error>> {
    let filter = FilterConfig::from_args(args);
    log::debug!("filter config: {filter:?}");

    let (parsed, read_stats) = input::read_sources(&args.files, stdin, &filter, stderr)?;
    log::info!(
        "Read {} prefixes ({} unique) from {} lines, {} invalid, {} filtered",
        read_stats.accepted,
        parsed.len(),
        read_stats.lines,
        read_stats.invalid,
        read_stats.filtered
    );

    let (aggregated, stats) = aggregate_with_stats(&parsed);
    log::info!(
        "Aggregated {} -> {} prefixes ({} subsumed, {} merges in {} passes)",
        stats.input,
        stats.output,
        stats.subsumed,
        stats.merges,
        stats.passes
    );

    if args.verbose {
        let color = match args.color {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => std::io::stdout().is_terminal(),
        };
        output::write_diff(&parsed, &aggregated, stdout, color)?;
    } else if args.json {
        output::write_json(&aggregated, stdout)?;
    } else {
        output::write_prefixes(&aggregated, stdout)?;
    }

    Ok(())
}
