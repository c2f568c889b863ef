//! Input handling.
//!
//! This module turns input files (or stdin) into a [`PrefixSet`]:
//! - [`reader`] - Tokenizing lines and filtering parsed prefixes

mod reader;

pub use reader::{read_prefixes, ReadStats};

use crate::config::FilterConfig;
use crate::models::PrefixSet;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Read all sources into a fresh [`PrefixSet`].
///
/// # Arguments
/// * `files` - Input files in order; empty or `-` means `stdin`
/// * `stdin` - The standard input stream
/// * `config` - Parsing and filter options
/// * `errors` - Where per-token diagnostics are written
///
/// # Returns
/// * `Ok((PrefixSet, ReadStats))` - The accepted prefixes and read counters
/// * `Err` - If a file cannot be opened or read
pub fn read_sources<R: BufRead, E: Write>(
    files: &[PathBuf],
    mut stdin: R,
    config: &FilterConfig,
    errors: &mut E,
) -> Result<(PrefixSet, ReadStats), Box<dyn Error>> {
    let mut set = PrefixSet::new();
    let mut stats = ReadStats::default();

    if files.is_empty() {
        log::info!("Reading prefixes from stdin");
        stats.merge(read_prefixes(&mut stdin, config, &mut set, errors)?);
        return Ok((set, stats));
    }

    for path in files {
        if path == Path::new("-") {
            log::info!("Reading prefixes from stdin");
            stats.merge(read_prefixes(&mut stdin, config, &mut set, errors)?);
            continue;
        }
        log::info!("Reading prefixes from file: {}", path.display());
        let file = File::open(path)
            .map_err(|e| format!("Error opening input file {}: {e}", path.display()))?;
        let file_stats = read_prefixes(BufReader::new(file), config, &mut set, errors)
            .map_err(|e| format!("{}: {e}", path.display()))?;
        stats.merge(file_stats);
    }

    Ok((set, stats))
}
