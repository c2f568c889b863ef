//! Plain text output.
//!
//! One prefix per line, or a before/after diff in the shared sort order.

use crate::models::PrefixSet;
use colored::Colorize;
use itertools::{EitherOrBoth, Itertools};
use std::io::{self, Write};

/// Write every prefix of `set`, one per line.
pub fn write_prefixes<W: Write>(set: &PrefixSet, out: &mut W) -> io::Result<()> {
    for prefix in set {
        writeln!(out, "{prefix}")?;
    }
    Ok(())
}

/// Write the diff between the input and the aggregated set.
///
/// Lines start with `- ` for removed prefixes, `+ ` for added ones and two
/// spaces for prefixes kept as they were.
///
/// # Arguments
/// * `before` - The set read from input
/// * `after` - The aggregated set
/// * `out` - Where the diff is written
/// * `color` - Color removed lines red and added lines green, whether or not
///   `out` is a terminal
pub fn write_diff<W: Write>(
    before: &PrefixSet,
    after: &PrefixSet,
    out: &mut W,
    color: bool,
) -> io::Result<()> {
    if color {
        // colored otherwise checks the process's own stdout and environment
        colored::control::set_override(true);
    }
    for entry in before.iter().merge_join_by(after.iter(), |a, b| a.cmp(b)) {
        let line = match entry {
            EitherOrBoth::Both(prefix, _) => format!("  {prefix}"),
            EitherOrBoth::Left(prefix) => {
                let line = format!("- {prefix}");
                if color {
                    line.red().to_string()
                } else {
                    line
                }
            }
            EitherOrBoth::Right(prefix) => {
                let line = format!("+ {prefix}");
                if color {
                    line.green().to_string()
                } else {
                    line
                }
            }
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}
