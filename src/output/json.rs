//! JSON output.

use crate::models::PrefixSet;
use std::error::Error;
use std::io::Write;

/// Write `set` as a pretty-printed JSON array of prefix strings.
pub fn write_json<W: Write>(set: &PrefixSet, out: &mut W) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, &set.entries())
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    writeln!(out)?;
    Ok(())
}
