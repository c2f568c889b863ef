//! Command line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// When to color the verbose diff.
#[derive(ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ColorWhen {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "prefix-aggregate",
    version,
    about = "Aggregate lists of IPv4 and IPv6 prefixes",
    after_help = "Reads prefixes from the given files, or STDIN when none (or '-') is given."
)]
pub struct Args {
    /// Only output IPv4 prefixes
    #[arg(short = '4', long = "ipv4", conflicts_with = "ipv6_only")]
    pub ipv4_only: bool,

    /// Only output IPv6 prefixes
    #[arg(short = '6', long = "ipv6")]
    pub ipv6_only: bool,

    /// Discard prefixes longer than N before processing
    #[arg(short = 'm', long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=128))]
    pub max_length: Option<u8>,

    /// Truncate prefixes with host bits set to their network boundary
    #[arg(short = 't', long)]
    pub truncate: bool,

    /// Show a diff of removed (-) and added (+) prefixes
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print the result as a JSON array
    #[arg(short = 'j', long, conflicts_with = "verbose")]
    pub json: bool,

    /// Color the verbose diff
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// Input files
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_v4() {
        let args = Args::try_parse_from(["prefix-aggregate", "-4"]).unwrap();
        assert!(args.ipv4_only);
        assert!(!args.ipv6_only);
        assert!(args.files.is_empty());
    }

    #[test]
    fn test_args_families_conflict() {
        assert!(Args::try_parse_from(["prefix-aggregate", "-4", "-6"]).is_err());
    }

    #[test]
    fn test_args_max_length() {
        let args = Args::try_parse_from(["prefix-aggregate", "-m", "24", "a.txt", "-"]).unwrap();
        assert_eq!(args.max_length, Some(24));
        assert_eq!(args.files, vec![PathBuf::from("a.txt"), PathBuf::from("-")]);
        assert!(Args::try_parse_from(["prefix-aggregate", "-m", "129"]).is_err());
        assert!(Args::try_parse_from(["prefix-aggregate", "-m", "x"]).is_err());
    }

    #[test]
    fn test_args_flags() {
        let args = Args::try_parse_from(["prefix-aggregate", "-t", "-v", "--color", "never"]).unwrap();
        assert!(args.truncate);
        assert!(args.verbose);
        assert_eq!(args.color, ColorWhen::Never);
        assert!(Args::try_parse_from(["prefix-aggregate", "-v", "-j"]).is_err());
    }

    #[test]
    fn test_args_version() {
        let err = Args::try_parse_from(["prefix-aggregate", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
