//! Integration tests for prefix-aggregate
//!
//! These tests drive the complete workflow from reading input to printing the
//! aggregated result.

use clap::Parser;
use prefix_aggregate::{aggregate_strs, args::Args, run, InvalidPrefix};
use std::io::Cursor;

/// Run with the given arguments and stdin; returns (stdout, stderr).
fn run_with(argv: &[&str], stdin: &str) -> (String, String) {
    let mut full = vec!["prefix-aggregate"];
    full.extend_from_slice(argv);
    let args = Args::try_parse_from(full).expect("Failed to parse arguments");

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    run(&args, Cursor::new(stdin), &mut stdout, &mut stderr).expect("Run failed");
    (
        String::from_utf8(stdout).unwrap(),
        String::from_utf8(stderr).unwrap(),
    )
}

#[test]
fn test_library_aggregate() {
    assert_eq!(
        aggregate_strs(&["10.0.0.0/8", "10.0.0.0/24"]).unwrap(),
        vec!["10.0.0.0/8"]
    );
    assert!(matches!(
        aggregate_strs(&["this_is_no_prefix", "10.0.0.0/24"]),
        Err(InvalidPrefix::Syntax(_))
    ));
}

#[test]
fn test_stdin_lines() {
    let (out, err) = run_with(&[], "1.1.1.24/29\n1.1.1.0/24\n1.1.1.1/32\n1.1.0.0/24\n\n");
    assert_eq!(out, "1.1.0.0/23\n");
    assert!(err.is_empty());
}

#[test]
fn test_ipv6_only() {
    let (out, _) = run_with(&["-6"], "2001:db8::/32\n2001:db8::/128\n10.0.0.0/8\n");
    assert_eq!(out, "2001:db8::/32\n");
}

#[test]
fn test_ipv4_only_with_invalid_token() {
    let (out, err) = run_with(
        &["-4"],
        "not_a_prefix\n2001:db8::/32\n2001:db8::/128\n10.0.0.0/8\n10.1.2.3/32",
    );
    assert_eq!(out, "10.0.0.0/8\n");
    assert_eq!(
        err,
        "ERROR: 'not_a_prefix' is not a valid IP network, ignoring.\n"
    );
}

#[test]
fn test_space_in_stdin() {
    let (out, _) = run_with(&["-6"], "2001:db8::/32 2001:db8::/128\n10.0.0.0/8\n");
    assert_eq!(out, "2001:db8::/32\n");
}

#[test]
fn test_truncate() {
    let (out, err) = run_with(&["-t"], "2001:db8::1/32 2001:db9::1/32\n10.5.5.5/8\n");
    assert_eq!(out, "10.0.0.0/8\n2001:db8::/31\n");
    assert!(err.is_empty());
}

#[test]
fn test_host_bits_without_truncate() {
    let (out, err) = run_with(&[], "10.5.5.5/8 11.0.0.0/8\n");
    assert_eq!(out, "11.0.0.0/8\n");
    assert_eq!(err, "ERROR: '10.5.5.5/8' is not a valid IP network, ignoring.\n");
}

#[test]
fn test_max_length() {
    let (out, _) = run_with(&["-m", "24"], "10.0.0.0/24 10.0.1.0/25 10.0.1.128/25\n");
    assert_eq!(out, "10.0.0.0/24\n");
}

#[test]
fn test_verbose() {
    let (out, _) = run_with(
        &["-v", "--color", "never"],
        "10.0.0.0/24 10.0.1.0/24 172.16.0.0/24 10.0.0.0/32\n",
    );
    assert_eq!(
        out,
        "+ 10.0.0.0/23\n- 10.0.0.0/24\n- 10.0.0.0/32\n- 10.0.1.0/24\n  172.16.0.0/24\n"
    );
}

#[test]
fn test_verbose_color_always() {
    let (out, _) = run_with(&["-v", "--color", "always"], "10.0.0.0/8 11.0.0.0/8\n");
    assert!(out.contains("\x1b[32m+ 10.0.0.0/7\x1b[0m"));
    assert!(out.contains("\x1b[31m- 10.0.0.0/8\x1b[0m"));
    assert!(out.contains("\x1b[31m- 11.0.0.0/8\x1b[0m"));
}

#[test]
fn test_json() {
    let (out, _) = run_with(&["-j"], "10.0.0.0/8 11.0.0.0/8 ::/0\n");
    let parsed: Vec<String> = serde_json::from_str(&out).expect("Invalid JSON output");
    assert_eq!(parsed, vec!["10.0.0.0/7", "::/0"]);
}

#[test]
fn test_empty_input() {
    let (out, err) = run_with(&[], "\n\n");
    assert!(out.is_empty());
    assert!(err.is_empty());
}

#[test]
fn test_files() {
    let (out, err) = run_with(
        &[
            "src/tests/test_data/prefixes_01.txt",
            "src/tests/test_data/prefixes_02.txt",
        ],
        "",
    );
    assert_eq!(
        out,
        "1.1.0.0/23\n10.0.0.0/8\n192.0.2.0/24\n198.51.100.7/32\n2001:db8::/32\n"
    );
    assert_eq!(
        err,
        "ERROR: 'not_a_prefix' is not a valid IP network, ignoring.\n"
    );
}

#[test]
fn test_files_and_stdin() {
    let (out, _) = run_with(&["src/tests/test_data/prefixes_01.txt", "-"], "1.1.2.0/23\n");
    assert_eq!(out, "1.1.0.0/22\n");
}

#[test]
fn test_missing_file() {
    let args = Args::try_parse_from(["prefix-aggregate", "src/tests/test_data/missing.txt"])
        .expect("Failed to parse arguments");
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let result = run(&args, Cursor::new(""), &mut stdout, &mut stderr);
    assert!(result.is_err());
    assert!(stdout.is_empty());
}
