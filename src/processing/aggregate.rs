//! Prefix aggregation.
//!
//! Reduces a [`PrefixSet`] to the smallest set covering the same addresses in
//! two phases: first every prefix already covered by a broader one is dropped,
//! then sibling pairs are merged into their parent, pass after pass, until a
//! pass merges nothing. Every phase reads one set and builds a fresh one.

use crate::error::InvalidPrefix;
use crate::models::{Prefix, PrefixSet};

/// Counters collected while aggregating.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AggregateStats {
    /// Prefixes in the input set.
    pub input: usize,
    /// Prefixes dropped because a broader prefix covers them.
    pub subsumed: usize,
    /// Sibling pairs merged into their parent, over all passes.
    pub merges: usize,
    /// Merge passes run, the final pass without merges included.
    pub passes: usize,
    /// Prefixes in the result.
    pub output: usize,
}

enum State {
    Phase1Done(PrefixSet),
    Phase2Pass { set: PrefixSet, pass: usize },
    Converged(PrefixSet),
}

/// Aggregate a set of prefixes. The input is left untouched.
pub fn aggregate(input: &PrefixSet) -> PrefixSet {
    aggregate_with_stats(input).0
}

/// Aggregate a set of prefixes and report what was done.
pub fn aggregate_with_stats(input: &PrefixSet) -> (PrefixSet, AggregateStats) {
    let mut stats = AggregateStats {
        input: input.len(),
        ..Default::default()
    };
    let mut state = State::Phase1Done(remove_covered(input));

    loop {
        state = match state {
            State::Phase1Done(set) => {
                stats.subsumed = input.len() - set.len();
                log::debug!(
                    "phase 1: removed {} covered prefixes, {} left",
                    stats.subsumed,
                    set.len()
                );
                if set.len() <= 1 {
                    State::Converged(set)
                } else {
                    State::Phase2Pass { set, pass: 1 }
                }
            }
            State::Phase2Pass { set, pass } => {
                let (merged, merges) = merge_siblings(&set);
                stats.passes = pass;
                stats.merges += merges;
                log::debug!(
                    "phase 2 pass #{pass}: {merges} merges, {} -> {} prefixes",
                    set.len(),
                    merged.len()
                );
                if merges == 0 {
                    State::Converged(set)
                } else {
                    State::Phase2Pass {
                        set: merged,
                        pass: pass + 1,
                    }
                }
            }
            State::Converged(set) => {
                stats.output = set.len();
                return (set, stats);
            }
        };
    }
}

/// Phase 1: keep only prefixes not covered by another, broader prefix.
pub fn remove_covered(set: &PrefixSet) -> PrefixSet {
    set.iter()
        .filter(|prefix| set.worst_match(prefix) == Some(*prefix))
        .collect()
}

/// Phase 2: one merge pass. Returns the new set and the number of sibling
/// pairs replaced by their parent.
pub fn merge_siblings(set: &PrefixSet) -> (PrefixSet, usize) {
    let mut merged = PrefixSet::new();
    let mut merges = 0;

    for prefix in set {
        match mergeable_parent(set, &prefix) {
            Some(parent) => {
                // both siblings map to the same parent, count it once
                if merged.insert(parent) {
                    merges += 1;
                }
            }
            None => {
                merged.insert(prefix);
            }
        }
    }

    (merged, merges)
}

/// The parent of `prefix` when it holds exactly `prefix` and its sibling and
/// nothing else.
fn mergeable_parent(set: &PrefixSet, prefix: &Prefix) -> Option<Prefix> {
    let parent = prefix.parent()?;
    match set.covered_by_limit(&parent, 3).as_slice() {
        [a, b] if a.length() == prefix.length() && b.length() == prefix.length() => Some(parent),
        _ => None,
    }
}

/// Aggregate a list of prefix strings.
///
/// Every string is parsed strictly; the first invalid one aborts the whole
/// call.
///
/// # Examples
/// ```
/// use prefix_aggregate::aggregate_strs;
/// assert_eq!(
///     aggregate_strs(&["10.0.0.0/8", "10.0.0.0/24"]).unwrap(),
///     vec!["10.0.0.0/8"]
/// );
/// ```
pub fn aggregate_strs(prefixes: &[&str]) -> Result<Vec<String>, InvalidPrefix> {
    let set = prefixes
        .iter()
        .map(|item| {
            item.parse::<Prefix>().map_err(|e| {
                log::error!("invalid IP prefix: {item}");
                e
            })
        })
        .collect::<Result<PrefixSet, _>>()?;

    Ok(aggregate(&set).iter().map(|p| p.to_string()).collect())
}
