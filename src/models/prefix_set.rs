//! Trie-backed set of unique prefixes.
//!
//! Each family has its own binary trie. The path from the root to a node
//! spells the leading bits of the addresses below it; a node carries a
//! [`Prefix`] when that exact prefix was inserted. Children are owned by their
//! parent, so parents are found by masking the address, never by walking up.

use super::{Family, Prefix};
use crate::error::InvalidPrefix;

#[derive(Debug, Default, Clone)]
struct Node {
    prefix: Option<Prefix>,
    children: [Option<Box<Node>>; 2],
}

/// A set of unique prefixes with trie-shaped queries.
///
/// Iteration yields IPv4 before IPv6, then ascending address, then ascending
/// length.
#[derive(Debug, Default, Clone)]
pub struct PrefixSet {
    v4: Node,
    v6: Node,
    count: usize,
}

impl PrefixSet {
    pub fn new() -> Self {
        Default::default()
    }

    /// Build a set from raw `(family, address, length)` triples.
    ///
    /// Every valid triple is inserted, host bits masked. Invalid triples are
    /// returned so the caller can decide whether to skip them or abort.
    pub fn build<I>(triples: I) -> (PrefixSet, Vec<InvalidPrefix>)
    where
        I: IntoIterator<Item = (Family, u128, u8)>,
    {
        let mut set = PrefixSet::new();
        let mut errors = Vec::new();
        for (family, addr, len) in triples {
            if let Err(e) = set.try_insert(family, addr, len) {
                log::debug!("skipping invalid prefix: {e}");
                errors.push(e);
            }
        }
        (set, errors)
    }

    fn root(&self, family: Family) -> &Node {
        match family {
            Family::V4 => &self.v4,
            Family::V6 => &self.v6,
        }
    }

    fn root_mut(&mut self, family: Family) -> &mut Node {
        match family {
            Family::V4 => &mut self.v4,
            Family::V6 => &mut self.v6,
        }
    }

    /// Insert a prefix. Returns `false` if it was already present.
    pub fn insert(&mut self, prefix: Prefix) -> bool {
        let mut node = self.root_mut(prefix.family());
        for i in 0..prefix.length() {
            let bit = prefix.bit(i) as usize;
            node = node.children[bit].get_or_insert_with(Box::default).as_mut();
        }
        if node.prefix.is_some() {
            return false;
        }
        node.prefix = Some(prefix);
        self.count += 1;
        true
    }

    /// Insert from raw parts, masking host bits.
    pub fn try_insert(&mut self, family: Family, addr: u128, len: u8) -> Result<bool, InvalidPrefix> {
        Ok(self.insert(Prefix::new(family, addr, len)?))
    }

    /// The node at exactly `prefix`'s position, if the path exists.
    fn find(&self, prefix: &Prefix) -> Option<&Node> {
        let mut node = self.root(prefix.family());
        for i in 0..prefix.length() {
            node = node.children[prefix.bit(i) as usize].as_deref()?;
        }
        Some(node)
    }

    pub fn contains(&self, prefix: &Prefix) -> bool {
        self.find(prefix).is_some_and(|node| node.prefix.is_some())
    }

    /// The least specific stored prefix covering `prefix` (ancestor-or-self).
    pub fn worst_match(&self, prefix: &Prefix) -> Option<Prefix> {
        let mut node = self.root(prefix.family());
        for i in 0..prefix.length() {
            if node.prefix.is_some() {
                return node.prefix;
            }
            node = node.children[prefix.bit(i) as usize].as_deref()?;
        }
        node.prefix
    }

    /// The most specific stored prefix covering `prefix` (ancestor-or-self).
    pub fn best_match(&self, prefix: &Prefix) -> Option<Prefix> {
        let mut node = self.root(prefix.family());
        let mut best = node.prefix;
        for i in 0..prefix.length() {
            match node.children[prefix.bit(i) as usize].as_deref() {
                Some(child) => {
                    node = child;
                    best = node.prefix.or(best);
                }
                None => break,
            }
        }
        best
    }

    /// Every stored prefix inside `prefix`'s range, `prefix` itself included,
    /// in ascending order.
    pub fn covered_by(&self, prefix: &Prefix) -> Vec<Prefix> {
        self.covered_by_limit(prefix, usize::MAX)
    }

    /// Like [`covered_by`](Self::covered_by) but stops after `limit` entries.
    pub(crate) fn covered_by_limit(&self, prefix: &Prefix, limit: usize) -> Vec<Prefix> {
        match self.find(prefix) {
            Some(node) => Iter { stack: vec![node] }.take(limit).collect(),
            None => Vec::new(),
        }
    }

    /// All stored prefixes in ascending order.
    pub fn entries(&self) -> Vec<Prefix> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![&self.v6, &self.v4],
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Pre-order walk: a node's own prefix, then its 0 subtree, then its 1
/// subtree. That order is ascending by address, then by length.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Prefix;

    fn next(&mut self) -> Option<Prefix> {
        while let Some(node) = self.stack.pop() {
            if let Some(one) = node.children[1].as_deref() {
                self.stack.push(one);
            }
            if let Some(zero) = node.children[0].as_deref() {
                self.stack.push(zero);
            }
            if node.prefix.is_some() {
                return node.prefix;
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a PrefixSet {
    type Item = Prefix;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<Prefix> for PrefixSet {
    fn from_iter<I: IntoIterator<Item = Prefix>>(iter: I) -> Self {
        let mut set = PrefixSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Prefix> for PrefixSet {
    fn extend<I: IntoIterator<Item = Prefix>>(&mut self, iter: I) {
        for prefix in iter {
            self.insert(prefix);
        }
    }
}

impl PartialEq for PrefixSet {
    fn eq(&self, other: &PrefixSet) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for PrefixSet {}
