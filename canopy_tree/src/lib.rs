// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Tree: structural ancestry queries over host node trees.
//!
//! ## Overview
//!
//! Event normalization repeatedly needs one structural question answered:
//! does this node sit inside that node's subtree? This crate answers it
//! without owning the tree. The host exposes its structure through a
//! [`ParentLookup`] and the queries walk parent links on every call, so a
//! tree that mutates between events never serves stale answers.
//!
//! - [`contains`] — is `other` the node itself or one of its descendants?
//! - [`has_ancestor_in_set`] — does any member of a node set strictly
//!   contain the element?
//!
//! Node identity is a host-chosen key `K` (any small `Copy + Eq` handle),
//! following the convention of the other Canopy crates. The queries are
//! agnostic to what a key denotes — element, text node, or anything else
//! the host tracks.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_tree::{ParentMap, contains};
//!
//! // root(1) → child(2) → grandchild(3), detached(9)
//! let mut parents: ParentMap<u32> = ParentMap::new();
//! parents.insert(2, 1);
//! parents.insert(3, 2);
//!
//! assert!(contains(1, Some(3), &parents));
//! assert!(contains(1, Some(1), &parents));
//! assert!(!contains(1, Some(9), &parents));
//! assert!(!contains(1, None, &parents));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use hashbrown::HashMap;

/// Read-only parent access into the host's node tree.
///
/// Implementations must report the current parent of a node, or `None` for
/// roots and nodes the host no longer tracks. Queries in this crate walk
/// `parent_of` links to the root; the host is responsible for keeping the
/// ancestry acyclic.
pub trait ParentLookup<K> {
    /// Return the parent of `node`, if it has one.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A map-backed [`ParentLookup`] for hosts without their own tree storage.
///
/// Stores child→parent edges. Nodes with no entry are roots (or detached),
/// which is exactly how [`contains`] treats nodes with no recorded
/// relationship.
#[derive(Clone, Debug, Default)]
pub struct ParentMap<K> {
    edges: HashMap<K, K>,
}

impl<K: Copy + Eq + core::hash::Hash> ParentMap<K> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Record `parent` as the parent of `child`, replacing any previous edge.
    pub fn insert(&mut self, child: K, parent: K) {
        self.edges.insert(child, parent);
    }

    /// Detach `child` from its parent. Returns the old parent, if any.
    pub fn remove(&mut self, child: &K) -> Option<K> {
        self.edges.remove(child)
    }

    /// Number of recorded child→parent edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if no edges are recorded.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<K: Copy + Eq + core::hash::Hash> ParentLookup<K> for ParentMap<K> {
    fn parent_of(&self, node: &K) -> Option<K> {
        self.edges.get(node).copied()
    }
}

impl<K, L: ParentLookup<K>> ParentLookup<K> for &L {
    fn parent_of(&self, node: &K) -> Option<K> {
        (**self).parent_of(node)
    }
}

/// Determine whether `other` is contained within `node`'s subtree.
///
/// Returns `false` when `other` is `None`. Returns `true` iff `other` is
/// `node` itself or a descendant of `node` under the current parent links.
/// Nodes with no tree relationship — detached subtrees, foreign roots —
/// simply yield `false`.
///
/// The walk is recomputed on every call; nothing is cached, so the answer
/// always reflects the tree as the host reports it right now.
pub fn contains<K: Copy + Eq>(node: K, other: Option<K>, parents: &impl ParentLookup<K>) -> bool {
    let Some(mut cur) = other else {
        return false;
    };
    // Ascend from `other`; the host keeps ancestry acyclic.
    loop {
        if cur == node {
            return true;
        }
        match parents.parent_of(&cur) {
            Some(p) => cur = p,
            None => return false,
        }
    }
}

/// Determine whether any member of `set` is a strict ancestor of `element`.
///
/// A member equal to `element` is skipped: only containment from above
/// counts. Used to decide whether an element already lives under one of a
/// set of broadcast roots.
///
/// ```
/// use canopy_tree::{ParentMap, has_ancestor_in_set};
///
/// let mut parents: ParentMap<u32> = ParentMap::new();
/// parents.insert(2, 1);
///
/// assert!(has_ancestor_in_set(2, &[1], &parents));
/// // The element itself never counts as its own ancestor.
/// assert!(!has_ancestor_in_set(2, &[2], &parents));
/// ```
pub fn has_ancestor_in_set<K: Copy + Eq>(
    element: K,
    set: &[K],
    parents: &impl ParentLookup<K>,
) -> bool {
    set.iter()
        .any(|&member| member != element && contains(member, Some(element), parents))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root(1) → a(2) → b(3); root(1) → c(4); detached(7) → d(8)
    fn fixture() -> ParentMap<u32> {
        let mut parents = ParentMap::new();
        parents.insert(2, 1);
        parents.insert(3, 2);
        parents.insert(4, 1);
        parents.insert(8, 7);
        parents
    }

    #[test]
    fn null_other_is_never_contained() {
        let parents = fixture();
        assert!(!contains(1, None, &parents));
    }

    #[test]
    fn node_contains_itself() {
        let parents = fixture();
        for n in [1, 2, 3, 4, 7, 8] {
            assert!(contains(n, Some(n), &parents));
        }
    }

    #[test]
    fn containment_spans_multiple_levels() {
        let parents = fixture();
        assert!(contains(1, Some(3), &parents));
        assert!(contains(2, Some(3), &parents));
        assert!(!contains(3, Some(1), &parents));
    }

    #[test]
    fn siblings_do_not_contain_each_other() {
        let parents = fixture();
        assert!(!contains(2, Some(4), &parents));
        assert!(!contains(4, Some(2), &parents));
    }

    #[test]
    fn unrelated_trees_report_false_not_error() {
        let parents = fixture();
        assert!(!contains(1, Some(8), &parents));
        assert!(!contains(7, Some(3), &parents));
    }

    #[test]
    fn containment_tracks_tree_mutation() {
        let mut parents = fixture();
        assert!(!contains(4, Some(3), &parents));
        // Reparent b(3) under c(4); the next query must see the new shape.
        parents.insert(3, 4);
        assert!(contains(4, Some(3), &parents));
        assert!(!contains(2, Some(3), &parents));
    }

    #[test]
    fn ancestor_set_finds_strict_ancestors_only() {
        let parents = fixture();
        assert!(has_ancestor_in_set(3, &[1], &parents));
        assert!(has_ancestor_in_set(3, &[4, 2], &parents));
        // Only the element itself in the set: no strict ancestor.
        assert!(!has_ancestor_in_set(3, &[3], &parents));
        // Siblings and descendants are not ancestors.
        assert!(!has_ancestor_in_set(2, &[4, 3], &parents));
        assert!(!has_ancestor_in_set(3, &[], &parents));
    }

    #[test]
    fn ancestor_set_ignores_self_but_honors_other_members() {
        let parents = fixture();
        // 3 appears in the set, but 1 still strictly contains it.
        assert!(has_ancestor_in_set(3, &[3, 1], &parents));
    }

    #[test]
    fn parent_map_insert_remove() {
        let mut parents: ParentMap<u32> = ParentMap::new();
        assert!(parents.is_empty());
        parents.insert(2, 1);
        assert_eq!(parents.len(), 1);
        assert_eq!(parents.parent_of(&2), Some(1));
        assert_eq!(parents.remove(&2), Some(1));
        assert_eq!(parents.parent_of(&2), None);
    }
}
