// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of selected nodes.

use alloc::collections::BTreeSet;
use alloc::collections::btree_set;

use flow_patch::NodeIndex;

/// Selected node indices, owned by the editor session and independent of the patch.
///
/// Like every [`NodeIndex`], entries are only meaningful for the patch they were
/// taken from.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    nodes: BTreeSet<NodeIndex>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection holding exactly `index`.
    pub fn single(index: NodeIndex) -> Self {
        let mut nodes = BTreeSet::new();
        nodes.insert(index);
        Self { nodes }
    }

    /// Whether `index` is selected.
    pub fn contains(&self, index: NodeIndex) -> bool {
        self.nodes.contains(&index)
    }

    /// Add `index`. Returns `false` if it was already selected.
    pub fn insert(&mut self, index: NodeIndex) -> bool {
        self.nodes.insert(index)
    }

    /// Remove `index`. Returns `false` if it was not selected.
    pub fn remove(&mut self, index: NodeIndex) -> bool {
        self.nodes.remove(&index)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Number of selected nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, NodeIndex> {
        self.nodes.iter()
    }

    /// Borrow the underlying set.
    pub fn as_set(&self) -> &BTreeSet<NodeIndex> {
        &self.nodes
    }
}

impl FromIterator<NodeIndex> for Selection {
    fn from_iter<I: IntoIterator<Item = NodeIndex>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeSet<NodeIndex>> for Selection {
    fn from(nodes: BTreeSet<NodeIndex>) -> Self {
        Self { nodes }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a NodeIndex;
    type IntoIter = btree_set::Iter<'a, NodeIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn single_and_membership() {
        let s = Selection::single(3);
        assert!(s.contains(3));
        assert!(!s.contains(0));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn collects_in_ascending_order_without_duplicates() {
        let s: Selection = [4, 1, 4, 2].into_iter().collect();
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), [1, 2, 4]);
    }

    #[test]
    fn insert_remove_clear() {
        let mut s = Selection::new();
        assert!(s.insert(1));
        assert!(!s.insert(1), "second insert is a no-op");
        assert!(s.remove(1));
        assert!(!s.remove(1));
        s.insert(5);
        s.clear();
        assert!(s.is_empty());
    }
}
