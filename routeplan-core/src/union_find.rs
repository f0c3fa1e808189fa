//! Union-find (disjoint set union) keyed by point name.
//!
//! Point names are interned into dense indices on first sight so the parent
//! and rank tables stay plain vectors. A fresh [`DisjointSet`] is built for
//! every network construction; nothing is shared between calls.

use std::collections::HashMap;

use crate::connection::PointName;

/// Tracks which points belong to the same connected component.
///
/// # Examples
/// ```
/// use routeplan_core::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// set.insert("A");
/// set.insert("B");
/// set.insert("C");
/// assert_eq!(set.components(), 3);
/// assert!(set.union("A", "B"));
/// assert!(!set.union("B", "A"));
/// assert!(set.connected("A", "B"));
/// assert!(!set.connected("A", "C"));
/// assert_eq!(set.components(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    index: HashMap<PointName, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `point` as a singleton component if it is not already present and
    /// returns its dense index.
    pub fn insert(&mut self, point: impl Into<PointName>) -> usize {
        let point = point.into();
        if let Some(&existing) = self.index.get(&point) {
            return existing;
        }
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        self.index.insert(point, id);
        self.components += 1;
        id
    }

    /// Returns the number of points tracked by the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no points have been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the index of the component root holding `point`, or `None`
    /// for an unknown point.
    pub fn find(&mut self, point: &str) -> Option<usize> {
        let id = *self.index.get(point)?;
        Some(self.find_root(id))
    }

    /// Returns `true` when both points are known and share a component.
    pub fn connected(&mut self, left: &str, right: &str) -> bool {
        match (self.find(left), self.find(right)) {
            (Some(left_root), Some(right_root)) => left_root == right_root,
            _ => false,
        }
    }

    /// Merges the components holding `left` and `right`, inserting either
    /// point first when unknown.
    ///
    /// Returns `false` when both already share a component.
    pub fn union(&mut self, left: impl Into<PointName>, right: impl Into<PointName>) -> bool {
        let left = self.insert(left);
        let right = self.insert(right);
        self.union_indices(left, right)
    }

    pub(crate) fn union_indices(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find_root(left);
        let right_root = self.find_root(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);
        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u8,
    right_rank: u8,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }

    // Equal ranks: the older root wins.
    if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}
