//! Union-find (disjoint set union) used for cycle detection while stepping.
//!
//! Each accepted edge merges two components; an edge whose endpoints already
//! share a root would close a cycle and is skipped. Roots are chosen by rank,
//! and on equal rank the root of the first argument survives.

use crate::error::{Result, StepperError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
            components: node_count,
        }
    }

    pub(crate) const fn components(&self) -> usize {
        self.components
    }

    /// Returns the root of `node` without touching the parent table.
    pub(crate) fn root(&self, node: usize) -> Result<usize> {
        let mut root = node;
        loop {
            let parent = self.parent_of(root)?;
            if parent == root {
                return Ok(root);
            }
            root = parent;
        }
    }

    /// Returns the root of `node`, compressing the path behind it.
    pub(crate) fn find(&mut self, node: usize) -> Result<usize> {
        let root = self.root(node)?;
        let mut current = node;
        while current != root {
            let next = self.parent_of(current)?;
            self.set_parent(current, root)?;
            current = next;
        }

        Ok(root)
    }

    /// Returns `true` when `left` and `right` share a root.
    pub(crate) fn same_component(&self, left: usize, right: usize) -> Result<bool> {
        Ok(self.root(left)? == self.root(right)?)
    }

    /// Merges the components of `left` and `right`.
    ///
    /// Returns `false` when they were already joined.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank_of(left_root)?;
        let right_rank = self.rank_of(right_root)?;
        if left_rank < right_rank {
            self.set_parent(left_root, right_root)?;
        } else {
            self.set_parent(right_root, left_root)?;
            if left_rank == right_rank {
                self.set_rank(left_root, left_rank.saturating_add(1))?;
            }
        }

        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    fn parent_of(&self, node: usize) -> Result<usize> {
        self.parent
            .get(node)
            .copied()
            .ok_or_else(|| self.out_of_range("node must be tracked by the parent table", node))
    }

    fn rank_of(&self, node: usize) -> Result<u32> {
        self.rank
            .get(node)
            .copied()
            .ok_or_else(|| self.out_of_range("node must be tracked by the rank table", node))
    }

    fn set_parent(&mut self, node: usize, parent: usize) -> Result<()> {
        let error = self.out_of_range("node must be tracked by the parent table", node);
        let slot = self.parent.get_mut(node).ok_or(error)?;
        *slot = parent;
        Ok(())
    }

    fn set_rank(&mut self, node: usize, rank: u32) -> Result<()> {
        let error = self.out_of_range("node must be tracked by the rank table", node);
        let slot = self.rank.get_mut(node).ok_or(error)?;
        *slot = rank;
        Ok(())
    }

    fn out_of_range(&self, invariant: &'static str, index: usize) -> StepperError {
        StepperError::InvariantViolation {
            invariant,
            index,
            bound: self.parent.len(),
        }
    }
}
