//! Rooted trees on mode indices and the index set encoding they induce.

use crate::scheme::{index_set_majoranas, EncodingScheme, MajoranaEncoding};
use bitree::{lowest_set_bit, IndexSet};
use derive_more::{Display, Error};
use fermimer::PauliRegister;
use std::iter::successors;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub index: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// A rooted tree whose nodes are the indices `0..len`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EncodingTree {
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[display("tree has no root")]
    NoRoot,
    #[display("tree has more than one root")]
    MultipleRoots,
    #[display("parent {parent} of node {node} is out of range")]
    ParentOutOfRange { node: usize, parent: usize },
    #[display("node {node} is its own parent")]
    SelfParent { node: usize },
    #[display("node {node} is on a cycle")]
    Cycle { node: usize },
}

impl EncodingTree {
    /// Tree where node `k` has parent `parents[k]`, with `None` marking the root.
    pub fn from_parents(parents: &[Option<usize>]) -> Result<EncodingTree, TreeError> {
        let size = parents.len();
        for (node, parent) in parents.iter().enumerate() {
            match *parent {
                Some(parent) if parent == node => return Err(TreeError::SelfParent { node }),
                Some(parent) if parent >= size => return Err(TreeError::ParentOutOfRange { node, parent }),
                _ => {}
            }
        }
        let root_count = parents.iter().filter(|parent| parent.is_none()).count();
        if size > 0 && root_count == 0 {
            return Err(TreeError::NoRoot);
        }
        if root_count > 1 {
            return Err(TreeError::MultipleRoots);
        }
        for node in 0..size {
            // Any path longer than the node count revisits a node.
            let path_length = successors(Some(node), |&current| parents[current]).take(size + 1).count();
            if path_length > size {
                return Err(TreeError::Cycle { node });
            }
        }
        Ok(EncodingTree::from_valid_parents(parents))
    }

    fn from_valid_parents(parents: &[Option<usize>]) -> EncodingTree {
        let mut nodes: Vec<TreeNode> = parents
            .iter()
            .enumerate()
            .map(|(index, &parent)| TreeNode {
                index,
                parent,
                children: Vec::new(),
            })
            .collect();
        for (index, parent) in parents.iter().enumerate() {
            if let Some(parent) = *parent {
                nodes[parent].children.push(index);
            }
        }
        let root = parents.iter().position(Option::is_none);
        EncodingTree { nodes, root }
    }

    /// Every node other than `root` is a child of `root`.
    pub fn star(size: usize, root: usize) -> Result<EncodingTree, TreeError> {
        let parents: Vec<Option<usize>> = (0..size).map(|node| (node != root).then_some(root)).collect();
        EncodingTree::from_parents(&parents)
    }

    /// Path in which node `k` is the parent of node `k - 1`.
    pub fn chain(size: usize) -> EncodingTree {
        let parents: Vec<Option<usize>> = (0..size).map(|node| (node + 1 < size).then_some(node + 1)).collect();
        EncodingTree::from_valid_parents(&parents)
    }

    /// Heap layout: node `k` has children `2k + 1` and `2k + 2`.
    pub fn balanced_binary(size: usize) -> EncodingTree {
        let parents: Vec<Option<usize>> = (0..size).map(|node| node.checked_sub(1).map(|shifted| shifted / 2)).collect();
        EncodingTree::from_valid_parents(&parents)
    }

    /// Shape of a Fenwick tree, where node `k` has parent `k + lowest_set_bit(k + 1)`.
    ///
    /// Nodes whose Fenwick parent lies past the end hang off the last node, which is the root.
    pub fn fenwick(size: usize) -> EncodingTree {
        let parents: Vec<Option<usize>> = (0..size)
            .map(|node| {
                if node + 1 == size {
                    return None;
                }
                let parent = node + lowest_set_bit(node + 1);
                Some(if parent < size { parent } else { size - 1 })
            })
            .collect();
        EncodingTree::from_valid_parents(&parents)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    #[must_use]
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.nodes.get(node).and_then(|node| node.parent)
    }

    pub fn children(&self, node: usize) -> &[usize] {
        self.nodes.get(node).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    /// Strict ancestors of `node`, nearest first.
    pub fn ancestors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        successors(self.parent(node), |&current| self.parent(current))
    }

    /// Strict descendants of `node`.
    pub fn descendants(&self, node: usize) -> IndexSet {
        let mut descendants = IndexSet::new();
        let mut pending: Vec<usize> = self.children(node).to_vec();
        while let Some(current) = pending.pop() {
            descendants.insert(current);
            pending.extend_from_slice(self.children(current));
        }
        descendants
    }

    /// Number of edges on the longest root to leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        (0..self.len()).map(|node| self.ancestors(node).count()).max().unwrap_or(0)
    }

    #[must_use]
    pub fn is_star(&self) -> bool {
        self.depth() <= 1
    }

    /// Every parent has a larger index than its children.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.nodes
            .iter()
            .all(|node| node.parent.map_or(true, |parent| parent > node.index))
    }
}

/// Index sets read off an [`EncodingTree`].
///
/// The update set of mode `j` is its ancestors and the occupation set is `j` with its descendants.
/// The parity set holds the descendants of `j` and the lower-indexed children of its ancestors.
/// The resulting Majorana strings anticommute only when the tree is a star.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeEncoding {
    tree: EncodingTree,
}

impl TreeEncoding {
    pub fn new(tree: EncodingTree) -> Self {
        if !tree.is_star() {
            debug!(
                size = tree.len(),
                depth = tree.depth(),
                "tree encoding of a non-star tree does not satisfy the anticommutation relations"
            );
        }
        TreeEncoding { tree }
    }

    pub fn tree(&self) -> &EncodingTree {
        &self.tree
    }
}

impl EncodingScheme for TreeEncoding {
    /// Ancestors of `mode` that fit in the register.
    fn update_set(&self, mode: usize, qubit_count: usize) -> IndexSet {
        self.tree.ancestors(mode).filter(|&ancestor| ancestor < qubit_count).collect()
    }

    fn parity_set(&self, mode: usize) -> IndexSet {
        let ancestors: IndexSet = self.tree.ancestors(mode).collect();
        let mut parity = self.tree.descendants(mode);
        for ancestor in &ancestors {
            parity.extend(self.tree.children(ancestor).iter().copied().filter(|&child| child < mode));
        }
        parity.remove(mode);
        &parity - &ancestors
    }

    fn occupation_set(&self, mode: usize) -> IndexSet {
        let mut occupation = self.tree.descendants(mode);
        occupation.insert(mode);
        occupation
    }
}

/// Only modes below the tree length encode. Nodes at or past `qubit_count` are left out of every string.
impl MajoranaEncoding for TreeEncoding {
    fn majoranas(&self, mode: usize, qubit_count: usize) -> Option<(PauliRegister, PauliRegister)> {
        if mode >= self.tree.len() {
            return None;
        }
        index_set_majoranas(self, mode, qubit_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let chain = EncodingTree::chain(4);
        assert_eq!(chain.root(), Some(3));
        assert_eq!(chain.ancestors(0).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(chain.is_monotonic());
        assert_eq!(chain.depth(), 3);

        let binary = EncodingTree::balanced_binary(7);
        assert_eq!(binary.children(0), &[1, 2]);
        assert_eq!(binary.children(2), &[5, 6]);
        assert_eq!(binary.depth(), 2);
        assert!(!binary.is_monotonic());

        let fenwick = EncodingTree::fenwick(8);
        assert_eq!(fenwick.children(7), &[3, 5, 6]);
        assert_eq!(fenwick.children(3), &[1, 2]);
        assert!(fenwick.is_monotonic());

        let uneven = EncodingTree::fenwick(6);
        assert_eq!(uneven.parent(3), Some(5));
        assert_eq!(uneven.root(), Some(5));

        assert!(EncodingTree::chain(0).is_empty());
        assert_eq!(EncodingTree::chain(0).root(), None);
    }

    #[test]
    fn invalid_parents() {
        assert_eq!(EncodingTree::from_parents(&[Some(1), Some(0)]), Err(TreeError::NoRoot));
        assert_eq!(EncodingTree::from_parents(&[None, None]), Err(TreeError::MultipleRoots));
        assert_eq!(
            EncodingTree::from_parents(&[None, Some(4)]),
            Err(TreeError::ParentOutOfRange { node: 1, parent: 4 })
        );
        assert_eq!(EncodingTree::from_parents(&[None, Some(1)]), Err(TreeError::SelfParent { node: 1 }));
        assert_eq!(
            EncodingTree::from_parents(&[None, Some(2), Some(1)]),
            Err(TreeError::Cycle { node: 1 })
        );
        assert_eq!(EncodingTree::star(3, 5), Err(TreeError::ParentOutOfRange { node: 0, parent: 5 }));
        assert_eq!(EncodingTree::from_parents(&[]), Ok(EncodingTree::default()));
    }

    #[test]
    fn star_index_sets() {
        let encoding = TreeEncoding::new(EncodingTree::star(4, 3).unwrap_or_default());
        assert_eq!(encoding.update_set(1, 4), IndexSet::singleton(3));
        assert_eq!(encoding.parity_set(1), IndexSet::singleton(0));
        assert_eq!(encoding.occupation_set(1), IndexSet::singleton(1));
        assert_eq!(encoding.update_set(3, 4), IndexSet::new());
        assert_eq!(encoding.parity_set(3), IndexSet::range(0, 3));
        assert_eq!(encoding.occupation_set(3), IndexSet::range(0, 4));
        assert!(encoding.majoranas(4, 5).is_none());
    }

    #[test]
    fn update_set_is_clipped_to_register() {
        let encoding = TreeEncoding::new(EncodingTree::star(4, 3).unwrap());
        assert_eq!(encoding.update_set(0, 3), IndexSet::new());
        assert_eq!(encoding.update_set(0, 4), IndexSet::singleton(3));
        let chain = TreeEncoding::new(EncodingTree::chain(5));
        assert_eq!(chain.update_set(0, 3), IndexSet::range(1, 3));
    }
}
