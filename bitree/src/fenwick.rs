//! Binary indexed (Fenwick) trees.
//!
//! Node `k` (1-based position) aggregates the values at positions `k - lowest_set_bit(k) + 1 ..= k`.
//! The parent of `k` is `k + lowest_set_bit(k)`, so the tree shape is implied by the positions and
//! no pointers are stored. The free functions in this module enumerate that implicit structure.
//! They take 1-based positions and yield 0-based storage indices.

use crate::bit::lowest_set_bit;
use std::iter::successors;

/// Prefix aggregation over `size` values under an associative and commutative `combine`.
#[derive(Clone, Debug)]
pub struct FenwickTree<T, F> {
    nodes: Vec<T>,
    identity: T,
    combine: F,
}

impl<T, F> FenwickTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// A tree of `size` identity values.
    pub fn new(size: usize, identity: T, combine: F) -> Self {
        FenwickTree {
            nodes: vec![identity.clone(); size],
            identity,
            combine,
        }
    }

    /// Builds the tree over `values` in linear time.
    pub fn from_values(values: Vec<T>, identity: T, combine: F) -> Self {
        let mut nodes = values;
        let size = nodes.len();
        for position in 1..=size {
            let parent = position + lowest_set_bit(position);
            if parent <= size {
                nodes[parent - 1] = combine(&nodes[parent - 1], &nodes[position - 1]);
            }
        }
        FenwickTree {
            nodes,
            identity,
            combine,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node aggregates in storage order.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Combines `value` into the element at `index`. Indices past the end are ignored.
    pub fn update(&mut self, index: usize, value: &T) {
        let position = index + 1;
        if position > self.len() {
            return;
        }
        self.nodes[index] = (self.combine)(&self.nodes[index], value);
        for node in ancestors(self.len(), position) {
            self.nodes[node] = (self.combine)(&self.nodes[node], value);
        }
    }

    /// Aggregate of the elements `0..end`. `end` is clamped to the length.
    pub fn prefix(&self, end: usize) -> T {
        prefix_indices(end.min(self.len())).fold(self.identity.clone(), |accumulator, node| {
            (self.combine)(&accumulator, &self.nodes[node])
        })
    }

    /// Aggregate of the elements `start..end`, for combinations that can be undone by `difference`.
    pub fn range(&self, start: usize, end: usize, difference: impl Fn(&T, &T) -> T) -> T {
        difference(&self.prefix(end), &self.prefix(start))
    }

    /// Element at `index`, for combinations that can be undone by `difference`.
    pub fn point_query(&self, index: usize, difference: impl Fn(&T, &T) -> T) -> T {
        self.range(index, index + 1, difference)
    }
}

/// Strict ancestors of the 1-based `position` in a tree over `size` elements, nearest first.
///
/// Position zero has no ancestors.
pub fn ancestors(size: usize, position: usize) -> impl Iterator<Item = usize> {
    let first = if position == 0 {
        None
    } else {
        position.checked_add(lowest_set_bit(position))
    };
    successors(first, |&node| node.checked_add(lowest_set_bit(node)))
        .take_while(move |&node| node <= size)
        .map(|node| node - 1)
}

/// Nodes whose aggregates flow directly into the 1-based `position`, nearest first.
pub fn descendants(position: usize) -> impl Iterator<Item = usize> {
    let span = lowest_set_bit(position);
    successors(Some(1usize), |&step| step.checked_mul(2))
        .take_while(move |&step| step < span)
        .map(move |step| position - step - 1)
}

/// Nodes whose aggregates cover `0..end`, highest first.
pub fn prefix_indices(end: usize) -> impl Iterator<Item = usize> {
    let first = if end == 0 { None } else { Some(end) };
    successors(first, |&node| {
        let next = node - lowest_set_bit(node);
        if next == 0 {
            None
        } else {
            Some(next)
        }
    })
    .map(|node| node - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_zero_is_empty() {
        assert_eq!(ancestors(8, 0).count(), 0);
        assert_eq!(descendants(0).count(), 0);
        assert_eq!(prefix_indices(0).count(), 0);
    }

    #[test]
    fn root_has_no_ancestors() {
        assert_eq!(ancestors(8, 8).count(), 0);
        assert_eq!(ancestors(usize::MAX, 1 << (usize::BITS - 1)).count(), 0);
    }
}
