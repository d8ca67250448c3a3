use crate::scheme::MajoranaEncoding;
use fermimer::PauliRegister;
use fermion_core::Pauli;
use std::iter::{once, successors};

/// Complete ternary tree encoding with Majorana strings of weight `O(log_3 n)`.
///
/// Qubit `k` is a node with children `3k + 1`, `3k + 2` and `3k + 3` reached along its X, Y and Z
/// legs. Each Majorana string is a root to leaf path: `c_j` leaves node `j` along its X leg and
/// `d_j` along its Y leg, after which both follow Z legs down to a leaf. The all-Z path is unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TernaryTree;

impl TernaryTree {
    fn path(mode: usize, qubit_count: usize, leg: Pauli, first_child: usize) -> PauliRegister {
        let upward = successors(Some(mode), |&node| parent(node))
            .filter_map(|child| parent(child).map(|parent| (parent, LEGS[(child - 1) % 3])));
        let downward = successors(Some(first_child), |&node| node.checked_mul(3)?.checked_add(3))
            .take_while(|&node| node < qubit_count)
            .map(|node| (node, Pauli::Z));
        PauliRegister::with_operators(
            qubit_count,
            upward.chain(once((mode, leg))).chain(downward),
        )
    }
}

const LEGS: [Pauli; 3] = [Pauli::X, Pauli::Y, Pauli::Z];

fn parent(node: usize) -> Option<usize> {
    node.checked_sub(1).map(|shifted| shifted / 3)
}

impl MajoranaEncoding for TernaryTree {
    fn majoranas(&self, mode: usize, qubit_count: usize) -> Option<(PauliRegister, PauliRegister)> {
        if mode >= qubit_count {
            return None;
        }
        Some((
            TernaryTree::path(mode, qubit_count, Pauli::X, 3 * mode + 1),
            TernaryTree::path(mode, qubit_count, Pauli::Y, 3 * mode + 2),
        ))
    }
}
