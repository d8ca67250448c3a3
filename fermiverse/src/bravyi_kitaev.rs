//! Bravyi-Kitaev encoding.
//!
//! Qubit `k` stores the parity of the modes covered by Fenwick node `k`, so update, parity and
//! occupation sets all have `O(log n)` elements. The sets come straight from the Fenwick index
//! arithmetic in [`bitree::fenwick`].

use crate::scheme::{index_set_majoranas, EncodingScheme, MajoranaEncoding};
use bitree::{ancestors, descendants, prefix_indices, IndexSet};
use fermimer::PauliRegister;
use std::iter::once;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BravyiKitaev;

impl EncodingScheme for BravyiKitaev {
    fn update_set(&self, mode: usize, qubit_count: usize) -> IndexSet {
        ancestors(qubit_count, mode + 1).collect()
    }

    fn parity_set(&self, mode: usize) -> IndexSet {
        prefix_indices(mode).collect()
    }

    fn occupation_set(&self, mode: usize) -> IndexSet {
        descendants(mode + 1).chain(once(mode)).collect()
    }
}

impl MajoranaEncoding for BravyiKitaev {
    fn majoranas(&self, mode: usize, qubit_count: usize) -> Option<(PauliRegister, PauliRegister)> {
        index_set_majoranas(self, mode, qubit_count)
    }
}
