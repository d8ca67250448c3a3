use crate::scheme::{index_set_majoranas, EncodingScheme, MajoranaEncoding};
use bitree::IndexSet;
use fermimer::PauliRegister;

/// Qubit `j` stores the parity of modes `0..=j`; changing mode `j` flips every higher qubit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parity;

impl EncodingScheme for Parity {
    fn update_set(&self, mode: usize, qubit_count: usize) -> IndexSet {
        IndexSet::range(mode + 1, qubit_count)
    }

    fn parity_set(&self, mode: usize) -> IndexSet {
        match mode.checked_sub(1) {
            Some(previous) => IndexSet::singleton(previous),
            None => IndexSet::new(),
        }
    }

    fn occupation_set(&self, mode: usize) -> IndexSet {
        let mut occupation = self.parity_set(mode);
        occupation.insert(mode);
        occupation
    }
}

impl MajoranaEncoding for Parity {
    fn majoranas(&self, mode: usize, qubit_count: usize) -> Option<(PauliRegister, PauliRegister)> {
        index_set_majoranas(self, mode, qubit_count)
    }
}
