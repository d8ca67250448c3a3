use crate::scheme::{index_set_majoranas, EncodingScheme, MajoranaEncoding};
use bitree::IndexSet;
use fermimer::PauliRegister;

/// Qubit `j` stores the occupation of mode `j`; parity is a Z string over the lower modes.
///
/// ```text
/// a†_2 on 4 qubits = 0.5 ZZXI - 0.5i ZZYI
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JordanWigner;

impl EncodingScheme for JordanWigner {
    fn update_set(&self, _mode: usize, _qubit_count: usize) -> IndexSet {
        IndexSet::new()
    }

    fn parity_set(&self, mode: usize) -> IndexSet {
        IndexSet::range(0, mode)
    }

    fn occupation_set(&self, mode: usize) -> IndexSet {
        IndexSet::singleton(mode)
    }
}

impl MajoranaEncoding for JordanWigner {
    fn majoranas(&self, mode: usize, qubit_count: usize) -> Option<(PauliRegister, PauliRegister)> {
        index_set_majoranas(self, mode, qubit_count)
    }
}
