//! Encodings of fermionic modes as pairs of Majorana Pauli strings.
//!
//! For mode `j` the two Majorana operators are `c_j = a†_j + a_j` and `d_j = i(a†_j - a_j)`, so
//! `a†_j = (c_j - i d_j) / 2` and `a_j = (c_j + i d_j) / 2`. An encoding is valid when the `2n`
//! strings pairwise anticommute.

use bitree::IndexSet;
use fermimer::{PauliRegister, PauliRegisterSequence};
use fermion_core::{Complex64, IndexedUnit, LadderOperatorUnit, Pauli, Phase};
use std::iter::once;

pub trait MajoranaEncoding {
    /// `(c_j, d_j)` for `mode` on `qubit_count` qubits, `None` when the mode is out of range.
    fn majoranas(&self, mode: usize, qubit_count: usize) -> Option<(PauliRegister, PauliRegister)>;

    /// Qubit operator for a ladder operator on `mode`.
    ///
    /// Identity units and modes out of range give the empty sequence.
    fn encode(&self, unit: LadderOperatorUnit, mode: usize, qubit_count: usize) -> PauliRegisterSequence {
        let phase = match unit {
            LadderOperatorUnit::Identity => return PauliRegisterSequence::zero(),
            LadderOperatorUnit::Raise => Phase::MinusI,
            LadderOperatorUnit::Lower => Phase::I,
        };
        let Some((c, d)) = self.majoranas(mode, qubit_count) else {
            return PauliRegisterSequence::zero();
        };
        let half = Complex64::new(0.5, 0.0);
        PauliRegisterSequence::from_registers([c.scaled(half), d.scaled(phase * half)])
    }

    fn encode_unit(&self, unit: IndexedUnit<LadderOperatorUnit>, qubit_count: usize) -> PauliRegisterSequence {
        self.encode(unit.unit, unit.index, qubit_count)
    }
}

/// Encodings described by three index sets per mode.
///
/// `c_j` is X on the update set and on `j`, with Z on the parity set. `d_j` is X on the update set
/// and Y on `j`, with Z on the remainder set.
pub trait EncodingScheme {
    /// Qubits that flip when the occupation of `mode` changes, other than `mode` itself.
    fn update_set(&self, mode: usize, qubit_count: usize) -> IndexSet;

    /// Qubits whose parity equals the parity of the modes before `mode`.
    fn parity_set(&self, mode: usize) -> IndexSet;

    /// Qubits whose parity equals the occupation of `mode`.
    fn occupation_set(&self, mode: usize) -> IndexSet;

    fn remainder_set(&self, mode: usize) -> IndexSet {
        &(&self.parity_set(mode) ^ &self.occupation_set(mode)) - &IndexSet::singleton(mode)
    }
}

/// Majorana pair of an index set scheme.
pub fn index_set_majoranas(
    scheme: &impl EncodingScheme,
    mode: usize,
    qubit_count: usize,
) -> Option<(PauliRegister, PauliRegister)> {
    if mode >= qubit_count {
        return None;
    }
    let update = scheme.update_set(mode, qubit_count);
    let flips = || update.iter().map(|qubit| (qubit, Pauli::X));
    let c = PauliRegister::with_operators(
        qubit_count,
        flips()
            .chain(scheme.parity_set(mode).into_iter().map(|qubit| (qubit, Pauli::Z)))
            .chain(once((mode, Pauli::X))),
    );
    let d = PauliRegister::with_operators(
        qubit_count,
        flips()
            .chain(scheme.remainder_set(mode).into_iter().map(|qubit| (qubit, Pauli::Z)))
            .chain(once((mode, Pauli::Y))),
    );
    Some((c, d))
}

/// Checks `{c_i, c_j} = {d_i, d_j} = 2δ_ij` and `{c_i, d_j} = 0` exactly.
pub fn satisfies_anticommutation(encoding: &impl MajoranaEncoding, qubit_count: usize) -> bool {
    let mut majoranas = Vec::with_capacity(2 * qubit_count);
    for mode in 0..qubit_count {
        let Some((c, d)) = encoding.majoranas(mode, qubit_count) else {
            return false;
        };
        majoranas.push(c);
        majoranas.push(d);
    }
    let doubled_identity = PauliRegisterSequence::identity(qubit_count).scaled(Complex64::new(2.0, 0.0));
    let zero = PauliRegisterSequence::zero();
    for (first, left) in majoranas.iter().enumerate() {
        for (second, right) in majoranas.iter().enumerate().skip(first) {
            let anticommutator = PauliRegisterSequence::from_registers([left * right, right * left]);
            let expected = if first == second { &doubled_identity } else { &zero };
            if &anticommutator != expected {
                return false;
            }
        }
    }
    true
}
