use crate::{BravyiKitaev, EncodingTree, JordanWigner, MajoranaEncoding, Parity, TernaryTree, TreeEncoding};
use derive_more::{Display, FromStr};
use fermimer::{LadderProduct, LadderSum, PauliRegister, PauliRegisterSequence};
use fermion_core::{All, LadderOperatorUnit};
use tracing::debug;

/// Selects a fermion to qubit encoding by name.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    JordanWigner,
    Parity,
    BravyiKitaev,
    /// Tree construction over a star rooted at the last mode.
    StarTree,
    BalancedTernaryTree,
}

impl All<5> for Encoding {
    fn all() -> [Self; 5] {
        [
            Encoding::JordanWigner,
            Encoding::Parity,
            Encoding::BravyiKitaev,
            Encoding::StarTree,
            Encoding::BalancedTernaryTree,
        ]
    }
}

impl MajoranaEncoding for Encoding {
    fn majoranas(&self, mode: usize, qubit_count: usize) -> Option<(PauliRegister, PauliRegister)> {
        match self {
            Encoding::JordanWigner => JordanWigner.majoranas(mode, qubit_count),
            Encoding::Parity => Parity.majoranas(mode, qubit_count),
            Encoding::BravyiKitaev => BravyiKitaev.majoranas(mode, qubit_count),
            Encoding::StarTree => {
                let root = qubit_count.checked_sub(1)?;
                let tree = EncodingTree::star(qubit_count, root).ok()?;
                TreeEncoding::new(tree).majoranas(mode, qubit_count)
            }
            Encoding::BalancedTernaryTree => TernaryTree.majoranas(mode, qubit_count),
        }
    }
}

/// Qubit operator of a ladder product on `qubit_count` qubits.
///
/// Identity units are skipped. A unit on a mode outside the register makes the result zero.
pub fn encode_product(
    encoding: &impl MajoranaEncoding,
    product: &LadderProduct,
    qubit_count: usize,
) -> PauliRegisterSequence {
    let mut encoded = PauliRegisterSequence::identity(qubit_count).scaled(product.coefficient());
    for unit in product.units() {
        if unit.unit == LadderOperatorUnit::Identity {
            continue;
        }
        encoded = &encoded * &encoding.encode_unit(*unit, qubit_count);
        if encoded.is_empty() {
            debug!(%product, %unit, qubit_count, "encoded product vanished");
            break;
        }
    }
    encoded
}

pub fn encode_sum(encoding: &impl MajoranaEncoding, sum: &LadderSum, qubit_count: usize) -> PauliRegisterSequence {
    PauliRegisterSequence::from_sequences(sum.terms().map(|product| encode_product(encoding, product, qubit_count)))
}
