//! Exchange rules for ladder operators.
//!
//! A [`CombiningAlgebra`] appends one unit to a product that is already in normal order and returns
//! the normal-ordered products the result expands into. Fermions anticommute, bosons commute.

use crate::terms::{LadderProduct, LadderUnit};
use fermion_core::{LadderOperatorUnit, Phase};

pub trait CombiningAlgebra {
    /// Phase picked up when two units on different modes are exchanged.
    const EXCHANGE_PHASE: Phase;

    /// Products whose sum equals `product` followed by `next`, each in normal order when `product` is.
    fn combine(&self, product: &LadderProduct, next: LadderUnit) -> Vec<LadderProduct>;
}

/// Canonical anticommutation relations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FermionicAlgebra;

/// Canonical commutation relations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BosonicAlgebra;

impl CombiningAlgebra for FermionicAlgebra {
    const EXCHANGE_PHASE: Phase = Phase::MinusOne;

    fn combine(&self, product: &LadderProduct, next: LadderUnit) -> Vec<LadderProduct> {
        append_in_normal_order(product, next, Self::EXCHANGE_PHASE)
    }
}

impl CombiningAlgebra for BosonicAlgebra {
    const EXCHANGE_PHASE: Phase = Phase::One;

    fn combine(&self, product: &LadderProduct, next: LadderUnit) -> Vec<LadderProduct> {
        append_in_normal_order(product, next, Self::EXCHANGE_PHASE)
    }
}

/// Moves an appended creation operator left past trailing annihilation operators.
///
/// `a_k a†_j = δ_jk + phase a†_j a_k`, applied until `next` meets a creation operator or the start.
fn append_in_normal_order(product: &LadderProduct, next: LadderUnit, exchange_phase: Phase) -> Vec<LadderProduct> {
    if next.unit == LadderOperatorUnit::Identity {
        return vec![product.clone()];
    }
    let Some(&last) = product.units().last() else {
        return vec![product.appended(next)];
    };
    if !(last.unit == LadderOperatorUnit::Lower && next.unit == LadderOperatorUnit::Raise) {
        return vec![product.appended(next)];
    }

    let prefix = product.without_last();
    let mut products: Vec<LadderProduct> = append_in_normal_order(&prefix, next, exchange_phase)
        .into_iter()
        .map(|moved| moved.appended(last).with_phase(exchange_phase))
        .collect();
    if last.index == next.index {
        products.push(prefix);
    }
    products
}
