use crate::algebra::CombiningAlgebra;
use crate::sort::{sort_by_key_with_swap_count, SortOrder};
use crate::terms::{LadderProduct, LadderSum, LadderUnit};
use fermion_core::Phase;
use tracing::{debug, trace};

/// Rewrites `product` as a sum of normal-ordered products.
///
/// Units are folded one at a time into a growing normal-ordered sum, merging like terms after
/// every step. Returns `None` only when `algebra` produces a product that is not in normal order.
pub fn construct_normal_ordered<A: CombiningAlgebra>(algebra: &A, product: &LadderProduct) -> Option<LadderSum> {
    let mut ordered = LadderSum::from_product(LadderProduct::new(product.coefficient(), []));
    for &unit in product.units() {
        let expanded: Vec<LadderProduct> = ordered.terms().flat_map(|term| algebra.combine(term, unit)).collect();
        trace!(unit = %unit, expanded = expanded.len(), "combined unit");
        ordered = LadderSum::from_products(expanded);
    }
    if ordered.is_in_normal_order() {
        Some(ordered)
    } else {
        debug!(product = %product, result = %ordered, "combining algebra broke normal order");
        None
    }
}

/// Rewrites `product` in normal order with creation indices ascending and annihilation indices descending.
///
/// Reordering within each block multiplies by the exchange phase once per swap. For an
/// anticommuting algebra, products repeating a mode within a block vanish.
pub fn construct_index_ordered<A: CombiningAlgebra>(algebra: &A, product: &LadderProduct) -> Option<LadderSum> {
    let normal = construct_normal_ordered(algebra, product)?;
    Some(LadderSum::from_products(
        normal.terms().filter_map(|term| index_ordered_product(term, A::EXCHANGE_PHASE)),
    ))
}

pub fn normal_ordered_sum<A: CombiningAlgebra>(algebra: &A, sum: &LadderSum) -> Option<LadderSum> {
    let mut products = Vec::new();
    for term in sum.terms() {
        products.extend(construct_normal_ordered(algebra, term)?.terms().cloned());
    }
    Some(LadderSum::from_products(products))
}

pub fn index_ordered_sum<A: CombiningAlgebra>(algebra: &A, sum: &LadderSum) -> Option<LadderSum> {
    let mut products = Vec::new();
    for term in sum.terms() {
        products.extend(construct_index_ordered(algebra, term)?.terms().cloned());
    }
    Some(LadderSum::from_products(products))
}

fn index_ordered_product(product: &LadderProduct, exchange_phase: Phase) -> Option<LadderProduct> {
    let raises: Vec<LadderUnit> = product.raises().copied().collect();
    let lowers: Vec<LadderUnit> = product.lowers().copied().collect();
    let (raises, raise_swaps) = sort_by_key_with_swap_count(raises, |unit| unit.index, SortOrder::Ascending);
    let (lowers, lower_swaps) = sort_by_key_with_swap_count(lowers, |unit| unit.index, SortOrder::Descending);

    let exclusive = exchange_phase == Phase::MinusOne;
    if exclusive && (has_repeated_index(&raises) || has_repeated_index(&lowers)) {
        return None;
    }
    let phase = exchange_phase.pow(raise_swaps + lower_swaps);
    Some(LadderProduct::new(
        phase * product.coefficient(),
        raises.into_iter().chain(lowers),
    ))
}

fn has_repeated_index(sorted: &[LadderUnit]) -> bool {
    sorted.windows(2).any(|pair| pair[0].index == pair[1].index)
}
