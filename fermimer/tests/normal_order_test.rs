use fermimer::{
    construct_index_ordered, construct_normal_ordered, index_ordered_sum, normal_ordered_sum, BosonicAlgebra,
    CombiningAlgebra, FermionicAlgebra, LadderProduct, LadderSum,
};
use fermion_core::{identity, lower, raise, Complex64, IndexedUnit, LadderOperatorUnit};
use proptest::prelude::*;

fn real(value: f64) -> Complex64 {
    Complex64::new(value, 0.0)
}

fn product(units: &[IndexedUnit<LadderOperatorUnit>]) -> LadderProduct {
    LadderProduct::new(real(1.0), units.iter().copied())
}

fn random_product(max_length: usize) -> impl Strategy<Value = LadderProduct> {
    prop::collection::vec((0usize..4, any::<bool>()), 0..=max_length).prop_map(|units| {
        LadderProduct::new(
            real(1.0),
            units
                .into_iter()
                .map(|(index, creation)| if creation { raise(index) } else { lower(index) }),
        )
    })
}

/// Creation indices strictly ascending, then annihilation indices strictly descending.
fn index_ordered_product() -> impl Strategy<Value = LadderProduct> {
    (
        prop::collection::btree_set(0usize..6, 0..4),
        prop::collection::btree_set(0usize..6, 0..4),
        -4i32..4,
    )
        .prop_map(|(raises, lowers, scale)| {
            let units = raises
                .into_iter()
                .map(raise)
                .chain(lowers.into_iter().rev().map(lower));
            LadderProduct::new(real(f64::from(scale) / 2.0), units)
        })
}

#[test]
fn fermionic_swap_on_one_mode() {
    let ordered = construct_normal_ordered(&FermionicAlgebra, &product(&[lower(0), raise(0)])).unwrap();
    assert_eq!(ordered.to_string(), "{(-1) [(u, 0) | (d, 0)]; []}");
}

#[test]
fn bosonic_swap_on_one_mode() {
    let ordered = construct_normal_ordered(&BosonicAlgebra, &product(&[lower(0), raise(0)])).unwrap();
    assert_eq!(ordered.to_string(), "{[(u, 0) | (d, 0)]; []}");
}

#[test]
fn swap_on_different_modes() {
    let fermionic = construct_normal_ordered(&FermionicAlgebra, &product(&[lower(1), raise(0)])).unwrap();
    assert_eq!(fermionic.to_string(), "{(-1) [(u, 0) | (d, 1)]}");
    let bosonic = construct_normal_ordered(&BosonicAlgebra, &product(&[lower(1), raise(0)])).unwrap();
    assert_eq!(bosonic.to_string(), "{[(u, 0) | (d, 1)]}");
}

#[test]
fn product_of_number_complements() {
    // (1 - n0)(1 - n1)
    let input = product(&[lower(0), raise(0), lower(1), raise(1)]);
    let fermionic = construct_index_ordered(&FermionicAlgebra, &input).unwrap();
    assert_eq!(fermionic.len(), 4);
    assert_eq!(fermionic.coefficient("[]"), real(1.0));
    assert_eq!(fermionic.coefficient("[(u, 0) | (d, 0)]"), real(-1.0));
    assert_eq!(fermionic.coefficient("[(u, 1) | (d, 1)]"), real(-1.0));
    assert_eq!(fermionic.coefficient("[(u, 0) | (u, 1) | (d, 1) | (d, 0)]"), real(1.0));
    assert!(fermionic.is_in_index_order());

    let bosonic = construct_index_ordered(&BosonicAlgebra, &input).unwrap();
    assert_eq!(bosonic.len(), 4);
    for term in bosonic.terms() {
        assert_eq!(term.coefficient(), real(1.0));
    }

    let reordered = product(&[lower(1), lower(0), raise(0), raise(1)]);
    assert_eq!(construct_index_ordered(&FermionicAlgebra, &reordered), Some(fermionic));
}

#[test]
fn creation_operators_anticommute() {
    let ordered = construct_index_ordered(&FermionicAlgebra, &product(&[raise(1), raise(0)])).unwrap();
    assert_eq!(ordered.to_string(), "{(-1) [(u, 0) | (u, 1)]}");
    let ordered = construct_index_ordered(&BosonicAlgebra, &product(&[raise(1), raise(0)])).unwrap();
    assert_eq!(ordered.to_string(), "{[(u, 0) | (u, 1)]}");
}

#[test]
fn pauli_exclusion() {
    let doubled = product(&[raise(0), raise(0)]);
    assert!(construct_index_ordered(&FermionicAlgebra, &doubled).unwrap().is_empty());
    let bosonic = construct_index_ordered(&BosonicAlgebra, &doubled).unwrap();
    assert_eq!(bosonic.to_string(), "{[(u, 0) | (u, 0)]}");

    // a0 a†0 a†0 = a†0 - a†0 + a†0 a†0 a0
    let ordered = construct_normal_ordered(&FermionicAlgebra, &product(&[lower(0), raise(0), raise(0)])).unwrap();
    assert_eq!(ordered.to_string(), "{[(u, 0) | (u, 0) | (d, 0)]}");
    assert!(construct_index_ordered(&FermionicAlgebra, &product(&[lower(0), raise(0), raise(0)]))
        .unwrap()
        .is_empty());
}

#[test]
fn identity_units_are_dropped() {
    let ordered = construct_normal_ordered(&FermionicAlgebra, &product(&[identity(3), raise(0), identity(1)])).unwrap();
    assert_eq!(ordered.to_string(), "{[(u, 0)]}");
}

#[test]
fn zero_and_empty_products() {
    assert!(construct_normal_ordered(&FermionicAlgebra, &LadderProduct::zero()).unwrap().is_empty());
    assert_eq!(
        construct_normal_ordered(&FermionicAlgebra, &LadderProduct::identity()),
        Some(LadderSum::identity())
    );
}

#[test]
fn sums_are_ordered_termwise() {
    let sum = LadderSum::from_products([product(&[lower(0), raise(0)]), product(&[raise(0), lower(0)])]);
    let ordered = normal_ordered_sum(&FermionicAlgebra, &sum).unwrap();
    assert_eq!(ordered, LadderSum::identity());
    let ordered = index_ordered_sum(&BosonicAlgebra, &sum).unwrap();
    assert_eq!(ordered.coefficient("[(u, 0) | (d, 0)]"), real(2.0));
}

#[test]
fn exchange_phases() {
    assert_eq!(FermionicAlgebra::EXCHANGE_PHASE, fermion_core::Phase::MinusOne);
    assert_eq!(BosonicAlgebra::EXCHANGE_PHASE, fermion_core::Phase::One);
}

proptest! {
    #[test]
    fn normal_order_is_idempotent(input in index_ordered_product()) {
        let expected = LadderSum::from_product(input.clone());
        prop_assert_eq!(construct_normal_ordered(&FermionicAlgebra, &input), Some(expected.clone()));
        prop_assert_eq!(construct_index_ordered(&FermionicAlgebra, &input), Some(expected.clone()));
        prop_assert_eq!(construct_index_ordered(&BosonicAlgebra, &input), Some(expected));
    }

    #[test]
    fn results_are_normal_ordered(input in random_product(6)) {
        let fermionic = construct_normal_ordered(&FermionicAlgebra, &input);
        prop_assert!(fermionic.is_some_and(|sum| sum.is_in_normal_order()));
        let bosonic = construct_index_ordered(&BosonicAlgebra, &input);
        prop_assert!(bosonic.is_some_and(|sum| sum.is_in_normal_order()));
        let fermionic = construct_index_ordered(&FermionicAlgebra, &input);
        prop_assert!(fermionic.is_some_and(|sum| sum.is_in_index_order()));
    }

    #[test]
    fn ordering_respects_adjoint(input in random_product(5)) {
        let ordered = construct_index_ordered(&FermionicAlgebra, &input).unwrap();
        let adjoint_ordered = construct_index_ordered(&FermionicAlgebra, &input.adjoint()).unwrap();
        prop_assert_eq!(ordered.adjoint(), adjoint_ordered);
    }
}
