use bitree::IndexSet;
use fermimer::{LadderProduct, LadderSum, PauliRegisterSequence};
use fermion_core::{identity, lower, raise, All, Complex64, LadderOperatorUnit};
use fermiverse::{
    encode_product, encode_sum, satisfies_anticommutation, BravyiKitaev, Encoding, EncodingScheme, EncodingTree,
    JordanWigner, MajoranaEncoding, Parity, TernaryTree, TreeEncoding,
};

fn real(value: f64) -> Complex64 {
    Complex64::new(value, 0.0)
}

fn terms(sequence: &PauliRegisterSequence) -> Vec<(&str, Complex64)> {
    sequence.terms().collect()
}

fn number_operator(modes: usize) -> LadderSum {
    LadderSum::from_products((0..modes).map(|mode| LadderProduct::new(real(1.0), [raise(mode), lower(mode)])))
}

fn set(indexes: &[usize]) -> IndexSet {
    indexes.iter().copied().collect()
}

#[test]
fn anticommutation_relations_hold() {
    for qubit_count in 1..=8 {
        assert!(satisfies_anticommutation(&JordanWigner, qubit_count));
        assert!(satisfies_anticommutation(&Parity, qubit_count));
        assert!(satisfies_anticommutation(&BravyiKitaev, qubit_count));
        assert!(satisfies_anticommutation(&TernaryTree, qubit_count));
        for encoding in Encoding::all() {
            assert!(satisfies_anticommutation(&encoding, qubit_count), "{encoding} on {qubit_count} qubits");
        }
    }
}

#[test]
fn jordan_wigner_single_mode() {
    let raised = JordanWigner.encode(LadderOperatorUnit::Raise, 0, 2);
    assert_eq!(terms(&raised), vec![("XI", real(0.5)), ("YI", Complex64::new(0.0, -0.5))]);
    let lowered = JordanWigner.encode(LadderOperatorUnit::Lower, 0, 2);
    assert_eq!(terms(&lowered), vec![("XI", real(0.5)), ("YI", Complex64::new(0.0, 0.5))]);

    let number = &raised * &lowered;
    assert_eq!(terms(&number), vec![("II", real(0.5)), ("ZI", real(-0.5))]);

    let raised = JordanWigner.encode(LadderOperatorUnit::Raise, 2, 4);
    assert_eq!(terms(&raised), vec![("ZZXI", real(0.5)), ("ZZYI", Complex64::new(0.0, -0.5))]);
}

#[test]
fn identity_and_out_of_range_encode_to_zero() {
    for encoding in Encoding::all() {
        assert!(encoding.encode(LadderOperatorUnit::Identity, 0, 4).is_empty());
        assert!(encoding.encode(LadderOperatorUnit::Raise, 4, 4).is_empty());
        assert!(encoding.encode(LadderOperatorUnit::Lower, 0, 0).is_empty());
    }
}

#[test]
fn number_operator_trace() {
    let number = number_operator(4);
    let star = TreeEncoding::new(EncodingTree::star(4, 3).unwrap());
    let encoded = [
        encode_sum(&JordanWigner, &number, 4),
        encode_sum(&Parity, &number, 4),
        encode_sum(&BravyiKitaev, &number, 4),
        encode_sum(&TernaryTree, &number, 4),
        encode_sum(&star, &number, 4),
    ];
    for sequence in &encoded {
        assert_eq!(sequence.coefficient("IIII"), real(2.0));
        assert_eq!(sequence.len(), 5);
    }
    for encoding in Encoding::all() {
        assert_eq!(encode_sum(&encoding, &number, 4).coefficient("IIII"), real(2.0));
    }
}

#[test]
fn encode_product_skips_identity_units() {
    let plain = LadderProduct::new(real(2.0), [raise(1), lower(0)]);
    let padded = LadderProduct::new(real(2.0), [identity(3), raise(1), identity(0), lower(0)]);
    assert_eq!(encode_product(&BravyiKitaev, &plain, 4), encode_product(&BravyiKitaev, &padded, 4));
    assert_eq!(
        encode_product(&JordanWigner, &LadderProduct::identity(), 3),
        PauliRegisterSequence::identity(3)
    );
    assert!(encode_product(&JordanWigner, &LadderProduct::zero(), 3).is_empty());
    assert!(encode_product(&Parity, &LadderProduct::new(real(1.0), [raise(0), raise(0)]), 3).is_empty());
    assert!(encode_product(&Parity, &LadderProduct::new(real(1.0), [raise(5)]), 3).is_empty());
}

#[test]
fn bravyi_kitaev_index_sets() {
    let expected: [(&[usize], &[usize], &[usize]); 8] = [
        (&[1, 3, 7], &[], &[0]),
        (&[3, 7], &[0], &[0, 1]),
        (&[3, 7], &[1], &[2]),
        (&[7], &[1, 2], &[1, 2, 3]),
        (&[5, 7], &[3], &[4]),
        (&[7], &[3, 4], &[4, 5]),
        (&[7], &[3, 5], &[6]),
        (&[], &[3, 5, 6], &[3, 5, 6, 7]),
    ];
    for (mode, (update, parity, occupation)) in expected.into_iter().enumerate() {
        assert_eq!(BravyiKitaev.update_set(mode, 8), set(update), "update set of {mode}");
        assert_eq!(BravyiKitaev.parity_set(mode), set(parity), "parity set of {mode}");
        assert_eq!(BravyiKitaev.occupation_set(mode), set(occupation), "occupation set of {mode}");
    }
    assert_eq!(BravyiKitaev.remainder_set(3), IndexSet::new());
    assert_eq!(BravyiKitaev.remainder_set(0), IndexSet::new());
    assert_eq!(BravyiKitaev.remainder_set(2), set(&[1]));
}

#[test]
fn bravyi_kitaev_strings() {
    let (c, d) = BravyiKitaev.majoranas(0, 8).unwrap();
    assert_eq!((c.signature(), d.signature()), ("XXIXIIIX".to_string(), "YXIXIIIX".to_string()));
    let (c, d) = BravyiKitaev.majoranas(5, 8).unwrap();
    assert_eq!((c.signature(), d.signature()), ("IIIZZXIX".to_string(), "IIIZIYIX".to_string()));
    let (c, d) = BravyiKitaev.majoranas(7, 8).unwrap();
    assert_eq!((c.signature(), d.signature()), ("IIIZIZZX".to_string(), "IIIIIIIY".to_string()));
}

#[test]
fn parity_index_sets() {
    assert_eq!(Parity.update_set(1, 4), set(&[2, 3]));
    assert_eq!(Parity.parity_set(0), IndexSet::new());
    assert_eq!(Parity.parity_set(2), set(&[1]));
    assert_eq!(Parity.occupation_set(2), set(&[1, 2]));
    let (c, d) = Parity.majoranas(1, 4).unwrap();
    assert_eq!((c.signature(), d.signature()), ("ZXXX".to_string(), "IYXX".to_string()));
}

#[test]
fn encoding_names() {
    for encoding in Encoding::all() {
        assert_eq!(encoding.to_string().parse::<Encoding>().ok(), Some(encoding));
    }
    assert_eq!(Encoding::BravyiKitaev.to_string(), "BravyiKitaev");
    assert_eq!("JordanWigner".parse::<Encoding>().ok(), Some(Encoding::JordanWigner));
    assert!("Unary".parse::<Encoding>().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn encoding_serde() {
    let text = serde_json::to_string(&Encoding::StarTree).unwrap();
    assert_eq!(text, "\"StarTree\"");
    assert_eq!(serde_json::from_str::<Encoding>(&text).unwrap(), Encoding::StarTree);
}
