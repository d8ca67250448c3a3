#[cfg(feature = "serde")]
mod serde_tests {

    use fermimer::{LadderProduct, LadderSum, PauliRegister, PauliRegisterSequence};
    use fermion_core::{lower, raise, Complex64};
    use proptest::prelude::*;
    use rand::prelude::*;

    pub fn arbitrary_register(width_range: std::ops::Range<usize>) -> impl Strategy<Value = PauliRegister> {
        width_range.prop_flat_map(|width| {
            any::<u64>().prop_map(move |seed| {
                let mut random_number_generator = StdRng::seed_from_u64(seed);
                PauliRegister::random(width, &mut random_number_generator)
            })
        })
    }

    #[test]
    fn register_serializes_as_text() {
        let register: PauliRegister = "(0.5) XI".parse().unwrap();
        let serialized = serde_json::to_string(&register).expect("Failed to serialize PauliRegister");
        assert_eq!(serialized, "\"(0.5) XI\"");
        let deserialized: PauliRegister = serde_json::from_str(&serialized).expect("Failed to deserialize PauliRegister");
        assert_eq!(deserialized, register);
        assert!(serde_json::from_str::<PauliRegister>("\"(0.5 XI\"").is_err());
    }

    #[test]
    fn ladder_terms_serialize_as_text() {
        let product = LadderProduct::new(Complex64::new(-1.0, 0.0), [raise(1), lower(0)]);
        let serialized = serde_json::to_string(&product).expect("Failed to serialize LadderProduct");
        assert_eq!(serialized, "\"(-1) [(u, 1) | (d, 0)]\"");
        let deserialized: LadderProduct = serde_json::from_str(&serialized).expect("Failed to deserialize LadderProduct");
        assert_eq!(deserialized, product);

        let sum = LadderSum::from_products([product, LadderProduct::identity()]);
        let serialized = serde_json::to_string(&sum).expect("Failed to serialize LadderSum");
        let deserialized: LadderSum = serde_json::from_str(&serialized).expect("Failed to deserialize LadderSum");
        assert_eq!(deserialized, sum);
    }

    proptest! {
        #[test]
        fn sequence_serde_roundtrip(registers in prop::collection::vec(arbitrary_register(3..4), 0..8)) {
            let sequence = PauliRegisterSequence::from_registers(registers);
            let serialized = serde_json::to_string(&sequence).expect("Failed to serialize PauliRegisterSequence");
            let deserialized: PauliRegisterSequence =
                serde_json::from_str(&serialized).expect("Failed to deserialize PauliRegisterSequence");
            prop_assert_eq!(deserialized, sequence);
        }
    }
}
