use schemars::json_schema;
use schemars::JsonSchema;

use crate::pauli::{PauliRegister, PauliRegisterSequence};

impl JsonSchema for PauliRegister {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("PauliRegister")
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        json_schema!({
            "type": "string",
            "description": "A Pauli string with a coefficient prefix. \
                            Format: <prefix><letters> where prefix is one of ' + ', ' - ', '(i) ', '(-i) ' \
                            or a parenthesised complex number, and letter k is the Pauli (I, X, Y, Z) on qubit k.",
            "examples": [
                " + ZZII",
                " - XY",
                "(i) ZIYX",
                "(0.5-0.5i) XI"
            ]
        })
    }
}

impl JsonSchema for PauliRegisterSequence {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("PauliRegisterSequence")
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        let items = generator.subschema_for::<PauliRegister>();
        json_schema!({
            "type": "array",
            "description": "A sum of Pauli registers. Registers with equal letters are merged.",
            "items": items
        })
    }
}
