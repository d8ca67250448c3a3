pub mod algebra;
pub mod normal_order;
pub mod pauli;
pub mod sort;
pub mod terms;

pub use algebra::{BosonicAlgebra, CombiningAlgebra, FermionicAlgebra};
pub use normal_order::{construct_index_ordered, construct_normal_ordered, index_ordered_sum, normal_ordered_sum};
pub use pauli::{PauliRegister, PauliRegisterParsingError, PauliRegisterSequence};
pub use terms::{
    IndexedProduct, IndexedSum, LadderProduct, LadderSum, LadderUnit, ProductParsingError, ProductTerm,
    SumExpression, SumParsingError, Term,
};

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "schemars")]
mod schemars;
