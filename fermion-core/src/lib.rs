pub mod coefficient;
pub mod indexed;
pub mod ladder;
pub mod pauli;
pub mod phase;

pub use coefficient::{
    format_coefficient, is_negligible, parse_coefficient, CoefficientParsingError, Complex64, COEFFICIENT_TOLERANCE,
};
pub use indexed::{IndexedUnit, IndexedUnitParsingError};
pub use ladder::{identity, lower, raise, LadderCharacterError, LadderOperatorUnit};
pub use pauli::{Pauli, PauliCharacterError};
pub use phase::{Phase, PhaseParsingError};

/// All elements of a given type. Usually used for simple enums.
pub trait All<const NUM_ELEMENTS: usize>: Sized {
    fn all() -> [Self; NUM_ELEMENTS];
}
