mod register;
mod sequence;

pub use register::{PauliRegister, PauliRegisterParsingError};
pub use sequence::PauliRegisterSequence;
