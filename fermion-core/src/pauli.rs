use crate::{All, Phase};
use derive_more::{Display, Error};
use std::ops::Mul;

/// Pauli matrices on one qubit, encoded by their x and z bits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Pauli {
    /// One qubit identity matrix
    /// ```text
    /// |1 0|
    /// |0 1|
    /// ```
    #[default]
    I = 0b00,

    /// Pauli X
    /// ```text
    /// |0 1|
    /// |1 0|
    /// ```
    X = 0b01,

    /// Pauli Z
    /// ```text
    /// |1  0|
    /// |0 -1|
    /// ```
    Z = 0b10,

    /// Pauli Y
    /// ```text
    /// |0 -i|
    /// |i  0|
    /// ```
    Y = 0b11,
}

#[derive(Debug, Display, Error, PartialEq, Eq, Default)]
#[display("expected one of I, X, Y, Z")]
pub struct PauliCharacterError;

impl Pauli {
    #[must_use]
    pub fn from_bits(x_bit: bool, z_bit: bool) -> Pauli {
        match (x_bit, z_bit) {
            (false, false) => Pauli::I,
            (true, false) => Pauli::X,
            (false, true) => Pauli::Z,
            (true, true) => Pauli::Y,
        }
    }

    #[must_use]
    pub fn x_bit(self) -> bool {
        (self as u8) & 0b01 != 0
    }

    #[must_use]
    pub fn z_bit(self) -> bool {
        (self as u8) & 0b10 != 0
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Pauli::I
    }

    #[must_use]
    pub fn commutes_with(self, other: Pauli) -> bool {
        self.is_identity() || other.is_identity() || self == other
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Position in the cycle X -> Y -> Z -> X.
    fn cyclic_position(self) -> u8 {
        match self {
            Pauli::I | Pauli::X => 0,
            Pauli::Y => 1,
            Pauli::Z => 2,
        }
    }
}

impl All<4> for Pauli {
    fn all() -> [Self; 4] {
        [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z]
    }
}

/// `P * Q = phase * R`, with `X * Y = iZ` and its cyclic shifts.
impl Mul for Pauli {
    type Output = (Phase, Pauli);

    fn mul(self, other: Pauli) -> (Phase, Pauli) {
        let product = Pauli::from_bits(self.x_bit() ^ other.x_bit(), self.z_bit() ^ other.z_bit());
        if self.commutes_with(other) {
            return (Phase::One, product);
        }
        let phase = if (other.cyclic_position() + 3 - self.cyclic_position()) % 3 == 1 {
            Phase::I
        } else {
            Phase::MinusI
        };
        (phase, product)
    }
}

impl TryFrom<char> for Pauli {
    type Error = PauliCharacterError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        match character {
            'I' => Ok(Pauli::I),
            'X' => Ok(Pauli::X),
            'Y' => Ok(Pauli::Y),
            'Z' => Ok(Pauli::Z),
            _ => Err(PauliCharacterError),
        }
    }
}

impl std::fmt::Display for Pauli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Pauli {
    type Err = PauliCharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut characters = s.trim().chars();
        match (characters.next(), characters.next()) {
            (Some(character), None) => Pauli::try_from(character),
            _ => Err(PauliCharacterError),
        }
    }
}
