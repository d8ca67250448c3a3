use crate::{All, Complex64};
use derive_more::{Display, Error};
use std::ops::{Mul, MulAssign, Neg};
use std::str::FromStr;

/// Fourth roots of unity, stored as the exponent of `i`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Phase {
    #[default]
    One = 0,
    I = 1,
    MinusOne = 2,
    MinusI = 3,
}

#[derive(Debug, Display, Error, PartialEq, Eq, Default)]
#[display("expected one of 1, i, -1, -i")]
pub struct PhaseParsingError;

impl Phase {
    /// `i^exponent`
    #[must_use]
    pub fn from_exponent(exponent: u8) -> Phase {
        match exponent % 4 {
            0 => Phase::One,
            1 => Phase::I,
            2 => Phase::MinusOne,
            _ => Phase::MinusI,
        }
    }

    #[must_use]
    pub fn exponent(self) -> u8 {
        self as u8
    }

    /// `-1` when `odd`, `1` otherwise.
    #[must_use]
    pub fn from_parity(odd: bool) -> Phase {
        if odd {
            Phase::MinusOne
        } else {
            Phase::One
        }
    }

    #[must_use]
    pub fn conjugate(self) -> Phase {
        Phase::from_exponent(4 - self.exponent())
    }

    #[must_use]
    pub fn pow(self, power: usize) -> Phase {
        // Only the power modulo 4 matters.
        let reduced = (power % 4) as u8;
        Phase::from_exponent(self.exponent() * reduced)
    }

    #[must_use]
    pub fn is_real(self) -> bool {
        matches!(self, Phase::One | Phase::MinusOne)
    }

    #[must_use]
    pub fn to_complex(self) -> Complex64 {
        self * Complex64::new(1.0, 0.0)
    }

    /// The phase equal to `value`, if `value` is exactly one of `1, i, -1, -i`.
    #[must_use]
    pub fn from_complex(value: Complex64) -> Option<Phase> {
        Phase::all().into_iter().find(|phase| phase.to_complex() == value)
    }
}

impl All<4> for Phase {
    fn all() -> [Self; 4] {
        [Phase::One, Phase::I, Phase::MinusOne, Phase::MinusI]
    }
}

impl Mul for Phase {
    type Output = Phase;

    fn mul(self, other: Phase) -> Phase {
        Phase::from_exponent(self.exponent() + other.exponent())
    }
}

impl MulAssign for Phase {
    fn mul_assign(&mut self, other: Phase) {
        *self = *self * other;
    }
}

impl Neg for Phase {
    type Output = Phase;

    fn neg(self) -> Phase {
        self * Phase::MinusOne
    }
}

/// Exact rotation of a complex number, no floating point multiplication involved.
impl Mul<Complex64> for Phase {
    type Output = Complex64;

    fn mul(self, value: Complex64) -> Complex64 {
        match self {
            Phase::One => value,
            Phase::I => Complex64::new(-value.im, value.re),
            Phase::MinusOne => Complex64::new(-value.re, -value.im),
            Phase::MinusI => Complex64::new(value.im, -value.re),
        }
    }
}

impl Mul<Phase> for Complex64 {
    type Output = Complex64;

    fn mul(self, phase: Phase) -> Complex64 {
        phase * self
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Phase::One => "1",
            Phase::I => "i",
            Phase::MinusOne => "-1",
            Phase::MinusI => "-i",
        };
        write!(f, "{text}")
    }
}

impl FromStr for Phase {
    type Err = PhaseParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "+1" => Ok(Phase::One),
            "i" | "+i" => Ok(Phase::I),
            "-1" => Ok(Phase::MinusOne),
            "-i" => Ok(Phase::MinusI),
            _ => Err(PhaseParsingError),
        }
    }
}

#[test]
fn pow_test() {
    assert_eq!(Phase::I.pow(0), Phase::One);
    assert_eq!(Phase::I.pow(2), Phase::MinusOne);
    assert_eq!(Phase::I.pow(7), Phase::MinusI);
    assert_eq!(Phase::MinusOne.pow(3), Phase::MinusOne);
    assert_eq!(Phase::MinusOne.pow(usize::MAX), Phase::MinusOne);
}
