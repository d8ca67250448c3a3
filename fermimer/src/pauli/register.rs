use derive_more::{Display, Error};
use fermion_core::{format_coefficient, parse_coefficient, Complex64, Pauli, Phase};
use itertools::{EitherOrBoth, Itertools};
use std::ops::{Mul, MulAssign, Neg};
use std::str::FromStr;

/// Tensor product of single qubit Paulis with a complex coefficient.
///
/// Qubit `k` is the `k`-th letter of the signature, so `XI` acts with X on qubit 0.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct PauliRegister {
    paulis: Vec<Pauli>,
    coefficient: Complex64,
}

#[derive(Debug, Display, Error, PartialEq, Eq, Default)]
#[display("expected a Pauli register such as (0.5) XIZ")]
pub struct PauliRegisterParsingError;

impl PauliRegister {
    pub fn new(paulis: impl IntoIterator<Item = Pauli>, coefficient: Complex64) -> Self {
        PauliRegister {
            paulis: paulis.into_iter().collect(),
            coefficient,
        }
    }

    pub fn identity(width: usize) -> Self {
        PauliRegister::new(vec![Pauli::I; width], Complex64::new(1.0, 0.0))
    }

    /// Identity on `width` qubits overwritten by `operators`. Operators past the width are ignored.
    pub fn with_operators(width: usize, operators: impl IntoIterator<Item = (usize, Pauli)>) -> Self {
        let mut register = PauliRegister::identity(width);
        for (index, pauli) in operators {
            if let Some(slot) = register.paulis.get_mut(index) {
                *slot = pauli;
            }
        }
        register
    }

    pub fn random(width: usize, random_number_generator: &mut impl rand::Rng) -> Self {
        let paulis: Vec<Pauli> = (0..width)
            .map(|_| Pauli::from_bits(random_number_generator.gen(), random_number_generator.gen()))
            .collect();
        let phase = Phase::from_exponent(random_number_generator.gen_range(0..4));
        PauliRegister::new(paulis, phase.to_complex())
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.paulis.len()
    }

    /// Number of non-identity letters.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.paulis.iter().filter(|pauli| !pauli.is_identity()).count()
    }

    #[must_use]
    pub fn coefficient(&self) -> Complex64 {
        self.coefficient
    }

    #[must_use]
    pub fn paulis(&self) -> &[Pauli] {
        &self.paulis
    }

    /// Pauli on `qubit`, identity past the width.
    #[must_use]
    pub fn get(&self, qubit: usize) -> Pauli {
        self.paulis.get(qubit).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.paulis.iter().all(|pauli| pauli.is_identity())
    }

    #[must_use]
    pub fn signature(&self) -> String {
        self.paulis.iter().map(|pauli| pauli.as_char()).collect()
    }

    #[must_use]
    pub fn commutes_with(&self, other: &PauliRegister) -> bool {
        let anticommuting = self
            .paulis
            .iter()
            .zip(other.paulis.iter())
            .filter(|(left, right)| !left.commutes_with(**right))
            .count();
        anticommuting % 2 == 0
    }

    pub fn with_coefficient(&self, coefficient: Complex64) -> Self {
        PauliRegister {
            paulis: self.paulis.clone(),
            coefficient,
        }
    }

    pub fn scaled(&self, factor: Complex64) -> Self {
        self.with_coefficient(self.coefficient * factor)
    }

    pub(crate) fn add_coefficient(&mut self, coefficient: Complex64) {
        self.coefficient += coefficient;
    }
}

/// Qubit-wise product. A shorter register acts as identity on the missing qubits.
impl MulAssign<&PauliRegister> for PauliRegister {
    fn mul_assign(&mut self, other: &PauliRegister) {
        let mut phase = Phase::One;
        let paulis = self
            .paulis
            .iter()
            .zip_longest(other.paulis.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(left, right) => {
                    let (factor, product) = *left * *right;
                    phase *= factor;
                    product
                }
                EitherOrBoth::Left(pauli) | EitherOrBoth::Right(pauli) => *pauli,
            })
            .collect();
        self.paulis = paulis;
        self.coefficient = phase * (self.coefficient * other.coefficient);
    }
}

impl Mul for &PauliRegister {
    type Output = PauliRegister;

    fn mul(self, other: &PauliRegister) -> PauliRegister {
        let mut product = self.clone();
        product *= other;
        product
    }
}

impl Mul for PauliRegister {
    type Output = PauliRegister;

    fn mul(mut self, other: PauliRegister) -> PauliRegister {
        self *= &other;
        self
    }
}

impl Mul<Complex64> for PauliRegister {
    type Output = PauliRegister;

    fn mul(self, factor: Complex64) -> PauliRegister {
        self.scaled(factor)
    }
}

impl Neg for PauliRegister {
    type Output = PauliRegister;

    fn neg(mut self) -> PauliRegister {
        self.coefficient = Phase::MinusOne * self.coefficient;
        self
    }
}

impl std::fmt::Display for PauliRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Phase::from_complex(self.coefficient) {
            Some(Phase::One) => write!(f, " + ")?,
            Some(Phase::MinusOne) => write!(f, " - ")?,
            Some(Phase::I) => write!(f, "(i) ")?,
            Some(Phase::MinusI) => write!(f, "(-i) ")?,
            None => write!(f, "({}) ", format_coefficient(self.coefficient))?,
        }
        write!(f, "{}", self.signature())
    }
}

impl FromStr for PauliRegister {
    type Err = PauliRegisterParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (coefficient, letters) = if let Some(rest) = text.strip_prefix('(') {
            let (coefficient, letters) = rest.split_once(')').ok_or(PauliRegisterParsingError)?;
            (parse_coefficient(coefficient).map_err(|_| PauliRegisterParsingError)?, letters)
        } else if let Some(letters) = text.strip_prefix('-') {
            (Complex64::new(-1.0, 0.0), letters)
        } else {
            (Complex64::new(1.0, 0.0), text.strip_prefix('+').unwrap_or(text))
        };
        let paulis = letters
            .trim()
            .chars()
            .map(Pauli::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| PauliRegisterParsingError)?;
        Ok(PauliRegister::new(paulis, coefficient))
    }
}
