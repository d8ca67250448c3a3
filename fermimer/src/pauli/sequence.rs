use super::PauliRegister;
use fermion_core::{is_negligible, Complex64};
use std::collections::{BTreeMap, HashMap};
use std::ops::{Add, Mul, Neg, Sub};
use tracing::trace;

/// Sum of Pauli registers with like signatures merged.
///
/// Registers whose coefficient falls below the tolerance are pruned, so the empty sequence is zero.
#[must_use]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PauliRegisterSequence {
    registers: BTreeMap<String, PauliRegister>,
}

impl PauliRegisterSequence {
    pub fn zero() -> Self {
        PauliRegisterSequence::default()
    }

    pub fn identity(width: usize) -> Self {
        PauliRegisterSequence::from_register(PauliRegister::identity(width))
    }

    pub fn from_register(register: PauliRegister) -> Self {
        PauliRegisterSequence::from_registers([register])
    }

    pub fn from_registers(registers: impl IntoIterator<Item = PauliRegister>) -> Self {
        let mut accumulator: HashMap<String, PauliRegister> = HashMap::new();
        let mut input_count = 0usize;
        for register in registers {
            input_count += 1;
            match accumulator.entry(register.signature()) {
                std::collections::hash_map::Entry::Occupied(mut entry) => {
                    entry.get_mut().add_coefficient(register.coefficient());
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    entry.insert(register);
                }
            }
        }
        let registers: BTreeMap<String, PauliRegister> = accumulator
            .into_iter()
            .filter(|(_, register)| !is_negligible(register.coefficient()))
            .collect();
        trace!(input_count, term_count = registers.len(), "merged pauli registers");
        PauliRegisterSequence { registers }
    }

    pub fn from_sequences(sequences: impl IntoIterator<Item = PauliRegisterSequence>) -> Self {
        PauliRegisterSequence::from_registers(sequences.into_iter().flat_map(|sequence| sequence.registers.into_values()))
    }

    /// Coefficient of the register with `signature`, zero when absent.
    #[must_use]
    pub fn coefficient(&self, signature: &str) -> Complex64 {
        self.registers
            .get(signature)
            .map_or(Complex64::new(0.0, 0.0), PauliRegister::coefficient)
    }

    #[must_use]
    pub fn get(&self, signature: &str) -> Option<&PauliRegister> {
        self.registers.get(signature)
    }

    /// Signature and coefficient pairs in signature order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, Complex64)> {
        self.registers
            .iter()
            .map(|(signature, register)| (signature.as_str(), register.coefficient()))
    }

    pub fn registers(&self) -> impl Iterator<Item = &PauliRegister> {
        self.registers.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    /// Largest register width, zero for the empty sequence.
    #[must_use]
    pub fn width(&self) -> usize {
        self.registers().map(PauliRegister::width).max().unwrap_or(0)
    }

    pub fn scaled(&self, factor: Complex64) -> Self {
        PauliRegisterSequence::from_registers(self.registers().map(|register| register.scaled(factor)))
    }
}

impl FromIterator<PauliRegister> for PauliRegisterSequence {
    fn from_iter<I: IntoIterator<Item = PauliRegister>>(iter: I) -> Self {
        PauliRegisterSequence::from_registers(iter)
    }
}

impl Add for &PauliRegisterSequence {
    type Output = PauliRegisterSequence;

    fn add(self, other: &PauliRegisterSequence) -> PauliRegisterSequence {
        PauliRegisterSequence::from_registers(self.registers().chain(other.registers()).cloned())
    }
}

impl Add for PauliRegisterSequence {
    type Output = PauliRegisterSequence;

    fn add(self, other: PauliRegisterSequence) -> PauliRegisterSequence {
        PauliRegisterSequence::from_sequences([self, other])
    }
}

impl Neg for &PauliRegisterSequence {
    type Output = PauliRegisterSequence;

    fn neg(self) -> PauliRegisterSequence {
        PauliRegisterSequence::from_registers(self.registers().cloned().map(Neg::neg))
    }
}

impl Neg for PauliRegisterSequence {
    type Output = PauliRegisterSequence;

    fn neg(self) -> PauliRegisterSequence {
        -&self
    }
}

impl Sub for &PauliRegisterSequence {
    type Output = PauliRegisterSequence;

    fn sub(self, other: &PauliRegisterSequence) -> PauliRegisterSequence {
        self + &(-other)
    }
}

impl Sub for PauliRegisterSequence {
    type Output = PauliRegisterSequence;

    fn sub(self, other: PauliRegisterSequence) -> PauliRegisterSequence {
        &self - &other
    }
}

/// Distributes over the registers of both sequences.
impl Mul for &PauliRegisterSequence {
    type Output = PauliRegisterSequence;

    fn mul(self, other: &PauliRegisterSequence) -> PauliRegisterSequence {
        PauliRegisterSequence::from_registers(
            self.registers()
                .flat_map(|left| other.registers().map(move |right| left * right)),
        )
    }
}

impl Mul for PauliRegisterSequence {
    type Output = PauliRegisterSequence;

    fn mul(self, other: PauliRegisterSequence) -> PauliRegisterSequence {
        &self * &other
    }
}

impl Mul<Complex64> for PauliRegisterSequence {
    type Output = PauliRegisterSequence;

    fn mul(self, factor: Complex64) -> PauliRegisterSequence {
        self.scaled(factor)
    }
}

impl std::fmt::Display for PauliRegisterSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }
        for (position, register) in self.registers().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "{register}")?;
        }
        Ok(())
    }
}
