use crate::{All, IndexedUnit};
use derive_more::{Display, Error};
use std::str::FromStr;

/// Second quantised operator acting on a single mode.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LadderOperatorUnit {
    #[default]
    Identity,
    /// Creation operator
    Raise,
    /// Annihilation operator
    Lower,
}

#[derive(Debug, Display, Error, PartialEq, Eq, Default)]
#[display("expected one of I, u, d")]
pub struct LadderCharacterError;

impl LadderOperatorUnit {
    #[must_use]
    pub fn adjoint(self) -> LadderOperatorUnit {
        match self {
            LadderOperatorUnit::Identity => LadderOperatorUnit::Identity,
            LadderOperatorUnit::Raise => LadderOperatorUnit::Lower,
            LadderOperatorUnit::Lower => LadderOperatorUnit::Raise,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            LadderOperatorUnit::Identity => 'I',
            LadderOperatorUnit::Raise => 'u',
            LadderOperatorUnit::Lower => 'd',
        }
    }
}

impl All<3> for LadderOperatorUnit {
    fn all() -> [Self; 3] {
        [
            LadderOperatorUnit::Identity,
            LadderOperatorUnit::Raise,
            LadderOperatorUnit::Lower,
        ]
    }
}

impl std::fmt::Display for LadderOperatorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for LadderOperatorUnit {
    type Err = LadderCharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "I" => Ok(LadderOperatorUnit::Identity),
            "u" => Ok(LadderOperatorUnit::Raise),
            "d" => Ok(LadderOperatorUnit::Lower),
            _ => Err(LadderCharacterError),
        }
    }
}

/// Creation operator on `mode`.
#[must_use]
pub fn raise(mode: usize) -> IndexedUnit<LadderOperatorUnit> {
    IndexedUnit::new(mode, LadderOperatorUnit::Raise)
}

/// Annihilation operator on `mode`.
#[must_use]
pub fn lower(mode: usize) -> IndexedUnit<LadderOperatorUnit> {
    IndexedUnit::new(mode, LadderOperatorUnit::Lower)
}

#[must_use]
pub fn identity(mode: usize) -> IndexedUnit<LadderOperatorUnit> {
    IndexedUnit::new(mode, LadderOperatorUnit::Identity)
}
