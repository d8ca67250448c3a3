use derive_more::{Display, Error};
use std::str::FromStr;

/// An operator unit attached to a mode or qubit index.
///
/// Ordered by index first, so sorting a product groups units by mode.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexedUnit<T> {
    pub index: usize,
    pub unit: T,
}

#[derive(Debug, Display, Error, PartialEq, Eq, Default)]
#[display("expected an indexed unit such as (u, 1)")]
pub struct IndexedUnitParsingError;

impl<T> IndexedUnit<T> {
    pub fn new(index: usize, unit: T) -> Self {
        IndexedUnit { index, unit }
    }

    pub fn map<U>(self, function: impl FnOnce(T) -> U) -> IndexedUnit<U> {
        IndexedUnit {
            index: self.index,
            unit: function(self.unit),
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for IndexedUnit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.unit, self.index)
    }
}

impl<T: FromStr> FromStr for IndexedUnit<T> {
    type Err = IndexedUnitParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(IndexedUnitParsingError)?;
        let (unit, index) = inner.split_once(',').ok_or(IndexedUnitParsingError)?;
        let unit = unit.trim().parse().map_err(|_| IndexedUnitParsingError)?;
        let index = index.trim().parse().map_err(|_| IndexedUnitParsingError)?;
        Ok(IndexedUnit { index, unit })
    }
}
