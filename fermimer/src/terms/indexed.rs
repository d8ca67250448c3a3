use super::{ProductTerm, SumExpression};
use fermion_core::{IndexedUnit, LadderOperatorUnit};

pub type IndexedProduct<T> = ProductTerm<IndexedUnit<T>>;
pub type IndexedSum<T> = SumExpression<IndexedUnit<T>>;

pub type LadderUnit = IndexedUnit<LadderOperatorUnit>;
pub type LadderProduct = IndexedProduct<LadderOperatorUnit>;
pub type LadderSum = IndexedSum<LadderOperatorUnit>;

impl ProductTerm<LadderUnit> {
    pub fn raises(&self) -> impl Iterator<Item = &LadderUnit> {
        self.units().iter().filter(|unit| unit.unit == LadderOperatorUnit::Raise)
    }

    pub fn lowers(&self) -> impl Iterator<Item = &LadderUnit> {
        self.units().iter().filter(|unit| unit.unit == LadderOperatorUnit::Lower)
    }

    /// Every creation operator is left of every annihilation operator.
    ///
    /// Identity units are ignored.
    #[must_use]
    pub fn is_in_normal_order(&self) -> bool {
        let mut lowered = false;
        for unit in self.units() {
            match unit.unit {
                LadderOperatorUnit::Identity => {}
                LadderOperatorUnit::Lower => lowered = true,
                LadderOperatorUnit::Raise if lowered => return false,
                LadderOperatorUnit::Raise => {}
            }
        }
        true
    }

    /// Normal order with creation indices strictly ascending and annihilation indices strictly descending.
    #[must_use]
    pub fn is_in_index_order(&self) -> bool {
        let raises: Vec<usize> = self.raises().map(|unit| unit.index).collect();
        let lowers: Vec<usize> = self.lowers().map(|unit| unit.index).collect();
        self.is_in_normal_order()
            && raises.windows(2).all(|pair| pair[0] < pair[1])
            && lowers.windows(2).all(|pair| pair[0] > pair[1])
    }

    /// Hermitian conjugate: reversed units, creation and annihilation swapped, coefficient conjugated.
    pub fn adjoint(&self) -> Self {
        ProductTerm::new(
            self.coefficient().conj(),
            self.units()
                .iter()
                .rev()
                .map(|unit| unit.map(LadderOperatorUnit::adjoint)),
        )
    }
}

impl SumExpression<LadderUnit> {
    #[must_use]
    pub fn is_in_normal_order(&self) -> bool {
        self.terms().all(ProductTerm::is_in_normal_order)
    }

    #[must_use]
    pub fn is_in_index_order(&self) -> bool {
        self.terms().all(ProductTerm::is_in_index_order)
    }

    pub fn adjoint(&self) -> Self {
        SumExpression::from_products(self.terms().map(ProductTerm::adjoint))
    }
}
