//! Coefficient-unit pairs, products of units and sums of products, generic over the unit type.

use derive_more::{Display, Error};
use fermion_core::{format_coefficient, is_negligible, parse_coefficient, Complex64, Phase};
use smallvec::SmallVec;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display as FmtDisplay;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

mod indexed;
pub use indexed::{IndexedProduct, IndexedSum, LadderProduct, LadderSum, LadderUnit};

const ONE: Complex64 = Complex64::new(1.0, 0.0);
const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// A single unit with a coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term<T> {
    pub coefficient: Complex64,
    pub unit: T,
}

impl<T> Term<T> {
    pub fn new(coefficient: Complex64, unit: T) -> Self {
        Term { coefficient, unit }
    }
}

impl<T: PartialEq + Clone> Term<T> {
    /// Sum of two terms over the same unit.
    pub fn try_add(&self, other: &Term<T>) -> Option<Term<T>> {
        (self.unit == other.unit).then(|| Term::new(self.coefficient + other.coefficient, self.unit.clone()))
    }
}

impl<T: Clone> Mul for Term<T> {
    type Output = ProductTerm<T>;

    fn mul(self, other: Term<T>) -> ProductTerm<T> {
        ProductTerm::from_terms([self, other])
    }
}

/// Ordered product of units with a single coefficient.
///
/// A product with a negligible coefficient is the canonical zero: no units and coefficient zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductTerm<T> {
    coefficient: Complex64,
    units: SmallVec<[T; 4]>,
}

#[derive(Debug, Display, Error, PartialEq, Eq, Default)]
#[display("expected a product such as (0.5) [(u, 1) | (d, 0)]")]
pub struct ProductParsingError;

impl<T> ProductTerm<T> {
    pub fn new(coefficient: Complex64, units: impl IntoIterator<Item = T>) -> Self {
        if is_negligible(coefficient) {
            return ProductTerm::zero();
        }
        ProductTerm {
            coefficient,
            units: units.into_iter().collect(),
        }
    }

    pub fn identity() -> Self {
        ProductTerm {
            coefficient: ONE,
            units: SmallVec::new(),
        }
    }

    pub fn zero() -> Self {
        ProductTerm {
            coefficient: ZERO,
            units: SmallVec::new(),
        }
    }

    pub fn from_unit(unit: T) -> Self {
        ProductTerm::new(ONE, [unit])
    }

    /// Folds the coefficients of `terms` into one.
    pub fn from_terms(terms: impl IntoIterator<Item = Term<T>>) -> Self {
        let mut coefficient = ONE;
        let mut units: SmallVec<[T; 4]> = SmallVec::new();
        for term in terms {
            coefficient *= term.coefficient;
            units.push(term.unit);
        }
        ProductTerm::new(coefficient, units)
    }

    #[must_use]
    pub fn coefficient(&self) -> Complex64 {
        self.coefficient
    }

    pub fn units(&self) -> &[T] {
        &self.units
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        is_negligible(self.coefficient)
    }

    pub(crate) fn add_coefficient(&mut self, coefficient: Complex64) {
        self.coefficient += coefficient;
    }
}

impl<T: Clone> ProductTerm<T> {
    /// This product followed by `unit`.
    pub fn appended(&self, unit: T) -> Self {
        let mut units = self.units.clone();
        units.push(unit);
        ProductTerm::new(self.coefficient, units)
    }

    /// This product without its last unit, with the same coefficient.
    pub fn without_last(&self) -> Self {
        let end = self.units.len().saturating_sub(1);
        ProductTerm::new(self.coefficient, self.units[..end].iter().cloned())
    }

    pub fn scaled(&self, factor: Complex64) -> Self {
        ProductTerm::new(self.coefficient * factor, self.units.iter().cloned())
    }

    pub fn with_phase(&self, phase: Phase) -> Self {
        ProductTerm::new(phase * self.coefficient, self.units.iter().cloned())
    }

    pub fn terms(&self) -> impl Iterator<Item = Term<T>> + '_ {
        self.units.iter().cloned().map(|unit| Term::new(ONE, unit))
    }
}

impl<T: FmtDisplay> ProductTerm<T> {
    /// Canonical text of the units, used to merge like terms.
    pub fn signature(&self) -> String {
        let units: Vec<String> = self.units.iter().map(ToString::to_string).collect();
        format!("[{}]", units.join(" | "))
    }
}

impl<T: Clone> Mul for &ProductTerm<T> {
    type Output = ProductTerm<T>;

    fn mul(self, other: &ProductTerm<T>) -> ProductTerm<T> {
        ProductTerm::new(
            self.coefficient * other.coefficient,
            self.units.iter().chain(other.units.iter()).cloned(),
        )
    }
}

impl<T: Clone> Mul for ProductTerm<T> {
    type Output = ProductTerm<T>;

    fn mul(self, other: ProductTerm<T>) -> ProductTerm<T> {
        &self * &other
    }
}

impl<T: Clone> Mul<Complex64> for ProductTerm<T> {
    type Output = ProductTerm<T>;

    fn mul(self, factor: Complex64) -> ProductTerm<T> {
        self.scaled(factor)
    }
}

impl<T: Clone> Mul<Phase> for ProductTerm<T> {
    type Output = ProductTerm<T>;

    fn mul(self, phase: Phase) -> ProductTerm<T> {
        self.with_phase(phase)
    }
}

impl<T: Clone> Neg for ProductTerm<T> {
    type Output = ProductTerm<T>;

    fn neg(self) -> ProductTerm<T> {
        self.with_phase(Phase::MinusOne)
    }
}

impl<T: FmtDisplay> std::fmt::Display for ProductTerm<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.coefficient != ONE {
            write!(f, "({}) ", format_coefficient(self.coefficient))?;
        }
        write!(f, "{}", self.signature())
    }
}

impl<T: FromStr> FromStr for ProductTerm<T> {
    type Err = ProductParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (coefficient, rest) = match text.strip_prefix('(') {
            Some(rest) => {
                let (coefficient, rest) = rest.split_once(')').ok_or(ProductParsingError)?;
                (parse_coefficient(coefficient).map_err(|_| ProductParsingError)?, rest.trim_start())
            }
            None => (ONE, text),
        };
        let inner = rest
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or(ProductParsingError)?;
        let units = if inner.trim().is_empty() {
            Vec::new()
        } else {
            inner
                .split('|')
                .map(|unit| unit.parse().map_err(|_| ProductParsingError))
                .collect::<Result<Vec<T>, _>>()?
        };
        Ok(ProductTerm::new(coefficient, units))
    }
}

/// Sum of products, with like products merged by signature.
///
/// Products with negligible coefficients are dropped. Scalars are always folded into the products.
#[derive(Clone, Debug, PartialEq)]
pub struct SumExpression<T> {
    terms: BTreeMap<String, ProductTerm<T>>,
}

#[derive(Debug, Display, Error, PartialEq, Eq, Default)]
#[display("expected a sum such as {{[(u, 0)]; (-1) [(d, 1)]}}")]
pub struct SumParsingError;

impl<T> SumExpression<T> {
    pub fn zero() -> Self {
        SumExpression { terms: BTreeMap::new() }
    }

    pub fn terms(&self) -> impl Iterator<Item = &ProductTerm<T>> {
        self.terms.values()
    }

    pub fn get(&self, signature: &str) -> Option<&ProductTerm<T>> {
        self.terms.get(signature)
    }

    /// Coefficient of the product with `signature`, zero when absent.
    #[must_use]
    pub fn coefficient(&self, signature: &str) -> Complex64 {
        self.get(signature).map_or(ZERO, ProductTerm::coefficient)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<T: Clone + FmtDisplay> SumExpression<T> {
    pub fn from_products(products: impl IntoIterator<Item = ProductTerm<T>>) -> Self {
        let mut accumulator: HashMap<String, ProductTerm<T>> = HashMap::new();
        for product in products {
            if product.is_zero() {
                continue;
            }
            match accumulator.entry(product.signature()) {
                std::collections::hash_map::Entry::Occupied(mut entry) => {
                    entry.get_mut().add_coefficient(product.coefficient);
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    entry.insert(product);
                }
            }
        }
        SumExpression {
            terms: accumulator.into_iter().filter(|(_, product)| !product.is_zero()).collect(),
        }
    }

    pub fn from_product(product: ProductTerm<T>) -> Self {
        SumExpression::from_products([product])
    }

    pub fn identity() -> Self {
        SumExpression::from_product(ProductTerm::identity())
    }

    pub fn scaled(&self, factor: Complex64) -> Self {
        SumExpression::from_products(self.terms().map(|product| product.scaled(factor)))
    }
}

impl<T: Clone + FmtDisplay> Add for &SumExpression<T> {
    type Output = SumExpression<T>;

    fn add(self, other: &SumExpression<T>) -> SumExpression<T> {
        SumExpression::from_products(self.terms().chain(other.terms()).cloned())
    }
}

impl<T: Clone + FmtDisplay> Add for SumExpression<T> {
    type Output = SumExpression<T>;

    fn add(self, other: SumExpression<T>) -> SumExpression<T> {
        SumExpression::from_products(self.terms.into_values().chain(other.terms.into_values()))
    }
}

impl<T: Clone + FmtDisplay> Neg for &SumExpression<T> {
    type Output = SumExpression<T>;

    fn neg(self) -> SumExpression<T> {
        SumExpression::from_products(self.terms().map(|product| product.with_phase(Phase::MinusOne)))
    }
}

impl<T: Clone + FmtDisplay> Neg for SumExpression<T> {
    type Output = SumExpression<T>;

    fn neg(self) -> SumExpression<T> {
        -&self
    }
}

impl<T: Clone + FmtDisplay> Sub for &SumExpression<T> {
    type Output = SumExpression<T>;

    fn sub(self, other: &SumExpression<T>) -> SumExpression<T> {
        self + &(-other)
    }
}

impl<T: Clone + FmtDisplay> Sub for SumExpression<T> {
    type Output = SumExpression<T>;

    fn sub(self, other: SumExpression<T>) -> SumExpression<T> {
        &self - &other
    }
}

impl<T: Clone + FmtDisplay> Mul for &SumExpression<T> {
    type Output = SumExpression<T>;

    fn mul(self, other: &SumExpression<T>) -> SumExpression<T> {
        SumExpression::from_products(
            self.terms().flat_map(|left| other.terms().map(move |right| left * right)),
        )
    }
}

impl<T: Clone + FmtDisplay> Mul for SumExpression<T> {
    type Output = SumExpression<T>;

    fn mul(self, other: SumExpression<T>) -> SumExpression<T> {
        &self * &other
    }
}

impl<T: Clone + FmtDisplay> Mul<Complex64> for SumExpression<T> {
    type Output = SumExpression<T>;

    fn mul(self, factor: Complex64) -> SumExpression<T> {
        self.scaled(factor)
    }
}

impl<T: Clone + FmtDisplay> FromIterator<ProductTerm<T>> for SumExpression<T> {
    fn from_iter<I: IntoIterator<Item = ProductTerm<T>>>(iter: I) -> Self {
        SumExpression::from_products(iter)
    }
}

impl<T: FmtDisplay> std::fmt::Display for SumExpression<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (position, product) in self.terms().enumerate() {
            if position > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{product}")?;
        }
        write!(f, "}}")
    }
}

impl<T: Clone + FmtDisplay + FromStr> FromStr for SumExpression<T> {
    type Err = SumParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or(SumParsingError)?;
        if inner.trim().is_empty() {
            return Ok(SumExpression::zero());
        }
        let products = inner
            .split(';')
            .map(|product| product.parse::<ProductTerm<T>>().map_err(|_| SumParsingError))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SumExpression::from_products(products))
    }
}
