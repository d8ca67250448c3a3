use sorted_iter::{assume::AssumeSortedByItemExt, SortedIterator};
use sorted_vec::SortedSet;
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub};

/// Sorted set of qubit or mode indices.
#[must_use]
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct IndexSet {
    indexes: SortedSet<usize>,
}

impl IndexSet {
    pub fn new() -> IndexSet {
        IndexSet {
            indexes: SortedSet::new(),
        }
    }

    pub fn singleton(value: usize) -> Self {
        IndexSet {
            indexes: SortedSet::from_unsorted(vec![value]),
        }
    }

    /// Indices `start..end`.
    pub fn range(start: usize, end: usize) -> Self {
        (start..end).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indexes.binary_search(&index).is_ok()
    }

    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.indexes.last().copied()
    }

    pub fn iter(&self) -> impl SortedIterator<Item = usize> + '_ {
        self.indexes.iter().copied().assume_sorted_by_item()
    }

    /// Returns true when `index` was not present before.
    pub fn insert(&mut self, index: usize) -> bool {
        !self.indexes.find_or_insert(index).is_found()
    }

    /// Returns true when `index` was present before.
    pub fn remove(&mut self, index: usize) -> bool {
        self.indexes.remove_item(&index).is_some()
    }

    pub fn toggle(&mut self, index: usize) {
        let found = self.indexes.find_or_insert(index);
        if found.is_found() {
            self.indexes.remove_index(found.index());
        }
    }

    pub fn clear(&mut self) {
        self.indexes.clear();
    }

    pub fn union(&self, other: &IndexSet) -> IndexSet {
        let indexes: Vec<usize> = self.iter().union(other.iter()).collect();
        IndexSet { indexes: indexes.into() }
    }

    pub fn intersection(&self, other: &IndexSet) -> IndexSet {
        let indexes: Vec<usize> = self.iter().intersection(other.iter()).collect();
        IndexSet { indexes: indexes.into() }
    }

    pub fn difference(&self, other: &IndexSet) -> IndexSet {
        let indexes: Vec<usize> = self.iter().difference(other.iter()).collect();
        IndexSet { indexes: indexes.into() }
    }

    pub fn symmetric_difference(&self, other: &IndexSet) -> IndexSet {
        let indexes: Vec<usize> = self.iter().symmetric_difference(other.iter()).collect();
        IndexSet { indexes: indexes.into() }
    }

    #[must_use]
    pub fn is_subset(&self, other: &IndexSet) -> bool {
        self.iter().all(|index| other.contains(index))
    }

    #[must_use]
    pub fn is_disjoint(&self, other: &IndexSet) -> bool {
        self.iter().intersection(other.iter()).next().is_none()
    }
}

impl Default for IndexSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<Iterator: IntoIterator<Item = usize>>(iterator: Iterator) -> Self {
        let indexes = SortedSet::from_unsorted(iterator.into_iter().collect());
        IndexSet { indexes }
    }
}

impl IntoIterator for IndexSet {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.indexes.into_iter()
    }
}

impl<'life> IntoIterator for &'life IndexSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'life, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.indexes.iter().copied()
    }
}

impl Extend<usize> for IndexSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for index in iter {
            self.indexes.find_or_insert(index);
        }
    }
}

impl std::fmt::Display for IndexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (position, index) in self.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "}}")
    }
}

impl BitOr for &IndexSet {
    type Output = IndexSet;

    fn bitor(self, other: &IndexSet) -> IndexSet {
        self.union(other)
    }
}

impl BitAnd for &IndexSet {
    type Output = IndexSet;

    fn bitand(self, other: &IndexSet) -> IndexSet {
        self.intersection(other)
    }
}

impl BitXor for &IndexSet {
    type Output = IndexSet;

    fn bitxor(self, other: &IndexSet) -> IndexSet {
        self.symmetric_difference(other)
    }
}

impl Sub for &IndexSet {
    type Output = IndexSet;

    fn sub(self, other: &IndexSet) -> IndexSet {
        self.difference(other)
    }
}

impl BitOrAssign<&IndexSet> for IndexSet {
    fn bitor_assign(&mut self, other: &IndexSet) {
        *self = self.union(other);
    }
}

impl BitXorAssign<&IndexSet> for IndexSet {
    fn bitxor_assign(&mut self, other: &IndexSet) {
        for index in other {
            self.toggle(index);
        }
    }
}

#[test]
fn toggle_test() {
    let mut set = IndexSet::range(0, 3);
    set.toggle(1);
    set.toggle(5);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 5]);
    assert_eq!(format!("{set}"), "{0, 2, 5}");
}
