//! Sorting that reports how many adjacent transpositions it performed.
//!
//! Reordering `m` anticommuting operators multiplies a term by `(-1)^swaps`, so the swap count
//! is the inversion count of the input. Equal elements are never exchanged.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Selection sort where `precedes(a, b)` is true when `a` must come strictly before `b`.
///
/// Returns the sorted items and the number of adjacent swaps. Quadratic in the number of items.
pub fn sort_with_swap_count<T>(mut items: Vec<T>, precedes: impl Fn(&T, &T) -> bool) -> (Vec<T>, usize) {
    let mut swaps = 0;
    for position in 0..items.len() {
        let mut selected = position;
        for candidate in position + 1..items.len() {
            if precedes(&items[candidate], &items[selected]) {
                selected = candidate;
            }
        }
        swaps += selected - position;
        items[position..=selected].rotate_right(1);
    }
    (items, swaps)
}

pub fn sort_by_key_with_swap_count<T, K: Ord>(
    items: Vec<T>,
    key: impl Fn(&T) -> K,
    order: SortOrder,
) -> (Vec<T>, usize) {
    match order {
        SortOrder::Ascending => sort_with_swap_count(items, |left, right| key(left) < key(right)),
        SortOrder::Descending => sort_with_swap_count(items, |left, right| key(left) > key(right)),
    }
}
