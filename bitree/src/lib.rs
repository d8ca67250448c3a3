pub mod bit;
pub use bit::lowest_set_bit;

pub mod fenwick;
pub use fenwick::{ancestors, descendants, prefix_indices, FenwickTree};

pub mod index_set;
pub use index_set::IndexSet;
