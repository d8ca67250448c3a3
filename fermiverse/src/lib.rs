pub mod bravyi_kitaev;
pub mod encoder;
pub mod jordan_wigner;
pub mod parity;
pub mod scheme;
pub mod ternary_tree;
pub mod tree;

pub use bravyi_kitaev::BravyiKitaev;
pub use encoder::{encode_product, encode_sum, Encoding};
pub use jordan_wigner::JordanWigner;
pub use parity::Parity;
pub use scheme::{index_set_majoranas, satisfies_anticommutation, EncodingScheme, MajoranaEncoding};
pub use ternary_tree::TernaryTree;
pub use tree::{EncodingTree, TreeEncoding, TreeError, TreeNode};
