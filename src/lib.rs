//! Lazy, order-preserving enumeration of combinations, permutations and
//! Cartesian products over finite slices, plus Heap's-algorithm eager
//! permutation.
//!
//! Every lazy generator borrows (or, for [`product`], collects) its input,
//! owns its index state exclusively and hands out a fresh `Vec<T>` per step.
//! Degenerate widths produce empty iterators rather than errors.
//!
//!```
//!use lazy_combinatorics::{combinations, permutations};
//!
//!let letters = ['A', 'B', 'C', 'D'];
//!let pairs: Vec<String> = combinations(&letters, 2).map(String::from_iter).collect();
//!assert_eq!(pairs, ["AB", "AC", "AD", "BC", "BD", "CD"]);
//!assert_eq!(permutations(&letters, 2).count(), 12);
//!```
pub mod combinations;
pub mod count;
mod error;
mod index;
pub mod permutations;
mod product;
#[cfg(feature = "sampling")]
pub mod sampling;
mod slice;
mod width;

pub use combinations::{
    Combinations, CombinationsWithReplacement, combinations, combinations_with_replacement,
    try_combinations_with_replacement,
};
pub use error::{CombinatoricsError, ErrorKind};
pub use permutations::{
    HeapPermutations, MAX_HEAP_SIZE, Permutations, all_permutations, heap_permutations,
    permutations,
};
pub use product::{Product, product};
pub use slice::Combinatorics;
pub use width::Width;
