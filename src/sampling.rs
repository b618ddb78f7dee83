//! Single random draws from each enumeration, without walking it.
//!
//! Each function returns `None` exactly when the matching generator would be
//! empty, and otherwise an output the generator could have produced, chosen
//! uniformly among them.
use rand::{
    Rng,
    seq::{IndexedRandom, index},
};

use crate::index::project;

///A uniformly random output of [`combinations`](crate::combinations()) for `input` and `r`.
///
///```
///# use lazy_combinatorics::sampling::random_combination;
///let mut rng = rand::rng();
///let x = random_combination(&[1, 2, 3, 4, 5], 3, &mut rng).unwrap();
///assert!(x.is_sorted());
///```
pub fn random_combination<T: Clone, R: Rng + ?Sized>(
    input: &[T],
    r: usize,
    rng: &mut R,
) -> Option<Vec<T>> {
    if r == 0 || r > input.len() {
        return None;
    }
    let mut picked = index::sample(rng, input.len(), r).into_vec();
    picked.sort_unstable();
    Some(project(input, &picked))
}

///A uniformly random output of [`combinations_with_replacement`](crate::combinations_with_replacement()) for `input` and `r`.
pub fn random_combination_with_replacement<T: Clone, R: Rng + ?Sized>(
    input: &[T],
    r: usize,
    rng: &mut R,
) -> Option<Vec<T>> {
    if r == 0 || input.is_empty() {
        return None;
    }
    // sorted draws with replacement are not uniform over multisets; pick a
    // uniform r-subset of n + r - 1 "stars and bars" slots instead
    let slots = input.len().checked_add(r - 1)?;
    let mut picked = index::sample(rng, slots, r).into_vec();
    picked.sort_unstable();
    let indices: Vec<usize> = picked.iter().enumerate().map(|(k, &i)| i - k).collect();
    Some(project(input, &indices))
}

///A uniformly random output of [`permutations`](crate::permutations()) for `input` and `r`.
pub fn random_permutation<T: Clone, R: Rng + ?Sized>(
    input: &[T],
    r: usize,
    rng: &mut R,
) -> Option<Vec<T>> {
    if r == 0 || r > input.len() {
        return None;
    }
    // sample hands back its indices fully shuffled
    let picked = index::sample(rng, input.len(), r).into_vec();
    Some(project(input, &picked))
}

///A uniformly random output of [`product`](crate::product()) for `pools`.
pub fn random_product<T: Clone, P: AsRef<[T]>, R: Rng + ?Sized>(
    pools: &[P],
    rng: &mut R,
) -> Option<Vec<T>> {
    if pools.is_empty() {
        return None;
    }
    pools
        .iter()
        .map(|pool| pool.as_ref().choose(rng).cloned())
        .collect()
}
