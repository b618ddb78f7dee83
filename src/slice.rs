use crate::{Combinations, CombinationsWithReplacement, Permutations};

///Method-call access to the slice generators.
///
///```
///# use lazy_combinatorics::Combinatorics;
///let v = vec![1, 2, 3];
///assert_eq!(v.combinations(2).count(), 3);
///assert_eq!(v.combinations_with_replacement(2).count(), 6);
///assert_eq!(v.permutations(2).count(), 6);
///```
pub trait Combinatorics<T> {
    ///See [`crate::combinations()`].
    fn combinations(&self, r: usize) -> Combinations<'_, T>;
    ///See [`crate::combinations_with_replacement()`].
    fn combinations_with_replacement(&self, r: usize) -> CombinationsWithReplacement<'_, T>;
    ///See [`crate::permutations()`].
    fn permutations(&self, r: usize) -> Permutations<'_, T>;
}

impl<T: Clone> Combinatorics<T> for [T] {
    fn combinations(&self, r: usize) -> Combinations<'_, T> {
        crate::combinations(self, r)
    }

    fn combinations_with_replacement(&self, r: usize) -> CombinationsWithReplacement<'_, T> {
        crate::combinations_with_replacement(self, r)
    }

    fn permutations(&self, r: usize) -> Permutations<'_, T> {
        crate::permutations(self, r)
    }
}
