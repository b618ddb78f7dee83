//! Lexicographic `r`-subsets of a slice, with and without repetition.
use std::iter::FusedIterator;

use crate::{
    count,
    index::{Progress, Remaining, project},
};

pub mod replacement;

pub use replacement::{
    CombinationsWithReplacement, combinations_with_replacement, try_combinations_with_replacement,
};

///Iterator over the `r`-combinations of a slice, see [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    input: &'a [T],
    indices: Vec<usize>,
    progress: Progress,
    remaining: Remaining,
}

impl<'a, T: Clone> Combinations<'a, T> {
    pub(crate) fn new(input: &'a [T], r: usize) -> Self {
        let n = input.len();
        if r == 0 || r > n {
            log::debug!("combinations: width {r} over {n} items is empty");
            return Combinations {
                input,
                indices: vec![],
                progress: Progress::Exhausted,
                remaining: Remaining::none(),
            };
        }
        Combinations {
            input,
            indices: (0..r).collect(),
            progress: Progress::Start,
            remaining: Remaining::new(count::binomial(n, r)),
        }
    }

    ///Moves the index vector to the next strictly increasing selection.
    ///Returns `false` once every position sits at its maximum.
    fn advance(&mut self) -> bool {
        let n = self.input.len();
        let r = self.indices.len();

        if r == 1 {
            self.indices[0] += 1;
            return self.indices[0] < n;
        }

        // position i can hold at most i + n - r
        let Some(i) = (0..r).rev().find(|&i| self.indices[i] != i + n - r) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..r {
            self.indices[j] = self.indices[i] + (j - i);
        }
        true
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.progress {
            Progress::Exhausted => return None,
            Progress::Start => self.progress = Progress::Running,
            Progress::Running => {
                if !self.advance() {
                    self.progress = Progress::Exhausted;
                    self.remaining.clear();
                    return None;
                }
            }
        }
        self.remaining.take_one();
        Some(project(self.input, &self.indices))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl<T: Clone> FusedIterator for Combinations<'_, T> {}

///All `r`-length subsequences of `input`, without repeated positions.
///
///Each output keeps the elements in input order, and the outputs come in
///lexicographic order of their positions, so a sorted input gives sorted
///output. There are `C(n, r)` of them; `r == 0` or `r > n` gives nothing.
///
///```
///# use lazy_combinatorics::combinations;
///let x: Vec<String> = combinations(&['A', 'B', 'C', 'D'], 2)
///    .map(String::from_iter)
///    .collect();
///assert_eq!(x, ["AB", "AC", "AD", "BC", "BD", "CD"]);
///```
pub fn combinations<T: Clone>(input: &[T], r: usize) -> Combinations<'_, T> {
    Combinations::new(input, r)
}
