//! Ordered `r`-permutations of a slice, plus Heap's eager enumeration in
//! [`heap`].
use std::iter::FusedIterator;

use crate::{
    count,
    index::{Progress, Remaining, project},
};

pub mod heap;

pub use heap::{HeapPermutations, MAX_HEAP_SIZE, heap_permutations};

///Iterator over the `r`-permutations of a slice, see [`permutations`].
///
///Holds a full permutation of `0..n` of which only the first `r` slots are
///yielded, and one cycle counter per yielded slot. `cycles[i]` counts how many
///values slot `i` still has to try before it must rotate back and carry into
///slot `i - 1`.
#[derive(Debug, Clone)]
pub struct Permutations<'a, T> {
    input: &'a [T],
    indices: Vec<usize>,
    cycles: Vec<usize>,
    progress: Progress,
    remaining: Remaining,
}

impl<'a, T: Clone> Permutations<'a, T> {
    pub(crate) fn new(input: &'a [T], r: usize) -> Self {
        let n = input.len();
        if r == 0 || r > n {
            log::debug!("permutations: width {r} over {n} items is empty");
            return Permutations {
                input,
                indices: vec![],
                cycles: vec![],
                progress: Progress::Exhausted,
                remaining: Remaining::none(),
            };
        }
        Permutations {
            input,
            indices: (0..n).collect(),
            cycles: (0..r).map(|i| n - i).collect(),
            progress: Progress::Start,
            remaining: Remaining::new(count::falling_factorial(n, r)),
        }
    }

    fn advance(&mut self) -> bool {
        let n = self.indices.len();
        for i in (0..self.cycles.len()).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                // slot i has seen every value: restore its segment and carry left
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return true;
            }
        }
        false
    }
}

impl<T: Clone> Iterator for Permutations<'_, T> {
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
        Some(project(self.input, &self.indices[..self.cycles.len()]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl<T: Clone> FusedIterator for Permutations<'_, T> {}

///All orderings of `r` distinct positions of `input`.
///
///Outputs never repeat a position and come in lexicographic order of their
///positions, so a sorted input gives sorted output. There are `n!/(n-r)!` of
///them; `r == 0` or `r > n` gives nothing.
///
///```
///# use lazy_combinatorics::permutations;
///let x: Vec<String> = permutations(&['A', 'B', 'C'], 2)
///    .map(String::from_iter)
///    .collect();
///assert_eq!(x, ["AB", "AC", "BA", "BC", "CA", "CB"]);
///```
pub fn permutations<T: Clone>(input: &[T], r: usize) -> Permutations<'_, T> {
    Permutations::new(input, r)
}

///[`permutations`] of the full width of `input`.
pub fn all_permutations<T: Clone>(input: &[T]) -> Permutations<'_, T> {
    Permutations::new(input, input.len())
}
