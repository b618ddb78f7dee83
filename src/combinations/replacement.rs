use std::iter::FusedIterator;

use crate::{
    CombinatoricsError, Width, count,
    index::{Progress, Remaining, project},
};

///Iterator over the `r`-multisets of a slice, see [`combinations_with_replacement`].
#[derive(Debug, Clone)]
pub struct CombinationsWithReplacement<'a, T> {
    input: &'a [T],
    indices: Vec<usize>,
    progress: Progress,
    remaining: Remaining,
}

impl<'a, T: Clone> CombinationsWithReplacement<'a, T> {
    pub(crate) fn new(input: &'a [T], r: usize) -> Self {
        if r == 0 || input.is_empty() {
            return Self::empty(input, r);
        }
        Self::with_indices(input, vec![0; r])
    }

    ///Like [`combinations_with_replacement`], but reports an index vector that
    ///cannot be allocated instead of aborting.
    ///
    ///# Errors
    ///Returns [`CombinatoricsError::IndexBufferUnavailable`] if the `r`-long
    ///index vector cannot be reserved.
    pub fn try_new(input: &'a [T], r: Width) -> Result<Self, CombinatoricsError> {
        let r = r.get();
        if r == 0 || input.is_empty() {
            return Ok(Self::empty(input, r));
        }
        let mut indices = Vec::new();
        indices
            .try_reserve_exact(r)
            .map_err(|_| CombinatoricsError::IndexBufferUnavailable(r))?;
        indices.resize(r, 0);
        Ok(Self::with_indices(input, indices))
    }

    fn empty(input: &'a [T], r: usize) -> Self {
        log::debug!(
            "combinations_with_replacement: width {r} over {} items is empty",
            input.len()
        );
        CombinationsWithReplacement {
            input,
            indices: vec![],
            progress: Progress::Exhausted,
            remaining: Remaining::none(),
        }
    }

    fn with_indices(input: &'a [T], indices: Vec<usize>) -> Self {
        let remaining = Remaining::new(count::multichoose(input.len(), indices.len()));
        CombinationsWithReplacement {
            input,
            indices,
            progress: Progress::Start,
            remaining,
        }
    }

    fn advance(&mut self) -> bool {
        let last = self.input.len() - 1;
        let Some(i) = self.indices.iter().rposition(|&x| x != last) else {
            return false;
        };
        // the tail takes the incremented value, keeping the vector non-decreasing
        let v = self.indices[i] + 1;
        self.indices[i..].fill(v);
        true
    }
}

impl<T: Clone> Iterator for CombinationsWithReplacement<'_, T> {
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

impl<T: Clone> FusedIterator for CombinationsWithReplacement<'_, T> {}

///All `r`-length selections from `input` where a position may repeat.
///
///Selections are non-decreasing in position and come in lexicographic order.
///There are `C(n + r - 1, r)` of them; `r == 0` or an empty input gives nothing.
///
///```
///# use lazy_combinatorics::combinations_with_replacement;
///let x: Vec<String> = combinations_with_replacement(&['A', 'B', 'C'], 2)
///    .map(String::from_iter)
///    .collect();
///assert_eq!(x, ["AA", "AB", "AC", "BB", "BC", "CC"]);
///```
///
///`r` may exceed `input.len()`, since positions repeat.
///
///# Panics
///Allocates an index vector of length `r` when `input` is not empty, so a huge
///`r` panics or aborts the process like any oversized `Vec`, even when it is
///below [`Width::MAX`]. Use [`try_combinations_with_replacement`] for
///untrusted widths.
pub fn combinations_with_replacement<T: Clone>(
    input: &[T],
    r: usize,
) -> CombinationsWithReplacement<'_, T> {
    CombinationsWithReplacement::new(input, r)
}

///[`combinations_with_replacement`] for a checked [`Width`], failing instead of
///aborting when the index vector cannot be allocated.
///
///```
///# use lazy_combinatorics::{Width, try_combinations_with_replacement};
///let x = try_combinations_with_replacement(&[1, 2], Width::try_from(2_i64)?)?;
///assert_eq!(x.count(), 3);
///# Ok::<(), anyhow::Error>(())
///```
///
///# Errors
///As for [`CombinationsWithReplacement::try_new`].
pub fn try_combinations_with_replacement<T: Clone>(
    input: &[T],
    r: Width,
) -> Result<CombinationsWithReplacement<'_, T>, CombinatoricsError> {
    CombinationsWithReplacement::try_new(input, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(input: &str, r: usize) -> Vec<String> {
        let chars: Vec<char> = input.chars().collect();
        combinations_with_replacement(&chars, r)
            .map(String::from_iter)
            .collect()
    }

    #[test]
    fn lexicographic_pairs() {
        assert_eq!(
            strings("ABCD", 2),
            ["AA", "AB", "AC", "AD", "BB", "BC", "BD", "CC", "CD", "DD"]
        );
    }

    #[test]
    fn wider_than_input() {
        assert_eq!(strings("AB", 3), ["AAA", "AAB", "ABB", "BBB"]);
        assert_eq!(strings("A", 4), ["AAAA"]);
    }

    #[test]
    fn degenerate_widths() {
        assert!(strings("ABC", 0).is_empty());
        assert!(strings("", 2).is_empty());
    }

    #[test]
    fn checked_widths() -> anyhow::Result<()> {
        let input = ['A', 'B', 'C'];
        let x: Vec<String> = try_combinations_with_replacement(&input, Width::new(2)?)?
            .map(String::from_iter)
            .collect();
        assert_eq!(x, strings("ABC", 2));
        assert_eq!(
            try_combinations_with_replacement(&input, Width::new(0)?)?.count(),
            0
        );
        Ok(())
    }

    #[test]
    fn unallocatable_width_is_an_error() -> anyhow::Result<()> {
        let r = Width::new(Width::MAX)?;
        let err = try_combinations_with_replacement(&['a'], r).unwrap_err();
        assert_eq!(err, CombinatoricsError::IndexBufferUnavailable(Width::MAX));
        assert_eq!(err.kind(), crate::ErrorKind::OutOfResources);

        // nothing to allocate without input
        let empty: [char; 0] = [];
        assert_eq!(try_combinations_with_replacement(&empty, r)?.count(), 0);
        Ok(())
    }

    #[test]
    fn size_hint() {
        let input = [0, 1, 2, 3];
        let it = combinations_with_replacement(&input, 3);
        assert_eq!(it.size_hint(), (20, Some(20)));
        assert_eq!(it.count(), 20);
    }
}
