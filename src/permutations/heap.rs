//! Heap's algorithm: every permutation of a buffer, by one swap per step.
//!
//! Unlike [`super::permutations()`] this runs to completion and hands back the
//! whole collection, in no particular order. The collection holds `size!`
//! entries, so anything much past ten positions will exhaust memory. The limit
//! is a caller contract: [`HeapPermutations`] refuses sizes above its
//! configured limit (default [`MAX_HEAP_SIZE`]) instead of trying. Callers that
//! need bigger inputs should pull from [`super::permutations()`] lazily instead.
use crate::{CombinatoricsError, count};

///Largest buffer size permuted by default.
pub const MAX_HEAP_SIZE: usize = 10;

///Configuration for eager Heap's-algorithm enumeration.
///
///```
///# use lazy_combinatorics::HeapPermutations;
///let mut buffer = ['a', 'b', 'c'];
///let all = HeapPermutations::new().permute_chars(&mut buffer, 3)?;
///assert_eq!(all, ["abc", "bac", "cab", "acb", "bca", "cba"]);
///# Ok::<(), anyhow::Error>(())
///```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapPermutations {
    limit: usize,
}

impl Default for HeapPermutations {
    fn default() -> Self {
        HeapPermutations {
            limit: MAX_HEAP_SIZE,
        }
    }
}

impl HeapPermutations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    ///Allow (or forbid) sizes up to `limit`.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    ///Every permutation of the first `size` positions of `buffer`.
    ///
    ///Each entry is a copy of the whole buffer, so positions from `size` onward
    ///appear unchanged at the end of every entry. `size == 0` gives an empty
    ///collection. The buffer is left in whatever order the last swap produced.
    ///
    ///# Errors
    ///- [`CombinatoricsError::BufferTooShort`] if `size > buffer.len()`.
    ///- [`CombinatoricsError::OutOfResources`] if `size` is above the limit or
    ///  the `size!` entries cannot be reserved.
    pub fn permute<T: Clone>(
        &self,
        buffer: &mut [T],
        size: usize,
    ) -> Result<Vec<Vec<T>>, CombinatoricsError> {
        if size > buffer.len() {
            return Err(CombinatoricsError::BufferTooShort {
                size,
                len: buffer.len(),
            });
        }
        let refuse = CombinatoricsError::OutOfResources {
            size,
            limit: self.limit,
        };
        if size > self.limit {
            log::debug!("heap permutations: size {size} is above the limit {}", self.limit);
            return Err(refuse);
        }
        if size == 0 {
            return Ok(vec![]);
        }

        let total = count::factorial(size).ok_or(refuse)?;
        let mut out = Vec::new();
        out.try_reserve_exact(total).map_err(|_| refuse)?;
        heap(buffer, size, &mut out);
        log::trace!("heap permutations: {} entries for size {size}", out.len());
        Ok(out)
    }

    ///[`HeapPermutations::permute`] on characters, collecting each entry into a
    ///[`String`].
    ///
    ///# Errors
    ///As for [`HeapPermutations::permute`].
    pub fn permute_chars(
        &self,
        buffer: &mut [char],
        size: usize,
    ) -> Result<Vec<String>, CombinatoricsError> {
        Ok(self
            .permute(buffer, size)?
            .into_iter()
            .map(String::from_iter)
            .collect())
    }
}

fn heap<T: Clone>(buffer: &mut [T], size: usize, out: &mut Vec<Vec<T>>) {
    if size == 1 {
        out.push(buffer.to_vec());
        return;
    }
    for i in 0..size {
        heap(buffer, size - 1, out);
        if i < size - 1 {
            if size % 2 == 0 {
                buffer.swap(i, size - 1);
            } else {
                buffer.swap(0, size - 1);
            }
        }
    }
}

///Every permutation of the first `size` characters of `buffer`, with the
///default [`MAX_HEAP_SIZE`] limit.
///
///# Errors
///As for [`HeapPermutations::permute`].
pub fn heap_permutations(
    buffer: &mut [char],
    size: usize,
) -> Result<Vec<String>, CombinatoricsError> {
    HeapPermutations::default().permute_chars(buffer, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn swap_order() -> anyhow::Result<()> {
        let mut buffer = ['1', '2', '3'];
        assert_eq!(
            heap_permutations(&mut buffer, 3)?,
            ["123", "213", "312", "132", "231", "321"]
        );

        let mut buffer = ['a', 'b'];
        assert_eq!(heap_permutations(&mut buffer, 2)?, ["ab", "ba"]);
        Ok(())
    }

    #[test]
    fn counts() -> anyhow::Result<()> {
        let mut buffer: Vec<char> = "abcdef".chars().collect();
        let mut all = heap_permutations(&mut buffer, 6)?;
        assert_eq!(all.len(), 720);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 720);
        Ok(())
    }

    #[test]
    fn prefix_only() -> anyhow::Result<()> {
        let mut buffer = ['x', 'y', 'z'];
        assert_eq!(heap_permutations(&mut buffer, 2)?, ["xyz", "yxz"]);
        assert_eq!(heap_permutations(&mut buffer, 1)?.len(), 1);
        assert!(heap_permutations(&mut buffer, 0)?.is_empty());
        Ok(())
    }

    #[test]
    fn generic_buffers() -> anyhow::Result<()> {
        let mut buffer = [1, 2, 3, 4];
        let all = HeapPermutations::new().permute(&mut buffer, 4)?;
        assert_eq!(all.len(), 24);
        assert!(all.iter().all(|p| {
            let mut p = p.clone();
            p.sort_unstable();
            p == [1, 2, 3, 4]
        }));
        Ok(())
    }

    #[test]
    fn refusals() {
        let mut buffer = ['a', 'b'];
        let err = heap_permutations(&mut buffer, 3).unwrap_err();
        assert_eq!(err, CombinatoricsError::BufferTooShort { size: 3, len: 2 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let mut buffer: Vec<char> = ('a'..='l').collect();
        let err = heap_permutations(&mut buffer, 11).unwrap_err();
        assert_eq!(err, CombinatoricsError::OutOfResources { size: 11, limit: 10 });
        assert_eq!(err.kind(), ErrorKind::OutOfResources);

        let small = HeapPermutations::new().with_limit(3);
        assert_eq!(small.limit(), 3);
        assert!(small.permute_chars(&mut buffer, 4).is_err());
        assert_eq!(small.permute_chars(&mut buffer, 3).map(|x| x.len()), Ok(6));
    }
}
