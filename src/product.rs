//! Cartesian product of several materialized sequences.
use std::iter::FusedIterator;

use crate::index::Remaining;

///Iterator over the Cartesian product of its pools, see [`product`].
///
///`coord[i]` is the position currently taken from `pools[i]`; it is advanced
///like an odometer with the least-significant digit at the end.
#[derive(Debug, Clone)]
pub struct Product<T> {
    pools: Vec<Vec<T>>,
    coord: Vec<usize>,
    done: bool,
    remaining: Remaining,
}

impl<T: Clone> Product<T> {
    fn new(pools: Vec<Vec<T>>) -> Self {
        let done = pools.is_empty() || pools.iter().any(Vec::is_empty);
        if done {
            log::debug!("product: {} pools with nothing to combine", pools.len());
        }
        let remaining = if done {
            Remaining::none()
        } else {
            Remaining::new(
                pools
                    .iter()
                    .try_fold(1_usize, |acc, pool| acc.checked_mul(pool.len())),
            )
        };
        Product {
            coord: vec![0; pools.len()],
            pools,
            done,
            remaining,
        }
    }
}

impl<T: Clone> Iterator for Product<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let out = self
            .coord
            .iter()
            .zip(&self.pools)
            .map(|(&i, pool)| pool[i].clone())
            .collect();

        let mut i = self.coord.len();
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            self.coord[i] += 1;
            if self.coord[i] < self.pools[i].len() {
                break;
            }
            self.coord[i] = 0;
        }

        self.remaining.take_one();
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl<T: Clone> FusedIterator for Product<T> {}

///Every way of taking one element from each of `inputs`, first input slowest
///and last input fastest.
///
///The inputs are collected up front. There is no repeat count: to take the
///product of a sequence with itself, pass it several times. Zero inputs, or
///any empty input, gives nothing.
///
///```
///# use lazy_combinatorics::product;
///let x: Vec<String> = product(["AB".chars(), "xy".chars()])
///    .map(String::from_iter)
///    .collect();
///assert_eq!(x, ["Ax", "Ay", "Bx", "By"]);
///```
pub fn product<I, P, T>(inputs: I) -> Product<T>
where
    I: IntoIterator<Item = P>,
    P: IntoIterator<Item = T>,
    T: Clone,
{
    Product::new(
        inputs
            .into_iter()
            .map(|pool| pool.into_iter().collect())
            .collect(),
    )
}
