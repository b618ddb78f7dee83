//! Checked sizes of the enumerations, `None` whenever the result does not fit
//! in a `usize`.

///`n!`
#[must_use]
pub fn factorial(n: usize) -> Option<usize> {
    (2..=n).try_fold(1_usize, usize::checked_mul)
}

///`n! / (n - r)!`, the number of `r`-permutations of `n` items. Zero when `r > n`.
#[must_use]
pub fn falling_factorial(n: usize, r: usize) -> Option<usize> {
    if r > n {
        return Some(0);
    }
    (n - r + 1..=n).try_fold(1_usize, usize::checked_mul)
}

///`n` choose `k`. Zero when `k > n`.
#[must_use]
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut res: u128 = 1;
    for i in 0..k {
        // stays integral: res is C(n, i) before the division
        res = res.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    usize::try_from(res).ok()
}

///`n` multichoose `k` = `C(n + k - 1, k)`, the number of size-`k` multisets
///drawn from `n` items.
#[must_use]
pub fn multichoose(n: usize, k: usize) -> Option<usize> {
    match (n, k) {
        (_, 0) => Some(1),
        (0, _) => Some(0),
        _ => binomial(n.checked_add(k - 1)?, k),
    }
}
