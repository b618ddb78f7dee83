//! State shared by the index-vector generators.

///Where a generator is in its single pass over the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    ///Nothing yielded yet; the index vector holds the first selection.
    Start,
    ///The index vector holds the last yielded selection.
    Running,
    Exhausted,
}

///Builds a fresh output by reading `input` at each index.
pub(crate) fn project<T: Clone>(input: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| input[i].clone()).collect()
}

///Countdown of outputs still to come, if the total fits in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Remaining(Option<usize>);

impl Remaining {
    pub(crate) fn new(total: Option<usize>) -> Self {
        Remaining(total)
    }

    pub(crate) fn none() -> Self {
        Remaining(Some(0))
    }

    pub(crate) fn take_one(&mut self) {
        if let Some(n) = &mut self.0 {
            *n = n.saturating_sub(1);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.0 = Some(0);
    }

    pub(crate) fn size_hint(&self) -> (usize, Option<usize>) {
        match self.0 {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}
