//! Failures reported by the combinatorics engine.
//!
//! Degenerate widths (`r == 0`, `r > n`, empty input) are not failures: the
//! generators simply produce nothing. Only arguments that cannot be honoured at
//! all end up here.
use thiserror::Error;

///The two broad kinds of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ///The caller passed an argument the engine cannot interpret.
    InvalidArgument,
    ///The request is well formed but its result would not fit in memory.
    OutOfResources,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
///An error from asking for an enumeration that cannot be produced.
pub enum CombinatoricsError {
    ///A signed width was below zero.
    #[error("Width must not be negative (got {0})")]
    NegativeWidth(i64),
    ///A width whose index vector could never be allocated.
    #[error("Width {0} exceeds the largest representable index buffer")]
    WidthTooLarge(u64),
    ///Asked to permute more positions than the buffer holds.
    #[error("Cannot permute {size} positions of a buffer of length {len}")]
    BufferTooShort {
        ///Requested number of positions.
        size: usize,
        ///Actual buffer length.
        len: usize,
    },
    ///The `r`-long index vector for a checked width could not be allocated.
    #[error("Cannot allocate an index vector of width {0}")]
    IndexBufferUnavailable(usize),
    ///Eager enumeration whose `size!` results would exhaust memory.
    #[error("Refusing to materialize {size}! permutations (limit is {limit})")]
    OutOfResources {
        ///Requested number of positions.
        size: usize,
        ///Largest size allowed by the configuration.
        limit: usize,
    },
}

impl CombinatoricsError {
    ///Which kind of failure this is.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CombinatoricsError::NegativeWidth(_)
            | CombinatoricsError::WidthTooLarge(_)
            | CombinatoricsError::BufferTooShort { .. } => ErrorKind::InvalidArgument,
            CombinatoricsError::IndexBufferUnavailable(_)
            | CombinatoricsError::OutOfResources { .. } => ErrorKind::OutOfResources,
        }
    }
}
