//! Checked construction of selection widths from untrusted or signed values.
use crate::CombinatoricsError;

///A selection width `r` known to fit in an index vector.
///
///The generators take plain `usize` widths and treat `r == 0` or `r > n` as
///empty. Callers holding a signed or otherwise unchecked width convert through
///[`Width`] first so that nonsense values fail instead of silently producing
///the wrong enumeration.
///
///```
///# use lazy_combinatorics::{Width, combinations};
///let r = Width::try_from(2_i64)?;
///assert_eq!(combinations(&[1, 2, 3], r.get()).count(), 3);
///assert!(Width::try_from(-1_i64).is_err());
///# Ok::<(), anyhow::Error>(())
///```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Width(usize);

impl Width {
    ///The longest index vector a `Vec<usize>` can address. This is an upper
    ///bound only; the allocator may still refuse a width below it, which
    ///[`crate::try_combinations_with_replacement`] reports as an error.
    pub const MAX: usize = isize::MAX as usize / std::mem::size_of::<usize>();

    ///Checks that `r` can be buffered.
    ///
    ///# Errors
    ///Returns [`CombinatoricsError::WidthTooLarge`] if `r` is above [`Width::MAX`].
    pub fn new(r: usize) -> Result<Self, CombinatoricsError> {
        if r > Self::MAX {
            return Err(CombinatoricsError::WidthTooLarge(r as u64));
        }
        Ok(Width(r))
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for Width {
    type Error = CombinatoricsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(CombinatoricsError::NegativeWidth(value));
        }
        match usize::try_from(value) {
            Ok(r) => Width::new(r),
            Err(_) => Err(CombinatoricsError::WidthTooLarge(value as u64)),
        }
    }
}

impl TryFrom<isize> for Width {
    type Error = CombinatoricsError;

    fn try_from(value: isize) -> Result<Self, Self::Error> {
        Width::try_from(value as i64)
    }
}

impl From<Width> for usize {
    fn from(value: Width) -> Self {
        value.0
    }
}
