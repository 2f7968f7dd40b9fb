// ============================================================================
// Precision Value Object
// Validated significant-figure target count
// ============================================================================

use crate::numeric::{SigfigError, SigfigResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A significant-figure target: an integer greater than zero.
///
/// Construction is the single validation point for rounding requests. The
/// fallible conversions let callers holding loosely typed counts (lengths,
/// parsed user input, floats) surface [`SigfigError::InvalidPrecision`]
/// instead of silently truncating:
///
/// ```
/// use sigfig_engine::prelude::*;
///
/// assert!(Precision::new(3).is_ok());
/// assert_eq!(Precision::new(0), Err(SigfigError::InvalidPrecision));
/// assert_eq!(Precision::try_from(1.3), Err(SigfigError::InvalidPrecision));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Precision(u32);

impl Precision {
    /// Create a precision of `count` significant figures.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `count` is zero.
    pub fn new(count: u32) -> SigfigResult<Self> {
        if count == 0 {
            Err(SigfigError::InvalidPrecision)
        } else {
            Ok(Self(count))
        }
    }

    /// The requested number of significant figures.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<Precision> for u32 {
    #[inline]
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl TryFrom<u32> for Precision {
    type Error = SigfigError;

    fn try_from(count: u32) -> SigfigResult<Self> {
        Self::new(count)
    }
}

impl TryFrom<usize> for Precision {
    type Error = SigfigError;

    fn try_from(count: usize) -> SigfigResult<Self> {
        u32::try_from(count)
            .map_err(|_| SigfigError::InvalidPrecision)
            .and_then(Self::new)
    }
}

impl TryFrom<i32> for Precision {
    type Error = SigfigError;

    fn try_from(count: i32) -> SigfigResult<Self> {
        u32::try_from(count)
            .map_err(|_| SigfigError::InvalidPrecision)
            .and_then(Self::new)
    }
}

impl TryFrom<i64> for Precision {
    type Error = SigfigError;

    fn try_from(count: i64) -> SigfigResult<Self> {
        u32::try_from(count)
            .map_err(|_| SigfigError::InvalidPrecision)
            .and_then(Self::new)
    }
}

impl TryFrom<f64> for Precision {
    type Error = SigfigError;

    /// Accepts only finite whole-number values in range, so `1.3`, `0.0`,
    /// negatives, and `NaN` are all rejected.
    fn try_from(count: f64) -> SigfigResult<Self> {
        if !count.is_finite() || count.fract() != 0.0 || count < 1.0 || count > f64::from(u32::MAX)
        {
            return Err(SigfigError::InvalidPrecision);
        }
        Self::new(count as u32)
    }
}
