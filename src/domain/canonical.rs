// ============================================================================
// Canonical Decimal Form
// Normalized digit-string representation with extracted sign
// ============================================================================

use crate::domain::Number;
use crate::numeric::{expand_exponential, SigfigError, SigfigResult};
use std::fmt;
use std::str::FromStr;

/// A decimal magnitude normalized for significant-figure analysis.
///
/// Invariant on the digit string:
/// - the decimal point is always present;
/// - a magnitude below one has an empty integer part (`".1509"`, never
///   `"0.1509"`);
/// - a whole number has an empty fractional part (`"429."`);
/// - the integer part carries no leading zeros;
/// - the sign lives in `negative`, never in the digit string.
///
/// A bare zero normalizes to `"."`, while an explicit zero such as `"0.00"`
/// keeps its fractional zeros (`".00"`) — that difference is what lets the
/// counter report 1 for the former and 2 for the latter.
///
/// Normalization is idempotent: normalizing a canonical digit string
/// reproduces it unchanged.
///
/// # Example
/// ```
/// use sigfig_engine::prelude::*;
///
/// let value: CanonicalDecimal = "-0429.50".parse().unwrap();
/// assert!(value.is_negative());
/// assert_eq!(value.digits(), "429.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalDecimal {
    negative: bool,
    digits: String,
}

impl CanonicalDecimal {
    /// Parse any numeric literal (decimal or exponential) into canonical
    /// form.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the literal cannot be interpreted as a
    /// real number.
    pub fn parse(input: &str) -> SigfigResult<Self> {
        Ok(Self::from_plain(&expand_exponential(input)?))
    }

    /// Normalize a plain decimal string (sign optional, no exponent).
    ///
    /// Callers must have validated the input; this is the normalization
    /// step only.
    pub(crate) fn from_plain(plain: &str) -> Self {
        let (negative, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, plain.strip_prefix('+').unwrap_or(plain)),
        };

        let mut digits = String::with_capacity(unsigned.len() + 1);
        digits.push_str(unsigned);
        if !digits.contains('.') {
            digits.push('.');
        }

        // Strip leading zeros of the integer part without touching anything
        // at or after the point; a zero directly in front of the point
        // survives this pass
        let bytes = digits.as_bytes();
        let mut strip = 0;
        while bytes[strip] == b'0' && bytes[strip + 1] != b'.' {
            strip += 1;
        }
        let mut digits = digits.split_off(strip);

        // A lone zero left in front of the point marks a magnitude below
        // one; drop it so the integer part is empty
        if digits.starts_with('0') {
            digits.remove(0);
        }

        Self { negative, digits }
    }

    /// The normalized digit string, e.g. `"429."` or `".1509"`.
    #[inline]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Whether the original value was negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether the value is zero (only zeros and the point remain).
    pub fn is_zero(&self) -> bool {
        self.digits.bytes().all(|b| b == b'0' || b == b'.')
    }

    /// Index of the decimal point, which doubles as the width of the
    /// integer part.
    pub(crate) fn point_index(&self) -> usize {
        self.digits
            .find('.')
            .expect("canonical form always contains a decimal point")
    }
}

impl FromStr for CanonicalDecimal {
    type Err = SigfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Number> for CanonicalDecimal {
    type Error = SigfigError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        Ok(Self::from_plain(&value.into_plain_decimal()?))
    }
}

impl fmt::Display for CanonicalDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_zero() {
            write!(f, "-{}", self.digits)
        } else {
            write!(f, "{}", self.digits)
        }
    }
}
