// ============================================================================
// Engine Module
// The two significant-figure operations: counting and rounding
// ============================================================================

mod counter;
mod rounder;

use crate::domain::{CanonicalDecimal, Number, Precision};
use crate::numeric::{SigfigError, SigfigResult};

/// Count the significant figures of a numeric value.
///
/// Accepts anything convertible to [`Number`]: native numerics,
/// [`rust_decimal::Decimal`], or decimal/exponential text.
///
/// # Example
/// ```
/// use sigfig_engine::prelude::*;
///
/// assert_eq!(significant_figures("429.00").unwrap(), 5);
/// assert_eq!(significant_figures(".1509").unwrap(), 4);
/// assert_eq!(significant_figures("0.00000000001").unwrap(), 1);
/// ```
///
/// # Errors
/// Returns `InvalidNumber` if the value cannot be parsed as a real number.
pub fn significant_figures<N>(value: N) -> SigfigResult<usize>
where
    N: Into<Number>,
{
    let canonical = CanonicalDecimal::try_from(value.into())?;
    Ok(counter::significant_digits(&canonical))
}

/// Round a numeric value to exactly `precision` significant figures,
/// returning a plain decimal string — never scientific notation.
///
/// # Example
/// ```
/// use sigfig_engine::prelude::*;
///
/// assert_eq!(round_to_figures("3.10194", 3).unwrap(), "3.10");
/// assert_eq!(round_to_figures("429", 5).unwrap(), "429.00");
/// assert_eq!(round_to_figures("9.9", 1).unwrap(), "10");
/// ```
///
/// # Errors
/// Returns `InvalidPrecision` if the requested count is not a positive
/// integer — checked before the value is touched — and `InvalidNumber` if
/// the value cannot be parsed as a real number.
pub fn round_to_figures<N, P>(value: N, precision: P) -> SigfigResult<String>
where
    N: Into<Number>,
    P: TryInto<Precision, Error = SigfigError>,
{
    let precision = precision.try_into()?;
    let canonical = CanonicalDecimal::try_from(value.into())?;
    let rounded = rounder::round(&canonical, precision);

    tracing::debug!(
        "rounded to {} significant figures: {}",
        precision.get(),
        rounded
    );

    Ok(rounded)
}
