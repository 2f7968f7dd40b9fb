// ============================================================================
// Number Input Model
// Accepted input forms for the significant-figure operations
// ============================================================================

use crate::numeric::{expand_exponential, SigfigError, SigfigResult};
use rust_decimal::Decimal;

/// A numeric input accepted by the engine.
///
/// Rust has no single dynamic number type, so the accepted forms are
/// enumerated: floats, integers, decimal or exponential text, and
/// [`rust_decimal::Decimal`] for callers that already carry one at an API
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Float(f64),
    Integer(i64),
    Text(String),
    Decimal(Decimal),
}

impl Number {
    /// Render the input as a plain decimal string with full precision.
    ///
    /// Floats use Rust's shortest round-trip representation, which never
    /// falls back to scientific notation. Text goes through the exponential
    /// expander, which also validates it.
    ///
    /// # Errors
    /// `InvalidNumber` for non-finite floats and unparseable text.
    pub(crate) fn into_plain_decimal(self) -> SigfigResult<String> {
        match self {
            Number::Float(value) => {
                if !value.is_finite() {
                    return Err(SigfigError::InvalidNumber);
                }
                Ok(value.to_string())
            },
            Number::Integer(value) => Ok(value.to_string()),
            Number::Text(text) => expand_exponential(&text),
            Number::Decimal(value) => Ok(value.to_string()),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<&str> for Number {
    fn from(value: &str) -> Self {
        Number::Text(value.to_string())
    }
}

impl From<String> for Number {
    fn from(value: String) -> Self {
        Number::Text(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}
