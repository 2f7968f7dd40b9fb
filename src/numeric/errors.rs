// ============================================================================
// Engine Errors
// Error types for significant-figure operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while counting or rounding significant figures.
///
/// Both variants are programmer-error-class failures detected before any
/// string transformation begins; partial results never leak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SigfigError {
    /// Input could not be interpreted as a real number
    InvalidNumber,
    /// Requested significant-figure count is not a positive integer
    InvalidPrecision,
}

impl fmt::Display for SigfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigfigError::InvalidNumber => {
                write!(f, "invalid number: input could not be parsed as a real number")
            },
            SigfigError::InvalidPrecision => write!(
                f,
                "invalid precision: significant-figure count must be an integer greater than zero"
            ),
        }
    }
}

impl std::error::Error for SigfigError {}

/// Result type alias for significant-figure operations
pub type SigfigResult<T> = Result<T, SigfigError>;
