// ============================================================================
// Significant-Figure Engine Library
// Exact decimal-string normalization, counting, and rounding
// ============================================================================

//! # sigfig-engine
//!
//! Exact significant-figure counting and rounding on decimal strings of
//! arbitrary magnitude.
//!
//! ## Features
//!
//! - **Exact decimal-string results** — no floating-point error can reach
//!   the output
//! - **Lossless exponential expansion** (`"1.2e-7"` -> `"0.00000012"`)
//! - **Round-half-up with full carry propagation** (`"9.9"` -> `"10"`)
//! - **Plain-decimal output only** — never scientific notation
//! - **Stateless pure functions** — safe to call from any thread, no shared
//!   or global state
//!
//! ## Example
//!
//! ```rust
//! use sigfig_engine::prelude::*;
//!
//! assert_eq!(significant_figures("429.00").unwrap(), 5);
//! assert_eq!(round_to_figures("3.10194", 3).unwrap(), "3.10");
//! assert_eq!(round_to_figures(".1509", 1).unwrap(), "0.2");
//! assert_eq!(round_to_figures("9.9", 1).unwrap(), "10");
//! assert_eq!(round_to_figures("429", 5).unwrap(), "429.00");
//!
//! // Exponential input expands exactly, every digit preserved
//! assert_eq!(
//!     round_to_figures("1.0430812624750985e-7", 15).unwrap(),
//!     "0.000000104308126247510"
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CanonicalDecimal, Number, Precision};
    pub use crate::engine::{round_to_figures, significant_figures};
    pub use crate::numeric::{expand_exponential, SigfigError, SigfigResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_mixed_fraction_table() {
        let cases = [
            (1, "3"),
            (2, "3.1"),
            (3, "3.10"),
            (4, "3.102"),
            (5, "3.1019"),
            (6, "3.10194"),
            (7, "3.101940"),
            (8, "3.1019400"),
        ];

        for (figures, expected) in cases {
            assert_eq!(round_to_figures("3.10194", figures).unwrap(), expected);
            assert_eq!(significant_figures(expected).unwrap(), figures as usize);
        }
    }

    #[test]
    fn test_sub_unity_table() {
        let cases = [
            (1, "0.2"),
            (2, "0.15"),
            (3, "0.151"),
            (4, "0.1509"),
            (5, "0.15090"),
            (6, "0.150900"),
        ];

        for (figures, expected) in cases {
            assert_eq!(round_to_figures(".1509", figures).unwrap(), expected);
            assert_eq!(significant_figures(expected).unwrap(), figures as usize);
        }
    }

    #[test]
    fn test_whole_number_table() {
        for input in ["429", "429."] {
            assert_eq!(significant_figures(input).unwrap(), 3);
            assert_eq!(round_to_figures(input, 1).unwrap(), "400");
            assert_eq!(round_to_figures(input, 2).unwrap(), "430");
            assert_eq!(round_to_figures(input, 3).unwrap(), "429");
            assert_eq!(round_to_figures(input, 4).unwrap(), "429.0");
            assert_eq!(round_to_figures(input, 5).unwrap(), "429.00");
        }
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(significant_figures("0").unwrap(), 1);
        assert_eq!(significant_figures("0.").unwrap(), 1);
        assert_eq!(significant_figures(".0").unwrap(), 1);
        assert_eq!(significant_figures("0.0").unwrap(), 1);
        assert_eq!(significant_figures("0.00").unwrap(), 2);
        assert_eq!(round_to_figures("0", 1).unwrap(), "0");
        assert_eq!(round_to_figures("0", 2).unwrap(), "0.00");
    }

    #[test]
    fn test_tiny_magnitudes() {
        assert_eq!(significant_figures("0.00000000001").unwrap(), 1);
        assert_eq!(round_to_figures("0.09500000000000008", 1).unwrap(), "0.1");
        assert_eq!(round_to_figures("0.000109", 2).unwrap(), "0.00011");
    }

    #[test]
    fn test_exponential_expansion_fidelity() {
        assert_eq!(
            round_to_figures("1.0430812624750985e-7", 15).unwrap(),
            "0.000000104308126247510"
        );
        assert_eq!(round_to_figures("0.04760919500000005", 7).unwrap(), "0.04760920");
    }

    #[test]
    fn test_carry_overflow() {
        assert_eq!(round_to_figures("0.9500000029802322", 1).unwrap(), "1");
        assert_eq!(round_to_figures("9.9", 1).unwrap(), "10");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(significant_figures("-429.00").unwrap(), 5);
        assert_eq!(round_to_figures("-0.46", 1).unwrap(), "-0.5");
        assert_eq!(round_to_figures("-9.9", 1).unwrap(), "-10");
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for (input, figures) in [("3.10194", 4), (".1509", 2), ("429", 5), ("0.995", 2)] {
            let once = round_to_figures(input, figures).unwrap();
            let twice = round_to_figures(once.as_str(), figures).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_error_cases() {
        assert_eq!(round_to_figures("429", 0), Err(SigfigError::InvalidPrecision));
        assert_eq!(round_to_figures("429", 1.3), Err(SigfigError::InvalidPrecision));
        assert_eq!(round_to_figures(1.0, f64::NAN), Err(SigfigError::InvalidPrecision));
        assert_eq!(
            round_to_figures("not a number", 0),
            Err(SigfigError::InvalidPrecision)
        );
        assert_eq!(
            significant_figures("not a number"),
            Err(SigfigError::InvalidNumber)
        );
        assert_eq!(significant_figures(f64::NAN), Err(SigfigError::InvalidNumber));
        assert_eq!(round_to_figures(f64::NAN, 1), Err(SigfigError::InvalidNumber));
    }
}
