// ============================================================================
// Significant-Figure Counter
// ============================================================================

use crate::domain::CanonicalDecimal;

/// Count the significant digits of a canonical decimal.
///
/// Convention:
/// - an all-zero value reports every digit position present, minimum 1;
/// - a magnitude below one counts from its first non-zero digit to the end,
///   so leading placeholder zeros never count;
/// - a magnitude of one or more counts every digit, including trailing
///   fractional zeros.
///
/// The first non-zero digit governs the left boundary for sub-unity values,
/// while every explicit digit of a zero value counts; that is why
/// `".00000000001"` reports 1 but `".00"` reports 2.
pub(crate) fn significant_digits(value: &CanonicalDecimal) -> usize {
    let digits = value.digits();

    if value.is_zero() {
        if digits == "." {
            return 1;
        }
        return digits.len() - 1;
    }

    match digits.strip_prefix('.') {
        Some(fraction) => {
            let first = fraction
                .bytes()
                .position(|b| b != b'0')
                .expect("a non-zero canonical decimal has a non-zero digit");
            fraction.len() - first
        },
        // Canonical form admits no leading integer zeros, so every digit
        // except the point is significant
        None => digits.len() - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(input: &str) -> usize {
        significant_digits(&CanonicalDecimal::parse(input).unwrap())
    }

    #[test]
    fn test_whole_numbers() {
        assert_eq!(count("429"), 3);
        assert_eq!(count("429."), 3);
        assert_eq!(count("-429"), 3);
        assert_eq!(count("10"), 2);
    }

    #[test]
    fn test_mixed_fractions() {
        assert_eq!(count("3.10194"), 6);
        assert_eq!(count("3.10"), 3);
        assert_eq!(count("429.00"), 5);
    }

    #[test]
    fn test_sub_unity() {
        assert_eq!(count(".1509"), 4);
        assert_eq!(count("0.1509"), 4);
        assert_eq!(count("0.000109"), 3);
        assert_eq!(count("0.00000000001"), 1);
        assert_eq!(count("0.150900"), 6);
    }

    #[test]
    fn test_zeros() {
        assert_eq!(count("0"), 1);
        assert_eq!(count("0."), 1);
        assert_eq!(count(".0"), 1);
        assert_eq!(count("0.0"), 1);
        assert_eq!(count("0.00"), 2);
        assert_eq!(count("0.0000"), 4);
    }
}
