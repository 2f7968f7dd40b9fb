// ============================================================================
// Rounding Engine
// Round-half-up to a target significant-figure count with carry propagation
// ============================================================================

use crate::domain::{CanonicalDecimal, Precision};
use smallvec::SmallVec;

/// Inline capacity for the working digit buffer; longer inputs spill to the
/// heap without changing behavior.
const INLINE_DIGITS: usize = 32;

type DigitBuf = SmallVec<[u8; INLINE_DIGITS]>;

/// Round a canonical decimal to exactly `precision` significant figures,
/// producing a plain decimal string.
///
/// Trailing zeros are appended when the input carries fewer digits than the
/// target, magnitude zeros are restored for whole numbers (`"429"` at one
/// figure becomes `"400"`), and the sign is reattached for negative non-zero
/// results. A carry that overflows past the leading significant digit
/// prepends a new `1` and widens the result by one digit, so `"9.9"` at one
/// figure becomes `"10"`.
pub(crate) fn round(value: &CanonicalDecimal, precision: Precision) -> String {
    let target = precision.get() as usize;

    if value.is_zero() {
        // Zero carries no sign and no rounding digit; render enough
        // fractional zeros to report the requested count
        return if target == 1 {
            String::from("0")
        } else {
            format!("0.{}", "0".repeat(target))
        };
    }

    let (mut digits, widened) = round_digits(value.digits(), target);

    // Restore magnitude zeros for whole numbers and guarantee enough
    // trailing digits to display the requested count. A prepended carry
    // digit shifts the point right by one, so the whole-number width grows
    // with it.
    let whole_width = value.point_index() + usize::from(widened);
    let minimum = if digits.contains(&b'.') {
        target + 1
    } else {
        target
    };
    while digits.len() < whole_width.max(minimum) {
        digits.push(b'0');
    }

    let mut result = String::with_capacity(digits.len() + 1);
    if value.is_negative() {
        result.push('-');
    }
    result.extend(digits.iter().map(|&b| char::from(b)));
    result
}

/// Collect `target` significant digits from the canonical digit string and
/// apply round-half-up against the digit that follows. Returns the digit
/// buffer and whether a carry prepended a new leading digit.
fn round_digits(canonical: &str, target: usize) -> (DigitBuf, bool) {
    let mut source = DigitBuf::new();
    if canonical.starts_with('.') {
        // A placeholder zero in front of the point keeps indexing uniform
        // for magnitudes below one
        source.push(b'0');
    }
    source.extend_from_slice(canonical.as_bytes());

    let mut digits = DigitBuf::new();
    let mut first_significant = None;
    let mut collected = 0usize;
    let mut rounding_digit = None;

    for (index, &byte) in source.iter().enumerate() {
        digits.push(byte);

        if first_significant.is_none() && byte != b'0' && byte != b'.' {
            first_significant = Some(index);
        }

        if first_significant.is_some() && byte.is_ascii_digit() {
            collected += 1;
            if collected == target {
                rounding_digit = Some(match source.get(index + 1) {
                    Some(&b'.') => source.get(index + 2).copied().unwrap_or(b'0'),
                    Some(&next) => next,
                    None => b'0',
                });
                break;
            }
        }
    }

    let first_significant =
        first_significant.expect("a non-zero value has a significant digit");

    // Fewer digits than requested: pad out to the target, nothing to round
    for _ in collected..target {
        digits.push(b'0');
    }

    let widened = if rounding_digit.is_some_and(|digit| digit >= b'5') {
        propagate_carry(&mut digits, first_significant)
    } else {
        false
    };

    if digits.last() == Some(&b'.') {
        digits.pop();
    }

    (digits, widened)
}

/// Propagate a round-up carry from the right: nines roll to zero and push
/// the carry left, the first non-nine digit absorbs it. A carry landing on a
/// placeholder zero left of the first significant digit drops the trailing
/// zero it displaced, keeping the width at the target. A carry that clears
/// the front entirely prepends a new leading `1`; returns whether that
/// happened.
fn propagate_carry(digits: &mut DigitBuf, first_significant: usize) -> bool {
    let mut index = digits.len();
    while index > 0 {
        index -= 1;
        match digits[index] {
            b'.' => continue,
            b'9' => digits[index] = b'0',
            _ => {
                if index < first_significant {
                    digits.pop();
                }
                digits[index] += 1;
                return false;
            },
        }
    }

    digits.insert(0, b'1');
    true
}
