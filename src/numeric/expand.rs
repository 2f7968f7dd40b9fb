// ============================================================================
// Exponential Expansion
// Lossless conversion of numeric literals to plain decimal strings
// ============================================================================

use super::errors::{SigfigError, SigfigResult};

/// Expand a numeric literal into a plain decimal string.
///
/// Accepts an optional sign, integer/fractional digit runs, and an optional
/// `e`/`E` exponent. Literals without an exponent are returned unchanged
/// (modulo surrounding whitespace); exponential literals have their decimal
/// point re-placed with zero-padding on whichever side needs it, so every
/// input digit is preserved.
///
/// # Examples
/// - `"1.2e-7"` -> `"0.00000012"`
/// - `"4.29e2"` -> `"429"`
/// - `"429.5"` -> `"429.5"`
///
/// # Errors
/// Returns `InvalidNumber` if the input is not a decimal or exponential
/// numeric literal, or if the exponent does not fit in an `i32`.
pub fn expand_exponential(input: &str) -> SigfigResult<String> {
    let trimmed = input.trim();
    let literal = Literal::scan(trimmed)?;

    if !trimmed.contains(['e', 'E']) {
        return Ok(trimmed.to_string());
    }

    Ok(literal.into_plain())
}

/// A validated numeric literal split into its lexical parts.
struct Literal<'a> {
    negative: bool,
    int_digits: &'a str,
    frac_digits: &'a str,
    exponent: i32,
}

impl<'a> Literal<'a> {
    /// Validate `s` against the grammar
    /// `[+-]? (digits ["." digits*] | "." digits) [(e|E) [+-]? digits]`.
    fn scan(s: &'a str) -> SigfigResult<Self> {
        if s.is_empty() {
            return Err(SigfigError::InvalidNumber);
        }

        let (mantissa, exp_part) = match s.find(['e', 'E']) {
            Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
            None => (s, None),
        };

        let (negative, digits) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };

        let (int_digits, frac_digits) = match digits.find('.') {
            Some(pos) => (&digits[..pos], &digits[pos + 1..]),
            None => (digits, ""),
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(SigfigError::InvalidNumber);
        }
        if !is_digit_run(int_digits) || !is_digit_run(frac_digits) {
            return Err(SigfigError::InvalidNumber);
        }

        let exponent = match exp_part {
            // i32 parsing accepts an optional sign and rejects empty input,
            // so the exponent grammar falls out of the parse itself
            Some(exp) => exp.parse::<i32>().map_err(|_| SigfigError::InvalidNumber)?,
            None => 0,
        };

        Ok(Self {
            negative,
            int_digits,
            frac_digits,
            exponent,
        })
    }

    /// Rebuild the literal as a plain decimal string with the point shifted
    /// by the exponent.
    fn into_plain(self) -> String {
        let digit_count = self.int_digits.len() + self.frac_digits.len();
        let mut digits = String::with_capacity(digit_count);
        digits.push_str(self.int_digits);
        digits.push_str(self.frac_digits);

        // Point position within the digit run after applying the shift
        let point = self.int_digits.len() as i64 + i64::from(self.exponent);

        let mut out = String::with_capacity(digit_count + 4);
        if self.negative {
            out.push('-');
        }

        if point <= 0 {
            out.push_str("0.");
            for _ in 0..point.unsigned_abs() {
                out.push('0');
            }
            out.push_str(&digits);
        } else if point >= digit_count as i64 {
            out.push_str(&digits);
            for _ in 0..(point - digit_count as i64) {
                out.push('0');
            }
        } else {
            let point = point as usize;
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        }

        out
    }
}

fn is_digit_run(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
