//! Lenient parsing of typed-in prices.
//!
//! Cost fields accept whatever the user typed. The longest numeric prefix is
//! used (`"12.5kg"` is 12.5) and anything that does not start with a number
//! becomes zero. Input is never rejected. The prefix is converted to cents
//! exactly, rounding half away from zero, so `"0.125"` is 0.13.

use crate::money::Money;

// Significant digits beyond this cannot fit in i64 cents anyway.
const MAX_SIGNIFICANT_DIGITS: usize = 36;

/// Parse user input into a cost, coercing garbage to zero
///
/// Amounts too large for the ledger also become zero.
///
/// # Example
///
/// ```
/// use splitcart::cost::parse_lenient;
/// use splitcart::Money;
///
/// assert_eq!(parse_lenient("120"), Money::from_units(120));
/// assert_eq!(parse_lenient("  80.50 KES"), Money::from_cents(8_050));
/// assert_eq!(parse_lenient("free"), Money::ZERO);
/// ```
#[must_use]
pub fn parse_lenient(input: &str) -> Money {
    let trimmed = input.trim_start();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];
    decimal_to_cents(prefix).map_or(Money::ZERO, Money::from_cents)
}

/// Exact conversion of a decimal literal to cents
///
/// `None` when the literal is empty or the amount does not fit.
fn decimal_to_cents(literal: &str) -> Option<i64> {
    if literal.is_empty() {
        return None;
    }

    let (negative, unsigned) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal.strip_prefix('+').unwrap_or(literal)),
    };
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // value = significand * 10^scale
    let digits = format!("{whole}{fraction}");
    let digits = digits.trim_start_matches('0');
    let significant = digits.trim_end_matches('0');
    if significant.is_empty() {
        return Some(0);
    }
    if significant.len() > MAX_SIGNIFICANT_DIGITS {
        return None;
    }
    let significand: i128 = significant.parse().ok()?;
    let trailing_zeros = i64::try_from(digits.len() - significant.len()).ok()?;
    let fraction_len = i64::try_from(fraction.len()).ok()?;
    let scale = exponent
        .checked_sub(fraction_len)?
        .checked_add(trailing_zeros)?;

    // Shift from units to cents
    let shift = scale.checked_add(2)?;
    let cents = if shift >= 0 {
        let factor = 10_i128.checked_pow(u32::try_from(shift).ok()?)?;
        significand.checked_mul(factor)?
    } else {
        let dropped = u32::try_from(shift.checked_neg()?).ok()?;
        if dropped > 38 {
            0
        } else {
            let divisor = 10_i128.pow(dropped);
            let (quotient, remainder) = (significand / divisor, significand % divisor);
            if remainder >= divisor - remainder {
                quotient + 1
            } else {
                quotient
            }
        }
    };

    let cents = i64::try_from(cents).ok()?;
    Some(if negative { -cents } else { cents })
}

/// Length in bytes of the longest prefix shaped like a decimal number
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// exponent only when at least one exponent digit follows.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let mut seen_digit = false;
    let mut seen_point = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(n: i64) -> Money {
        Money::from_cents(n)
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_lenient("120"), Money::from_units(120));
        assert_eq!(parse_lenient("80.00"), Money::from_units(80));
        assert_eq!(parse_lenient("0.5"), cents(50));
        assert_eq!(parse_lenient("391.24"), cents(39_124));
    }

    #[test]
    fn leading_whitespace_and_trailing_text() {
        assert_eq!(parse_lenient("  200"), Money::from_units(200));
        assert_eq!(parse_lenient("12.5kg"), cents(1_250));
        assert_eq!(parse_lenient("3.2.1"), cents(320));
    }

    #[test]
    fn bare_decimal_points() {
        assert_eq!(parse_lenient(".5"), cents(50));
        assert_eq!(parse_lenient("5."), Money::from_units(5));
        assert_eq!(parse_lenient("."), Money::ZERO);
    }

    #[test]
    fn garbage_becomes_zero() {
        assert_eq!(parse_lenient(""), Money::ZERO);
        assert_eq!(parse_lenient("abc"), Money::ZERO);
        assert_eq!(parse_lenient("-"), Money::ZERO);
        assert_eq!(parse_lenient("KES 100"), Money::ZERO);
    }

    #[test]
    fn exponents_need_digits() {
        assert_eq!(parse_lenient("1e3"), Money::from_units(1_000));
        assert_eq!(parse_lenient("2E-1"), cents(20));
        assert_eq!(parse_lenient("4e"), Money::from_units(4));
        assert_eq!(parse_lenient("4e+"), Money::from_units(4));
    }

    #[test]
    fn sub_cent_digits_round_half_away_from_zero() {
        assert_eq!(parse_lenient("0.125"), cents(13));
        assert_eq!(parse_lenient("0.124"), cents(12));
        assert_eq!(parse_lenient("-0.125"), cents(-13));
        assert_eq!(parse_lenient("1.005"), cents(101));
        assert_eq!(parse_lenient("0.004"), Money::ZERO);
    }

    #[test]
    fn negatives_are_kept() {
        assert_eq!(parse_lenient("-15"), Money::from_units(-15));
        assert_eq!(parse_lenient("-0"), Money::ZERO);
        assert_eq!(parse_lenient("+7"), Money::from_units(7));
    }

    #[test]
    fn zeros_do_not_count_as_digits() {
        assert_eq!(parse_lenient("000120.5000"), cents(12_050));
        assert_eq!(
            parse_lenient("0.0000000000000000000000000000000000000000001"),
            Money::ZERO
        );
        assert_eq!(
            parse_lenient("1.000000000000000000000000000000000000000000"),
            Money::from_units(1)
        );
    }

    #[test]
    fn overflow_is_zero() {
        assert_eq!(parse_lenient("1e999"), Money::ZERO);
        assert_eq!(parse_lenient("99999999999999999999"), Money::ZERO);
        assert_eq!(parse_lenient("1e99999999999999999999"), Money::ZERO);
    }
}
