//! # Presentation Helpers
//!
//! Rendering of masses and Rupiah amounts for display, plus the reverse
//! parse for amounts typed in Indonesian notation (`Rp 1.250.000,50`).
//!
//! Nothing here feeds back into the calculator; rounding happens only in
//! the rendered string.

use crate::primitives::{CURRENCY_SYMBOL, WEIGHT_UNIT};
use crate::types::AurumError;

/// Non-breaking space between the currency symbol and the digits.
const SYMBOL_SEPARATOR: char = '\u{a0}';

/// Render a mass with two decimals and the unit, e.g. `"7.50 gram"`.
#[must_use]
pub fn format_weight(mass: f64) -> String {
    format!("{mass:.2} {WEIGHT_UNIT}")
}

/// Render an amount as Rupiah using id-ID conventions.
///
/// `.` groups thousands, `,` separates decimals, and fraction digits (at
/// most two) appear only when the amount has a non-zero fractional part.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{CURRENCY_SYMBOL}{SYMBOL_SEPARATOR}{amount}");
    }

    // Split before scaling so amounts past u64 range keep every digit.
    let magnitude = amount.abs();
    let mut whole = magnitude.trunc();
    let mut fraction = ((magnitude - whole) * 100.0).round() as u8;
    if fraction >= 100 {
        whole += 1.0;
        fraction = 0;
    }

    let mut out = String::new();
    if amount < 0.0 && (whole > 0.0 || fraction > 0) {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push(SYMBOL_SEPARATOR);
    out.push_str(&group_thousands(&format!("{whole:.0}")));

    if fraction > 0 {
        out.push(',');
        if fraction % 10 == 0 {
            out.push_str(&(fraction / 10).to_string());
        } else {
            out.push_str(&format!("{fraction:02}"));
        }
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Parse an amount in Indonesian notation.
///
/// Accepts an optional leading `-`, an optional `Rp` or `Rp.` prefix,
/// `.` as thousands separator and `,` as decimal separator. Whitespace is
/// ignored. `"1250000"` and `"Rp 1.250.000"` both give `1250000.0`.
pub fn parse_rupiah(text: &str) -> Result<f64, AurumError> {
    let invalid = || AurumError::InvalidAmount(text.to_string());

    let trimmed = text.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let digits = strip_currency_symbol(rest);

    let normalized: String = digits
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() || normalized.starts_with(['+', '-']) {
        return Err(invalid());
    }

    let value: f64 = normalized.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(if negative { -value } else { value })
}

fn strip_currency_symbol(text: &str) -> &str {
    match text.get(..CURRENCY_SYMBOL.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(CURRENCY_SYMBOL) => {
            let rest = &text[CURRENCY_SYMBOL.len()..];
            rest.strip_prefix('.').unwrap_or(rest)
        }
        _ => text,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_has_two_decimals_and_unit() {
        assert_eq!(format_weight(7.5), "7.50 gram");
        assert_eq!(format_weight(13.332), "13.33 gram");
        assert_eq!(format_weight(-1.249625), "-1.25 gram");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1_250_000.0), "Rp\u{a0}1.250.000");
        assert_eq!(format_currency(999.0), "Rp\u{a0}999");
        assert_eq!(format_currency(0.0), "Rp\u{a0}0");
        assert_eq!(format_currency(1_000.0), "Rp\u{a0}1.000");
    }

    #[test]
    fn currency_beyond_integer_range() {
        assert_eq!(
            format_currency(1e20),
            "Rp\u{a0}100.000.000.000.000.000.000"
        );
        assert_eq!(format_currency(999.999), "Rp\u{a0}1.000");
    }

    #[test]
    fn currency_fraction_only_when_present() {
        assert_eq!(format_currency(1_500.5), "Rp\u{a0}1.500,5");
        assert_eq!(format_currency(0.25), "Rp\u{a0}0,25");
        assert_eq!(format_currency(10.001), "Rp\u{a0}10");
    }

    #[test]
    fn currency_negative_amounts() {
        assert_eq!(format_currency(-2_000.0), "-Rp\u{a0}2.000");
    }

    #[test]
    fn parse_plain_and_prefixed() {
        assert_eq!(parse_rupiah("1250000"), Ok(1_250_000.0));
        assert_eq!(parse_rupiah("Rp 1.250.000"), Ok(1_250_000.0));
        assert_eq!(parse_rupiah("Rp. 1.250.000"), Ok(1_250_000.0));
        assert_eq!(parse_rupiah("rp1.250.000,50"), Ok(1_250_000.5));
        assert_eq!(parse_rupiah(" -Rp\u{a0}2.000 "), Ok(-2_000.0));
    }

    #[test]
    fn parse_round_trips_formatted_output() {
        let text = format_currency(3_456_789.25);
        assert_eq!(parse_rupiah(&text), Ok(3_456_789.25));
    }

    #[test]
    fn parse_rejects_garbage() {
        for text in ["", "Rp", "abc", "1.2x", "--5", "inf", "NaN"] {
            assert!(
                matches!(parse_rupiah(text), Err(AurumError::InvalidAmount(_))),
                "'{text}' accepted"
            );
        }
    }
}
