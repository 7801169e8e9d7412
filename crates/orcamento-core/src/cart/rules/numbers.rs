//! Lenient number decoding for cart fields and currency formatting.
//!
//! Cart values use a comma decimal separator (`127,32`). Decoding reads the
//! longest numeric prefix of a field and falls back to zero when there is
//! none, so garbled values never reject a record.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::patterns::{DECIMAL_PREFIX, INTEGER_PREFIX};

/// Decode a comma-decimal value such as `"1338,30"`.
///
/// Only the first comma is treated as the decimal separator. Returns `None`
/// when the field has no numeric prefix.
pub fn parse_cart_decimal(s: &str) -> Option<Decimal> {
    let normalized = s.trim().replacen(',', ".", 1);
    let prefix = DECIMAL_PREFIX.find(&normalized)?;
    Decimal::from_str(prefix.as_str()).ok()
}

/// Decode a quantity from the leading digits of a field.
pub fn parse_cart_quantity(s: &str) -> Option<u32> {
    let caps = INTEGER_PREFIX.captures(s.trim())?;
    caps[1].parse().ok()
}

/// [`parse_cart_decimal`] with the zero fallback.
pub fn decimal_or_zero(s: &str) -> Decimal {
    parse_cart_decimal(s).unwrap_or(Decimal::ZERO)
}

/// [`parse_cart_quantity`] with the zero fallback.
pub fn quantity_or_zero(s: &str) -> u32 {
    parse_cart_quantity(s).unwrap_or(0)
}

/// Format a currency value with two decimals and a period marker (`1063.00`).
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_cart_decimal() {
        assert_eq!(parse_cart_decimal("127,32"), Some(dec("127.32")));
        assert_eq!(parse_cart_decimal("0,0"), Some(Decimal::ZERO));
        assert_eq!(parse_cart_decimal("  1063,00 "), Some(dec("1063.00")));
        assert_eq!(parse_cart_decimal("16.90"), Some(dec("16.90")));
        assert_eq!(parse_cart_decimal("10"), Some(dec("10")));
    }

    #[test]
    fn test_parse_cart_decimal_reads_prefix() {
        assert_eq!(parse_cart_decimal("79,82abc"), Some(dec("79.82")));
        // second comma is not a separator
        assert_eq!(parse_cart_decimal("1,063,00"), Some(dec("1.063")));
        assert_eq!(parse_cart_decimal("abc"), None);
        assert_eq!(parse_cart_decimal(""), None);
    }

    #[test]
    fn test_parse_cart_quantity() {
        assert_eq!(parse_cart_quantity("1"), Some(1));
        assert_eq!(parse_cart_quantity(" 12 "), Some(12));
        assert_eq!(parse_cart_quantity("3 UN"), Some(3));
        assert_eq!(parse_cart_quantity("2,5"), Some(2));
        assert_eq!(parse_cart_quantity("UN"), None);
        assert_eq!(parse_cart_quantity("-1"), None);
        assert_eq!(parse_cart_quantity("99999999999"), None);
    }

    #[test]
    fn test_zero_fallbacks() {
        assert_eq!(decimal_or_zero("n/a"), Decimal::ZERO);
        assert_eq!(quantity_or_zero("n/a"), 0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec("127.32")), "127.32");
        assert_eq!(format_currency(dec("1063")), "1063.00");
        assert_eq!(format_currency(dec("4")), "4.00");
        assert_eq!(format_currency(dec("8.865")), "8.87");
        assert_eq!(format_currency(Decimal::ZERO), "0.00");
    }
}
