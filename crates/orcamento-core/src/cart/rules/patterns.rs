//! Common regex patterns for cart printouts.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Record header: internal code, whitespace, medication name
    pub static ref RECORD_HEADER: Regex = Regex::new(
        r"^([0-9]+)\s+(.+)$"
    ).unwrap();

    // Numeric prefix after comma normalization (1063.00, .5, -3)
    pub static ref DECIMAL_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)"
    ).unwrap();

    // Leading digits of a quantity line
    pub static ref INTEGER_PREFIX: Regex = Regex::new(
        r"^\+?([0-9]+)"
    ).unwrap();
}
