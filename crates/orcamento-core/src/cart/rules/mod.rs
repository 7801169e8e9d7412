//! Field decoding rules for cart printouts.

pub mod numbers;
pub mod patterns;

pub use numbers::{
    decimal_or_zero, format_currency, parse_cart_decimal, parse_cart_quantity, quantity_or_zero,
};
pub use patterns::*;
