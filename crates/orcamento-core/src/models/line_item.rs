//! Medication line item recovered from a cart printout.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single medication entry of a pharmacy cart.
///
/// Field names on the wire are the ones the budget HTTP API has always
/// exposed (`codigo`, `nome`, ...). Decimal fields travel as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Internal medication code (ASCII digits).
    #[serde(rename = "codigo")]
    pub code: String,

    /// Medication name as printed on the cart.
    #[serde(rename = "nome")]
    pub name: String,

    /// Number of units.
    #[serde(rename = "quantidade")]
    pub quantity: u32,

    /// Unit price before any discount.
    #[serde(rename = "preco_cheio", with = "rust_decimal::serde::float")]
    pub full_price: Decimal,

    /// Discount percentage as printed (not validated against the prices).
    #[serde(rename = "desconto_percentual", with = "rust_decimal::serde::float")]
    pub discount_percent: Decimal,

    /// Unit price after discount.
    #[serde(rename = "preco_desconto", with = "rust_decimal::serde::float")]
    pub discounted_price: Decimal,

    /// Line total exactly as printed; never recomputed.
    #[serde(rename = "valor_total", with = "rust_decimal::serde::float")]
    pub line_total: Decimal,

    /// Special discount annotation (supplier or approval code), empty when absent.
    #[serde(rename = "desconto_especial", default)]
    pub special_discount_note: String,
}

impl LineItem {
    /// Create an item with the given code and name and every numeric field at zero.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            quantity: 0,
            full_price: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            discounted_price: Decimal::ZERO,
            line_total: Decimal::ZERO,
            special_discount_note: String::new(),
        }
    }

    /// Amount saved on this line: `(full_price - discounted_price) * quantity`.
    ///
    /// Saturates at the `Decimal` range instead of overflowing.
    pub fn savings(&self) -> Decimal {
        self.full_price
            .saturating_sub(self.discounted_price)
            .saturating_mul(Decimal::from(self.quantity))
    }

    /// `discounted_price * quantity`. Informational only, reports use `line_total`.
    pub fn computed_total(&self) -> Decimal {
        self.discounted_price.saturating_mul(Decimal::from(self.quantity))
    }

    /// Whether a percentage discount applies.
    pub fn has_discount(&self) -> bool {
        self.discount_percent > Decimal::ZERO
    }

    /// Whether a special discount annotation is present.
    pub fn has_special_discount(&self) -> bool {
        !self.special_discount_note.is_empty()
    }
}
