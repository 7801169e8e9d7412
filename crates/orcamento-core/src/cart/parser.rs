//! Line-scanning parser for pasted cart printouts.
//!
//! A cart record spans five logical lines:
//!
//! ```text
//! 51157 OZEMPIC 1MG 4AGULHAS        code + name
//! 1                                 quantity
//! 1338,30 20,6                      full price + discount %
//! 1063,00                           discounted price
//! 1063,00 954424121 E-PHARMA        line total [+ special discount note]
//! ```
//!
//! Records may be separated by blank lines or packed together, so blank
//! lines are discarded and record starts are found by scanning.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::line_item::LineItem;

use super::rules::{decimal_or_zero, quantity_or_zero, RECORD_HEADER};
use super::RecordError;

/// Number of value lines following a record header.
pub const FIELD_LINES: usize = 4;

/// Result of scanning a cart printout.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Recovered line items, in input order.
    pub items: Vec<LineItem>,
    /// Candidate records that were dropped.
    pub skipped: Vec<RecordError>,
    /// Number of non-blank input lines.
    pub line_count: usize,
}

/// Trait for cart parsing.
pub trait CartParser {
    /// Parse a cart printout. Never fails; unusable input yields no items.
    fn parse_with_diagnostics(&self, text: &str) -> ParseOutcome;

    /// Parse a cart printout into line items.
    fn parse(&self, text: &str) -> Vec<LineItem> {
        self.parse_with_diagnostics(text).items
    }
}

/// Cart parser that scans trimmed, non-blank lines for record headers and
/// reads the following lines as fixed-position fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScanParser;

impl LineScanParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug)]
struct RecordHeader<'a> {
    code: &'a str,
    name: &'a str,
}

#[derive(Debug)]
enum ScanState<'a> {
    SeekingStart,
    ConsumingFields {
        header: RecordHeader<'a>,
        fields: Vec<&'a str>,
    },
}

impl CartParser for LineScanParser {
    fn parse_with_diagnostics(&self, text: &str) -> ParseOutcome {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        debug!("Scanning {} non-blank lines", lines.len());

        let mut outcome = ParseOutcome {
            line_count: lines.len(),
            ..Default::default()
        };
        let mut state = ScanState::SeekingStart;

        for (index, &line) in lines.iter().enumerate() {
            state = match state {
                ScanState::SeekingStart => match RECORD_HEADER.captures(line) {
                    Some(caps) => {
                        let header = RecordHeader {
                            code: caps.get(1).map_or("", |m| m.as_str()),
                            name: caps.get(2).map_or("", |m| m.as_str()).trim(),
                        };
                        debug!("Candidate record at line {}: {}", index + 1, line);

                        if index + FIELD_LINES >= lines.len() {
                            let error = RecordError::Truncated {
                                line: index + 1,
                                code: header.code.to_string(),
                                available: lines.len() - index - 1,
                            };
                            debug!("Skipping candidate: {}", error);
                            outcome.skipped.push(error);
                            ScanState::SeekingStart
                        } else {
                            ScanState::ConsumingFields {
                                header,
                                fields: Vec::with_capacity(FIELD_LINES),
                            }
                        }
                    }
                    None => ScanState::SeekingStart,
                },
                ScanState::ConsumingFields { header, mut fields } => {
                    fields.push(line);

                    if let &[quantity, prices, discounted, total] = fields.as_slice() {
                        let item = decode_record(&header, [quantity, prices, discounted, total]);
                        debug!("Parsed record {} - {}", item.code, item.name);
                        outcome.items.push(item);
                        ScanState::SeekingStart
                    } else {
                        ScanState::ConsumingFields { header, fields }
                    }
                }
            };
        }

        info!(
            "Parsed {} line items from {} lines ({} candidates skipped)",
            outcome.items.len(),
            outcome.line_count,
            outcome.skipped.len()
        );

        outcome
    }
}

/// Build a line item from a header and its four value lines.
///
/// Every field is decoded leniently, so a complete record always yields an item.
fn decode_record(header: &RecordHeader<'_>, fields: [&str; FIELD_LINES]) -> LineItem {
    let [quantity, prices, discounted, total] = fields;

    let mut item = LineItem::new(header.code, header.name);
    item.quantity = quantity_or_zero(quantity);

    let prices: Vec<&str> = prices.split_whitespace().collect();
    if let [full, percent, ..] = prices.as_slice() {
        item.full_price = decimal_or_zero(full);
        item.discount_percent = decimal_or_zero(percent);
    }

    item.discounted_price = decimal_or_zero(discounted);

    let mut total_parts = total.split_whitespace();
    item.line_total = total_parts.next().map_or(Decimal::ZERO, decimal_or_zero);
    item.special_discount_note = total_parts.collect::<Vec<_>>().join(" ");

    item
}

/// Parse a cart printout with the default parser.
pub fn parse_cart(text: &str) -> Vec<LineItem> {
    LineScanParser::new().parse(text)
}
