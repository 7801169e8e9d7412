//! Budget report rendering.
//!
//! The report layout is consumed by the print view and by people comparing
//! budgets side by side, so labels and separators are fixed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::rules::format_currency;
use crate::models::line_item::LineItem;

/// Report title.
pub const REPORT_TITLE: &str = "ORÇAMENTO DE MEDICAMENTOS";

/// Summary section title.
pub const SUMMARY_TITLE: &str = "RESUMO DO ORÇAMENTO";

/// Width of the separator rules.
pub const RULE_WIDTH: usize = 60;

/// Totals over a list of line items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Number of line items.
    #[serde(rename = "quantidade_itens")]
    pub item_count: usize,

    /// Sum of printed line totals.
    #[serde(rename = "valor_total", with = "rust_decimal::serde::float")]
    pub total: Decimal,

    /// Sum of per-line savings.
    #[serde(rename = "economia_total", with = "rust_decimal::serde::float")]
    pub savings: Decimal,
}

impl BudgetSummary {
    /// Compute the summary of `items`. Sums saturate at the `Decimal` range.
    pub fn from_items(items: &[LineItem]) -> Self {
        Self {
            item_count: items.len(),
            total: items
                .iter()
                .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.line_total)),
            savings: items
                .iter()
                .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.savings())),
        }
    }
}

/// Render the text budget report.
pub fn render_report(items: &[LineItem]) -> String {
    let mut report = String::new();

    report.push_str(REPORT_TITLE);
    report.push('\n');
    report.push_str(&"=".repeat(RULE_WIDTH));
    report.push_str("\n\n");

    for item in items {
        report.push_str(&format!("Código: {}\n", item.code));
        report.push_str(&format!("Medicamento: {}\n", item.name));
        report.push_str(&format!("Quantidade: {}\n", item.quantity));

        if item.has_special_discount() {
            report.push_str(&format!("Desconto especial: {}\n", item.special_discount_note));
        }

        report.push_str(&format!(
            "Preço Unitário: R$ {}\n",
            format_currency(item.full_price)
        ));

        if item.has_discount() {
            report.push_str(&format!(
                "Preço com Desconto: R$ {}\n",
                format_currency(item.discounted_price)
            ));
        }

        report.push_str(&format!(
            "Valor Total: R$ {}\n",
            format_currency(item.line_total)
        ));
        report.push_str(&"-".repeat(RULE_WIDTH));
        report.push('\n');
    }

    let summary = BudgetSummary::from_items(items);

    report.push('\n');
    report.push_str(SUMMARY_TITLE);
    report.push('\n');
    report.push_str(&format!("Quantidade de Itens: {}\n", summary.item_count));
    report.push_str(&format!("Valor Total: R$ {}\n", format_currency(summary.total)));
    report.push_str(&format!(
        "Economia Total: R$ {}\n",
        format_currency(summary.savings)
    ));

    report
}

/// Internal codes of `items`, space separated, in input order.
pub fn internal_codes(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|i| i.code.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::parse_cart;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_report() {
        let expected = format!(
            "ORÇAMENTO DE MEDICAMENTOS\n{}\n\n\nRESUMO DO ORÇAMENTO\n\
             Quantidade de Itens: 0\nValor Total: R$ 0.00\nEconomia Total: R$ 0.00\n",
            "=".repeat(60)
        );
        assert_eq!(render_report(&[]), expected);
    }

    #[test]
    fn test_empty_codes() {
        assert_eq!(internal_codes(&[]), "");
    }

    #[test]
    fn test_plain_item_report() {
        let items = parse_cart("35697 HYLO GEL LUB OCUL 10ML\n1\n127,32 0,0\n127,32\n127,32");
        let expected = format!(
            "ORÇAMENTO DE MEDICAMENTOS\n{eq}\n\n\
             Código: 35697\n\
             Medicamento: HYLO GEL LUB OCUL 10ML\n\
             Quantidade: 1\n\
             Preço Unitário: R$ 127.32\n\
             Valor Total: R$ 127.32\n\
             {dash}\n\
             \nRESUMO DO ORÇAMENTO\n\
             Quantidade de Itens: 1\n\
             Valor Total: R$ 127.32\n\
             Economia Total: R$ 0.00\n",
            eq = "=".repeat(60),
            dash = "-".repeat(60)
        );
        assert_eq!(render_report(&items), expected);
        assert_eq!(internal_codes(&items), "35697");
    }

    #[test]
    fn test_discounted_item_with_note() {
        let items = parse_cart(
            "51157 OZEMPIC 1MG 4AGULHAS\n1\n1338,30 20,6\n1063,00\n1063,00 954424121 E-PHARMA",
        );
        let report = render_report(&items);

        let body: Vec<&str> = report.lines().skip(3).take(7).collect();
        assert_eq!(
            body,
            vec![
                "Código: 51157",
                "Medicamento: OZEMPIC 1MG 4AGULHAS",
                "Quantidade: 1",
                "Desconto especial: 954424121 E-PHARMA",
                "Preço Unitário: R$ 1338.30",
                "Preço com Desconto: R$ 1063.00",
                "Valor Total: R$ 1063.00",
            ]
        );
        assert!(report.ends_with("Valor Total: R$ 1063.00\nEconomia Total: R$ 275.30\n"));
    }

    #[test]
    fn test_savings_use_quantity() {
        let items = vec![LineItem {
            quantity: 2,
            full_price: dec("10"),
            discounted_price: dec("8"),
            line_total: dec("16"),
            ..LineItem::new("1", "TESTE")
        }];

        let report = render_report(&items);
        assert!(report.contains("Economia Total: R$ 4.00\n"));
        // no percentage, so no discounted price line
        assert!(!report.contains("Preço com Desconto"));
    }

    #[test]
    fn test_huge_prices_do_not_overflow() {
        let items = parse_cart(
            "1 X\n2\n79228162514264337593543950335 0,0\n0\n1,00\n\
             2 Y\n1\n1,00 0,0\n1,00\n79228162514264337593543950335\n\
             3 Z\n1\n1,00 0,0\n1,00\n79228162514264337593543950335",
        );
        assert_eq!(items.len(), 3);

        let summary = BudgetSummary::from_items(&items);
        assert_eq!(summary.savings, Decimal::MAX);
        assert_eq!(summary.total, Decimal::MAX);

        let report = render_report(&items);
        assert!(report.ends_with(
            "Valor Total: R$ 79228162514264337593543950335.00\n\
             Economia Total: R$ 79228162514264337593543950335.00\n"
        ));
    }

    #[test]
    fn test_summary() {
        let items = parse_cart(
            "38694 GB DES AER BLUE 150ML\n1\n16,90 0,0\n16,90\n16,90\n\
             51157 OZEMPIC 1MG 4AGULHAS\n1\n1338,30 20,6\n1063,00\n1063,00 954424121 E-PHARMA",
        );
        let summary = BudgetSummary::from_items(&items);

        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total, dec("1079.90"));
        assert_eq!(summary.savings, dec("275.30"));
        assert_eq!(internal_codes(&items), "38694 51157");
    }

    #[test]
    fn test_codes_keep_duplicates() {
        let items = vec![
            LineItem::new("6769", "A"),
            LineItem::new("35697", "B"),
            LineItem::new("6769", "A"),
        ];
        assert_eq!(internal_codes(&items), "6769 35697 6769");
    }
}
