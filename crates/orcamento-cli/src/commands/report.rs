//! Report command - render the budget of a cart printout.

use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use orcamento_core::api::NO_ITEMS_MESSAGE;
use orcamento_core::cart::{CartParser, LineScanParser, ParseOutcome};
use orcamento_core::cart::rules::format_currency;
use orcamento_core::models::config::{OrcamentoConfig, ReportFormat};
use orcamento_core::models::line_item::LineItem;
use orcamento_core::report::{render_report, BudgetSummary};

use super::{read_input, write_output};

/// Arguments for the report command.
#[derive(Args)]
pub struct ReportArgs {
    /// Cart printout file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// List skipped candidate records on stderr
    #[arg(long)]
    diagnostics: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text budget report
    Text,
    /// JSON with report, line items and summary
    Json,
    /// CSV with one row per line item
    Csv,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Csv => OutputFormat::Csv,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    relatorio: String,
    medicamentos: &'a [LineItem],
    resumo: BudgetSummary,
}

pub fn run(args: ReportArgs, config: &OrcamentoConfig) -> anyhow::Result<()> {
    let text = read_input(args.input.as_deref())?;
    let outcome = LineScanParser::new().parse_with_diagnostics(&text);

    if args.diagnostics {
        print_diagnostics(&outcome);
    }

    if outcome.items.is_empty() {
        anyhow::bail!(NO_ITEMS_MESSAGE);
    }

    let format = args
        .format
        .unwrap_or_else(|| config.output.default_format.into());
    info!("Rendering {} line items as {:?}", outcome.items.len(), format);

    let output = format_items(&outcome.items, format)?;
    write_output(args.output.as_deref(), &output)
}

fn print_diagnostics(outcome: &ParseOutcome) {
    eprintln!(
        "{} {} line items from {} lines",
        style("ℹ").blue(),
        outcome.items.len(),
        outcome.line_count
    );
    for skipped in &outcome.skipped {
        eprintln!("  {} {}", style("-").yellow(), skipped);
    }
}

pub(crate) fn format_items(items: &[LineItem], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_report(items)),
        OutputFormat::Json => {
            let report = JsonReport {
                relatorio: render_report(items),
                medicamentos: items,
                resumo: BudgetSummary::from_items(items),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Csv => format_csv(items),
    }
}

fn format_csv(items: &[LineItem]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "codigo",
        "nome",
        "quantidade",
        "preco_cheio",
        "desconto_percentual",
        "preco_desconto",
        "valor_total",
        "desconto_especial",
    ])?;

    for item in items {
        let quantity = item.quantity.to_string();
        let full_price = format_currency(item.full_price);
        let discount_percent = item.discount_percent.normalize().to_string();
        let discounted_price = format_currency(item.discounted_price);
        let line_total = format_currency(item.line_total);

        wtr.write_record([
            item.code.as_str(),
            item.name.as_str(),
            quantity.as_str(),
            full_price.as_str(),
            discount_percent.as_str(),
            discounted_price.as_str(),
            line_total.as_str(),
            item.special_discount_note.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
