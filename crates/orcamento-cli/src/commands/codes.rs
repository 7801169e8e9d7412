//! Codes command - print the internal codes of a cart printout.

use std::path::PathBuf;

use clap::Args;
use console::style;

use orcamento_core::api::NO_ITEMS_MESSAGE;
use orcamento_core::cart::parse_cart;
use orcamento_core::report::internal_codes;

use super::{read_input, write_output};

/// Arguments for the codes command.
#[derive(Args)]
pub struct CodesArgs {
    /// Cart printout file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print how many codes were found on stderr
    #[arg(long)]
    count: bool,
}

pub fn run(args: CodesArgs) -> anyhow::Result<()> {
    let text = read_input(args.input.as_deref())?;
    let items = parse_cart(&text);

    if items.is_empty() {
        anyhow::bail!(NO_ITEMS_MESSAGE);
    }

    write_output(args.output.as_deref(), &internal_codes(&items))?;

    if args.count {
        eprintln!(
            "{} Codes generated for {} medication(s)",
            style("ℹ").blue(),
            items.len()
        );
    }

    Ok(())
}
