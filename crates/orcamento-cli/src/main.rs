//! CLI application for pharmacy cart budgets.

mod commands;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::{codes, config, report, serve};

/// Pharmacy cart budgets - Turn pasted cart printouts into budget reports
#[derive(Parser)]
#[command(name = "orcamento")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the budget report of a cart printout
    Report(report::ReportArgs),

    /// Print the internal codes of a cart printout
    Codes(codes::CodesArgs),

    /// Serve the budget endpoints over HTTP
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // RUST_LOG, when set, takes precedence over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
    });

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Report(args) => {
            let app_config = commands::load_config(cli.config.as_deref())?;
            report::run(args, &app_config)
        }
        Commands::Codes(args) => {
            commands::load_config(cli.config.as_deref())?;
            codes::run(args)
        }
        Commands::Serve(args) => {
            let app_config = commands::load_config(cli.config.as_deref())?;
            serve::run(args, &app_config).await
        }
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
