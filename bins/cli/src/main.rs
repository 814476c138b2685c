//! Ledgerview command line.
//!
//! Reads a JSON or CSV ledger and prints the balance sheet, the income
//! statement, or both.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ledgerview_shared::{AppConfig, AppError, config::LoggingConfig};

mod cmd;

use cmd::Command;

#[derive(Parser, Debug)]
#[command(name = "ledgerview", version, about = "Financial statements from classified ledger entries")]
struct Cli {
    /// Directory holding default.toml and {RUN_MODE}.toml
    #[arg(long, global = true, default_value = "config")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AppConfig::load_from(&cli.config)?;
    init_tracing(&config.logging);

    tracing::debug!(config_dir = %cli.config, currency = %config.report.currency, "configuration loaded");
    cli.command.exec(&config)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
