//! Packstore CLI - Pricing tools for stored documents and tier schedules.
//!
//! # Usage
//!
//! ```bash
//! # Price an invoice, quote, order or cart document (JSON or YAML)
//! ps-cli price invoices/INV-0042.yaml
//!
//! # Price a bulk quote with an explicit tier schedule
//! ps-cli --schedule bulk price quotes/Q-118.json
//!
//! # Compute one line from raw form values
//! ps-cli line --price 40 --quantity 1 --discount 10
//!
//! # Show or validate tier schedules
//! ps-cli tiers show
//! ps-cli tiers check config/tiers/spring-promo.yaml
//! ```
//!
//! # Commands
//!
//! - `price` - Price a document and print its totals as JSON
//! - `line` - Compute a single line total
//! - `tiers show` / `tiers check` - Inspect volume discount schedules

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use packstore_core::CurrencyCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "ps-cli")]
#[command(author, version, about = "Packstore pricing tools")]
struct Cli {
    /// Volume tier schedule: `standard`, `bulk`, or a YAML/JSON file
    #[arg(short, long, global = true)]
    schedule: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a document and print its totals
    Price {
        /// Path to a JSON or YAML pricing document
        file: PathBuf,
    },
    /// Compute one line total from raw form values
    Line {
        /// Unit price
        #[arg(short, long, allow_hyphen_values = true)]
        price: String,

        /// Quantity
        #[arg(short, long, allow_hyphen_values = true)]
        quantity: String,

        /// Discount percentage
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        discount: String,

        /// Currency for the formatted total (defaults to `PRICING_DEFAULT_CURRENCY`)
        #[arg(short, long)]
        currency: Option<CurrencyCode>,
    },
    /// Inspect volume discount tier schedules
    Tiers {
        #[command(subcommand)]
        action: TiersAction,
    },
}

#[derive(Subcommand)]
enum TiersAction {
    /// Print the selected schedule, or every preset
    Show,
    /// Validate a schedule file
    Check {
        /// Path to a JSON or YAML tier schedule
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Configuration error: {e}");
            }
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for JSON output.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "packstore_cli=info,packstore_core=warn".into());

    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (format == LogFormat::Text)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let schedule_source = config.schedule_source(cli.schedule.as_deref());

    match cli.command {
        Commands::Price { file } => {
            let schedule = commands::resolve_schedule(schedule_source).await?;
            commands::price::print(&file, schedule.as_ref()).await?;
        }
        Commands::Line {
            price,
            quantity,
            discount,
            currency,
        } => commands::line::print(
            &price,
            &quantity,
            &discount,
            currency.unwrap_or(config.default_currency),
        )?,
        Commands::Tiers { action } => match action {
            TiersAction::Show => {
                let schedule = commands::resolve_schedule(schedule_source).await?;
                commands::tiers::show(schedule.as_ref())?;
            }
            TiersAction::Check { file } => {
                commands::tiers::check(&file).await?;
            }
        },
    }
    Ok(())
}
