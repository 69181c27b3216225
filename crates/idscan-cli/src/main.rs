//! CLI application for identity document field extraction.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::{batch, config, extract, normalize, scan};

/// Identity document OCR - Extract name, date of birth, address, Aadhaar number and gender
#[derive(Parser)]
#[command(name = "idscan")]
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
    /// Extract fields from OCR text
    Extract(extract::ExtractArgs),

    /// Run a document image through the OCR provider and extract fields
    Scan(scan::ScanArgs),

    /// Extract fields from multiple OCR text files
    Batch(batch::BatchArgs),

    /// Normalize and validate an identity number
    Normalize(normalize::NormalizeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // RUST_LOG, when set, refines the -v level
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Extract(args) => extract::run(args, &config::load_config(config_path)?).await,
        Commands::Scan(args) => scan::run(args, &config::load_config(config_path)?).await,
        Commands::Batch(args) => batch::run(args, &config::load_config(config_path)?).await,
        Commands::Normalize(args) => normalize::run(args).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}
