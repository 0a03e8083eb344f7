mod display;
mod scan;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use medscan_core::Language;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "medscan")]
#[command(about = "Read medicine package labels and check their expiry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Send a package photo to the vision model and report the label fields
    Scan {
        /// JPEG or PNG photo of the package
        image: PathBuf,
        /// Language the model should answer in (defaults to `MEDSCAN_LANGUAGE`)
        #[arg(long)]
        lang: Option<Language>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run field extraction over model text from a file, or stdin when omitted
    Parse {
        file: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Barcode/QR payload to look up in the openFDA NDC directory. `scan`
    /// decodes a QR code from the photo when this is omitted.
    #[arg(long)]
    barcode: Option<String>,
    /// Write the result as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write the result as PDF to this path
    #[arg(long)]
    pdf: Option<PathBuf>,
    /// Evaluate expiry against this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = medscan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan {
            image,
            lang,
            output,
        } => {
            let language = lang.unwrap_or(config.language);
            scan::run_scan(&config, &image, language, &output).await
        }
        Commands::Parse { file, output } => {
            scan::run_parse(&config, file.as_deref(), &output).await
        }
    }
}
