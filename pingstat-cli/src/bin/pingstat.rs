//! pingstat - Ping log loss and latency analyzer
//!
//! Reads `ping -D` output and reports packet loss, the longest loss and
//! delivery runs, conditional delivery probabilities and RTT statistics.

use clap::Parser;
use pingstat::{read_file, read_records, ParsedLog, SeqSpace, TraceSummary};
use pingstat_cli::{display_summary, to_json, Config, ReportFormat};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pingstat")]
#[command(about = "Packet loss and latency analysis for ping logs", long_about = None)]
struct Args {
    /// Ping log to analyze (use '-' for stdin)
    #[arg(default_value = "data.txt")]
    input: String,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sequence-number modulus (overrides the config file)
    #[arg(short, long)]
    modulus: Option<u32>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Print the RTT frequency table
    #[arg(short, long)]
    distribution: bool,

    /// Print an example configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    if args.print_config {
        print!("{}", toml::to_string_pretty(&Config::example())?);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            Config::from_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to load config '{}': {}", path.display(), e))?
        }
        None => Config::default(),
    };
    if let Some(modulus) = args.modulus {
        config.analysis.modulus = modulus;
    }
    if let Some(format) = args.format {
        config.report.format = format;
    }
    if args.distribution {
        config.report.distribution = true;
    }

    let space: SeqSpace = config.seq_space()?;
    tracing::info!("Sequence modulus: {}", space.modulus());

    let parsed: ParsedLog = if args.input == "-" {
        tracing::info!("Reading from stdin");
        read_records(io::stdin().lock(), &space)?
    } else {
        tracing::info!("Reading from file: {}", args.input);
        read_file(&args.input, &space)
            .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", args.input, e))?
    };

    if parsed.rejected > 0 {
        tracing::warn!("{} reply lines rejected", parsed.rejected);
    }
    tracing::info!(
        "{} records, {} lines skipped",
        parsed.records.len(),
        parsed.skipped
    );

    let summary = TraceSummary::new(&parsed.records, &space)
        .map_err(|e| anyhow::anyhow!("Cannot analyze '{}': {}", args.input, e))?;

    match config.report.format {
        ReportFormat::Text => display_summary(&summary, config.report.distribution)?,
        ReportFormat::Json => println!("{}", to_json(&summary)?),
    }

    Ok(())
}
