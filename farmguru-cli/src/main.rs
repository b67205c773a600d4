//! FarmGuru CLI — market signal commands over the bundled price dataset.
//!
//! Commands:
//! - `list` — list available (commodity, mandi) pairs
//! - `signal` — print the market report for one pair
//! - `annotate` — print the annotated price series for one pair

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use farmguru_core::config::SignalConfig;
use farmguru_core::data::MarketDataset;
use farmguru_core::signal::{annotate, MarketReport};

#[derive(Parser)]
#[command(
    name = "farmguru",
    about = "FarmGuru CLI — mandi price signals from the bundled dataset"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available (commodity, mandi) pairs.
    List {
        /// CSV dataset path. Defaults to the bundled dataset.
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print the market report: latest price, trailing average, signal, analysis.
    Signal {
        /// Commodity name (e.g., tomato).
        #[arg(long)]
        commodity: String,

        /// Mandi name (e.g., pune).
        #[arg(long)]
        mandi: String,

        /// Moving-average window in days. Defaults to the config value (7).
        #[arg(long)]
        window: Option<usize>,

        /// CSV dataset path. Defaults to the bundled dataset.
        #[arg(long)]
        data: Option<PathBuf>,

        /// TOML config file with default window and dataset path.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the full annotated series: price and trailing average per day.
    Annotate {
        /// Commodity name (e.g., tomato).
        #[arg(long)]
        commodity: String,

        /// Mandi name (e.g., pune).
        #[arg(long)]
        mandi: String,

        /// Moving-average window in days. Defaults to the config value (7).
        #[arg(long)]
        window: Option<usize>,

        /// CSV dataset path. Defaults to the bundled dataset.
        #[arg(long)]
        data: Option<PathBuf>,

        /// TOML config file with default window and dataset path.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { data } => cmd_list(data),
        Commands::Signal {
            commodity,
            mandi,
            window,
            data,
            config,
            format,
        } => cmd_signal(&commodity, &mandi, window, data, config, format),
        Commands::Annotate {
            commodity,
            mandi,
            window,
            data,
            config,
            format,
        } => cmd_annotate(&commodity, &mandi, window, data, config, format),
    }
}

/// Resolve window and dataset with flag > config file > default precedence.
fn resolve(
    window: Option<usize>,
    data: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<(usize, MarketDataset)> {
    let config = match config {
        Some(path) => SignalConfig::from_path(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SignalConfig::default(),
    };
    let window = window.unwrap_or(config.window);
    if window == 0 {
        bail!("--window must be >= 1");
    }

    let dataset = match data.or(config.dataset) {
        Some(path) => MarketDataset::from_path(&path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => MarketDataset::bundled(),
    };

    Ok((window, dataset))
}

fn cmd_list(data: Option<PathBuf>) -> Result<()> {
    let (_, dataset) = resolve(None, data, None)?;
    println!("{:<12} {:<12} {:>6}", "COMMODITY", "MANDI", "POINTS");
    for (commodity, mandi) in dataset.keys() {
        let len = dataset.series(commodity, mandi).map_or(0, |s| s.len());
        println!("{commodity:<12} {mandi:<12} {len:>6}");
    }
    Ok(())
}

fn cmd_signal(
    commodity: &str,
    mandi: &str,
    window: Option<usize>,
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let (window, dataset) = resolve(window, data, config)?;
    let report = dataset.report(commodity, mandi, window)?;

    match format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Csv => bail!("CSV output is only available for `annotate`"),
    }
    Ok(())
}

fn cmd_annotate(
    commodity: &str,
    mandi: &str,
    window: Option<usize>,
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let (window, dataset) = resolve(window, data, config)?;
    let Some(series) = dataset.series(commodity, mandi) else {
        bail!("no price series for {commodity} in {mandi} (try `farmguru list`)");
    };
    let annotated = annotate(series, window)?;

    match format {
        OutputFormat::Text => {
            println!("{:<12} {:>10} {:>12}", "DATE", "PRICE", "SMA");
            for point in &annotated {
                let sma = point
                    .sma
                    .map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
                println!("{:<12} {:>10.2} {:>12}", point.date, point.price, sma);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&annotated)?),
        OutputFormat::Csv => {
            println!("date,price,sma");
            for point in &annotated {
                let sma = point.sma.map_or_else(String::new, |v| format!("{v}"));
                println!("{},{},{}", point.date, point.price, sma);
            }
        }
    }
    Ok(())
}

fn print_report(report: &MarketReport) {
    let price = report
        .latest_price
        .map_or_else(|| "n/a".to_string(), |v| format!("₹{v:.2}/quintal"));
    let average = report
        .moving_average
        .map_or_else(|| "n/a".to_string(), |v| format!("₹{v:.2}/quintal"));

    println!("Commodity:       {}", report.commodity);
    println!("Mandi:           {}", report.mandi);
    println!("Latest price:    {price}");
    println!("{}-day average:   {average}", report.window);
    println!("Signal:          {}", report.signal);
    println!("Analysis:        {}", report.analysis);
}
