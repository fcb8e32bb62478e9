// File: crates/t99-graphs/src/main.rs
// Summary: Reads a match-stats sheet and writes overall.png and placements.png to the working directory.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueHint};
use tracing::info;
use tracing_subscriber::EnvFilter;

use t99_stats::Config;

const USAGE: &str = "Usage: t99-graphs stats.xls sheet_name";

#[derive(Parser, Debug)]
#[command(author, version, about = "Placement and K.O. charts from a match-stats spreadsheet", long_about = None)]
struct Cli {
    /// Workbook (.xlsx/.xls/.ods) or CSV file with Rank, KOs and VIP columns
    #[arg(value_hint = ValueHint::FilePath)]
    stats: PathBuf,

    /// Sheet to read (ignored for CSV input)
    sheet: String,

    /// Anything after the sheet name is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(_) => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::default();
    info!(
        input = %cli.stats.display(),
        sheet = %cli.sheet,
        vip_only = config.vip_only,
        "generating graphs"
    );
    t99_stats::run(&cli.stats, &cli.sheet, Path::new("."), &config)?;
    Ok(())
}
