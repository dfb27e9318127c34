use clap::Parser;
use colored::Colorize;
use les_extract::cli;
use les_extract::report::{
    self, ExtractConfig, DEFAULT_ADDRESSING_SHEET, DEFAULT_SUMMARY_PREFIX,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "les-extract")]
#[command(about = "Extract locality labeling and address tables from an LES Report workbook")]
#[command(long_about = "LES Report extraction

Reads an LES Report .xlsx workbook and writes two files next to it:

  <ISO3>_les_locality_locations.csv   address, locality_name, latitude, longitude (comma separated)
  <ISO3>_les_locality_labeling.csv    territory_name, logic_lmz, local_lmz (tab separated)

WORKSHEETS:
  'Addressing List'     Address and 'Location (X, Y coordinate)' columns
  'Display Summary*'    every sheet starting with this name is merged in order

EXAMPLES:
  les-extract reports/LES_Thailand.xlsx THA
  les-extract reports/LES_Thailand.xlsx THA --output-dir out/
  les-extract LES.xlsx VNM --summary-prefix 'Label Summary' --dry-run")]
#[command(version)]
struct Cli {
    /// Path to the LES Report workbook (.xlsx)
    #[arg(value_parser = parse_input)]
    input: PathBuf,

    /// ISO alpha-3 territory code, used to name the output files
    #[arg(value_parser = parse_iso3)]
    iso3: String,

    /// Write outputs to this directory instead of the workbook's
    #[arg(long, env = "LES_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Name of the addressing worksheet
    #[arg(long, env = "LES_ADDRESSING_SHEET", default_value = DEFAULT_ADDRESSING_SHEET)]
    addressing_sheet: String,

    /// Name prefix of the summary worksheets
    #[arg(long, env = "LES_SUMMARY_PREFIX", default_value = DEFAULT_SUMMARY_PREFIX)]
    summary_prefix: String,

    /// Also drop territories whose by-logic zoom level is not numeric
    #[arg(long)]
    numeric_lmz_only: bool,

    /// Extract without writing any file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show verbose progress and debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_input(s: &str) -> Result<PathBuf, String> {
    report::validate_input_path(s).map_err(|e| e.to_string())
}

fn parse_iso3(s: &str) -> Result<String, String> {
    report::validate_iso3(s).map_err(|e| e.to_string())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "les_extract=debug"
    } else {
        "les_extract=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ExtractConfig {
        output_dir: cli.output_dir,
        addressing_sheet: cli.addressing_sheet,
        summary_prefix: cli.summary_prefix,
        numeric_lmz_only: cli.numeric_lmz_only,
        ..ExtractConfig::new(cli.input, cli.iso3)
    };

    match cli::extract(config, cli.dry_run, cli.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}
