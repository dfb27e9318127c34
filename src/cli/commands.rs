use crate::error::LesResult;
use crate::report::{self, ExtractConfig};
use colored::Colorize;

/// Execute an extraction run
pub fn extract(config: ExtractConfig, dry_run: bool, verbose: bool) -> LesResult<()> {
    println!("{}", "🗺️  LES Report - Extracting localities".bold().green());
    println!("   Input: {}", config.input.display());
    println!("   Territory: {}", config.iso3.bright_yellow().bold());
    println!();

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No files will be written\n".yellow()
        );
    }

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }

    let extraction = report::extract(&config)?;

    if verbose {
        println!("   Addressing sheet: {}", config.addressing_sheet.bright_blue());
        for name in &extraction.summary_sheets {
            println!("   Summary sheet: {}", name.bright_blue());
        }
        println!(
            "   {} addresses, {} territory labels\n",
            extraction.addresses.len().to_string().bold(),
            extraction.labeling.len().to_string().bold()
        );
    }

    if dry_run {
        println!("   Would write: {}", config.locations_path().display());
        println!("   Would write: {}", config.labeling_path().display());
        println!();
        println!("{}", "📋 Dry run complete - no files written".yellow());
        return Ok(());
    }

    if verbose {
        println!("{}", "💾 Writing output files...".cyan());
    }

    let written = report::write_outputs(&extraction, &config)?;
    for line in written.confirmations() {
        println!("{}", line);
    }

    Ok(())
}
