//! LES Report orchestration
//!
//! Loads the workbook, picks the addressing and summary worksheets, runs both
//! extractions and writes the two output tables next to the input file.

use crate::error::{LesError, LesResult};
use crate::excel::{Workbook, WorkbookImporter};
use crate::extract::{extract_addresses, extract_labeling, retain_numeric_lmz};
use crate::types::{AddressRecord, Dataset, LabelingRecord};
use crate::writer;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_ADDRESSING_SHEET: &str = "Addressing List";
pub const DEFAULT_SUMMARY_PREFIX: &str = "Display Summary";

pub const LOCATIONS_SUFFIX: &str = "_les_locality_locations.csv";
pub const LABELING_SUFFIX: &str = "_les_locality_labeling.csv";

const WORKBOOK_EXTENSION: &str = ".xlsx";
const ISO3_LEN: usize = 3;

/// Settings for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub input: PathBuf,
    /// ISO alpha-3 territory code used to name the outputs
    pub iso3: String,
    /// Defaults to the input file's directory
    pub output_dir: Option<PathBuf>,
    pub addressing_sheet: String,
    pub summary_prefix: String,
    pub numeric_lmz_only: bool,
}

impl ExtractConfig {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(input: P, iso3: S) -> Self {
        Self {
            input: input.into(),
            iso3: iso3.into(),
            output_dir: None,
            addressing_sheet: DEFAULT_ADDRESSING_SHEET.to_string(),
            summary_prefix: DEFAULT_SUMMARY_PREFIX.to_string(),
            numeric_lmz_only: false,
        }
    }

    pub fn validate(&self) -> LesResult<()> {
        validate_input_path(&self.input.to_string_lossy())?;
        validate_iso3(&self.iso3)?;
        Ok(())
    }

    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self
                .input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }

    pub fn locations_path(&self) -> PathBuf {
        self.output_dir()
            .join(format!("{}{}", self.iso3, LOCATIONS_SUFFIX))
    }

    pub fn labeling_path(&self) -> PathBuf {
        self.output_dir()
            .join(format!("{}{}", self.iso3, LABELING_SUFFIX))
    }
}

/// The input path must name an .xlsx workbook
pub fn validate_input_path(input: &str) -> LesResult<PathBuf> {
    if !input.contains(WORKBOOK_EXTENSION) {
        return Err(LesError::Usage(format!(
            "'{}' must be a path to a .xlsx file",
            input
        )));
    }
    Ok(PathBuf::from(input))
}

/// The territory code must be exactly three characters
pub fn validate_iso3(code: &str) -> LesResult<String> {
    if code.chars().count() != ISO3_LEN {
        return Err(LesError::Usage(format!(
            "'{}' must be an ISO alpha-3 country code (3 characters)",
            code
        )));
    }
    Ok(code.to_string())
}

/// Both record tables for one workbook
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub addresses: Vec<AddressRecord>,
    pub labeling: Vec<LabelingRecord>,
    /// Summary worksheets that contributed rows, in file order
    pub summary_sheets: Vec<String>,
}

/// Paths of the written outputs
#[derive(Debug, Clone)]
pub struct WrittenReport {
    pub locations_path: PathBuf,
    pub labeling_path: PathBuf,
}

impl WrittenReport {
    /// Confirmation lines, locations first
    pub fn confirmations(&self) -> [String; 2] {
        [
            writer::confirmation(&self.locations_path),
            writer::confirmation(&self.labeling_path),
        ]
    }
}

/// Load the configured workbook and extract both tables
pub fn extract(config: &ExtractConfig) -> LesResult<Extraction> {
    config.validate()?;
    let workbook = WorkbookImporter::new(&config.input).import()?;
    debug!(sheets = ?workbook.sheet_names(), "workbook loaded");
    extract_workbook(&workbook, config)
}

/// Extract both tables from an already-loaded workbook
pub fn extract_workbook(workbook: &Workbook, config: &ExtractConfig) -> LesResult<Extraction> {
    let addressing = workbook
        .sheet(&config.addressing_sheet)
        .ok_or_else(|| LesError::MissingWorksheet(config.addressing_sheet.clone()))?;

    let summaries = workbook.sheets_with_prefix(&config.summary_prefix);
    if summaries.is_empty() {
        return Err(LesError::NoSummaryWorksheets(config.summary_prefix.clone()));
    }
    let summary_sheets: Vec<String> = summaries.iter().map(|s| s.name.clone()).collect();
    info!(addressing = %addressing.name, summaries = ?summary_sheets, "selected worksheets");

    let addresses = extract_addresses(&addressing.dataset, &addressing.name)?;

    let merged = Dataset::concat(summaries.iter().map(|s| &s.dataset));
    let source = format!("{}* worksheets", config.summary_prefix);
    let mut labeling = extract_labeling(merged, &source)?;
    if config.numeric_lmz_only {
        labeling = retain_numeric_lmz(labeling);
    }

    info!(
        addresses = addresses.len(),
        labels = labeling.len(),
        "extraction complete"
    );

    Ok(Extraction {
        addresses,
        labeling,
        summary_sheets,
    })
}

/// Render both tables, then write them. A rendering failure leaves no files.
pub fn write_outputs(extraction: &Extraction, config: &ExtractConfig) -> LesResult<WrittenReport> {
    let locations = writer::render_locations(&extraction.addresses)?;
    let labeling = writer::render_labeling(&extraction.labeling)?;

    let report = WrittenReport {
        locations_path: config.locations_path(),
        labeling_path: config.labeling_path(),
    };
    writer::write_file(&report.locations_path, &locations)?;
    writer::write_file(&report.labeling_path, &labeling)?;
    Ok(report)
}

/// Extract and write in one step
pub fn run(config: &ExtractConfig) -> LesResult<WrittenReport> {
    let extraction = extract(config)?;
    write_outputs(&extraction, config)
}
