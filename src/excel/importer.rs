//! Workbook importer - Excel (.xlsx) → in-memory datasets

use crate::error::{LesError, LesResult};
use crate::types::{CellValue, Dataset};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Cell text treated as a missing value, matching common spreadsheet readers.
/// `-` is deliberately absent: it is a placeholder, not a missing value.
const MISSING_SENTINELS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A named worksheet and its rows
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    pub name: String,
    pub dataset: Dataset,
}

/// Every worksheet of a workbook, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Worksheet>,
}

impl Workbook {
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Worksheet whose name matches exactly
    pub fn sheet(&self, name: &str) -> Option<&Worksheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Worksheets whose names start with `prefix`, in file order
    pub fn sheets_with_prefix(&self, prefix: &str) -> Vec<&Worksheet> {
        self.sheets
            .iter()
            .filter(|s| s.name.starts_with(prefix))
            .collect()
    }
}

/// Loads every worksheet of an .xlsx file
pub struct WorkbookImporter {
    path: PathBuf,
}

impl WorkbookImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read all worksheets into memory
    pub fn import(&self) -> LesResult<Workbook> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path).map_err(|e| {
            LesError::Workbook(format!(
                "Failed to open Excel file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let sheet_names = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for name in sheet_names {
            let range = workbook.worksheet_range(&name).map_err(|e| {
                LesError::Workbook(format!("Failed to read worksheet '{}': {}", name, e))
            })?;
            let dataset = dataset_from_range(&range);
            debug!(sheet = %name, rows = dataset.len(), "loaded worksheet");
            sheets.push(Worksheet { name, dataset });
        }

        Ok(Workbook { sheets })
    }
}

/// First used row becomes the column header; the rest are data rows
fn dataset_from_range(range: &Range<Data>) -> Dataset {
    let mut rows = range.rows();

    let Some(header) = rows.next() else {
        return Dataset::default();
    };

    let columns = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| match convert_cell(cell) {
            CellValue::Empty => format!("col_{}", idx),
            value => value.to_string(),
        })
        .collect();

    let mut dataset = Dataset::new(columns);
    for row in rows {
        dataset.push_row(row.iter().map(convert_cell).collect());
    }
    dataset
}

/// Convert a calamine cell into a `CellValue`
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) if MISSING_SENTINELS.contains(&s.as_str()) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::Text(other.to_string()),
    }
}
