use crate::error::{LesError, LesResult};
use serde::{Serialize, Serializer};
use std::fmt;

//==============================================================================
// Cell values
//==============================================================================

/// A single worksheet cell after import
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Blank cell, error cell or a missing-value sentinel such as `N/A`
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// True when the cell holds exactly this text
    pub fn is_text(&self, expected: &str) -> bool {
        matches!(self, CellValue::Text(s) if s == expected)
    }

    /// True for numeric cells and for text that parses as a number
    pub fn is_numeric(&self) -> bool {
        match self {
            CellValue::Number(_) => true,
            CellValue::Text(s) => s.trim().parse::<f64>().is_ok(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            // Integer-valued numbers render without a fractional part: 12, not 12.0
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

//==============================================================================
// Tabular dataset
//==============================================================================

/// Rows of cells addressed by column name, in worksheet order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, padding it (or widening the dataset) so every row
    /// has one cell per column
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        if row.len() > self.columns.len() {
            for idx in self.columns.len()..row.len() {
                self.columns.push(format!("col_{}", idx));
            }
            let width = self.columns.len();
            for existing in &mut self.rows {
                existing.resize(width, CellValue::Empty);
            }
        }
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    /// Index of the first column with this exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn require_column(&self, name: &str, source: &str) -> LesResult<usize> {
        self.column_index(name)
            .ok_or_else(|| LesError::MissingColumn {
                sheet: source.to_string(),
                column: name.to_string(),
            })
    }

    /// Keep only the rows for which `keep` returns true
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[CellValue]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// Positional concatenation: column names come from the first part,
    /// rows are appended part by part in order
    pub fn concat<'a, I>(parts: I) -> Dataset
    where
        I: IntoIterator<Item = &'a Dataset>,
    {
        let mut parts = parts.into_iter();
        let mut merged = match parts.next() {
            Some(first) => first.clone(),
            None => return Dataset::default(),
        };
        for part in parts {
            for row in &part.rows {
                merged.push_row(row.clone());
            }
        }
        merged
    }

    /// Rename columns from the text of the first row. The row itself is kept;
    /// callers drop it together with any other copies of the header.
    /// Repeated header text is not deduplicated: lookups resolve to the
    /// first column with that name.
    pub fn with_header_from_first_row(mut self) -> Dataset {
        let Some(first) = self.rows.first() else {
            return self;
        };
        self.columns = first
            .iter()
            .enumerate()
            .map(|(idx, cell)| match cell {
                CellValue::Empty => format!("col_{}", idx),
                other => other.to_string(),
            })
            .collect();
        self
    }
}

//==============================================================================
// Output records
//==============================================================================

/// One territory label with its recommended zoom levels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelingRecord {
    pub territory_name: String,
    pub logic_lmz: CellValue,
    pub local_lmz: CellValue,
}

/// One addressable locality with its coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    pub address: String,
    pub locality_name: String,
    pub latitude: String,
    pub longitude: String,
}
