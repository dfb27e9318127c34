use thiserror::Error;

pub type LesResult<T> = Result<T, LesError>;

#[derive(Error, Debug)]
pub enum LesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Worksheet '{0}' not found in workbook")]
    MissingWorksheet(String),

    #[error("No worksheet name starts with '{0}'")]
    NoSummaryWorksheets(String),

    #[error("Column '{column}' not found in {sheet}")]
    MissingColumn { sheet: String, column: String },

    #[error("No trailing digit found in address: {0:?}")]
    NoTrailingDigitFound(String),

    #[error("Malformed coordinates {value:?} for address {address:?}: expected \"<lat>, <lon>\"")]
    MalformedCoordinates { address: String, value: String },

    #[error("Usage error: {0}")]
    Usage(String),
}
