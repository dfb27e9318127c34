//! Excel import for LES Report workbooks
//!
//! Every worksheet is loaded into a [`Dataset`](crate::types::Dataset); the
//! first used row of each sheet names its columns.

mod importer;

pub use importer::{Workbook, WorkbookImporter, Worksheet};
