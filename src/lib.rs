//! LES Report extraction
//!
//! Converts an LES Report workbook into two flat tables:
//!
//! - a locality labeling table (territory name + recommended label zoom levels)
//! - an address table (address, derived locality name, latitude, longitude)
//!
//! # Example
//!
//! ```no_run
//! use les_extract::report::{self, ExtractConfig};
//!
//! let config = ExtractConfig::new("reports/LES_Thailand.xlsx", "THA");
//! let written = report::run(&config)?;
//!
//! for line in written.confirmations() {
//!     println!("{}", line);
//! }
//! # Ok::<(), les_extract::error::LesError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod extract;
pub mod report;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{LesError, LesResult};
pub use types::{AddressRecord, CellValue, Dataset, LabelingRecord};
