//! Record extraction from LES Report worksheets
//!
//! - Labeling: territory names and recommended zoom levels
//! - Address: addresses, derived locality names and coordinates

pub mod address;
pub mod labeling;
pub mod locality;

pub use address::extract_addresses;
pub use labeling::{extract_labeling, retain_numeric_lmz};
pub use locality::locality_name;
