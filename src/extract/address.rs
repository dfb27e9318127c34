//! Address extraction from the addressing worksheet

use super::locality::locality_name;
use crate::error::{LesError, LesResult};
use crate::types::{AddressRecord, CellValue, Dataset};
use tracing::debug;

pub const ADDRESS_COLUMN: &str = "Address";
pub const COORDINATE_COLUMN: &str = "Location \n(X, Y coordinate)";

const COORDINATE_SEPARATOR: &str = ", ";

/// One record per row with a non-empty address, in row order
pub fn extract_addresses(dataset: &Dataset, source: &str) -> LesResult<Vec<AddressRecord>> {
    let address_idx = dataset.require_column(ADDRESS_COLUMN, source)?;

    let rows: Vec<&Vec<CellValue>> = dataset
        .rows()
        .iter()
        .filter(|row| !row[address_idx].is_missing())
        .collect();

    debug!(
        source,
        kept = rows.len(),
        dropped = dataset.len() - rows.len(),
        "filtered rows without an address"
    );

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let coordinate_idx = dataset.require_column(COORDINATE_COLUMN, source)?;

    rows.into_iter()
        .map(|row| {
            let raw = row[address_idx].to_string();
            let locality = locality_name(&raw)?;
            let (latitude, longitude) = split_coordinates(&raw, &row[coordinate_idx])?;
            Ok(AddressRecord {
                address: raw.trim().to_string(),
                locality_name: locality,
                latitude,
                longitude,
            })
        })
        .collect()
}

/// Split `"<lat>, <lon>"` into its two components. Extra components are ignored.
pub fn split_coordinates(address: &str, cell: &CellValue) -> LesResult<(String, String)> {
    let malformed = || LesError::MalformedCoordinates {
        address: address.to_string(),
        value: cell.to_string(),
    };

    if cell.is_missing() {
        return Err(malformed());
    }

    let text = cell.to_string();
    let mut parts = text.split(COORDINATE_SEPARATOR);
    match (parts.next(), parts.next()) {
        (Some(latitude), Some(longitude)) => Ok((latitude.to_string(), longitude.to_string())),
        _ => Err(malformed()),
    }
}
