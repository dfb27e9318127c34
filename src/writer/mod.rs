//! Delimited output for extracted records
//!
//! Both tables are rendered into memory first; nothing touches the disk until
//! every record has been serialized.

use crate::error::LesResult;
use crate::types::{AddressRecord, LabelingRecord};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub const LABELING_HEADER: [&str; 3] = ["territory_name", "logic_lmz", "local_lmz"];
pub const LOCATIONS_HEADER: [&str; 4] = ["address", "locality_name", "latitude", "longitude"];

pub const LABELING_DELIMITER: u8 = b'\t';
pub const LOCATIONS_DELIMITER: u8 = b',';

/// Tab-separated labeling table
pub fn render_labeling(records: &[LabelingRecord]) -> LesResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_delimited(&mut buf, LABELING_DELIMITER, &LABELING_HEADER, records)?;
    Ok(buf)
}

/// Comma-separated locations table
pub fn render_locations(records: &[AddressRecord]) -> LesResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_delimited(&mut buf, LOCATIONS_DELIMITER, &LOCATIONS_HEADER, records)?;
    Ok(buf)
}

/// Write rendered bytes and return the confirmation line
pub fn write_file(path: &Path, contents: &[u8]) -> LesResult<String> {
    fs::write(path, contents)?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output file");
    Ok(confirmation(path))
}

pub fn confirmation(path: &Path) -> String {
    format!("File has been made at: {}", path.display())
}

/// Header row always written, even for zero records; `\n` line endings
fn write_delimited<W, T>(writer: W, delimiter: u8, header: &[&str], records: &[T]) -> LesResult<()>
where
    W: Write,
    T: Serialize,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(header)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_labeling_is_tab_separated() {
        let records = vec![
            LabelingRecord {
                territory_name: "Chiang Mai".to_string(),
                logic_lmz: CellValue::Number(9.0),
                local_lmz: CellValue::Number(10.0),
            },
            LabelingRecord {
                territory_name: "Lampang".to_string(),
                logic_lmz: CellValue::text("8"),
                local_lmz: CellValue::Empty,
            },
        ];

        let out = String::from_utf8(render_labeling(&records).unwrap()).unwrap();
        assert_eq!(
            out,
            "territory_name\tlogic_lmz\tlocal_lmz\nChiang Mai\t9\t10\nLampang\t8\t\n"
        );
    }

    #[test]
    fn test_render_locations_quotes_commas() {
        let records = vec![AddressRecord {
            address: "12 Silom Rd, 10500, Bang Rak".to_string(),
            locality_name: "Bang Rak".to_string(),
            latitude: "13.72".to_string(),
            longitude: "100.52".to_string(),
        }];

        let out = String::from_utf8(render_locations(&records).unwrap()).unwrap();
        assert_eq!(
            out,
            "address,locality_name,latitude,longitude\n\"12 Silom Rd, 10500, Bang Rak\",Bang Rak,13.72,100.52\n"
        );
    }

    #[test]
    fn test_empty_tables_keep_header() {
        let out = render_labeling(&[]).unwrap();
        assert_eq!(out, b"territory_name\tlogic_lmz\tlocal_lmz\n".to_vec());
        let out = render_locations(&[]).unwrap();
        assert_eq!(out, b"address,locality_name,latitude,longitude\n".to_vec());
    }

    #[test]
    fn test_write_file_returns_confirmation() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("THA_les_locality_labeling.csv");

        let message = write_file(&path, b"x\n").unwrap();
        assert!(message.starts_with("File has been made at: "));
        assert!(message.ends_with("THA_les_locality_labeling.csv"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "x\n");
    }
}
