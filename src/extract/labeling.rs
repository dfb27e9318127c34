//! Locality labeling extraction from the summary worksheets

use crate::error::LesResult;
use crate::types::{Dataset, LabelingRecord};
use tracing::debug;

pub const CATEGORY_COLUMN: &str = "Category";
pub const LOGIC_LMZ_COLUMN: &str = "Desired Zoom level \n(based on logic)";
pub const LOCAL_LMZ_COLUMN: &str = "Desired Zoom level (based on local expertise)";
pub const TERRITORY_NAME_COLUMN: &str = "Official Name \n(English)";

/// Zoom level placeholder used for territories that get no label
pub const PLACEHOLDER: &str = "-";

/// The real header sits in the first loaded row; promote it to column names
pub fn normalize_header(dataset: Dataset) -> Dataset {
    dataset.with_header_from_first_row()
}

/// Drop every row that repeats the header. Concatenated sheets each bring
/// their own copy.
pub fn drop_header_rows(mut dataset: Dataset, source: &str) -> LesResult<Dataset> {
    let category = dataset.require_column(CATEGORY_COLUMN, source)?;
    let before = dataset.len();
    dataset.retain_rows(|row| !row[category].is_text(CATEGORY_COLUMN));
    debug!(source, dropped = before - dataset.len(), "dropped header rows");
    Ok(dataset)
}

/// One record per territory row with a usable by-logic zoom level and a name.
/// The local-expertise zoom level is passed through unfiltered.
pub fn extract_labeling(dataset: Dataset, source: &str) -> LesResult<Vec<LabelingRecord>> {
    if dataset.is_empty() {
        debug!(source, "no summary rows to label");
        return Ok(Vec::new());
    }

    let mut dataset = drop_header_rows(normalize_header(dataset), source)?;
    let logic = dataset.require_column(LOGIC_LMZ_COLUMN, source)?;
    let name = dataset.require_column(TERRITORY_NAME_COLUMN, source)?;

    let before = dataset.len();
    dataset.retain_rows(|row| {
        !row[logic].is_text(PLACEHOLDER) && !row[logic].is_missing() && !row[name].is_missing()
    });
    debug!(
        source,
        kept = dataset.len(),
        dropped = before - dataset.len(),
        "filtered territory rows"
    );

    if dataset.is_empty() {
        return Ok(Vec::new());
    }

    let local = dataset.require_column(LOCAL_LMZ_COLUMN, source)?;

    Ok(dataset
        .rows()
        .iter()
        .map(|row| LabelingRecord {
            territory_name: row[name].to_string(),
            logic_lmz: row[logic].clone(),
            local_lmz: row[local].clone(),
        })
        .collect())
}

/// Keep only records whose by-logic zoom level is numeric
pub fn retain_numeric_lmz(mut records: Vec<LabelingRecord>) -> Vec<LabelingRecord> {
    let before = records.len();
    records.retain(|r| r.logic_lmz.is_numeric());
    debug!(dropped = before - records.len(), "dropped non-numeric zoom levels");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LesError;
    use crate::types::CellValue;
    use pretty_assertions::assert_eq;

    fn t(s: &str) -> CellValue {
        CellValue::text(s)
    }

    fn n(v: f64) -> CellValue {
        CellValue::Number(v)
    }

    fn header_row() -> Vec<CellValue> {
        vec![
            t(CATEGORY_COLUMN),
            t(TERRITORY_NAME_COLUMN),
            t(LOGIC_LMZ_COLUMN),
            t(LOCAL_LMZ_COLUMN),
        ]
    }

    /// Raw summary sheet: a banner row was taken as the loaded header,
    /// so the real header is the first data row
    fn summary(rows: Vec<Vec<CellValue>>) -> Dataset {
        let mut ds = Dataset::new(vec![
            "Display Summary".to_string(),
            "col_1".to_string(),
            "col_2".to_string(),
            "col_3".to_string(),
        ]);
        ds.push_row(header_row());
        for row in rows {
            ds.push_row(row);
        }
        ds
    }

    fn names(records: &[LabelingRecord]) -> Vec<&str> {
        records.iter().map(|r| r.territory_name.as_str()).collect()
    }

    #[test]
    fn test_normalize_then_drop_header_rows() {
        let mut ds = summary(vec![vec![t("Province"), t("Chiang Mai"), n(9.0), n(10.0)]]);
        ds.push_row(header_row());

        let ds = drop_header_rows(normalize_header(ds), "summary").unwrap();
        assert_eq!(ds.columns()[1], TERRITORY_NAME_COLUMN);
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_drop_header_rows_requires_category() {
        let ds = Dataset::new(vec!["Name".to_string()]);
        let err = drop_header_rows(ds, "summary").unwrap_err();
        assert!(matches!(err, LesError::MissingColumn { .. }));
    }

    #[test]
    fn test_placeholder_row_excluded() {
        let ds = summary(vec![
            vec![t("Region"), t("Northern"), t("-"), n(6.0)],
            vec![t("Province"), t("Chiang Mai"), n(9.0), n(10.0)],
        ]);

        let records = extract_labeling(ds, "summary").unwrap();
        assert_eq!(names(&records), vec!["Chiang Mai"]);
    }

    #[test]
    fn test_missing_values_excluded() {
        let ds = summary(vec![
            vec![t("Province"), t("Lamphun"), CellValue::Empty, n(10.0)],
            vec![t("Province"), CellValue::Empty, n(9.0), n(10.0)],
            vec![CellValue::Empty, t("Lampang"), n(9.0), CellValue::Empty],
        ]);

        let records = extract_labeling(ds, "summary").unwrap();
        assert_eq!(
            records,
            vec![LabelingRecord {
                territory_name: "Lampang".to_string(),
                logic_lmz: n(9.0),
                local_lmz: CellValue::Empty,
            }]
        );
    }

    #[test]
    fn test_local_lmz_passed_through() {
        let ds = summary(vec![vec![t("District"), t("Mueang"), n(11.0), t("-")]]);
        let records = extract_labeling(ds, "summary").unwrap();
        assert!(records[0].local_lmz.is_text("-"));
    }

    #[test]
    fn test_no_deduplication() {
        let ds = summary(vec![
            vec![t("District"), t("Mueang"), n(11.0), n(12.0)],
            vec![t("District"), t("Mueang"), n(12.0), n(12.0)],
        ]);
        let records = extract_labeling(ds, "summary").unwrap();
        assert_eq!(names(&records), vec!["Mueang", "Mueang"]);
    }

    #[test]
    fn test_empty_dataset_yields_nothing() {
        let records = extract_labeling(Dataset::default(), "summary").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_logic_column() {
        let mut ds = Dataset::new(vec!["a".to_string(), "b".to_string()]);
        ds.push_row(vec![t(CATEGORY_COLUMN), t(TERRITORY_NAME_COLUMN)]);
        ds.push_row(vec![t("Province"), t("Phrae")]);

        let err = extract_labeling(ds, "Display Summary A").unwrap_err();
        assert!(err.to_string().contains("based on logic"));
    }

    #[test]
    fn test_retain_numeric_lmz() {
        let records = vec![
            LabelingRecord {
                territory_name: "A".to_string(),
                logic_lmz: n(9.0),
                local_lmz: CellValue::Empty,
            },
            LabelingRecord {
                territory_name: "B".to_string(),
                logic_lmz: t("see notes"),
                local_lmz: CellValue::Empty,
            },
            LabelingRecord {
                territory_name: "C".to_string(),
                logic_lmz: t("12"),
                local_lmz: CellValue::Empty,
            },
        ];
        let records = retain_numeric_lmz(records);
        assert_eq!(names(&records), vec!["A", "C"]);
    }
}
