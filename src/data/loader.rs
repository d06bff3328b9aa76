use std::io::Read;
use std::path::Path;

use log::debug;

use super::model::{CellValue, Dataset};
use crate::error::{HighlightError, Result};

/// Largest integer an xlsx number cell (an f64) holds without rounding.
const MAX_EXACT_INTEGER: i64 = 1 << 53;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// How raw CSV fields are turned into [`CellValue`]s.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Produce number cells for fields whose text is a canonical number.
    pub infer_numbers: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            infer_numbers: true,
        }
    }
}

/// Parse CSV bytes (comma separated, header row first, UTF-8).
pub fn load_csv(bytes: &[u8], options: LoadOptions) -> Result<Dataset> {
    load_csv_reader(bytes, options)
}

/// Read and parse a CSV file from disk.
pub fn load_csv_path(path: &Path, options: LoadOptions) -> Result<Dataset> {
    let bytes = std::fs::read(path).map_err(|err| {
        HighlightError::malformed(None, format!("cannot read {}: {err}", path.display()))
    })?;
    load_csv(&bytes, options)
}

/// CSV layout: one header row naming the columns, then data rows of the
/// same width. Ragged rows, invalid UTF-8 and a missing header all fail.
pub fn load_csv_reader<R: Read>(input: R, options: LoadOptions) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    // csv yields a single empty header for empty input
    if columns.is_empty() || (columns.len() == 1 && columns[0].is_empty()) {
        return Err(HighlightError::malformed(None, "no header row"));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row = record
            .iter()
            .map(|field| parse_cell(field, options))
            .collect();
        rows.push(row);
    }

    debug!("parsed CSV: {} columns, {} rows", columns.len(), rows.len());
    Dataset::new(columns, rows)
}

// ---------------------------------------------------------------------------
// Cell typing
// ---------------------------------------------------------------------------

/// Guess the cell type of a raw field. A field only becomes a number when
/// printing the number gives back the exact same text.
pub fn parse_cell(s: &str, options: LoadOptions) -> CellValue {
    if s.is_empty() {
        return CellValue::Empty;
    }
    if options.infer_numbers {
        if let Ok(i) = s.parse::<i64>() {
            if i.to_string() == s && (-MAX_EXACT_INTEGER..=MAX_EXACT_INTEGER).contains(&i) {
                return CellValue::Integer(i);
            }
        } else if let Ok(f) = s.parse::<f64>() {
            if f.is_finite() && f.to_string() == s {
                return CellValue::Float(f);
            }
        }
    }
    CellValue::Text(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn load(input: &str) -> Result<Dataset> {
        load_csv(input.as_bytes(), LoadOptions::default())
    }

    #[test]
    fn loads_header_and_rows_in_order() {
        let ds = load("id,addr\n1,TPE101\n2,Main St\n").unwrap();
        assert_eq!(ds.columns(), &["id".to_string(), "addr".to_string()]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows()[0][0], CellValue::Integer(1));
        assert_eq!(ds.rows()[1][1], CellValue::Text("Main St".into()));
    }

    #[test]
    fn keeps_quoted_commas_and_newlines() {
        let ds = load("addr\n\"Lane 5, No. 3\"\n\"line1\nline2\"\n").unwrap();
        assert_eq!(ds.rows()[0][0].to_string(), "Lane 5, No. 3");
        assert_eq!(ds.rows()[1][0].to_string(), "line1\nline2");
    }

    #[test]
    fn strips_utf8_bom_from_first_header() {
        let ds = load("\u{FEFF}住所２,id\n台北市,1\n").unwrap();
        assert_eq!(ds.columns()[0], "住所２");
    }

    #[test]
    fn ragged_row_is_malformed() {
        let err = load("a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(err, HighlightError::MalformedInput { .. }));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let err = load_csv(b"addr\n\xff\xfe\n", LoadOptions::default()).unwrap_err();
        assert!(matches!(err, HighlightError::MalformedInput { .. }));
    }

    #[test]
    fn empty_input_is_malformed() {
        let err = load("").unwrap_err();
        assert!(err.to_string().contains("no header row"));
    }

    #[test]
    fn header_only_gives_empty_dataset() {
        let ds = load("addr,id\n").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.columns().len(), 2);
    }

    #[rstest]
    #[case("12345", CellValue::Integer(12345))]
    #[case("-7", CellValue::Integer(-7))]
    #[case("1.5", CellValue::Float(1.5))]
    #[case("007", CellValue::Text("007".into()))]
    #[case("1.50", CellValue::Text("1.50".into()))]
    #[case("+5", CellValue::Text("+5".into()))]
    #[case("1e3", CellValue::Text("1e3".into()))]
    #[case("NaN", CellValue::Text("NaN".into()))]
    #[case("inf", CellValue::Text("inf".into()))]
    #[case("99999999999999999", CellValue::Text("99999999999999999".into()))]
    #[case("-9223372036854775808", CellValue::Text("-9223372036854775808".into()))]
    #[case("9007199254740992", CellValue::Integer(9007199254740992))]
    #[case("", CellValue::Empty)]
    fn number_inference_preserves_text(#[case] raw: &str, #[case] expected: CellValue) {
        let cell = parse_cell(raw, LoadOptions::default());
        assert_eq!(cell, expected);
        assert_eq!(cell.to_string(), raw);
    }

    #[test]
    fn inference_can_be_disabled() {
        let options = LoadOptions {
            infer_numbers: false,
        };
        assert_eq!(parse_cell("42", options), CellValue::Text("42".into()));
    }
}
