use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::model::{CellValue, Dataset};
use crate::error::Result;

lazy_static! {
    // Three ASCII letters in order on one line, or a run of four digits.
    static ref FLAG_PATTERN: Regex =
        Regex::new(r"[a-zA-Z].*[a-zA-Z].*[a-zA-Z]|\d{4,}").unwrap();
}

/// Per-row flags, one per dataset row in row order.
pub type ClassificationVector = Vec<bool>;

/// Whether a single text value should be flagged.
pub fn is_flagged(text: &str) -> bool {
    FLAG_PATTERN.is_match(text)
}

/// Classify a column of values. Each value is compared through its text form,
/// so numbers match on their digits and empty cells never match.
pub fn classify<'a, I>(values: I) -> ClassificationVector
where
    I: IntoIterator<Item = &'a CellValue>,
{
    values
        .into_iter()
        .map(|value| match value {
            CellValue::Text(s) => is_flagged(s),
            other => is_flagged(&other.to_string()),
        })
        .collect()
}

/// Resolve `column` in the dataset and classify its values.
pub fn classify_column(dataset: &Dataset, column: &str) -> Result<ClassificationVector> {
    let flags = classify(dataset.column_values(column)?);
    debug!(
        "classified column '{column}': {} of {} rows flagged",
        flagged_count(&flags),
        flags.len()
    );
    Ok(flags)
}

/// Number of flagged rows.
pub fn flagged_count(flags: &[bool]) -> usize {
    flags.iter().filter(|&&f| f).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HighlightError;
    use rstest::rstest;

    #[rstest]
    #[case("TPE", true)]
    #[case("A1B2", false)]
    #[case("12345", true)]
    #[case("123", false)]
    #[case("a.b.c", true)]
    #[case("", false)]
    #[case("tpe", true)]
    #[case("a1a1a", true)]
    #[case("1234", true)]
    #[case("12-34", false)]
    #[case("台北市中正區", false)]
    #[case("台北市TPE路", true)]
    #[case("Ab\nc", false)]
    #[case("A\nbcd", true)]
    #[case("１２３４", true)]
    #[case("Main St", true)]
    fn flag_rule(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_flagged(text), expected, "value {text:?}");
    }

    #[test]
    fn non_ascii_letters_do_not_count() {
        assert!(!is_flagged("éàü"));
        // Kelvin sign folds to 'k' under case-insensitive Unicode matching
        assert!(!is_flagged("\u{212A}\u{212A}\u{212A}"));
    }

    #[test]
    fn numbers_are_matched_on_their_text() {
        let values = vec![
            CellValue::Integer(99990000),
            CellValue::Integer(123),
            CellValue::Float(12345.5),
            CellValue::Empty,
        ];
        assert_eq!(classify(&values), vec![true, false, true, false]);
    }

    #[test]
    fn empty_column_gives_empty_vector() {
        let values: Vec<CellValue> = Vec::new();
        assert!(classify(&values).is_empty());
    }

    #[test]
    fn classify_column_scenario() {
        let ds = Dataset::new(
            vec!["addr".into()],
            ["TPE101", "中正路 12 號", "99990000", "abc"]
                .iter()
                .map(|s| vec![CellValue::Text(s.to_string())])
                .collect(),
        )
        .unwrap();
        let flags = classify_column(&ds, "addr").unwrap();
        assert_eq!(flags, vec![true, false, true, true]);
        assert_eq!(flagged_count(&flags), 3);
    }

    #[test]
    fn classify_column_missing() {
        let ds = Dataset::new(vec!["addr".into()], vec![]).unwrap();
        assert!(matches!(
            classify_column(&ds, "住所２"),
            Err(HighlightError::MissingColumn { .. })
        ));
    }

    #[test]
    fn classification_is_deterministic() {
        let values: Vec<CellValue> = ["x1y2z", "55555", "no"]
            .iter()
            .map(|s| CellValue::Text(s.to_string()))
            .collect();
        assert_eq!(classify(&values), classify(&values));
    }
}
