use thiserror::Error;

// ---------------------------------------------------------------------------
// HighlightError – every way a single request can fail
// ---------------------------------------------------------------------------

/// Terminal failure of one highlight request. No variant ever comes with
/// partial output.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// The requested column is not among the dataset's headers.
    #[error("column '{column}' not found (available: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// The input could not be parsed as a rectangular CSV table.
    #[error("malformed input{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    MalformedInput {
        line: Option<u64>,
        message: String,
    },

    /// The spreadsheet writer could not produce the document.
    #[error("failed to serialize spreadsheet: {0}")]
    Serialization(String),

    /// Invalid configuration (config file or highlight colour).
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl HighlightError {
    pub fn malformed(line: Option<u64>, message: impl Into<String>) -> Self {
        HighlightError::MalformedInput {
            line,
            message: message.into(),
        }
    }
}

impl From<csv::Error> for HighlightError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let message = match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!("expected {expected_len} fields, found {len}"),
            csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8 in field {}", err.field() + 1),
            _ => err.to_string(),
        };
        HighlightError::MalformedInput { line, message }
    }
}

pub type Result<T, E = HighlightError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_lists_available_headers() {
        let err = HighlightError::MissingColumn {
            column: "addr".into(),
            available: vec!["id".into(), "name".into()],
        };
        assert_eq!(
            err.to_string(),
            "column 'addr' not found (available: id, name)"
        );
    }

    #[test]
    fn malformed_input_mentions_line_when_known() {
        let err = HighlightError::malformed(Some(3), "expected 2 fields, found 3");
        assert_eq!(
            err.to_string(),
            "malformed input at line 3: expected 2 fields, found 3"
        );
        let err = HighlightError::malformed(None, "no header row");
        assert_eq!(err.to_string(), "malformed input: no header row");
    }
}
