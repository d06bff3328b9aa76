use log::info;

use crate::config::HighlighterConfig;
use crate::data::classify::{classify_column, flagged_count, ClassificationVector};
use crate::data::loader::load_csv;
use crate::data::model::Dataset;
use crate::error::Result;
use crate::sheet::annotate;
use crate::sheet::xlsx::XlsxOptions;

// ---------------------------------------------------------------------------
// One highlight request: CSV bytes in, xlsx bytes out
// ---------------------------------------------------------------------------

/// Result of a successful request.
#[derive(Debug, Clone)]
pub struct HighlightOutput {
    /// The finished `.xlsx` document.
    pub xlsx: Vec<u8>,
    /// Per-row flags, in input order.
    pub flags: ClassificationVector,
    /// The column that was classified.
    pub column: String,
}

impl HighlightOutput {
    pub fn flagged(&self) -> usize {
        flagged_count(&self.flags)
    }

    pub fn total(&self) -> usize {
        self.flags.len()
    }
}

/// Pick the explicit column name, or fall back to the configured default.
pub fn resolve_column<'a>(column: Option<&'a str>, config: &'a HighlighterConfig) -> &'a str {
    column.unwrap_or(&config.default_column)
}

/// Load, classify and annotate in one go. Fails before producing any bytes
/// if the input is malformed or the column is missing.
pub fn highlight(
    input: &[u8],
    column: Option<&str>,
    config: &HighlighterConfig,
) -> Result<HighlightOutput> {
    let dataset = load_csv(input, config.load_options())?;
    highlight_dataset(&dataset, column, config)
}

/// Same as [`highlight`] for an already parsed dataset.
pub fn highlight_dataset(
    dataset: &Dataset,
    column: Option<&str>,
    config: &HighlighterConfig,
) -> Result<HighlightOutput> {
    let column = resolve_column(column, config);
    let flags = classify_column(dataset, column)?;

    let options = XlsxOptions {
        sheet_name: config.sheet_name.clone(),
        highlight: config.highlight_color,
    };
    let xlsx = annotate(dataset, &flags, &options)?;

    info!(
        "flagged {} of {} rows on column '{column}'",
        flagged_count(&flags),
        flags.len()
    );
    Ok(HighlightOutput {
        xlsx,
        flags,
        column: column.to_string(),
    })
}
