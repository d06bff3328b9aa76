use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::color::HighlightColor;
use crate::data::loader::LoadOptions;
use crate::error::{HighlightError, Result};

// ---------------------------------------------------------------------------
// HighlighterConfig – fixed settings for one run
// ---------------------------------------------------------------------------

/// Settings shared by every request. Loaded from an optional JSON file; any
/// missing key keeps its default.
///
/// ```json
/// { "default_column": "住所２", "highlight_color": "#FFFF00" }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlighterConfig {
    /// Column classified when the caller names none.
    pub default_column: String,
    /// Fill of flagged rows.
    pub highlight_color: HighlightColor,
    /// Name of the single output worksheet.
    pub sheet_name: String,
    /// Prefix of the default output file name.
    pub output_prefix: String,
    /// Write canonical numbers as number cells instead of text.
    pub infer_numbers: bool,
    /// Rows shown by `preview`.
    pub preview_rows: usize,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            default_column: "住所２".to_string(),
            highlight_color: HighlightColor::default(),
            sheet_name: "標黃結果".to_string(),
            output_prefix: "整理結果_".to_string(),
            infer_numbers: true,
            preview_rows: 5,
        }
    }
}

impl HighlighterConfig {
    /// Parse a JSON config document.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: HighlighterConfig = serde_json::from_str(text)
            .map_err(|err| HighlightError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| HighlightError::Config(format!("{}: {err}", path.display())))?;
        debug!("loaded config from {}", path.display());
        Self::from_json(&text)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Ok(Self::default()),
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            infer_numbers: self.infer_numbers,
        }
    }

    fn validate(&self) -> Result<()> {
        // xlsx sheet names: 1..=31 chars, none of : \ / ? * [ ]
        let len = self.sheet_name.chars().count();
        if len == 0 || len > 31 {
            return Err(HighlightError::Config(format!(
                "sheet name must be 1 to 31 characters, got {len}"
            )));
        }
        if let Some(c) = self
            .sheet_name
            .chars()
            .find(|c| matches!(c, ':' | '\\' | '/' | '?' | '*' | '[' | ']'))
        {
            return Err(HighlightError::Config(format!(
                "sheet name may not contain '{c}'"
            )));
        }
        Ok(())
    }
}
