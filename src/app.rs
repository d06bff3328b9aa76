use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::cli::{Cli, Commands};
use crate::config::HighlighterConfig;
use crate::data::classify::{classify_column, flagged_count};
use crate::data::loader::load_csv_path;
use crate::pipeline::{highlight, resolve_column};

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

pub fn run(cli: Cli) -> Result<()> {
    let config = HighlighterConfig::load(cli.config.as_deref()).context("loading config")?;

    match cli.command {
        Commands::Highlight {
            input,
            column,
            output,
            color,
        } => {
            let mut config = config;
            if let Some(color) = color {
                config.highlight_color = color.parse().context("parsing --color")?;
            }
            let output = output.unwrap_or_else(|| default_output_path(&input, &config));
            let flagged = run_highlight(&input, column.as_deref(), &output, &config)?;
            println!("Marked {flagged} row(s). Wrote {}", output.display());
        }
        Commands::Preview {
            input,
            column,
            rows,
        } => {
            let rows = rows.unwrap_or(config.preview_rows);
            print!("{}", run_preview(&input, column.as_deref(), rows, &config)?);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// highlight
// ---------------------------------------------------------------------------

/// `<output_prefix><input stem>.xlsx` in the input's directory.
pub fn default_output_path(input: &Path, config: &HighlighterConfig) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}{stem}.xlsx", config.output_prefix))
}

/// Process `input` and write the workbook to `output`. Returns the number
/// of flagged rows. Nothing is written when processing fails.
pub fn run_highlight(
    input: &Path,
    column: Option<&str>,
    output: &Path,
    config: &HighlighterConfig,
) -> Result<usize> {
    let bytes =
        std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    info!("processing {} ({} bytes)", input.display(), bytes.len());

    let result = highlight(&bytes, column, config)
        .with_context(|| format!("processing {}", input.display()))?;
    if result.flagged() == 0 && result.total() > 0 {
        warn!(
            "none of {} rows matched in column '{}'",
            result.total(),
            result.column
        );
    }

    std::fs::write(output, &result.xlsx)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(result.flagged())
}

// ---------------------------------------------------------------------------
// preview
// ---------------------------------------------------------------------------

/// Render the first `rows` values of the target column with their flag.
pub fn run_preview(
    input: &Path,
    column: Option<&str>,
    rows: usize,
    config: &HighlighterConfig,
) -> Result<String> {
    let dataset = load_csv_path(input, config.load_options())
        .with_context(|| format!("loading {}", input.display()))?;
    let column = resolve_column(column, config);
    let flags = classify_column(&dataset, column)?;
    let idx = dataset.column_index(column)?;

    let mut out = format!(
        "{} of {} rows flagged in '{column}'\n",
        flagged_count(&flags),
        flags.len()
    );
    for (i, (row, flagged)) in dataset.rows().iter().zip(&flags).take(rows).enumerate() {
        let mark = if *flagged { '*' } else { ' ' };
        out.push_str(&format!("{mark} {:>4}  {}\n", i + 1, row[idx]));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::xlsx::tests::{fill_of, read_back};

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn default_output_uses_prefix_and_stem() {
        let config = HighlighterConfig::default();
        let out = default_output_path(Path::new("/data/customers.csv"), &config);
        assert_eq!(out, PathBuf::from("/data/整理結果_customers.xlsx"));
    }

    #[test]
    fn highlight_writes_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "in.csv", "addr\nTPE101\n台北\n");
        let output = dir.path().join("out.xlsx");

        let flagged = run_highlight(
            &input,
            Some("addr"),
            &output,
            &HighlighterConfig::default(),
        )
        .unwrap();
        assert_eq!(flagged, 1);

        let book = read_back(&std::fs::read(&output).unwrap());
        assert_eq!(fill_of(&book, 1, 2).as_deref(), Some("FFFFFF00"));
        assert_eq!(fill_of(&book, 1, 3), None);
    }

    #[test]
    fn failed_highlight_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "in.csv", "addr\nTPE101\n");
        let output = dir.path().join("out.xlsx");

        let err = run_highlight(&input, Some("住所２"), &output, &HighlighterConfig::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("column '住所２' not found"));
        assert!(!output.exists());
    }

    #[test]
    fn preview_lists_first_rows_with_flags() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(
            dir.path(),
            "in.csv",
            "id,addr\n1,TPE101\n2,台北\n3,12345\n",
        );
        let text = run_preview(&input, Some("addr"), 2, &HighlighterConfig::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2 of 3 rows flagged in 'addr'");
        assert_eq!(lines[1], "*    1  TPE101");
        assert_eq!(lines[2], "     2  台北");
        assert_eq!(lines.len(), 3);
    }
}
