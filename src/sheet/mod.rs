//! Spreadsheet annotator: turns a dataset plus its classification vector
//! into a styled `.xlsx` document.

pub mod styled;
pub mod xlsx;

use log::info;

use crate::data::model::Dataset;
use crate::error::Result;
use styled::StyledSheet;
use xlsx::{write_xlsx, XlsxOptions};

/// Produce the `.xlsx` bytes for `dataset`, highlighting every row whose
/// flag is set.
///
/// # Panics
///
/// If `flags.len()` differs from the number of dataset rows.
pub fn annotate(dataset: &Dataset, flags: &[bool], options: &XlsxOptions) -> Result<Vec<u8>> {
    let sheet = StyledSheet::build(dataset, flags);
    info!(
        "annotating {} rows ({} highlighted) into sheet '{}'",
        dataset.len(),
        sheet.highlighted_rows(),
        options.sheet_name
    );
    write_xlsx(&sheet, options)
}
