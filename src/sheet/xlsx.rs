use std::io::Cursor;

use log::debug;
use umya_spreadsheet::{Cell, Spreadsheet};

use super::styled::{RowStyle, StyledCells, StyledSheet};
use crate::color::HighlightColor;
use crate::data::model::CellValue;
use crate::error::{HighlightError, Result};

/// Row limit of one xlsx worksheet, header included.
pub const MAX_ROWS: usize = 1_048_576;
/// Column limit of one xlsx worksheet (`XFD`).
pub const MAX_COLUMNS: usize = 16_384;

/// Layout of the generated workbook.
#[derive(Debug, Clone)]
pub struct XlsxOptions {
    pub sheet_name: String,
    pub highlight: HighlightColor,
}

/// Render the styled sheet into a single-worksheet workbook and return the
/// `.xlsx` bytes. Values and fills are written in the same pass.
pub fn write_xlsx(sheet: &StyledSheet<'_>, options: &XlsxOptions) -> Result<Vec<u8>> {
    check_size(sheet)?;
    let book = build_workbook(sheet, options);

    let mut buffer = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut buffer)
        .map_err(|err| HighlightError::Serialization(err.to_string()))?;

    let bytes = buffer.into_inner();
    debug!(
        "wrote workbook: {} rows, {} highlighted, {} bytes",
        sheet.rows.len(),
        sheet.highlighted_rows(),
        bytes.len()
    );
    Ok(bytes)
}

/// Reject sheets the format cannot hold before anything is written.
fn check_size(sheet: &StyledSheet<'_>) -> Result<()> {
    if sheet.rows.len() > MAX_ROWS {
        return Err(HighlightError::Serialization(format!(
            "sheet is too large: {} rows exceed the limit of {MAX_ROWS}",
            sheet.rows.len()
        )));
    }
    let columns = sheet.rows.first().map_or(0, |row| row.cells.len());
    if columns > MAX_COLUMNS {
        return Err(HighlightError::Serialization(format!(
            "sheet is too large: {columns} columns exceed the limit of {MAX_COLUMNS}"
        )));
    }
    Ok(())
}

fn build_workbook(sheet: &StyledSheet<'_>, options: &XlsxOptions) -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    let worksheet = book.get_active_sheet_mut();
    worksheet.set_name(options.sheet_name.clone());

    let fill = options.highlight.argb();
    for (row_idx, row) in sheet.rows.iter().enumerate() {
        // xlsx coordinates are 1-based (column, row)
        let row_no = row_idx as u32 + 1;
        for col_idx in 0..row.cells.len() {
            let cell = worksheet.get_cell_mut((col_idx as u32 + 1, row_no));
            match &row.cells {
                StyledCells::Header(names) => {
                    cell.set_value_string(names[col_idx].clone());
                }
                StyledCells::Data(values) => write_value(cell, &values[col_idx]),
            }
            if row.style == RowStyle::Highlighted {
                cell.get_style_mut().set_background_color(fill.clone());
            }
        }
    }
    book
}

fn write_value(cell: &mut Cell, value: &CellValue) {
    match value {
        CellValue::Text(s) => {
            cell.set_value_string(s.clone());
        }
        CellValue::Integer(_) | CellValue::Float(_) => {
            if let Some(n) = value.as_f64() {
                cell.set_value_number(n);
            }
        }
        // a highlighted empty cell still gets its fill, just no value
        CellValue::Empty => {}
    }
}
