use crate::data::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Styled spreadsheet – rows of values plus a per-row style
// ---------------------------------------------------------------------------

/// Presentation of a whole row. All cells of a row share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// No explicit fill.
    Default,
    /// The configured highlight fill.
    Highlighted,
}

/// One output row, borrowing its values from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRow<'a> {
    pub style: RowStyle,
    pub cells: StyledCells<'a>,
}

/// Cell contents of an output row.
#[derive(Debug, Clone, PartialEq)]
pub enum StyledCells<'a> {
    Header(&'a [String]),
    Data(&'a [CellValue]),
}

impl StyledCells<'_> {
    pub fn len(&self) -> usize {
        match self {
            StyledCells::Header(names) => names.len(),
            StyledCells::Data(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Header row followed by one row per dataset row, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSheet<'a> {
    pub rows: Vec<StyledRow<'a>>,
}

impl<'a> StyledSheet<'a> {
    /// Pair every dataset row with its flag.
    ///
    /// # Panics
    ///
    /// If `flags` does not have exactly one entry per dataset row.
    pub fn build(dataset: &'a Dataset, flags: &[bool]) -> Self {
        assert_eq!(
            flags.len(),
            dataset.len(),
            "classification vector length must match dataset rows"
        );

        let header = StyledRow {
            style: RowStyle::Default,
            cells: StyledCells::Header(dataset.columns()),
        };
        let data = dataset
            .rows()
            .iter()
            .zip(flags)
            .map(|(row, &flagged)| StyledRow {
                style: if flagged {
                    RowStyle::Highlighted
                } else {
                    RowStyle::Default
                },
                cells: StyledCells::Data(row),
            });

        StyledSheet {
            rows: std::iter::once(header).chain(data).collect(),
        }
    }

    pub fn highlighted_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.style == RowStyle::Highlighted)
            .count()
    }
}
