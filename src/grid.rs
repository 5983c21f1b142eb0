//! Grid model: table/row/cell primitives with span and vertical-merge metadata.
//!
//! A [`Grid`] is pure data handed to the document renderer: an ordered list of
//! rows, each an ordered list of cells carrying a starting column index, a
//! column span, a vertical-merge marker, border and style tags, and text
//! paragraphs. It is built through [`TableBuilder`], which is strictly
//! append-only and validates the layout invariants as cells arrive:
//!
//! - every row's spans sum to exactly the table's column count;
//! - a [`MergeKind::Continue`] cell must sit under an open
//!   [`MergeKind::Restart`] chain in the same column;
//! - cells arrive in column order with no gaps or overlaps.
//!
//! Violations are caller bugs and surface as [`LayoutError`]. Absent input
//! values are never an error at this layer; they arrive as placeholder text.

use crate::text::CellText;
use smallvec::SmallVec;

/// Vertical-merge marker on a cell.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeKind {
    /// Not part of a vertical merge.
    #[default]
    None,
    /// Anchor of a vertical merge region.
    Restart,
    /// Continuation of the merge region opened above in the same column.
    Continue,
}

bitflags::bitflags! {
    /// Cell attribute flags.
    #[repr(transparent)]
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct CellFlags: u8 {
        /// Render the cell without any borders.
        const BORDER_SUPPRESSED = 0b0001;
    }
}

impl std::fmt::Debug for CellFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Paragraph/character style tag carried on a cell for the renderer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellStyle {
    /// Centered body cell.
    #[default]
    Body,
    /// Block caption cell (bold/colored in the renderer).
    Caption,
    /// Chart title cell (heading style, bookmark anchor).
    Title,
    /// Abbreviated-chart header cell.
    Header,
    /// Spacer or separator cell (no-spacing empty paragraph).
    Spacer,
}

/// Opaque document-unique cell identifier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(pub u32);

/// Monotonic identifier source, scoped to one grid build.
///
/// Identifiers are unique within one assembly pass and never reused while the
/// grid is alive. Two builds from identical input produce identical id
/// sequences, so ids are stable but carry no meaning beyond uniqueness.
#[derive(Debug, Clone, Default)]
pub struct IdSource {
    next: u32,
}

impl IdSource {
    /// Create a source starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next identifier.
    pub fn next_id(&mut self) -> CellId {
        let id = CellId(self.next);
        self.next += 1;
        id
    }
}

/// One table cell.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Document-unique identifier for the renderer.
    pub id: CellId,
    /// Starting column index.
    pub col: usize,
    /// Number of columns covered.
    pub span: usize,
    /// Vertical-merge marker.
    pub merge: MergeKind,
    /// Attribute flags.
    pub flags: CellFlags,
    /// Style tag for the renderer.
    pub style: CellStyle,
    /// Text paragraphs, in order.
    pub paragraphs: SmallVec<[CellText; 1]>,
}

impl Cell {
    /// Whether the cell renders without borders.
    pub fn is_border_suppressed(&self) -> bool {
        self.flags.contains(CellFlags::BORDER_SUPPRESSED)
    }
}

/// One table row: an ordered list of cells covering every column exactly once.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Cells in column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Sum of the cell spans.
    pub fn span_sum(&self) -> usize {
        self.cells.iter().map(|c| c.span).sum()
    }

    /// Cell starting at the given column, if any.
    pub fn cell_at(&self, col: usize) -> Option<&Cell> {
        self.cells.iter().find(|c| c.col == col)
    }
}

/// The assembled grid handed to the document renderer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    widths: Vec<f32>,
    rows: Vec<Row>,
}

impl Grid {
    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.widths.len()
    }

    /// Proportional column widths, as fixed by `start_table`.
    pub fn column_widths(&self) -> &[f32] {
        &self.widths
    }

    /// Rows in layout order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether no rows were emitted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Error type for grid construction.
///
/// Every variant is a programming-contract violation in the calling layout
/// code, not a data condition; correct layouts never produce one.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// A cell started at the wrong column.
    #[error("cell at column {found}, expected column {expected}")]
    ColumnOutOfStep {
        /// Next column the row expected.
        expected: usize,
        /// Column the caller supplied.
        found: usize,
    },
    /// A cell ran past the last column.
    #[error("cell at column {col} with span {span} overflows {columns} columns")]
    RowOverflow {
        /// Starting column of the offending cell.
        col: usize,
        /// Its span.
        span: usize,
        /// The table's column count.
        columns: usize,
    },
    /// A row was closed before covering every column.
    #[error("row covers {covered} of {columns} columns")]
    ShortRow {
        /// Columns covered when the row was closed.
        covered: usize,
        /// The table's column count.
        columns: usize,
    },
    /// A merge continuation with no open restart above it.
    #[error("merge continuation at column {col} has no open restart")]
    UnanchoredContinue {
        /// Column of the continuation cell.
        col: usize,
    },
    /// A merge cell (restart or continuation) spanning multiple columns.
    #[error("merge cell at column {col} must have span 1, got {span}")]
    MergedSpan {
        /// Column of the merge cell.
        col: usize,
        /// Its span.
        span: usize,
    },
    /// A cell with span 0.
    #[error("cell at column {col} has zero span")]
    ZeroSpan {
        /// Column of the offending cell.
        col: usize,
    },
    /// `start_row` while a row is still open, or `finish` mid-row.
    #[error("a row is already in progress")]
    RowInProgress,
    /// A cell or row-close arrived with no open row.
    #[error("no row in progress")]
    NoRowInProgress,
}

/// Specification of one cell to append, built up with `with_*` methods.
#[derive(Debug, Clone)]
pub struct CellSpec {
    col: usize,
    span: usize,
    merge: MergeKind,
    flags: CellFlags,
    style: CellStyle,
    paragraphs: SmallVec<[CellText; 1]>,
}

impl CellSpec {
    /// A span-1 body cell with a single paragraph.
    pub fn new(col: usize, text: impl Into<CellText>) -> Self {
        Self {
            col,
            span: 1,
            merge: MergeKind::None,
            flags: CellFlags::empty(),
            style: CellStyle::Body,
            paragraphs: SmallVec::from_elem(text.into(), 1),
        }
    }

    /// A span-1 cell with an empty no-spacing paragraph (spacer/separator).
    pub fn empty(col: usize) -> Self {
        let mut spec = Self::new(col, CellText::empty());
        spec.style = CellStyle::Spacer;
        spec
    }

    /// Set the column span.
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Set the vertical-merge marker.
    pub fn with_merge(mut self, merge: MergeKind) -> Self {
        self.merge = merge;
        self
    }

    /// Set the style tag.
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    /// Render the cell without borders.
    pub fn suppress_borders(mut self) -> Self {
        self.flags.insert(CellFlags::BORDER_SUPPRESSED);
        self
    }

    /// Render the cell without borders if `suppressed` is set.
    pub fn suppress_borders_if(self, suppressed: bool) -> Self {
        if suppressed {
            self.suppress_borders()
        } else {
            self
        }
    }

    /// Append a further paragraph to the cell.
    pub fn with_paragraph(mut self, text: impl Into<CellText>) -> Self {
        self.paragraphs.push(text.into());
        self
    }
}

/// Append-only builder for one [`Grid`].
///
/// `start_table` fixes the column count and proportional widths; rows are then
/// delimited with `start_row`/`end_row` and filled left to right with
/// `add_column`. The builder owns the [`IdSource`] for the pass, so cell ids
/// are unique and reproducible within one build.
#[derive(Debug)]
pub struct TableBuilder {
    widths: Vec<f32>,
    rows: Vec<Row>,
    current: Option<Row>,
    cursor: usize,
    // Per column: an open Restart chain reaches the row above.
    merge_open: Vec<bool>,
    // Per column, current row only: covered by a merge-participating cell.
    row_merge: Vec<MergeKind>,
    ids: IdSource,
}

impl TableBuilder {
    /// Start a table with the given proportional column widths.
    pub fn start_table(widths: &[f32]) -> Self {
        let columns = widths.len();
        Self {
            widths: widths.to_vec(),
            rows: Vec::new(),
            current: None,
            cursor: 0,
            merge_open: vec![false; columns],
            row_merge: vec![MergeKind::None; columns],
            ids: IdSource::new(),
        }
    }

    /// Replace the identifier source (before any cell is appended).
    pub fn with_id_source(mut self, ids: IdSource) -> Self {
        self.ids = ids;
        self
    }

    /// Number of columns fixed at `start_table`.
    pub fn column_count(&self) -> usize {
        self.widths.len()
    }

    /// Number of rows emitted so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Open a new row.
    pub fn start_row(&mut self) -> Result<&mut Self, LayoutError> {
        if self.current.is_some() {
            return Err(LayoutError::RowInProgress);
        }
        self.current = Some(Row::default());
        self.cursor = 0;
        self.row_merge.fill(MergeKind::None);
        Ok(self)
    }

    /// Append a cell to the open row.
    pub fn add_column(&mut self, spec: CellSpec) -> Result<&mut Self, LayoutError> {
        let columns = self.column_count();
        let row = self.current.as_mut().ok_or(LayoutError::NoRowInProgress)?;

        if spec.span == 0 {
            return Err(LayoutError::ZeroSpan { col: spec.col });
        }
        if spec.col != self.cursor {
            return Err(LayoutError::ColumnOutOfStep {
                expected: self.cursor,
                found: spec.col,
            });
        }
        if spec.col + spec.span > columns {
            return Err(LayoutError::RowOverflow {
                col: spec.col,
                span: spec.span,
                columns,
            });
        }
        match spec.merge {
            MergeKind::None => {}
            MergeKind::Restart | MergeKind::Continue if spec.span != 1 => {
                return Err(LayoutError::MergedSpan {
                    col: spec.col,
                    span: spec.span,
                });
            }
            MergeKind::Restart => {}
            MergeKind::Continue => {
                if !self.merge_open[spec.col] {
                    return Err(LayoutError::UnanchoredContinue { col: spec.col });
                }
            }
        }

        self.row_merge[spec.col] = spec.merge;
        self.cursor += spec.span;
        row.cells.push(Cell {
            id: self.ids.next_id(),
            col: spec.col,
            span: spec.span,
            merge: spec.merge,
            flags: spec.flags,
            style: spec.style,
            paragraphs: spec.paragraphs,
        });
        Ok(self)
    }

    /// Close the open row, checking full column coverage.
    pub fn end_row(&mut self) -> Result<&mut Self, LayoutError> {
        let columns = self.column_count();
        let row = self.current.take().ok_or(LayoutError::NoRowInProgress)?;
        if self.cursor != columns {
            // Put the row back so the caller state stays inspectable.
            self.current = Some(row);
            return Err(LayoutError::ShortRow {
                covered: self.cursor,
                columns,
            });
        }
        // A column's merge chain stays open only if this row restarted or
        // continued it; any other coverage closes it.
        for col in 0..columns {
            self.merge_open[col] = !matches!(self.row_merge[col], MergeKind::None);
        }
        self.rows.push(row);
        Ok(self)
    }

    /// Append the full-width separator row inserted after each block.
    ///
    /// A single border-suppressed empty cell spanning every column; it closes
    /// any open merge chain without drawing a border line.
    pub fn add_separator_row(&mut self) -> Result<&mut Self, LayoutError> {
        let columns = self.column_count();
        self.start_row()?
            .add_column(CellSpec::empty(0).with_span(columns).suppress_borders())?
            .end_row()
    }

    /// Finish the table and hand the grid to the caller.
    pub fn finish(self) -> Result<Grid, LayoutError> {
        if self.current.is_some() {
            return Err(LayoutError::RowInProgress);
        }
        Ok(Grid {
            widths: self.widths,
            rows: self.rows,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn builder() -> TableBuilder {
        TableBuilder::start_table(&[25.0, 25.0, 25.0, 25.0])
    }

    #[test]
    fn rows_must_cover_every_column() {
        let mut b = builder();
        b.start_row().unwrap();
        b.add_column(CellSpec::new(0, "a")).unwrap();
        let err = b.end_row().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::ShortRow {
                covered: 1,
                columns: 4
            }
        ));
    }

    #[test]
    fn spanning_cell_covers_columns() {
        let mut b = builder();
        b.start_row().unwrap();
        b.add_column(CellSpec::new(0, "a").with_span(4)).unwrap();
        b.end_row().unwrap();
        let grid = b.finish().unwrap();
        assert_eq!(grid.rows().len(), 1);
        assert_eq!(grid.rows()[0].span_sum(), 4);
    }

    #[test]
    fn out_of_step_column_is_rejected() {
        let mut b = builder();
        b.start_row().unwrap();
        b.add_column(CellSpec::new(0, "a")).unwrap();
        let err = b.add_column(CellSpec::new(2, "c")).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::ColumnOutOfStep {
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn overflowing_span_is_rejected() {
        let mut b = builder();
        b.start_row().unwrap();
        let err = b.add_column(CellSpec::new(0, "a").with_span(5)).unwrap_err();
        assert!(matches!(err, LayoutError::RowOverflow { .. }));
    }

    #[test]
    fn continue_requires_open_restart() {
        let mut b = builder();
        b.start_row().unwrap();
        let err = b
            .add_column(CellSpec::empty(0).with_merge(MergeKind::Continue))
            .unwrap_err();
        assert!(matches!(err, LayoutError::UnanchoredContinue { col: 0 }));
    }

    #[test]
    fn continue_under_restart_is_accepted() {
        let mut b = builder();
        b.start_row().unwrap();
        b.add_column(CellSpec::empty(0).with_merge(MergeKind::Restart))
            .unwrap();
        b.add_column(CellSpec::new(1, "x").with_span(3)).unwrap();
        b.end_row().unwrap();

        b.start_row().unwrap();
        b.add_column(CellSpec::empty(0).with_merge(MergeKind::Continue))
            .unwrap();
        b.add_column(CellSpec::new(1, "y").with_span(3)).unwrap();
        b.end_row().unwrap();

        let grid = b.finish().unwrap();
        assert_eq!(grid.rows()[1].cells()[0].merge, MergeKind::Continue);
    }

    #[test]
    fn covering_row_closes_merge_chain() {
        let mut b = builder();
        b.start_row().unwrap();
        b.add_column(CellSpec::empty(0).with_merge(MergeKind::Restart))
            .unwrap();
        b.add_column(CellSpec::new(1, "x").with_span(3)).unwrap();
        b.end_row().unwrap();

        // Full-width separator covers column 0 with a plain cell.
        b.add_separator_row().unwrap();

        b.start_row().unwrap();
        let err = b
            .add_column(CellSpec::empty(0).with_merge(MergeKind::Continue))
            .unwrap_err();
        assert!(matches!(err, LayoutError::UnanchoredContinue { col: 0 }));
    }

    #[test]
    fn merge_cells_must_be_span_one() {
        let mut b = builder();
        b.start_row().unwrap();
        let err = b
            .add_column(CellSpec::empty(0).with_span(2).with_merge(MergeKind::Restart))
            .unwrap_err();
        assert!(matches!(err, LayoutError::MergedSpan { col: 0, span: 2 }));
    }

    #[test]
    fn cell_ids_are_monotonic_within_a_build() {
        let mut b = builder();
        b.start_row().unwrap();
        b.add_column(CellSpec::new(0, "a")).unwrap();
        b.add_column(CellSpec::new(1, "b").with_span(3)).unwrap();
        b.end_row().unwrap();
        let grid = b.finish().unwrap();
        let cells = grid.rows()[0].cells();
        assert_eq!(cells[0].id, CellId(0));
        assert_eq!(cells[1].id, CellId(1));
    }

    #[test]
    fn separator_row_is_full_width_and_suppressed() {
        let mut b = builder();
        b.add_separator_row().unwrap();
        let grid = b.finish().unwrap();
        let cell = &grid.rows()[0].cells()[0];
        assert_eq!(cell.span, 4);
        assert!(cell.is_border_suppressed());
        assert_eq!(cell.style, CellStyle::Spacer);
        assert!(cell.paragraphs[0].runs.is_empty());
    }

    #[test]
    fn finish_mid_row_is_rejected() {
        let mut b = builder();
        b.start_row().unwrap();
        assert!(matches!(b.finish(), Err(LayoutError::RowInProgress)));
    }
}
