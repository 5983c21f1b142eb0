//! Detailed chart layout: mirrored paired blocks in the seven-column grid.
//!
//! The detailed chart is a sequence of blocks. Each block is one caption row
//! followed by a fixed number of conjugation rows (five person rows for verb
//! categories, three case rows for noun categories) and a trailing separator
//! row. Every row splits into a left half (columns 0-2), the merged spacer
//! column (3), and a right half (columns 4-6); the two halves are laid out by
//! one side renderer parametrized on its column origin, so the blank-cell and
//! border-suppression rules cannot drift between sides.

use crate::grid::{CellSpec, CellStyle, Grid, LayoutError, MergeKind, TableBuilder};
use crate::model::{
    ChartConfig, ConjugationTriple, DetailedConjugation, GroupPair, NounConjugationGroup,
    VerbConjugationGroup,
};
use crate::pager::pair_groups;
use crate::text::TextPolicy;
use smallvec::SmallVec;
use tracing::trace;

/// Column count of the detailed layout: three data columns per side plus the
/// merged spacer column.
pub const DETAILED_COLUMNS: usize = 7;

/// Proportional column widths of the detailed layout.
pub const DETAILED_WIDTHS: [f32; 7] = [16.24, 16.24, 16.24, 2.56, 16.24, 16.24, 16.24];

const LEFT_ORIGIN: usize = 0;
const SPACER_COLUMN: usize = 3;
const RIGHT_ORIGIN: usize = 4;
const SIDE_WIDTH: usize = 3;

/// One side of a paired block: a caption label plus its conjugation rows in
/// fixed order.
///
/// The two group shapes (five verb persons, three noun cases) implement this
/// so the block layout is written once.
pub trait BlockGroup {
    /// Caption label for this side's category.
    fn term_label(&self) -> Option<&str>;

    /// Row triples in fixed chart order; the length is fixed per group kind.
    fn row_triples(&self) -> SmallVec<[Option<&ConjugationTriple>; 5]>;
}

impl BlockGroup for VerbConjugationGroup {
    fn term_label(&self) -> Option<&str> {
        self.term_label.as_deref()
    }

    fn row_triples(&self) -> SmallVec<[Option<&ConjugationTriple>; 5]> {
        SmallVec::from_slice(&self.slots())
    }
}

impl BlockGroup for NounConjugationGroup {
    fn term_label(&self) -> Option<&str> {
        self.term_label.as_deref()
    }

    fn row_triples(&self) -> SmallVec<[Option<&ConjugationTriple>; 5]> {
        SmallVec::from_slice(&self.slots())
    }
}

/// Writer for the detailed seven-column chart.
///
/// Appends blocks for one or more chart records into a single grid; the grid
/// is taken with [`DetailedChartWriter::finish`].
#[derive(Debug)]
pub struct DetailedChartWriter {
    builder: TableBuilder,
    policy: TextPolicy,
    caption_fallback: bool,
}

impl DetailedChartWriter {
    /// Create a writer configured from the chart-level flags.
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            builder: TableBuilder::start_table(&DETAILED_WIDTHS),
            policy: TextPolicy {
                styled_prefix: config.styled_prefix,
            },
            caption_fallback: config.caption_fallback,
        }
    }

    /// Append the fixed block sequence for one chart record.
    ///
    /// Every step tolerates an absent sub-record and renders nothing for it.
    pub fn write_chart(&mut self, chart: &DetailedConjugation) -> Result<(), LayoutError> {
        trace!(
            verbal_nouns = chart.verbal_nouns.len(),
            adverbs = chart.adverbs.len(),
            "laying out detailed chart"
        );
        self.write_pair(chart.active_tense_pair.as_ref())?;
        self.write_pair(chart.active_participle_pair.as_ref())?;
        for pair in pair_groups(&chart.verbal_nouns) {
            self.write_block(pair)?;
        }
        self.write_pair(chart.passive_tense_pair.as_ref())?;
        self.write_pair(chart.passive_participle_pair.as_ref())?;
        self.write_pair(chart.imperative_and_forbidding_pair.as_ref())?;
        for pair in pair_groups(&chart.adverbs) {
            self.write_block(pair)?;
        }
        Ok(())
    }

    /// Number of rows emitted so far.
    pub fn row_count(&self) -> usize {
        self.builder.row_count()
    }

    /// Finish and hand over the grid.
    pub fn finish(self) -> Result<Grid, LayoutError> {
        self.builder.finish()
    }

    fn write_pair<G: BlockGroup>(
        &mut self,
        pair: Option<&GroupPair<G>>,
    ) -> Result<(), LayoutError> {
        match pair {
            Some(pair) => self.write_block(pair.as_ref()),
            None => Ok(()),
        }
    }

    /// Lay out one block: caption row, fixed conjugation rows, separator.
    ///
    /// A pair with both sides absent is skipped entirely - no caption, no
    /// rows, no separator.
    pub fn write_block<G: BlockGroup>(&mut self, pair: GroupPair<&G>) -> Result<(), LayoutError> {
        if pair.is_empty() {
            return Ok(());
        }
        let (left_label, right_label) = self.captions(&pair);
        self.write_caption_row(left_label, right_label)?;

        let left_rows = pair.left.map(|g| g.row_triples()).unwrap_or_default();
        let right_rows = pair.right.map(|g| g.row_triples()).unwrap_or_default();
        let row_count = left_rows.len().max(right_rows.len());
        for slot in 0..row_count {
            let left = left_rows.get(slot).copied().flatten();
            let right = right_rows.get(slot).copied().flatten();
            self.write_conjugation_row(left, right)?;
        }
        self.builder.add_separator_row()?;
        Ok(())
    }

    /// Resolve the two caption labels, applying the sibling fallback when
    /// configured: a present side without a label borrows the other side's.
    fn captions<'g, G: BlockGroup>(
        &self,
        pair: &GroupPair<&'g G>,
    ) -> (Option<&'g str>, Option<&'g str>) {
        let left_label = pair.left.and_then(|g| g.term_label());
        let right_label = pair.right.and_then(|g| g.term_label());
        if !self.caption_fallback {
            return (left_label, right_label);
        }
        let left = match (left_label, pair.left) {
            (None, Some(_)) => right_label,
            (label, _) => label,
        };
        let right = match (right_label, pair.right) {
            (None, Some(_)) => left_label,
            (label, _) => label,
        };
        (left, right)
    }

    /// Emit the caption row flanking the spacer column.
    ///
    /// A caption cell with no label renders as a border-suppressed blank;
    /// the spacer cell anchors the block's vertical merge with `Restart`.
    fn write_caption_row(
        &mut self,
        left_label: Option<&str>,
        right_label: Option<&str>,
    ) -> Result<(), LayoutError> {
        let left = self.policy.render_cell(None, left_label);
        let right = self.policy.render_cell(None, right_label);
        self.builder
            .start_row()?
            .add_column(
                CellSpec::new(LEFT_ORIGIN, left)
                    .with_span(SIDE_WIDTH)
                    .with_style(CellStyle::Caption)
                    .suppress_borders_if(left_label.is_none()),
            )?
            .add_column(
                CellSpec::empty(SPACER_COLUMN)
                    .with_merge(MergeKind::Restart)
                    .suppress_borders(),
            )?
            .add_column(
                CellSpec::new(RIGHT_ORIGIN, right)
                    .with_span(SIDE_WIDTH)
                    .with_style(CellStyle::Caption)
                    .suppress_borders_if(right_label.is_none()),
            )?
            .end_row()?;
        Ok(())
    }

    /// Emit one data row for a left/right triple pair.
    ///
    /// A row with both triples absent is suppressed entirely; this is how
    /// optional blocks thin out without leaving gaps.
    fn write_conjugation_row(
        &mut self,
        left: Option<&ConjugationTriple>,
        right: Option<&ConjugationTriple>,
    ) -> Result<(), LayoutError> {
        if left.is_none() && right.is_none() {
            return Ok(());
        }
        self.builder.start_row()?;
        self.write_side(left, LEFT_ORIGIN)?;
        self.builder.add_column(
            CellSpec::empty(SPACER_COLUMN)
                .with_merge(MergeKind::Continue)
                .suppress_borders(),
        )?;
        self.write_side(right, RIGHT_ORIGIN)?;
        self.builder.end_row()?;
        Ok(())
    }

    /// Render one side of a data row at the given column origin.
    ///
    /// An absent side fills its three columns with border-suppressed
    /// placeholder cells so column alignment holds across rows. A present
    /// side collapses the plural cell over the dual column when the dual is
    /// absent.
    fn write_side(
        &mut self,
        triple: Option<&ConjugationTriple>,
        origin: usize,
    ) -> Result<(), LayoutError> {
        let Some(triple) = triple else {
            for offset in 0..SIDE_WIDTH {
                self.builder.add_column(
                    CellSpec::new(origin + offset, self.policy.render_cell(None, None))
                        .suppress_borders(),
                )?;
            }
            return Ok(());
        };

        let plural = self.policy.render_cell(None, triple.plural.as_deref());
        if triple.dual.is_none() {
            self.builder
                .add_column(CellSpec::new(origin, plural).with_span(2))?;
        } else {
            self.builder.add_column(CellSpec::new(origin, plural))?;
            self.builder.add_column(CellSpec::new(
                origin + 1,
                self.policy.render_cell(None, triple.dual.as_deref()),
            ))?;
        }
        self.builder.add_column(CellSpec::new(
            origin + 2,
            self.policy.render_cell(None, triple.singular.as_deref()),
        ))?;
        Ok(())
    }
}
