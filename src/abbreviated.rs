//! Abbreviated chart layout: one line per category in a four-column grid.
//!
//! The abbreviated chart compresses a whole conjugation into a handful of
//! rows: an optional title row, an optional translation/type-label header
//! row, then the active, passive, imperative/forbidding and adverb lines,
//! closed by a separator. Every line is independently omissible - an absent
//! sub-record skips its row - and the same placeholder conventions as the
//! detailed layout apply to absent leaf values.

use crate::grid::{CellSpec, CellStyle, Grid, LayoutError, TableBuilder};
use crate::model::{AbbreviatedConjugation, ChartConfig, ConjugationHeader};
use crate::text::{
    join_with_and, TextPolicy, ADVERB_PREFIX, COMMAND_PREFIX, FORBIDDING_PREFIX, PARTICIPLE_PREFIX,
};
use tracing::trace;

/// Column count of the abbreviated layout.
pub const ABBREVIATED_COLUMNS: usize = 4;

/// Proportional column widths of the abbreviated layout.
pub const ABBREVIATED_WIDTHS: [f32; 4] = [25.0, 25.0, 25.0, 25.0];

/// Writer for the abbreviated four-column chart.
#[derive(Debug)]
pub struct AbbreviatedChartWriter {
    builder: TableBuilder,
    policy: TextPolicy,
    omit_title: bool,
    omit_header: bool,
}

impl AbbreviatedChartWriter {
    /// Create a writer configured from the chart-level flags.
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            builder: TableBuilder::start_table(&ABBREVIATED_WIDTHS),
            policy: TextPolicy {
                styled_prefix: config.styled_prefix,
            },
            omit_title: config.omit_title,
            omit_header: config.omit_header,
        }
    }

    /// Append the abbreviated rows for one chart record.
    pub fn write_chart(&mut self, chart: &AbbreviatedConjugation) -> Result<(), LayoutError> {
        trace!("laying out abbreviated chart");
        if !self.omit_title {
            self.write_title_row(chart)?;
        }
        if !self.omit_header {
            if let Some(header) = &chart.header {
                self.write_header_row(header)?;
            }
        }
        self.write_active_row(chart)?;
        self.write_passive_row(chart)?;
        self.write_command_row(chart)?;
        self.write_adverb_row(chart)?;
        self.builder.add_separator_row()?;
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

    /// Full-width title row; the renderer treats [`CellStyle::Title`] cells
    /// as heading/bookmark anchors for back-links and the table of contents.
    fn write_title_row(&mut self, chart: &AbbreviatedConjugation) -> Result<(), LayoutError> {
        let title = chart.title_text();
        self.builder
            .start_row()?
            .add_column(
                CellSpec::new(0, self.policy.render_cell(None, Some(&title)))
                    .with_span(ABBREVIATED_COLUMNS)
                    .with_style(CellStyle::Title)
                    .suppress_borders(),
            )?
            .end_row()?;
        Ok(())
    }

    /// Header row: translation spanning the first two columns, up to three
    /// type labels stacked as paragraphs in the last two.
    fn write_header_row(&mut self, header: &ConjugationHeader) -> Result<(), LayoutError> {
        let translation = CellSpec::new(0, crate::text::CellText::empty())
            .with_paragraph(
                self.policy
                    .render_cell(None, header.translation.as_deref()),
            )
            .with_span(2)
            .with_style(CellStyle::Header);

        let labels = [
            header.type_label_1.as_deref(),
            header.type_label_2.as_deref(),
            header.type_label_3.as_deref(),
        ];
        let mut label_cell = CellSpec::new(2, self.policy.render_cell(None, labels[0]))
            .with_span(2)
            .with_style(CellStyle::Header);
        for label in &labels[1..] {
            label_cell = label_cell.with_paragraph(self.policy.render_cell(None, *label));
        }

        self.builder
            .start_row()?
            .add_column(translation)?
            .add_column(label_cell)?
            .end_row()?;
        Ok(())
    }

    /// Active line: participle (prefixed), joined verbal nouns, present, past.
    fn write_active_row(&mut self, chart: &AbbreviatedConjugation) -> Result<(), LayoutError> {
        let Some(line) = &chart.active_line else {
            return Ok(());
        };
        let nouns = join_with_and(&line.verbal_nouns);
        self.builder
            .start_row()?
            .add_column(CellSpec::new(
                0,
                self.policy.render_cell(
                    Some(PARTICIPLE_PREFIX),
                    line.active_participle_masculine.as_deref(),
                ),
            ))?
            .add_column(CellSpec::new(
                1,
                self.policy.render_cell(None, nouns.as_deref()),
            ))?
            .add_column(CellSpec::new(
                2,
                self.policy.render_cell(None, line.present_tense.as_deref()),
            ))?
            .add_column(CellSpec::new(
                3,
                self.policy.render_cell(None, line.past_tense.as_deref()),
            ))?
            .end_row()?;
        Ok(())
    }

    /// Passive line: same shape as the active line.
    fn write_passive_row(&mut self, chart: &AbbreviatedConjugation) -> Result<(), LayoutError> {
        let Some(line) = &chart.passive_line else {
            return Ok(());
        };
        let nouns = join_with_and(&line.verbal_nouns);
        self.builder
            .start_row()?
            .add_column(CellSpec::new(
                0,
                self.policy.render_cell(
                    Some(PARTICIPLE_PREFIX),
                    line.passive_participle_masculine.as_deref(),
                ),
            ))?
            .add_column(CellSpec::new(
                1,
                self.policy.render_cell(None, nouns.as_deref()),
            ))?
            .add_column(CellSpec::new(
                2,
                self.policy
                    .render_cell(None, line.present_passive_tense.as_deref()),
            ))?
            .add_column(CellSpec::new(
                3,
                self.policy
                    .render_cell(None, line.past_passive_tense.as_deref()),
            ))?
            .end_row()?;
        Ok(())
    }

    /// Imperative/forbidding line: two span-2 cells, forbidding first in
    /// column order (the imperative reads first, right to left).
    fn write_command_row(&mut self, chart: &AbbreviatedConjugation) -> Result<(), LayoutError> {
        let Some(line) = &chart.imperative_and_forbidding_line else {
            return Ok(());
        };
        self.builder
            .start_row()?
            .add_column(
                CellSpec::new(
                    0,
                    self.policy
                        .render_cell(Some(FORBIDDING_PREFIX), line.forbidding.as_deref()),
                )
                .with_span(2),
            )?
            .add_column(
                CellSpec::new(
                    2,
                    self.policy
                        .render_cell(Some(COMMAND_PREFIX), line.imperative.as_deref()),
                )
                .with_span(2),
            )?
            .end_row()?;
        Ok(())
    }

    /// Adverb line: one full-width cell with the prefixed, joined adverbs.
    fn write_adverb_row(&mut self, chart: &AbbreviatedConjugation) -> Result<(), LayoutError> {
        let Some(line) = &chart.adverb_line else {
            return Ok(());
        };
        let adverbs = join_with_and(&line.adverbs);
        self.builder
            .start_row()?
            .add_column(
                CellSpec::new(
                    0,
                    self.policy
                        .render_cell(Some(ADVERB_PREFIX), adverbs.as_deref()),
                )
                .with_span(ABBREVIATED_COLUMNS),
            )?
            .end_row()?;
        Ok(())
    }
}
