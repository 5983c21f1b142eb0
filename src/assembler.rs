//! Chart assembly: drives both layout variants over a list of chart records.
//!
//! The assembler is the single entry point for the renderer-facing output
//! contract: it folds every input record into one abbreviated grid and one
//! detailed grid (each variant omitted when configuration or input says so)
//! and reports whether the renderer should prepend a table of contents.
//! Assembly is a pure in-memory fold; independent assemblies may run in
//! parallel as long as each uses its own output grids.

use crate::abbreviated::AbbreviatedChartWriter;
use crate::detailed::DetailedChartWriter;
use crate::grid::{Grid, LayoutError};
use crate::model::{ChartConfig, MorphologicalChart};
use tracing::debug;

/// Output contract handed to the document renderer.
///
/// Page setup, style resolution, TOC generation, bookmarks and file
/// serialization are the renderer's concern; this type carries only the grid
/// models and the TOC request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDocument {
    /// Abbreviated-variant grid, when any chart produced one.
    pub abbreviated: Option<Grid>,
    /// Detailed-variant grid, when any chart produced one.
    pub detailed: Option<Grid>,
    /// The renderer should generate a table of contents over the chart
    /// titles.
    pub wants_toc: bool,
}

/// Assembles chart records into renderer-ready grid models.
#[derive(Debug, Clone, Default)]
pub struct ChartAssembler {
    config: ChartConfig,
}

impl ChartAssembler {
    /// Create an assembler with the given configuration.
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Assemble every chart record into one document.
    ///
    /// Records are laid out in input order with no state carried across them
    /// except the shared grids being appended to. Records missing a variant's
    /// sub-record contribute nothing to that variant.
    pub fn assemble(&self, charts: &[MorphologicalChart]) -> Result<ChartDocument, LayoutError> {
        let mut abbreviated = AbbreviatedChartWriter::new(&self.config);
        let mut detailed = DetailedChartWriter::new(&self.config);

        for (index, chart) in charts.iter().enumerate() {
            debug!(
                chart = index,
                has_abbreviated = chart.abbreviated.is_some(),
                has_detailed = chart.detailed.is_some(),
                "assembling chart"
            );
            if !self.config.omit_abbreviated {
                if let Some(input) = &chart.abbreviated {
                    abbreviated.write_chart(input)?;
                }
            }
            if !self.config.omit_detailed {
                if let Some(input) = &chart.detailed {
                    detailed.write_chart(input)?;
                }
            }
        }

        let abbreviated = Some(abbreviated.finish()?).filter(|g| !g.is_empty());
        let detailed = Some(detailed.finish()?).filter(|g| !g.is_empty());
        let wants_toc = abbreviated.is_some() && !self.config.omit_toc;
        Ok(ChartDocument {
            abbreviated,
            detailed,
            wants_toc,
        })
    }
}
