//! Paired-grid layout engine for Arabic morphological conjugation charts.
//!
//! `sarf-chart` turns hierarchical conjugation data (tense forms, participles,
//! verbal nouns, imperative/forbidding forms, adverbial forms) into tabular
//! grid models ready for a page-oriented document renderer. It owns the
//! layout algebra only: span collapsing, vertical merges, blank-cell policy,
//! block pairing and pagination. Computing the conjugation forms and
//! serializing a document file are both external collaborators.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌───────────────┐    ┌──────────┐    ┌──────────┐
//! │ Conjugation │ -> │ ChartAssembler│ -> │   Grid   │ -> │ Document │
//! │   engine    │    │  (this crate) │    │  model   │    │ renderer │
//! └─────────────┘    └───────────────┘    └──────────┘    └──────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use sarf_chart::{
//!     ChartAssembler, ChartConfig, ConjugationTriple, DetailedConjugation, GroupPair,
//!     MorphologicalChart, VerbConjugationGroup,
//! };
//!
//! let past = VerbConjugationGroup {
//!     term_label: Some("مَاضٍ".to_owned()),
//!     masculine_third_person: Some(ConjugationTriple::full("نَصَرُوا", "نَصَرَا", "نَصَرَ")),
//!     ..VerbConjugationGroup::default()
//! };
//! let chart = MorphologicalChart {
//!     detailed: Some(DetailedConjugation {
//!         active_tense_pair: Some(GroupPair::left_only(past)),
//!         ..DetailedConjugation::default()
//!     }),
//!     ..MorphologicalChart::default()
//! };
//!
//! let doc = ChartAssembler::new(ChartConfig::default())
//!     .assemble(&[chart])
//!     .expect("layout invariants hold");
//! let grid = doc.detailed.expect("detailed grid present");
//! assert!(grid.rows().iter().all(|r| r.span_sum() == 7));
//! ```
//!
//! # Absence is not an error
//!
//! Missing sub-records are first-class states with defined rendering rules:
//! whole blocks vanish, absent sides render as blank border-suppressed cells,
//! absent values become a placeholder run. [`grid::LayoutError`] only ever
//! signals a bug in layout code, never bad input.

pub mod abbreviated;
pub mod assembler;
pub mod detailed;
pub mod grid;
pub mod model;
pub mod pager;
pub mod text;

pub use abbreviated::{AbbreviatedChartWriter, ABBREVIATED_COLUMNS, ABBREVIATED_WIDTHS};
pub use assembler::{ChartAssembler, ChartDocument};
pub use detailed::{BlockGroup, DetailedChartWriter, DETAILED_COLUMNS, DETAILED_WIDTHS};
pub use grid::{
    Cell, CellFlags, CellId, CellSpec, CellStyle, Grid, IdSource, LayoutError, MergeKind, Row,
    TableBuilder,
};
pub use model::{
    AbbreviatedConjugation, ActiveLine, AdverbLine, ChartConfig, ConjugationHeader,
    ConjugationTriple, DetailedConjugation, GroupPair, ImperativeAndForbiddingLine,
    MorphologicalChart, NounConjugationGroup, PassiveLine, VerbConjugationGroup,
};
pub use pager::pair_groups;
pub use text::{CellText, Run, RunStyle, TextPolicy};
