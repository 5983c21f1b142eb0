#![allow(clippy::unwrap_used)]
//! Integration tests for the sarf-chart layout engine.
//!
//! These exercise the full pipeline from chart records through assembly to
//! the grid models the document renderer consumes.

use sarf_chart::{
    AbbreviatedConjugation, AdverbLine, CellStyle, ChartAssembler, ChartConfig, ConjugationTriple,
    DetailedConjugation, GroupPair, MergeKind, MorphologicalChart, NounConjugationGroup,
    VerbConjugationGroup, ABBREVIATED_COLUMNS, DETAILED_COLUMNS,
};

fn full_triple() -> ConjugationTriple {
    ConjugationTriple::full("نَصَرُوا", "نَصَرَا", "نَصَرَ")
}

fn verb_group(label: &str) -> VerbConjugationGroup {
    VerbConjugationGroup {
        term_label: Some(label.to_owned()),
        masculine_third_person: Some(full_triple()),
        feminine_third_person: Some(full_triple()),
        masculine_second_person: Some(full_triple()),
        feminine_second_person: Some(full_triple()),
        first_person: Some(full_triple()),
    }
}

fn noun_group(label: &str) -> NounConjugationGroup {
    let triple = ConjugationTriple::full("فَاعِلُونَ", "فَاعِلَانِ", "فَاعِلٌ");
    NounConjugationGroup {
        term_label: Some(label.to_owned()),
        nominative: Some(triple.clone()),
        accusative: Some(triple.clone()),
        genitive: Some(triple),
    }
}

/// A verb-tense pair with only the left side present.
#[test]
fn left_only_tense_pair_layout() {
    let chart = MorphologicalChart {
        detailed: Some(DetailedConjugation {
            active_tense_pair: Some(GroupPair::left_only(verb_group("مَاضٍ"))),
            ..DetailedConjugation::default()
        }),
        ..MorphologicalChart::default()
    };
    let doc = ChartAssembler::new(ChartConfig::default())
        .assemble(&[chart])
        .unwrap();
    let grid = doc.detailed.unwrap();

    // Caption row + 5 data rows + separator.
    assert_eq!(grid.rows().len(), 7);

    let caption = &grid.rows()[0];
    let left_caption = caption.cell_at(0).unwrap();
    assert_eq!(left_caption.span, 3);
    assert_eq!(left_caption.style, CellStyle::Caption);
    assert!(!left_caption.is_border_suppressed());
    let spacer = caption.cell_at(3).unwrap();
    assert_eq!(spacer.merge, MergeKind::Restart);
    assert!(spacer.is_border_suppressed());
    let right_caption = caption.cell_at(4).unwrap();
    assert_eq!(right_caption.span, 3);
    assert!(right_caption.is_border_suppressed());
    assert!(right_caption.paragraphs[0].is_placeholder());

    for row in &grid.rows()[1..6] {
        // Left side: three populated span-1 cells.
        for col in 0..3 {
            let cell = row.cell_at(col).unwrap();
            assert_eq!(cell.span, 1);
            assert!(!cell.is_border_suppressed());
            assert!(!cell.paragraphs[0].is_placeholder());
        }
        // Spacer continues the merge.
        assert_eq!(row.cell_at(3).unwrap().merge, MergeKind::Continue);
        // Right side: three blank suppressed cells.
        for col in 4..7 {
            let cell = row.cell_at(col).unwrap();
            assert!(cell.is_border_suppressed());
            assert!(cell.paragraphs[0].is_placeholder());
        }
    }

    let separator = &grid.rows()[6];
    assert_eq!(separator.cells().len(), 1);
    assert_eq!(separator.cells()[0].span, DETAILED_COLUMNS);
    assert!(separator.cells()[0].is_border_suppressed());
}

/// An abbreviated chart with only the adverb line.
#[test]
fn abbreviated_adverb_only_layout() {
    let chart = MorphologicalChart {
        abbreviated: Some(AbbreviatedConjugation {
            adverb_line: Some(AdverbLine {
                adverbs: vec!["مَنْصَرٌ".to_owned()],
            }),
            ..AbbreviatedConjugation::default()
        }),
        ..MorphologicalChart::default()
    };
    let config = ChartConfig::default().omit_title(true).omit_header(true);
    let doc = ChartAssembler::new(config).assemble(&[chart]).unwrap();
    let grid = doc.abbreviated.unwrap();

    assert_eq!(grid.rows().len(), 2);
    let adverb = &grid.rows()[0].cells()[0];
    assert_eq!(adverb.span, ABBREVIATED_COLUMNS);
    assert!(adverb.paragraphs[0].to_plain_string().contains("مَنْصَرٌ"));
    assert_eq!(grid.rows()[1].cells()[0].span, ABBREVIATED_COLUMNS);
}

/// Odd-length noun lists are padded and pair in swapped order.
#[test]
fn verbal_noun_pagination() {
    let chart = MorphologicalChart {
        detailed: Some(DetailedConjugation {
            verbal_nouns: vec![noun_group("n0"), noun_group("n1"), noun_group("n2")],
            ..DetailedConjugation::default()
        }),
        ..MorphologicalChart::default()
    };
    let doc = ChartAssembler::new(ChartConfig::default())
        .assemble(&[chart])
        .unwrap();
    let grid = doc.detailed.unwrap();

    // Two noun blocks of (caption + 3 rows + separator) each.
    assert_eq!(grid.rows().len(), 10);

    // Block 1: n0 on the right, n1 on the left.
    let caption = &grid.rows()[0];
    assert_eq!(caption.cell_at(4).unwrap().paragraphs[0].to_plain_string(), "n0");
    assert_eq!(caption.cell_at(0).unwrap().paragraphs[0].to_plain_string(), "n1");

    // Block 2: n2 on the right, padded absent left side.
    let caption = &grid.rows()[5];
    assert_eq!(caption.cell_at(4).unwrap().paragraphs[0].to_plain_string(), "n2");
    let left = caption.cell_at(0).unwrap();
    assert!(left.is_border_suppressed());
    assert!(left.paragraphs[0].is_placeholder());

    // The padded side's data cells are blank and suppressed, not skipped.
    for row in &grid.rows()[6..9] {
        for col in 0..3 {
            let cell = row.cell_at(col).unwrap();
            assert!(cell.is_border_suppressed());
            assert!(cell.paragraphs[0].is_placeholder());
        }
    }
}

/// Assembling the same record twice yields structurally identical grids.
#[test]
fn assembly_is_deterministic() {
    let chart = MorphologicalChart {
        detailed: Some(DetailedConjugation {
            active_tense_pair: Some(GroupPair::new(verb_group("مُضَارِعٌ"), verb_group("مَاضٍ"))),
            verbal_nouns: vec![noun_group("مَصْدَرٌ")],
            ..DetailedConjugation::default()
        }),
        ..MorphologicalChart::default()
    };
    let assembler = ChartAssembler::new(ChartConfig::default());
    let a = assembler.assemble(std::slice::from_ref(&chart)).unwrap();
    let b = assembler.assemble(std::slice::from_ref(&chart)).unwrap();
    assert_eq!(a.detailed, b.detailed);
}

/// Every emitted row spans the full column count in both variants.
#[test]
fn all_rows_span_full_width() {
    let chart = MorphologicalChart {
        abbreviated: Some(AbbreviatedConjugation::default()),
        detailed: Some(DetailedConjugation {
            active_tense_pair: Some(GroupPair::new(verb_group("l"), verb_group("r"))),
            active_participle_pair: Some(GroupPair::right_only(noun_group("p"))),
            verbal_nouns: vec![noun_group("v0"), noun_group("v1")],
            imperative_and_forbidding_pair: Some(GroupPair::left_only(verb_group("i"))),
            adverbs: vec![noun_group("a0")],
            ..DetailedConjugation::default()
        }),
    };
    let doc = ChartAssembler::new(ChartConfig::default())
        .assemble(&[chart])
        .unwrap();

    let detailed = doc.detailed.unwrap();
    for row in detailed.rows() {
        assert_eq!(row.span_sum(), DETAILED_COLUMNS);
    }
    let abbreviated = doc.abbreviated.unwrap();
    for row in abbreviated.rows() {
        assert_eq!(row.span_sum(), ABBREVIATED_COLUMNS);
    }
}
