//! Input data model supplied by the external conjugation engine.
//!
//! Everything here is plain data. Absent sub-structures are first-class
//! states with defined rendering behavior, so every field that can be missing
//! is an `Option` (or an empty `Vec` for the variable-length noun lists) and
//! none of them ever raises an error during layout.

use crate::text::derive_title;

/// The plural/dual/singular slot set for one grammatical cell.
///
/// `dual` is frequently absent; its absence changes the layout (the plural
/// cell widens to span the dual column), not just the content.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConjugationTriple {
    /// Plural form.
    pub plural: Option<String>,
    /// Dual form.
    pub dual: Option<String>,
    /// Singular form.
    pub singular: Option<String>,
}

impl ConjugationTriple {
    /// A triple with all three forms present.
    pub fn full(
        plural: impl Into<String>,
        dual: impl Into<String>,
        singular: impl Into<String>,
    ) -> Self {
        Self {
            plural: Some(plural.into()),
            dual: Some(dual.into()),
            singular: Some(singular.into()),
        }
    }

    /// A triple without a dual form.
    pub fn without_dual(plural: impl Into<String>, singular: impl Into<String>) -> Self {
        Self {
            plural: Some(plural.into()),
            dual: None,
            singular: Some(singular.into()),
        }
    }
}

/// One verb category: a caption label plus the five person/gender slots.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbConjugationGroup {
    /// Category caption, e.g. the Arabic label for "active past tense".
    pub term_label: Option<String>,
    /// Third person masculine.
    pub masculine_third_person: Option<ConjugationTriple>,
    /// Third person feminine.
    pub feminine_third_person: Option<ConjugationTriple>,
    /// Second person masculine.
    pub masculine_second_person: Option<ConjugationTriple>,
    /// Second person feminine.
    pub feminine_second_person: Option<ConjugationTriple>,
    /// First person.
    pub first_person: Option<ConjugationTriple>,
}

impl VerbConjugationGroup {
    /// Person slots in fixed chart order.
    pub fn slots(&self) -> [Option<&ConjugationTriple>; 5] {
        [
            self.masculine_third_person.as_ref(),
            self.feminine_third_person.as_ref(),
            self.masculine_second_person.as_ref(),
            self.feminine_second_person.as_ref(),
            self.first_person.as_ref(),
        ]
    }
}

/// One noun category: a caption label plus the three case slots.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NounConjugationGroup {
    /// Category caption, e.g. the Arabic label for "active participle".
    pub term_label: Option<String>,
    /// Nominative case.
    pub nominative: Option<ConjugationTriple>,
    /// Accusative case.
    pub accusative: Option<ConjugationTriple>,
    /// Genitive case.
    pub genitive: Option<ConjugationTriple>,
}

impl NounConjugationGroup {
    /// Case slots in fixed chart order.
    pub fn slots(&self) -> [Option<&ConjugationTriple>; 3] {
        [
            self.nominative.as_ref(),
            self.accusative.as_ref(),
            self.genitive.as_ref(),
        ]
    }
}

/// The left/right mirrored halves of one chart block.
///
/// Either side may be absent; a pair with both sides absent produces no rows
/// at all.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupPair<G> {
    /// Side rendered in columns 0-2 (the later of the two in reading order).
    pub left: Option<G>,
    /// Side rendered in columns 4-6 (read first, right to left).
    pub right: Option<G>,
}

impl<G> GroupPair<G> {
    /// A pair with both sides present.
    pub fn new(left: G, right: G) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }

    /// A pair with only the right side.
    pub fn right_only(right: G) -> Self {
        Self {
            left: None,
            right: Some(right),
        }
    }

    /// A pair with only the left side.
    pub fn left_only(left: G) -> Self {
        Self {
            left: Some(left),
            right: None,
        }
    }

    /// Whether both sides are absent.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Borrow both sides.
    pub fn as_ref(&self) -> GroupPair<&G> {
        GroupPair {
            left: self.left.as_ref(),
            right: self.right.as_ref(),
        }
    }
}

/// Full input for one detailed chart: the fixed block sequence plus the
/// variable-length noun lists, which this engine pairs itself.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailedConjugation {
    /// Active present/past tense pair.
    pub active_tense_pair: Option<GroupPair<VerbConjugationGroup>>,
    /// Active participle masculine/feminine pair.
    pub active_participle_pair: Option<GroupPair<NounConjugationGroup>>,
    /// Verbal nouns, in source order, paired two at a time.
    pub verbal_nouns: Vec<NounConjugationGroup>,
    /// Passive present/past tense pair.
    pub passive_tense_pair: Option<GroupPair<VerbConjugationGroup>>,
    /// Passive participle masculine/feminine pair.
    pub passive_participle_pair: Option<GroupPair<NounConjugationGroup>>,
    /// Imperative/forbidding pair.
    pub imperative_and_forbidding_pair: Option<GroupPair<VerbConjugationGroup>>,
    /// Adverbial forms, in source order, paired two at a time.
    pub adverbs: Vec<NounConjugationGroup>,
}

/// Header block of the abbreviated chart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConjugationHeader {
    /// Explicit chart title; when absent the title is derived from the
    /// active line.
    pub title: Option<String>,
    /// Root letters of the chart's word; the renderer keys bookmarks and
    /// back-links on these, the layout itself does not consume them.
    pub root_letters: Option<String>,
    /// Translation shown in the header row.
    pub translation: Option<String>,
    /// First type label (e.g. verb form/family).
    pub type_label_1: Option<String>,
    /// Second type label.
    pub type_label_2: Option<String>,
    /// Third type label.
    pub type_label_3: Option<String>,
}

/// Active-voice line of the abbreviated chart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveLine {
    /// Masculine active participle (rendered with the participle prefix).
    pub active_participle_masculine: Option<String>,
    /// Verbal nouns, joined with the Arabic conjunction.
    pub verbal_nouns: Vec<String>,
    /// Present tense.
    pub present_tense: Option<String>,
    /// Past tense.
    pub past_tense: Option<String>,
}

/// Passive-voice line of the abbreviated chart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassiveLine {
    /// Masculine passive participle (rendered with the participle prefix).
    pub passive_participle_masculine: Option<String>,
    /// Verbal nouns, joined with the Arabic conjunction.
    pub verbal_nouns: Vec<String>,
    /// Present passive tense.
    pub present_passive_tense: Option<String>,
    /// Past passive tense.
    pub past_passive_tense: Option<String>,
}

/// Combined imperative/forbidding line of the abbreviated chart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImperativeAndForbiddingLine {
    /// Imperative form.
    pub imperative: Option<String>,
    /// Forbidding form.
    pub forbidding: Option<String>,
}

/// Adverb line of the abbreviated chart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdverbLine {
    /// Adverbial forms, joined with the Arabic conjunction.
    pub adverbs: Vec<String>,
}

/// Full input for one abbreviated chart. Every field is independently
/// omissible; an absent sub-record skips its row.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviatedConjugation {
    /// Title/translation/type-label header.
    pub header: Option<ConjugationHeader>,
    /// Active-voice line.
    pub active_line: Option<ActiveLine>,
    /// Passive-voice line.
    pub passive_line: Option<PassiveLine>,
    /// Imperative/forbidding line.
    pub imperative_and_forbidding_line: Option<ImperativeAndForbiddingLine>,
    /// Adverb line.
    pub adverb_line: Option<AdverbLine>,
}

impl AbbreviatedConjugation {
    /// Resolve the chart title: the explicit header title when present,
    /// otherwise past + present tense from the active line.
    pub fn title_text(&self) -> String {
        if let Some(title) = self.header.as_ref().and_then(|h| h.title.as_deref()) {
            return title.to_owned();
        }
        let active = self.active_line.as_ref();
        derive_title(
            active.and_then(|l| l.past_tense.as_deref()),
            active.and_then(|l| l.present_tense.as_deref()),
        )
    }
}

/// One root-word's full conjugation data: the chart record.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphologicalChart {
    /// Abbreviated (single-line-per-category) variant input.
    pub abbreviated: Option<AbbreviatedConjugation>,
    /// Detailed (paired-block) variant input.
    pub detailed: Option<DetailedConjugation>,
}

/// Chart-level configuration flags.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartConfig {
    /// Skip the abbreviated-chart title row.
    pub omit_title: bool,
    /// Skip the abbreviated-chart header row.
    pub omit_header: bool,
    /// Skip the abbreviated variant entirely.
    pub omit_abbreviated: bool,
    /// Skip the detailed variant entirely.
    pub omit_detailed: bool,
    /// Suppress the table-of-contents request to the renderer.
    pub omit_toc: bool,
    /// Emit label prefixes as a separately styled run (see
    /// [`TextPolicy`](crate::text::TextPolicy)).
    pub styled_prefix: bool,
    /// When one side of a pair is present without a caption label, reuse the
    /// sibling side's label. Off by default.
    pub caption_fallback: bool,
}

impl ChartConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the abbreviated-chart title row.
    pub fn omit_title(mut self, omit: bool) -> Self {
        self.omit_title = omit;
        self
    }

    /// Skip the abbreviated-chart header row.
    pub fn omit_header(mut self, omit: bool) -> Self {
        self.omit_header = omit;
        self
    }

    /// Skip the abbreviated variant entirely.
    pub fn omit_abbreviated(mut self, omit: bool) -> Self {
        self.omit_abbreviated = omit;
        self
    }

    /// Skip the detailed variant entirely.
    pub fn omit_detailed(mut self, omit: bool) -> Self {
        self.omit_detailed = omit;
        self
    }

    /// Suppress the table-of-contents request.
    pub fn omit_toc(mut self, omit: bool) -> Self {
        self.omit_toc = omit;
        self
    }

    /// Emit label prefixes as a separately styled run.
    pub fn styled_prefix(mut self, styled: bool) -> Self {
        self.styled_prefix = styled;
        self
    }

    /// Reuse the sibling's caption label for a present but unlabeled side.
    pub fn caption_fallback(mut self, fallback: bool) -> Self {
        self.caption_fallback = fallback;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn title_prefers_header_title() {
        let chart = AbbreviatedConjugation {
            header: Some(ConjugationHeader {
                title: Some("بَابُ نَصَرَ".to_owned()),
                ..ConjugationHeader::default()
            }),
            active_line: Some(ActiveLine {
                past_tense: Some("نَصَرَ".to_owned()),
                present_tense: Some("يَنْصُرُ".to_owned()),
                ..ActiveLine::default()
            }),
            ..AbbreviatedConjugation::default()
        };
        assert_eq!(chart.title_text(), "بَابُ نَصَرَ");
    }

    #[test]
    fn title_falls_back_to_active_line() {
        let chart = AbbreviatedConjugation {
            active_line: Some(ActiveLine {
                past_tense: Some("نَصَرَ".to_owned()),
                present_tense: Some("يَنْصُرُ".to_owned()),
                ..ActiveLine::default()
            }),
            ..AbbreviatedConjugation::default()
        };
        assert_eq!(chart.title_text(), "نَصَرَ يَنْصُرُ");
    }

    #[test]
    fn group_pair_emptiness() {
        let pair: GroupPair<VerbConjugationGroup> = GroupPair::default();
        assert!(pair.is_empty());
        let pair = GroupPair::right_only(VerbConjugationGroup::default());
        assert!(!pair.is_empty());
    }
}
