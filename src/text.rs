//! Cell text payloads and the blank/prefix rendering policy.
//!
//! Every leaf value coming from the conjugation engine is rendered into a
//! [`CellText`]: one or more styled runs. Absent values are substituted with a
//! single-space placeholder run, never an empty string - the typesetting layer
//! downstream requires a visible run in every data cell.

use smallvec::SmallVec;

/// Placeholder run used for absent values.
pub const PLACEHOLDER: &str = " ";

/// Prefix placed before the masculine participle on abbreviated lines.
pub const PARTICIPLE_PREFIX: &str = "فَهُوَ";

/// Prefix placed before the imperative on the abbreviated command line.
pub const COMMAND_PREFIX: &str = "الأَمْرُ مِنْهُ";

/// Prefix placed before the forbidding form on the abbreviated command line.
pub const FORBIDDING_PREFIX: &str = "وَنَهْيٌ عَنْهُ";

/// Prefix placed before the adverb list on the abbreviated adverb line.
pub const ADVERB_PREFIX: &str = "وَالظَّرْفُ مِنْهُ";

/// Arabic conjunction used to join multi-word lists.
const AND: &str = "وَ";

/// Character style of a single run within a cell.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunStyle {
    /// Default body character style.
    #[default]
    Normal,
    /// Accent style for label prefixes (distinct color in the renderer).
    Prefix,
}

/// One styled run of text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Character style tag, resolved by the document renderer.
    pub style: RunStyle,
    /// Run text.
    pub text: String,
}

impl Run {
    /// Create a run in the default style.
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            style: RunStyle::Normal,
            text: text.into(),
        }
    }

    /// Create a run in the prefix accent style.
    pub fn prefix(text: impl Into<String>) -> Self {
        Self {
            style: RunStyle::Prefix,
            text: text.into(),
        }
    }
}

/// Text payload of one cell paragraph: zero or more styled runs.
///
/// Data cells always carry at least one run (the placeholder when the value is
/// absent). Separator and spacer cells carry no runs at all.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellText {
    /// Styled runs in display order.
    pub runs: SmallVec<[Run; 2]>,
}

impl CellText {
    /// A paragraph with no runs (separator/spacer cells only).
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single-run paragraph in the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        let mut runs = SmallVec::new();
        runs.push(Run::normal(text));
        Self { runs }
    }

    /// The single-space placeholder paragraph.
    pub fn placeholder() -> Self {
        Self::plain(PLACEHOLDER)
    }

    /// Whether this paragraph is exactly the absent-value placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.runs.len() == 1 && self.runs[0].text == PLACEHOLDER
    }

    /// Concatenate all runs into one string, ignoring styles.
    pub fn to_plain_string(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl From<&str> for CellText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

/// Policy for rendering a leaf value (or its absence) into cell text.
///
/// The `styled_prefix` flag selects between the two historical behaviors:
/// a prefixed value as one concatenated run, or as two runs with the prefix
/// in [`RunStyle::Prefix`]. This is an explicit configuration choice, never
/// inferred from content.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPolicy {
    /// Emit label prefixes as a separately styled run.
    pub styled_prefix: bool,
}

impl TextPolicy {
    /// Policy emitting prefixes as a distinct accent-styled run.
    pub fn with_styled_prefix() -> Self {
        Self {
            styled_prefix: true,
        }
    }

    /// Render a value with an optional label prefix.
    ///
    /// An absent value becomes the single-space placeholder. A present prefix
    /// is joined to the effective value with a space, either inside one run or
    /// as a separate [`RunStyle::Prefix`] run depending on `styled_prefix`.
    pub fn render_cell(&self, prefix: Option<&str>, value: Option<&str>) -> CellText {
        let effective = value.unwrap_or(PLACEHOLDER);
        match prefix {
            None => CellText::plain(effective),
            Some(prefix) if self.styled_prefix => {
                let mut runs = SmallVec::new();
                runs.push(Run::prefix(format!("{prefix} ")));
                runs.push(Run::normal(effective));
                CellText { runs }
            }
            Some(prefix) => CellText::plain(format!("{prefix} {effective}")),
        }
    }
}

/// Join a word list with the Arabic conjunction.
///
/// Returns `None` for an empty list; the first word stands alone and each
/// following word is prefixed with "وَ".
pub fn join_with_and<S: AsRef<str>>(words: &[S]) -> Option<String> {
    let (first, rest) = words.split_first()?;
    let mut joined = first.as_ref().to_owned();
    for word in rest {
        joined.push(' ');
        joined.push_str(AND);
        joined.push_str(word.as_ref());
    }
    Some(joined)
}

/// Derive the abbreviated-chart title from the active line.
///
/// The title is third-person masculine singular past tense followed by the
/// present tense, space separated. Missing parts fall back to the placeholder
/// so the title is never empty.
pub fn derive_title(past: Option<&str>, present: Option<&str>) -> String {
    format!(
        "{} {}",
        past.unwrap_or(PLACEHOLDER),
        present.unwrap_or(PLACEHOLDER)
    )
}
