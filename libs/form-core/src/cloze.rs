//! Cloze sentence parsing and rendering.
//!
//! A cloze sentence marks each blank with a single `_`:
//!
//! ```text
//! The capital of France is _ and the currency is _.
//! ```
//!
//! Splitting on the marker yields `k + 1` text segments for `k` blanks, and
//! rendering interleaves them with slots:
//! `text[0], slot(0), text[1], slot(1), ..., slot(k-1), text[k]`.
//! Every function here is total over any string.

use serde::Serialize;

/// Character marking a blank in a cloze sentence.
pub const BLANK_MARKER: char = '_';

/// Placeholder shown for an unfilled slot in plain-text previews.
pub const UNFILLED_PLACEHOLDER: &str = "____";

/// One fillable position in a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Left-to-right blank index.
    pub index: usize,
    /// Byte offset of the marker within the sentence.
    pub offset: usize,
}

/// Structural facts derived from a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClozeStructure {
    pub blank_count: usize,
    pub slots: Vec<Slot>,
}

/// A piece of rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment<'a> {
    Text { value: &'a str },
    /// `value` is `None` while the slot is unfilled.
    Slot { index: usize, value: Option<&'a str> },
}

impl Segment<'_> {
    pub fn is_slot(&self) -> bool {
        matches!(self, Segment::Slot { .. })
    }
}

/// Scan a sentence for blank markers.
///
/// Always recomputed from scratch: slot indices are not stable across edits.
pub fn parse(sentence: &str) -> ClozeStructure {
    let slots: Vec<Slot> = sentence
        .match_indices(BLANK_MARKER)
        .enumerate()
        .map(|(index, (offset, _))| Slot { index, offset })
        .collect();

    ClozeStructure {
        blank_count: slots.len(),
        slots,
    }
}

/// Count blank markers without collecting slots.
pub fn blank_count(sentence: &str) -> usize {
    sentence.matches(BLANK_MARKER).count()
}

/// Split a sentence into the literal text around its blanks.
///
/// Consecutive markers produce empty segments, which are kept.
pub fn split(sentence: &str) -> Vec<&str> {
    sentence.split(BLANK_MARKER).collect()
}

/// Interleave text segments with slots filled from `answers`.
///
/// The marker count in `sentence` decides how many slots are produced. A
/// missing or empty answer yields an unfilled slot; answers beyond the last
/// blank are not rendered.
pub fn render<'a, S: AsRef<str>>(sentence: &'a str, answers: &'a [S]) -> Vec<Segment<'a>> {
    let segments = split(sentence);
    let last = segments.len() - 1;
    let mut rendered = Vec::with_capacity(segments.len() * 2 - 1);

    for (index, text) in segments.into_iter().enumerate() {
        rendered.push(Segment::Text { value: text });
        if index < last {
            let value = answers
                .get(index)
                .map(|answer| answer.as_ref())
                .filter(|answer| !answer.is_empty());
            rendered.push(Segment::Slot { index, value });
        }
    }

    rendered
}

/// Render to a single string, showing unfilled slots as [`UNFILLED_PLACEHOLDER`].
pub fn render_plain<S: AsRef<str>>(sentence: &str, answers: &[S]) -> String {
    render(sentence, answers)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text { value } => value,
            Segment::Slot { value, .. } => value.unwrap_or(UNFILLED_PLACEHOLDER),
        })
        .collect()
}
