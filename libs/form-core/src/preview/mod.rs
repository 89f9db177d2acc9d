//! Interactive preview state machines, one per question variant.
//!
//! Each preview borrows the canonical question and owns the in-progress
//! answer. Transitions return `true` when applied; malformed input leaves the
//! state untouched and returns `false`.

pub mod categorize;
pub mod cloze;
pub mod comprehension;

pub use categorize::CategorizePreview;
pub use cloze::{ClozePreview, WordBank};
pub use comprehension::ComprehensionPreview;

use crate::types::{QuestionKind, UserAnswer};

/// Preview of whichever variant a question is.
#[derive(Debug, Clone)]
pub enum QuestionPreview<'q> {
    Categorize(CategorizePreview<'q>),
    Cloze(ClozePreview<'q>),
    Comprehension(ComprehensionPreview<'q>),
}

impl QuestionPreview<'_> {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Categorize(_) => QuestionKind::Categorize,
            Self::Cloze(_) => QuestionKind::Cloze,
            Self::Comprehension(_) => QuestionKind::Comprehension,
        }
    }

    /// Current answer in its externalized form.
    pub fn to_answer(&self) -> UserAnswer {
        match self {
            Self::Categorize(p) => UserAnswer::Categorize(p.answer().clone()),
            Self::Cloze(p) => UserAnswer::Cloze(p.answer().clone()),
            Self::Comprehension(p) => UserAnswer::Comprehension(p.answer().clone()),
        }
    }

    pub fn into_answer(self) -> UserAnswer {
        match self {
            Self::Categorize(p) => UserAnswer::Categorize(p.into_answer()),
            Self::Cloze(p) => UserAnswer::Cloze(p.into_answer()),
            Self::Comprehension(p) => UserAnswer::Comprehension(p.into_answer()),
        }
    }
}
