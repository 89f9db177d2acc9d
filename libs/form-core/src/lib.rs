//! Core form library shared by the backend and form clients.
//!
//! Provides:
//! - Question data model (categorize, cloze, comprehension)
//! - Cloze sentence parsing and rendering
//! - Preview state machines for answering each variant
//! - Authoring drafts and save-time validation
//! - A form-taking session with navigation and submission

pub mod authoring;
pub mod cloze;
pub mod error;
pub mod preview;
pub mod session;
pub mod types;
pub mod validation;

pub use authoring::{CategorizeDraft, ClozeDraft, ComprehensionDraft, McqDraft};
pub use cloze::{parse, render, render_plain, split, ClozeStructure, Segment, Slot, BLANK_MARKER};
pub use error::{Result, ValidationError};
pub use preview::{
    CategorizePreview, ClozePreview, ComprehensionPreview, QuestionPreview, WordBank,
};
pub use session::{FormSession, Interaction, QuestionStatus};
pub use types::{
    CategorizeAnswer, CategorizeData, CategorizeItem, ClozeAnswer, ClozeData,
    ComprehensionAnswer, ComprehensionData, McqQuestion, Question, QuestionData, QuestionKind,
    Submission, UserAnswer,
};
pub use validation::validate;
