//! Error types for form-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reasons a question payload is refused at save time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least one category is required")]
    NoCategories,

    #[error("category {index} is empty")]
    EmptyCategory { index: usize },

    #[error("duplicate category: {name}")]
    DuplicateCategory { name: String },

    #[error("at least one item is required")]
    NoItems,

    #[error("item {index} has no name")]
    EmptyItemName { index: usize },

    #[error("duplicate item: {name}")]
    DuplicateItem { name: String },

    #[error("item {item} uses undeclared category {category}")]
    UnknownCategory { item: String, category: String },

    #[error("sentence is empty")]
    EmptySentence,

    #[error("sentence must contain at least one '_' for a blank")]
    NoBlanks,

    #[error("blank count {declared} does not match {found} blanks in sentence")]
    BlankCountMismatch { declared: usize, found: usize },

    #[error("expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    #[error("answer for blank {index} is empty")]
    EmptyAnswer { index: usize },

    #[error("passage is empty")]
    EmptyPassage,

    #[error("at least one question is required")]
    NoQuestions,

    #[error("question {index} is missing text")]
    EmptyQuestionText { index: usize },

    #[error("question {index} must have at least two options")]
    TooFewOptions { index: usize },

    #[error("option {option} of question {index} is empty")]
    EmptyOption { index: usize, option: usize },

    #[error("question {index} has correct index {correct} but only {options} options")]
    CorrectIndexOutOfRange {
        index: usize,
        correct: usize,
        options: usize,
    },

    #[error("question {index} has no correct option selected")]
    NoCorrectOption { index: usize },
}
