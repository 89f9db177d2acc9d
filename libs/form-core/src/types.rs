//! Core types for the form builder.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Question variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Categorize,
    Cloze,
    Comprehension,
}

impl QuestionKind {
    /// Get the kind name as stored and sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Categorize => "categorize",
            Self::Cloze => "cloze",
            Self::Comprehension => "comprehension",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "categorize" => Some(Self::Categorize),
            "cloze" => Some(Self::Cloze),
            "comprehension" => Some(Self::Comprehension),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item to be sorted into one of the declared categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizeItem {
    pub name: String,
    pub category: String,
}

impl CategorizeItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Payload of a categorize question.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategorizeData {
    pub categories: Vec<String>,
    pub items: Vec<CategorizeItem>,
}

impl CategorizeData {
    /// Whether `category` is one of the declared categories.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Whether an item with this name exists.
    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }
}

/// Payload of a cloze (fill in the blanks) question.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClozeData {
    pub sentence: String,
    pub blank_count: usize,
    pub answers: Vec<String>,
}

/// One multiple-choice question attached to a comprehension passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McqQuestion {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// Payload of a reading comprehension question.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComprehensionData {
    pub passage: String,
    pub questions: Vec<McqQuestion>,
}

/// Variant payload, keyed by `type` with the body under `data`.
///
/// ```json
/// { "type": "cloze", "data": { "sentence": "_ is red", "blankCount": 1, "answers": ["Rust"] } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum QuestionData {
    Categorize(CategorizeData),
    Cloze(ClozeData),
    Comprehension(ComprehensionData),
}

impl QuestionData {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Categorize(_) => QuestionKind::Categorize,
            Self::Cloze(_) => QuestionKind::Cloze,
            Self::Comprehension(_) => QuestionKind::Comprehension,
        }
    }
}

/// A persisted question. `id` and `created_at` are assigned by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: QuestionData,
    pub created_at: DateTime<Utc>,
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        self.data.kind()
    }
}

/// Item name -> chosen category. Absent items are uncategorized.
pub type CategorizeAnswer = BTreeMap<String, String>;

/// One entry per blank; an empty string means unfilled.
pub type ClozeAnswer = Vec<String>;

/// Question index -> selected option index.
pub type ComprehensionAnswer = BTreeMap<usize, usize>;

/// In-progress answer for a single question. Never merged into the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum UserAnswer {
    Categorize(CategorizeAnswer),
    Cloze(ClozeAnswer),
    Comprehension(ComprehensionAnswer),
}

impl UserAnswer {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Categorize(_) => QuestionKind::Categorize,
            Self::Cloze(_) => QuestionKind::Cloze,
            Self::Comprehension(_) => QuestionKind::Comprehension,
        }
    }
}

/// Answers handed to the submission collaborator when a form is finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub answers: HashMap<Uuid, UserAnswer>,
    pub completed_at: DateTime<Utc>,
}
