//! Drafts for building questions before they are saved.
//!
//! Each draft mirrors one builder form and produces a validated
//! [`QuestionData`] payload through `build`.

use crate::cloze;
use crate::error::{Result, ValidationError};
use crate::types::{
    CategorizeData, CategorizeItem, ClozeData, ComprehensionData, McqQuestion, QuestionData,
};
use crate::validation;

/// Builder state for a categorize question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizeDraft {
    categories: Vec<String>,
    items: Vec<CategorizeItem>,
}

impl CategorizeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn items(&self) -> &[CategorizeItem] {
        &self.items
    }

    /// Add a category. Blank and already present names are ignored.
    pub fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.categories.iter().any(|c| c == name) {
            return false;
        }
        self.categories.push(name.to_string());
        true
    }

    /// Remove a category together with the items assigned to it.
    pub fn remove_category(&mut self, name: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c != name);
        if self.categories.len() == before {
            return false;
        }
        self.items.retain(|item| item.category != name);
        true
    }

    /// Add an item to an existing category.
    pub fn add_item(&mut self, name: &str, category: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || !self.categories.iter().any(|c| c == category) {
            return false;
        }
        self.items.push(CategorizeItem::new(name, category));
        true
    }

    /// Items grouped under `category`, for the builder's live preview.
    pub fn items_in(&self, category: &str) -> impl Iterator<Item = &CategorizeItem> + '_ {
        let category = category.to_string();
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    pub fn build(&self) -> Result<QuestionData> {
        let data = CategorizeData {
            categories: self.categories.clone(),
            items: self.items.clone(),
        };
        validation::validate_categorize(&data)?;
        Ok(QuestionData::Categorize(data))
    }
}

/// Builder state for a cloze question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClozeDraft {
    sentence: String,
    answers: Vec<String>,
}

impl ClozeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn blank_count(&self) -> usize {
        self.answers.len()
    }

    /// Replace the sentence. Blanks are recounted and every answer is reset,
    /// since blank positions do not survive edits.
    pub fn set_sentence(&mut self, sentence: &str) {
        self.sentence = sentence.to_string();
        self.answers = vec![String::new(); cloze::blank_count(sentence)];
    }

    /// Set the answer for one blank. Out-of-range indices are ignored.
    pub fn set_answer(&mut self, index: usize, value: &str) -> bool {
        match self.answers.get_mut(index) {
            Some(answer) => {
                *answer = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Sentence with answers filled in, unfilled blanks shown as `____`.
    pub fn preview(&self) -> String {
        cloze::render_plain(&self.sentence, self.answers.as_slice())
    }

    pub fn build(&self) -> Result<QuestionData> {
        let data = ClozeData {
            sentence: self.sentence.clone(),
            blank_count: self.blank_count(),
            answers: self.answers.clone(),
        };
        validation::validate_cloze(&data)?;
        Ok(QuestionData::Cloze(data))
    }
}

/// A multiple-choice question being edited. The correct option stays unset
/// until the author picks one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct McqDraft {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_index: Option<usize>,
}

/// Builder state for a comprehension question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComprehensionDraft {
    passage: String,
    questions: Vec<McqDraft>,
}

impl ComprehensionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passage(&self) -> &str {
        &self.passage
    }

    pub fn questions(&self) -> &[McqDraft] {
        &self.questions
    }

    pub fn set_passage(&mut self, passage: &str) {
        self.passage = passage.to_string();
    }

    /// Append a question with two empty options and no correct option.
    pub fn add_question(&mut self) -> usize {
        self.questions.push(McqDraft {
            options: vec![String::new(), String::new()],
            ..McqDraft::default()
        });
        self.questions.len() - 1
    }

    /// Remove a question. The last remaining question is kept.
    pub fn remove_question(&mut self, index: usize) -> bool {
        if self.questions.len() <= 1 || index >= self.questions.len() {
            return false;
        }
        self.questions.remove(index);
        true
    }

    pub fn set_question_text(&mut self, index: usize, text: &str) -> bool {
        match self.questions.get_mut(index) {
            Some(q) => {
                q.question_text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_option(&mut self, index: usize, option: usize, text: &str) -> bool {
        match self
            .questions
            .get_mut(index)
            .and_then(|q| q.options.get_mut(option))
        {
            Some(slot) => {
                *slot = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Append an empty option, returning its index.
    pub fn add_option(&mut self, index: usize) -> Option<usize> {
        let question = self.questions.get_mut(index)?;
        question.options.push(String::new());
        Some(question.options.len() - 1)
    }

    pub fn set_correct(&mut self, index: usize, option: usize) -> bool {
        match self.questions.get_mut(index) {
            Some(q) if option < q.options.len() => {
                q.correct_index = Some(option);
                true
            }
            _ => false,
        }
    }

    /// Text and options are checked first, then every question must have a
    /// correct option chosen.
    pub fn build(&self) -> Result<QuestionData> {
        let data = ComprehensionData {
            passage: self.passage.clone(),
            questions: self
                .questions
                .iter()
                .map(|q| McqQuestion {
                    question_text: q.question_text.clone(),
                    options: q.options.clone(),
                    correct_index: q.correct_index.unwrap_or_default(),
                })
                .collect(),
        };
        validation::validate_comprehension(&data)?;

        if let Some(index) = self.questions.iter().position(|q| q.correct_index.is_none()) {
            return Err(ValidationError::NoCorrectOption { index });
        }
        Ok(QuestionData::Comprehension(data))
    }
}
