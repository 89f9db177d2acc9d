//! Save-time validation of question payloads.
//!
//! These checks are policy layered on top of the data model; reading a
//! stored question never re-validates it.

use std::collections::HashSet;

use crate::cloze;
use crate::error::{Result, ValidationError};
use crate::types::{CategorizeData, ClozeData, ComprehensionData, QuestionData};

/// Validate a payload before it is saved.
pub fn validate(data: &QuestionData) -> Result<()> {
    match data {
        QuestionData::Categorize(c) => validate_categorize(c),
        QuestionData::Cloze(c) => validate_cloze(c),
        QuestionData::Comprehension(c) => validate_comprehension(c),
    }
}

pub fn validate_categorize(data: &CategorizeData) -> Result<()> {
    if data.categories.is_empty() {
        return Err(ValidationError::NoCategories);
    }

    let mut seen = HashSet::new();
    for (index, category) in data.categories.iter().enumerate() {
        if category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory { index });
        }
        if !seen.insert(category.as_str()) {
            return Err(ValidationError::DuplicateCategory {
                name: category.clone(),
            });
        }
    }

    if data.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    // Answers are keyed by item name, so names must be unique.
    let mut names = HashSet::new();
    for (index, item) in data.items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(ValidationError::EmptyItemName { index });
        }
        if !names.insert(item.name.as_str()) {
            return Err(ValidationError::DuplicateItem {
                name: item.name.clone(),
            });
        }
        if !seen.contains(item.category.as_str()) {
            return Err(ValidationError::UnknownCategory {
                item: item.name.clone(),
                category: item.category.clone(),
            });
        }
    }

    Ok(())
}

pub fn validate_cloze(data: &ClozeData) -> Result<()> {
    if data.sentence.trim().is_empty() {
        return Err(ValidationError::EmptySentence);
    }

    let found = cloze::blank_count(&data.sentence);
    if found == 0 {
        return Err(ValidationError::NoBlanks);
    }
    if data.blank_count != found {
        return Err(ValidationError::BlankCountMismatch {
            declared: data.blank_count,
            found,
        });
    }
    if data.answers.len() != found {
        return Err(ValidationError::AnswerCountMismatch {
            expected: found,
            actual: data.answers.len(),
        });
    }
    if let Some(index) = data.answers.iter().position(|a| a.trim().is_empty()) {
        return Err(ValidationError::EmptyAnswer { index });
    }

    Ok(())
}

pub fn validate_comprehension(data: &ComprehensionData) -> Result<()> {
    if data.passage.trim().is_empty() {
        return Err(ValidationError::EmptyPassage);
    }
    if data.questions.is_empty() {
        return Err(ValidationError::NoQuestions);
    }

    for (index, question) in data.questions.iter().enumerate() {
        if question.question_text.trim().is_empty() {
            return Err(ValidationError::EmptyQuestionText { index });
        }
        if question.options.len() < 2 {
            return Err(ValidationError::TooFewOptions { index });
        }
        if let Some(option) = question.options.iter().position(|o| o.trim().is_empty()) {
            return Err(ValidationError::EmptyOption { index, option });
        }
        if question.correct_index >= question.options.len() {
            return Err(ValidationError::CorrectIndexOutOfRange {
                index,
                correct: question.correct_index,
                options: question.options.len(),
            });
        }
    }

    Ok(())
}
