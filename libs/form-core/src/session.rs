//! Form-taking session over a loaded list of questions.
//!
//! The session is handed already-fetched questions and never fetches or
//! caches them itself. It keeps one answer per question id and one word bank
//! per cloze question, shuffled when the session starts.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::preview::{
    CategorizePreview, ClozePreview, ComprehensionPreview, QuestionPreview, WordBank,
};
use crate::types::{Question, QuestionData, Submission, UserAnswer};

/// A single user interaction with the current question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Interaction {
    Place { item: String, category: String },
    Unplace { item: String },
    Fill { blank: usize, word: String },
    Clear { blank: usize },
    Select { question: usize, option: usize },
}

/// Marker for the question overview strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    Current,
    Answered,
    Unanswered,
}

#[derive(Debug, Clone)]
pub struct FormSession {
    questions: Vec<Question>,
    current: usize,
    answers: HashMap<Uuid, UserAnswer>,
    word_banks: HashMap<Uuid, WordBank>,
    submitted: bool,
}

impl FormSession {
    /// Start a session, shuffling word banks with the thread-local RNG.
    pub fn new(questions: Vec<Question>) -> Self {
        Self::with_rng(questions, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(questions: Vec<Question>, rng: &mut R) -> Self {
        let word_banks = questions
            .iter()
            .filter_map(|question| match &question.data {
                QuestionData::Cloze(data) => {
                    Some((question.id, WordBank::shuffled(&data.answers, rng)))
                }
                _ => None,
            })
            .collect();

        Self {
            questions,
            current: 0,
            answers: HashMap::new(),
            word_banks,
            submitted: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    /// Advance one question. Stays put on the last question.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Go back one question. Stays put on the first question.
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to a question by position. Out-of-range positions are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.questions.len() {
            return false;
        }
        self.current = index;
        true
    }

    pub fn word_bank(&self, question_id: Uuid) -> Option<&WordBank> {
        self.word_banks.get(&question_id)
    }

    pub fn answer(&self, question_id: Uuid) -> Option<&UserAnswer> {
        self.answers.get(&question_id)
    }

    pub fn is_answered(&self, question_id: Uuid) -> bool {
        self.answers.contains_key(&question_id)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn status(&self, index: usize) -> Option<QuestionStatus> {
        let question = self.questions.get(index)?;
        Some(if index == self.current {
            QuestionStatus::Current
        } else if self.is_answered(question.id) {
            QuestionStatus::Answered
        } else {
            QuestionStatus::Unanswered
        })
    }

    /// Preview of the current question, seeded with its recorded answer.
    pub fn preview(&self) -> Option<QuestionPreview<'_>> {
        self.preview_at(self.current)
    }

    pub fn preview_at(&self, index: usize) -> Option<QuestionPreview<'_>> {
        let question = self.questions.get(index)?;
        let prior = self.answers.get(&question.id).cloned();

        let preview = match &question.data {
            QuestionData::Categorize(data) => {
                let seed = match prior {
                    Some(UserAnswer::Categorize(answer)) => Some(answer),
                    _ => None,
                };
                QuestionPreview::Categorize(CategorizePreview::new(data, seed))
            }
            QuestionData::Cloze(data) => {
                let seed = match prior {
                    Some(UserAnswer::Cloze(answer)) => Some(answer),
                    _ => None,
                };
                let bank = self.word_banks.get(&question.id)?;
                QuestionPreview::Cloze(ClozePreview::new(data, bank, seed))
            }
            QuestionData::Comprehension(data) => {
                let seed = match prior {
                    Some(UserAnswer::Comprehension(answer)) => Some(answer),
                    _ => None,
                };
                QuestionPreview::Comprehension(ComprehensionPreview::new(data, seed))
            }
        };

        Some(preview)
    }

    /// Apply an interaction to the current question and record the result.
    ///
    /// Interactions for another variant, or rejected by the variant, leave
    /// the session unchanged.
    pub fn interact(&mut self, interaction: Interaction) -> bool {
        let Some(question_id) = self.current().map(|q| q.id) else {
            return false;
        };
        let Some(mut preview) = self.preview() else {
            return false;
        };

        let applied = match (&mut preview, &interaction) {
            (QuestionPreview::Categorize(p), Interaction::Place { item, category }) => {
                p.place(item, category)
            }
            (QuestionPreview::Categorize(p), Interaction::Unplace { item }) => p.unplace(item),
            (QuestionPreview::Cloze(p), Interaction::Fill { blank, word }) => p.fill(*blank, word),
            (QuestionPreview::Cloze(p), Interaction::Clear { blank }) => p.clear(*blank),
            (QuestionPreview::Comprehension(p), Interaction::Select { question, option }) => {
                p.select(*question, *option)
            }
            (preview, interaction) => {
                tracing::debug!(
                    kind = %preview.kind(),
                    ?interaction,
                    "interaction does not apply to question"
                );
                false
            }
        };

        if applied {
            let answer = preview.into_answer();
            self.answers.insert(question_id, answer);
        }
        applied
    }

    /// Externalize the answers with the given completion time.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Submission {
        self.submitted = true;
        Submission {
            answers: self.answers.clone(),
            completed_at: now,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Take the form again: answers are dropped, word banks are kept.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.current = 0;
        self.submitted = false;
    }
}
