//! Single-select answers for passage questions.

use crate::types::{ComprehensionAnswer, ComprehensionData, McqQuestion};

#[derive(Debug, Clone)]
pub struct ComprehensionPreview<'q> {
    question: &'q ComprehensionData,
    selections: ComprehensionAnswer,
}

impl<'q> ComprehensionPreview<'q> {
    pub fn new(question: &'q ComprehensionData, seed: Option<ComprehensionAnswer>) -> Self {
        Self {
            question,
            selections: seed.unwrap_or_default(),
        }
    }

    pub fn passage(&self) -> &'q str {
        &self.question.passage
    }

    pub fn questions(&self) -> &'q [McqQuestion] {
        &self.question.questions
    }

    /// Choose an option, replacing any earlier choice for that question.
    ///
    /// Indices outside the question list or its options are ignored.
    pub fn select(&mut self, question: usize, option: usize) -> bool {
        let in_range = self
            .question
            .questions
            .get(question)
            .is_some_and(|q| option < q.options.len());
        if !in_range {
            tracing::debug!(question, option, "ignoring out-of-range selection");
            return false;
        }
        self.selections.insert(question, option);
        true
    }

    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selections.get(&question).copied()
    }

    pub fn is_selected(&self, question: usize, option: usize) -> bool {
        self.selected(question) == Some(option)
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    pub fn answer(&self) -> &ComprehensionAnswer {
        &self.selections
    }

    pub fn into_answer(self) -> ComprehensionAnswer {
        self.selections
    }
}
