//! Drag-words-into-blanks interaction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cloze::{self, Segment};
use crate::types::{ClozeAnswer, ClozeData};

/// The canonical answers in presentation order, shuffled once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Shuffle a copy of `answers`. The result is a permutation of exactly
    /// those answers.
    pub fn shuffled<R: Rng + ?Sized>(answers: &[String], rng: &mut R) -> Self {
        let mut words = answers.to_vec();
        words.shuffle(rng);
        Self { words }
    }

    /// Keep the given order.
    pub fn in_order(answers: &[String]) -> Self {
        Self {
            words: answers.to_vec(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Interaction state for one cloze question.
#[derive(Debug, Clone)]
pub struct ClozePreview<'q> {
    question: &'q ClozeData,
    word_bank: &'q WordBank,
    filled: ClozeAnswer,
}

impl<'q> ClozePreview<'q> {
    /// Start from a prior answer, or all slots empty.
    ///
    /// The slot count comes from the markers in the sentence. A seed of a
    /// different length is padded with empty slots or truncated, and seeded
    /// words missing from the bank are dropped.
    pub fn new(
        question: &'q ClozeData,
        word_bank: &'q WordBank,
        seed: Option<ClozeAnswer>,
    ) -> Self {
        let blank_count = cloze::blank_count(&question.sentence);
        let mut filled = seed.unwrap_or_default();
        filled.resize(blank_count, String::new());
        for slot in filled.iter_mut() {
            if !slot.is_empty() && !word_bank.contains(slot) {
                slot.clear();
            }
        }

        Self {
            question,
            word_bank,
            filled,
        }
    }

    pub fn question(&self) -> &'q ClozeData {
        self.question
    }

    pub fn blank_count(&self) -> usize {
        self.filled.len()
    }

    /// Put `word` into a blank. Out-of-range indices and words that are not
    /// in the bank are ignored.
    pub fn fill(&mut self, blank: usize, word: &str) -> bool {
        if !word.is_empty() && !self.word_bank.contains(word) {
            tracing::debug!(blank, word, "ignoring fill with word outside the bank");
            return false;
        }
        match self.filled.get_mut(blank) {
            Some(slot) => {
                *slot = word.to_string();
                true
            }
            None => {
                tracing::debug!(blank, blank_count = self.filled.len(), "ignoring fill of unknown blank");
                false
            }
        }
    }

    /// Empty a blank, returning its word to the bank. Clearing an empty or
    /// unknown blank changes nothing.
    pub fn clear(&mut self, blank: usize) -> bool {
        match self.filled.get_mut(blank) {
            Some(slot) if !slot.is_empty() => {
                slot.clear();
                true
            }
            _ => false,
        }
    }

    /// Whether `word` currently sits in any blank.
    ///
    /// Matching is by value, so duplicate words in the bank are all reported
    /// as used once any one of them is placed.
    pub fn is_used(&self, word: &str) -> bool {
        self.filled.iter().any(|slot| slot == word)
    }

    /// Bank entries still offered for dragging, in bank order.
    pub fn available_words(&self) -> Vec<&'q str> {
        self.word_bank
            .words()
            .iter()
            .map(String::as_str)
            .filter(|word| !self.is_used(word))
            .collect()
    }

    pub fn word_bank(&self) -> &'q WordBank {
        self.word_bank
    }

    pub fn filled_count(&self) -> usize {
        self.filled.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// True once as many blanks are filled as there are words in the bank.
    pub fn all_words_used(&self) -> bool {
        self.filled_count() == self.word_bank.len()
    }

    /// The sentence interleaved with the current slot contents.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        cloze::render(&self.question.sentence, self.filled.as_slice())
    }

    pub fn answer(&self) -> &ClozeAnswer {
        &self.filled
    }

    pub fn into_answer(self) -> ClozeAnswer {
        self.filled
    }
}
