//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One vocabulary item parsed from a word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub example: String,
}

impl WordEntry {
    /// The answer a card for this entry expects.
    ///
    /// First synonym, else the first word of the meaning, else the word itself.
    pub fn correct_answer(&self) -> &str {
        if let Some(first) = self.synonyms.first() {
            return first;
        }
        self.meaning
            .split(' ')
            .find(|token| !token.is_empty())
            .unwrap_or(self.word.as_str())
    }
}

/// A card as presented during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCard {
    pub entry: WordEntry,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Outcome of one answered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub word: String,
    pub correct: bool,
}

impl SessionResult {
    pub fn new(word: impl Into<String>, correct: bool) -> Self {
        Self {
            word: word.into(),
            correct,
        }
    }
}

/// Cumulative counters for one user and one word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    pub attempts: u32,
    pub correct: u32,
}

/// Word to counters for a single user.
pub type WordProgress = BTreeMap<String, WordStats>;

/// Username to per-word counters, the persisted progress document.
pub type UserProgress = BTreeMap<String, WordProgress>;

/// Aggregate figures for a set of word counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub word_count: usize,
    pub total_attempts: u32,
    pub total_correct: u32,
    pub accuracy_percent: u32,
}

/// Dashboard row for a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAccuracy {
    pub word: String,
    pub attempts: u32,
    pub correct: u32,
    pub accuracy_percent: u32,
}

/// Admin row for a single student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub username: String,
    pub summary: ProgressSummary,
}
