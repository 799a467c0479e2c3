//! Quiz session state machine.
//!
//! A session draws up to [`DEFAULT_SESSION_SIZE`] entries from the word pool
//! and works through them as a FIFO queue. A wrong answer puts a freshly
//! generated card for the same entry at the back of the queue, so missed
//! words come round again before the session ends. The session is complete
//! exactly when the queue is empty after a submission.
//!
//! Dropping an unfinished session discards its results; nothing is persisted
//! until the caller hands a completed session's results to
//! [`crate::progress::update_progress`].

use crate::error::SessionError;
use crate::options::generate_options;
use crate::types::{SessionCard, SessionResult, WordEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of distinct entries drawn into one session.
pub const DEFAULT_SESSION_SIZE: usize = 10;

/// Lifecycle of a session. `Building` only exists while the session is
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Building,
    InProgress,
    Complete,
}

/// Result of submitting an answer for the presented card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    /// A new card for the same entry was queued.
    pub requeued: bool,
    pub complete: bool,
}

/// Explicit state of one quiz session.
#[derive(Debug, Clone)]
pub struct Session {
    pool: Vec<WordEntry>,
    queue: VecDeque<SessionCard>,
    presented: Option<SessionCard>,
    results: Vec<SessionResult>,
    phase: SessionPhase,
    size: usize,
}

impl Session {
    /// Build a session of at most [`DEFAULT_SESSION_SIZE`] cards.
    pub fn build<R: Rng + ?Sized>(pool: &[WordEntry], rng: &mut R) -> Self {
        Self::build_with_size(pool, DEFAULT_SESSION_SIZE, rng)
    }

    /// Build a session of at most `size` cards.
    pub fn build_with_size<R: Rng + ?Sized>(pool: &[WordEntry], size: usize, rng: &mut R) -> Self {
        let mut session = Self {
            pool: pool.to_vec(),
            queue: VecDeque::new(),
            presented: None,
            results: Vec::new(),
            phase: SessionPhase::Building,
            size: 0,
        };

        let mut drawn: Vec<&WordEntry> = pool.iter().collect();
        drawn.shuffle(rng);
        drawn.truncate(size.min(pool.len()));

        for entry in drawn {
            let card = session.make_card(entry.clone(), rng);
            session.queue.push_back(card);
        }
        session.size = session.queue.len();
        session.phase = if session.queue.is_empty() {
            SessionPhase::Complete
        } else {
            SessionPhase::InProgress
        };

        tracing::debug!(cards = session.size, pool = pool.len(), "built quiz session");
        session
    }

    fn make_card<R: Rng + ?Sized>(&self, entry: WordEntry, rng: &mut R) -> SessionCard {
        let options = generate_options(&entry, &self.pool, rng);
        let correct_answer = entry.correct_answer().to_string();
        SessionCard {
            entry,
            options,
            correct_answer,
        }
    }

    /// Present the next card.
    ///
    /// Returns the already presented card if it has not been answered yet, and
    /// `None` once the session is complete.
    pub fn draw_next(&mut self) -> Option<&SessionCard> {
        if self.presented.is_none() {
            self.presented = self.queue.pop_front();
        }
        self.presented.as_ref()
    }

    /// Answer the presented card with the selected option.
    pub fn submit_answer<R: Rng + ?Sized>(
        &mut self,
        selected: &str,
        rng: &mut R,
    ) -> Result<AnswerOutcome, SessionError> {
        if self.phase == SessionPhase::Complete {
            return Err(SessionError::Complete);
        }
        let card = self.presented.take().ok_or(SessionError::NoCardPresented)?;

        let correct = selected.trim().to_lowercase() == card.correct_answer.trim().to_lowercase();
        self.results.push(SessionResult::new(card.entry.word.clone(), correct));

        if !correct {
            let retry = self.make_card(card.entry.clone(), rng);
            self.queue.push_back(retry);
        }

        if self.queue.is_empty() {
            self.phase = SessionPhase::Complete;
            tracing::debug!(
                answered = self.results.len(),
                wrong = self.wrong_answers(),
                "quiz session complete"
            );
        }

        Ok(AnswerOutcome {
            correct,
            correct_answer: card.correct_answer,
            requeued: !correct,
            complete: self.is_complete(),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Number of distinct entries drawn when the session was built.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cards still to be answered, including the presented one.
    pub fn remaining(&self) -> usize {
        self.queue.len() + usize::from(self.presented.is_some())
    }

    /// Results so far, in answer order.
    pub fn results(&self) -> &[SessionResult] {
        &self.results
    }

    pub fn wrong_answers(&self) -> usize {
        self.results.iter().filter(|r| !r.correct).count()
    }

    pub fn into_results(self) -> Vec<SessionResult> {
        self.results
    }
}
