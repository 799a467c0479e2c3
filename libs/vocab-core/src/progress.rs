//! Progress aggregation and accuracy statistics.
//!
//! Progress is stored as one JSON document under [`PROGRESS_KEY`] mapping
//! username to word to counters. Updates load the whole document, fold the
//! new results in and write the whole document back.

use crate::error::StoreError;
use crate::storage::{KeyValueStore, PROGRESS_KEY};
use crate::types::{
    ProgressSummary, SessionResult, StudentSummary, UserProgress, WordAccuracy, WordProgress,
    WordStats,
};

/// Load the progress document. Missing, unreadable or corrupt data is empty.
pub fn load_progress<S: KeyValueStore + ?Sized>(store: &S) -> UserProgress {
    let raw = match store.get(PROGRESS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return UserProgress::new(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read progress, treating as empty");
            return UserProgress::new();
        }
    };

    decode_progress(&raw)
}

fn decode_progress(raw: &str) -> UserProgress {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "corrupt progress data, treating as empty");
        UserProgress::new()
    })
}

/// Fold session results into `progress` for `username`.
pub fn apply_results(progress: &mut UserProgress, username: &str, results: &[SessionResult]) {
    let words = progress.entry(username.to_string()).or_default();
    for result in results {
        let stats = words.entry(result.word.clone()).or_default();
        stats.attempts += 1;
        if result.correct {
            stats.correct += 1;
        }
    }
}

/// Record session results for `username` in the store.
///
/// Does nothing for an empty username. A failed read is returned as an
/// error so the stored document is never replaced by a partial one.
pub fn update_progress<S: KeyValueStore + ?Sized>(
    store: &S,
    username: &str,
    results: &[SessionResult],
) -> Result<(), StoreError> {
    let username = username.trim();
    if username.is_empty() {
        tracing::debug!("no username, skipping progress update");
        return Ok(());
    }

    let mut progress = match store.get(PROGRESS_KEY)? {
        Some(raw) => decode_progress(&raw),
        None => UserProgress::new(),
    };
    apply_results(&mut progress, username, results);

    let raw = serde_json::to_string(&progress).map_err(|source| StoreError::Serialize {
        key: PROGRESS_KEY,
        source,
    })?;
    store.set(PROGRESS_KEY, &raw)?;

    tracing::info!(user = username, results = results.len(), "progress updated");
    Ok(())
}

/// Rounded percentage of correct answers, 0 when nothing was attempted.
pub fn accuracy_percent(correct: u32, attempts: u32) -> u32 {
    if attempts == 0 {
        return 0;
    }
    (100.0 * f64::from(correct) / f64::from(attempts)).round() as u32
}

/// Totals and accuracy for one user's word counters.
pub fn compute_summary(words: &WordProgress) -> ProgressSummary {
    let total_attempts: u32 = words.values().map(|s| s.attempts).sum();
    let total_correct: u32 = words.values().map(|s| s.correct).sum();

    ProgressSummary {
        word_count: words.len(),
        total_attempts,
        total_correct,
        accuracy_percent: accuracy_percent(total_correct, total_attempts),
    }
}

/// Per-word accuracy rows, ordered by word.
pub fn word_breakdown(words: &WordProgress) -> Vec<WordAccuracy> {
    words
        .iter()
        .map(|(word, &WordStats { attempts, correct })| WordAccuracy {
            word: word.clone(),
            attempts,
            correct,
            accuracy_percent: accuracy_percent(correct, attempts),
        })
        .collect()
}

/// One summary per student, ordered by username.
pub fn student_summaries(progress: &UserProgress) -> Vec<StudentSummary> {
    progress
        .iter()
        .map(|(username, words)| StudentSummary {
            username: username.clone(),
            summary: compute_summary(words),
        })
        .collect()
}
