//! Statistics commands.

use crate::state::AppState;
use vocab_core::{
    compute_summary, load_progress, student_summaries, word_breakdown, ProgressSummary,
    StudentSummary, WordAccuracy,
};

use super::auth::require_admin;
use super::CommandError;

/// A student's dashboard.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Dashboard {
    pub username: String,
    pub summary: ProgressSummary,
    pub words: Vec<WordAccuracy>,
}

/// Summary and per-word accuracy for `username`.
pub fn dashboard(state: &AppState, username: &str) -> Dashboard {
    let progress = load_progress(&state.store);
    match progress.get(username) {
        Some(words) => Dashboard {
            username: username.to_string(),
            summary: compute_summary(words),
            words: word_breakdown(words),
        },
        None => Dashboard {
            username: username.to_string(),
            summary: ProgressSummary::default(),
            words: Vec::new(),
        },
    }
}

/// Totals for every student. Admin only.
pub fn admin_overview(state: &AppState, passcode: &str) -> Result<Vec<StudentSummary>, CommandError> {
    require_admin(passcode)?;
    Ok(student_summaries(&load_progress(&state.store)))
}
