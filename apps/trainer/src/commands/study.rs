//! Study session commands.

use crate::state::AppState;
use vocab_core::{accuracy_percent, update_progress, AnswerOutcome, Session, WordEntry};

use super::CommandError;

/// Figures shown when a session ends.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionReport {
    pub cards: usize,
    pub answered: usize,
    pub correct: usize,
    pub accuracy_percent: u32,
}

/// Build a new session from `pool` using the configured size.
pub fn start_session(state: &mut AppState, pool: &[WordEntry]) -> Session {
    let size = state.config.session_size;
    Session::build_with_size(pool, size, &mut state.rng)
}

/// Submit an answer for the presented card.
pub fn submit_answer(
    state: &mut AppState,
    session: &mut Session,
    selected: &str,
) -> Result<AnswerOutcome, CommandError> {
    session
        .submit_answer(selected, &mut state.rng)
        .map_err(Into::into)
}

/// Persist a completed session's results for `username`.
///
/// Unfinished sessions are refused so that abandoning a quiz records nothing.
pub fn finish_session(
    state: &AppState,
    username: &str,
    session: &Session,
) -> Result<SessionReport, CommandError> {
    if !session.is_complete() {
        return Err(CommandError::new("session is not complete"));
    }

    let results = session.results();
    update_progress(&state.store, username, results)?;

    let correct = results.iter().filter(|r| r.correct).count();
    Ok(SessionReport {
        cards: session.size(),
        answered: results.len(),
        correct,
        accuracy_percent: accuracy_percent(correct as u32, results.len() as u32),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::test_state;
    use crate::commands::words::load_word_pool;
    use vocab_core::load_progress;

    #[tokio::test]
    async fn full_session_is_recorded() {
        let mut state = test_state();
        let pool = load_word_pool(&state).await;
        let mut session = start_session(&mut state, &pool);
        assert_eq!(session.size(), 10);

        let mut first = true;
        while let Some(card) = session.draw_next().cloned() {
            let answer = if first {
                first = false;
                "definitely wrong".to_string()
            } else {
                card.correct_answer.clone()
            };
            submit_answer(&mut state, &mut session, &answer).unwrap();
        }

        let report = finish_session(&state, "ada", &session).unwrap();
        assert_eq!(report.cards, 10);
        assert_eq!(report.answered, 11);
        assert_eq!(report.correct, 10);
        assert_eq!(report.accuracy_percent, 91);

        let progress = load_progress(&state.store);
        let attempts: u32 = progress["ada"].values().map(|s| s.attempts).sum();
        assert_eq!(attempts, 11);
    }

    #[tokio::test]
    async fn unfinished_session_is_not_recorded() {
        let mut state = test_state();
        let pool = load_word_pool(&state).await;
        let mut session = start_session(&mut state, &pool);
        let card = session.draw_next().cloned().unwrap();
        submit_answer(&mut state, &mut session, &card.correct_answer).unwrap();

        assert!(finish_session(&state, "ada", &session).is_err());
        assert!(load_progress(&state.store).is_empty());
    }

    #[test]
    fn session_size_follows_config() {
        let mut state = test_state();
        state.config.session_size = 3;
        let pool = vocab_core::parse(
            "word,meaning,synonyms,antonyms,example\na,x,one,,\nb,y,two,,\nc,z,three,,\nd,w,four,,\n",
        );
        let session = start_session(&mut state, &pool);
        assert_eq!(session.size(), 3);
    }
}
