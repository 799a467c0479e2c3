//! Word list commands.

use crate::state::AppState;
use std::path::Path;
use vocab_core::words::{clear_words, replace_words, stored_words};
use vocab_core::{parser, WordEntry};

use super::auth::require_admin;
use super::CommandError;

/// Word list compiled into the binary, used when no other source is set.
const BUNDLED_WORDS: &str = include_str!("../../data/words.csv");

/// Load the active word pool.
///
/// An uploaded list in the store wins; otherwise the default source is read.
/// A default source that cannot be read yields an empty pool.
pub async fn load_word_pool(state: &AppState) -> Vec<WordEntry> {
    if let Some(words) = stored_words(&state.store) {
        tracing::debug!(entries = words.len(), "using uploaded word list");
        return words;
    }
    load_default_words(state.config.words_csv.as_deref()).await
}

/// Read the default word list from `path`, or the bundled list when `None`.
pub async fn load_default_words(path: Option<&Path>) -> Vec<WordEntry> {
    let Some(path) = path else {
        return parser::parse(BUNDLED_WORDS);
    };

    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let words = parser::parse(&content);
            tracing::debug!(path = %path.display(), entries = words.len(), "loaded default word list");
            words
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read default word list");
            Vec::new()
        }
    }
}

/// Replace the active word list with a CSV file. Admin only.
pub async fn upload_words(state: &AppState, passcode: &str, path: &Path) -> Result<usize, CommandError> {
    require_admin(passcode)?;
    let content = tokio::fs::read_to_string(path).await?;
    replace_words(&state.store, &content).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "rejected word list upload");
        CommandError::from(e)
    })
}

/// Drop the uploaded list and go back to the default. Admin only.
pub fn reset_words(state: &AppState, passcode: &str) -> Result<(), CommandError> {
    require_admin(passcode)?;
    clear_words(&state.store)?;
    tracing::info!("word list reset to default");
    Ok(())
}

/// The active pool as CSV.
pub async fn export_words(state: &AppState) -> String {
    parser::to_csv(&load_word_pool(state).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::auth::ADMIN_PASSCODE;
    use crate::commands::test_support::test_state;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn bundled_list_parses() {
        let words = parser::parse(BUNDLED_WORDS);
        assert_eq!(words.len(), 20);
        assert_eq!(words[17].meaning, "calm, peaceful, and untroubled");
    }

    #[test]
    fn bundled_synonyms_are_not_headwords() {
        let words = parser::parse(BUNDLED_WORDS);
        for entry in &words {
            for synonym in &entry.synonyms {
                assert!(
                    !words.iter().any(|other| other.word.eq_ignore_ascii_case(synonym)),
                    "{synonym} is a synonym of {} and also a headword",
                    entry.word
                );
            }
        }
    }

    #[tokio::test]
    async fn falls_back_to_bundled_words() {
        let state = test_state();
        let words = load_word_pool(&state).await;
        assert_eq!(words.len(), 20);
        assert_eq!(words[0].word, "abundant");
    }

    #[tokio::test]
    async fn unreadable_default_source_gives_empty_pool() {
        let words = load_default_words(Some(Path::new("/nonexistent/vocab/words.csv"))).await;
        assert!(words.is_empty());
    }

    #[tokio::test]
    async fn upload_overrides_default_until_reset() {
        let state = test_state();
        let file = temp_csv("word,meaning,synonyms,antonyms,example\nowl,bird,fowl,,An owl.\n");

        assert_eq!(upload_words(&state, ADMIN_PASSCODE, file.path()).await.unwrap(), 1);
        let words = load_word_pool(&state).await;
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "owl");

        reset_words(&state, ADMIN_PASSCODE).unwrap();
        assert_eq!(load_word_pool(&state).await.len(), 20);
    }

    #[tokio::test]
    async fn empty_upload_is_rejected() {
        let state = test_state();
        let file = temp_csv("word,meaning,synonyms,antonyms,example\nbad,line\n");

        let err = upload_words(&state, ADMIN_PASSCODE, file.path()).await.unwrap_err();
        assert_eq!(err.message, "no valid word entries found in upload");
        assert!(stored_words(&state.store).is_none());
    }

    #[tokio::test]
    async fn upload_requires_passcode() {
        let state = test_state();
        let file = temp_csv("word,meaning,synonyms,antonyms,example\nowl,bird,fowl,,An owl.\n");
        assert!(upload_words(&state, "nope", file.path()).await.is_err());
        assert!(stored_words(&state.store).is_none());
    }
}
