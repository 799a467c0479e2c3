//! User-facing trainer operations.

pub mod auth;
pub mod stats;
pub mod study;
pub mod words;

use std::fmt;

pub use auth::{last_username, login, require_admin, resolve_username, verify_admin};
pub use stats::{admin_overview, dashboard, Dashboard};
pub use study::{finish_session, start_session, submit_answer, SessionReport};
pub use words::{export_words, load_word_pool, reset_words, upload_words};

/// Error surfaced to the user by a command.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<crate::db::DbError> for CommandError {
    fn from(e: crate::db::DbError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<vocab_core::StoreError> for CommandError {
    fn from(e: vocab_core::StoreError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<vocab_core::UploadError> for CommandError {
    fn from(e: vocab_core::UploadError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<vocab_core::SessionError> for CommandError {
    fn from(e: vocab_core::SessionError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(e: std::io::Error) -> Self {
        Self { message: e.to_string() }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::Config;
    use crate::db::SqliteStore;
    use crate::state::AppState;

    /// In-memory state with a fixed seed and the bundled word list.
    pub fn test_state() -> AppState {
        let config = Config {
            seed: Some(42),
            ..Config::default()
        };
        AppState::new(SqliteStore::open_in_memory().unwrap(), config)
    }
}
