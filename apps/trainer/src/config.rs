//! Runtime configuration from the environment.

use std::path::PathBuf;
use vocab_core::DEFAULT_SESSION_SIZE;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file holding the key-value store.
    pub db_path: PathBuf,
    /// Default word list on disk; the bundled list is used when unset.
    pub words_csv: Option<PathBuf>,
    /// Seed for reproducible sessions.
    pub seed: Option<u64>,
    pub session_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            words_csv: None,
            seed: None,
            session_size: DEFAULT_SESSION_SIZE,
        }
    }
}

impl Config {
    /// Read `VOCAB_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("VOCAB_SEED").and_then(|raw| match raw.trim().parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!(value = %raw, "ignoring invalid VOCAB_SEED");
                None
            }
        });

        let session_size = lookup("VOCAB_SESSION_SIZE")
            .and_then(|raw| match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => Some(size),
                _ => {
                    tracing::warn!(value = %raw, "ignoring invalid VOCAB_SESSION_SIZE");
                    None
                }
            })
            .unwrap_or(defaults.session_size);

        Self {
            db_path: lookup("VOCAB_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            words_csv: lookup("VOCAB_WORDS_CSV").map(PathBuf::from),
            seed,
            session_size,
        }
    }
}

fn default_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-trainer")
        .join("trainer.db")
}
