//! Core vocabulary trainer library.
//!
//! Provides:
//! - CSV parser for word lists
//! - Multiple-choice option generation
//! - Quiz session engine with requeue on wrong answers
//! - Progress aggregation and accuracy statistics
//! - Storage port the engine persists through

pub mod error;
pub mod options;
pub mod parser;
pub mod progress;
pub mod session;
pub mod storage;
pub mod types;
pub mod words;

pub use error::{SessionError, StoreError, UploadError};
pub use options::{generate_options, OPTION_COUNT};
pub use parser::{parse, to_csv};
pub use progress::{
    accuracy_percent, apply_results, compute_summary, load_progress, student_summaries,
    update_progress, word_breakdown,
};
pub use session::{AnswerOutcome, Session, SessionPhase, DEFAULT_SESSION_SIZE};
pub use storage::{KeyValueStore, MemoryStore, PROGRESS_KEY, USERNAME_KEY, WORDS_KEY};
pub use types::{
    ProgressSummary, SessionCard, SessionResult, StudentSummary, UserProgress, WordAccuracy,
    WordEntry, WordProgress, WordStats,
};
