//! Command line interface and the interactive quiz loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vocab_core::Session;

use crate::commands;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "vocab-trainer", version, about = "Vocabulary flashcard trainer")]
pub struct Cli {
    /// Path to the local store (overrides VOCAB_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Seed for reproducible sessions (overrides VOCAB_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Take a quiz session
    Study {
        /// Log in as this user (defaults to the last user)
        #[arg(long)]
        user: Option<String>,
    },

    /// Show a student's progress
    Dashboard {
        /// Student to show (defaults to the last user)
        #[arg(long)]
        user: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace the word list with a CSV file
    Upload {
        /// CSV with header word,meaning,synonyms,antonyms,example
        file: PathBuf,

        /// Admin passcode
        #[arg(long, env = "VOCAB_ADMIN_PASSCODE")]
        passcode: String,
    },

    /// Go back to the default word list
    ResetWords {
        /// Admin passcode
        #[arg(long, env = "VOCAB_ADMIN_PASSCODE")]
        passcode: String,
    },

    /// Show progress for every student
    Admin {
        /// Admin passcode
        #[arg(long, env = "VOCAB_ADMIN_PASSCODE")]
        passcode: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the active word list as CSV
    Words,
}

/// How an interactive quiz ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEnd {
    Completed,
    Abandoned,
}

#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Selected(String),
    Quit,
    Unknown,
}

/// Run the parsed command against the store named by `config`.
pub async fn execute(cli: Cli, mut config: Config) -> anyhow::Result<()> {
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    tracing::debug!(path = %config.db_path.display(), "opening store");
    let store = SqliteStore::open(&config.db_path)?;
    let mut state = AppState::new(store, config);

    match cli.command {
        Commands::Study { user } => study(&mut state, user.as_deref()).await,
        Commands::Dashboard { user, json } => {
            let username = commands::resolve_username(&state, user.as_deref())?;
            let board = commands::dashboard(&state, &username);
            if json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                print_dashboard(&board);
            }
            Ok(())
        }
        Commands::Upload { file, passcode } => {
            let count = commands::upload_words(&state, &passcode, &file).await?;
            println!("Loaded {count} words from {}.", file.display());
            Ok(())
        }
        Commands::ResetWords { passcode } => {
            commands::reset_words(&state, &passcode)?;
            println!("Word list reset to the default.");
            Ok(())
        }
        Commands::Admin { passcode, json } => {
            let rows = commands::admin_overview(&state, &passcode)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
                return Ok(());
            }
            if rows.is_empty() {
                println!("No student progress recorded yet.");
            }
            for row in rows {
                println!(
                    "{:<20} words: {:>4}  attempts: {:>5}  correct: {:>5}  accuracy: {:>3}%",
                    row.username,
                    row.summary.word_count,
                    row.summary.total_attempts,
                    row.summary.total_correct,
                    row.summary.accuracy_percent
                );
            }
            Ok(())
        }
        Commands::Words => {
            print!("{}", commands::export_words(&state).await);
            Ok(())
        }
    }
}

async fn study(state: &mut AppState, user: Option<&str>) -> anyhow::Result<()> {
    let username = commands::resolve_username(state, user)?;
    let pool = commands::load_word_pool(state).await;
    if pool.is_empty() {
        println!("No words available. Ask an admin to upload a word list.");
        return Ok(());
    }

    let mut session = commands::start_session(state, &pool);
    println!("Hello {username}, {} words this session. Type :q to stop.", session.size());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    match run_quiz(state, &mut session, &mut input, &mut out)? {
        QuizEnd::Completed => {
            let report = commands::finish_session(state, &username, &session)?;
            println!(
                "Session complete: {} of {} answers correct ({}%).",
                report.correct, report.answered, report.accuracy_percent
            );
        }
        QuizEnd::Abandoned => println!("\nSession stopped, nothing was recorded."),
    }
    Ok(())
}

/// Present cards from `session` until it completes or the user quits.
pub fn run_quiz<R: BufRead, W: Write>(
    state: &mut AppState,
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<QuizEnd> {
    loop {
        let card = match session.draw_next() {
            Some(card) => card.clone(),
            None => return Ok(QuizEnd::Completed),
        };

        writeln!(out, "----------------------------------------")?;
        writeln!(out, "What is a synonym of \"{}\"?", card.entry.word)?;
        for (index, option) in card.options.iter().enumerate() {
            writeln!(out, "[{}]: {}", index + 1, option)?;
        }

        let selected = loop {
            write!(out, "Enter the correct answer: ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(QuizEnd::Abandoned);
            }
            match interpret_reply(line.trim(), &card.options) {
                Reply::Selected(option) => break option,
                Reply::Quit => return Ok(QuizEnd::Abandoned),
                Reply::Unknown => {
                    writeln!(out, "Couldn't understand your answer, please try again.")?
                }
            }
        };

        let outcome = commands::submit_answer(state, session, &selected)?;
        if outcome.correct {
            writeln!(out, "Correct. Well done!")?;
        } else {
            writeln!(
                out,
                "Incorrect. The right answer is {}. This word will come back later.",
                outcome.correct_answer
            )?;
            if !card.entry.example.is_empty() {
                writeln!(out, "  e.g. {}", card.entry.example)?;
            }
        }
    }
}

/// Accept an option number, the option text, or a quit command.
fn interpret_reply(reply: &str, options: &[String]) -> Reply {
    match reply.to_lowercase().as_str() {
        ":q" | ":quit" => return Reply::Quit,
        "" => return Reply::Unknown,
        _ => {}
    }

    if let Ok(number) = reply.parse::<usize>() {
        return match options.get(number.wrapping_sub(1)) {
            Some(option) => Reply::Selected(option.clone()),
            None => Reply::Unknown,
        };
    }

    options
        .iter()
        .find(|option| option.to_lowercase() == reply.to_lowercase())
        .map(|option| Reply::Selected(option.clone()))
        .unwrap_or(Reply::Unknown)
}

fn print_dashboard(board: &commands::Dashboard) {
    println!("Progress for {}", board.username);
    println!(
        "  words practised: {}  attempts: {}  correct: {}  accuracy: {}%",
        board.summary.word_count,
        board.summary.total_attempts,
        board.summary.total_correct,
        board.summary.accuracy_percent
    );
    for row in &board.words {
        println!(
            "  {:<20} {:>3}/{:<3} {:>3}%",
            row.word, row.correct, row.attempts, row.accuracy_percent
        );
    }
}
