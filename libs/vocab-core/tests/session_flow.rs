//! End-to-end flow: word list upload, quiz session, progress persistence.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vocab_core::words::{replace_words, stored_words};
use vocab_core::{
    compute_summary, load_progress, update_progress, MemoryStore, Session, WordStats,
};

const WORDS: &str = "word,meaning,synonyms,antonyms,example
big,of great size,large;huge,small,A big house.
fast,moving quickly,quick;rapid,slow,A fast car.
happy,feeling joy,glad|joyful,sad,A happy child.
small,of little size,tiny;little,big,A small mouse.
brave,\"showing courage, unafraid\",bold;valiant,cowardly,A brave knight.
";

#[test]
fn completed_session_is_persisted() {
    let store = MemoryStore::new();
    replace_words(&store, WORDS).unwrap();
    let pool = stored_words(&store).unwrap();
    assert_eq!(pool.len(), 5);

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut session = Session::build(&pool, &mut rng);
    assert_eq!(session.size(), 5);

    // Miss "fast" once, answer everything else correctly.
    let mut missed_fast = false;
    while let Some(card) = session.draw_next().cloned() {
        assert_eq!(card.options.len(), 4);
        let answer = if card.entry.word == "fast" && !missed_fast {
            missed_fast = true;
            card.options
                .iter()
                .find(|o| **o != card.correct_answer)
                .cloned()
                .unwrap()
        } else {
            card.correct_answer.clone()
        };
        session.submit_answer(&answer, &mut rng).unwrap();
    }

    assert!(session.is_complete());
    assert_eq!(session.results().len(), 6);
    update_progress(&store, "ada", session.results()).unwrap();

    let progress = load_progress(&store);
    let words = &progress["ada"];
    assert_eq!(words["fast"], WordStats { attempts: 2, correct: 1 });
    assert_eq!(words["big"], WordStats { attempts: 1, correct: 1 });

    let summary = compute_summary(words);
    assert_eq!(summary.word_count, 5);
    assert_eq!(summary.total_attempts, 6);
    assert_eq!(summary.total_correct, 5);
    assert_eq!(summary.accuracy_percent, 83);
}

#[test]
fn abandoned_session_records_nothing() {
    let store = MemoryStore::new();
    replace_words(&store, WORDS).unwrap();
    let pool = stored_words(&store).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut session = Session::build(&pool, &mut rng);
    let card = session.draw_next().cloned().unwrap();
    session.submit_answer(&card.correct_answer, &mut rng).unwrap();
    drop(session);

    assert!(load_progress(&store).is_empty());
}
