//! Multiple-choice option generation.

use crate::types::WordEntry;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Number of options shown per card.
pub const OPTION_COUNT: usize = 4;
/// Number of incorrect options per card.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Build the shuffled option set for `entry`, drawing distractors from `pool`.
///
/// Distractors come from other entries' synonyms first, then from other
/// entries' headwords in pool order. Pools too small to fill the set are
/// padded with empty strings, so the result always has [`OPTION_COUNT`]
/// options with the correct answer exactly once.
pub fn generate_options<R: Rng + ?Sized>(
    entry: &WordEntry,
    pool: &[WordEntry],
    rng: &mut R,
) -> Vec<String> {
    let correct = entry.correct_answer();
    let correct_key = correct.to_lowercase();
    let own_synonyms: HashSet<String> = entry.synonyms.iter().map(|s| s.to_lowercase()).collect();

    let mut seen = HashSet::new();
    let mut candidates: Vec<&str> = pool
        .iter()
        .filter(|other| other.word != entry.word)
        .flat_map(|other| other.synonyms.iter())
        .filter(|synonym| {
            let key = synonym.to_lowercase();
            key != correct_key && seen.insert(key)
        })
        .map(String::as_str)
        .collect();
    candidates.shuffle(rng);

    let mut distractors: Vec<String> = candidates
        .into_iter()
        .filter(|candidate| !own_synonyms.contains(&candidate.to_lowercase()))
        .take(DISTRACTOR_COUNT)
        .map(str::to_string)
        .collect();

    if distractors.len() < DISTRACTOR_COUNT {
        fill_from_headwords(&mut distractors, entry, pool, &correct_key);
    }
    if distractors.len() < DISTRACTOR_COUNT {
        tracing::debug!(
            word = %entry.word,
            found = distractors.len(),
            "word pool too small, padding options with blanks"
        );
        distractors.resize(DISTRACTOR_COUNT, String::new());
    }

    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(correct.to_string());
    options.extend(distractors);
    options.shuffle(rng);
    options
}

fn fill_from_headwords(
    distractors: &mut Vec<String>,
    entry: &WordEntry,
    pool: &[WordEntry],
    correct_key: &str,
) {
    for other in pool {
        if distractors.len() == DISTRACTOR_COUNT {
            break;
        }
        if other.word == entry.word {
            continue;
        }
        let key = other.word.to_lowercase();
        if key == correct_key || distractors.iter().any(|d| d.to_lowercase() == key) {
            continue;
        }
        distractors.push(other.word.clone());
    }
}
