//! Uploaded word list persistence.

use crate::error::{StoreError, UploadError};
use crate::parser;
use crate::storage::{KeyValueStore, WORDS_KEY};
use crate::types::WordEntry;

/// The uploaded word list, if one is stored and readable.
pub fn stored_words<S: KeyValueStore + ?Sized>(store: &S) -> Option<Vec<WordEntry>> {
    let raw = match store.get(WORDS_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read stored word list");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => Some(entries),
        Err(e) => {
            tracing::warn!(error = %e, "corrupt stored word list, ignoring");
            None
        }
    }
}

/// Replace the stored word list with the entries parsed from `csv`.
///
/// An upload with no valid entries is rejected and the store is left as is.
pub fn replace_words<S: KeyValueStore + ?Sized>(store: &S, csv: &str) -> Result<usize, UploadError> {
    let entries = parser::parse(csv);
    if entries.is_empty() {
        return Err(UploadError::NoValidEntries);
    }

    let raw = serde_json::to_string(&entries).map_err(|source| StoreError::Serialize {
        key: WORDS_KEY,
        source,
    })?;
    store.set(WORDS_KEY, &raw)?;

    tracing::info!(entries = entries.len(), "word list replaced");
    Ok(entries.len())
}

/// Drop the uploaded word list so the default source applies again.
pub fn clear_words<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), StoreError> {
    store.remove(WORDS_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const CSV: &str = "word,meaning,synonyms,antonyms,example\ncat,feline,kitty,dog,A cat sat.\nbig,large,huge,small,A big dog.\n";

    #[test]
    fn upload_replaces_stored_words() {
        let store = MemoryStore::new();
        assert_eq!(replace_words(&store, CSV).unwrap(), 2);

        let words = stored_words(&store).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].word, "big");

        let replacement = "word,meaning,synonyms,antonyms,example\nowl,bird,fowl,,An owl.\n";
        assert_eq!(replace_words(&store, replacement).unwrap(), 1);
        assert_eq!(stored_words(&store).unwrap()[0].word, "owl");
    }

    #[test]
    fn upload_without_valid_entries_leaves_store_unchanged() {
        let store = MemoryStore::new();
        replace_words(&store, CSV).unwrap();

        let result = replace_words(&store, "word,meaning\nonly,three,fields\n");
        assert!(matches!(result, Err(UploadError::NoValidEntries)));
        assert_eq!(stored_words(&store).unwrap().len(), 2);
    }

    #[test]
    fn missing_or_corrupt_words_are_absent() {
        let store = MemoryStore::new();
        assert!(stored_words(&store).is_none());

        store.set(WORDS_KEY, "[{oops").unwrap();
        assert!(stored_words(&store).is_none());
    }

    #[test]
    fn clear_words_restores_default() {
        let store = MemoryStore::new();
        replace_words(&store, CSV).unwrap();
        clear_words(&store).unwrap();
        assert!(stored_words(&store).is_none());
    }
}
