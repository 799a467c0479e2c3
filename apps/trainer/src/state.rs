//! Application state.

use crate::config::Config;
use crate::db::SqliteStore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Everything a command needs: the store, the random source and settings.
pub struct AppState {
    pub store: SqliteStore,
    pub rng: ChaCha8Rng,
    pub config: Config,
}

impl AppState {
    pub fn new(store: SqliteStore, config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { store, rng, config }
    }
}
