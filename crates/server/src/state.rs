use std::sync::{Arc, Mutex, PoisonError};

use gita_core::{seeded_rng, Config, Corpus};
use rand::rngs::StdRng;

/// Shared application state
pub struct AppState {
    config: Config,
    corpus: Arc<Corpus>,
    /// Seeded once from `games.seed`, so a fixed seed yields a reproducible
    /// sequence of question sets across requests.
    rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(config: Config, corpus: Arc<Corpus>) -> Self {
        let rng = Mutex::new(seeded_rng(config.games.seed));
        Self {
            config,
            corpus,
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn corpus(&self) -> &Corpus {
        self.corpus.as_ref()
    }

    /// Run `f` with exclusive access to the shared RNG.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}
