//! Random verse selection and the shuffle/sample primitives every builder
//! shares.
//!
//! Randomness is always injected: callers pass any `rand::Rng`. Production
//! code uses [`seeded_rng`] with `None` (entropy); tests pass a fixed seed and
//! get reproducible output.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::corpus::{Corpus, Verse};

/// Create the RNG used for one build: deterministic with a seed, entropy
/// otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Uniformly shuffle `items` (Fisher-Yates).
pub fn shuffled<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items
}

/// Draw up to `amount` items uniformly without replacement, in random order.
///
/// Returns every item (shuffled) when `amount >= items.len()`.
pub fn sample_without_replacement<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    amount: usize,
    rng: &mut R,
) -> Vec<T> {
    let amount = amount.min(items.len());
    let mut picked: Vec<T> = index::sample(rng, items.len(), amount)
        .into_iter()
        .map(|i| items[i].clone())
        .collect();
    // index::sample does not promise a shuffled order for every strategy.
    picked.shuffle(rng);
    picked
}

/// Restrictions applied before sampling.
#[derive(Default)]
pub struct SampleOptions<'a> {
    /// Verse ids that must not be returned.
    pub exclude_ids: Option<&'a HashSet<String>>,
    /// Only verses for which this returns `true` are eligible.
    pub filter: Option<&'a dyn Fn(&Verse) -> bool>,
}

impl<'a> SampleOptions<'a> {
    pub fn excluding(exclude_ids: &'a HashSet<String>) -> Self {
        Self {
            exclude_ids: Some(exclude_ids),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: &'a dyn Fn(&Verse) -> bool) -> Self {
        self.filter = Some(filter);
        self
    }

    fn admits(&self, verse: &Verse) -> bool {
        if self
            .exclude_ids
            .is_some_and(|excluded| excluded.contains(&verse.id))
        {
            return false;
        }
        self.filter.map_or(true, |filter| filter(verse))
    }
}

/// Pick up to `count` distinct verses uniformly at random.
///
/// The candidate pool is every verse admitted by `options`. When the pool is
/// not larger than `count` the whole pool comes back shuffled, so callers
/// must tolerate a shorter result.
pub fn pick_random_verses<'c, R: Rng + ?Sized>(
    corpus: &'c Corpus,
    count: usize,
    options: &SampleOptions<'_>,
    rng: &mut R,
) -> Vec<&'c Verse> {
    let pool: Vec<&Verse> = corpus
        .all_verses()
        .filter(|verse| options.admits(verse))
        .collect();

    if pool.len() <= count {
        return shuffled(pool, rng);
    }

    sample_without_replacement(&pool, count, rng)
}
