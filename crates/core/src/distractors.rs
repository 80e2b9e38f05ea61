//! Wrong-answer generation.
//!
//! Three strategies share one contract: no distractor equals the correct
//! answer and no two distractors are equal. Each strategy makes at most one
//! pass over its candidate pool; a request the pool cannot satisfy fails
//! with [`GameError::InsufficientPool`] instead of retrying.

use std::collections::HashSet;

use rand::Rng;

use crate::corpus::{Corpus, Language, Verse};
use crate::games::GameError;
use crate::sampler::{sample_without_replacement, shuffled};
use crate::text::{extract_words, is_vocabulary_word, normalize_whitespace};

/// Chapter numbers other than `correct`.
pub fn chapter_distractors<R: Rng + ?Sized>(
    corpus: &Corpus,
    correct: u32,
    count: usize,
    rng: &mut R,
) -> Result<Vec<u32>, GameError> {
    let pool: Vec<u32> = corpus
        .chapter_numbers()
        .into_iter()
        .filter(|&number| number != correct)
        .collect();

    if pool.len() < count {
        return Err(GameError::insufficient(
            "chapter distractors",
            count,
            pool.len(),
        ));
    }

    Ok(sample_without_replacement(&pool, count, rng))
}

/// Normalized English translations of verses outside `exclude_ids`.
///
/// Candidates are distinct by normalized text, and none equals the text of
/// an excluded verse.
pub fn translation_distractors<R: Rng + ?Sized>(
    corpus: &Corpus,
    count: usize,
    exclude_ids: &HashSet<String>,
    rng: &mut R,
) -> Result<Vec<String>, GameError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut seen: HashSet<String> = exclude_ids
        .iter()
        .filter_map(|id| corpus.get_verse_by_id(id))
        .map(english)
        .collect();

    let candidates: Vec<&Verse> = corpus
        .all_verses()
        .filter(|verse| !exclude_ids.contains(&verse.id))
        .collect();

    if candidates.len() < count {
        return Err(GameError::insufficient(
            "translation distractors",
            count,
            candidates.len(),
        ));
    }

    let mut picked = Vec::with_capacity(count);
    for verse in shuffled(candidates, rng) {
        let text = english(verse);
        if seen.insert(text.clone()) {
            picked.push(text);
            if picked.len() == count {
                return Ok(picked);
            }
        }
    }

    Err(GameError::insufficient(
        "translation distractors",
        count,
        picked.len(),
    ))
}

/// Vocabulary words (at least four letters) from the corpus English text.
///
/// Words are distinct case-insensitively and never equal `exclude_word`
/// ignoring case. The first spelling seen in corpus order is kept.
pub fn word_distractors<R: Rng + ?Sized>(
    corpus: &Corpus,
    count: usize,
    exclude_word: &str,
    rng: &mut R,
) -> Result<Vec<String>, GameError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(exclude_word.to_lowercase());

    let mut pool: Vec<&str> = Vec::new();
    for verse in corpus.all_verses() {
        for word in extract_words(verse.text_in(Language::English)) {
            if is_vocabulary_word(word) && seen.insert(word.to_lowercase()) {
                pool.push(word);
            }
        }
    }

    if pool.len() < count {
        return Err(GameError::insufficient("word distractors", count, pool.len()));
    }

    Ok(sample_without_replacement(&pool, count, rng)
        .into_iter()
        .map(str::to_string)
        .collect())
}

fn english(verse: &Verse) -> String {
    normalize_whitespace(verse.text_in(Language::English))
}
