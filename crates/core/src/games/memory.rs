//! Memory board: pair each transliteration with its translation.

use rand::Rng;

use super::{CardKind, GameError, LevelConfig, MemoryCard};
use crate::corpus::{Corpus, Language};
use crate::sampler::{pick_random_verses, shuffled, SampleOptions};
use crate::text::normalize_whitespace;

/// Two cards per sampled verse, dealt in shuffled order.
///
/// The pair count is `pairs`, falling back to `question_count`.
pub fn build_memory_cards<R: Rng + ?Sized>(
    corpus: &Corpus,
    level: &LevelConfig,
    rng: &mut R,
) -> Result<Vec<MemoryCard>, GameError> {
    level.validate()?;
    let pair_count = level.pairs.unwrap_or(level.question_count) as usize;

    let verses = pick_random_verses(corpus, pair_count, &SampleOptions::default(), rng);

    let deck: Vec<MemoryCard> = verses
        .into_iter()
        .flat_map(|verse| {
            let reference = verse.reference();
            [
                MemoryCard {
                    id: format!("{}-transliteration", verse.id),
                    pair_id: verse.id.clone(),
                    kind: CardKind::Transliteration,
                    content: normalize_whitespace(&verse.transliteration),
                    reference: reference.clone(),
                },
                MemoryCard {
                    id: format!("{}-translation", verse.id),
                    pair_id: verse.id.clone(),
                    kind: CardKind::Translation,
                    content: normalize_whitespace(verse.text_in(Language::English)),
                    reference,
                },
            ]
        })
        .collect();

    Ok(shuffled(deck, rng))
}
