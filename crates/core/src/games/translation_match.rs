//! Match each verse rendering to its language and reference.

use std::collections::HashSet;

use rand::Rng;

use super::{GameError, LevelConfig, TranslationCard, TranslationRound, TranslationTarget, VerseRef};
use crate::corpus::{Corpus, Language, Verse};
use crate::sampler::{pick_random_verses, shuffled, SampleOptions};
use crate::text::normalize_whitespace;

pub fn round_id(index: usize) -> String {
    format!("translation-round-{}", index)
}

/// One card per language for `verse`, in canonical language order.
pub fn verse_cards(verse: &Verse) -> Vec<TranslationCard> {
    let reference = verse.reference();
    Language::ALL
        .into_iter()
        .map(|language| TranslationCard {
            id: format!("{}-{}", verse.id, language.key()),
            verse: VerseRef::from(verse),
            language,
            text: normalize_whitespace(verse.text_in(language)),
            translator: verse.translators.get(language).clone(),
            reference: reference.clone(),
        })
        .collect()
}

fn target_for(card: &TranslationCard) -> TranslationTarget {
    TranslationTarget {
        id: card.id.clone(),
        label: format!("{} · {}", card.language.label(), card.reference),
        language: card.language,
    }
}

/// `question_count` rounds of `verse_batch` verses each.
///
/// Verses never repeat across the rounds of one level. Rounds stop early
/// once the corpus runs out of unused verses.
pub fn build_translation_rounds<R: Rng + ?Sized>(
    corpus: &Corpus,
    level: &LevelConfig,
    rng: &mut R,
) -> Result<Vec<TranslationRound>, GameError> {
    level.validate()?;
    let batch = level.verse_batch.unwrap_or(1).max(1) as usize;

    let mut used: HashSet<String> = HashSet::new();
    let max_rounds = (level.question_count as usize)
        .min(corpus.total_verse_count().div_ceil(batch));
    let mut rounds = Vec::with_capacity(max_rounds);

    for index in 0..max_rounds {
        let verses = pick_random_verses(corpus, batch, &SampleOptions::excluding(&used), rng);
        if verses.is_empty() {
            break;
        }

        let cards: Vec<TranslationCard> = verses.iter().flat_map(|v| verse_cards(v)).collect();
        let targets: Vec<TranslationTarget> = cards.iter().map(target_for).collect();
        used.extend(verses.iter().map(|verse| verse.id.clone()));

        rounds.push(TranslationRound {
            id: round_id(index),
            cards: shuffled(cards, rng),
            targets: shuffled(targets, rng),
        });
    }

    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::seeded_rng;
    use crate::testing::fixtures;

    #[test]
    fn test_rounds_have_three_cards_per_verse() {
        let corpus = fixtures::gita_shaped_corpus();
        let mut rng = seeded_rng(Some(30));
        let level = LevelConfig::new(4).with_verse_batch(2);

        let rounds = build_translation_rounds(&corpus, &level, &mut rng).unwrap();
        assert_eq!(rounds.len(), 4);

        for (index, round) in rounds.iter().enumerate() {
            assert_eq!(round.id, format!("translation-round-{}", index));
            assert_eq!(round.cards.len(), 6);
            assert_eq!(round.targets.len(), 6);

            let card_ids: HashSet<&str> = round.cards.iter().map(|c| c.id.as_str()).collect();
            let target_ids: HashSet<&str> = round.targets.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(card_ids, target_ids);

            for card in &round.cards {
                assert!(round.is_match(&card.id, &card.id));
                assert_eq!(card.id, format!("{}-{}", card.verse.id, card.language));
            }
        }
    }

    #[test]
    fn test_verses_not_reused_across_rounds() {
        let corpus = fixtures::synthetic_corpus(2, 5);
        let mut rng = seeded_rng(Some(31));
        let level = LevelConfig::new(5).with_verse_batch(2);

        let rounds = build_translation_rounds(&corpus, &level, &mut rng).unwrap();
        let mut seen = HashSet::new();
        for round in &rounds {
            let verses: HashSet<&str> = round.cards.iter().map(|c| c.verse.id.as_str()).collect();
            for verse in verses {
                assert!(seen.insert(verse.to_string()), "verse {} reused", verse);
            }
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_rounds_stop_when_corpus_exhausted() {
        let corpus = fixtures::synthetic_corpus(1, 3);
        let mut rng = seeded_rng(Some(32));
        let level = LevelConfig::new(5).with_verse_batch(2);

        let rounds = build_translation_rounds(&corpus, &level, &mut rng).unwrap();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].cards.len(), 6);
        assert_eq!(rounds[1].cards.len(), 3);
    }

    #[test]
    fn test_default_batch_is_one() {
        let corpus = fixtures::synthetic_corpus(2, 4);
        let mut rng = seeded_rng(Some(33));

        let rounds = build_translation_rounds(&corpus, &LevelConfig::new(3), &mut rng).unwrap();
        assert_eq!(rounds.len(), 3);
        assert!(rounds.iter().all(|r| r.cards.len() == 3));
    }

    #[test]
    fn test_card_content_and_labels() {
        let corpus = fixtures::synthetic_corpus(1, 1);
        let verse = corpus.get_verse(1, 1).unwrap();
        let cards = verse_cards(verse);

        assert_eq!(cards.len(), 3);
        let hindi = &cards[1];
        assert_eq!(hindi.id, "BG1.1-hindi");
        assert_eq!(hindi.language, Language::Hindi);
        assert_eq!(hindi.translator, "Swami Tejomayananda");
        assert_eq!(hindi.reference, "BG 1.1");
        assert_eq!(hindi.text, verse.text.hindi);

        assert_eq!(target_for(hindi).label, "Hindi · BG 1.1");
    }

    #[test]
    fn test_mismatched_ids_do_not_match() {
        let corpus = fixtures::synthetic_corpus(1, 4);
        let mut rng = seeded_rng(Some(34));
        let rounds = build_translation_rounds(
            &corpus,
            &LevelConfig::new(1).with_verse_batch(2),
            &mut rng,
        )
        .unwrap();
        let round = &rounds[0];

        for card in &round.cards {
            for target in &round.targets {
                assert_eq!(round.is_match(&card.id, &target.id), card.id == target.id);
            }
        }
    }

    #[test]
    fn test_huge_round_count_is_capped_by_corpus() {
        let corpus = fixtures::synthetic_corpus(2, 3);
        let mut rng = seeded_rng(Some(36));
        let level = LevelConfig::new(u32::MAX).with_verse_batch(4);

        let rounds = build_translation_rounds(&corpus, &level, &mut rng).unwrap();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].cards.len(), 12);
        assert_eq!(rounds[1].cards.len(), 6);
    }
}
