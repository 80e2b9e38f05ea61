//! Restore the word missing from a verse.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{FillBlankQuestion, GameError, LevelConfig, VerseRef};
use crate::corpus::{Corpus, Language};
use crate::distractors::word_distractors;
use crate::sampler::{pick_random_verses, shuffled, SampleOptions};
use crate::text::{blankable_words, mask_word, normalize_whitespace, verse_snippet};

pub const CONTEXT_SNIPPET_LEN: usize = 180;
/// Sampling attempts allowed per requested question.
pub const ATTEMPTS_PER_QUESTION: u32 = 5;
const MIN_OPTIONS: u32 = 3;

/// Verses without a blankable word are skipped and another verse is drawn,
/// up to `question_count * ATTEMPTS_PER_QUESTION` draws. A drawn verse is
/// never drawn again within the level.
pub fn build_fill_blank_questions<R: Rng + ?Sized>(
    corpus: &Corpus,
    level: &LevelConfig,
    rng: &mut R,
) -> Result<Vec<FillBlankQuestion>, GameError> {
    level.validate()?;
    let option_count = level.option_count(MIN_OPTIONS);
    let wanted = level.question_count as usize;
    let max_attempts = level.question_count.saturating_mul(ATTEMPTS_PER_QUESTION);

    let mut used: HashSet<String> = HashSet::new();
    let mut questions = Vec::with_capacity(wanted.min(corpus.total_verse_count()));
    let mut attempts = 0;

    while questions.len() < wanted && attempts < max_attempts {
        attempts += 1;

        let Some(verse) = pick_random_verses(corpus, 1, &SampleOptions::excluding(&used), rng)
            .into_iter()
            .next()
        else {
            break;
        };
        used.insert(verse.id.clone());

        let text = normalize_whitespace(verse.text_in(Language::English));
        let candidates = blankable_words(&text);
        let Some(blank) = candidates.choose(rng) else {
            continue;
        };

        let mut options = word_distractors(corpus, option_count - 1, &blank.word, rng)?;
        options.push(blank.word.clone());

        questions.push(FillBlankQuestion {
            verse: VerseRef::from(verse),
            prompt: verse.prompt(),
            masked_text: mask_word(&text, blank),
            correct_word: blank.word.clone(),
            options: shuffled(options, rng),
            context: verse_snippet(verse, Language::English, CONTEXT_SNIPPET_LEN),
        });
    }

    Ok(questions)
}
