//! Multiple-choice translation quiz.

use std::collections::HashSet;

use rand::Rng;

use super::{GameError, LevelConfig, QuizQuestion, VerseRef};
use crate::corpus::{Corpus, Language};
use crate::distractors::translation_distractors;
use crate::sampler::{pick_random_verses, shuffled, SampleOptions};
use crate::text::{normalize_whitespace, truncate_at_word, verse_snippet};

pub const TRANSLITERATION_SNIPPET_LEN: usize = 140;
pub const CONTEXT_SNIPPET_LEN: usize = 200;
const MIN_OPTIONS: u32 = 2;

/// One question per sampled verse; the answer is the verse's English text.
pub fn build_quiz_questions<R: Rng + ?Sized>(
    corpus: &Corpus,
    level: &LevelConfig,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>, GameError> {
    level.validate()?;
    let option_count = level.option_count(MIN_OPTIONS);

    let verses = pick_random_verses(
        corpus,
        level.question_count as usize,
        &SampleOptions::default(),
        rng,
    );

    verses
        .into_iter()
        .map(|verse| {
            let answer = normalize_whitespace(verse.text_in(Language::English));
            let exclude = HashSet::from([verse.id.clone()]);
            let mut options = translation_distractors(corpus, option_count - 1, &exclude, rng)?;
            options.push(answer.clone());

            Ok(QuizQuestion {
                verse: VerseRef::from(verse),
                prompt: verse.prompt(),
                transliteration: truncate_at_word(
                    &normalize_whitespace(&verse.transliteration),
                    TRANSLITERATION_SNIPPET_LEN,
                ),
                options: shuffled(options, rng),
                answer,
                context: verse_snippet(verse, Language::English, CONTEXT_SNIPPET_LEN),
            })
        })
        .collect()
}
