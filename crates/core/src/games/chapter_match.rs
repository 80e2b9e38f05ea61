//! Identify which chapter an excerpt belongs to.

use rand::Rng;

use super::{ChapterMatchQuestion, GameError, LevelConfig, VerseRef};
use crate::corpus::{Corpus, Language};
use crate::distractors::chapter_distractors;
use crate::sampler::{pick_random_verses, shuffled, SampleOptions};
use crate::text::verse_snippet;

pub const EXCERPT_LEN: usize = 180;
pub const PROMPT: &str = "Which chapter contains this verse?";
const MIN_OPTIONS: u32 = 3;

pub fn build_chapter_match_questions<R: Rng + ?Sized>(
    corpus: &Corpus,
    level: &LevelConfig,
    rng: &mut R,
) -> Result<Vec<ChapterMatchQuestion>, GameError> {
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
            let answer = verse.chapter_number;
            let mut options = chapter_distractors(corpus, answer, option_count - 1, rng)?;
            options.push(answer);

            Ok(ChapterMatchQuestion {
                verse: VerseRef::from(verse),
                prompt: PROMPT.to_string(),
                excerpt: verse_snippet(verse, Language::English, EXCERPT_LEN),
                options: shuffled(options, rng),
                answer,
            })
        })
        .collect()
}
