//! Single entry point that builds a level for any game mode.

use rand::Rng;
use tracing::{debug, warn};

use super::chapter_match::build_chapter_match_questions;
use super::fill_blank::build_fill_blank_questions;
use super::memory::build_memory_cards;
use super::quiz::build_quiz_questions;
use super::translation_match::build_translation_rounds;
use super::{GameError, GameMode, LevelConfig, QuestionSet};
use crate::corpus::Corpus;
use crate::metrics;

/// Build the question set for one level attempt of `mode`.
///
/// A set the corpus cannot populate at all is reported as
/// [`GameError::EmptyQuestionSet`] rather than returned empty.
pub fn build_question_set<R: Rng + ?Sized>(
    mode: GameMode,
    corpus: &Corpus,
    level: &LevelConfig,
    rng: &mut R,
) -> Result<QuestionSet, GameError> {
    let result = match mode {
        GameMode::Quiz => build_quiz_questions(corpus, level, rng).map(QuestionSet::Quiz),
        GameMode::ChapterMatch => {
            build_chapter_match_questions(corpus, level, rng).map(QuestionSet::ChapterMatch)
        }
        GameMode::TranslationMatch => {
            build_translation_rounds(corpus, level, rng).map(QuestionSet::TranslationMatch)
        }
        GameMode::FillBlank => {
            build_fill_blank_questions(corpus, level, rng).map(QuestionSet::FillBlank)
        }
        GameMode::Memory => build_memory_cards(corpus, level, rng).map(QuestionSet::Memory),
    }
    .and_then(|set| {
        if set.is_empty() {
            Err(GameError::EmptyQuestionSet {
                mode: mode.id().to_string(),
            })
        } else {
            Ok(set)
        }
    });

    match &result {
        Ok(set) => {
            metrics::QUESTION_SETS_BUILT
                .with_label_values(&[mode.id()])
                .inc();
            metrics::QUESTIONS_PER_SET
                .with_label_values(&[mode.id()])
                .observe(set.len() as f64);
            debug!(
                mode = %mode,
                requested = level.question_count,
                items = set.len(),
                "Built question set"
            );
        }
        Err(e) => {
            metrics::QUESTION_SETS_REJECTED
                .with_label_values(&[mode.id(), rejection_reason(e)])
                .inc();
            warn!(mode = %mode, error = %e, "Question set rejected");
        }
    }

    result
}

fn rejection_reason(error: &GameError) -> &'static str {
    match error {
        GameError::InvalidConfig { .. } => "invalid_config",
        GameError::InsufficientPool { .. } => "insufficient_pool",
        GameError::EmptyQuestionSet { .. } => "empty",
        GameError::UnknownMode(_) | GameError::UnknownLevel { .. } => "unknown",
    }
}
