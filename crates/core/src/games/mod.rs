//! Game modes and question-set builders.
//!
//! Each builder takes the corpus, a [`LevelConfig`] and an injected RNG and
//! returns self-contained records sized `min(question_count, achievable)`.
//! [`build_question_set`] dispatches on [`GameMode`] and records metrics.
//!
//! # Example
//!
//! ```ignore
//! use gita_core::games::{build_question_set, GameMode, LevelConfig};
//! use gita_core::sampler::seeded_rng;
//!
//! let mut rng = seeded_rng(None);
//! let level = LevelConfig::new(5).with_options(3);
//! let set = build_question_set(GameMode::Quiz, &corpus, &level, &mut rng)?;
//! ```

mod builder;
pub mod catalog;
pub mod chapter_match;
mod error;
pub mod fill_blank;
pub mod memory;
pub mod quiz;
pub mod translation_match;
mod types;

pub use builder::build_question_set;
pub use catalog::{
    catalog_sections, find_level, game_modes, mode_definition, GameCatalogSection,
    GameDifficulty, GameLevel, GameModeDefinition,
};
pub use chapter_match::build_chapter_match_questions;
pub use error::GameError;
pub use fill_blank::build_fill_blank_questions;
pub use memory::build_memory_cards;
pub use quiz::build_quiz_questions;
pub use translation_match::build_translation_rounds;
pub use types::{
    CardKind, ChapterMatchQuestion, FillBlankQuestion, GameMode, LevelConfig, MemoryCard,
    QuestionSet, QuizQuestion, TranslationCard, TranslationRound, TranslationTarget, VerseRef,
    DEFAULT_OPTION_COUNT,
};
