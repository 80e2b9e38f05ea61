pub mod config;
pub mod corpus;
pub mod distractors;
pub mod games;
pub mod metrics;
pub mod sampler;
pub mod scoring;
pub mod testing;
pub mod text;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, CorpusConfig,
    GamesConfig, ServerConfig,
};
pub use corpus::{
    load_corpus_dir, load_corpus_from_strs, Chapter, ChapterSummary, Corpus, CorpusError,
    Language, Verse,
};
pub use games::{build_question_set, GameError, GameMode, LevelConfig, QuestionSet};
pub use sampler::{pick_random_verses, seeded_rng, SampleOptions};
pub use scoring::{CompletionSummary, ScoringRules, SessionState};
