//! Game modes, level configuration and the question records each builder
//! returns.
//!
//! Every record is self-contained: it copies the text it needs out of the
//! corpus and holds no reference back to it, so a built set can be
//! serialized, moved across threads, and kept for the whole level attempt.

use serde::{Deserialize, Serialize};

use super::GameError;
use crate::corpus::{Language, Verse};

/// Answer options shown when a level does not say otherwise.
pub const DEFAULT_OPTION_COUNT: u32 = 4;

// ============================================================================
// Modes and level configuration
// ============================================================================

/// The five game modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    Quiz,
    ChapterMatch,
    TranslationMatch,
    FillBlank,
    Memory,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::Quiz,
        GameMode::ChapterMatch,
        GameMode::TranslationMatch,
        GameMode::FillBlank,
        GameMode::Memory,
    ];

    /// Stable id used in URLs and metrics labels.
    pub fn id(&self) -> &'static str {
        match self {
            GameMode::Quiz => "quiz",
            GameMode::ChapterMatch => "chapter-match",
            GameMode::TranslationMatch => "translation-match",
            GameMode::FillBlank => "fill-blank",
            GameMode::Memory => "memory",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.id() == id)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| GameError::UnknownMode(s.to_string()))
    }
}

/// Parameters of one difficulty tier of a game mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    /// Questions (or rounds) per level.
    pub question_count: u32,
    /// Answer options per question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<u32>,
    /// Verse pairs on a memory board.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pairs: Option<u32>,
    /// Verses per translation-match round.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse_batch: Option<u32>,
    /// Soft time guidance for the UI; the builders ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_seconds: Option<u32>,
}

impl LevelConfig {
    pub fn new(question_count: u32) -> Self {
        Self {
            question_count,
            options: None,
            pairs: None,
            verse_batch: None,
            time_limit_seconds: None,
        }
    }

    pub fn with_options(mut self, options: u32) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_pairs(mut self, pairs: u32) -> Self {
        self.pairs = Some(pairs);
        self
    }

    pub fn with_verse_batch(mut self, verse_batch: u32) -> Self {
        self.verse_batch = Some(verse_batch);
        self
    }

    pub fn with_time_limit(mut self, seconds: u32) -> Self {
        self.time_limit_seconds = Some(seconds);
        self
    }

    /// Reject degenerate configurations before any sampling happens.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.question_count == 0 {
            return Err(GameError::invalid_config(
                "questionCount must be at least 1",
            ));
        }
        if matches!(self.options, Some(n) if n < 2) {
            return Err(GameError::invalid_config("options must be at least 2"));
        }
        if self.pairs == Some(0) {
            return Err(GameError::invalid_config("pairs must be at least 1"));
        }
        if self.verse_batch == Some(0) {
            return Err(GameError::invalid_config("verseBatch must be at least 1"));
        }
        Ok(())
    }

    /// Option count for a mode that never shows fewer than `floor` options.
    pub(crate) fn option_count(&self, floor: u32) -> usize {
        self.options.unwrap_or(DEFAULT_OPTION_COUNT).max(floor) as usize
    }
}

// ============================================================================
// Shared record pieces
// ============================================================================

/// Copy of the identifying fields of the verse a question was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseRef {
    pub id: String,
    pub chapter_number: u32,
    pub verse_number: u32,
    /// Citation label, e.g. `BG 2.47`.
    pub reference: String,
}

impl From<&Verse> for VerseRef {
    fn from(verse: &Verse) -> Self {
        Self {
            id: verse.id.clone(),
            chapter_number: verse.chapter_number,
            verse_number: verse.verse_number,
            reference: verse.reference(),
        }
    }
}

// ============================================================================
// Per-mode records
// ============================================================================

/// Multiple choice: pick the English translation of the prompted verse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub verse: VerseRef,
    pub prompt: String,
    /// Transliteration snippet shown as a hint.
    pub transliteration: String,
    pub options: Vec<String>,
    pub answer: String,
    /// Feedback shown after answering.
    pub context: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }
}

/// Pick the chapter an excerpt comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterMatchQuestion {
    pub verse: VerseRef,
    pub prompt: String,
    pub excerpt: String,
    pub options: Vec<u32>,
    pub answer: u32,
}

impl ChapterMatchQuestion {
    pub fn is_correct(&self, chapter_number: u32) -> bool {
        self.answer == chapter_number
    }
}

/// Restore the word hidden behind the placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillBlankQuestion {
    pub verse: VerseRef,
    pub prompt: String,
    pub masked_text: String,
    pub correct_word: String,
    pub options: Vec<String>,
    pub context: String,
}

impl FillBlankQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_word == option
    }
}

/// One verse rendering in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationCard {
    /// `{verse_id}-{language}`; shared with exactly one target.
    pub id: String,
    pub verse: VerseRef,
    pub language: Language,
    pub text: String,
    pub translator: String,
    pub reference: String,
}

/// A language + reference slot a card must be dropped on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationTarget {
    pub id: String,
    pub label: String,
    pub language: Language,
}

/// One translation-match round: every card must be matched to its target.
///
/// Cards and targets are shuffled independently; matching compares ids, not
/// text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRound {
    pub id: String,
    pub cards: Vec<TranslationCard>,
    pub targets: Vec<TranslationTarget>,
}

impl TranslationRound {
    /// Whether dropping `card_id` on `target_id` is a correct match.
    pub fn is_match(&self, card_id: &str, target_id: &str) -> bool {
        card_id == target_id
            && self.cards.iter().any(|card| card.id == card_id)
            && self.targets.iter().any(|target| target.id == target_id)
    }

    /// Matches needed to clear the round.
    pub fn match_count(&self) -> usize {
        self.cards.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Transliteration,
    Translation,
}

/// A face-down card on the memory board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryCard {
    pub id: String,
    /// Shared by exactly two cards: the verse id.
    pub pair_id: String,
    pub kind: CardKind,
    pub content: String,
    pub reference: String,
}

impl MemoryCard {
    pub fn pairs_with(&self, other: &MemoryCard) -> bool {
        self.pair_id == other.pair_id && self.id != other.id
    }
}

/// A built level, tagged by mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "items", rename_all = "kebab-case")]
pub enum QuestionSet {
    Quiz(Vec<QuizQuestion>),
    ChapterMatch(Vec<ChapterMatchQuestion>),
    TranslationMatch(Vec<TranslationRound>),
    FillBlank(Vec<FillBlankQuestion>),
    Memory(Vec<MemoryCard>),
}

impl QuestionSet {
    pub fn mode(&self) -> GameMode {
        match self {
            QuestionSet::Quiz(_) => GameMode::Quiz,
            QuestionSet::ChapterMatch(_) => GameMode::ChapterMatch,
            QuestionSet::TranslationMatch(_) => GameMode::TranslationMatch,
            QuestionSet::FillBlank(_) => GameMode::FillBlank,
            QuestionSet::Memory(_) => GameMode::Memory,
        }
    }

    /// Number of items (questions, rounds, or cards for memory).
    pub fn len(&self) -> usize {
        match self {
            QuestionSet::Quiz(items) => items.len(),
            QuestionSet::ChapterMatch(items) => items.len(),
            QuestionSet::TranslationMatch(items) => items.len(),
            QuestionSet::FillBlank(items) => items.len(),
            QuestionSet::Memory(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
