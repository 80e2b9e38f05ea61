//! The static game catalog: five modes with three levels each.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::{GameError, GameMode, LevelConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameDifficulty {
    Gentle,
    Steady,
    Intense,
}

/// A named level configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLevel {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub difficulty: GameDifficulty,
    #[serde(flatten)]
    pub config: LevelConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameModeDefinition {
    pub id: GameMode,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub focus: &'static str,
    pub levels: Vec<GameLevel>,
}

impl GameModeDefinition {
    pub fn level(&self, level_id: &str) -> Option<&GameLevel> {
        self.levels.iter().find(|level| level.id == level_id)
    }
}

/// A titled group of modes on the games landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameCatalogSection {
    pub title: &'static str,
    pub description: &'static str,
    pub modes: Vec<GameMode>,
}

impl GameCatalogSection {
    pub fn definitions(&self) -> impl Iterator<Item = &'static GameModeDefinition> + '_ {
        self.modes.iter().filter_map(|&mode| mode_definition(mode))
    }
}

fn level(
    id: &'static str,
    label: &'static str,
    description: &'static str,
    difficulty: GameDifficulty,
    config: LevelConfig,
) -> GameLevel {
    GameLevel {
        id,
        label,
        description,
        difficulty,
        config,
    }
}

static GAME_MODES: Lazy<Vec<GameModeDefinition>> = Lazy::new(|| {
    use GameDifficulty::*;

    vec![
        GameModeDefinition {
            id: GameMode::Quiz,
            name: "Wisdom Quiz",
            tagline: "Test your recall of the Gita's key teachings.",
            description: "Answer multiple-choice prompts drawn from translations and chapter insights to strengthen recall and comprehension.",
            focus: "Verse comprehension",
            levels: vec![
                level(
                    "quiz-gentle",
                    "Gentle Start",
                    "Five reflective prompts with focused options.",
                    Gentle,
                    LevelConfig::new(5).with_options(3).with_time_limit(180),
                ),
                level(
                    "quiz-steady",
                    "Steady Flow",
                    "Eight questions spanning chapters one through twelve.",
                    Steady,
                    LevelConfig::new(8).with_options(4).with_time_limit(210),
                ),
                level(
                    "quiz-intense",
                    "Deep Immersion",
                    "Twelve prompts with nuanced answer choices across the full text.",
                    Intense,
                    LevelConfig::new(12).with_options(5).with_time_limit(260),
                ),
            ],
        },
        GameModeDefinition {
            id: GameMode::ChapterMatch,
            name: "Verse to Chapter",
            tagline: "Identify where each teaching resides.",
            description: "Match verse excerpts to their home chapters to sharpen your sense of the Gita's narrative arc.",
            focus: "Context recognition",
            levels: vec![
                level(
                    "chapter-gentle",
                    "Guided Recognition",
                    "Six verses with nearby chapters as options.",
                    Gentle,
                    LevelConfig::new(6).with_options(4),
                ),
                level(
                    "chapter-steady",
                    "Steady Mapping",
                    "Nine excerpts weaving early and middle teachings.",
                    Steady,
                    LevelConfig::new(9).with_options(5),
                ),
                level(
                    "chapter-intense",
                    "Scholar's Challenge",
                    "Twelve verses crossing the entire narrative.",
                    Intense,
                    LevelConfig::new(12).with_options(6),
                ),
            ],
        },
        GameModeDefinition {
            id: GameMode::TranslationMatch,
            name: "Translation Alignment",
            tagline: "Link each translation to its language.",
            description: "Connect Sanskrit, Hindi, and English renderings to appreciate language nuance and translator voice.",
            focus: "Language fluency",
            levels: vec![
                level(
                    "translation-gentle",
                    "Single Verse Set",
                    "Match three translations for one verse at a time.",
                    Gentle,
                    LevelConfig::new(3).with_verse_batch(1),
                ),
                level(
                    "translation-steady",
                    "Dual Verse Flow",
                    "Two verses per round introduce subtle differences.",
                    Steady,
                    LevelConfig::new(4).with_verse_batch(2),
                ),
                level(
                    "translation-intense",
                    "Scholarly Bridge",
                    "Five challenging rounds blending nuanced vocabulary.",
                    Intense,
                    LevelConfig::new(5).with_verse_batch(2),
                ),
            ],
        },
        GameModeDefinition {
            id: GameMode::FillBlank,
            name: "Fill the Wisdom",
            tagline: "Restore key words within poignant verses.",
            description: "Complete pivotal phrases by identifying missing words from English translations.",
            focus: "Vocabulary recall",
            levels: vec![
                level(
                    "blank-gentle",
                    "Highlighted Support",
                    "Six verses with guiding choices to rebuild.",
                    Gentle,
                    LevelConfig::new(6).with_options(3),
                ),
                level(
                    "blank-steady",
                    "Flowing Lines",
                    "Eight verses with nuanced vocabulary shifts.",
                    Steady,
                    LevelConfig::new(8).with_options(4),
                ),
                level(
                    "blank-intense",
                    "Immersive Recall",
                    "Ten verses with richer distractors and phrasing.",
                    Intense,
                    LevelConfig::new(10).with_options(5),
                ),
            ],
        },
        GameModeDefinition {
            id: GameMode::Memory,
            name: "Memory Pairs",
            tagline: "Pair teachings across language and form.",
            description: "Flip cards to connect transliterations with their companion translations and consolidate memory.",
            focus: "Spatial recall",
            levels: vec![
                level(
                    "memory-gentle",
                    "Three Pair Bloom",
                    "Match three calming pairs with ample time.",
                    Gentle,
                    LevelConfig::new(3).with_pairs(3),
                ),
                level(
                    "memory-steady",
                    "Six Pair Garden",
                    "Six pairs spanning pivotal teachings.",
                    Steady,
                    LevelConfig::new(6).with_pairs(6),
                ),
                level(
                    "memory-intense",
                    "Eight Pair Constellation",
                    "Eight pairs blending early and late insights.",
                    Intense,
                    LevelConfig::new(8).with_pairs(8),
                ),
            ],
        },
    ]
});

static CATALOG_SECTIONS: Lazy<Vec<GameCatalogSection>> = Lazy::new(|| {
    vec![
        GameCatalogSection {
            title: "Recall & Insight",
            description: "Strengthen understanding of translated teachings and deepen vocabulary memory.",
            modes: vec![GameMode::Quiz, GameMode::FillBlank],
        },
        GameCatalogSection {
            title: "Connections & Context",
            description: "Link verses to their chapters, languages, and cross-lingual pairs.",
            modes: vec![
                GameMode::ChapterMatch,
                GameMode::TranslationMatch,
                GameMode::Memory,
            ],
        },
    ]
});

/// Every mode definition, in catalog order.
pub fn game_modes() -> &'static [GameModeDefinition] {
    &GAME_MODES
}

pub fn mode_definition(mode: GameMode) -> Option<&'static GameModeDefinition> {
    GAME_MODES.iter().find(|definition| definition.id == mode)
}

pub fn catalog_sections() -> &'static [GameCatalogSection] {
    &CATALOG_SECTIONS
}

/// Resolve a mode id and level id to a catalog level.
pub fn find_level(mode_id: &str, level_id: &str) -> Result<&'static GameLevel, GameError> {
    let mode: GameMode = mode_id.parse()?;
    mode_definition(mode)
        .and_then(|definition| definition.level(level_id))
        .ok_or_else(|| GameError::UnknownLevel {
            mode: mode_id.to_string(),
            level: level_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_mode_has_three_valid_levels() {
        assert_eq!(game_modes().len(), 5);
        for mode in GameMode::ALL {
            let definition = mode_definition(mode).unwrap();
            assert_eq!(definition.levels.len(), 3);

            let difficulties: Vec<GameDifficulty> =
                definition.levels.iter().map(|l| l.difficulty).collect();
            assert_eq!(
                difficulties,
                vec![
                    GameDifficulty::Gentle,
                    GameDifficulty::Steady,
                    GameDifficulty::Intense
                ]
            );
            for level in &definition.levels {
                level.config.validate().unwrap();
            }
        }
    }

    #[test]
    fn test_level_ids_unique() {
        let ids: Vec<&str> = game_modes()
            .iter()
            .flat_map(|m| m.levels.iter().map(|l| l.id))
            .collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_sections_cover_every_mode_once() {
        let modes: Vec<GameMode> = catalog_sections()
            .iter()
            .flat_map(|s| s.definitions().map(|d| d.id))
            .collect();
        assert_eq!(modes.len(), 5);
        let unique: HashSet<GameMode> = modes.into_iter().collect();
        assert_eq!(unique.len(), 5);
        assert_eq!(catalog_sections()[0].title, "Recall & Insight");
    }

    #[test]
    fn test_find_level() {
        let level = find_level("quiz", "quiz-steady").unwrap();
        assert_eq!(level.config.question_count, 8);
        assert_eq!(level.config.options, Some(4));
        assert_eq!(level.config.time_limit_seconds, Some(210));

        let memory = find_level("memory", "memory-intense").unwrap();
        assert_eq!(memory.config.pairs, Some(8));

        assert!(matches!(
            find_level("chess", "quiz-steady"),
            Err(GameError::UnknownMode(_))
        ));
        assert!(matches!(
            find_level("quiz", "memory-intense"),
            Err(GameError::UnknownLevel { .. })
        ));
    }

    #[test]
    fn test_level_serializes_flat() {
        let level = find_level("translation-match", "translation-steady").unwrap();
        let json = serde_json::to_value(level).unwrap();
        assert_eq!(json["id"], "translation-steady");
        assert_eq!(json["difficulty"], "steady");
        assert_eq!(json["questionCount"], 4);
        assert_eq!(json["verseBatch"], 2);
        assert!(json.get("options").is_none());
    }
}
