//! Corpus data types.
//!
//! These mirror the per-chapter JSON documents produced by the dataset build
//! tool, so the same types are used for loading and for API responses.

use serde::{Deserialize, Serialize};

// ============================================================================
// Languages
// ============================================================================

/// One of the three fixed languages every verse is carried in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Sanskrit,
    Hindi,
    #[default]
    English,
}

impl Language {
    /// All languages in canonical order.
    pub const ALL: [Language; 3] = [Language::Sanskrit, Language::Hindi, Language::English];

    /// Stable lowercase key used in documents and query strings.
    pub fn key(&self) -> &'static str {
        match self {
            Language::Sanskrit => "sanskrit",
            Language::Hindi => "hindi",
            Language::English => "english",
        }
    }

    /// Parse a language key, case-insensitively.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "sanskrit" => Some(Language::Sanskrit),
            "hindi" => Some(Language::Hindi),
            "english" => Some(Language::English),
            _ => None,
        }
    }

    /// English display label (used in game card targets).
    pub fn label(&self) -> &'static str {
        match self {
            Language::Sanskrit => "Sanskrit",
            Language::Hindi => "Hindi",
            Language::English => "English",
        }
    }

    /// Label written in the language itself (used by the language switcher).
    pub fn native_label(&self) -> &'static str {
        match self {
            Language::Sanskrit => "संस्कृत",
            Language::Hindi => "हिन्दी",
            Language::English => "English",
        }
    }

    /// Translators credited for this language across the corpus.
    pub fn attribution(&self) -> &'static [&'static str] {
        match self {
            Language::Sanskrit => &["Ved Vyasa"],
            Language::Hindi => &["Swami Tejomayananda"],
            Language::English => &["A.C. Bhaktivedanta Swami Prabhupada", "Swami Sivananda"],
        }
    }

    /// Source keys the dataset tool draws this language from.
    pub fn sources(&self) -> &'static [&'static str] {
        match self {
            Language::Sanskrit => &["slok"],
            Language::Hindi => &["tej"],
            Language::English => &["prabhu", "siva"],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A value per language.
///
/// A fixed-shape struct rather than a map: a document missing one of the
/// three keys fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMap<T> {
    pub sanskrit: T,
    pub hindi: T,
    pub english: T,
}

impl<T> LanguageMap<T> {
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::Sanskrit => &self.sanskrit,
            Language::Hindi => &self.hindi,
            Language::English => &self.english,
        }
    }

    /// Iterate `(language, value)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }
}

// ============================================================================
// Verses and chapters
// ============================================================================

/// A single verse with parallel text in every language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    /// Globally unique id, e.g. `BG2.47`.
    pub id: String,
    #[serde(rename = "chapter")]
    pub chapter_number: u32,
    #[serde(rename = "number")]
    pub verse_number: u32,
    pub transliteration: String,
    pub text: LanguageMap<String>,
    pub translators: LanguageMap<String>,
    pub sources: LanguageMap<String>,
}

impl Verse {
    /// Short citation label, e.g. `BG 2.47`.
    pub fn reference(&self) -> String {
        format!("BG {}.{}", self.chapter_number, self.verse_number)
    }

    /// Prompt heading shown above a question, e.g. `Chapter 2, Verse 47`.
    pub fn prompt(&self) -> String {
        format!("Chapter {}, Verse {}", self.chapter_number, self.verse_number)
    }

    pub fn text_in(&self, language: Language) -> &str {
        self.text.get(language)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterTitle {
    pub sanskrit: String,
    pub english: String,
    pub transliteration: String,
}

/// English/Hindi pair used for chapter meaning and summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub english: String,
    pub hindi: String,
}

/// A chapter document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub number: u32,
    pub verses_count: u32,
    pub title: ChapterTitle,
    pub meaning: Bilingual,
    pub summary: Bilingual,
    pub verses: Vec<Verse>,
}

/// Heading pair shown for a chapter in a given language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterDisplayInfo {
    pub primary: String,
    pub secondary: String,
}

impl Chapter {
    pub fn display_info(&self, language: Language) -> ChapterDisplayInfo {
        let (primary, secondary) = match language {
            Language::Sanskrit => (&self.title.sanskrit, &self.title.transliteration),
            Language::Hindi => (&self.meaning.hindi, &self.meaning.english),
            Language::English => (&self.meaning.english, &self.title.english),
        };
        ChapterDisplayInfo {
            primary: primary.clone(),
            secondary: secondary.clone(),
        }
    }

    pub fn verse(&self, verse_number: u32) -> Option<&Verse> {
        // Verses are contiguous from 1, checked at load.
        let index = usize::try_from(verse_number.checked_sub(1)?).ok()?;
        self.verses.get(index)
    }
}

/// Lightweight chapter listing entry (no verse bodies).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub number: u32,
    pub verses_count: u32,
    pub title: ChapterTitle,
    pub meaning: Bilingual,
}

impl From<&Chapter> for ChapterSummary {
    fn from(chapter: &Chapter) -> Self {
        Self {
            number: chapter.number,
            verses_count: chapter.verses_count,
            title: chapter.title.clone(),
            meaning: chapter.meaning.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSE_JSON: &str = r#"{
        "id": "BG1.1",
        "chapter": 1,
        "number": 1,
        "transliteration": "dhṛtarāṣṭra uvāca",
        "text": { "sanskrit": "धृतराष्ट्र उवाच", "hindi": "धृतराष्ट्र ने कहा", "english": "Dhritarashtra said" },
        "translators": { "sanskrit": "Ved Vyasa", "hindi": "Swami Tejomayananda", "english": "Swami Sivananda" },
        "sources": { "sanskrit": "slok", "hindi": "tej", "english": "siva" }
    }"#;

    #[test]
    fn test_deserialize_verse_document() {
        let verse: Verse = serde_json::from_str(VERSE_JSON).unwrap();
        assert_eq!(verse.id, "BG1.1");
        assert_eq!(verse.chapter_number, 1);
        assert_eq!(verse.verse_number, 1);
        assert_eq!(verse.text_in(Language::English), "Dhritarashtra said");
        assert_eq!(verse.sources.get(Language::Hindi), "tej");
        assert_eq!(verse.reference(), "BG 1.1");
        assert_eq!(verse.prompt(), "Chapter 1, Verse 1");
    }

    #[test]
    fn test_verse_missing_language_fails() {
        let json = VERSE_JSON.replace(r#""hindi": "धृतराष्ट्र ने कहा", "#, "");
        let result: Result<Verse, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_language_keys_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_key(lang.key()), Some(lang));
        }
        assert_eq!(Language::from_key(" English "), Some(Language::English));
        assert_eq!(Language::from_key("latin"), None);
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_language_metadata_present() {
        for lang in Language::ALL {
            assert!(!lang.attribution().is_empty());
            assert!(!lang.sources().is_empty());
        }
        assert_eq!(Language::English.sources(), &["prabhu", "siva"]);
    }

    #[test]
    fn test_language_map_iter_order() {
        let map = LanguageMap {
            sanskrit: 1,
            hindi: 2,
            english: 3,
        };
        let collected: Vec<_> = map.iter().map(|(l, v)| (l, *v)).collect();
        assert_eq!(
            collected,
            vec![
                (Language::Sanskrit, 1),
                (Language::Hindi, 2),
                (Language::English, 3)
            ]
        );
    }

    #[test]
    fn test_chapter_display_info() {
        let chapter = Chapter {
            number: 2,
            verses_count: 0,
            title: ChapterTitle {
                sanskrit: "सांख्ययोग".to_string(),
                english: "Sankhya Yoga".to_string(),
                transliteration: "Sānkhya Yog".to_string(),
            },
            meaning: Bilingual {
                english: "Transcendental Knowledge".to_string(),
                hindi: "सांख्य योग".to_string(),
            },
            summary: Bilingual {
                english: String::new(),
                hindi: String::new(),
            },
            verses: vec![],
        };

        let english = chapter.display_info(Language::English);
        assert_eq!(english.primary, "Transcendental Knowledge");
        assert_eq!(english.secondary, "Sankhya Yoga");

        let sanskrit = chapter.display_info(Language::Sanskrit);
        assert_eq!(sanskrit.primary, "सांख्ययोग");
        assert_eq!(sanskrit.secondary, "Sānkhya Yog");

        let hindi = chapter.display_info(Language::Hindi);
        assert_eq!(hindi.secondary, "Transcendental Knowledge");

        assert!(chapter.verse(0).is_none());
        assert!(chapter.verse(1).is_none());
    }
}
