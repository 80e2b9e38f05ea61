//! Testing utilities: synthetic corpora of any shape.
//!
//! Every builder and accessor takes the corpus as an explicit argument, so
//! tests (in this crate and in the server crate) run against small,
//! deterministic corpora instead of the real dataset.
//!
//! # Example
//!
//! ```rust,ignore
//! use gita_core::testing::fixtures;
//!
//! let corpus = fixtures::synthetic_corpus(3, 10);
//! assert_eq!(corpus.total_verse_count(), 30);
//! ```

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::Path;

    use crate::corpus::{Bilingual, Chapter, ChapterTitle, Corpus, LanguageMap, Verse};

    /// Verse counts of the real 18 chapters (701 verses in total).
    pub const GITA_VERSE_COUNTS: [u32; 18] = [
        47, 72, 43, 42, 29, 47, 30, 28, 34, 42, 55, 20, 35, 27, 20, 24, 28, 78,
    ];

    const VOCABULARY: [&str; 24] = [
        "wisdom", "action", "devotion", "duty", "mind", "senses", "peace", "battle", "soul",
        "nature", "faith", "desire", "knowledge", "sacrifice", "yoga", "truth", "light",
        "self", "world", "heart", "path", "work", "fruit", "wind",
    ];

    const SANSKRIT_WORDS: [&str; 8] = [
        "dharma", "karma", "yoga", "atma", "bhakti", "jnana", "prana", "manas",
    ];

    fn word(list: &[&'static str], seed: u32) -> &'static str {
        list[seed as usize % list.len()]
    }

    /// English text of a synthetic verse.
    ///
    /// Unique per verse (it embeds the chapter and verse numbers) and always
    /// carries several words long enough to be blanked.
    pub fn english_text(chapter: u32, number: u32) -> String {
        let seed = chapter * 31 + number * 7;
        format!(
            "In chapter {} verse {} the {} of {} meets {} and {}.",
            chapter,
            number,
            word(&VOCABULARY, seed),
            word(&VOCABULARY, seed + 5),
            word(&VOCABULARY, seed + 11),
            word(&VOCABULARY, seed + 17),
        )
    }

    /// A single verse with text in all three languages.
    pub fn verse(chapter: u32, number: u32) -> Verse {
        let seed = chapter * 13 + number;
        Verse {
            id: format!("BG{}.{}", chapter, number),
            chapter_number: chapter,
            verse_number: number,
            transliteration: format!(
                "{} {} {} uvaca",
                word(&SANSKRIT_WORDS, seed),
                word(&SANSKRIT_WORDS, seed + 3),
                word(&SANSKRIT_WORDS, seed / 2),
            ),
            text: LanguageMap {
                sanskrit: format!("श्लोक {}.{} धर्म", chapter, number),
                hindi: format!("अध्याय {} श्लोक {} का अर्थ", chapter, number),
                english: english_text(chapter, number),
            },
            translators: LanguageMap {
                sanskrit: "Ved Vyasa".to_string(),
                hindi: "Swami Tejomayananda".to_string(),
                english: "Swami Sivananda".to_string(),
            },
            sources: LanguageMap {
                sanskrit: "slok".to_string(),
                hindi: "tej".to_string(),
                english: "siva".to_string(),
            },
        }
    }

    /// A valid chapter document with `verse_count` verses.
    pub fn chapter(number: u32, verse_count: u32) -> Chapter {
        Chapter {
            number,
            verses_count: verse_count,
            title: ChapterTitle {
                sanskrit: format!("अध्याय {}", number),
                english: format!("Chapter {} Yoga", number),
                transliteration: format!("Adhyaya {}", number),
            },
            meaning: Bilingual {
                english: format!("Meaning of chapter {}", number),
                hindi: format!("अध्याय {} का अर्थ", number),
            },
            summary: Bilingual {
                english: format!("Summary of chapter {}", number),
                hindi: format!("अध्याय {} का सारांश", number),
            },
            verses: (1..=verse_count).map(|v| verse(number, v)).collect(),
        }
    }

    /// Chapters `1..=chapters`, each with the same number of verses.
    pub fn synthetic_chapters(chapters: u32, verses_per_chapter: u32) -> Vec<Chapter> {
        (1..=chapters)
            .map(|number| chapter(number, verses_per_chapter))
            .collect()
    }

    pub fn synthetic_corpus(chapters: u32, verses_per_chapter: u32) -> Corpus {
        Corpus::from_chapters(synthetic_chapters(chapters, verses_per_chapter))
            .expect("synthetic chapters are valid")
    }

    /// 18 chapters with the real verse counts.
    pub fn gita_shaped_corpus() -> Corpus {
        let chapters = (1u32..)
            .zip(GITA_VERSE_COUNTS)
            .map(|(number, count)| chapter(number, count))
            .collect();
        Corpus::from_chapters(chapters).expect("gita-shaped chapters are valid")
    }

    /// Build a corpus after overriding the English text of some verses.
    ///
    /// `overrides` holds `(chapter, verse, english text)` triples.
    pub fn corpus_with_english(
        chapters: u32,
        verses_per_chapter: u32,
        overrides: &[(u32, u32, &str)],
    ) -> Corpus {
        let mut docs = synthetic_chapters(chapters, verses_per_chapter);
        for &(chapter, number, text) in overrides {
            let verse = docs
                .iter_mut()
                .find(|doc| doc.number == chapter)
                .and_then(|doc| doc.verses.get_mut(number as usize - 1))
                .expect("override targets an existing verse");
            verse.text.english = text.to_string();
        }
        Corpus::from_chapters(docs).expect("overridden chapters are valid")
    }

    /// Write chapter documents as `{number}.json` files into `dir`.
    pub fn write_corpus_dir(dir: &Path, chapters: &[Chapter]) {
        for chapter in chapters {
            let json = serde_json::to_string_pretty(chapter).expect("chapter serializes");
            std::fs::write(dir.join(format!("{}.json", chapter.number)), json)
                .expect("write chapter document");
        }
    }

}
