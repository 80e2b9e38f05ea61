//! In-memory corpus with lookup indexes.

use std::collections::HashMap;

use tracing::info;

use super::{Chapter, CorpusError, Language, Verse};
use crate::metrics;

/// The full read-only corpus.
///
/// Built once from validated chapter documents and shared immutably
/// afterwards (wrap it in an `Arc` to hand it to several owners). Every
/// lookup returns `Option`; only construction can fail.
#[derive(Debug, Clone)]
pub struct Corpus {
    chapters: Vec<Chapter>,
    /// chapter number -> position in `chapters`
    chapter_index: HashMap<u32, usize>,
    /// verse id -> (chapter position, verse position)
    verse_index: HashMap<String, (usize, usize)>,
    total_verses: usize,
}

impl Corpus {
    /// Validate chapter documents and build the lookup indexes.
    ///
    /// Chapters may arrive in any order; they are stored sorted by number.
    pub fn from_chapters(mut chapters: Vec<Chapter>) -> Result<Self, CorpusError> {
        if chapters.is_empty() {
            return Err(CorpusError::Empty);
        }

        chapters.sort_by_key(|chapter| chapter.number);

        let mut chapter_index = HashMap::with_capacity(chapters.len());
        let mut verse_index = HashMap::new();

        for (chapter_pos, chapter) in chapters.iter().enumerate() {
            validate_chapter(chapter)?;

            if chapter_index.insert(chapter.number, chapter_pos).is_some() {
                return Err(CorpusError::DuplicateChapter {
                    number: chapter.number,
                });
            }

            for (verse_pos, verse) in chapter.verses.iter().enumerate() {
                if verse_index
                    .insert(verse.id.clone(), (chapter_pos, verse_pos))
                    .is_some()
                {
                    return Err(CorpusError::DuplicateVerseId {
                        verse_id: verse.id.clone(),
                    });
                }
            }
        }

        let total_verses = verse_index.len();
        info!(
            chapters = chapters.len(),
            verses = total_verses,
            "Corpus indexed"
        );
        metrics::CORPUS_LOADS.inc();

        Ok(Self {
            chapters,
            chapter_index,
            verse_index,
            total_verses,
        })
    }

    /// All chapters in ascending chapter order.
    pub fn list_chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn total_verse_count(&self) -> usize {
        self.total_verses
    }

    /// Every valid chapter number, ascending.
    pub fn chapter_numbers(&self) -> Vec<u32> {
        self.chapters.iter().map(|chapter| chapter.number).collect()
    }

    pub fn get_chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapter_index
            .get(&number)
            .map(|&pos| &self.chapters[pos])
    }

    /// Verses of one chapter; empty when the chapter does not exist.
    pub fn verses_of(&self, chapter_number: u32) -> &[Verse] {
        self.get_chapter(chapter_number)
            .map(|chapter| chapter.verses.as_slice())
            .unwrap_or(&[])
    }

    pub fn get_verse(&self, chapter_number: u32, verse_number: u32) -> Option<&Verse> {
        self.get_chapter(chapter_number)?.verse(verse_number)
    }

    pub fn get_verse_by_id(&self, id: &str) -> Option<&Verse> {
        self.verse_index
            .get(id)
            .map(|&(chapter_pos, verse_pos)| &self.chapters[chapter_pos].verses[verse_pos])
    }

    pub fn has_verse(&self, chapter_number: u32, verse_number: u32) -> bool {
        self.get_verse(chapter_number, verse_number).is_some()
    }

    pub fn verse_text(
        &self,
        chapter_number: u32,
        verse_number: u32,
        language: Language,
    ) -> Option<&str> {
        self.get_verse(chapter_number, verse_number)
            .map(|verse| verse.text_in(language))
    }

    /// Every verse, in chapter order then verse order.
    pub fn all_verses(&self) -> impl Iterator<Item = &Verse> + '_ {
        self.chapters.iter().flat_map(|chapter| chapter.verses.iter())
    }
}

fn validate_chapter(chapter: &Chapter) -> Result<(), CorpusError> {
    if chapter.number == 0 {
        return Err(CorpusError::InvalidChapterNumber {
            number: chapter.number,
        });
    }

    if chapter.verses_count as usize != chapter.verses.len() {
        return Err(CorpusError::VerseCountMismatch {
            chapter: chapter.number,
            declared: chapter.verses_count,
            actual: chapter.verses.len(),
        });
    }

    for (expected, verse) in (1u32..).zip(chapter.verses.iter()) {
        if verse.verse_number != expected {
            return Err(CorpusError::VerseOutOfSequence {
                chapter: chapter.number,
                expected,
                found: verse.verse_number,
            });
        }

        if verse.chapter_number != chapter.number {
            return Err(CorpusError::VerseChapterMismatch {
                verse_id: verse.id.clone(),
                claimed: verse.chapter_number,
                chapter: chapter.number,
            });
        }

        if let Some((language, _)) = verse.text.iter().find(|(_, text)| text.trim().is_empty()) {
            return Err(CorpusError::MissingText {
                verse_id: verse.id.clone(),
                language,
            });
        }
    }

    Ok(())
}
