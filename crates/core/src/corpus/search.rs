//! Case-insensitive verse search used by the chapter reader.

use super::{Corpus, Language, Verse};

/// Whether a verse matches an already trimmed, lowercased query.
///
/// Checks the verse number, id, transliteration and then the text in each
/// of `languages`.
fn matches_query(verse: &Verse, query: &str, languages: &[Language]) -> bool {
    if verse.verse_number.to_string().contains(query) {
        return true;
    }

    if verse.id.to_lowercase().contains(query) {
        return true;
    }

    if verse.transliteration.to_lowercase().contains(query) {
        return true;
    }

    languages
        .iter()
        .any(|&language| verse.text_in(language).to_lowercase().contains(query))
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

impl Corpus {
    /// Search within one chapter. An empty query returns every verse of the
    /// chapter; an unknown chapter returns nothing.
    pub fn search_chapter(
        &self,
        chapter_number: u32,
        query: &str,
        languages: &[Language],
    ) -> Vec<&Verse> {
        let query = normalize_query(query);
        self.verses_of(chapter_number)
            .iter()
            .filter(|verse| query.is_empty() || matches_query(verse, &query, languages))
            .collect()
    }

    /// Search the whole corpus, results in corpus order.
    pub fn search(&self, query: &str, languages: &[Language]) -> Vec<&Verse> {
        let query = normalize_query(query);
        self.all_verses()
            .filter(|verse| query.is_empty() || matches_query(verse, &query, languages))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    fn sample_corpus() -> Corpus {
        let mut chapter = fixtures::chapter(1, 3);
        chapter.verses[0].text.english = "Dhritarashtra said: O Sanjaya".to_string();
        chapter.verses[1].transliteration = "sanjaya uvaca drstva tu".to_string();
        chapter.verses[2].text.hindi = "अर्जुन ने कहा".to_string();
        Corpus::from_chapters(vec![chapter, fixtures::chapter(2, 12)]).unwrap()
    }

    #[test]
    fn test_empty_query_returns_whole_chapter() {
        let corpus = sample_corpus();
        let results = corpus.search_chapter(1, "   ", &Language::ALL);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let corpus = sample_corpus();
        let results = corpus.search_chapter(1, "  SANJAYA ", &[Language::English]);
        let ids: Vec<&str> = results.iter().map(|v| v.id.as_str()).collect();
        // Verse 1 by English text, verse 2 by transliteration.
        assert_eq!(ids, vec!["BG1.1", "BG1.2"]);
    }

    #[test]
    fn test_search_respects_languages() {
        let corpus = sample_corpus();
        assert!(corpus
            .search_chapter(1, "अर्जुन", &[Language::English])
            .is_empty());
        let hits = corpus.search_chapter(1, "अर्जुन", &[Language::Hindi]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "BG1.3");
    }

    #[test]
    fn test_search_by_verse_number_and_id() {
        let corpus = sample_corpus();
        let hits = corpus.search_chapter(2, "12", &[]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].verse_number, 12);

        let hits = corpus.search("bg2.1", &[]);
        // BG2.1, BG2.10, BG2.11, BG2.12
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|v| v.chapter_number == 2));
    }

    #[test]
    fn test_search_unknown_chapter_is_empty() {
        let corpus = sample_corpus();
        assert!(corpus.search_chapter(7, "", &Language::ALL).is_empty());
    }
}
