use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::{Chapter, Corpus, CorpusError};

/// Load every `*.json` chapter document in `dir` and build the corpus.
///
/// File names do not matter; chapters are ordered by the number inside each
/// document.
pub fn load_corpus_dir(dir: &Path) -> Result<Corpus, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|source| CorpusError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut chapters = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CorpusError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let raw = fs::read_to_string(&path).map_err(|source| CorpusError::Read {
            path: path.clone(),
            source,
        })?;
        let chapter: Chapter = serde_json::from_str(&raw)
            .map_err(|e| CorpusError::parse(path.display().to_string(), e))?;
        debug!(chapter = chapter.number, file = %path.display(), "Loaded chapter document");
        chapters.push(chapter);
    }

    info!("Loaded {} chapter documents from {:?}", chapters.len(), dir);
    Corpus::from_chapters(chapters)
}

/// Build the corpus from in-memory chapter documents (useful for testing
/// and for embedding the dataset at compile time).
pub fn load_corpus_from_strs<'a, I>(documents: I) -> Result<Corpus, CorpusError>
where
    I: IntoIterator<Item = &'a str>,
{
    let chapters = documents
        .into_iter()
        .enumerate()
        .map(|(i, doc)| {
            serde_json::from_str::<Chapter>(doc)
                .map_err(|e| CorpusError::parse(format!("document #{}", i + 1), e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Corpus::from_chapters(chapters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_strs() {
        let docs: Vec<String> = fixtures::synthetic_chapters(3, 2)
            .iter()
            .map(|c| serde_json::to_string(c).unwrap())
            .collect();

        let corpus = load_corpus_from_strs(docs.iter().map(String::as_str)).unwrap();
        assert_eq!(corpus.chapter_count(), 3);
        assert_eq!(corpus.total_verse_count(), 6);
    }

    #[test]
    fn test_load_from_strs_reports_bad_document() {
        let good = serde_json::to_string(&fixtures::chapter(1, 1)).unwrap();
        let result = load_corpus_from_strs([good.as_str(), "{ not json"]);
        match result {
            Err(CorpusError::Parse { name, .. }) => assert_eq!(name, "document #2"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_dir() {
        let dir = TempDir::new().unwrap();
        fixtures::write_corpus_dir(dir.path(), &fixtures::synthetic_chapters(4, 3));
        // Non-JSON files are ignored.
        fs::write(dir.path().join("README.md"), "chapters").unwrap();

        let corpus = load_corpus_dir(dir.path()).unwrap();
        assert_eq!(corpus.chapter_numbers(), vec![1, 2, 3, 4]);
        assert!(corpus.get_verse_by_id("BG4.3").is_some());
    }

    #[test]
    fn test_load_dir_not_found() {
        let result = load_corpus_dir(Path::new("/nonexistent/gita/chapters"));
        assert!(matches!(result, Err(CorpusError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_load_dir_rejects_integrity_failure() {
        let dir = TempDir::new().unwrap();
        let mut chapters = fixtures::synthetic_chapters(2, 2);
        chapters[0].verses_count = 5;
        fixtures::write_corpus_dir(dir.path(), &chapters);

        let result = load_corpus_dir(dir.path());
        assert!(matches!(result, Err(CorpusError::VerseCountMismatch { .. })));
    }
}
