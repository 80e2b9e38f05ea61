//! Error types for corpus loading.

use std::path::PathBuf;
use thiserror::Error;

use super::Language;

/// Errors raised while loading or validating the corpus.
///
/// All of these are load-time integrity failures: the dataset is rejected as
/// a whole, never repaired.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Corpus directory does not exist.
    #[error("Corpus directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A chapter document could not be read.
    #[error("Failed to read chapter document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A chapter document is not valid JSON for the expected shape.
    #[error("Failed to parse chapter document {name}: {reason}")]
    Parse { name: String, reason: String },

    /// No chapters were supplied.
    #[error("Corpus contains no chapters")]
    Empty,

    /// Chapter numbers start at 1.
    #[error("Invalid chapter number: {number}")]
    InvalidChapterNumber { number: u32 },

    /// Two documents claim the same chapter number.
    #[error("Duplicate chapter number: {number}")]
    DuplicateChapter { number: u32 },

    /// `versesCount` disagrees with the verse list.
    #[error("Chapter {chapter} declares {declared} verses but contains {actual}")]
    VerseCountMismatch {
        chapter: u32,
        declared: u32,
        actual: usize,
    },

    /// Verse numbering is not contiguous from 1.
    #[error("Chapter {chapter} has verse {found} at position {expected}")]
    VerseOutOfSequence {
        chapter: u32,
        expected: u32,
        found: u32,
    },

    /// A verse sits in a chapter other than the one it names.
    #[error("Verse {verse_id} names chapter {claimed} but sits in chapter {chapter}")]
    VerseChapterMismatch {
        verse_id: String,
        claimed: u32,
        chapter: u32,
    },

    /// Verse ids must be unique across the corpus.
    #[error("Duplicate verse id: {verse_id}")]
    DuplicateVerseId { verse_id: String },

    /// A verse is missing text in one of the languages.
    #[error("Verse {verse_id} has no {language} text")]
    MissingText { verse_id: String, language: Language },
}

impl CorpusError {
    /// Creates a new parse error.
    pub fn parse(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
