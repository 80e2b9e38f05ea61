//! Scripture corpus: chapter documents, validation and lookup indexes.
//!
//! The corpus is loaded once per process from the per-chapter JSON documents
//! and is read-only afterwards. Construction enforces the dataset invariants
//! (unique chapter numbers, contiguous verse numbering, `versesCount`
//! agreement, unique verse ids, text present in every language); lookups
//! return `Option` and never fail.
//!
//! # Example
//!
//! ```ignore
//! use gita_core::corpus::{load_corpus_dir, Language};
//!
//! let corpus = load_corpus_dir(Path::new("data/gita/chapters"))?;
//! let verse = corpus.get_verse(2, 47).expect("verse exists");
//! println!("{}", verse.text_in(Language::English));
//! ```

mod error;
mod loader;
mod search;
mod store;
mod types;

pub use error::CorpusError;
pub use loader::{load_corpus_dir, load_corpus_from_strs};
pub use store::Corpus;
pub use types::{
    Bilingual, Chapter, ChapterDisplayInfo, ChapterSummary, ChapterTitle, Language, LanguageMap,
    Verse,
};
