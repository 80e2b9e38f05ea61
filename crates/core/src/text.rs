//! String helpers shared by the builders: whitespace normalization, word-safe
//! truncation, word extraction and masking.
//!
//! Lengths are counted in characters, never bytes, so Devanagari text is
//! never cut inside a code point.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::corpus::{Language, Verse};

/// Appended to truncated text.
pub const ELLIPSIS: &str = "…";

/// Replaces the hidden word in fill-blank prompts.
pub const BLANK_PLACEHOLDER: &str = "_____";

/// Shortest word that may be blanked or offered as a vocabulary distractor.
pub const MIN_WORD_LEN: usize = 4;

/// Default snippet length used by the reader views.
pub const DEFAULT_SNIPPET_LEN: usize = 160;

static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z']+").expect("word pattern is valid"));

/// Collapse runs of whitespace into single spaces and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `max_len` characters without splitting a word.
///
/// Text that already fits is returned unchanged. Otherwise the cut backs up
/// to the last space before `max_len` and appends [`ELLIPSIS`]; when there is
/// no such space the text is cut hard at `max_len`.
pub fn truncate_at_word(text: &str, max_len: usize) -> String {
    let Some((cut, next)) = text.char_indices().nth(max_len) else {
        return text.to_string();
    };

    let head = &text[..cut];
    // Cut lands exactly on a boundary: the last word is already whole.
    if next.is_whitespace() {
        return format!("{}{}", head.trim_end(), ELLIPSIS);
    }

    match head.rfind(' ') {
        Some(space) if space > 0 => format!("{}{}", head[..space].trim_end(), ELLIPSIS),
        _ => format!("{}{}", head, ELLIPSIS),
    }
}

/// Letter runs (apostrophes included) in order of appearance, case preserved.
pub fn extract_words(text: &str) -> Vec<&str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// A located word inside a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    pub span: Range<usize>,
}

/// Words of at least [`MIN_WORD_LEN`] characters, with their byte spans.
pub fn blankable_words(text: &str) -> Vec<WordMatch> {
    WORD_REGEX
        .find_iter(text)
        .filter(|m| is_vocabulary_word(m.as_str()))
        .map(|m| WordMatch {
            word: m.as_str().to_string(),
            span: m.range(),
        })
        .collect()
}

/// Whether a token is long enough to be blanked or used as a distractor.
pub fn is_vocabulary_word(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LEN
}

/// Replace one located word with [`BLANK_PLACEHOLDER`].
pub fn mask_word(text: &str, word: &WordMatch) -> String {
    let mut masked = String::with_capacity(text.len());
    masked.push_str(&text[..word.span.start]);
    masked.push_str(BLANK_PLACEHOLDER);
    masked.push_str(&text[word.span.end..]);
    masked
}

/// Normalized verse text in `language`, truncated word-safe to `max_len`.
pub fn verse_snippet(verse: &Verse, language: Language, max_len: usize) -> String {
    truncate_at_word(&normalize_whitespace(verse.text_in(language)), max_len)
}
