//! Corpus API handlers: chapters, verses and search.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use gita_core::{Chapter, ChapterSummary, Language, Verse};
use serde::{Deserialize, Serialize};

use super::handlers::ErrorResponse;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub chapter: Option<u32>,
    /// Comma-separated language keys, e.g. `english,hindi`.
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub languages: Vec<Language>,
    pub total: usize,
    pub verses: Vec<Verse>,
}

/// Parse a `lang` parameter. Missing or blank selects every language.
fn parse_languages(param: Option<&str>) -> Result<Vec<Language>, String> {
    let keys: Vec<&str> = param
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .collect();

    if keys.is_empty() {
        return Ok(Language::ALL.to_vec());
    }

    let mut languages = Vec::with_capacity(keys.len());
    for key in keys {
        let language =
            Language::from_key(key).ok_or_else(|| format!("Unknown language: {}", key))?;
        if !languages.contains(&language) {
            languages.push(language);
        }
    }
    Ok(languages)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/chapters
pub async fn list_chapters(State(state): State<Arc<AppState>>) -> Json<Vec<ChapterSummary>> {
    Json(
        state
            .corpus()
            .list_chapters()
            .iter()
            .map(ChapterSummary::from)
            .collect(),
    )
}

/// GET /api/v1/chapters/{number}
pub async fn get_chapter(
    State(state): State<Arc<AppState>>,
    Path(number): Path<u32>,
) -> ApiResult<Chapter> {
    match state.corpus().get_chapter(number) {
        Some(chapter) => Ok(Json(chapter.clone())),
        None => Err(ErrorResponse::new(
            StatusCode::NOT_FOUND,
            format!("Chapter not found: {}", number),
        )),
    }
}

/// GET /api/v1/chapters/{number}/verses/{verse}
pub async fn get_verse(
    State(state): State<Arc<AppState>>,
    Path((chapter, verse)): Path<(u32, u32)>,
) -> ApiResult<Verse> {
    state
        .corpus()
        .get_verse(chapter, verse)
        .map(|found| Json(found.clone()))
        .ok_or_else(|| {
            ErrorResponse::new(
                StatusCode::NOT_FOUND,
                format!("Verse not found: {}.{}", chapter, verse),
            )
        })
}

/// GET /api/v1/verses/{id}
///
/// Look up a verse by its id, e.g. `BG2.47`.
pub async fn get_verse_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Verse> {
    state
        .corpus()
        .get_verse_by_id(&id)
        .map(|found| Json(found.clone()))
        .ok_or_else(|| {
            ErrorResponse::new(StatusCode::NOT_FOUND, format!("Verse not found: {}", id))
        })
}

/// GET /api/v1/search?q=..&chapter=..&lang=..
///
/// Case-insensitive search over verse numbers, ids, transliteration and the
/// selected languages. Without `chapter` the whole corpus is searched.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<SearchResponse> {
    let languages = parse_languages(params.lang.as_deref())
        .map_err(|e| ErrorResponse::new(StatusCode::BAD_REQUEST, e))?;

    let corpus = state.corpus();
    let verses: Vec<Verse> = match params.chapter {
        Some(chapter) => corpus.search_chapter(chapter, &params.q, &languages),
        None => corpus.search(&params.q, &languages),
    }
    .into_iter()
    .cloned()
    .collect();

    Ok(Json(SearchResponse {
        query: params.q,
        languages,
        total: verses.len(),
        verses,
    }))
}
