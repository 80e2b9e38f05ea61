use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use gita_core::{Config, Language};
use serde::Serialize;
use std::sync::Arc;

use crate::metrics::encode_metrics;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                error: error.into(),
            }),
        )
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub chapters: usize,
    pub verses: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let corpus = state.corpus();
    Json(HealthResponse {
        status: "ok".to_string(),
        chapters: corpus.chapter_count(),
        verses: corpus.total_verse_count(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<Config> {
    Json(state.config().clone())
}

/// Display metadata of one corpus language.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub key: Language,
    pub label: &'static str,
    pub native_label: &'static str,
    pub attribution: &'static [&'static str],
    pub sources: &'static [&'static str],
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            key: language,
            label: language.label(),
            native_label: language.native_label(),
            attribution: language.attribution(),
            sources: language.sources(),
        }
    }
}

/// GET /api/v1/languages
pub async fn list_languages() -> Json<Vec<LanguageInfo>> {
    Json(Language::ALL.into_iter().map(LanguageInfo::from).collect())
}

/// GET /metrics
///
/// Prometheus text exposition.
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}
