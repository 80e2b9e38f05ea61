//! Game catalog and question-set API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use gita_core::games::{catalog_sections, find_level, mode_definition, GameModeDefinition};
use gita_core::{build_question_set, GameError, GameMode, LevelConfig, QuestionSet, ScoringRules};
use serde::Serialize;

use super::handlers::ErrorResponse;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

// ============================================================================
// Response types
// ============================================================================

/// A catalog section with its mode definitions resolved.
#[derive(Debug, Serialize)]
pub struct CatalogSectionView {
    pub title: &'static str,
    pub description: &'static str,
    pub modes: Vec<&'static GameModeDefinition>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub sections: Vec<CatalogSectionView>,
}

/// A freshly built level, with the scoring constants the client applies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetResponse {
    pub mode: GameMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<&'static str>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_seconds: Option<u32>,
    pub scoring: ScoringRules,
    pub set: QuestionSet,
}

fn game_error(err: GameError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        GameError::UnknownMode(_) | GameError::UnknownLevel { .. } => StatusCode::NOT_FOUND,
        GameError::InvalidConfig { .. } => StatusCode::BAD_REQUEST,
        // Valid request, but this corpus cannot satisfy it
        GameError::InsufficientPool { .. } | GameError::EmptyQuestionSet { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    ErrorResponse::new(status, err.to_string())
}

fn build(
    state: &AppState,
    mode: GameMode,
    level_id: Option<&'static str>,
    level: &LevelConfig,
) -> ApiResult<QuestionSetResponse> {
    let set = state
        .with_rng(|rng| build_question_set(mode, state.corpus(), level, rng))
        .map_err(game_error)?;

    Ok(Json(QuestionSetResponse {
        mode,
        level: level_id,
        count: set.len(),
        time_limit_seconds: level.time_limit_seconds,
        scoring: ScoringRules::for_mode(mode),
        set,
    }))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/games
///
/// The game catalog, grouped into sections.
pub async fn list_games() -> Json<CatalogResponse> {
    let sections = catalog_sections()
        .iter()
        .map(|section| CatalogSectionView {
            title: section.title,
            description: section.description,
            modes: section.definitions().collect(),
        })
        .collect();
    Json(CatalogResponse { sections })
}

/// GET /api/v1/games/{mode}
pub async fn get_game(Path(mode): Path<String>) -> ApiResult<&'static GameModeDefinition> {
    let mode: GameMode = mode.parse().map_err(game_error)?;
    mode_definition(mode)
        .map(Json)
        .ok_or_else(|| game_error(GameError::UnknownMode(mode.id().to_string())))
}

/// POST /api/v1/games/{mode}/questions
///
/// Build a question set from an ad-hoc level configuration.
pub async fn build_questions(
    State(state): State<Arc<AppState>>,
    Path(mode): Path<String>,
    Json(level): Json<LevelConfig>,
) -> ApiResult<QuestionSetResponse> {
    let mode: GameMode = mode.parse().map_err(game_error)?;
    build(&state, mode, None, &level)
}

/// POST /api/v1/games/{mode}/levels/{level}/questions
///
/// Build a question set for a catalog level.
pub async fn build_level_questions(
    State(state): State<Arc<AppState>>,
    Path((mode_id, level_id)): Path<(String, String)>,
) -> ApiResult<QuestionSetResponse> {
    let level = find_level(&mode_id, &level_id).map_err(game_error)?;
    let mode: GameMode = mode_id.parse().map_err(game_error)?;
    build(&state, mode, Some(level.id), &level.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_status_mapping() {
        let cases = [
            (GameError::invalid_config("bad"), StatusCode::BAD_REQUEST),
            (GameError::UnknownMode("chess".into()), StatusCode::NOT_FOUND),
            (
                GameError::UnknownLevel {
                    mode: "quiz".into(),
                    level: "quiz-extreme".into(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                GameError::insufficient("chapters", 5, 2),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                GameError::EmptyQuestionSet {
                    mode: "fill-blank".into(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (err, expected) in cases {
            let message = err.to_string();
            let (status, Json(body)) = game_error(err);
            assert_eq!(status, expected);
            assert_eq!(body.error, message);
        }
    }
}
