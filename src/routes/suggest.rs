use axum::{extract::State, Json};
use serde::Deserialize;

use flavorgraph_engine::{self as engine, SuggestionRequest, SuggestionResponse};

use crate::error::AppError;
use crate::routes::AppState;

/// POST /api/suggest request body. Field defaults mirror the engine's; the
/// ingredient list arrives raw and is sanitized here, at the boundary,
/// before the engine sees it.
#[derive(Debug, Deserialize)]
pub struct SuggestPayload {
    #[serde(default)]
    pub available_ingredients: Vec<String>,
    #[serde(default = "default_max_missing")]
    pub max_missing: usize,
    #[serde(default = "default_true")]
    pub allow_substitutions: bool,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    #[serde(default = "default_plan_size")]
    pub plan_size: usize,
    #[serde(default = "default_true")]
    pub prioritize_min_missing: bool,
}

fn default_max_missing() -> usize {
    3
}

fn default_max_suggestions() -> usize {
    8
}

fn default_plan_size() -> usize {
    1
}

fn default_true() -> bool {
    true
}

/// POST /api/suggest - Select and rank a plan of cookable recipes.
///
/// The engine assumes validated numeric fields and a sanitized ingredient
/// list, so both happen here: entries empty after trimming are dropped, and
/// the two positive-integer constraints are enforced.
pub async fn suggest(
    State(state): State<AppState>,
    Json(payload): Json<SuggestPayload>,
) -> Result<Json<SuggestionResponse>, AppError> {
    if payload.plan_size == 0 {
        return Err(AppError::ValidationError(
            "plan_size must be at least 1".to_string(),
        ));
    }
    if payload.max_suggestions == 0 {
        return Err(AppError::ValidationError(
            "max_suggestions must be at least 1".to_string(),
        ));
    }

    let available_ingredients: Vec<String> = payload
        .available_ingredients
        .iter()
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect();

    let request = SuggestionRequest {
        available_ingredients,
        max_missing: payload.max_missing,
        allow_substitutions: payload.allow_substitutions,
        max_suggestions: payload.max_suggestions,
        plan_size: payload.plan_size,
        prioritize_min_missing: payload.prioritize_min_missing,
    };

    let catalog = state.catalog();
    let response = engine::suggest(&catalog, &request);

    tracing::debug!(
        available = request.available_ingredients.len(),
        suggestions = response.suggestions.len(),
        plan_size = request.plan_size,
        "suggestion request served"
    );

    Ok(Json(response))
}
