use axum::{extract::State, Json};
use serde::Deserialize;

use flavorgraph_engine::{self as engine, GapReport};

use crate::routes::AppState;

/// POST /api/analyze_gaps request body.
#[derive(Debug, Deserialize)]
pub struct GapsPayload {
    #[serde(default)]
    pub recipe_ids: Vec<String>,
    #[serde(default)]
    pub available_ingredients: Vec<String>,
}

/// POST /api/analyze_gaps - Per-recipe missing/covered report with the
/// substitution candidates for everything missing. Unknown recipe ids are
/// skipped by the engine, so this route cannot fail on well-formed input.
pub async fn analyze_gaps(
    State(state): State<AppState>,
    Json(payload): Json<GapsPayload>,
) -> Json<GapReport> {
    let available: Vec<String> = payload
        .available_ingredients
        .iter()
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect();

    let catalog = state.catalog();
    Json(engine::analyze_gaps(&catalog, &payload.recipe_ids, &available))
}
