use std::path::Path;

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use flavorgraph_engine::Catalog;

use crate::error::AppError;
use crate::routes::AppState;

/// GET /api/recipes - Every recipe in the catalog, in load order.
pub async fn list_recipes(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();
    Json(json!({ "recipes": catalog.recipes() }))
}

/// GET /api/ingredients - Every ingredient required by at least one recipe,
/// normalized, deduplicated and alphabetically ordered.
pub async fn list_ingredients(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();
    Json(json!({ "ingredients": catalog.ingredients() }))
}

/// POST /api/reload - Reload the catalog from the data directory and swap it
/// atomically. In-flight requests keep the snapshot they started with.
pub async fn reload_catalog(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let catalog = Catalog::load(Path::new(&state.config.data.dir))?;
    let recipes = catalog.recipes().len();
    state.replace_catalog(catalog);

    tracing::info!(recipes, "catalog reloaded");

    Ok(Json(json!({ "status": "reloaded", "recipes": recipes })))
}
