use std::sync::{Arc, RwLock};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use flavorgraph_engine::Catalog;

mod assets;
mod gaps;
mod health;
mod index;
mod recipes;
mod suggest;

pub use gaps::analyze_gaps;
pub use health::{health, ready};
pub use recipes::{list_ingredients, list_recipes, reload_catalog};
pub use suggest::suggest;

/// Shared application state. The catalog is read-only between reloads;
/// handlers take a snapshot `Arc` and never observe a partial update, since
/// a reload swaps the whole catalog behind the lock.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    catalog: Arc<RwLock<Arc<Catalog>>>,
}

impl AppState {
    pub fn new(config: crate::config::Config, catalog: Catalog) -> Self {
        AppState {
            config,
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Snapshot of the current catalog.
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.read().expect("catalog lock poisoned").clone()
    }

    /// Atomically replace the catalog with a freshly loaded one.
    pub fn replace_catalog(&self, catalog: Catalog) {
        *self.catalog.write().expect("catalog lock poisoned") = Arc::new(catalog);
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/static/{*path}", get(assets::serve))
        .route("/api/recipes", get(recipes::list_recipes))
        .route("/api/ingredients", get(recipes::list_ingredients))
        .route("/api/suggest", post(suggest::suggest))
        .route("/api/analyze_gaps", post(gaps::analyze_gaps))
        .route("/api/reload", post(recipes::reload_catalog))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
