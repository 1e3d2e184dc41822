pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

/// Create the app router for testing
///
/// Builds the Axum router with all routes configured over an in-memory
/// catalog, useful for integration testing without starting the full
/// server or touching the filesystem.
pub fn create_app(catalog: flavorgraph_engine::Catalog) -> axum::Router {
    let config = config::Config {
        server: config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        data: config::DataConfig::default(),
        observability: config::ObservabilityConfig::default(),
    };

    routes::router(AppState::new(config, catalog))
}
