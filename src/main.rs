use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

use flavorgraph::routes::AppState;
use flavorgraph_engine::Catalog;

/// flavorgraph - Pantry-Driven Recipe Suggestions
#[derive(Parser)]
#[command(name = "flavorgraph")]
#[command(about = "Suggest cookable recipe plans from what is in the pantry", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load the catalog and report its contents without serving
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = flavorgraph::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    flavorgraph::observability::init_observability(
        "flavorgraph",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Check => check_command(config),
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: flavorgraph::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting flavorgraph server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let catalog = Catalog::load(Path::new(&config.data.dir))?;
    tracing::info!(
        recipes = catalog.recipes().len(),
        ingredients = catalog.ingredients().len(),
        dir = %config.data.dir,
        "Catalog loaded"
    );

    let app = flavorgraph::routes::router(AppState::new(config, catalog));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument(skip(config))]
fn check_command(config: flavorgraph::config::Config) -> Result<()> {
    let catalog = Catalog::load(Path::new(&config.data.dir))?;

    tracing::info!(
        recipes = catalog.recipes().len(),
        ingredients = catalog.ingredients().len(),
        dir = %config.data.dir,
        "Catalog check passed"
    );

    Ok(())
}
