use clap::{Parser, Subcommand};
use database::StockRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use web_server::AppState;

/// A small stock quote board: a REST API over stocks and their daily
/// prices.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await,
    }
}

/// Handles the startup sequence for the API server: settings, pool,
/// migrations, then the listener.
async fn serve() -> anyhow::Result<()> {
    let settings = configuration::load_settings()?;
    let pool = database::connect(&settings.db).await?;
    database::run_migrations(&pool).await?;

    let state = Arc::new(AppState {
        repo: StockRepository::new(pool),
    });

    // Fixed listen port; not configurable.
    let addr = SocketAddr::from(([0, 0, 0, 0], 3001));
    web_server::run_server(addr, state).await
}
