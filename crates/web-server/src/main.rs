use database::StockRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use web_server::AppState;

// This main function is the entry point when running `cargo run -p web-server`.
// It performs the same startup sequence as the root binary's `serve`
// command, without the CLI wrapper.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = configuration::load_settings()?;
    let pool = database::connect(&settings.db).await?;
    database::run_migrations(&pool).await?;

    let state = Arc::new(AppState {
        repo: StockRepository::new(pool),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], 3001));
    web_server::run_server(addr, state).await
}
