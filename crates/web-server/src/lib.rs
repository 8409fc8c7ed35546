use axum::{
    routing::get,
    Router,
};
use database::StockRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod middleware;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub repo: StockRepository,
}

/// Assembles the full application router: routes, the request-context
/// middleware chain, and the outer HTTP layers.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    Router::new()
        .route("/", get(handlers::index))
        .route("/api", get(handlers::api_info))
        .route(
            "/api/stocks",
            get(handlers::list_stocks).post(handlers::create_stock),
        )
        .route("/api/stocks/:stock_id", get(handlers::stock_prices))
        .route("/test", get(handlers::test_page))
        .nest_service("/board", ServeDir::new("static"))
        .fallback(handlers::not_found)
        .with_state(state)
        // Layers wrap outermost-last: the tag link runs before the stamp
        // link on the way in, so the stamp sees the label.
        .layer(axum::middleware::from_fn(middleware::stamp_request))
        .layer(axum::middleware::from_fn(middleware::tag_request))
        .layer(cors)
        // This middleware will automatically log information about every
        // incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves the application until shutdown.
pub async fn run_server(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
