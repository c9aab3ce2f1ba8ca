pub mod cors;
pub mod request_id;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    frontend::FrontendController,
    health::{self, not_found},
    trending::TrendingController,
};
use crate::infrastructure::config::Config;

pub use cors::cors_middleware;
pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with every route and middleware attached
pub fn create_router(
    trending_controller: Arc<TrendingController>,
    frontend_controller: Arc<FrontendController>,
) -> Router {
    // Unsupported methods on known paths get the same 404 as unknown paths
    let api_routes = Router::new()
        .route(
            "/api/trending",
            get(TrendingController::get_trending).fallback(not_found),
        )
        .route(
            "/api/meta",
            get(TrendingController::get_meta).fallback(not_found),
        )
        .with_state(trending_controller);

    let frontend_routes = Router::new()
        .route(
            "/",
            get(FrontendController::serve_index).fallback(not_found),
        )
        .route(
            "/index.html",
            get(FrontendController::serve_index).fallback(not_found),
        )
        .with_state(frontend_controller);

    Router::new()
        .route("/health", get(health::health).fallback(not_found))
        .merge(api_routes)
        .merge(frontend_routes)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(cors_middleware)),
        )
}

/// Bind to the configured address and serve until the process exits
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
