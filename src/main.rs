use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trending_proxy::controllers::{frontend::FrontendController, trending::TrendingController};
use trending_proxy::domain::trending::TrendingService;
use trending_proxy::infrastructure::config::{Config, LogFormat};
use trending_proxy::infrastructure::http::{create_router, start_http_server};
use trending_proxy::infrastructure::repositories::YouTubeTrendingRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting YouTube trending proxy on {}:{}",
        config.host,
        config.port
    );

    if config.uses_placeholder_api_key() {
        tracing::warn!(
            "YOUTUBE_API_KEY is not set; every upstream call will be rejected. \
             Export YOUTUBE_API_KEY=your_key_here and restart."
        );
    }

    tracing::info!(
        base_url = %config.youtube_api_base_url,
        timeout_secs = ?config.upstream_timeout_secs,
        index_path = %config.index_path.display(),
        "Upstream and frontend configuration loaded"
    );

    let config = Arc::new(config);

    // Repository -> service -> controllers
    let trending_repo = Arc::new(YouTubeTrendingRepository::new(
        config.youtube_api_key.clone(),
        config.youtube_api_base_url.clone(),
        config.upstream_timeout_secs.map(Duration::from_secs),
    )?);
    let trending_service = Arc::new(TrendingService::new(trending_repo));

    let trending_controller = Arc::new(TrendingController::new(trending_service));
    let frontend_controller = Arc::new(FrontendController::new(config.index_path.clone()));

    let app = create_router(trending_controller, frontend_controller);

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "trending_proxy=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "trending_proxy=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
