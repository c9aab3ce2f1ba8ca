use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use trending_proxy::infrastructure::config::{Config, LogFormat};

pub mod api_client;

use api_client::TestClient;
use upstream_stub::StubUpstream;

pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestContext {
    pub client: TestClient,
    pub upstream: StubUpstream,
    #[allow(dead_code)]
    pub config: Config,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let upstream = StubUpstream::start().await;
            let config = test_config(&upstream.base_url);
            let client = spawn_app(config.clone()).await;

            Self {
                client,
                upstream,
                config,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Servers are dropped together with the test runtime
        }
    }
}

/// Configuration pointing the app at a stub upstream and the bundled frontend
pub fn test_config(upstream_base_url: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        log_format: LogFormat::Pretty,
        youtube_api_key: TEST_API_KEY.to_string(),
        youtube_api_base_url: upstream_base_url.to_string(),
        upstream_timeout_secs: None,
        index_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public/index.html"),
    }
}

/// Wire the app exactly as `main` does and serve it on an ephemeral port
pub async fn spawn_app(config: Config) -> TestClient {
    use trending_proxy::{
        controllers::{frontend::FrontendController, trending::TrendingController},
        domain::trending::TrendingService,
        infrastructure::{http::create_router, repositories::YouTubeTrendingRepository},
    };

    let trending_repo = Arc::new(
        YouTubeTrendingRepository::new(
            config.youtube_api_key.clone(),
            config.youtube_api_base_url.clone(),
            config.upstream_timeout_secs.map(Duration::from_secs),
        )
        .expect("Failed to build upstream client"),
    );
    let trending_service = Arc::new(TrendingService::new(trending_repo));
    let trending_controller = Arc::new(TrendingController::new(trending_service));
    let frontend_controller = Arc::new(FrontendController::new(config.index_path.clone()));

    let app = create_router(trending_controller, frontend_controller);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestClient::new(&format!("http://{}", addr))
}

/// Base URL on which nothing is listening
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local addr");
    drop(listener);
    format!("http://{}/youtube/v3", addr)
}
