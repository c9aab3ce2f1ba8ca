use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use std::sync::Arc;

pub struct FrontendController {
    index_path: PathBuf,
}

impl FrontendController {
    pub fn new(index_path: PathBuf) -> Self {
        Self { index_path }
    }

    /// GET / and GET /index.html
    ///
    /// The page is read from disk on every request so edits show up without a
    /// restart.
    pub async fn serve_index(State(controller): State<Arc<FrontendController>>) -> Response {
        match tokio::fs::read(&controller.index_path).await {
            Ok(content) => ([(header::CONTENT_TYPE, "text/html")], content).into_response(),
            Err(e) => {
                tracing::error!(
                    path = %controller.index_path.display(),
                    error = %e,
                    "Failed to read frontend"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, "Error loading frontend").into_response()
            }
        }
    }
}
