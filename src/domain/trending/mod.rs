pub mod dto;
pub mod error;
pub mod format;
pub mod model;
pub mod service;

pub use dto::{MetaResponse, TrendingResponse, VideoResponse};
pub use error::TrendingServiceError;
pub use model::{TrendingQuery, VideoItem, VideoListResponse};
pub use service::{TrendingService, TrendingServiceApi};

use async_trait::async_trait;

/// Source of the most-popular chart.
///
/// Implementations perform exactly one upstream call per invocation and
/// return the decoded body as-is, including an upstream `error` object if
/// one was sent. Only transport and decoding failures are errors here.
#[async_trait]
pub trait TrendingRepository: Send + Sync {
    async fn fetch_most_popular(
        &self,
        query: &TrendingQuery,
    ) -> Result<VideoListResponse, TrendingServiceError>;
}
