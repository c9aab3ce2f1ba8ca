use super::error::{TrendingServiceError, UNKNOWN_UPSTREAM_ERROR_MESSAGE};
use super::format::{format_count, pick_thumbnail, raw_count, truncate_description, watch_url};
use super::{
    MetaResponse, TrendingQuery, TrendingRepository, TrendingResponse, VideoItem, VideoResponse,
};
use crate::domain::catalog::{self, CATEGORIES, REGIONS};
use async_trait::async_trait;
use std::sync::Arc;

pub struct TrendingService {
    repository: Arc<dyn TrendingRepository>,
}

impl TrendingService {
    pub fn new(repository: Arc<dyn TrendingRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
pub trait TrendingServiceApi: Send + Sync {
    async fn get_trending(
        &self,
        query: TrendingQuery,
    ) -> Result<TrendingResponse, TrendingServiceError>;

    fn get_meta(&self) -> MetaResponse;
}

#[async_trait]
impl TrendingServiceApi for TrendingService {
    async fn get_trending(
        &self,
        query: TrendingQuery,
    ) -> Result<TrendingResponse, TrendingServiceError> {
        tracing::info!(
            region = %query.region_code,
            category = %query.category_id,
            limit = query.max_results,
            "Fetching trending videos"
        );

        let reply = self.repository.fetch_most_popular(&query).await?;

        if let Some(error) = reply.error {
            let message = error
                .message
                .unwrap_or_else(|| UNKNOWN_UPSTREAM_ERROR_MESSAGE.to_string());
            tracing::warn!(
                code = ?error.code,
                message = %message,
                "YouTube API rejected the request"
            );
            return Err(TrendingServiceError::Upstream(message));
        }

        let videos: Vec<VideoResponse> = reply
            .items
            .unwrap_or_default()
            .into_iter()
            .map(to_video_response)
            .collect();

        Ok(TrendingResponse {
            total: videos.len(),
            videos,
            region: catalog::region_name(&query.region_code),
            category: catalog::category_name(&query.category_id),
        })
    }

    fn get_meta(&self) -> MetaResponse {
        MetaResponse {
            regions: REGIONS,
            categories: CATEGORIES,
        }
    }
}

fn to_video_response(item: VideoItem) -> VideoResponse {
    let snippet = item.snippet.unwrap_or_default();
    let statistics = item.statistics.unwrap_or_default();

    VideoResponse {
        url: watch_url(&item.id),
        id: item.id,
        title: snippet.title.unwrap_or_default(),
        channel: snippet.channel_title.unwrap_or_default(),
        thumbnail: pick_thumbnail(snippet.thumbnails.as_ref()),
        views: format_count(statistics.view_count.as_ref()),
        likes: format_count(statistics.like_count.as_ref()),
        views_raw: raw_count(statistics.view_count.as_ref()),
        published_at: snippet.published_at,
        description: truncate_description(snippet.description.as_deref()),
    }
}
