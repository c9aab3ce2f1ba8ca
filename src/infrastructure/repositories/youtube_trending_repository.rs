use crate::domain::trending::{
    TrendingQuery, TrendingRepository, TrendingServiceError, VideoListResponse,
};
use async_trait::async_trait;
use std::time::Duration;

const VIDEOS_PATH: &str = "/videos";
const PARTS: &str = "snippet,statistics";
const CHART: &str = "mostPopular";

/// YouTube Data API v3 implementation of the trending repository
pub struct YouTubeTrendingRepository {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl YouTubeTrendingRepository {
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: builder.build()?,
        })
    }

    /// Query string sent to `GET /videos`
    fn query_params(&self, query: &TrendingQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", PARTS.to_string()),
            ("chart", CHART.to_string()),
            ("maxResults", query.max_results.to_string()),
            ("key", self.api_key.clone()),
            ("regionCode", query.region_code.clone()),
        ];
        if let Some(category) = query.category_filter() {
            params.push(("videoCategoryId", category.to_string()));
        }
        params
    }
}

#[async_trait]
impl TrendingRepository for YouTubeTrendingRepository {
    async fn fetch_most_popular(
        &self,
        query: &TrendingQuery,
    ) -> Result<VideoListResponse, TrendingServiceError> {
        let url = format!("{}{}", self.base_url, VIDEOS_PATH);

        // Error replies come with a 4xx status but the same JSON envelope, so
        // the status is not checked here.
        let response = self
            .http_client
            .get(&url)
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(|e| TrendingServiceError::Transport(e.to_string()))?;

        tracing::debug!(status = %response.status(), "YouTube API responded");

        let body = response
            .bytes()
            .await
            .map_err(|e| TrendingServiceError::Transport(e.to_string()))?;

        serde_json::from_slice::<VideoListResponse>(&body)
            .map_err(|e| TrendingServiceError::Parse(e.to_string()))
    }
}
