use serde::{Deserialize, Serialize};

use crate::domain::catalog::Catalog;

/// One video as returned by `GET /api/trending`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: String,
    pub title: String,
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub url: String,
    pub views: String,
    pub likes: String,
    pub views_raw: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    pub description: String,
}

/// Response for `GET /api/trending`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub videos: Vec<VideoResponse>,
    pub region: String,
    pub category: String,
    pub total: usize,
}

/// Response for `GET /api/meta`
#[derive(Debug, Clone, Serialize)]
pub struct MetaResponse {
    pub regions: Catalog,
    pub categories: Catalog,
}
