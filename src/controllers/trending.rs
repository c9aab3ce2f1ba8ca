use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::trending::{
        MetaResponse, TrendingQuery, TrendingResponse, TrendingService, TrendingServiceApi,
    },
    error::AppResult,
};

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct TrendingParams {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Kept as text so that non-numeric values fall back to the default
    /// instead of being rejected.
    #[serde(default)]
    pub limit: Option<String>,
}

pub struct TrendingController {
    trending_service: Arc<TrendingService>,
}

impl TrendingController {
    pub fn new(trending_service: Arc<TrendingService>) -> Self {
        Self { trending_service }
    }

    /// GET /api/trending - Most popular videos for a region and category
    pub async fn get_trending(
        State(controller): State<Arc<TrendingController>>,
        Query(params): Query<TrendingParams>,
    ) -> AppResult<Json<TrendingResponse>> {
        let query = TrendingQuery::from_params(
            params.region.as_deref(),
            params.category.as_deref(),
            params.limit.as_deref(),
        );

        let response = controller.trending_service.get_trending(query).await?;
        Ok(Json(response))
    }

    /// GET /api/meta - Supported regions and categories
    pub async fn get_meta(State(controller): State<Arc<TrendingController>>) -> Json<MetaResponse> {
        Json(controller.trending_service.get_meta())
    }
}
