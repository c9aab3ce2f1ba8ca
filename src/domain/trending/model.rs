use serde::{Deserialize, Serialize};

use crate::domain::catalog::ALL_CATEGORIES;

pub const DEFAULT_REGION: &str = "US";
pub const DEFAULT_MAX_RESULTS: u32 = 20;
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// A validated request for one page of the most-popular chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingQuery {
    pub region_code: String,
    pub category_id: String,
    pub max_results: u32,
}

impl TrendingQuery {
    /// Build a query from raw query-string values, applying defaults.
    ///
    /// Empty strings count as absent. `limit` is read as a leading integer
    /// (`"10abc"` is 10); anything unparseable or zero falls back to 20, and
    /// the result is clamped to `1..=50`.
    pub fn from_params(region: Option<&str>, category: Option<&str>, limit: Option<&str>) -> Self {
        let region_code = region
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_REGION)
            .to_string();
        let category_id = category
            .filter(|c| !c.is_empty())
            .unwrap_or(ALL_CATEGORIES)
            .to_string();

        let max_results = match limit.and_then(parse_leading_int) {
            None | Some(0) => DEFAULT_MAX_RESULTS,
            Some(n) => n.clamp(1, MAX_RESULTS_LIMIT as i64) as u32,
        };

        Self {
            region_code,
            category_id,
            max_results,
        }
    }

    /// Category filter to send upstream, if any
    pub fn category_filter(&self) -> Option<&str> {
        if self.category_id.is_empty() || self.category_id == ALL_CATEGORIES {
            None
        } else {
            Some(&self.category_id)
        }
    }
}

/// Parse an optional sign followed by digits, ignoring leading whitespace and
/// any trailing garbage.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Overlong digit runs saturate; they get clamped afterwards anyway.
    let value = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Body of `GET /videos`. Both fields are optional: a rejected call carries
/// only `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Option<Vec<VideoItem>>,
    #[serde(default)]
    pub error: Option<UpstreamError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamError {
    /// Only logged, so any JSON value is kept as-is.
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: Option<VideoSnippet>,
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    #[serde(default)]
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<RawCount>,
    #[serde(default)]
    pub like_count: Option<RawCount>,
}

/// YouTube sends counters as decimal strings; plain numbers are accepted too.
///
/// Anything else (negative, fractional, objects) lands in `Other` so a single
/// odd counter never rejects the whole reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Number(u64),
    Text(String),
    Other(serde_json::Value),
}

impl RawCount {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            RawCount::Number(n) => Some(*n),
            RawCount::Text(s) => s.trim().parse().ok(),
            RawCount::Other(_) => None,
        }
    }
}
