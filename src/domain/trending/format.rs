//! Presentation rules applied to each upstream video.

use super::model::{RawCount, Thumbnails};

pub const NOT_AVAILABLE: &str = "N/A";
pub const DESCRIPTION_MAX_CHARS: usize = 150;
pub const DESCRIPTION_SUFFIX: &str = "...";

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Human-readable counter: `1.5K`, `2.3M`, `999`.
///
/// Missing, unparseable and zero counts all render as `N/A`.
pub fn format_count(count: Option<&RawCount>) -> String {
    match count.and_then(RawCount::as_u64) {
        None | Some(0) => NOT_AVAILABLE.to_string(),
        Some(n) if n >= 1_000_000 => format!("{}M", one_decimal(n, 1_000_000)),
        Some(n) if n >= 1_000 => format!("{}K", one_decimal(n, 1_000)),
        Some(n) => n.to_string(),
    }
}

/// `n / divisor` with one decimal, rounding halves up.
///
/// `{:.1}` rounds the exact f64 value and sends exact ties to the even
/// digit. A quotient is an exact f64 tie only when it equals `m / 20` with
/// `m` odd and divisible by 5 (1.25, 12.25, ...); those are rounded up here.
fn one_decimal(n: u64, divisor: u64) -> String {
    let scaled = n as u128 * 20;
    let divisor = divisor as u128;
    if scaled % divisor == 0 {
        let twentieths = scaled / divisor;
        if twentieths % 2 == 1 && twentieths % 5 == 0 {
            let tenths = (twentieths + 1) / 2;
            return format!("{}.{}", tenths / 10, tenths % 10);
        }
    }
    format!("{:.1}", n as f64 / divisor as f64)
}

/// Numeric view count used for client-side sorting; 0 when unknown.
pub fn raw_count(count: Option<&RawCount>) -> u64 {
    count.and_then(RawCount::as_u64).unwrap_or(0)
}

/// Prefer the high-resolution thumbnail, then medium.
pub fn pick_thumbnail(thumbnails: Option<&Thumbnails>) -> Option<String> {
    let thumbnails = thumbnails?;

    if let Some(url) = thumbnails.high.as_ref().and_then(|t| t.url.as_ref()) {
        return Some(url.clone());
    }
    if let Some(url) = thumbnails.medium.as_ref().and_then(|t| t.url.as_ref()) {
        return Some(url.clone());
    }
    None
}

/// First 150 characters followed by `...`.
///
/// The suffix is always appended, even to short or missing descriptions.
pub fn truncate_description(description: Option<&str>) -> String {
    let mut out: String = description
        .unwrap_or_default()
        .chars()
        .take(DESCRIPTION_MAX_CHARS)
        .collect();
    out.push_str(DESCRIPTION_SUFFIX);
    out
}

pub fn watch_url(video_id: &str) -> String {
    format!("{}{}", WATCH_URL_PREFIX, video_id)
}
