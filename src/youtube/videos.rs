use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;
use crate::errors::YouTubeError;
use crate::format::{format_duration, from_now, parse_count, parse_published, value_converter_str};
use crate::models::{VideoCard, VideoDetails};
use super::{DataApi, Thumbnails};

const VIDEO_PARTS: &str = "snippet,contentDetails,statistics";

const DEFAULT_CATEGORY: &str = "0";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiVideo>>
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiVideo {
    id: Option<String>,
    snippet: Option<VideoSnippet>,
    content_details: Option<ContentDetails>,
    statistics: Option<Statistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    published_at: Option<String>,
    channel_id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    thumbnails: Option<Thumbnails>,
    channel_title: Option<String>,
    category_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
}

/// Most popular videos for a category, as shown in the feed and the
/// recommendation sidebar.
pub async fn get_most_popular(
    api: &DataApi,
    category_id: &str,
    region_code: &str,
    max_results: u32,
) -> Result<Vec<VideoCard>, YouTubeError> {
    let max_results = max_results.to_string();
    let api_response: ApiResponse = api.get("videos", &[
        ("part", VIDEO_PARTS),
        ("chart", "mostPopular"),
        ("maxResults", max_results.as_str()),
        ("regionCode", region_code),
        ("videoCategoryId", category_id),
    ]).await?;

    let now = Utc::now();
    let cards: Vec<VideoCard> = api_response.items
        .unwrap_or_default()
        .iter()
        .filter_map(|video| shape_card(video, category_id, now))
        .collect();

    debug!(category_id, count = cards.len(), "fetched most popular videos");
    Ok(cards)
}

pub async fn get_video(api: &DataApi, video_id: &str) -> Result<VideoDetails, YouTubeError> {
    let api_response: ApiResponse = api.get("videos", &[
        ("part", VIDEO_PARTS),
        ("id", video_id),
    ]).await?;

    api_response.items
        .unwrap_or_default()
        .first()
        .and_then(|video| shape_details(video, Utc::now()))
        .ok_or(YouTubeError::NotFound)
}

fn shape_card(video: &ApiVideo, fallback_category: &str, now: DateTime<Utc>) -> Option<VideoCard> {
    let video_id = video.id.clone()?;
    let snippet = video.snippet.as_ref();
    let view_count = video.statistics
        .as_ref()
        .and_then(|s| s.view_count.as_deref());
    let published = snippet
        .and_then(|s| s.published_at.as_deref())
        .and_then(parse_published);
    let category_id = snippet
        .and_then(|s| s.category_id.clone())
        .unwrap_or_else(|| fallback_category.to_string());

    Some(VideoCard {
        link: format!("/video/{}/{}", category_id, video_id),
        title: snippet.and_then(|s| s.title.clone()).unwrap_or_default(),
        channel_title: snippet.and_then(|s| s.channel_title.clone()).unwrap_or_default(),
        thumbnail: snippet
            .and_then(|s| s.thumbnails.as_ref())
            .and_then(|t| t.card_url()),
        duration: video.content_details
            .as_ref()
            .and_then(|c| c.duration.as_deref())
            .and_then(format_duration),
        views: parse_count(view_count),
        views_display: value_converter_str(view_count),
        published_at: published.map(|dt| dt.timestamp()),
        published_ago: published.map(|dt| from_now(dt, now)).unwrap_or_default(),
        video_id,
        category_id,
    })
}

fn shape_details(video: &ApiVideo, now: DateTime<Utc>) -> Option<VideoDetails> {
    let card = shape_card(video, DEFAULT_CATEGORY, now)?;
    let snippet = video.snippet.as_ref();
    let statistics = video.statistics.as_ref();
    let like_count = statistics.and_then(|s| s.like_count.as_deref());
    let comment_count = statistics.and_then(|s| s.comment_count.as_deref());

    Some(VideoDetails {
        embed_url: format!("https://www.youtube.com/embed/{}?autoplay=1", card.video_id),
        description: snippet.and_then(|s| s.description.clone()).unwrap_or_default(),
        channel_id: snippet.and_then(|s| s.channel_id.clone()),
        likes: parse_count(like_count),
        likes_display: value_converter_str(like_count),
        comments: parse_count(comment_count),
        comments_display: value_converter_str(comment_count),
        card,
    })
}
