use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;
use crate::errors::YouTubeError;
use crate::format::{from_now, parse_published, value_converter};
use crate::models::Comment;
use super::DataApi;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiCommentThread>>
}

#[derive(Debug, Deserialize)]
struct ApiCommentThread {
    snippet: Option<ThreadSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: Option<ApiComment>,
    total_reply_count: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ApiComment {
    id: Option<String>,
    snippet: Option<CommentSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    author_display_name: Option<String>,
    author_profile_image_url: Option<String>,
    text_display: Option<String>,
    text_original: Option<String>,
    like_count: Option<i64>,
    published_at: Option<String>,
}

/// Top level comments of a video. A video with comments turned off has no
/// comments rather than an error.
pub async fn get_comment_threads(
    api: &DataApi,
    video_id: &str,
    max_results: u32,
) -> Result<Vec<Comment>, YouTubeError> {
    let max_results = max_results.to_string();
    let result = api.get::<ApiResponse>("commentThreads", &[
        ("part", "snippet"),
        ("videoId", video_id),
        ("maxResults", max_results.as_str()),
        ("textFormat", "plainText"),
    ]).await;

    let api_response = match result {
        Ok(api_response) => api_response,
        Err(YouTubeError::CommentsDisabled) => {
            debug!(video_id, "comments disabled");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let now = Utc::now();
    Ok(api_response.items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|thread| shape_comment(thread, now))
        .collect())
}

fn shape_comment(thread: ApiCommentThread, now: DateTime<Utc>) -> Option<Comment> {
    let snippet = thread.snippet?;
    let comment = snippet.top_level_comment?;
    let comment_id = comment.id?;
    let body = comment.snippet?;

    let likes = body.like_count.unwrap_or_default();
    let published = body.published_at.as_deref().and_then(parse_published);

    Some(Comment {
        comment_id,
        author: body.author_display_name.unwrap_or_default(),
        author_avatar: body.author_profile_image_url,
        text: body.text_original.or(body.text_display).unwrap_or_default(),
        likes,
        likes_display: value_converter(likes),
        reply_count: snippet.total_reply_count.unwrap_or_default(),
        published_at: published.map(|dt| dt.timestamp()),
        published_ago: published.map(|dt| from_now(dt, now)).unwrap_or_default(),
    })
}
