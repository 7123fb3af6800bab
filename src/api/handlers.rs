use axum::{
    routing::get,
    Router,
    Json,
    response::IntoResponse,
    extract::{Path, Query, State},
    http::header,
};
use maud::Markup;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use crate::config::Config;
use crate::errors::YouTubeError;
use crate::models::{ChannelSummary, Comment, VideoDetails};
use crate::youtube::{
    channels::get_channel,
    comments::get_comment_threads,
    videos::{get_most_popular, get_video},
    DataApi,
};
use super::pages;
use super::types::{AppState, FeedQuery, FeedResponse, PlayerView};
use super::error::{ApiError, PageError};

const DEFAULT_CATEGORY: &str = "0";

const FEED_UNAVAILABLE: &str = "Could not load videos right now. Try again in a moment.";

fn validate_category(category_id: &str) -> Result<(), String> {
    if !category_id.is_empty() && category_id.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("Invalid category id: {}", category_id))
    }
}

fn validate_id(kind: &str, id: &str) -> Result<(), String> {
    let valid = !id.is_empty()
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(format!("Invalid {} id: {}", kind, id))
    }
}

/// Logs a failed fetch and drops it, for the parts of a page that can render
/// without their data.
fn optional<T>(part: &str, result: Result<T, YouTubeError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(part, error = %e, "rendering without data");
            None
        }
    }
}

async fn feed_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedResponse>, ApiError> {
    let category = query.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    validate_category(&category).map_err(ApiError::InvalidRequest)?;

    let items = get_most_popular(
        &state.api,
        &category,
        &state.config.region_code,
        state.config.feed_max_results,
    ).await?;

    Ok(Json(FeedResponse { category, items }))
}

async fn recommended_handler(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<String>,
) -> Result<Json<FeedResponse>, ApiError> {
    validate_category(&category_id).map_err(ApiError::InvalidRequest)?;

    let items = get_most_popular(
        &state.api,
        &category_id,
        &state.config.region_code,
        state.config.recommended_max_results,
    ).await?;

    Ok(Json(FeedResponse { category: category_id, items }))
}

async fn video_handler(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<VideoDetails>, ApiError> {
    validate_id("video", &video_id).map_err(ApiError::InvalidRequest)?;

    let video = get_video(&state.api, &video_id).await?;
    Ok(Json(video))
}

async fn channel_handler(
    State(state): State<Arc<AppState>>,
    Path(channel_id): Path<String>,
) -> Result<Json<ChannelSummary>, ApiError> {
    validate_id("channel", &channel_id).map_err(ApiError::InvalidRequest)?;

    let channel = get_channel(&state.api, &channel_id).await?;
    Ok(Json(channel))
}

async fn comments_handler(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    validate_id("video", &video_id).map_err(ApiError::InvalidRequest)?;

    let comments = get_comment_threads(&state.api, &video_id, state.config.comments_max_results).await?;
    Ok(Json(comments))
}

async fn feed_page_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FeedQuery>,
) -> Result<Markup, PageError> {
    let category = query.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    validate_category(&category).map_err(PageError::InvalidRequest)?;

    let result = get_most_popular(
        &state.api,
        &category,
        &state.config.region_code,
        state.config.feed_max_results,
    ).await;

    let page = match optional("feed", result) {
        Some(cards) => pages::render_feed(&category, &cards, None),
        None => pages::render_feed(&category, &[], Some(FEED_UNAVAILABLE)),
    };

    Ok(page)
}

async fn player_page_handler(
    State(state): State<Arc<AppState>>,
    Path((category_id, video_id)): Path<(String, String)>,
) -> Result<Markup, PageError> {
    validate_category(&category_id).map_err(PageError::InvalidRequest)?;
    validate_id("video", &video_id).map_err(PageError::InvalidRequest)?;

    let (video, comments, recommended) = tokio::join!(
        get_video(&state.api, &video_id),
        get_comment_threads(&state.api, &video_id, state.config.comments_max_results),
        get_most_popular(
            &state.api,
            &category_id,
            &state.config.region_code,
            state.config.recommended_max_results,
        ),
    );

    let video = optional("video", video);

    let channel = match video.as_ref().and_then(|v| v.channel_id.as_deref()) {
        Some(channel_id) => optional("channel", get_channel(&state.api, channel_id).await),
        None => None,
    };

    let recommended = optional("recommended", recommended)
        .unwrap_or_default()
        .into_iter()
        .filter(|card| card.video_id != video_id)
        .collect();

    let view = PlayerView {
        comments: optional("comments", comments).unwrap_or_default(),
        video_id,
        category_id,
        video,
        channel,
        recommended,
    };

    Ok(pages::render_player(&view))
}

async fn stylesheet_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/style.css"),
    )
}

pub fn create_router(config: Config) -> Router {
    let client = reqwest::Client::new();
    let api = DataApi::new(client, config.api_base.clone(), config.api_key.clone());
    info!(region = %config.region_code, api_base = %config.api_base, "data api client ready");

    let state = Arc::new(AppState { api, config });

    Router::new()
        .route("/", get(feed_page_handler))
        .route("/video/:category_id/:video_id", get(player_page_handler))
        .route("/static/style.css", get(stylesheet_handler))
        .route("/api/feed", get(feed_handler))
        .route("/api/recommended/:category_id", get(recommended_handler))
        .route("/api/video/:video_id", get(video_handler))
        .route("/api/channel/:channel_id", get(channel_handler))
        .route("/api/comments/:video_id", get(comments_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
