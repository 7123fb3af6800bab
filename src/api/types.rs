use serde::{Deserialize, Serialize};
use crate::config::Config;
use crate::models::{ChannelSummary, Comment, VideoCard, VideoDetails};
use crate::youtube::DataApi;

pub struct AppState {
    pub api: DataApi,
    pub config: Config,
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub category: String,
    pub items: Vec<VideoCard>,
}

/// Everything the player page shows. Each part is fetched on its own and may
/// be missing.
#[derive(Debug, Serialize)]
pub struct PlayerView {
    pub video_id: String,
    pub category_id: String,
    pub video: Option<VideoDetails>,
    pub channel: Option<ChannelSummary>,
    pub comments: Vec<Comment>,
    pub recommended: Vec<VideoCard>,
}
