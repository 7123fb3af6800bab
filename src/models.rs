use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VideoCard {
    pub video_id: String,
    pub category_id: String,
    pub title: String,
    pub channel_title: String,
    pub thumbnail: Option<String>,
    pub duration: Option<String>,
    pub views: Option<i64>,
    pub views_display: String,
    pub published_at: Option<i64>,
    pub published_ago: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoDetails {
    #[serde(flatten)]
    pub card: VideoCard,
    pub description: String,
    pub channel_id: Option<String>,
    pub likes: Option<i64>,
    pub likes_display: String,
    pub comments: Option<i64>,
    pub comments_display: String,
    pub embed_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelSummary {
    pub channel_id: String,
    pub title: String,
    pub handle: Option<String>,
    pub avatar: Option<String>,
    pub subscribers: Option<i64>,
    pub subscribers_display: String,
    pub hidden_subscriber_count: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub comment_id: String,
    pub author: String,
    pub author_avatar: Option<String>,
    pub text: String,
    pub likes: i64,
    pub likes_display: String,
    pub reply_count: i64,
    pub published_at: Option<i64>,
    pub published_ago: String,
}
