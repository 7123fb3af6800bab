use serde::Deserialize;
use crate::errors::YouTubeError;
use crate::format::{parse_count, value_converter_str};
use crate::models::ChannelSummary;
use super::{DataApi, Thumbnails};

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiChannel>>
}

#[derive(Debug, Deserialize)]
struct ApiChannel {
    id: Option<String>,
    snippet: Option<ChannelSnippet>,
    statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelSnippet {
    title: Option<String>,
    custom_url: Option<String>,
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelStatistics {
    subscriber_count: Option<String>,
    hidden_subscriber_count: Option<bool>,
}

/// Publisher block of the player page.
pub async fn get_channel(api: &DataApi, channel_id: &str) -> Result<ChannelSummary, YouTubeError> {
    let api_response: ApiResponse = api.get("channels", &[
        ("part", "snippet,statistics"),
        ("id", channel_id),
    ]).await?;

    let channel = api_response.items
        .and_then(|mut items| items.pop())
        .ok_or(YouTubeError::NotFound)?;

    Ok(shape_channel(channel, channel_id))
}

fn shape_channel(channel: ApiChannel, requested_id: &str) -> ChannelSummary {
    let snippet = channel.snippet.as_ref();
    let statistics = channel.statistics.as_ref();
    let subscriber_count = statistics.and_then(|s| s.subscriber_count.as_deref());

    ChannelSummary {
        title: snippet.and_then(|s| s.title.clone()).unwrap_or_default(),
        handle: snippet
            .and_then(|s| s.custom_url.as_deref())
            .and_then(|h| h.strip_prefix('@'))
            .map(str::to_string),
        avatar: snippet
            .and_then(|s| s.thumbnails.as_ref())
            .and_then(|t| t.avatar_url()),
        subscribers: parse_count(subscriber_count),
        subscribers_display: value_converter_str(subscriber_count),
        hidden_subscriber_count: statistics
            .and_then(|s| s.hidden_subscriber_count)
            .unwrap_or_default(),
        channel_id: channel.id.unwrap_or_else(|| requested_id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;
    use crate::youtube::mock;

    #[test]
    fn test_shape_channel_legacy_custom_url() {
        let channel: ApiChannel = serde_json::from_value(serde_json::json!({
            "snippet": { "title": "Old Timer", "customUrl": "oldtimer" },
            "statistics": { "hiddenSubscriberCount": true }
        })).unwrap();

        let summary = shape_channel(channel, "UCold");
        assert_eq!(summary.channel_id, "UCold");
        assert_eq!(summary.handle, None);
        assert!(summary.hidden_subscriber_count);
        assert_eq!(summary.subscribers, None);
    }

    #[tokio::test]
    async fn test_get_channel() {
        let base = mock::spawn().await;
        let api = DataApi::new(Client::new(), base, mock::API_KEY);

        match get_channel(&api, mock::CHANNEL_ID).await {
            Ok(channel) => {
                assert_eq!(channel.channel_id, mock::CHANNEL_ID);
                assert_eq!(channel.title, "Rick Astley");
                assert_eq!(channel.handle.as_deref(), Some("rickastleyyt"));
                assert_eq!(channel.avatar.as_deref(), Some("https://yt3.ggpht.com/rick=s88"));
                assert_eq!(channel.subscribers, Some(4210000));
                assert_eq!(channel.subscribers_display, "4M");
                assert!(!channel.hidden_subscriber_count);
            }
            Err(e) => panic!("Expected successful response, got error: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_get_channel_missing() {
        let base = mock::spawn().await;
        let api = DataApi::new(Client::new(), base, mock::API_KEY);

        let result = get_channel(&api, "UCnobody").await;
        assert!(matches!(result, Err(YouTubeError::NotFound)));
    }
}
