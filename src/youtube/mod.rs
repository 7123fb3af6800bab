pub mod channels;
pub mod comments;
pub mod videos;

#[cfg(test)]
pub(crate) mod mock;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use crate::errors::YouTubeError;

pub const DEFAULT_API_BASE: &str = "https://youtube.googleapis.com/youtube/v3";

const QUOTA_EXCEEDED_PREFIX: &str = "The request cannot be completed because you have exceeded your";

/// Handle on the Data API: the HTTP client, where to send requests and the key
/// to send with them.
#[derive(Debug, Clone)]
pub struct DataApi {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<Vec<ErrorDetail>>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    reason: Option<String>,
}

impl ErrorBody {
    fn has_reason(&self, reason: &str) -> bool {
        self.errors
            .as_ref()
            .map(|errors| errors.iter().any(|e| e.reason.as_deref() == Some(reason)))
            .unwrap_or(false)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnails {
    default: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: Option<String>,
}

impl Thumbnails {
    /// Card-sized image: medium, then high, then default.
    pub(crate) fn card_url(&self) -> Option<String> {
        [&self.medium, &self.high, &self.default]
            .into_iter()
            .find_map(|t| t.as_ref().and_then(|t| t.url.clone()))
    }

    /// Avatar-sized image: default, then medium.
    pub(crate) fn avatar_url(&self) -> Option<String> {
        [&self.default, &self.medium]
            .into_iter()
            .find_map(|t| t.as_ref().and_then(|t| t.url.clone()))
    }
}

impl DataApi {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<T, YouTubeError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), resource);
        debug!(%url, ?query, "requesting data api");

        let resp = self.client
            .get(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .query(query)
            .send()
            .await?;

        let resp = check_status(resp).await?;

        resp.json::<T>()
            .await
            .map_err(|e| YouTubeError::ParseError(e.to_string()))
    }
}

async fn check_status(resp: Response) -> Result<Response, YouTubeError> {
    let status = resp.status();
    match status {
        StatusCode::OK => Ok(resp),
        StatusCode::TOO_MANY_REQUESTS => Err(YouTubeError::Ratelimited),
        StatusCode::NOT_FOUND => Err(YouTubeError::NotFound),
        StatusCode::UNAUTHORIZED => Err(YouTubeError::Unauthorized),
        StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
            Err(YouTubeError::InternalServerError)
        }
        StatusCode::FORBIDDEN => {
            let error = read_error_body(resp, status).await?;
            match error {
                Some(body) if body.has_reason("commentsDisabled") => Err(YouTubeError::CommentsDisabled),
                Some(body) if body.message.as_deref().is_some_and(|m| m.starts_with(QUOTA_EXCEEDED_PREFIX)) => {
                    Err(YouTubeError::Ratelimited)
                }
                _ => Err(YouTubeError::Forbidden),
            }
        }
        StatusCode::BAD_REQUEST => {
            let message = read_error_body(resp, status)
                .await?
                .and_then(|body| body.message)
                .unwrap_or_else(|| "bad request".to_string());
            Err(YouTubeError::BadRequest(message))
        }
        status => {
            let body = resp
                .text()
                .await
                .map_err(|e| YouTubeError::ParseError(e.to_string()))?;
            warn!(status = status.as_u16(), %body, "unexpected status from data api");
            Err(YouTubeError::UnknownStatusCode(status))
        }
    }
}

async fn read_error_body(resp: Response, status: StatusCode) -> Result<Option<ErrorBody>, YouTubeError> {
    let body = resp
        .text()
        .await
        .map_err(|e| YouTubeError::ParseError(e.to_string()))?;
    warn!(status = status.as_u16(), %body, "data api returned an error");

    Ok(serde_json::from_str::<ErrorResponse>(&body).ok().map(|r| r.error))
}
