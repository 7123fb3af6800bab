//! In-process stand-in for the Data API used by the tests.

use std::collections::HashMap;
use axum::{
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json,
    Router,
};
use serde_json::{json, Value};

pub(crate) const API_KEY: &str = "test-key";
pub(crate) const QUOTA_KEY: &str = "quota-key";
pub(crate) const TEAPOT_KEY: &str = "teapot-key";
pub(crate) const UNAUTHORIZED_KEY: &str = "revoked-key";
pub(crate) const BROKEN_KEY: &str = "backend-error-key";
pub(crate) const UNAVAILABLE_KEY: &str = "unavailable-key";

pub(crate) const VIDEO_ID: &str = "dQw4w9WgXcQ";
pub(crate) const VIDEO_TITLE: &str = "Rick Astley - Never Gonna Give You Up (Official Music Video)";
pub(crate) const CHANNEL_ID: &str = "UCuAXFkgsw1L7xaCfnd5JJOw";
pub(crate) const COMMENTS_DISABLED_VIDEO_ID: &str = "noComments1";
pub(crate) const MISSING_CATEGORY: &str = "999";

/// Binds the mock on an ephemeral port and returns its base url.
pub(crate) async fn spawn() -> String {
    let app = Router::new()
        .route("/videos", get(videos))
        .route("/channels", get(channels))
        .route("/commentThreads", get(comment_threads));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn error(status: StatusCode, reason: &str, message: &str) -> Response {
    (status, Json(json!({
        "error": {
            "code": status.as_u16(),
            "message": message,
            "errors": [{ "message": message, "domain": "youtube", "reason": reason }]
        }
    }))).into_response()
}

fn check_key(headers: &HeaderMap) -> Result<(), Response> {
    match headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) {
        Some(API_KEY) => Ok(()),
        Some(QUOTA_KEY) => Err(error(
            StatusCode::FORBIDDEN,
            "quotaExceeded",
            "The request cannot be completed because you have exceeded your <a href=\"/youtube/v3/getting-started#quota\">quota</a>.",
        )),
        Some(TEAPOT_KEY) => Err((StatusCode::IM_A_TEAPOT, "short and stout").into_response()),
        Some(UNAUTHORIZED_KEY) => Err(error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "Request is missing required authentication credential.",
        )),
        Some(BROKEN_KEY) => Err(error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "backendError",
            "Backend Error",
        )),
        Some(UNAVAILABLE_KEY) => Err(error(
            StatusCode::SERVICE_UNAVAILABLE,
            "backendError",
            "The service is currently unavailable.",
        )),
        _ => Err(error(
            StatusCode::BAD_REQUEST,
            "badRequest",
            "API key not valid. Please pass a valid API key.",
        )),
    }
}

fn param<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    params.get(name).map(String::as_str)
}

fn rick_roll() -> Value {
    json!({
        "kind": "youtube#video",
        "id": VIDEO_ID,
        "snippet": {
            "publishedAt": "2009-10-25T06:57:33Z",
            "channelId": CHANNEL_ID,
            "title": VIDEO_TITLE,
            "description": "The official video for “Never Gonna Give You Up” by Rick Astley",
            "thumbnails": {
                "default": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg" },
                "medium": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg" },
                "high": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg" }
            },
            "channelTitle": "Rick Astley",
            "categoryId": "10"
        },
        "contentDetails": { "duration": "PT3M33S" },
        "statistics": {
            "viewCount": "1234567890",
            "likeCount": "15000000",
            "commentCount": "2300000"
        }
    })
}

fn popular(category: &str) -> Vec<Value> {
    vec![
        json!({
            "id": "popular0001",
            "snippet": {
                "publishedAt": "2024-05-01T10:00:00Z",
                "channelId": "UCpopular0001",
                "title": "Top of the charts",
                "thumbnails": {
                    "medium": { "url": "https://i.ytimg.com/vi/popular0001/mqdefault.jpg" }
                },
                "channelTitle": "Chart Channel",
                "categoryId": category
            },
            "contentDetails": { "duration": "PT1H2M3S" },
            "statistics": { "viewCount": "48213" }
        }),
        json!({
            "id": "popular0002",
            "snippet": {
                "title": "No stats here",
                "thumbnails": {
                    "default": { "url": "https://i.ytimg.com/vi/popular0002/default.jpg" }
                },
                "channelTitle": "Tom & Jerry <Live>"
            }
        }),
        json!({
            "snippet": { "title": "Missing id" }
        }),
        rick_roll(),
    ]
}

async fn videos(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if let Err(resp) = check_key(&headers) {
        return resp;
    }

    if param(&params, "part") != Some("snippet,contentDetails,statistics") {
        return error(StatusCode::BAD_REQUEST, "invalidPart", "Unexpected part parameter.");
    }

    if let Some(id) = param(&params, "id") {
        let items: Vec<Value> = if id == VIDEO_ID { vec![rick_roll()] } else { Vec::new() };
        return Json(json!({ "kind": "youtube#videoListResponse", "items": items })).into_response();
    }

    if param(&params, "chart") == Some("mostPopular") && param(&params, "regionCode").is_some() {
        let category = param(&params, "videoCategoryId").unwrap_or("0");
        if category == MISSING_CATEGORY {
            return error(
                StatusCode::NOT_FOUND,
                "videoChartNotFound",
                "The requested video chart is not supported or is not available.",
            );
        }

        let max_results = param(&params, "maxResults")
            .and_then(|m| m.parse::<usize>().ok())
            .unwrap_or(5);
        let items: Vec<Value> = popular(category).into_iter().take(max_results).collect();
        return Json(json!({ "kind": "youtube#videoListResponse", "items": items })).into_response();
    }

    error(StatusCode::BAD_REQUEST, "missingRequiredParameter", "No filter selected.")
}

async fn channels(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if let Err(resp) = check_key(&headers) {
        return resp;
    }

    if param(&params, "part") != Some("snippet,statistics") {
        return error(StatusCode::BAD_REQUEST, "invalidPart", "Unexpected part parameter.");
    }

    if param(&params, "id") != Some(CHANNEL_ID) {
        // the real API leaves `items` out entirely when nothing matches
        return Json(json!({ "kind": "youtube#channelListResponse" })).into_response();
    }

    Json(json!({
        "kind": "youtube#channelListResponse",
        "items": [{
            "id": CHANNEL_ID,
            "snippet": {
                "title": "Rick Astley",
                "customUrl": "@rickastleyyt",
                "thumbnails": {
                    "default": { "url": "https://yt3.ggpht.com/rick=s88" },
                    "medium": { "url": "https://yt3.ggpht.com/rick=s240" }
                }
            },
            "statistics": {
                "subscriberCount": "4210000",
                "hiddenSubscriberCount": false
            }
        }]
    })).into_response()
}

async fn comment_threads(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if let Err(resp) = check_key(&headers) {
        return resp;
    }

    if param(&params, "part") != Some("snippet") || param(&params, "textFormat") != Some("plainText") {
        return error(StatusCode::BAD_REQUEST, "invalidPart", "Unexpected part parameter.");
    }

    match param(&params, "videoId") {
        Some(COMMENTS_DISABLED_VIDEO_ID) => error(
            StatusCode::FORBIDDEN,
            "commentsDisabled",
            "The video identified by the <code>videoId</code> parameter has disabled comments.",
        ),
        Some(VIDEO_ID) => Json(json!({
            "kind": "youtube#commentThreadListResponse",
            "items": [
                {
                    "id": "UgzFirst",
                    "snippet": {
                        "videoId": VIDEO_ID,
                        "topLevelComment": {
                            "id": "UgzFirst",
                            "snippet": {
                                "authorDisplayName": "@listener",
                                "authorProfileImageUrl": "https://yt3.ggpht.com/listener=s48",
                                "textDisplay": "Still a <banger>",
                                "textOriginal": "Still a <banger>",
                                "likeCount": 2440,
                                "publishedAt": "2024-05-30T12:00:00Z"
                            }
                        },
                        "totalReplyCount": 12
                    }
                },
                {
                    "id": "UgzSecond",
                    "snippet": {
                        "topLevelComment": {
                            "id": "UgzSecond",
                            "snippet": { "textDisplay": "first" }
                        }
                    }
                }
            ]
        })).into_response(),
        _ => Json(json!({ "kind": "youtube#commentThreadListResponse", "items": [] })).into_response(),
    }
}
