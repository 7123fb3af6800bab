//! Server-rendered HTML for the feed, the player page and the recommendation
//! sidebar. maud escapes every interpolated value.

use maud::{html, Markup, DOCTYPE};
use crate::models::{ChannelSummary, Comment, VideoCard};
use super::types::PlayerView;

pub const CATEGORIES: &[(&str, &str)] = &[
    ("0", "Home"),
    ("20", "Gaming"),
    ("2", "Automobiles"),
    ("17", "Sports"),
    ("24", "Entertainment"),
    ("28", "Technology"),
    ("10", "Music"),
    ("22", "Blogs"),
    ("25", "News"),
];

const FALLBACK_TITLE: &str = "Title Here";

const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

fn layout(title: &str, active_category: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                header.navbar { a.logo href="/" { "tube-browse" } }
                nav.sidebar {
                    @for (id, name) in CATEGORIES {
                        a.category.active[*id == active_category] href={ "/?category=" (id) } { (name) }
                    }
                }
                main.container { (body) }
            }
        }
    }
}

/// Multi-line API text with line breaks kept.
fn paragraph_lines(text: &str) -> Markup {
    html! {
        @for (i, line) in text.lines().enumerate() {
            @if i > 0 { br; }
            (line)
        }
    }
}

fn thumbnail(card: &VideoCard) -> Markup {
    html! {
        div.thumb {
            @if let Some(url) = &card.thumbnail {
                img src=(url) alt="";
            }
            @if let Some(duration) = &card.duration {
                span.duration { (duration) }
            }
        }
    }
}

fn feed_card(card: &VideoCard) -> Markup {
    html! {
        a.card href=(card.link) {
            (thumbnail(card))
            h2 { (card.title) }
            h3 { (card.channel_title) }
            p { (card.views_display) " views • " (card.published_ago) }
        }
    }
}

pub fn render_feed(category: &str, cards: &[VideoCard], notice: Option<&str>) -> Markup {
    let name = CATEGORIES
        .iter()
        .find(|(id, _)| *id == category)
        .map(|(_, name)| *name)
        .unwrap_or("Videos");

    let body = html! {
        @if let Some(notice) = notice {
            p.notice { (notice) }
        }
        div.feed {
            @for card in cards {
                (feed_card(card))
            }
        }
    };

    layout(name, category, body)
}

pub fn render_sidebar(cards: &[VideoCard]) -> Markup {
    html! {
        div.recommended {
            @for card in cards {
                a.side-video-list href=(card.link) {
                    (thumbnail(card))
                    div.vid-info {
                        h4 { (card.title) }
                        p { (card.channel_title) }
                        p { (card.views_display) " Views" }
                    }
                }
            }
        }
    }
}

fn publisher(channel: Option<&ChannelSummary>) -> Markup {
    html! {
        div.publisher {
            @if let Some(channel) = channel {
                @if let Some(avatar) = &channel.avatar {
                    img src=(avatar) alt="";
                }
                div {
                    p { (channel.title) }
                    span {
                        @if !channel.hidden_subscriber_count {
                            (channel.subscribers_display) " Subscribers"
                        }
                    }
                }
                a.subscribe href={ "https://www.youtube.com/channel/" (channel.channel_id) "?sub_confirmation=1" } {
                    "Subscribe"
                }
            }
        }
    }
}

fn comment(comment: &Comment) -> Markup {
    html! {
        div.comment {
            @if let Some(avatar) = &comment.author_avatar {
                img src=(avatar) alt="";
            }
            div {
                h3 { (comment.author) " " span { (comment.published_ago) } }
                p { (paragraph_lines(&comment.text)) }
                div.comment-action {
                    span { "👍 " (comment.likes_display) }
                }
            }
        }
    }
}

pub fn render_player(view: &PlayerView) -> Markup {
    let embed_url = view
        .video
        .as_ref()
        .map(|v| v.embed_url.clone())
        .unwrap_or_else(|| format!("https://www.youtube.com/embed/{}?autoplay=1", view.video_id));
    let title = view
        .video
        .as_ref()
        .map(|v| v.card.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or(FALLBACK_TITLE);

    let body = html! {
        div.play-container {
            div.play-video {
                iframe src=(embed_url) frameborder="0" allow=(PLAYER_ALLOW)
                    referrerpolicy="strict-origin-when-cross-origin" allowfullscreen {}
                h3 { (title) }
                @if let Some(video) = &view.video {
                    div.play-video-info {
                        p { (video.card.views_display) " Views • " (video.card.published_ago) }
                        div {
                            span { "👍 " (video.likes_display) }
                            span { "👎" }
                            span { "Share" }
                            span { "Save" }
                        }
                    }
                }
                hr;
                (publisher(view.channel.as_ref()))
                div.vid-description {
                    @if let Some(video) = &view.video {
                        p { (paragraph_lines(&video.description)) }
                        hr;
                        h4 { (video.comments_display) " Comments" }
                    }
                    @for c in &view.comments {
                        (comment(c))
                    }
                }
            }
            (render_sidebar(&view.recommended))
        }
    };

    layout(title, &view.category_id, body)
}

/// Plain page for requests the router rejects before fetching anything.
pub fn render_error(message: &str) -> Markup {
    let body = html! {
        p.notice { (message) }
        p { a href="/" { "Back to the feed" } }
    };

    layout("Bad request", "", body)
}
