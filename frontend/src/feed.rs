//! Latest Bluesky posts for the footer widget.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::config;

/// `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Debug, Clone)]
pub struct AuthorFeed {
    #[serde(default, deserialize_with = "null_as_default")]
    pub feed: Vec<FeedItem>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FeedItem {
    pub post: Post,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Post {
    pub uri: String,
    pub author: Author,
    #[serde(default, deserialize_with = "null_as_default")]
    pub record: Record,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Author {
    pub handle: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Record {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Network(String),
    #[error("feed request returned status {0}")]
    Status(u16),
    #[error("feed payload malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub url: String,
    pub text: String,
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOutcome {
    Posts(Vec<PostCard>),
    Empty,
}

pub const EMPTY_FEED_HTML: &str =
    r#"<p class="bluesky-empty">No posts yet — check back soon.</p>"#;

pub fn parse_feed(body: &str, now: DateTime<Utc>) -> Result<FeedOutcome, FeedError> {
    let payload: AuthorFeed =
        serde_json::from_str(body).map_err(|e| FeedError::Malformed(e.to_string()))?;

    if payload.feed.is_empty() {
        return Ok(FeedOutcome::Empty);
    }

    let cards = payload
        .feed
        .into_iter()
        .map(|item| {
            let post = item.post;
            let created_at = post
                .record
                .created_at
                .as_deref()
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                .map(|dt| dt.with_timezone(&Utc));
            PostCard {
                url: post_url(&post.author.handle, &post.uri),
                text: post.record.text.unwrap_or_default(),
                time_label: time_ago(created_at, now),
            }
        })
        .collect();
    Ok(FeedOutcome::Posts(cards))
}

/// `at://did:plc:abc/app.bsky.feed.post/3kq` -> `https://bsky.app/profile/{handle}/post/3kq`
pub fn post_url(handle: &str, uri: &str) -> String {
    let rkey = uri.rsplit('/').next().unwrap_or_default();
    format!("{}/{}/post/{}", config::POST_PERMALINK_BASE, handle, rkey)
}

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

pub fn time_ago(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(created_at) = created_at else {
        return String::new();
    };

    let seconds = (now - created_at).num_seconds();
    match seconds {
        s if s < 60 => "just now".to_string(),
        s if s < 3_600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3_600),
        s if s < 604_800 => format!("{}d ago", s / 86_400),
        _ => date_label(&created_at.with_timezone(&Local)),
    }
}

/// en-GB short date in the given zone, e.g. "5 Mar".
pub fn date_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!("{} {}", at.day(), SHORT_MONTHS[at.month0() as usize])
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markup for the feed container. Failures render nothing at all.
pub fn render_feed(result: &Result<FeedOutcome, FeedError>) -> String {
    match result {
        Ok(FeedOutcome::Posts(cards)) => cards
            .iter()
            .map(|card| {
                format!(
                    concat!(
                        r#"<a href="{}" target="_blank" rel="noopener" class="bluesky-post">"#,
                        r#"<p class="bluesky-post-text">{}</p>"#,
                        r#"<span class="bluesky-post-time">{}</span>"#,
                        "</a>"
                    ),
                    escape_html(&card.url),
                    escape_html(&card.text),
                    escape_html(&card.time_label)
                )
            })
            .collect(),
        Ok(FeedOutcome::Empty) => EMPTY_FEED_HTML.to_string(),
        Err(_) => String::new(),
    }
}
