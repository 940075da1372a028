//! Normalization of raw feed items into the shared post shape.

use chrono::{DateTime, NaiveDateTime};

use crate::types::FeedItem;

/// Platform tag for all posts ingested from the social feed.
pub const SOCIAL_PLATFORM: &str = "social";

/// A feed item normalized for upsert.
#[derive(Debug, Clone)]
pub struct NormalizedSocialPost {
    pub platform_post_id: String,
    pub url: String,
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    /// Item creation time as naive UTC, matching the storage convention.
    pub created_at: NaiveDateTime,
    pub score: i32,
    pub comments: i32,
}

/// Converts a raw [`FeedItem`] into a [`NormalizedSocialPost`].
///
/// Returns `None` when the creation timestamp is out of range; a per-item
/// problem that skips the item, never the run. Missing score/comment counts
/// default to 0; an empty body becomes `None`.
#[must_use]
pub fn normalize_post(item: &FeedItem) -> Option<NormalizedSocialPost> {
    #[allow(clippy::cast_possible_truncation)]
    let created_at = DateTime::from_timestamp(item.created_utc as i64, 0)?.naive_utc();

    Some(NormalizedSocialPost {
        platform_post_id: item.id.clone(),
        url: format!("https://www.reddit.com{}", item.permalink),
        author: item.author.clone().filter(|a| !a.is_empty()),
        title: item.title.clone().filter(|t| !t.is_empty()),
        body: item.selftext.clone().filter(|b| !b.is_empty()),
        created_at,
        score: clamp_count(item.score),
        comments: clamp_count(item.num_comments),
    })
}

fn clamp_count(value: Option<i64>) -> i32 {
    let v = value.unwrap_or(0);
    i32::try_from(v.clamp(i64::from(i32::MIN), i64::from(i32::MAX))).unwrap_or(0)
}
