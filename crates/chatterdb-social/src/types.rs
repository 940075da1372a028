//! Raw social feed (Reddit API) response types.

use serde::Deserialize;

/// A listing response: `{ "data": { "children": [ { "data": {...} } ] } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
    pub(crate) data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
    #[serde(default)]
    pub(crate) children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Child {
    pub(crate) data: FeedItem,
}

/// One raw item from a feed listing.
///
/// Every field the feed may omit or null out is optional; normalization
/// applies the defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedItem {
    pub id: String,
    pub permalink: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub selftext: Option<String>,
    /// Creation time as UTC epoch seconds (the API sends a float).
    pub created_utc: f64,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub num_comments: Option<i64>,
}

/// OAuth token exchange response.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: String,
}
