//! Social feed (Reddit API) client and post normalization for chatterdb.
//!
//! Exchanges client credentials for an OAuth token, pulls hot listings per
//! feed, and normalizes raw items into the shared post shape.

mod client;
mod error;
mod normalize;
mod types;

pub use client::SocialClient;
pub use error::SocialError;
pub use normalize::{normalize_post, NormalizedSocialPost, SOCIAL_PLATFORM};
pub use types::FeedItem;
