//! Social feed API client (client-credentials OAuth).

use std::time::Duration;

use chatterdb_core::AppConfig;
use reqwest::Client;

use crate::error::SocialError;
use crate::types::{FeedItem, Listing, TokenResponse};

const DEFAULT_AUTH_BASE_URL: &str = "https://www.reddit.com";
const DEFAULT_API_BASE_URL: &str = "https://oauth.reddit.com";

/// Social feed API client holding a valid access token.
///
/// Construction performs the token exchange, so a missing-credentials
/// configuration error surfaces before any feed is touched.
pub struct SocialClient {
    client: Client,
    token: String,
    user_agent: String,
    api_base: String,
}

impl SocialClient {
    /// Connects to the production feed API.
    ///
    /// # Errors
    ///
    /// - [`SocialError::MissingCredentials`] if the config carries no client
    ///   id/secret. Checked before any network call.
    /// - [`SocialError::Http`] / [`SocialError::Api`] if the token exchange
    ///   fails.
    pub async fn connect(config: &AppConfig) -> Result<Self, SocialError> {
        Self::connect_with_base_urls(config, DEFAULT_AUTH_BASE_URL, DEFAULT_API_BASE_URL).await
    }

    /// Connects with custom auth/API base URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`SocialClient::connect`].
    pub async fn connect_with_base_urls(
        config: &AppConfig,
        auth_base: &str,
        api_base: &str,
    ) -> Result<Self, SocialError> {
        let (Some(client_id), Some(client_secret)) = (
            config.reddit_client_id.as_deref(),
            config.reddit_client_secret.as_deref(),
        ) else {
            return Err(SocialError::MissingCredentials);
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let token = fetch_token(
            &client,
            auth_base,
            client_id,
            client_secret,
            &config.reddit_user_agent,
        )
        .await?;

        Ok(Self {
            client,
            token,
            user_agent: config.reddit_user_agent.clone(),
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the hot listing for one feed, up to `limit` items.
    ///
    /// # Errors
    ///
    /// - [`SocialError::Http`] on network failure.
    /// - [`SocialError::Api`] on a non-2xx status or unparseable listing.
    pub async fn fetch_hot(&self, feed: &str, limit: usize) -> Result<Vec<FeedItem>, SocialError> {
        let url = format!("{}/r/{feed}/hot", self.api_base);
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", &self.user_agent)
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SocialError::Api(format!(
                "hot listing for r/{feed} failed with status {}",
                response.status()
            )));
        }

        let listing: Listing = response
            .json()
            .await
            .map_err(|e| SocialError::Api(format!("listing parse error for r/{feed}: {e}")))?;

        Ok(listing.data.children.into_iter().map(|c| c.data).collect())
    }
}

async fn fetch_token(
    client: &Client,
    auth_base: &str,
    client_id: &str,
    client_secret: &str,
    user_agent: &str,
) -> Result<String, SocialError> {
    let url = format!("{}/api/v1/access_token", auth_base.trim_end_matches('/'));
    let response = client
        .post(url)
        .header("User-Agent", user_agent)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SocialError::Api(format!(
            "token exchange failed with status {}",
            response.status()
        )));
    }

    let token_resp: TokenResponse = response
        .json()
        .await
        .map_err(|e| SocialError::Api(format!("token parse error: {e}")))?;

    Ok(token_resp.access_token)
}
