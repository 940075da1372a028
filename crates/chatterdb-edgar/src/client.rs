//! HTTP client for the SEC EDGAR public data endpoints.
//!
//! Wraps `reqwest` with EDGAR-specific error handling and typed response
//! deserialization. The SEC requires a descriptive `User-Agent` with contact
//! information on every request; the caller supplies it at construction.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::EdgarError;
use crate::types::{RecentFilings, SubmissionsResponse, TickerEntry};

const DEFAULT_WWW_BASE_URL: &str = "https://www.sec.gov/";
const DEFAULT_DATA_BASE_URL: &str = "https://data.sec.gov/";

/// Client for the EDGAR ticker directory and submissions endpoints.
///
/// The ticker directory lives on `www.sec.gov` while submission indexes live
/// on `data.sec.gov`, so the client carries both base URLs. Use
/// [`EdgarClient::new`] for production or [`EdgarClient::with_base_urls`] to
/// point at a mock server in tests.
pub struct EdgarClient {
    client: Client,
    www_base: Url,
    data_base: Url,
}

impl EdgarClient {
    /// Creates a new client pointed at the production EDGAR endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`EdgarError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`EdgarError::Config`] if a base URL is
    /// invalid.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, EdgarError> {
        Self::with_base_urls(
            user_agent,
            timeout_secs,
            DEFAULT_WWW_BASE_URL,
            DEFAULT_DATA_BASE_URL,
        )
    }

    /// Creates a new client with custom base URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`EdgarError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`EdgarError::Config`] if either base URL
    /// is invalid.
    pub fn with_base_urls(
        user_agent: &str,
        timeout_secs: u64,
        www_base: &str,
        data_base: &str,
    ) -> Result<Self, EdgarError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            www_base: parse_base(www_base)?,
            data_base: parse_base(data_base)?,
        })
    }

    /// Fetches the ticker directory and returns a ticker → CIK mapping.
    ///
    /// Tickers are uppercased; entries with an empty ticker are dropped.
    ///
    /// # Errors
    ///
    /// - [`EdgarError::Http`] on network failure or non-2xx HTTP status.
    /// - [`EdgarError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_company_tickers(&self) -> Result<HashMap<String, u64>, EdgarError> {
        let url = self.join(&self.www_base, "files/company_tickers.json")?;
        let entries: HashMap<String, TickerEntry> =
            self.request_json(&url, "company_tickers").await?;

        let mapping = entries
            .into_values()
            .filter(|e| !e.ticker.is_empty())
            .map(|e| (e.ticker.to_uppercase(), e.cik_str))
            .collect();

        Ok(mapping)
    }

    /// Fetches the recent-filings index for a zero-padded 10-digit CIK.
    ///
    /// # Errors
    ///
    /// - [`EdgarError::Http`] on network failure or non-2xx HTTP status.
    /// - [`EdgarError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_recent_filings(&self, cik: &str) -> Result<RecentFilings, EdgarError> {
        let url = self.join(&self.data_base, &format!("submissions/CIK{cik}.json"))?;
        let response: SubmissionsResponse =
            self.request_json(&url, &format!("submissions(cik={cik})")).await?;
        Ok(response.filings.recent)
    }

    fn join(&self, base: &Url, path: &str) -> Result<Url, EdgarError> {
        base.join(path)
            .map_err(|e| EdgarError::Config(format!("invalid URL path '{path}': {e}")))
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON into `T`.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, EdgarError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| EdgarError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

fn parse_base(base: &str) -> Result<Url, EdgarError> {
    // Ensure exactly one trailing slash so joins append rather than replace
    // the last path segment.
    let normalised = format!("{}/", base.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| EdgarError::Config(format!("invalid base URL '{base}': {e}")))
}
