//! EDGAR API response types.
//!
//! The ticker directory is a JSON object keyed by arbitrary numeric strings;
//! the submissions endpoint returns recent filings as parallel arrays, one
//! metadata field per array, where index `i` across all arrays describes one
//! filing.

use serde::Deserialize;

/// One entry from `files/company_tickers.json`.
#[derive(Debug, Deserialize)]
pub struct TickerEntry {
    pub cik_str: u64,
    pub ticker: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Top-level shape of `submissions/CIK{cik}.json`.
#[derive(Debug, Deserialize)]
pub struct SubmissionsResponse {
    #[serde(default)]
    pub filings: Filings,
}

#[derive(Debug, Default, Deserialize)]
pub struct Filings {
    #[serde(default)]
    pub recent: RecentFilings,
}

/// Parallel arrays of recent-filing metadata.
///
/// The arrays are index-aligned but not guaranteed equal length; consumers
/// must treat a missing index as an empty field rather than assume alignment.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFilings {
    #[serde(default)]
    pub accession_number: Vec<String>,
    #[serde(default)]
    pub form: Vec<String>,
    #[serde(default)]
    pub filing_date: Vec<String>,
    #[serde(default)]
    pub report_date: Vec<String>,
    #[serde(default)]
    pub primary_document: Vec<String>,
    #[serde(default)]
    pub primary_doc_description: Vec<String>,
}
