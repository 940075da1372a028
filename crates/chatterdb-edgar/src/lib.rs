//! SEC EDGAR client and filing normalization for chatterdb.
//!
//! Fetches the company ticker directory and per-registrant submission
//! indexes, flattens the parallel-array filing metadata into typed entries,
//! and classifies each filing with a coarse thesis type.

mod classify;
mod client;
mod error;
mod normalize;
mod types;

pub use classify::classify_thesis_type;
pub use client::EdgarClient;
pub use error::EdgarError;
pub use normalize::{filing_entries, normalize_filing, resolve_cik, FilingEntry, NormalizedFiling};
pub use types::{Filings, RecentFilings, SubmissionsResponse, TickerEntry};
