//! Ingestion coordinators, one per source.
//!
//! Each run opens a single transaction, threads it through every read and
//! write, and commits once at the end. Any non-isolated error propagates to
//! `main`; the dropped transaction rolls back, so a failed run persists
//! nothing.

mod edgar;
mod social;

use clap::Subcommand;

pub(crate) use edgar::run_edgar_ingest;
pub(crate) use social::run_social_ingest;

/// Sources available under `ingest`.
#[derive(Debug, Subcommand)]
pub enum IngestCommands {
    /// Ingest recent SEC filings for the watchlist tickers
    Edgar {
        /// Maximum filings to take per ticker (defaults to config)
        #[arg(long)]
        limit: Option<usize>,
        /// Pause between tickers in milliseconds (defaults to config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Ingest hot posts from the configured social feeds
    Social {
        /// Comma-separated feed names (defaults to config)
        #[arg(long, value_delimiter = ',')]
        feeds: Option<Vec<String>>,
        /// Maximum posts to take per feed (defaults to config)
        #[arg(long)]
        limit: Option<usize>,
    },
}
