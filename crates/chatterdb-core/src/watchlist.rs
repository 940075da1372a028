//! Watchlist loading for the EDGAR ingestion run.
//!
//! The watchlist is a plain text file with one ticker per line. Blank lines
//! and `#` comment lines are ignored; symbols are uppercased. A missing or
//! empty file falls back to [`DEFAULT_WATCHLIST`].

use std::path::Path;

pub const DEFAULT_WATCHLIST: &[&str] = &["SOUN", "MARA", "RIOT", "PLTR", "GME"];

/// Load the ticker watchlist from `path`, falling back to the default list.
#[must_use]
pub fn load_watchlist(path: &Path) -> Vec<String> {
    let Ok(contents) = std::fs::read_to_string(path) else {
        tracing::debug!(path = %path.display(), "watchlist file not readable, using default");
        return default_watchlist();
    };

    let tickers = parse_watchlist(&contents);
    if tickers.is_empty() {
        return default_watchlist();
    }
    tickers
}

fn default_watchlist() -> Vec<String> {
    DEFAULT_WATCHLIST.iter().map(|s| (*s).to_string()).collect()
}

fn parse_watchlist(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|sym| !sym.is_empty() && !sym.starts_with('#'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_blanks() {
        let contents = "# my picks\n\n aapl \nTSLA\n  # another comment\n";
        assert_eq!(parse_watchlist(contents), vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn empty_contents_yield_no_tickers() {
        assert!(parse_watchlist("").is_empty());
        assert!(parse_watchlist("# only comments\n").is_empty());
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let tickers = load_watchlist(Path::new("/nonexistent/watchlist.txt"));
        assert_eq!(tickers, DEFAULT_WATCHLIST);
    }
}
