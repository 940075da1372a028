//! Heuristic ticker-symbol extraction from chatter text.

use std::collections::{BTreeSet, HashSet};

use regex::Regex;

/// Uppercase words and acronyms that look like tickers but never are.
const COMMON_FALSES: &[&str] = &[
    "I", "A", "YOLO", "DD", "CEO", "ETF", "IMO", "USA", "GDP", "CPI", "FOMC",
];

/// Root symbols for the major index, energy, metals, and rates futures.
const FUTURES: &[&str] = &[
    "ES", "NQ", "YM", "RTY", "CL", "GC", "SI", "NG", "ZB", "ZN", "ZF", "ZT", "6E", "6J", "6B",
];

/// Extracts candidate ticker symbols from raw title/body text.
///
/// Two patterns are scanned: `$CASHTAG` mentions (one to six uppercase
/// letters) and bare uppercase words of two to five letters. Matches in the
/// exclusion set are dropped; bare matches in the futures set are kept
/// unconditionally. Extraction is heuristic: a real word that happens to
/// look like a ticker will be captured.
///
/// The exclusion and futures sets are plain data so deployments can tune
/// them without code changes; [`SymbolExtractor::default`] uses the built-in
/// lists.
pub struct SymbolExtractor {
    cashtag: Regex,
    bare: Regex,
    exclusions: HashSet<String>,
    futures: HashSet<String>,
}

impl Default for SymbolExtractor {
    fn default() -> Self {
        Self::with_sets(
            COMMON_FALSES.iter().map(|s| (*s).to_string()).collect(),
            FUTURES.iter().map(|s| (*s).to_string()).collect(),
        )
    }
}

impl SymbolExtractor {
    /// Builds an extractor with custom exclusion and futures sets.
    #[must_use]
    pub fn with_sets(exclusions: HashSet<String>, futures: HashSet<String>) -> Self {
        Self {
            cashtag: Regex::new(r"\$([A-Z]{1,6})\b").expect("valid cashtag regex"),
            bare: Regex::new(r"\b([A-Z]{2,5})\b").expect("valid bare ticker regex"),
            exclusions,
            futures,
        }
    }

    /// Returns the unique symbols found in `text`, sorted for determinism.
    ///
    /// Empty input yields an empty vec.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut found = BTreeSet::new();

        for caps in self.cashtag.captures_iter(text) {
            let sym = &caps[1];
            if !self.exclusions.contains(sym) {
                found.insert(sym.to_string());
            }
        }

        for caps in self.bare.captures_iter(text) {
            let sym = &caps[1];
            if self.exclusions.contains(sym) {
                continue;
            }
            // The length check is redundant with the pattern but kept so the
            // futures branch stays meaningful if the pattern is ever widened.
            if self.futures.contains(sym) || (2..=5).contains(&sym.len()) {
                found.insert(sym.to_string());
            }
        }

        found.into_iter().collect()
    }

    /// Tags a symbol as `"future"` when it is in the futures set, else `"stock"`.
    #[must_use]
    pub fn classify_asset_type(&self, symbol: &str) -> &'static str {
        if self.futures.contains(symbol) {
            "future"
        } else {
            "stock"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cashtag_accepted_excluded_word_dropped() {
        let extractor = SymbolExtractor::default();
        let syms = extractor.extract("$AAPL to the moon YOLO");
        assert_eq!(syms, vec!["AAPL"]);
    }

    #[test]
    fn bare_uppercase_words_are_captured() {
        let extractor = SymbolExtractor::default();
        let syms = extractor.extract("loading up on TSLA and GME before earnings");
        assert_eq!(syms, vec!["GME", "TSLA"]);
    }

    #[test]
    fn futures_symbols_are_recognized() {
        let extractor = SymbolExtractor::default();
        let syms = extractor.extract("shorting ES at the open");
        assert_eq!(syms, vec!["ES"]);
        assert_eq!(extractor.classify_asset_type("ES"), "future");
        assert_eq!(extractor.classify_asset_type("TSLA"), "stock");
    }

    #[test]
    fn extraction_is_idempotent() {
        let extractor = SymbolExtractor::default();
        let text = "DD on $SOUN and MARA, CEO said nothing";
        assert_eq!(extractor.extract(text), extractor.extract(text));
        assert_eq!(extractor.extract(text), vec!["MARA", "SOUN"]);
    }

    #[test]
    fn empty_text_yields_nothing() {
        let extractor = SymbolExtractor::default();
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn lowercase_and_long_words_ignored() {
        let extractor = SymbolExtractor::default();
        assert!(extractor.extract("nothing to see here").is_empty());
        // Too long for a bare ticker, and not a cashtag.
        assert!(extractor.extract("SCREAMS").is_empty());
    }

    #[test]
    fn custom_sets_override_defaults() {
        let exclusions: std::collections::HashSet<String> =
            ["HODL".to_string()].into_iter().collect();
        let futures = std::collections::HashSet::new();
        let extractor = SymbolExtractor::with_sets(exclusions, futures);
        let syms = extractor.extract("HODL GME");
        assert_eq!(syms, vec!["GME"]);
        assert_eq!(extractor.classify_asset_type("ES"), "stock");
    }
}
