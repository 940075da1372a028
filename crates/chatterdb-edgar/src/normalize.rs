//! Normalization of EDGAR filing metadata into domain values ready for
//! persistence.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::RecentFilings;

const ARCHIVES_BASE: &str = "https://www.sec.gov/Archives/edgar/data";

/// One filing pulled out of the parallel-array submissions index.
///
/// Fields missing from a shorter array are empty strings, matching how the
/// index treats absent metadata.
#[derive(Debug, Clone)]
pub struct FilingEntry {
    pub accession: String,
    pub form: String,
    pub filing_date: String,
    pub report_date: String,
    pub primary_doc: String,
    pub description: String,
}

/// A filing normalized for upsert: natural key, display fields, document
/// URL, and parsed filing timestamp.
#[derive(Debug, Clone)]
pub struct NormalizedFiling {
    /// `{cik}-{accession}-{form}`, unique per filing across runs.
    pub natural_key: String,
    pub form: String,
    pub title: String,
    pub body: String,
    pub url: String,
    pub description: String,
    pub filed_at: NaiveDateTime,
}

/// Resolves a ticker to its zero-padded 10-digit CIK, or `None` when the
/// directory has no entry for it.
#[must_use]
pub fn resolve_cik(ticker: &str, mapping: &std::collections::HashMap<String, u64>) -> Option<String> {
    mapping.get(&ticker.to_uppercase()).map(|cik| format!("{cik:010}"))
}

/// Flattens the first `limit` entries of the parallel arrays into
/// [`FilingEntry`] values.
///
/// Only the accession-number array bounds the iteration; the other arrays
/// fall back to empty strings when shorter.
#[must_use]
pub fn filing_entries(recent: &RecentFilings, limit: usize) -> Vec<FilingEntry> {
    let count = recent.accession_number.len().min(limit);
    (0..count)
        .map(|i| FilingEntry {
            accession: field(&recent.accession_number, i),
            form: field(&recent.form, i),
            filing_date: field(&recent.filing_date, i),
            report_date: field(&recent.report_date, i),
            primary_doc: field(&recent.primary_document, i),
            description: field(&recent.primary_doc_description, i),
        })
        .collect()
}

fn field(values: &[String], i: usize) -> String {
    values.get(i).cloned().unwrap_or_default()
}

/// Converts one [`FilingEntry`] into a [`NormalizedFiling`].
///
/// Returns `None` when the accession number or filing date is missing, or
/// the filing date does not parse as `YYYY-MM-DD`; per-entry problems skip
/// the entry, never the run.
#[must_use]
pub fn normalize_filing(cik: &str, entry: &FilingEntry) -> Option<NormalizedFiling> {
    if entry.accession.is_empty() || entry.filing_date.is_empty() {
        return None;
    }

    let filed_on = parse_date(&entry.filing_date)?;
    let filed_at = filed_on.and_hms_opt(0, 0, 0)?;

    let title_desc = [&entry.primary_doc, &entry.description]
        .into_iter()
        .find(|s| !s.is_empty())
        .map_or("Filing", String::as_str);
    let title = format!("{} - {}", entry.form, title_desc)
        .trim_matches([' ', '-'])
        .to_string();

    let report_date = if entry.report_date.is_empty() {
        "n/a"
    } else {
        &entry.report_date
    };
    let body = format!(
        "Form: {}\nFiling date: {}\nReport date: {}\nAccession: {}",
        entry.form, entry.filing_date, report_date, entry.accession
    );

    Some(NormalizedFiling {
        natural_key: format!("{cik}-{}-{}", entry.accession, entry.form),
        form: entry.form.clone(),
        title,
        body,
        url: build_filing_url(cik, &entry.accession, &entry.primary_doc),
        description: entry.description.clone(),
        filed_at,
    })
}

/// Parses a `"YYYY-MM-DD"` date string into a [`NaiveDate`].
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Builds the canonical document URL for a filing.
///
/// The archive path uses the unpadded CIK and the accession number with
/// dashes stripped. When no primary document is named, the filing's index
/// page is used instead.
fn build_filing_url(cik: &str, accession: &str, primary_doc: &str) -> String {
    let accession_no_dashes = accession.replace('-', "");
    let cik_int = unpad_cik(cik);
    if primary_doc.is_empty() {
        format!("{ARCHIVES_BASE}/{cik_int}/{accession_no_dashes}/{accession}-index.html")
    } else {
        format!("{ARCHIVES_BASE}/{cik_int}/{accession_no_dashes}/{primary_doc}")
    }
}

fn unpad_cik(cik: &str) -> &str {
    let trimmed = cik.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn entry() -> FilingEntry {
        FilingEntry {
            accession: "0000012345-24-000001".to_string(),
            form: "10-K".to_string(),
            filing_date: "2024-01-10".to_string(),
            report_date: "2023-12-31".to_string(),
            primary_doc: "annual.htm".to_string(),
            description: "Annual report".to_string(),
        }
    }

    #[test]
    fn resolve_cik_zero_pads_to_ten_digits() {
        let mapping: HashMap<String, u64> = [("ABC".to_string(), 12345_u64)].into_iter().collect();
        assert_eq!(resolve_cik("abc", &mapping).as_deref(), Some("0000012345"));
        assert_eq!(resolve_cik("XYZ", &mapping), None);
    }

    #[test]
    fn normalize_builds_natural_key_title_and_url() {
        let normalized = normalize_filing("0000012345", &entry()).expect("entry should normalize");

        assert_eq!(
            normalized.natural_key,
            "0000012345-0000012345-24-000001-10-K"
        );
        assert_eq!(normalized.title, "10-K - annual.htm");
        assert_eq!(
            normalized.url,
            "https://www.sec.gov/Archives/edgar/data/12345/000001234524000001/annual.htm"
        );
        assert!(normalized.body.contains("Report date: 2023-12-31"));
        assert_eq!(
            normalized.filed_at.date(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
    }

    #[test]
    fn missing_primary_doc_falls_back_to_description_then_index_url() {
        let mut e = entry();
        e.primary_doc = String::new();
        let normalized = normalize_filing("0000012345", &e).expect("entry should normalize");

        assert_eq!(normalized.title, "10-K - Annual report");
        assert!(normalized.url.ends_with("0000012345-24-000001-index.html"));
    }

    #[test]
    fn empty_form_and_doc_yield_placeholder_title() {
        let mut e = entry();
        e.form = String::new();
        e.primary_doc = String::new();
        e.description = String::new();
        let normalized = normalize_filing("0000012345", &e).expect("entry should normalize");
        assert_eq!(normalized.title, "Filing");
    }

    #[test]
    fn missing_report_date_renders_as_na() {
        let mut e = entry();
        e.report_date = String::new();
        let normalized = normalize_filing("0000012345", &e).expect("entry should normalize");
        assert!(normalized.body.contains("Report date: n/a"));
    }

    #[test]
    fn missing_accession_or_bad_date_skips_entry() {
        let mut no_accession = entry();
        no_accession.accession = String::new();
        assert!(normalize_filing("0000012345", &no_accession).is_none());

        let mut bad_date = entry();
        bad_date.filing_date = "01/10/2024".to_string();
        assert!(normalize_filing("0000012345", &bad_date).is_none());
    }

    #[test]
    fn filing_entries_respects_limit_and_short_arrays() {
        let recent = RecentFilings {
            accession_number: vec!["a-1".to_string(), "a-2".to_string(), "a-3".to_string()],
            form: vec!["8-K".to_string()],
            filing_date: vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
            report_date: vec![],
            primary_document: vec![],
            primary_doc_description: vec![],
        };

        let entries = filing_entries(&recent, 2);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].form, "8-K");
        assert_eq!(entries[1].form, "");
        assert_eq!(entries[1].filing_date, "2024-01-02");
    }
}
