//! Thesis-type classification for EDGAR filings.

/// Form codes in the 13D/13G beneficial-ownership family, with and without
/// the `SC` prefix and amendment suffix.
const OWNERSHIP_FORMS: &[&str] = &["SC 13D", "SC 13D/A", "SC 13G", "SC 13G/A", "13D", "13G"];

/// Maps a filing's form code and free text to exactly one thesis-type tag.
///
/// Rules apply first-match-wins, and the order is load-bearing: an 8-K whose
/// description mentions "offering" is classified `"8k"` because the form
/// check fires before the offering text check. Text matching is
/// case-insensitive; form matching uppercases the form code first.
#[must_use]
pub fn classify_thesis_type(form: &str, text: &str) -> &'static str {
    let form_upper = form.to_uppercase();
    let text_lower = text.to_lowercase();

    if text_lower.contains("reverse split") {
        return "reverse_split";
    }
    if text_lower.contains("compliance") || text_lower.contains("listing") {
        return "compliance";
    }
    if form_upper.starts_with("8-K") {
        return "8k";
    }
    if form_upper == "4" || form_upper == "4/A" {
        return "insider";
    }
    if OWNERSHIP_FORMS.contains(&form_upper.as_str()) {
        return "ownership";
    }
    if form_upper.starts_with("10-Q") || form_upper.starts_with("10-K") {
        return "earnings/filing";
    }
    if form_upper.starts_with("S-1") || form_upper.starts_with("S-3") || form_upper.starts_with("424B")
    {
        return "offering";
    }
    if text_lower.contains("atm")
        || text_lower.contains("at-the-market")
        || text_lower.contains("offering")
    {
        return "offering";
    }
    "other"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_split_text_beats_everything() {
        assert_eq!(
            classify_thesis_type("8-K", "announces reverse split"),
            "reverse_split"
        );
    }

    #[test]
    fn compliance_and_listing_text() {
        assert_eq!(
            classify_thesis_type("8-K", "Nasdaq compliance notice"),
            "compliance"
        );
        assert_eq!(classify_thesis_type("", "continued listing"), "compliance");
    }

    #[test]
    fn eight_k_beats_offering_text() {
        // Precedence: the 8-K form check fires before the offering text check.
        assert_eq!(
            classify_thesis_type("8-K", "at-the-market offering"),
            "8k"
        );
    }

    #[test]
    fn insider_forms() {
        assert_eq!(classify_thesis_type("4", ""), "insider");
        assert_eq!(classify_thesis_type("4/A", ""), "insider");
        assert_ne!(classify_thesis_type("424B5", ""), "insider");
    }

    #[test]
    fn ownership_family_with_and_without_amendment() {
        assert_eq!(classify_thesis_type("SC 13D/A", ""), "ownership");
        assert_eq!(classify_thesis_type("SC 13G", ""), "ownership");
        assert_eq!(classify_thesis_type("13d", ""), "ownership");
    }

    #[test]
    fn earnings_filings() {
        assert_eq!(classify_thesis_type("10-K", ""), "earnings/filing");
        assert_eq!(classify_thesis_type("10-Q/A", ""), "earnings/filing");
    }

    #[test]
    fn offering_forms_and_text() {
        assert_eq!(classify_thesis_type("S-1", ""), "offering");
        assert_eq!(classify_thesis_type("424B5", ""), "offering");
        assert_eq!(classify_thesis_type("6-K", "ATM program launch"), "offering");
    }

    #[test]
    fn unmatched_defaults_to_other() {
        assert_eq!(classify_thesis_type("6-K", "interim report"), "other");
        assert_eq!(classify_thesis_type("", ""), "other");
    }
}
