//! Time-decayed ranking score for ideas.

/// Scores an idea from post popularity, engagement, and age.
///
/// `(ln(1+pop) + 0.6*ln(1+comments)) * exp(-0.15*age_hours)`. Negative
/// inputs are clamped to zero before use, so the score is never negative
/// and a brand-new post with no popularity or engagement scores exactly 0.
#[must_use]
pub fn idea_score(popularity: i64, comments: i64, age_hours: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let pop = (popularity.max(0) as f64).ln_1p() + 0.6 * (comments.max(0) as f64).ln_1p();
    let decay = (-0.15 * age_hours.max(0.0)).exp();
    pop * decay
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_inputs_score_exactly_zero() {
        assert_eq!(idea_score(0, 0, 0.0), 0.0);
        assert_eq!(idea_score(0, 0, 100.0), 0.0);
    }

    #[test]
    fn age_zero_equals_undecayed_popularity_term() {
        let expected = (101.0_f64).ln() + 0.6 * (21.0_f64).ln();
        let got = idea_score(100, 20, 0.0);
        assert!((got - expected).abs() < 1e-12, "got {got}, want {expected}");
    }

    #[test]
    fn score_decreases_with_age() {
        let fresh = idea_score(500, 50, 1.0);
        let stale = idea_score(500, 50, 12.0);
        let ancient = idea_score(500, 50, 72.0);
        assert!(fresh > stale);
        assert!(stale > ancient);
        assert!(ancient > 0.0);
    }

    #[test]
    fn score_is_monotonic_in_popularity_and_engagement() {
        assert!(idea_score(200, 10, 5.0) > idea_score(100, 10, 5.0));
        assert!(idea_score(100, 20, 5.0) > idea_score(100, 10, 5.0));
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        assert_eq!(idea_score(-5, -3, -1.0), 0.0);
        assert_eq!(idea_score(-5, 0, 2.0), 0.0);
    }

    #[test]
    fn score_never_exceeds_undecayed_value() {
        let undecayed = idea_score(1000, 300, 0.0);
        for age in [0.5, 2.0, 24.0, 240.0] {
            assert!(idea_score(1000, 300, age) <= undecayed);
        }
    }
}
