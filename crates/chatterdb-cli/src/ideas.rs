//! Idea ranking report: recent mentions rolled up per symbol and scored.

use chrono::{Duration, NaiveDateTime, Utc};
use std::collections::BTreeMap;

use chatterdb_db::MentionSignalRow;
use chatterdb_signals::idea_score;

/// One ranked idea: a symbol with its aggregate score over the window.
#[derive(Debug)]
struct RankedIdea {
    symbol: String,
    asset_type: String,
    mention_count: usize,
    score: f64,
}

/// Print the top ideas mentioned within the last `hours`.
///
/// Each mention contributes the time-decayed score of its post; scores are
/// summed per symbol so both freshness and breadth of chatter move a symbol
/// up the table.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub(crate) async fn run_ideas_report(
    pool: &sqlx::PgPool,
    hours: i64,
    asset_type: Option<&str>,
    min_score: f64,
    limit: usize,
) -> anyhow::Result<()> {
    let now = Utc::now().naive_utc();
    let since = now - Duration::hours(hours);
    let rows = chatterdb_db::list_mentions_since(pool, since, asset_type).await?;

    let ranked = rank_ideas(&rows, now, min_score);
    if ranked.is_empty() {
        println!("no ideas above score {min_score} in the last {hours}h; run `ingest` first");
        return Ok(());
    }

    println!("{:<8}{:<8}{:<10}SCORE", "SYMBOL", "ASSET", "MENTIONS");
    for idea in ranked.iter().take(limit) {
        println!(
            "{:<8}{:<8}{:<10}{:.2}",
            idea.symbol, idea.asset_type, idea.mention_count, idea.score
        );
    }

    Ok(())
}

/// Rolls mention signals up per symbol, scoring each mention by its post's
/// popularity, engagement, and age at `now`.
#[allow(clippy::cast_precision_loss)]
fn rank_ideas(rows: &[MentionSignalRow], now: NaiveDateTime, min_score: f64) -> Vec<RankedIdea> {
    let mut by_symbol: BTreeMap<&str, RankedIdea> = BTreeMap::new();

    for row in rows {
        let age_hours = (now - row.created_at).num_seconds() as f64 / 3600.0;
        let score = idea_score(i64::from(row.score), i64::from(row.comments), age_hours);

        by_symbol
            .entry(row.symbol.as_str())
            .and_modify(|idea| {
                idea.mention_count += 1;
                idea.score += score;
            })
            .or_insert(RankedIdea {
                symbol: row.symbol.clone(),
                asset_type: row.asset_type.clone(),
                mention_count: 1,
                score,
            });
    }

    let mut ranked: Vec<RankedIdea> = by_symbol
        .into_values()
        .filter(|idea| idea.score >= min_score)
        .collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
