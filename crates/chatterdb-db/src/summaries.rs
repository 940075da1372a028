//! Database operations for the `summaries` cache.
//!
//! Generated summary text is cached keyed by (scope, symbol, window) with
//! the maximum source post timestamp recorded at generation time as a
//! validity fingerprint: a cached row is only served while no newer source
//! post exists for the same slice.

use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::DbError;

/// A row from the `summaries` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SummaryRow {
    pub id: i64,
    pub scope: String,
    pub symbol: Option<String>,
    pub time_window_days: i32,
    pub summary_text: String,
    pub generated_at: NaiveDateTime,
    pub source_max_created_at: Option<NaiveDateTime>,
}

/// Returns the latest cached summary text for the slice, but only when its
/// recorded fingerprint matches `source_max`; otherwise the cache is stale
/// and `None` is returned.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_cached_summary(
    pool: &PgPool,
    scope: &str,
    symbol: Option<&str>,
    time_window_days: i32,
    source_max: Option<NaiveDateTime>,
) -> Result<Option<String>, DbError> {
    let row = sqlx::query_as::<_, SummaryRow>(
        "SELECT id, scope, symbol, time_window_days, summary_text, generated_at, \
                source_max_created_at \
         FROM summaries \
         WHERE scope = $1 \
           AND symbol IS NOT DISTINCT FROM $2 \
           AND time_window_days = $3 \
         ORDER BY generated_at DESC \
         LIMIT 1",
    )
    .bind(scope)
    .bind(symbol)
    .bind(time_window_days)
    .fetch_optional(pool)
    .await?;

    Ok(row
        .filter(|r| r.source_max_created_at == source_max)
        .map(|r| r.summary_text))
}

/// Stores a freshly generated summary with its source fingerprint.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn save_summary(
    pool: &PgPool,
    scope: &str,
    symbol: Option<&str>,
    time_window_days: i32,
    summary_text: &str,
    source_max: Option<NaiveDateTime>,
) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO summaries \
             (scope, symbol, time_window_days, summary_text, source_max_created_at) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(scope)
    .bind(symbol)
    .bind(time_window_days)
    .bind(summary_text)
    .bind(source_max)
    .execute(pool)
    .await?;

    Ok(())
}

/// Computes the cache fingerprint: the maximum post `created_at` for a
/// platform since `since`, optionally restricted to posts mentioning
/// `symbol`. Returns `None` when no posts match.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn max_post_created_at(
    pool: &PgPool,
    platform: &str,
    symbol: Option<&str>,
    since: NaiveDateTime,
) -> Result<Option<NaiveDateTime>, DbError> {
    let max = sqlx::query_scalar::<_, Option<NaiveDateTime>>(
        "SELECT MAX(p.created_at) \
         FROM posts p \
         WHERE p.platform = $1 \
           AND p.created_at >= $2 \
           AND ($3::TEXT IS NULL OR EXISTS ( \
                SELECT 1 FROM mentions m WHERE m.post_id = p.id AND m.symbol = $3))",
    )
    .bind(platform)
    .bind(since)
    .bind(symbol)
    .fetch_one(pool)
    .await?;

    Ok(max)
}
