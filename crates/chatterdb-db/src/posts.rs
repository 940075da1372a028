//! Database operations for `posts` and `mentions`.
//!
//! All write operations take a `&mut PgConnection` so a coordinator can
//! thread one transaction through an entire ingestion run and commit once at
//! the end. Read-only queries take a pool.

use chrono::NaiveDateTime;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `posts` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    pub id: i64,
    pub public_id: Uuid,
    pub platform: String,
    pub platform_post_id: String,
    pub url: String,
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub created_at: NaiveDateTime,
    pub collected_at: NaiveDateTime,
    pub score: i32,
    pub comments: i32,
}

/// A row from the `mentions` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MentionRow {
    pub id: i64,
    pub post_id: i64,
    pub symbol: String,
    pub asset_type: String,
    pub stance: Option<String>,
    pub thesis_type: Option<String>,
    pub confidence: f64,
}

/// A mention joined with the popularity/engagement/age fields of its post,
/// used for idea ranking.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MentionSignalRow {
    pub symbol: String,
    pub asset_type: String,
    pub thesis_type: Option<String>,
    pub confidence: f64,
    pub score: i32,
    pub comments: i32,
    pub created_at: NaiveDateTime,
}

/// Fields for a new post. The `(platform, platform_post_id)` pair is the
/// natural key enforced by the `uq_post` constraint.
#[derive(Debug, Clone)]
pub struct NewPost<'a> {
    pub platform: &'a str,
    pub platform_post_id: &'a str,
    pub url: &'a str,
    pub author: Option<&'a str>,
    pub title: Option<&'a str>,
    pub body: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub score: i32,
    pub comments: i32,
}

// ---------------------------------------------------------------------------
// posts operations
// ---------------------------------------------------------------------------

/// Point lookup by natural key. Returns the internal id, or `None` when the
/// post has not been seen before.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_post_id_by_natural_key(
    conn: &mut PgConnection,
    platform: &str,
    platform_post_id: &str,
) -> Result<Option<i64>, DbError> {
    let id = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM posts WHERE platform = $1 AND platform_post_id = $2",
    )
    .bind(platform)
    .bind(platform_post_id)
    .fetch_optional(conn)
    .await?;

    Ok(id)
}

/// Inserts a fresh post and returns its internal id.
///
/// A concurrent run inserting the same natural key surfaces as a unique
/// violation in [`DbError::Sqlx`]; callers are expected to serialize runs
/// externally.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_post(conn: &mut PgConnection, post: &NewPost<'_>) -> Result<i64, DbError> {
    let public_id = Uuid::new_v4();

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO posts \
             (public_id, platform, platform_post_id, url, author, title, body, \
              created_at, score, comments) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         RETURNING id",
    )
    .bind(public_id)
    .bind(post.platform)
    .bind(post.platform_post_id)
    .bind(post.url)
    .bind(post.author)
    .bind(post.title)
    .bind(post.body)
    .bind(post.created_at)
    .bind(post.score)
    .bind(post.comments)
    .fetch_one(conn)
    .await?;

    Ok(id)
}

/// Refreshes the content fields of a re-seen post in place.
///
/// Mentions are deliberately not touched: they are derived once at first
/// insert.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the update fails.
pub async fn refresh_post_content(
    conn: &mut PgConnection,
    post_id: i64,
    url: &str,
    title: Option<&str>,
    body: Option<&str>,
    created_at: NaiveDateTime,
) -> Result<(), DbError> {
    sqlx::query("UPDATE posts SET url = $2, title = $3, body = $4, created_at = $5 WHERE id = $1")
        .bind(post_id)
        .bind(url)
        .bind(title)
        .bind(body)
        .bind(created_at)
        .execute(conn)
        .await?;

    Ok(())
}

/// Refreshes only the popularity/engagement counts of a re-seen post.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the update fails.
pub async fn refresh_post_counts(
    conn: &mut PgConnection,
    post_id: i64,
    score: i32,
    comments: i32,
) -> Result<(), DbError> {
    sqlx::query("UPDATE posts SET score = $2, comments = $3 WHERE id = $1")
        .bind(post_id)
        .bind(score)
        .bind(comments)
        .execute(conn)
        .await?;

    Ok(())
}

// ---------------------------------------------------------------------------
// mentions operations
// ---------------------------------------------------------------------------

/// Inserts one mention for a freshly inserted post.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_mention(
    conn: &mut PgConnection,
    post_id: i64,
    symbol: &str,
    asset_type: &str,
    stance: Option<&str>,
    thesis_type: Option<&str>,
    confidence: f64,
) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO mentions (post_id, symbol, asset_type, stance, thesis_type, confidence) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(post_id)
    .bind(symbol)
    .bind(asset_type)
    .bind(stance)
    .bind(thesis_type)
    .bind(confidence)
    .execute(conn)
    .await?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Query operations
// ---------------------------------------------------------------------------

/// Returns all mentions for a post, ordered by symbol.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_mentions_for_post(
    pool: &PgPool,
    post_id: i64,
) -> Result<Vec<MentionRow>, DbError> {
    let rows = sqlx::query_as::<_, MentionRow>(
        "SELECT id, post_id, symbol, asset_type, stance, thesis_type, confidence \
         FROM mentions WHERE post_id = $1 ORDER BY symbol",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns mention/post signal pairs newer than `since`, optionally filtered
/// by asset type, for idea ranking.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_mentions_since(
    pool: &PgPool,
    since: NaiveDateTime,
    asset_type: Option<&str>,
) -> Result<Vec<MentionSignalRow>, DbError> {
    let rows = sqlx::query_as::<_, MentionSignalRow>(
        "SELECT m.symbol, m.asset_type, m.thesis_type, m.confidence, \
                p.score, p.comments, p.created_at \
         FROM mentions m \
         JOIN posts p ON p.id = m.post_id \
         WHERE p.created_at >= $1 \
           AND ($2::TEXT IS NULL OR m.asset_type = $2) \
         ORDER BY p.created_at DESC",
    )
    .bind(since)
    .bind(asset_type)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
