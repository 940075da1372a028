use chatterdb_core::AppConfig;
use chatterdb_db::NewPost;
use chatterdb_signals::SymbolExtractor;
use chatterdb_social::{normalize_post, SocialClient, SOCIAL_PLATFORM};

const SOCIAL_MENTION_CONFIDENCE: f64 = 0.6;

/// Counters returned by one social-feed ingestion run.
#[derive(Debug, Default)]
pub(crate) struct SocialRunSummary {
    pub(crate) new_posts: u32,
}

/// Ingest hot posts from each configured feed, connecting to the production
/// feed API.
///
/// Missing credentials fail the run before any network call.
///
/// # Errors
///
/// Returns an error if credentials are missing or the token exchange fails,
/// plus everything [`ingest_feeds`] can return.
pub(crate) async fn run_social_ingest(
    pool: &sqlx::PgPool,
    config: &AppConfig,
    feeds_override: Option<Vec<String>>,
    limit_override: Option<usize>,
) -> anyhow::Result<SocialRunSummary> {
    let client = SocialClient::connect(config).await?;
    let feeds = feeds_override.unwrap_or_else(|| config.social_feeds.clone());
    let limit = limit_override.unwrap_or(config.social_limit_per_feed);

    ingest_feeds(pool, &client, &feeds, limit).await
}

/// Ingest hot posts from `feeds` through an already-connected client.
///
/// A post seen before has only its popularity/engagement counts refreshed;
/// a fresh post is inserted and scanned once for ticker symbols, yielding
/// one mention per distinct symbol.
///
/// The whole run shares one transaction, committed only at the end.
///
/// # Errors
///
/// Returns an error if any feed fetch fails or any database operation
/// fails. The transaction rolls back in every error case.
pub(crate) async fn ingest_feeds(
    pool: &sqlx::PgPool,
    client: &SocialClient,
    feeds: &[String],
    limit: usize,
) -> anyhow::Result<SocialRunSummary> {
    let extractor = SymbolExtractor::default();

    tracing::info!(feeds = feeds.len(), limit, "starting social ingestion");

    let mut summary = SocialRunSummary::default();
    let mut tx = pool.begin().await?;

    for feed in feeds {
        let items = client.fetch_hot(feed, limit).await?;
        tracing::debug!(feed = %feed, items = items.len(), "fetched hot listing");

        for item in &items {
            let Some(post) = normalize_post(item) else {
                tracing::warn!(feed = %feed, id = %item.id, "unusable item, skipping");
                continue;
            };

            let existing = chatterdb_db::get_post_id_by_natural_key(
                &mut tx,
                SOCIAL_PLATFORM,
                &post.platform_post_id,
            )
            .await?;

            if let Some(post_id) = existing {
                // Re-seen post: only the counts move, mentions stay as
                // derived at first sight.
                chatterdb_db::refresh_post_counts(&mut tx, post_id, post.score, post.comments)
                    .await?;
                continue;
            }

            let post_id = chatterdb_db::insert_post(
                &mut tx,
                &NewPost {
                    platform: SOCIAL_PLATFORM,
                    platform_post_id: &post.platform_post_id,
                    url: &post.url,
                    author: post.author.as_deref(),
                    title: post.title.as_deref(),
                    body: post.body.as_deref(),
                    created_at: post.created_at,
                    score: post.score,
                    comments: post.comments,
                },
            )
            .await?;

            let text = format!(
                "{}\n{}",
                post.title.as_deref().unwrap_or(""),
                post.body.as_deref().unwrap_or("")
            );
            for symbol in extractor.extract(&text) {
                chatterdb_db::insert_mention(
                    &mut tx,
                    post_id,
                    &symbol,
                    extractor.classify_asset_type(&symbol),
                    None,
                    None,
                    SOCIAL_MENTION_CONFIDENCE,
                )
                .await?;
            }

            summary.new_posts += 1;
        }
    }

    tx.commit().await?;

    tracing::info!(new_posts = summary.new_posts, "social ingestion complete");
    Ok(summary)
}

#[cfg(test)]
#[path = "social_test.rs"]
mod social_test;
