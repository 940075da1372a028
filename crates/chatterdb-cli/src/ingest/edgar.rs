use chatterdb_core::{load_watchlist, AppConfig};
use chatterdb_db::NewPost;
use chatterdb_edgar::{
    classify_thesis_type, filing_entries, normalize_filing, resolve_cik, EdgarClient,
};

const EDGAR_PLATFORM: &str = "edgar";
const FILING_MENTION_CONFIDENCE: f64 = 0.8;

/// Counters returned by one EDGAR ingestion run.
#[derive(Debug, Default)]
pub(crate) struct EdgarRunSummary {
    pub(crate) new_posts: u32,
    /// Watchlist tickers with no entry in the company directory.
    pub(crate) skipped: u32,
    /// Watchlist tickers whose filing-index fetch failed.
    pub(crate) failed: u32,
}

/// Ingest recent filings for every watchlist ticker, using a client pointed
/// at the production EDGAR endpoints.
///
/// # Errors
///
/// Returns an error if the client cannot be built, plus everything
/// [`ingest_filings`] can return.
pub(crate) async fn run_edgar_ingest(
    pool: &sqlx::PgPool,
    config: &AppConfig,
    limit_override: Option<usize>,
    delay_override: Option<u64>,
) -> anyhow::Result<EdgarRunSummary> {
    let client = EdgarClient::new(&config.sec_user_agent, config.request_timeout_secs)?;
    let tickers = load_watchlist(&config.watchlist_path);
    let limit = limit_override.unwrap_or(config.edgar_limit_per_ticker);
    let delay_ms = delay_override.unwrap_or(config.edgar_inter_request_delay_ms);

    ingest_filings(pool, &client, &tickers, limit, delay_ms).await
}

/// Ingest recent filings for `tickers` through an already-built client.
///
/// Resolves each ticker to a CIK via the company directory, pulls its
/// recent-filings index, and upserts each filing by natural key. A filing
/// seen before has its content refreshed in place; a fresh filing is
/// inserted together with exactly one mention carrying the classified
/// thesis type. A fetch failure for one ticker is isolated into the
/// `failed` bucket; the directory fetch itself is fatal.
///
/// The whole run shares one transaction, committed only at the end.
///
/// # Errors
///
/// Returns an error if the company directory fetch fails or any database
/// operation fails. The transaction rolls back in every error case.
pub(crate) async fn ingest_filings(
    pool: &sqlx::PgPool,
    client: &EdgarClient,
    tickers: &[String],
    limit: usize,
    delay_ms: u64,
) -> anyhow::Result<EdgarRunSummary> {
    let mapping = client.fetch_company_tickers().await?;
    tracing::info!(
        tickers = tickers.len(),
        directory_size = mapping.len(),
        "starting edgar ingestion"
    );

    let mut summary = EdgarRunSummary::default();
    let mut tx = pool.begin().await?;

    for ticker in tickers {
        let Some(cik) = resolve_cik(ticker, &mapping) else {
            tracing::warn!(ticker = %ticker, "no CIK in company directory, skipping");
            summary.skipped += 1;
            continue;
        };

        let recent = match client.fetch_recent_filings(&cik).await {
            Ok(recent) => recent,
            Err(e) => {
                tracing::warn!(ticker = %ticker, cik = %cik, error = %e, "filing index fetch failed");
                summary.failed += 1;
                continue;
            }
        };

        for entry in filing_entries(&recent, limit) {
            let Some(filing) = normalize_filing(&cik, &entry) else {
                tracing::debug!(ticker = %ticker, accession = %entry.accession, "unusable entry, skipping");
                continue;
            };

            let existing = chatterdb_db::get_post_id_by_natural_key(
                &mut tx,
                EDGAR_PLATFORM,
                &filing.natural_key,
            )
            .await?;

            if let Some(post_id) = existing {
                // Re-seen filing: refresh content only, never the mention.
                chatterdb_db::refresh_post_content(
                    &mut tx,
                    post_id,
                    &filing.url,
                    Some(&filing.title),
                    Some(&filing.body),
                    filing.filed_at,
                )
                .await?;
                continue;
            }

            let post_id = chatterdb_db::insert_post(
                &mut tx,
                &NewPost {
                    platform: EDGAR_PLATFORM,
                    platform_post_id: &filing.natural_key,
                    url: &filing.url,
                    author: None,
                    title: Some(&filing.title),
                    body: Some(&filing.body),
                    created_at: filing.filed_at,
                    score: 0,
                    comments: 0,
                },
            )
            .await?;

            let text = format!("{} {} {}", filing.title, filing.description, filing.body);
            let thesis = classify_thesis_type(&filing.form, &text);
            chatterdb_db::insert_mention(
                &mut tx,
                post_id,
                ticker,
                "stock",
                None,
                Some(thesis),
                FILING_MENTION_CONFIDENCE,
            )
            .await?;

            summary.new_posts += 1;
        }

        // Politeness pause between registrants.
        tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
    }

    tx.commit().await?;

    tracing::info!(
        new_posts = summary.new_posts,
        skipped = summary.skipped,
        failed = summary.failed,
        "edgar ingestion complete"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "edgar_test.rs"]
mod edgar_test;
