use super::*;

use chatterdb_core::Environment;
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        log_level: "info".to_string(),
        watchlist_path: PathBuf::from("./watchlist.txt"),
        sec_user_agent: "test-agent test@example.com".to_string(),
        reddit_client_id: Some("id".to_string()),
        reddit_client_secret: Some("secret".to_string()),
        reddit_user_agent: "chatterdb:test:v0".to_string(),
        social_feeds: vec!["stocks".to_string()],
        db_max_connections: 10,
        db_min_connections: 1,
        db_acquire_timeout_secs: 10,
        request_timeout_secs: 30,
        edgar_limit_per_ticker: 25,
        edgar_inter_request_delay_ms: 0,
        social_limit_per_feed: 50,
    }
}

async fn mount_token_exchange(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "test-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "scope": "*"
        })))
        .mount(server)
        .await;
}

async fn mount_hot_listing(server: &MockServer, score: i64, num_comments: i64) {
    Mock::given(method("GET"))
        .and(path("/r/stocks/hot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "children": [
                    {
                        "data": {
                            "id": "abc123",
                            "permalink": "/r/stocks/comments/abc123/soun_dd/",
                            "author": "trader",
                            "title": "SOUN deep dive",
                            "selftext": "long on $SOUN",
                            "created_utc": 1_704_067_200.0,
                            "score": score,
                            "num_comments": num_comments
                        }
                    }
                ]
            }
        })))
        .mount(server)
        .await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn resight_refreshes_counts_without_duplicating(pool: sqlx::PgPool) {
    let server = MockServer::start().await;
    mount_token_exchange(&server).await;
    mount_hot_listing(&server, 10, 2).await;

    let config = test_config();
    let client = SocialClient::connect_with_base_urls(&config, &server.uri(), &server.uri())
        .await
        .expect("token exchange should succeed");
    let feeds = vec!["stocks".to_string()];

    let first = ingest_feeds(&pool, &client, &feeds, 50)
        .await
        .expect("first run should succeed");
    assert_eq!(first.new_posts, 1);

    // The post gets re-listed with higher counts: only score/comments may
    // change, and no second post or mention may appear.
    server.reset().await;
    mount_hot_listing(&server, 250, 40).await;

    let second = ingest_feeds(&pool, &client, &feeds, 50)
        .await
        .expect("second run should succeed");
    assert_eq!(second.new_posts, 0);

    let post_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(&pool)
        .await
        .expect("count failed");
    assert_eq!(post_count, 1, "re-running must not duplicate the post");

    let (post_id, score, comments): (i64, i32, i32) = sqlx::query_as(
        "SELECT id, score, comments FROM posts \
         WHERE platform = 'social' AND platform_post_id = 'abc123'",
    )
    .fetch_one(&pool)
    .await
    .expect("natural-key lookup failed");
    assert_eq!((score, comments), (250, 40));

    let mentions = chatterdb_db::list_mentions_for_post(&pool, post_id)
        .await
        .expect("mention list failed");
    assert_eq!(mentions.len(), 1, "re-running must not re-derive mentions");
    assert_eq!(mentions[0].symbol, "SOUN");
    assert_eq!(mentions[0].asset_type, "stock");
    assert!(mentions[0].thesis_type.is_none());
    assert!((mentions[0].confidence - 0.6).abs() < f64::EPSILON);
}

#[sqlx::test(migrations = "../../migrations")]
async fn failed_feed_fetch_rolls_the_run_back(pool: sqlx::PgPool) {
    let server = MockServer::start().await;
    mount_token_exchange(&server).await;
    mount_hot_listing(&server, 10, 2).await;

    Mock::given(method("GET"))
        .and(path("/r/options/hot"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let config = test_config();
    let client = SocialClient::connect_with_base_urls(&config, &server.uri(), &server.uri())
        .await
        .expect("token exchange should succeed");

    // The first feed ingests fine, the second fails: the shared transaction
    // must take the first feed's posts down with it.
    let feeds = vec!["stocks".to_string(), "options".to_string()];
    let result = ingest_feeds(&pool, &client, &feeds, 50).await;
    assert!(result.is_err(), "a failed feed fetch must abort the run");

    let post_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(&pool)
        .await
        .expect("count failed");
    assert_eq!(post_count, 0, "nothing may persist from an aborted run");
}
