use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod ideas;
mod ingest;

#[derive(Debug, Parser)]
#[command(name = "chatterdb")]
#[command(about = "Financial chatter ingestion and idea ranking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run pending database migrations
    Migrate,
    /// Run an ingestion job against one source
    Ingest {
        #[command(subcommand)]
        source: ingest::IngestCommands,
    },
    /// Rank recently mentioned symbols by time-decayed idea score
    Ideas {
        /// Look-back window in hours
        #[arg(long, default_value = "48")]
        hours: i64,
        /// Filter by asset type (stock or future)
        #[arg(long)]
        asset_type: Option<String>,
        /// Hide ideas scoring below this threshold
        #[arg(long, default_value = "0.5")]
        min_score: f64,
        /// Maximum number of ideas to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = chatterdb_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let pool = chatterdb_db::connect_pool(
        &config.database_url,
        chatterdb_db::PoolConfig::from_app_config(&config),
    )
    .await?;

    match cli.command {
        Commands::Migrate => {
            chatterdb_db::run_migrations(&pool).await?;
            println!("migrations applied");
        }
        Commands::Ingest { source } => match source {
            ingest::IngestCommands::Edgar { limit, delay_ms } => {
                let summary = ingest::run_edgar_ingest(&pool, &config, limit, delay_ms).await?;
                println!(
                    "edgar run: {} new posts, {} tickers skipped, {} tickers failed",
                    summary.new_posts, summary.skipped, summary.failed
                );
            }
            ingest::IngestCommands::Social { feeds, limit } => {
                let summary = ingest::run_social_ingest(&pool, &config, feeds, limit).await?;
                println!("social run: {} new posts", summary.new_posts);
            }
        },
        Commands::Ideas {
            hours,
            asset_type,
            min_score,
            limit,
        } => {
            ideas::run_ideas_report(&pool, hours, asset_type.as_deref(), min_score, limit).await?;
        }
    }

    Ok(())
}
