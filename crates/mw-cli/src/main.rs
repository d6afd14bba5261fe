//! mw
//!
//! Operator CLI: fetch a snapshot from the live feed and either summarize
//! it or reconcile it into a fresh in-memory store. A demonstration driver
//! around the engine; the host runtime owns the real cadence and substrate.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mw_feed::{FeedConfig, HttpFeed, SnapshotSource, DEFAULT_TIMEZONE};
use mw_query::QueryService;
use mw_reconcile::{run_cycle, EngineConfig};
use mw_store::{EntityStore, MemoryKv};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mw")]
#[command(about = "matchwire snapshot reconciliation CLI", long_about = None)]
struct Cli {
    /// Feed base URL.
    #[arg(long, default_value = "https://www.fotmob.com")]
    base_url: String,

    /// Timezone the feed day is computed in.
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// Fetch deadline in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one snapshot and print a summary without persisting anything.
    Fetch,

    /// Fetch one snapshot, reconcile it into an in-memory store and print
    /// the emitted events and cycle counters.
    Cycle,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let feed = HttpFeed::new(FeedConfig {
        base_url: cli.base_url.clone(),
        headers: headers_from_env(),
        timeout: Duration::from_secs(cli.timeout_secs),
    })
    .context("failed to construct feed client")?;

    let snapshot = feed
        .fetch(&cli.timezone)
        .await
        .context("snapshot fetch failed")?;
    tracing::info!(
        source = feed.source_name(),
        leagues = snapshot.len(),
        "snapshot fetched"
    );

    match cli.cmd {
        Commands::Fetch => {
            for league in &snapshot {
                println!("{} (id={}) {} matches", league.name, league.id, league.matches.len());
                for m in &league.matches {
                    println!(
                        "  [{}] {} {}-{} {}",
                        m.id, m.home.name, m.home.score, m.away.score, m.away.name
                    );
                }
            }
        }
        Commands::Cycle => {
            let mut store = EntityStore::new(MemoryKv::new());
            let report = run_cycle(&mut store, &snapshot, &EngineConfig::default());

            for event in &report.events {
                let attrs = event
                    .attributes()
                    .iter()
                    .map(|(key, value)| format!("{key}={value}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{attrs}");
            }
            println!(
                "leagues={} matches={} created={}/{}/{} updated={} skipped={}",
                report.leagues_seen,
                report.matches_seen,
                report.leagues_created,
                report.teams_created,
                report.matches_created,
                report.matches_updated,
                report.skipped_on_error,
            );

            let unfinished = QueryService::new(&store)
                .unfinished_match_ids()
                .context("unfinished index scan failed")?;
            println!("unfinished={}", serde_json::to_string(&unfinished)?);
        }
    }

    Ok(())
}

/// Extra feed headers from MW_FEED_HEADERS, formatted `name:value` pairs
/// separated by newlines. Values are secrets to some upstreams; never log
/// them.
fn headers_from_env() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    if let Ok(raw) = std::env::var("MW_FEED_HEADERS") {
        for line in raw.lines() {
            if let Some((name, value)) = line.split_once(':') {
                headers.insert(name.trim().to_string(), value.trim().to_string());
            }
        }
    }
    headers
}
