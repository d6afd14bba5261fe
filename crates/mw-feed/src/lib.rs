//! mw-feed
//!
//! Upstream snapshot client. This crate owns the source abstraction and the
//! concrete HTTP implementation; it does not touch the store. Callers fetch
//! a snapshot and hand it to the reconciler.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::Utc;
use chrono_tz::Tz;
use mw_schemas::League;
use serde::Deserialize;
use thiserror::Error;

/// Timezone the feed day is computed in when the caller has no preference.
pub const DEFAULT_TIMEZONE: &str = "Europe/Istanbul";

#[derive(Debug, Error)]
pub enum FeedError {
    /// Network or transport failure, timeouts included.
    #[error("transport error: {0}")]
    Transport(String),
    /// The upstream answered outside the 2xx range.
    #[error("upstream returned status {code}")]
    Status { code: u16 },
    /// The payload arrived but did not decode as a snapshot.
    #[error("snapshot decode failed: {0}")]
    Decode(String),
    #[error("unknown timezone '{0}'")]
    Timezone(String),
}

/// Upstream snapshot source contract.
///
/// Object-safe and `Send + Sync` so hosts can hold a
/// `Box<dyn SnapshotSource>` without knowing the transport.
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Human-readable name identifying this source (e.g. `"fotmob"`).
    fn source_name(&self) -> &'static str;

    /// Fetch the current snapshot: leagues in feed order, each carrying its
    /// matches with embedded teams. `timezone` selects the feed-local day.
    async fn fetch(&self, timezone: &str) -> Result<Vec<League>, FeedError>;
}

/// Wiring for the HTTP feed. Named fields, no option closures; everything
/// the fetch needs is decided at construction.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub base_url: String,
    /// Static headers sent with every request (user-agent, anti-bot tokens
    /// and the like). Do not log their values.
    pub headers: BTreeMap<String, String>,
    /// Hard deadline for one fetch, connect time included.
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.fotmob.com".to_string(),
            headers: BTreeMap::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpFeed {
    config: FeedConfig,
    http: reqwest::Client,
}

impl HttpFeed {
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| FeedError::Transport(err.to_string()))?;
        Ok(Self { config, http })
    }

    fn matches_url(&self) -> String {
        format!(
            "{}/api/data/matches",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl SnapshotSource for HttpFeed {
    fn source_name(&self) -> &'static str {
        "fotmob"
    }

    async fn fetch(&self, timezone: &str) -> Result<Vec<League>, FeedError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| FeedError::Timezone(timezone.to_string()))?;
        let date = Utc::now().with_timezone(&tz).format("%Y%m%d").to_string();

        let mut request = self.http.get(self.matches_url()).query(&[
            ("date", date.as_str()),
            ("timezone", timezone),
            ("ccode3", "GBR"),
        ]);
        for (name, value) in &self.config.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|err| FeedError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status { code: status.as_u16() });
        }

        let envelope: SnapshotEnvelope = response
            .json()
            .await
            .map_err(|err| FeedError::Decode(err.to_string()))?;
        Ok(envelope.leagues)
    }
}

#[derive(Debug, Deserialize)]
struct SnapshotEnvelope {
    #[serde(default)]
    leagues: Vec<League>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_error_display_is_operator_friendly() {
        assert_eq!(
            FeedError::Status { code: 503 }.to_string(),
            "upstream returned status 503"
        );
        assert_eq!(
            FeedError::Timezone("Mars/Olympus".to_string()).to_string(),
            "unknown timezone 'Mars/Olympus'"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_tolerated() {
        let feed = HttpFeed::new(FeedConfig {
            base_url: "http://localhost:9999/".to_string(),
            ..FeedConfig::default()
        })
        .unwrap();
        assert_eq!(feed.matches_url(), "http://localhost:9999/api/data/matches");
    }

    #[test]
    fn source_is_object_safe_via_box() {
        let feed = HttpFeed::new(FeedConfig::default()).unwrap();
        let _boxed: Box<dyn SnapshotSource> = Box::new(feed);
    }
}
