//! mw-schemas
//!
//! Shared entity model for the snapshot feed: leagues, matches, teams and
//! live match status. Serde names follow the upstream wire format so the
//! same types deserialize straight off the feed and serialize through the
//! store codec without a translation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One side of a match. Identity is `id`; `score` is the only field that
/// moves once the team has been observed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: i64,
    pub score: i32,
    pub name: String,
    pub long_name: String,
}

impl Team {
    pub fn new(id: i64, score: i32, name: impl Into<String>, long_name: impl Into<String>) -> Self {
        Self {
            id,
            score,
            name: name.into(),
            long_name: long_name.into(),
        }
    }
}

/// Live clock state as reported by the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveTime {
    /// Display clock, e.g. `"51:35"`.
    pub long: String,
    /// Regulation length of the current period in minutes.
    pub max_time: i32,
    pub added_time: i32,
}

/// Live progress of a match. Fully mutable between snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Status {
    pub utc_time: DateTime<Utc>,
    pub period_length: i32,
    pub started: bool,
    pub cancelled: bool,
    pub finished: bool,
    pub ongoing: bool,
    pub live_time: LiveTime,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            utc_time: DateTime::UNIX_EPOCH,
            period_length: 0,
            started: false,
            cancelled: false,
            finished: false,
            ongoing: false,
            live_time: LiveTime::default(),
        }
    }
}

/// A match snapshot as fetched. `home`/`away` are embedded team snapshots
/// taken at fetch time; on a persisted record they may trail the
/// authoritative Team records (the store re-hydrates them on query reads).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    pub id: i64,
    pub league_id: i64,
    pub time: String,
    pub home: Team,
    pub away: Team,
    /// Knockout loser, when the feed knows it. Absent means undecided or
    /// not applicable; absence is encoded as null, never a sentinel id.
    pub eliminated_team_id: Option<i64>,
    pub status_id: i64,
    pub tournament_stage: String,
    pub status: Status,
    #[serde(rename = "timeTS")]
    pub timestamp: i64,
}

/// A league as fetched, carrying its matches. The persisted league record
/// never retains `matches`; they are stored under their own keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct League {
    pub id: i64,
    pub is_group: bool,
    pub group_name: String,
    pub ccode: String,
    pub primary_id: i64,
    pub name: String,
    pub matches: Vec<Match>,
}
