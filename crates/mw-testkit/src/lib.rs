//! mw-testkit
//!
//! Fixture builders and a scripted snapshot source for the scenario suites.
//! The cross-crate end-to-end scenarios live under this crate's `tests/`.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use mw_feed::{FeedError, SnapshotSource};
use mw_schemas::{League, LiveTime, Match, Status, Team};

/// Fixed kickoff instant shared by the fixtures.
pub fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 6, 16, 0, 0).unwrap()
}

pub fn team(id: i64, score: i32, name: &str) -> Team {
    Team::new(id, score, name, format!("{name} FC"))
}

/// Status of a match that has not kicked off yet.
pub fn scheduled_status() -> Status {
    Status {
        utc_time: kickoff(),
        period_length: 45,
        started: false,
        cancelled: false,
        finished: false,
        ongoing: false,
        live_time: LiveTime::default(),
    }
}

/// Status of a match in play.
pub fn live_status(clock: &str) -> Status {
    Status {
        started: true,
        ongoing: true,
        live_time: LiveTime {
            long: clock.to_string(),
            max_time: 90,
            added_time: 0,
        },
        ..scheduled_status()
    }
}

/// Status of a concluded match.
pub fn finished_status() -> Status {
    Status {
        started: true,
        finished: true,
        ..scheduled_status()
    }
}

pub fn fixture_match(id: i64, league_id: i64, home: Team, away: Team, status: Status) -> Match {
    let time = status.utc_time.format("%d.%m.%Y %H:%M").to_string();
    let timestamp = status.utc_time.timestamp();
    Match {
        id,
        league_id,
        time,
        home,
        away,
        eliminated_team_id: None,
        status_id: 0,
        tournament_stage: String::new(),
        status,
        timestamp,
    }
}

pub fn fixture_league(id: i64, name: &str, matches: Vec<Match>) -> League {
    League {
        id,
        is_group: false,
        group_name: String::new(),
        ccode: "ENG".to_string(),
        primary_id: id,
        name: name.to_string(),
        matches,
    }
}

/// Snapshot source that replays a scripted sequence of snapshots, one per
/// fetch. An exhausted script fails the fetch like a dead upstream would.
pub struct ScriptedSource {
    snapshots: Mutex<VecDeque<Vec<League>>>,
}

impl ScriptedSource {
    pub fn new(snapshots: Vec<Vec<League>>) -> Self {
        Self {
            snapshots: Mutex::new(snapshots.into()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.snapshots.lock().expect("scripted source poisoned").len()
    }
}

#[async_trait::async_trait]
impl SnapshotSource for ScriptedSource {
    fn source_name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self, _timezone: &str) -> Result<Vec<League>, FeedError> {
        self.snapshots
            .lock()
            .expect("scripted source poisoned")
            .pop_front()
            .ok_or_else(|| FeedError::Transport("script exhausted".to_string()))
    }
}
