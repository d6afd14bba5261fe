use serde::{Deserialize, Serialize};

use crate::classifier::ChangePriority;

pub const EVENT_NEW_LEAGUE: &str = "new_league";
pub const EVENT_NEW_MATCH: &str = "new_match";

/// Domain event emitted by a reconciliation cycle, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    NewLeague {
        id: i64,
        name: String,
        group_name: String,
    },
    NewMatch {
        id: i64,
        league_id: i64,
        home_id: i64,
        away_id: i64,
        home_name: String,
        away_name: String,
    },
    MatchChanged {
        change: ChangePriority,
        id: i64,
        league_id: i64,
        home_id: i64,
        away_id: i64,
        home_name: String,
        away_name: String,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::NewLeague { .. } => EVENT_NEW_LEAGUE,
            Event::NewMatch { .. } => EVENT_NEW_MATCH,
            Event::MatchChanged { change, .. } => change.event_name(),
        }
    }

    /// Stable attribute list for host event managers. Keys are a frozen
    /// consumer contract; do not rename them.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            Event::NewLeague { id, name, group_name } => vec![
                ("league", name.clone()),
                ("id", id.to_string()),
                ("group_name", group_name.clone()),
                ("event", self.name().to_string()),
            ],
            Event::NewMatch {
                id,
                league_id,
                home_id,
                away_id,
                home_name,
                away_name,
            }
            | Event::MatchChanged {
                id,
                league_id,
                home_id,
                away_id,
                home_name,
                away_name,
                ..
            } => vec![
                ("id", id.to_string()),
                ("league_id", league_id.to_string()),
                ("match", format!("{home_name}/{away_name}")),
                ("home_id", home_id.to_string()),
                ("away_id", away_id.to_string()),
                ("event", self.name().to_string()),
            ],
        }
    }
}
