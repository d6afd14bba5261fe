//! mw-query
//!
//! Read-only query boundary over the entity store, consumed by host RPC or
//! bridge layers. Responses are flattened views; errors are typed and
//! propagate verbatim, never silently defaulted.

use mw_store::{EntityKind, EntityStore, Kv, StoreError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// Malformed request: entity ids are strictly positive.
    #[error("invalid id {0}")]
    InvalidId(i64),
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: i64 },
    /// Anything else from the store or codec; internal to the caller.
    #[error(transparent)]
    Store(StoreError),
}

fn store_err(err: StoreError) -> QueryError {
    match err {
        StoreError::NotFound { kind, id } => QueryError::NotFound { kind, id },
        other => QueryError::Store(other),
    }
}

fn valid_id(id: i64) -> Result<i64, QueryError> {
    if id <= 0 {
        return Err(QueryError::InvalidId(id));
    }
    Ok(id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamView {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueView {
    pub id: i64,
    pub name: String,
    pub group_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    pub id: i64,
    pub league_id: i64,
    /// Display pairing, "Home - Away".
    pub name: String,
    pub time: String,
    pub home_id: i64,
    pub away_id: i64,
    pub home_score: i32,
    pub away_score: i32,
    pub home_name: String,
    pub away_name: String,
    pub started: bool,
    pub finished: bool,
    pub cancelled: bool,
}

/// Borrowing, read-only facade. One instance per request is fine; it holds
/// no state beyond the store reference.
pub struct QueryService<'a, K: Kv> {
    store: &'a EntityStore<K>,
}

impl<'a, K: Kv> QueryService<'a, K> {
    pub fn new(store: &'a EntityStore<K>) -> Self {
        Self { store }
    }

    pub fn team(&self, id: i64) -> Result<TeamView, QueryError> {
        let id = valid_id(id)?;
        let team = self.store.team(id).map_err(store_err)?;
        Ok(TeamView {
            id: team.id,
            name: team.name,
        })
    }

    pub fn league(&self, id: i64) -> Result<LeagueView, QueryError> {
        let id = valid_id(id)?;
        let league = self.store.league(id).map_err(store_err)?;
        Ok(LeagueView {
            id: league.id,
            name: league.name,
            group_name: league.group_name,
        })
    }

    /// Match summary built from the hydrated read: home/away identity and
    /// scores come from the authoritative Team records.
    pub fn match_summary(&self, id: i64) -> Result<MatchView, QueryError> {
        let id = valid_id(id)?;
        let record = self.store.match_hydrated(id).map_err(store_err)?;
        let name = format!("{} - {}", record.home.name, record.away.name);
        Ok(MatchView {
            id: record.id,
            league_id: record.league_id,
            name,
            time: record.time,
            home_id: record.home.id,
            away_id: record.away.id,
            home_score: record.home.score,
            away_score: record.away.score,
            home_name: record.home.name,
            away_name: record.away.name,
            started: record.status.started,
            finished: record.status.finished,
            cancelled: record.status.cancelled,
        })
    }

    pub fn unfinished_match_ids(&self) -> Result<Vec<i64>, QueryError> {
        self.store.unfinished_match_ids().map_err(store_err)
    }
}
