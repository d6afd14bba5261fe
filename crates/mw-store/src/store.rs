use std::fmt;

use mw_schemas::{League, Match, Team};
use tracing::warn;

use crate::keys::StoreKeys;
use crate::kv::{Kv, KvError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Team,
    Match,
    League,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Team => "team",
            EntityKind::Match => "match",
            EntityKind::League => "league",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Queried entity is absent. A distinct condition, not a generic error.
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: i64 },
    #[error(transparent)]
    Codec(#[from] mw_codec::CodecError),
    #[error(transparent)]
    Backend(#[from] KvError),
}

/// Durable, idempotent persistence for teams, matches and leagues, plus the
/// unfinished-match secondary index, over a host-provided [`Kv`] substrate.
pub struct EntityStore<K: Kv> {
    kv: K,
    keys: StoreKeys,
}

impl<K: Kv> EntityStore<K> {
    pub fn new(kv: K) -> Self {
        Self::with_keys(kv, StoreKeys::default())
    }

    pub fn with_keys(kv: K, keys: StoreKeys) -> Self {
        Self { kv, keys }
    }

    pub fn keys(&self) -> &StoreKeys {
        &self.keys
    }

    pub fn into_inner(self) -> K {
        self.kv
    }

    /// Write the team only if its key is absent. Returns whether a write
    /// happened; an existing record is left untouched and is not an error.
    pub fn create_team_if_absent(&mut self, team: &Team) -> Result<bool, StoreError> {
        let key = self.keys.team_key(team.id);
        if self.kv.has(&key)? {
            return Ok(false);
        }
        let buf = mw_codec::encode_team(team)?;
        self.kv.set(&key, &buf)?;
        Ok(true)
    }

    pub fn create_match_if_absent(&mut self, record: &Match) -> Result<bool, StoreError> {
        let key = self.keys.match_key(record.id);
        if self.kv.has(&key)? {
            return Ok(false);
        }
        let buf = mw_codec::encode_match(record)?;
        self.kv.set(&key, &buf)?;
        Ok(true)
    }

    pub fn create_league_if_absent(&mut self, league: &League) -> Result<bool, StoreError> {
        let key = self.keys.league_key(league.id);
        if self.kv.has(&key)? {
            return Ok(false);
        }
        let buf = mw_codec::encode_league(league)?;
        self.kv.set(&key, &buf)?;
        Ok(true)
    }

    pub fn team(&self, id: i64) -> Result<Team, StoreError> {
        let buf = self
            .kv
            .get(&self.keys.team_key(id))?
            .ok_or(StoreError::NotFound { kind: EntityKind::Team, id })?;
        Ok(mw_codec::decode_team(&buf)?)
    }

    pub fn league(&self, id: i64) -> Result<League, StoreError> {
        let buf = self
            .kv
            .get(&self.keys.league_key(id))?
            .ok_or(StoreError::NotFound { kind: EntityKind::League, id })?;
        Ok(mw_codec::decode_league(&buf)?)
    }

    /// Stored match snapshot exactly as last persisted. This is the
    /// comparison input for reconciliation; query reads go through
    /// [`EntityStore::match_hydrated`].
    pub fn match_record(&self, id: i64) -> Result<Match, StoreError> {
        let buf = self
            .kv
            .get(&self.keys.match_key(id))?
            .ok_or(StoreError::NotFound { kind: EntityKind::Match, id })?;
        Ok(mw_codec::decode_match(&buf)?)
    }

    /// Stored match with `home`/`away` replaced by the authoritative Team
    /// records, so the read reflects the latest known team identity and
    /// score regardless of when the match record was last written. A
    /// missing team record is an error, never a silent fallback to the
    /// embedded snapshot.
    pub fn match_hydrated(&self, id: i64) -> Result<Match, StoreError> {
        let mut record = self.match_record(id)?;
        record.home = self.team(record.home.id)?;
        record.away = self.team(record.away.id)?;
        Ok(record)
    }

    /// Unconditional overwrite; reconciliation calls this only after a
    /// confirmed change.
    pub fn put_match(&mut self, record: &Match) -> Result<(), StoreError> {
        let buf = mw_codec::encode_match(record)?;
        self.kv.set(&self.keys.match_key(record.id), &buf)?;
        Ok(())
    }

    pub fn put_team(&mut self, team: &Team) -> Result<(), StoreError> {
        let buf = mw_codec::encode_team(team)?;
        self.kv.set(&self.keys.team_key(team.id), &buf)?;
        Ok(())
    }

    /// Add the match to the unfinished index. The value repeats the id as
    /// 8 big-endian bytes so a scan can decode membership without touching
    /// the match records.
    pub fn mark_unfinished(&mut self, id: i64) -> Result<(), StoreError> {
        let key = self.keys.unfinished_key(id);
        self.kv.set(&key, &(id as u64).to_be_bytes())?;
        Ok(())
    }

    pub fn clear_unfinished(&mut self, id: i64) -> Result<(), StoreError> {
        self.kv.delete(&self.keys.unfinished_key(id))?;
        Ok(())
    }

    /// Ids of every match whose last known status was not finished, in key
    /// order. Malformed index values are skipped, not fatal to the scan.
    pub fn unfinished_match_ids(&self) -> Result<Vec<i64>, StoreError> {
        let mut ids = Vec::new();
        for (key, value) in self.kv.scan_prefix(&self.keys.unfinished_prefix)? {
            let Ok(raw) = <[u8; 8]>::try_from(value.as_slice()) else {
                warn!(key = ?key, len = value.len(), "skipping malformed unfinished-index value");
                continue;
            };
            ids.push(u64::from_be_bytes(raw) as i64);
        }
        Ok(ids)
    }
}
