//! Key derivation: `prefix(kind) || big_endian_u64(id)`.
//!
//! The unfinished index shares the match id space under its own prefix so
//! it can be prefix-scanned independently of the match records.

pub const TEAM_PREFIX: &[u8] = b"team";
pub const MATCH_PREFIX: &[u8] = b"match";
pub const LEAGUE_PREFIX: &[u8] = b"league";
pub const MATCH_UNFINISHED_PREFIX: &[u8] = b"match_unfinished";

/// Key prefixes for each persisted record family. Explicit configuration
/// handed to the store at construction; the defaults are the wire contract
/// with the host substrate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    pub team_prefix: Vec<u8>,
    pub match_prefix: Vec<u8>,
    pub league_prefix: Vec<u8>,
    pub unfinished_prefix: Vec<u8>,
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self {
            team_prefix: TEAM_PREFIX.to_vec(),
            match_prefix: MATCH_PREFIX.to_vec(),
            league_prefix: LEAGUE_PREFIX.to_vec(),
            unfinished_prefix: MATCH_UNFINISHED_PREFIX.to_vec(),
        }
    }
}

impl StoreKeys {
    pub fn team_key(&self, id: i64) -> Vec<u8> {
        join(&self.team_prefix, id)
    }

    pub fn match_key(&self, id: i64) -> Vec<u8> {
        join(&self.match_prefix, id)
    }

    pub fn league_key(&self, id: i64) -> Vec<u8> {
        join(&self.league_prefix, id)
    }

    pub fn unfinished_key(&self, id: i64) -> Vec<u8> {
        join(&self.unfinished_prefix, id)
    }
}

fn join(prefix: &[u8], id: i64) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + 8);
    key.extend_from_slice(prefix);
    key.extend_from_slice(&(id as u64).to_be_bytes());
    key
}
