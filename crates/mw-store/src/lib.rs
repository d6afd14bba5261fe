//! mw-store
//!
//! Durable entity store over a host-provided key-value substrate.
//!
//! Owns key derivation, idempotent create, reads (raw and team-hydrated),
//! unconditional overwrite, and the unfinished-match secondary index.
//! Serialization is delegated to mw-codec; this crate only moves opaque
//! blobs through the [`Kv`] boundary.

mod keys;
mod kv;
mod memory;
mod store;

pub use keys::{
    StoreKeys, LEAGUE_PREFIX, MATCH_PREFIX, MATCH_UNFINISHED_PREFIX, TEAM_PREFIX,
};
pub use kv::{Kv, KvError};
pub use memory::MemoryKv;
pub use store::{EntityKind, EntityStore, StoreError};
