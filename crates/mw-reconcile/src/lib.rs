//! mw-reconcile
//!
//! Snapshot reconciliation core:
//! - a pure change classifier returning the single dominant difference
//!   between two match snapshots
//! - the cycle engine: one fetched snapshot in, store mutations and an
//!   ordered event sequence out, with per-entity fault isolation.
//!
//! No IO beyond the entity store handed in by the caller. The fetch and the
//! trigger cadence are the host's business; the engine applies whatever
//! snapshot the caller agreed on.

mod classifier;
mod engine;
mod event;

pub use classifier::{classify, ChangePriority, DEFAULT_MIN_EVENT_PRIORITY};
pub use engine::{run_cycle, CycleReport, EngineConfig};
pub use event::{Event, EVENT_NEW_LEAGUE, EVENT_NEW_MATCH};
