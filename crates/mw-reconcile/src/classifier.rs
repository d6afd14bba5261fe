use mw_schemas::Match;
use serde::{Deserialize, Serialize};

/// Single dominant difference between an incoming match snapshot and the
/// stored record. Variants are declared in ascending reporting priority:
/// outcome-affecting facts rank above live-clock cosmetics, so deriving
/// `Ord` gives the comparison the threshold check needs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ChangePriority {
    NoChange,
    LiveTime,
    PeriodLength,
    Ongoing,
    Started,
    Finished,
    Cancelled,
    Score,
}

impl ChangePriority {
    /// Canonical name for this outcome. Event consumers treat these as a
    /// frozen contract.
    pub fn event_name(&self) -> &'static str {
        match self {
            ChangePriority::NoChange => "match_no_changes",
            ChangePriority::LiveTime => "match_live_time",
            ChangePriority::PeriodLength => "match_period_length",
            ChangePriority::Ongoing => "match_ongoing",
            ChangePriority::Started => "match_started",
            ChangePriority::Finished => "match_finished",
            ChangePriority::Cancelled => "match_cancelled",
            ChangePriority::Score => "match_score",
        }
    }
}

/// Smallest classification announced as an event. Anything below is
/// persisted silently; operators wanting live-clock telemetry lower the
/// threshold through the engine configuration.
pub const DEFAULT_MIN_EVENT_PRIORITY: ChangePriority = ChangePriority::PeriodLength;

/// Compare an incoming snapshot against the stored record and return the
/// single highest-priority difference, or `NoChange`.
///
/// Predicates run in priority order, not field order, so a pair differing
/// in both score and live time classifies as `Score`. The classifier never
/// returns a set: one dominant reason only.
pub fn classify(incoming: &Match, stored: &Match) -> ChangePriority {
    if incoming.home.score != stored.home.score || incoming.away.score != stored.away.score {
        return ChangePriority::Score;
    }
    if incoming.status.cancelled != stored.status.cancelled {
        return ChangePriority::Cancelled;
    }
    if incoming.status.finished != stored.status.finished {
        return ChangePriority::Finished;
    }
    if incoming.status.started != stored.status.started {
        return ChangePriority::Started;
    }
    if incoming.status.ongoing != stored.status.ongoing {
        return ChangePriority::Ongoing;
    }
    if incoming.status.period_length != stored.status.period_length {
        return ChangePriority::PeriodLength;
    }
    let incoming_clock = &incoming.status.live_time;
    let stored_clock = &stored.status.live_time;
    if incoming_clock.long != stored_clock.long
        || incoming_clock.max_time != stored_clock.max_time
        || incoming_clock.added_time != stored_clock.added_time
    {
        return ChangePriority::LiveTime;
    }
    ChangePriority::NoChange
}
