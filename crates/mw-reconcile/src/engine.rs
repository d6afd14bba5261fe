use mw_schemas::{League, Match};
use mw_store::{EntityStore, Kv};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::classifier::{classify, ChangePriority, DEFAULT_MIN_EVENT_PRIORITY};
use crate::event::{Event, EVENT_NEW_LEAGUE, EVENT_NEW_MATCH};

/// Reconciler knobs. Explicit configuration constructed at wiring time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Smallest classification announced as an event; lower ones are
    /// persisted silently.
    pub min_event_priority: ChangePriority,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_event_priority: DEFAULT_MIN_EVENT_PRIORITY,
        }
    }
}

/// Outcome of one reconciliation cycle: the ordered event sequence plus
/// counters for observability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CycleReport {
    pub events: Vec<Event>,
    pub leagues_seen: usize,
    pub matches_seen: usize,
    pub leagues_created: usize,
    pub teams_created: usize,
    pub matches_created: usize,
    pub matches_updated: usize,
    /// Entities abandoned this cycle after a store or codec failure. They
    /// are re-attempted naturally from the next snapshot.
    pub skipped_on_error: usize,
}

/// Apply one fetched snapshot to the store.
///
/// The caller serializes cycles; within a cycle processing is sequential.
/// Any single entity failure is logged with identifying context and that
/// entity (or its containing match) is skipped; the cycle continues. There
/// is no global transaction: every write is durable as soon as it is
/// issued.
pub fn run_cycle<K: Kv>(
    store: &mut EntityStore<K>,
    snapshot: &[League],
    config: &EngineConfig,
) -> CycleReport {
    let mut report = CycleReport::default();

    for league in snapshot {
        report.leagues_seen += 1;

        match store.create_league_if_absent(league) {
            Err(err) => {
                error!(
                    league = %league.name,
                    league_id = league.id,
                    %err,
                    "failed to save league, skipping its matches this cycle"
                );
                report.skipped_on_error += 1;
                continue;
            }
            Ok(true) => {
                report.leagues_created += 1;
                info!(
                    league = %league.name,
                    league_id = league.id,
                    group = %league.group_name,
                    event = EVENT_NEW_LEAGUE,
                    "detected a new league"
                );
                report.events.push(Event::NewLeague {
                    id: league.id,
                    name: league.name.clone(),
                    group_name: league.group_name.clone(),
                });
            }
            Ok(false) => {}
        }

        for incoming in &league.matches {
            report.matches_seen += 1;
            reconcile_match(store, incoming, config, &mut report);
        }
    }

    report
}

fn reconcile_match<K: Kv>(
    store: &mut EntityStore<K>,
    incoming: &Match,
    config: &EngineConfig,
    report: &mut CycleReport,
) {
    // A team save failure must not block the match itself.
    for team in [&incoming.home, &incoming.away] {
        match store.create_team_if_absent(team) {
            Ok(true) => report.teams_created += 1,
            Ok(false) => {}
            Err(err) => {
                error!(team = %team.name, team_id = team.id, %err, "failed to save team");
            }
        }
    }

    let created = match store.create_match_if_absent(incoming) {
        Ok(created) => created,
        Err(err) => {
            error!(
                match_id = incoming.id,
                league_id = incoming.league_id,
                home_id = incoming.home.id,
                away_id = incoming.away.id,
                %err,
                "failed to save match"
            );
            report.skipped_on_error += 1;
            return;
        }
    };

    if created {
        report.matches_created += 1;
        info!(
            match_id = incoming.id,
            league_id = incoming.league_id,
            event = EVENT_NEW_MATCH,
            "detected a new match"
        );
        report.events.push(Event::NewMatch {
            id: incoming.id,
            league_id: incoming.league_id,
            home_id: incoming.home.id,
            away_id: incoming.away.id,
            home_name: incoming.home.name.clone(),
            away_name: incoming.away.name.clone(),
        });

        if !incoming.status.finished {
            if let Err(err) = store.mark_unfinished(incoming.id) {
                error!(match_id = incoming.id, %err, "failed to index unfinished match");
            }
        }
        return;
    }

    // Pre-existing match: compare against the record as last persisted.
    let stored = match store.match_record(incoming.id) {
        Ok(stored) => stored,
        Err(err) => {
            error!(
                match_id = incoming.id,
                league_id = incoming.league_id,
                home_id = incoming.home.id,
                away_id = incoming.away.id,
                %err,
                "failed to read stored match for comparison"
            );
            report.skipped_on_error += 1;
            return;
        }
    };

    let change = classify(incoming, &stored);
    if change == ChangePriority::NoChange {
        debug!(
            match_id = incoming.id,
            league_id = incoming.league_id,
            "match has no changes"
        );
        return;
    }

    // Persist every confirmed change, event-worthy or not.
    if let Err(err) = store.put_match(incoming) {
        error!(
            match_id = incoming.id,
            league_id = incoming.league_id,
            %err,
            "failed to persist match update"
        );
        report.skipped_on_error += 1;
        return;
    }

    // Keep the Team store authoritative for the latest observed identity
    // and score; hydrated match reads pull both from it.
    for team in [&incoming.home, &incoming.away] {
        if let Err(err) = store.put_team(team) {
            error!(
                team_id = team.id,
                match_id = incoming.id,
                %err,
                "failed to write through team record"
            );
        }
    }

    let index_result = if incoming.status.finished {
        store.clear_unfinished(incoming.id)
    } else {
        store.mark_unfinished(incoming.id)
    };
    if let Err(err) = index_result {
        error!(
            match_id = incoming.id,
            finished = incoming.status.finished,
            %err,
            "failed to update unfinished index"
        );
    }

    report.matches_updated += 1;

    if change >= config.min_event_priority {
        info!(
            match_id = incoming.id,
            event = change.event_name(),
            "match has changed"
        );
        report.events.push(Event::MatchChanged {
            change,
            id: incoming.id,
            league_id: incoming.league_id,
            home_id: incoming.home.id,
            away_id: incoming.away.id,
            home_name: incoming.home.name.clone(),
            away_name: incoming.away.name.clone(),
        });
    } else {
        debug!(
            match_id = incoming.id,
            change = change.event_name(),
            "change below event threshold, stored silently"
        );
    }
}
