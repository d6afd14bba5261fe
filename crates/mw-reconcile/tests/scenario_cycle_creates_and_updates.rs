//! Scenario: one-league cycles against an in-memory store.
//!
//! First sighting creates league, teams and match and emits new_league +
//! new_match in fetch order; an identical snapshot is a pure no-op; a score
//! bump persists, writes through the team records and emits match_score.

use mw_reconcile::{run_cycle, ChangePriority, CycleReport, EngineConfig, Event};
use mw_schemas::{League, Match, Status, Team};
use mw_store::{EntityStore, MemoryKv};

fn fixture_match(home_score: i32, finished: bool) -> Match {
    let mut m = Match::default();
    m.id = 1001;
    m.league_id = 10;
    m.home = Team::new(1, home_score, "Arsenal", "Arsenal FC");
    m.away = Team::new(2, 0, "Chelsea", "Chelsea FC");
    m.status = Status {
        period_length: 45,
        started: home_score > 0 || finished,
        finished,
        ..Status::default()
    };
    m
}

fn snapshot(home_score: i32, finished: bool) -> Vec<League> {
    vec![League {
        id: 10,
        name: "EPL".to_string(),
        ccode: "ENG".to_string(),
        primary_id: 10,
        matches: vec![fixture_match(home_score, finished)],
        ..League::default()
    }]
}

fn event_names(report: &CycleReport) -> Vec<&'static str> {
    report.events.iter().map(|e| e.name()).collect()
}

#[test]
fn first_sighting_creates_everything_and_emits_in_order() {
    let mut store = EntityStore::new(MemoryKv::new());
    let report = run_cycle(&mut store, &snapshot(0, false), &EngineConfig::default());

    assert_eq!(report.leagues_created, 1);
    assert_eq!(report.teams_created, 2);
    assert_eq!(report.matches_created, 1);
    assert_eq!(report.matches_updated, 0);
    assert_eq!(report.skipped_on_error, 0);
    assert_eq!(event_names(&report), vec!["new_league", "new_match"]);

    assert_eq!(store.league(10).unwrap().name, "EPL");
    assert_eq!(store.team(1).unwrap().name, "Arsenal");
    assert_eq!(store.match_record(1001).unwrap().league_id, 10);
    assert_eq!(store.unfinished_match_ids().unwrap(), vec![1001]);
}

#[test]
fn identical_snapshot_is_a_no_op() {
    let mut store = EntityStore::new(MemoryKv::new());
    run_cycle(&mut store, &snapshot(0, false), &EngineConfig::default());

    let report = run_cycle(&mut store, &snapshot(0, false), &EngineConfig::default());
    assert!(report.events.is_empty());
    assert_eq!(report.leagues_created, 0);
    assert_eq!(report.teams_created, 0);
    assert_eq!(report.matches_created, 0);
    assert_eq!(report.matches_updated, 0);
    assert_eq!(store.unfinished_match_ids().unwrap(), vec![1001]);
}

#[test]
fn score_bump_persists_and_emits_match_score() {
    let mut store = EntityStore::new(MemoryKv::new());
    run_cycle(&mut store, &snapshot(0, false), &EngineConfig::default());

    let report = run_cycle(&mut store, &snapshot(1, false), &EngineConfig::default());
    assert_eq!(report.matches_updated, 1);
    assert_eq!(report.events.len(), 1);
    assert!(matches!(
        report.events[0],
        Event::MatchChanged { change: ChangePriority::Score, id: 1001, .. }
    ));

    // The record, the write-through team and the hydrated view all agree.
    assert_eq!(store.match_record(1001).unwrap().home.score, 1);
    assert_eq!(store.team(1).unwrap().score, 1);
    assert_eq!(store.match_hydrated(1001).unwrap().home.score, 1);
    assert_eq!(store.unfinished_match_ids().unwrap(), vec![1001]);
}

#[test]
fn score_bump_emits_only_the_dominant_event_once() {
    let mut store = EntityStore::new(MemoryKv::new());
    run_cycle(&mut store, &snapshot(0, false), &EngineConfig::default());
    run_cycle(&mut store, &snapshot(1, false), &EngineConfig::default());

    // Same score again: the earlier update must not re-classify.
    let report = run_cycle(&mut store, &snapshot(1, false), &EngineConfig::default());
    assert!(report.events.is_empty());
    assert_eq!(report.matches_updated, 0);
}

#[test]
fn shared_team_across_matches_causes_no_phantom_score_event() {
    // Arsenal appears in two different matches; an update in the first must
    // not make the second look changed, because comparison always runs
    // against the raw stored record, never the hydrated view.
    let mut second = fixture_match(0, false);
    second.id = 1002;
    second.away = Team::new(3, 0, "Spurs", "Tottenham Hotspur");

    let mut league = snapshot(0, false).remove(0);
    league.matches.push(second);

    let mut store = EntityStore::new(MemoryKv::new());
    run_cycle(&mut store, &[league.clone()], &EngineConfig::default());

    // Arsenal score in the first match only.
    league.matches[0].home.score = 2;
    league.matches[0].status.started = true;
    let report = run_cycle(&mut store, &[league.clone()], &EngineConfig::default());
    assert_eq!(report.events.len(), 1);

    // Replay the same snapshot: nothing changed anywhere, in particular not
    // in the second match, whose embedded Arsenal snapshot still reads 0.
    let report = run_cycle(&mut store, &[league], &EngineConfig::default());
    assert!(report.events.is_empty());
    assert_eq!(report.matches_updated, 0);
}
