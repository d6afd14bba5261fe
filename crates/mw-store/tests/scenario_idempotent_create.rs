//! Scenario: create-if-absent is idempotent per (kind, id).
//!
//! A second create of the same key reports `false`, performs no write, and
//! leaves the first payload untouched.

use mw_schemas::{League, Match, Team};
use mw_store::{EntityStore, MemoryKv};

fn store() -> EntityStore<MemoryKv> {
    EntityStore::new(MemoryKv::new())
}

#[test]
fn second_team_create_is_a_no_op() {
    let mut store = store();
    let first = Team::new(1, 0, "Arsenal", "Arsenal FC");

    assert!(store.create_team_if_absent(&first).unwrap());
    assert!(!store.create_team_if_absent(&Team::new(1, 3, "Arsenal", "Arsenal FC")).unwrap());

    // The first payload wins; the second create wrote nothing.
    assert_eq!(store.team(1).unwrap().score, 0);
}

#[test]
fn second_match_create_preserves_first_snapshot() {
    let mut store = store();
    let mut record = Match::default();
    record.id = 1001;
    record.home = Team::new(1, 0, "Arsenal", "Arsenal FC");
    record.away = Team::new(2, 0, "Chelsea", "Chelsea FC");

    assert!(store.create_match_if_absent(&record).unwrap());

    let mut later = record.clone();
    later.home.score = 2;
    assert!(!store.create_match_if_absent(&later).unwrap());

    assert_eq!(store.match_record(1001).unwrap().home.score, 0);
}

#[test]
fn league_create_never_persists_its_match_list() {
    let mut store = store();
    let league = League {
        id: 47,
        name: "Premier League".to_string(),
        matches: vec![Match { id: 1001, league_id: 47, ..Match::default() }],
        ..League::default()
    };

    assert!(store.create_league_if_absent(&league).unwrap());
    assert!(!store.create_league_if_absent(&league).unwrap());

    let stored = store.league(47).unwrap();
    assert!(stored.matches.is_empty());
    assert_eq!(stored.name, "Premier League");
}
