//! Scenario: match reads through the hydrated accessor reflect the
//! authoritative Team records, not the snapshots embedded at write time.

use mw_schemas::{Match, Team};
use mw_store::{EntityStore, MemoryKv, StoreError};

fn seeded_store() -> EntityStore<MemoryKv> {
    let mut store = EntityStore::new(MemoryKv::new());
    let home = Team::new(1, 0, "Arsenal", "Arsenal FC");
    let away = Team::new(2, 0, "Chelsea", "Chelsea FC");
    store.create_team_if_absent(&home).unwrap();
    store.create_team_if_absent(&away).unwrap();

    let mut record = Match::default();
    record.id = 1001;
    record.league_id = 47;
    record.home = home;
    record.away = away;
    store.create_match_if_absent(&record).unwrap();
    store
}

#[test]
fn hydrated_read_picks_up_later_team_updates() {
    let mut store = seeded_store();

    store.put_team(&Team::new(1, 2, "Arsenal", "Arsenal FC")).unwrap();

    let hydrated = store.match_hydrated(1001).unwrap();
    assert_eq!(hydrated.home.score, 2, "hydration must use the latest team record");
    assert_eq!(hydrated.away.score, 0);

    // The raw record still carries the snapshot taken at write time.
    assert_eq!(store.match_record(1001).unwrap().home.score, 0);
}

#[test]
fn hydration_refreshes_names_from_the_team_store() {
    let mut store = seeded_store();

    store.put_team(&Team::new(2, 0, "Chelsea", "Chelsea Football Club")).unwrap();

    let hydrated = store.match_hydrated(1001).unwrap();
    assert_eq!(hydrated.away.long_name, "Chelsea Football Club");
}

#[test]
fn missing_team_record_is_an_error_not_a_fallback() {
    let mut store = EntityStore::new(MemoryKv::new());
    let mut record = Match::default();
    record.id = 1001;
    record.home = Team::new(1, 0, "Arsenal", "Arsenal FC");
    record.away = Team::new(2, 0, "Chelsea", "Chelsea FC");
    store.create_match_if_absent(&record).unwrap();

    // No team records were ever created.
    assert!(matches!(
        store.match_hydrated(1001),
        Err(StoreError::NotFound { .. })
    ));
}

#[test]
fn unknown_match_is_not_found() {
    let store = seeded_store();
    assert!(matches!(
        store.match_record(9999),
        Err(StoreError::NotFound { id: 9999, .. })
    ));
}
