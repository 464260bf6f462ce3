//! Persistence integration tests.
//!
//! Exercise the save store end to end: save/load round-trips across the
//! whole lifecycle, listing and deletion, and the failure surface for
//! malformed or invariant-violating records.

use std::fs;

use tempfile::tempdir;
use xenolab::{Creature, LabRng, SaveStore, Stage, StoreError};

/// Play a creature all the way to its final form.
fn evolved_creature(rng: &mut LabRng) -> Creature {
    let mut creature = Creature::new("Zorp");

    while creature.stage() != Stage::Evolved {
        creature.feed();
        creature.expose_to_light(rng);
        creature.play_sound(rng);
        creature.advance_day(rng);
    }
    creature
}

// =============================================================================
// Round Trips
// =============================================================================

/// A fresh creature survives a save/load round trip unchanged.
#[test]
fn test_fresh_creature_round_trip() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    let creature = Creature::new("Zorp");
    store.save("zorp", &creature).unwrap();

    assert_eq!(store.load("zorp").unwrap(), creature);
}

/// A fully evolved creature (form assigned, long diary) round-trips with
/// every observable attribute intact.
#[test]
fn test_evolved_creature_round_trip() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path());
    let mut rng = LabRng::new(42);

    let creature = evolved_creature(&mut rng);
    assert!(creature.final_form().is_some());

    store.save("zorp", &creature).unwrap();
    let loaded = store.load("zorp").unwrap();

    assert_eq!(loaded.name(), creature.name());
    assert_eq!(loaded.stats(), creature.stats());
    assert_eq!(loaded.mutation_level(), creature.mutation_level());
    assert_eq!(loaded.stage(), creature.stage());
    assert_eq!(loaded.final_form(), creature.final_form());
    let original: Vec<_> = creature.diary().iter().cloned().collect();
    let restored: Vec<_> = loaded.diary().iter().cloned().collect();
    assert_eq!(restored, original);
}

/// Saving under the same name overwrites the previous snapshot.
#[test]
fn test_save_overwrites() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    let mut creature = Creature::new("Zorp");
    store.save("zorp", &creature).unwrap();

    creature.feed();
    store.save("zorp", &creature).unwrap();

    let loaded = store.load("zorp").unwrap();
    assert_eq!(loaded.stats().hunger.get(), 30);
    assert_eq!(store.list().unwrap().len(), 1);
}

/// The on-disk record carries the exact external field encodings.
#[test]
fn test_save_file_field_encodings() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path());
    let mut rng = LabRng::new(42);

    let creature = evolved_creature(&mut rng);
    let path = store.save("zorp", &creature).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(json["name"], "Zorp");
    assert_eq!(json["stage"], "evolved");
    assert!(["PsiBrain", "BioBeast", "VoidGhost"]
        .contains(&json["final_form"].as_str().unwrap()));
    assert!(json["diary"].is_array());
    assert!(json["mutation_level"].as_u64().unwrap() >= 6);
}

// =============================================================================
// Listing and Deletion
// =============================================================================

/// Listing returns sorted save names and ignores foreign files.
#[test]
fn test_list_saves() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    store.save("specimen-b", &Creature::new("B")).unwrap();
    store.save("specimen-a", &Creature::new("A")).unwrap();
    fs::write(dir.path().join("readme.md"), "lab notes").unwrap();

    assert_eq!(store.list().unwrap(), vec!["specimen-a", "specimen-b"]);
}

/// Deleting a save removes only that file and leaves loaded creatures alone.
#[test]
fn test_delete_save() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    let creature = Creature::new("Zorp");
    store.save("zorp", &creature).unwrap();
    store.save("blip", &Creature::new("Blip")).unwrap();

    let loaded = store.load("zorp").unwrap();
    store.delete("zorp").unwrap();

    assert_eq!(store.list().unwrap(), vec!["blip"]);
    assert_eq!(loaded, creature);
}

// =============================================================================
// Failure Surface
// =============================================================================

/// Missing saves surface as NotFound for both load and delete.
#[test]
fn test_missing_save_errors() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    assert!(matches!(
        store.load("nobody"),
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete("nobody"),
        Err(StoreError::NotFound { .. })
    ));
}

/// Syntactically broken JSON is a deserialization error.
#[test]
fn test_malformed_json_errors() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path());
    fs::write(dir.path().join("broken.json"), "{\"name\": ").unwrap();

    assert!(matches!(
        store.load("broken"),
        Err(StoreError::Deserialization(_))
    ));
}

/// A record missing required fields is a deserialization error.
#[test]
fn test_incomplete_record_errors() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path());
    fs::write(dir.path().join("partial.json"), r#"{"name": "Zorp"}"#).unwrap();

    assert!(matches!(
        store.load("partial"),
        Err(StoreError::Deserialization(_))
    ));
}

/// A well-formed record that violates creature invariants is rejected.
#[test]
fn test_inconsistent_record_errors() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path());
    let json = r#"{
        "name": "Zorp",
        "health": 80,
        "happiness": 50,
        "hunger": 50,
        "mutation_level": 2,
        "stage": "baby",
        "final_form": "BioBeast",
        "diary": []
    }"#;
    fs::write(dir.path().join("impossible.json"), json).unwrap();

    assert!(matches!(
        store.load("impossible"),
        Err(StoreError::InvalidSnapshot(_))
    ));
}

/// A failed load leaves the store contents untouched.
#[test]
fn test_failed_load_has_no_side_effects() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    store.save("good", &Creature::new("Zorp")).unwrap();
    fs::write(dir.path().join("bad.json"), "not json at all").unwrap();

    assert!(store.load("bad").is_err());
    assert!(store.load("good").is_ok());
    assert_eq!(store.list().unwrap(), vec!["bad", "good"]);
}
