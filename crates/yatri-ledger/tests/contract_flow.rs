//! End-to-end contract scenarios over the in-memory store
//!
//! Exercises the full operation surface the way the ledger platform
//! would invoke it: one registry and one recorder sharing a store and a
//! controllable clock.

use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use yatri_core::{hash, Clock, FixedClock, LedgerError, TouristId, TouristIdentity};
use yatri_ledger::{
    keys, EventRecorder, IdentityRegistry, MemoryStateStore, StateStore, StaticCaller,
};

struct Harness {
    store: Arc<MemoryStateStore>,
    clock: Arc<FixedClock>,
    registry: Arc<IdentityRegistry>,
    recorder: EventRecorder,
}

fn harness() -> Harness {
    let store = Arc::new(MemoryStateStore::new());
    let clock = Arc::new(FixedClock::new(
        Utc.timestamp_opt(1_700_000_000, 0).single().unwrap(),
    ));
    let registry = Arc::new(IdentityRegistry::new(
        store.clone(),
        clock.clone(),
        Arc::new(StaticCaller::new("org1-issuer")),
    ));
    let recorder = EventRecorder::new(store.clone(), clock.clone(), registry.clone());
    Harness {
        store,
        clock,
        registry,
        recorder,
    }
}

#[test]
fn create_issues_well_formed_identity() {
    let h = harness();
    let t = h.clock.now();
    let identity = h
        .registry
        .create("A1", "P1", "I1", vec!["+911234".into()])
        .unwrap();

    let hex_part = identity.id.as_str().strip_prefix("TID_").unwrap();
    assert_eq!(hex_part.len(), 16);
    assert!(hex_part
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    assert_eq!(identity.aadhar_hash, hash::digest_hex("A1"));
    assert_eq!(identity.valid_from, t);
    assert_eq!(identity.valid_until, t + Duration::days(30));
    assert!(identity.is_active);
    assert_eq!(identity.safety_score, 100);
    assert_eq!(identity.created_by, "org1-issuer");
}

#[test]
fn create_is_not_idempotent_across_seconds() {
    let h = harness();
    let first = h.registry.create("A1", "P1", "I1", vec![]).unwrap();
    h.clock.advance(Duration::seconds(2));
    let second = h.registry.create("A1", "P1", "I1", vec![]).unwrap();

    // Same person, different id: duplicate submissions are undetectable
    // once the salt second has passed.
    assert_ne!(first.id, second.id);
    assert_eq!(first.aadhar_hash, second.aadhar_hash);
}

#[test]
fn create_within_one_second_is_rejected() {
    let h = harness();
    h.registry.create("A1", "P1", "I1", vec![]).unwrap();
    assert!(matches!(
        h.registry.create("A1", "P1", "I1", vec![]),
        Err(LedgerError::AlreadyExists { .. })
    ));
}

#[test]
fn get_round_trips_created_record() {
    let h = harness();
    let created = h
        .registry
        .create("A1", "P1", "I1", vec!["+911234".into(), "+915678".into()])
        .unwrap();
    let fetched = h.registry.get(&created.id).unwrap();
    assert_eq!(fetched, created);
    // Insertion order of contacts is preserved through the store.
    assert_eq!(
        fetched.emergency_contacts,
        vec!["+911234".to_string(), "+915678".to_string()]
    );
}

#[test]
fn full_journey_flow() {
    let h = harness();
    let identity = h.registry.create("A1", "P1", "I1", vec![]).unwrap();

    h.recorder
        .record_location(&identity.id, 26.1445, 91.7362, "Guwahati", "LOW")
        .unwrap();
    h.clock.advance(Duration::seconds(60));
    h.recorder
        .record_location(&identity.id, 25.5788, 91.8933, "Shillong", "MODERATE")
        .unwrap();
    h.clock.advance(Duration::seconds(60));
    h.recorder.trigger_panic(&identity.id, 25.5788, 91.8933).unwrap();
    h.registry.update_safety_score(&identity.id, 35).unwrap();

    assert_eq!(h.store.keys_with_prefix(keys::LOCATION_KEY_PREFIX).len(), 2);
    assert_eq!(h.store.keys_with_prefix(keys::ALERT_KEY_PREFIX).len(), 1);
    assert_eq!(h.registry.get(&identity.id).unwrap().safety_score, 35);
}

#[test]
fn score_update_touches_only_score_and_timestamp() {
    let h = harness();
    let created = h.registry.create("A1", "P1", "I1", vec![]).unwrap();
    h.clock.advance(Duration::seconds(10));
    h.registry.update_safety_score(&created.id, 60).unwrap();

    let fetched = h.registry.get(&created.id).unwrap();
    assert_eq!(fetched.safety_score, 60);
    assert!(fetched.last_updated > created.last_updated);
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.itinerary_hash, created.itinerary_hash);
    assert_eq!(fetched.valid_from, created.valid_from);
    assert_eq!(fetched.created_by, created.created_by);
    assert!(fetched.is_active);
}

#[test]
fn stored_identity_is_camel_case_json() {
    // The store value is the external data format; other platform
    // components read it without going through this crate.
    let h = harness();
    let created = h.registry.create("A1", "P1", "I1", vec![]).unwrap();
    let bytes = h.store.get(created.id.as_str()).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["id"], created.id.as_str());
    assert_eq!(value["aadharHash"], hash::digest_hex("A1"));
    assert_eq!(value["safetyScore"], 100);
    assert_eq!(value["isActive"], true);
}

#[test]
fn validity_helper_tracks_window_and_active_flag() {
    let h = harness();
    let created = h.registry.create("A1", "P1", "I1", vec![]).unwrap();

    assert!(created.is_valid(h.clock.now()));
    assert!(created.is_valid(h.clock.now() + Duration::days(29)));
    assert!(!created.is_valid(h.clock.now() + Duration::days(30)));

    // Deactivation is an external capability; simulate it at the store.
    let mut deactivated: TouristIdentity = created.clone();
    deactivated.is_active = false;
    h.store
        .put(
            deactivated.id.as_str(),
            serde_json::to_vec(&deactivated).unwrap(),
        )
        .unwrap();
    let fetched = h.registry.get(&created.id).unwrap();
    assert!(!fetched.is_valid(h.clock.now()));
}

#[test]
fn deactivated_identity_rejects_locations_but_accepts_everything_else() {
    let h = harness();
    let created = h.registry.create("A1", "P1", "I1", vec![]).unwrap();
    let mut deactivated = created.clone();
    deactivated.is_active = false;
    h.store
        .put(
            deactivated.id.as_str(),
            serde_json::to_vec(&deactivated).unwrap(),
        )
        .unwrap();

    assert!(matches!(
        h.recorder
            .record_location(&created.id, 26.0, 91.0, "Guwahati", "LOW"),
        Err(LedgerError::InactiveIdentity { .. })
    ));

    // Alerts and score updates do not consult the active flag.
    h.recorder
        .trigger_emergency(&created.id, "MEDICAL", "hospital", "assist")
        .unwrap();
    h.registry.update_safety_score(&created.id, 10).unwrap();
}

#[test]
fn alerts_attach_to_unknown_identities() {
    let h = harness();
    let ghost: TouristId = "TID_deadbeefdeadbeef".parse().unwrap();

    h.recorder
        .trigger_emergency(&ghost, "GEOFENCE", "restricted zone", "entered restricted area")
        .unwrap();

    let key = keys::alert_key(&ghost, h.clock.now());
    let value: serde_json::Value =
        serde_json::from_slice(&h.store.get(&key).unwrap().unwrap()).unwrap();
    assert_eq!(value["status"], "ACTIVE");
    assert_eq!(value["touristId"], ghost.as_str());
}
