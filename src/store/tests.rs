use chrono::{Duration, Utc};
use std::collections::HashSet;

use super::LeadStore;
use crate::error::StoreError;
use crate::models::{Lead, LeadDraft, LeadStatus, Priority};

fn lead(id: &str, status: LeadStatus) -> Lead {
    Lead {
        id: id.to_string(),
        name: format!("Lead {id}"),
        company: format!("Company {id}"),
        email: format!("{id}@example.com"),
        value: 1000,
        status,
        priority: Priority::Medium,
        created_at: Utc::now() - Duration::minutes(5),
        tags: vec!["Test".to_string()],
        avatar: None,
    }
}

fn two_lead_store() -> LeadStore {
    LeadStore::with_leads(vec![lead("1", LeadStatus::New), lead("2", LeadStatus::New)]).unwrap()
}

#[test]
fn test_create_uses_draft_fields() {
    let mut store = LeadStore::new();
    let draft = LeadDraft {
        name: "Jane".to_string(),
        company: "Initech".to_string(),
        value: 42_000,
        priority: Priority::High,
        status: LeadStatus::Proposal,
        ..LeadDraft::default()
    };

    let created = store.create(draft);

    assert_eq!(created.name, "Jane");
    assert_eq!(created.company, "Initech");
    assert_eq!(created.value, 42_000);
    assert_eq!(created.priority, Priority::High);
    assert_eq!(created.status, LeadStatus::Proposal);
    assert_eq!(created.tags, vec!["New".to_string()]);
    assert_eq!(created.id.len(), 9);
    assert_eq!(store.get(&created.id), Some(&created));
}

#[test]
fn test_create_stamps_current_time() {
    let mut store = LeadStore::new();
    let before = Utc::now();
    let created = store.create(LeadDraft::default());
    let after = Utc::now();

    assert!(created.created_at >= before);
    assert!(created.created_at <= after);
}

#[test]
fn test_created_ids_are_unique() {
    let mut store = LeadStore::new();
    let ids: HashSet<String> = (0..500)
        .map(|_| store.create(LeadDraft::default()).id)
        .collect();
    assert_eq!(ids.len(), 500);
    assert_eq!(store.len(), 500);
}

#[test]
fn test_deleted_id_is_never_reissued() {
    let mut store = two_lead_store();
    assert!(store.delete("1"));

    let err = store.insert(lead("1", LeadStatus::Won)).unwrap_err();
    assert_eq!(err, StoreError::DuplicateId("1".to_string()));
    assert!(!store.contains("1"));
}

#[test]
fn test_insert_rejects_duplicate_id() {
    let result = LeadStore::with_leads(vec![lead("7", LeadStatus::New), lead("7", LeadStatus::Lost)]);
    assert!(matches!(result, Err(StoreError::DuplicateId(id)) if id == "7"));
}

#[test]
fn test_delete_removes_only_target() {
    let mut store = two_lead_store();
    assert!(store.delete("1"));
    let ids: Vec<&str> = store.list().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn test_delete_twice_equals_delete_once() {
    let mut once = two_lead_store();
    once.delete("2");

    let mut twice = once.clone();
    assert!(!twice.delete("2"));

    assert_eq!(once.list(), twice.list());
}

#[test]
fn test_delete_unknown_id_leaves_collection_unchanged() {
    let mut store = two_lead_store();
    let snapshot = store.list().to_vec();
    let revision = store.revision();

    assert!(!store.delete("99"));

    assert_eq!(store.list(), snapshot.as_slice());
    assert_eq!(store.revision(), revision);
}

#[test]
fn test_reclassify_changes_only_status() {
    let mut store = two_lead_store();
    let original = store.get("2").unwrap().clone();

    assert!(store.reclassify("2", LeadStatus::Won));

    let moved = store.get("2").unwrap();
    assert_eq!(moved.status, LeadStatus::Won);
    assert_eq!(
        Lead {
            status: original.status,
            ..moved.clone()
        },
        original
    );
    assert_eq!(store.get("1").unwrap().status, LeadStatus::New);
}

#[test]
fn test_reclassify_same_stage_is_idempotent() {
    let mut store = two_lead_store();
    store.reclassify("1", LeadStatus::Contacted);
    let after_first = store.get("1").unwrap().clone();
    let revision = store.revision();

    assert!(store.reclassify("1", LeadStatus::Contacted));

    assert_eq!(store.get("1").unwrap(), &after_first);
    assert_eq!(store.revision(), revision);
}

#[test]
fn test_every_stage_reachable_from_every_stage() {
    let mut store = two_lead_store();
    for from in LeadStatus::ALL {
        for to in LeadStatus::ALL {
            store.reclassify("1", from);
            assert!(store.reclassify("1", to));
            assert_eq!(store.get("1").unwrap().status, to);
        }
    }
}

#[test]
fn test_reclassify_unknown_id_is_noop() {
    let mut store = two_lead_store();
    let snapshot = store.list().to_vec();
    assert!(!store.reclassify("missing", LeadStatus::Lost));
    assert_eq!(store.list(), snapshot.as_slice());
}

#[test]
fn test_revision_advances_on_mutation() {
    let mut store = LeadStore::new();
    assert_eq!(store.revision(), 0);

    let created = store.create(LeadDraft::default());
    assert_eq!(store.revision(), 1);

    store.reclassify(&created.id, LeadStatus::Won);
    assert_eq!(store.revision(), 2);

    store.delete(&created.id);
    assert_eq!(store.revision(), 3);
}

#[test]
fn test_mixed_operation_sequence_keeps_survivors() {
    let mut store = LeadStore::new();
    let a = store.create(LeadDraft::default());
    let b = store.create(LeadDraft::default());
    let c = store.create(LeadDraft::default());

    store.reclassify(&b.id, LeadStatus::Negotiation);
    store.delete(&a.id);
    store.delete(&a.id);
    store.reclassify(&a.id, LeadStatus::Won);
    let d = store.create(LeadDraft::default());
    store.delete(&c.id);

    let ids: HashSet<&str> = store.list().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, HashSet::from([b.id.as_str(), d.id.as_str()]));
    assert_eq!(ids.len(), store.len());
    assert_eq!(store.get(&b.id).unwrap().status, LeadStatus::Negotiation);
}
