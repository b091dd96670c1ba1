//! Create/delete/reclassify sequences against the store

use std::collections::HashSet;

use leadboard::models::{LeadDraft, LeadStatus};
use leadboard::store::LeadStore;

use super::helpers::two_lead_store;

#[test]
fn test_survivors_after_operation_sequence() {
    let mut store = LeadStore::new();
    let mut expected: Vec<String> = Vec::new();

    for round in 0..20 {
        let lead = store.create(LeadDraft::default());
        expected.push(lead.id.clone());

        if round % 3 == 0 {
            let victim = expected.remove(0);
            assert!(store.delete(&victim));
            assert!(!store.delete(&victim));
        }
        if let Some(last) = expected.last() {
            store.reclassify(last, LeadStatus::ALL[round % LeadStatus::ALL.len()]);
        }
    }

    let actual: HashSet<&str> = store.list().iter().map(|l| l.id.as_str()).collect();
    let wanted: HashSet<&str> = expected.iter().map(String::as_str).collect();
    assert_eq!(actual, wanted);
    assert_eq!(store.len(), expected.len());
}

#[test]
fn test_reclassify_twice_same_stage_is_idempotent() {
    let mut store = two_lead_store();
    store.reclassify("1", LeadStatus::Proposal);
    let once = store.get("1").unwrap().clone();
    store.reclassify("1", LeadStatus::Proposal);
    assert_eq!(store.get("1").unwrap(), &once);
}

#[test]
fn test_double_delete_matches_single_delete() {
    let mut once = two_lead_store();
    let mut twice = two_lead_store();

    once.delete("1");
    twice.delete("1");
    twice.delete("1");

    assert_eq!(once.list(), twice.list());
}

#[test]
fn test_delete_unknown_id_leaves_collection_unchanged() {
    let mut store = two_lead_store();
    let before = serde_json::to_string(store.list()).unwrap();

    store.delete("99");

    let after = serde_json::to_string(store.list()).unwrap();
    assert_eq!(before, after);
}
