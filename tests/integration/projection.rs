//! Projection ordering scenarios

use leadboard::models::{LeadStatus, Priority, SortKey};
use leadboard::store::LeadStore;
use leadboard::view::project;

use super::helpers::{at, make_lead, two_lead_store};

#[test]
fn test_priority_projection_scenario() {
    let store = two_lead_store();
    let projection = project(store.list(), SortKey::Priority);
    assert_eq!(projection.ids(LeadStatus::New), vec!["1", "2"]);
}

#[test]
fn test_value_projection_scenario() {
    let store = two_lead_store();
    let projection = project(store.list(), SortKey::Value);
    assert_eq!(projection.ids(LeadStatus::New), vec!["2", "1"]);
}

#[test]
fn test_value_projection_sorted_and_complete_after_mutations() {
    let mut store = LeadStore::with_leads(vec![
        make_lead("a", LeadStatus::New, Priority::Low, 10, at(0)),
        make_lead("b", LeadStatus::Proposal, Priority::High, 900, at(1)),
        make_lead("c", LeadStatus::Proposal, Priority::Medium, 40, at(2)),
        make_lead("d", LeadStatus::Won, Priority::Low, 5_000, at(3)),
    ])
    .unwrap();

    store.reclassify("a", LeadStatus::Proposal);
    store.delete("d");

    let projection = project(store.list(), SortKey::Value);
    let stages: Vec<LeadStatus> = projection.columns().iter().map(|c| c.status).collect();
    assert_eq!(stages, LeadStatus::ALL.to_vec());

    for column in projection.columns() {
        let values: Vec<u64> = column.leads.iter().map(|l| l.value).collect();
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(values, sorted, "column {} out of order", column.status);
    }
    assert_eq!(projection.ids(LeadStatus::Proposal), vec!["b", "c", "a"]);
    assert!(projection.column(LeadStatus::Won).is_empty());
}

#[test]
fn test_projection_independent_of_call_history() {
    let store = two_lead_store();

    let fresh = project(store.list(), SortKey::Date);
    let _ = project(store.list(), SortKey::Value);
    let _ = project(store.list(), SortKey::Priority);
    let again = project(store.list(), SortKey::Date);

    assert_eq!(fresh, again);
    assert_eq!(fresh.ids(LeadStatus::New), vec!["2", "1"]);
}
