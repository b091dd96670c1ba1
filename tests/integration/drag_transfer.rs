//! Drag-and-drop scenarios across session, store and projection

use leadboard::drag::DragSession;
use leadboard::models::{Lead, LeadStatus, SortKey};
use leadboard::view::project;

use super::helpers::two_lead_store;

#[test]
fn test_drop_reclassifies_only_dragged_lead() {
    let mut store = two_lead_store();
    let before_1 = store.get("1").unwrap().clone();
    let before_2 = store.get("2").unwrap().clone();
    let mut session = DragSession::new();

    session.begin("2");
    session.complete_onto(&mut store, LeadStatus::Won);

    let after_2 = store.get("2").unwrap();
    assert_eq!(after_2.status, LeadStatus::Won);
    assert_eq!(
        Lead {
            status: LeadStatus::New,
            ..after_2.clone()
        },
        before_2
    );
    assert_eq!(store.get("1").unwrap(), &before_1);

    let projection = project(store.list(), SortKey::Date);
    assert_eq!(projection.ids(LeadStatus::Won), vec!["2"]);
    assert_eq!(projection.ids(LeadStatus::New), vec!["1"]);
}

#[test]
fn test_latest_begin_wins() {
    let mut store = two_lead_store();
    let mut session = DragSession::new();

    session.begin("1");
    session.begin("2");
    assert_eq!(
        session.complete_onto(&mut store, LeadStatus::Negotiation).as_deref(),
        Some("2")
    );

    assert_eq!(store.get("1").unwrap().status, LeadStatus::New);
    assert_eq!(store.get("2").unwrap().status, LeadStatus::Negotiation);
}

#[test]
fn test_session_never_outlives_gesture() {
    let mut store = two_lead_store();
    let mut session = DragSession::new();

    session.begin("1");
    session.complete_onto(&mut store, LeadStatus::Contacted);
    assert!(!session.is_active());

    session.begin("2");
    session.cancel();
    assert!(!session.is_active());

    // A stray drop after cancel must not move anything
    assert_eq!(session.complete_onto(&mut store, LeadStatus::Lost), None);
    assert_eq!(store.get("2").unwrap().status, LeadStatus::New);
}
