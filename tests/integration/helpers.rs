//! Shared fixtures for pipeline integration tests

use chrono::{DateTime, Duration, TimeZone, Utc};

use leadboard::models::{Lead, LeadStatus, Priority};
use leadboard::store::LeadStore;

/// Fixed instant plus `minutes`
pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap() + Duration::minutes(minutes)
}

pub fn make_lead(id: &str, status: LeadStatus, priority: Priority, value: u64, created_at: DateTime<Utc>) -> Lead {
    Lead {
        id: id.to_string(),
        name: format!("Contact {id}"),
        company: format!("Company {id}"),
        email: format!("lead{id}@example.com"),
        value,
        status,
        priority,
        created_at,
        tags: vec!["Inbound".to_string()],
        avatar: None,
    }
}

/// Lead 1: New/High/100 at T1; lead 2: New/Low/500 at T2 > T1
pub fn two_lead_store() -> LeadStore {
    LeadStore::with_leads(vec![
        make_lead("1", LeadStatus::New, Priority::High, 100, at(0)),
        make_lead("2", LeadStatus::New, Priority::Low, 500, at(30)),
    ])
    .expect("Fixture ids are unique")
}
