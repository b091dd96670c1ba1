//! Demo leads loaded when `board.seed_demo` is enabled.

use chrono::{DateTime, Utc};

use crate::models::{Lead, LeadStatus, Priority};

type DemoRow = (
    &'static str,
    &'static str,
    &'static str,
    u64,
    LeadStatus,
    Priority,
    &'static str,
    &'static [&'static str],
);

const DEMO_ROWS: [DemoRow; 4] = [
    ("1", "Acme Corp", "Acme Inc.", 15_000, LeadStatus::New, Priority::High, "contact@acme.com", &["Enterprise"]),
    ("2", "Stark Ind", "Stark Industries", 50_000, LeadStatus::Negotiation, Priority::High, "tony@stark.com", &["VIP", "Tech"]),
    ("3", "Wayne Ent", "Wayne Enterprises", 35_000, LeadStatus::Proposal, Priority::Medium, "bruce@wayne.com", &["Finance"]),
    ("4", "Cyberdyne", "Cyberdyne Systems", 12_000, LeadStatus::Contacted, Priority::Low, "sales@cyberdyne.com", &["Gov"]),
];

/// The four sample accounts, all stamped with `now`.
pub fn demo_leads(now: DateTime<Utc>) -> Vec<Lead> {
    DEMO_ROWS
        .iter()
        .map(|&(id, name, company, value, status, priority, email, tags)| Lead {
            id: id.to_string(),
            name: name.to_string(),
            company: company.to_string(),
            email: email.to_string(),
            value,
            status,
            priority,
            created_at: now,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            avatar: None,
        })
        .collect()
}
