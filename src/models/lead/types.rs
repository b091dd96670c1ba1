use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sales prospect tracked through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    /// Deal value in whole currency units
    pub value: u64,
    pub status: LeadStatus,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Pipeline stage of a lead.
///
/// Variants are declared in board order, so `Ord` sorts columns left to right.
/// Reclassification is free: every stage can be reached from every other
/// stage, there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

/// How urgently a lead should be worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Field values supplied by whoever creates a lead.
///
/// `Default` yields the values of the board's "New Lead" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub company: String,
    pub email: String,
    pub value: u64,
    pub status: LeadStatus,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub avatar: Option<String>,
}

impl Default for LeadDraft {
    fn default() -> Self {
        Self {
            name: "New Prospect".to_string(),
            company: "Unknown Co.".to_string(),
            email: String::new(),
            value: 5000,
            status: LeadStatus::New,
            priority: Priority::Medium,
            tags: vec!["New".to_string()],
            avatar: None,
        }
    }
}
