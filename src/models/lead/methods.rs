use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::types::{Lead, LeadDraft, LeadStatus, Priority};
use crate::error::ModelError;

impl Lead {
    /// Build a lead from a draft. The store is the only caller that mints ids.
    pub(crate) fn from_draft(id: String, draft: LeadDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            company: draft.company,
            email: draft.email,
            value: draft.value,
            status: draft.status,
            priority: draft.priority,
            created_at,
            tags: draft.tags,
            avatar: draft.avatar,
        }
    }
}

impl LeadStatus {
    /// Every stage, in board order.
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Proposal,
        LeadStatus::Negotiation,
        LeadStatus::Won,
        LeadStatus::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Proposal => "Proposal",
            LeadStatus::Negotiation => "Negotiation",
            LeadStatus::Won => "Won",
            LeadStatus::Lost => "Lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownStage(s.to_string()))
    }
}

impl Priority {
    /// Sort rank: High=3, Medium=2, Low=1
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ModelError::UnknownPriority(s.to_string())),
        }
    }
}
