//! Authoritative in-memory collection of leads.
//!
//! `LeadStore` is the only type that mutates leads. Operations on an id the
//! store does not hold are no-ops: the collection is the source of truth, so
//! deleting or moving an absent lead is already satisfied.

use chrono::Utc;
use std::collections::HashSet;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Lead, LeadDraft, LeadStatus};

#[cfg(test)]
mod tests;

/// Length of generated lead ids
const ID_LENGTH: usize = 9;

#[derive(Debug, Clone, Default)]
pub struct LeadStore {
    leads: Vec<Lead>,
    /// Every id ever handed out, so a deleted id is never reissued
    issued: HashSet<String>,
    revision: u64,
}

impl LeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with leads that already carry ids.
    pub fn with_leads(leads: impl IntoIterator<Item = Lead>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for lead in leads {
            store.insert(lead)?;
        }
        Ok(store)
    }

    /// Create a lead from caller-supplied defaults, stamping a fresh id and
    /// the current time.
    pub fn create(&mut self, draft: LeadDraft) -> Lead {
        let id = self.next_id();
        let lead = Lead::from_draft(id, draft, Utc::now());
        tracing::debug!(id = %lead.id, status = %lead.status, "created lead");
        self.issued.insert(lead.id.clone());
        self.leads.push(lead.clone());
        self.bump();
        lead
    }

    /// Insert a lead with a preset id (seed data, imports).
    pub fn insert(&mut self, lead: Lead) -> Result<(), StoreError> {
        if self.issued.contains(&lead.id) {
            return Err(StoreError::DuplicateId(lead.id));
        }
        self.issued.insert(lead.id.clone());
        self.leads.push(lead);
        self.bump();
        Ok(())
    }

    /// Remove the lead with `id`. Returns false when no such lead exists.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.leads.len();
        self.leads.retain(|lead| lead.id != id);
        let removed = self.leads.len() != before;
        if removed {
            tracing::debug!(id, "deleted lead");
            self.bump();
        }
        removed
    }

    /// Move the lead with `id` to `new_status`, leaving every other field
    /// untouched. Returns false when no such lead exists.
    pub fn reclassify(&mut self, id: &str, new_status: LeadStatus) -> bool {
        let Some(lead) = self.leads.iter_mut().find(|lead| lead.id == id) else {
            return false;
        };
        if lead.status != new_status {
            tracing::debug!(id, from = %lead.status, to = %new_status, "reclassified lead");
            lead.status = new_status;
            self.bump();
        }
        true
    }

    /// Current snapshot. Insertion order carries no meaning.
    pub fn list(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Advances on every mutation that changes the collection.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    fn next_id(&self) -> String {
        loop {
            let candidate: String = Uuid::new_v4()
                .simple()
                .to_string()
                .chars()
                .take(ID_LENGTH)
                .collect();
            if !self.issued.contains(&candidate) {
                return candidate;
            }
        }
    }
}
