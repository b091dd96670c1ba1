//! The pipeline board: lead store, drag session, sort key and active tab.
//!
//! Each method is one user gesture applied to completion. The projection is
//! never stored; `projection()` derives it from the store on every call.

mod render;


use chrono::Utc;

use crate::config::BoardConfig;
use crate::drag::DragSession;
use crate::models::{Lead, LeadDraft, LeadStatus, Section, SortKey};
use crate::seed::demo_leads;
use crate::store::LeadStore;
use crate::view::{project, Projection};

pub use render::{format_value, render_board, render_lead_table, render_placeholder};

#[derive(Debug, Clone)]
pub struct Board {
    store: LeadStore,
    drag: DragSession,
    sort_key: SortKey,
    section: Section,
}

impl Board {
    /// Opens on the pipeline tab, the only tab the board can render.
    pub fn new(store: LeadStore, sort_key: SortKey) -> Self {
        Self {
            store,
            drag: DragSession::new(),
            sort_key,
            section: Section::Pipeline,
        }
    }

    /// Board per configuration, seeded with the demo leads when enabled.
    pub fn from_config(config: &BoardConfig) -> Self {
        let mut store = LeadStore::new();
        if config.seed_demo {
            for lead in demo_leads(Utc::now()) {
                if let Err(e) = store.insert(lead) {
                    tracing::warn!(error = %e, "skipping demo lead");
                }
            }
        }
        Self::new(store, config.default_sort)
    }

    pub fn store(&self) -> &LeadStore {
        &self.store
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn projection(&self) -> Projection<'_> {
        project(self.store.list(), self.sort_key)
    }

    pub fn create(&mut self, draft: LeadDraft) -> Lead {
        self.store.create(draft)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.store.delete(id)
    }

    /// Pick up a card. Only leads on the board can be dragged.
    pub fn begin_drag(&mut self, id: &str) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.drag.begin(id);
        true
    }

    /// Release the held card over `target`.
    pub fn drop_onto(&mut self, target: LeadStatus) -> Option<String> {
        self.drag.complete_onto(&mut self.store, target)
    }

    pub fn cancel_drag(&mut self) -> Option<String> {
        self.drag.cancel()
    }

    /// Drag `id` and drop it on `target` in one gesture.
    pub fn move_lead(&mut self, id: &str, target: LeadStatus) -> bool {
        self.begin_drag(id) && self.drop_onto(target).is_some()
    }

    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    pub fn switch_to(&mut self, section: Section) {
        self.section = section;
    }
}
