//! Single-slot drag/relocation session.
//!
//! Holds at most one lead id for the duration of one gesture. Starting a new
//! drag abandons the previous one; completing or cancelling always leaves the
//! session empty.

use crate::models::LeadStatus;
use crate::store::LeadStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    held: Option<String>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start relocating `id`, replacing whatever was held before.
    pub fn begin(&mut self, id: impl Into<String>) {
        let id = id.into();
        if let Some(abandoned) = self.held.replace(id) {
            tracing::debug!(abandoned = %abandoned, "drag replaced before drop");
        }
    }

    /// Drop the held lead onto `target`.
    ///
    /// Returns the id that was dropped, or `None` when nothing was held. The
    /// session is empty afterwards either way.
    pub fn complete_onto(&mut self, store: &mut LeadStore, target: LeadStatus) -> Option<String> {
        let id = self.held.take()?;
        if !store.reclassify(&id, target) {
            tracing::debug!(id = %id, "dropped lead no longer exists");
        }
        Some(id)
    }

    /// Abort the gesture without touching the store.
    pub fn cancel(&mut self) -> Option<String> {
        self.held.take()
    }

    pub fn held(&self) -> Option<&str> {
        self.held.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.held.is_some()
    }
}
