//! Error types for the lead pipeline library.
//!
//! The store and projector cannot fail on well-typed input; these errors only
//! arise when turning free text into model values or when seeding records.

use thiserror::Error;

/// Errors produced when parsing user-facing names into model values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown stage: '{0}'. Use: New, Contacted, Proposal, Negotiation, Won, Lost")]
    UnknownStage(String),

    #[error("Unknown priority: '{0}'. Use: low, medium, high")]
    UnknownPriority(String),

    #[error("Unknown sort key: '{0}'. Use: date, priority, value")]
    UnknownSortKey(String),

    #[error("Unknown section: '{0}'. Use: dashboard, pipeline, billing, calendar, lists, settings")]
    UnknownSection(String),
}

/// Errors produced by the lead store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A lead with this id has already been issued by the store
    #[error("Duplicate lead id: {0}")]
    DuplicateId(String),
}
