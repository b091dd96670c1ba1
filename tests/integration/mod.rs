//! Integration tests for the lead pipeline
//!
//! These tests drive the public API the way the board does: gestures mutate
//! the store, and every check reads a freshly computed projection.

pub mod drag_transfer;
pub mod helpers;
pub mod lead_lifecycle;
pub mod projection;
