//! Sort keys offered by the board toolbar.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Ordering applied inside every board column. All keys sort descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recently created first
    #[default]
    Date,
    /// High before Medium before Low
    Priority,
    /// Largest deal first
    Value,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Date, SortKey::Priority, SortKey::Value];

    /// Label shown in the toolbar
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "Date Created",
            SortKey::Priority => "Priority",
            SortKey::Value => "Deal Value",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => write!(f, "date"),
            SortKey::Priority => write!(f, "priority"),
            SortKey::Value => write!(f, "value"),
        }
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "priority" => Ok(SortKey::Priority),
            "value" => Ok(SortKey::Value),
            _ => Err(ModelError::UnknownSortKey(s.to_string())),
        }
    }
}
