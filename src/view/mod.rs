//! Per-stage board projection.
//!
//! `project` is a pure function of the lead snapshot and the sort key. The
//! board calls it after every mutation instead of patching a cached view.

use std::cmp::Ordering;

use crate::models::{Lead, LeadStatus, SortKey};


/// One board column: a stage and its leads in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    pub status: LeadStatus,
    pub leads: Vec<&'a Lead>,
}

impl Column<'_> {
    pub fn count(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Sum of deal values in this column
    pub fn total_value(&self) -> u64 {
        self.leads.iter().map(|lead| lead.value).sum()
    }
}

/// Sorted leads for every stage, columns in board order.
///
/// Every stage has a column, including stages with no leads.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    pub sort_key: SortKey,
    columns: Vec<Column<'a>>,
}

impl<'a> Projection<'a> {
    pub fn columns(&self) -> &[Column<'a>] {
        &self.columns
    }

    pub fn column(&self, status: LeadStatus) -> &Column<'a> {
        // Columns are built from LeadStatus::ALL, in declaration order.
        &self.columns[status as usize]
    }

    /// Lead ids of one column, in display order
    pub fn ids(&self, status: LeadStatus) -> Vec<&'a str> {
        self.column(status)
            .leads
            .iter()
            .map(|lead| lead.id.as_str())
            .collect()
    }

    /// All leads, column by column
    pub fn flatten(&self) -> Vec<&'a Lead> {
        self.columns
            .iter()
            .flat_map(|column| column.leads.iter().copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Column::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `leads` by stage and sort each column by `sort_key`.
pub fn project(leads: &[Lead], sort_key: SortKey) -> Projection<'_> {
    let columns = LeadStatus::ALL
        .into_iter()
        .map(|status| {
            let mut bucket: Vec<&Lead> = leads.iter().filter(|lead| lead.status == status).collect();
            // sort_by is stable: ties keep snapshot order
            bucket.sort_by(|a, b| compare(a, b, sort_key));
            Column {
                status,
                leads: bucket,
            }
        })
        .collect();

    Projection { sort_key, columns }
}

/// Descending comparison for the given key.
fn compare(a: &Lead, b: &Lead, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::Date => b.created_at.cmp(&a.created_at),
        SortKey::Priority => b.priority.rank().cmp(&a.priority.rank()),
        SortKey::Value => b.value.cmp(&a.value),
    }
}
