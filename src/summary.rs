// Aggregate report over a store

use crate::task::{Priority, Status};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Point-in-time totals and per-category counts.
///
/// Only categories with at least one task appear in the maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub processed: usize,
    pub failed: usize,
    pub pending: usize,
    pub by_priority: BTreeMap<Priority, usize>,
    pub by_status: BTreeMap<Status, usize>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Task Processor Summary ===")?;
        writeln!(f, "Total Tasks: {}", self.total)?;
        writeln!(f, "Processed: {}", self.processed)?;
        writeln!(f, "Failed: {}", self.failed)?;
        writeln!(f, "Pending: {}", self.pending)?;
        writeln!(f)?;

        writeln!(f, "By Priority:")?;
        for (priority, count) in &self.by_priority {
            writeln!(f, "  {}: {}", priority, count)?;
        }

        writeln!(f)?;
        writeln!(f, "By Status:")?;
        for (status, count) in &self.by_status {
            writeln!(f, "  {}: {}", status, count)?;
        }
        write!(f, "==============================")
    }
}
