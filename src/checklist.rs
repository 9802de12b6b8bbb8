// Plain string task list

use std::fmt;
use tracing::debug;

/// Ordered list of task descriptions with index-based access
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    tasks: Vec<String>,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: impl Into<String>) {
        let task = task.into();
        debug!(task = %task, "Checklist entry added");
        self.tasks.push(task);
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Snapshot of all entries
    pub fn tasks(&self) -> Vec<String> {
        self.tasks.clone()
    }

    /// Remove the entry at `index`; false if out of range
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.tasks.len() {
            let task = self.tasks.remove(index);
            debug!(index, task = %task, "Checklist entry removed");
            true
        } else {
            debug!(index, count = self.tasks.len(), "Checklist index out of range");
            false
        }
    }

    pub fn sort(&mut self) {
        self.tasks.sort();
        debug!(count = self.tasks.len(), "Checklist sorted");
    }

    /// Indices of entries containing `term`, ignoring case
    pub fn find(&self, term: &str) -> Vec<usize> {
        let term = term.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.to_lowercase().contains(&term))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn clear(&mut self) {
        let removed = self.tasks.len();
        self.tasks.clear();
        debug!(removed, "Checklist cleared");
    }
}

impl fmt::Display for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tasks ({}):", self.tasks.len())?;
        for (i, task) in self.tasks.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, task)?;
        }
        Ok(())
    }
}
