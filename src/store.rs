// In-memory task store with priority-ordered processing

use crate::filter::Filter;
use crate::handler::{AlwaysSucceed, Handler};
use crate::summary::Summary;
use crate::task::{Priority, Status, Task};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// What happened when a single task was processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// No task with that id
    NotFound,
    /// Task was not pending; carries its current status
    Skipped(Status),
    Completed,
    Failed,
}

/// Single-owner, in-memory collection of tasks.
///
/// Tasks live in one insertion-ordered `Vec`; every query hands back clones.
/// Ids start at 1 and are never reused, even after removal. Per-priority and
/// per-status counts are rebuilt from the collection after each mutation.
///
/// The store has no internal synchronization. Wrap it in a lock if it must
/// be shared between threads.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    processed: usize,
    failed: usize,
    priority_counts: BTreeMap<Priority, usize>,
    status_counts: BTreeMap<Status, usize>,
    handler: Box<dyn Handler>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("next_id", &self.next_id)
            .field("processed", &self.processed)
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}

impl TaskStore {
    /// Create an empty store whose processing always succeeds
    pub fn new() -> Self {
        Self::with_handler(AlwaysSucceed)
    }

    /// Create an empty store with a custom processing outcome
    pub fn with_handler<H: Handler + 'static>(handler: H) -> Self {
        debug!("TaskStore initialized");
        Self {
            tasks: Vec::new(),
            next_id: 1,
            processed: 0,
            failed: 0,
            priority_counts: BTreeMap::new(),
            status_counts: BTreeMap::new(),
            handler: Box::new(handler),
        }
    }

    // ========================================================================
    // Task management
    // ========================================================================

    /// Add a task and return its id. Never fails; empty titles are accepted.
    pub fn add(&mut self, title: &str, description: &str, priority: Priority) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.tasks.push(Task::new(id, title, description, priority));
        self.update_counts();

        info!(id, title, %priority, "Added task");
        id
    }

    /// Add a task with an empty description and medium priority
    pub fn add_default(&mut self, title: &str) -> u64 {
        self.add(title, "", Priority::default())
    }

    /// Remove a task. Returns false if no task has that id.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.position(id) {
            Some(index) => {
                self.tasks.remove(index);
                self.update_counts();
                info!(id, "Removed task");
                true
            }
            None => {
                warn!(id, "Task not found");
                false
            }
        }
    }

    /// Set a task's status without any transition check.
    ///
    /// Completed and failed stamp `completed_at`; other statuses clear it.
    pub fn set_status(&mut self, id: u64, status: Status) -> bool {
        let Some(task) = self.task_mut(id) else {
            return false;
        };
        task.set_status(status);
        self.update_counts();

        debug!(id, %status, "Task status updated");
        true
    }

    pub fn set_priority(&mut self, id: u64, priority: Priority) -> bool {
        let Some(task) = self.task_mut(id) else {
            return false;
        };
        task.priority = priority;
        self.update_counts();

        debug!(id, %priority, "Task priority updated");
        true
    }

    // ========================================================================
    // Processing
    // ========================================================================

    /// Process one pending task through the handler.
    ///
    /// Unknown ids and tasks that are not pending are left untouched, so
    /// calling this twice on the same id is the same as calling it once.
    pub fn process(&mut self, id: u64) -> ProcessResult {
        let Some(index) = self.position(id) else {
            warn!(id, "Cannot process task - not found");
            return ProcessResult::NotFound;
        };

        let status = self.tasks[index].status;
        if status != Status::Pending {
            debug!(id, %status, "Task already processed");
            return ProcessResult::Skipped(status);
        }

        info!(id, title = %self.tasks[index].title, "Processing task");
        self.set_status(id, Status::InProgress);

        let success = self.handler.handle(&self.tasks[index]);

        if success {
            self.set_status(id, Status::Completed);
            self.processed += 1;
            info!(id, "Task completed successfully");
            ProcessResult::Completed
        } else {
            self.set_status(id, Status::Failed);
            self.failed += 1;
            warn!(id, "Task failed");
            ProcessResult::Failed
        }
    }

    /// Process every pending task in one priority band, in insertion order.
    ///
    /// Returns the ids that were processed, in the order they ran.
    pub fn process_by_priority(&mut self, priority: Priority) -> Vec<u64> {
        let ids: Vec<u64> = self
            .tasks
            .iter()
            .filter(|t| t.priority == priority && t.is_pending())
            .map(|t| t.id)
            .collect();

        let mut processed = Vec::with_capacity(ids.len());
        for id in ids {
            if matches!(self.process(id), ProcessResult::Completed | ProcessResult::Failed) {
                processed.push(id);
            }
        }
        processed
    }

    /// Process all pending tasks, critical band first and low band last
    pub fn process_all(&mut self) -> Vec<u64> {
        info!(count = self.tasks.len(), "Processing all tasks");

        let processed: Vec<u64> = Priority::PROCESSING_ORDER
            .into_iter()
            .flat_map(|priority| self.process_by_priority(priority))
            .collect();

        info!(
            processed = self.processed,
            failed = self.failed,
            "Batch processing complete"
        );
        processed
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get(&self, id: u64) -> Option<Task> {
        self.tasks.iter().find(|t| t.id == id).cloned()
    }

    pub fn all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn by_status(&self, status: Status) -> Vec<Task> {
        self.list(&[Filter::Status(status)])
    }

    pub fn by_priority(&self, priority: Priority) -> Vec<Task> {
        self.list(&[Filter::Priority(priority)])
    }

    /// Tasks matching every filter, in insertion order
    pub fn list(&self, filters: &[Filter]) -> Vec<Task> {
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| Filter::matches_all(filters, t))
            .cloned()
            .collect();

        debug!(filters = %Filter::describe_all(filters), matched = tasks.len(), "Listed tasks");
        tasks
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn pending_count(&self) -> usize {
        self.count_by_status(Status::Pending)
    }

    /// Tasks that `process` completed successfully
    pub fn processed_count(&self) -> usize {
        self.processed
    }

    /// Tasks that `process` marked as failed
    pub fn failed_count(&self) -> usize {
        self.failed
    }

    pub fn priority_counts(&self) -> &BTreeMap<Priority, usize> {
        &self.priority_counts
    }

    pub fn status_counts(&self) -> &BTreeMap<Status, usize> {
        &self.status_counts
    }

    pub fn count_by_priority(&self, priority: Priority) -> usize {
        self.priority_counts.get(&priority).copied().unwrap_or(0)
    }

    pub fn count_by_status(&self, status: Status) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.total_count(),
            processed: self.processed,
            failed: self.failed,
            pending: self.pending_count(),
            by_priority: self.priority_counts.clone(),
            by_status: self.status_counts.clone(),
        }
    }

    // ========================================================================
    // Bulk removal
    // ========================================================================

    /// Remove completed tasks (failed ones stay). Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.status != Status::Completed);
        let removed = before - self.tasks.len();
        self.update_counts();

        info!(removed, "Cleared completed tasks");
        removed
    }

    pub fn clear_all(&mut self) {
        self.tasks.clear();
        self.update_counts();
        info!("All tasks cleared");
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn position(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn task_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    fn update_counts(&mut self) {
        self.priority_counts.clear();
        self.status_counts.clear();

        for task in &self.tasks {
            *self.priority_counts.entry(task.priority).or_insert(0) += 1;
            *self.status_counts.entry(task.status).or_insert(0) += 1;
        }
    }
}

impl Drop for TaskStore {
    fn drop(&mut self) {
        debug!(
            processed = self.processed,
            failed = self.failed,
            total = self.tasks.len(),
            "TaskStore dropped"
        );
    }
}
