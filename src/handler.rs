// Pluggable outcome for processing a single task

use crate::task::Task;

/// Decides whether processing a task succeeded.
///
/// Called by [`crate::TaskStore::process`] while the task is in progress.
/// Returning `false` moves the task to failed.
pub trait Handler {
    fn handle(&mut self, task: &Task) -> bool;
}

/// Default handler: every task succeeds
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSucceed;

impl Handler for AlwaysSucceed {
    fn handle(&mut self, _task: &Task) -> bool {
        true
    }
}

impl<F> Handler for F
where
    F: FnMut(&Task) -> bool,
{
    fn handle(&mut self, task: &Task) -> bool {
        self(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    #[test]
    fn test_always_succeed() {
        let task = Task::new(1, "anything", "", Priority::Low);
        assert!(AlwaysSucceed.handle(&task));
    }

    #[test]
    fn test_closure_handler() {
        let mut seen = Vec::new();
        let mut handler = |task: &Task| {
            seen.push(task.id);
            task.priority != Priority::Low
        };

        assert!(handler.handle(&Task::new(1, "a", "", Priority::High)));
        assert!(!handler.handle(&Task::new(2, "b", "", Priority::Low)));
        assert_eq!(seen, vec![1, 2]);
    }
}
