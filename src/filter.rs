// Query filtering for tasks

use crate::task::{Priority, Status, Task};

/// Filter for querying tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Tasks with exactly this status
    Status(Status),
    /// Tasks in this priority band
    Priority(Priority),
    /// Case-insensitive substring of the title
    TitleContains(String),
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::Status(status) => task.status == *status,
            Filter::Priority(priority) => task.priority == *priority,
            Filter::TitleContains(term) => task.title.to_lowercase().contains(&term.to_lowercase()),
        }
    }

    /// True when the task passes every filter (an empty slice matches all)
    pub fn matches_all(filters: &[Filter], task: &Task) -> bool {
        filters.iter().all(|f| f.matches(task))
    }

    /// Human-readable form of a filter set, for logging
    pub fn describe_all(filters: &[Filter]) -> String {
        if filters.is_empty() {
            return "all".to_string();
        }
        filters.iter().map(ToString::to_string).collect::<Vec<_>>().join(" and ")
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::Status(s) => write!(f, "status is {}", s),
            Filter::Priority(p) => write!(f, "priority is {}", p),
            Filter::TitleContains(t) => write!(f, "title contains {:?}", t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, priority: Priority) -> Task {
        Task::new(1, title, "", priority)
    }

    #[test]
    fn test_filter_status() {
        let t = task("Deploy", Priority::High);
        assert!(Filter::Status(Status::Pending).matches(&t));
        assert!(!Filter::Status(Status::Completed).matches(&t));
    }

    #[test]
    fn test_filter_priority() {
        let t = task("Deploy", Priority::High);
        assert!(Filter::Priority(Priority::High).matches(&t));
        assert!(!Filter::Priority(Priority::Low).matches(&t));
    }

    #[test]
    fn test_filter_title_is_case_insensitive() {
        let t = task("Fix memory leak in parser", Priority::Critical);
        assert!(Filter::TitleContains("MEMORY".to_string()).matches(&t));
        assert!(!Filter::TitleContains("database".to_string()).matches(&t));
    }

    #[test]
    fn test_matches_all() {
        let t = task("Deploy", Priority::High);
        assert!(Filter::matches_all(&[], &t));
        assert!(Filter::matches_all(
            &[Filter::Priority(Priority::High), Filter::Status(Status::Pending)],
            &t
        ));
        assert!(!Filter::matches_all(
            &[Filter::Priority(Priority::High), Filter::Status(Status::Failed)],
            &t
        ));
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(Filter::Status(Status::Pending).to_string(), "status is PENDING");
        assert_eq!(Filter::Priority(Priority::Low).to_string(), "priority is LOW");
        assert_eq!(
            Filter::TitleContains("leak".to_string()).to_string(),
            "title contains \"leak\""
        );
    }

    #[test]
    fn test_describe_all() {
        assert_eq!(Filter::describe_all(&[]), "all");
        assert_eq!(
            Filter::describe_all(&[Filter::Priority(Priority::High), Filter::Status(Status::Pending)]),
            "priority is HIGH and status is PENDING"
        );
    }
}
