// Task record and its priority/status labels

use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority band, ordered from least to most urgent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Bands in batch processing order (most urgent first)
    pub const PROCESSING_ORDER: [Priority; 4] = [Priority::Critical, Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(eyre!(
                "Invalid priority: {} (expected low, medium, high or critical)",
                s
            )),
        }
    }
}

/// Lifecycle label of a task. Callers may set any status at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::InProgress => "IN_PROGRESS",
            Status::Completed => "COMPLETED",
            Status::Failed => "FAILED",
        }
    }

    /// Completed and failed tasks carry a completion timestamp
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Completed | Status::Failed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(Status::Pending),
            "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            "failed" => Ok(Status::Failed),
            _ => Err(eyre!(
                "Invalid status: {} (expected pending, in_progress, completed or failed)",
                s
            )),
        }
    }
}

/// One unit of trackable work.
///
/// Tasks are only created and mutated through [`crate::TaskStore`]; values
/// handed out by the store are snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    /// Milliseconds since epoch
    pub created_at: i64,
    /// Set iff `status` is completed or failed
    pub completed_at: Option<i64>,
}

impl Task {
    pub(crate) fn new(id: u64, title: &str, description: &str, priority: Priority) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            priority,
            status: Status::Pending,
            created_at: now_ms(),
            completed_at: None,
        }
    }

    /// Apply a status and keep `completed_at` in step with it
    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
        self.completed_at = if status.is_terminal() { Some(now_ms()) } else { None };
    }

    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }
}

// Helper function for timestamps
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms() {
        let ts = now_ms();
        assert!(ts > 0);
        // Should be reasonable timestamp (after year 2020)
        assert!(ts > 1_600_000_000_000);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert!(Priority::High < Priority::Critical);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_processing_order_is_most_urgent_first() {
        let order = Priority::PROCESSING_ORDER;
        assert!(order.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("critical".parse::<Priority>().unwrap(), Priority::Critical);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("IN_PROGRESS".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("failed".parse::<Status>().unwrap(), Status::Failed);
        assert!("done".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let json = serde_json::to_string(&Priority::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }

    #[test]
    fn test_display_is_upper_case() {
        assert_eq!(Status::InProgress.to_string(), "IN_PROGRESS");
        assert_eq!(Priority::Low.to_string(), "LOW");
    }

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new(1, "Write docs", "", Priority::Low);
        assert!(task.is_pending());
        assert!(task.completed_at.is_none());
        assert!(task.created_at > 0);
    }

    #[test]
    fn test_set_status_tracks_completed_at() {
        let mut task = Task::new(1, "Write docs", "", Priority::Low);

        task.set_status(Status::InProgress);
        assert!(task.completed_at.is_none());

        task.set_status(Status::Failed);
        assert!(task.completed_at.is_some());

        task.set_status(Status::Pending);
        assert!(task.completed_at.is_none());
    }
}
