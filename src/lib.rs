// taskproc - In-memory priority task processing

pub mod checklist;
pub mod config;
pub mod filter;
pub mod handler;
pub mod score;
pub mod store;
pub mod summary;
pub mod task;
pub mod utils;

// Re-export main types for convenience
pub use checklist::Checklist;
pub use config::Config;
pub use filter::Filter;
pub use handler::{AlwaysSucceed, Handler};
pub use store::{ProcessResult, TaskStore};
pub use summary::Summary;
pub use task::{Priority, Status, Task, now_ms};
