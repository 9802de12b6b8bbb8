//! Example 01: Basic Store Operations
//!
//! This example adds tasks in several priority bands, processes them, queries
//! the results and clears finished work.
//!
//! Run with: cargo run --example 01_basic_store

use eyre::{Result, eyre};
use taskproc::{Filter, Priority, ProcessResult, Status, Task, TaskStore};

fn main() -> Result<()> {
    println!("taskproc Basic Store Example");
    println!("============================\n");

    // Tasks titled "flaky ..." fail; everything else succeeds
    let mut store = TaskStore::with_handler(|task: &Task| !task.title.starts_with("flaky"));

    // ADD: one task per band, out of priority order
    println!("1. ADD - Creating tasks...");
    let docs = store.add("Update documentation", "Add API examples", Priority::Low);
    let leak = store.add("Fix memory leak in parser", "Valgrind reports leak", Priority::Critical);
    let auth = store.add("Implement user authentication", "Add OAuth2 support", Priority::High);
    let flaky = store.add("flaky integration test", "", Priority::High);
    let queries = store.add_default("Optimize database queries");
    println!("   Created ids: {:?}\n", [docs, leak, auth, flaky, queries]);

    // PROCESS: a single task, then a repeat which is a no-op
    println!("2. PROCESS - Running one task twice...");
    println!("   First run:  {:?}", store.process(docs));
    let second = store.process(docs);
    println!("   Second run: {:?}\n", second);
    if second != ProcessResult::Skipped(Status::Completed) {
        return Err(eyre!("expected the second run to be skipped, got {:?}", second));
    }

    // PROCESS ALL: critical first, then high, medium, low
    println!("3. PROCESS ALL - Draining remaining tasks by priority...");
    let order = store.process_all();
    println!("   Processed in order: {:?}\n", order);

    // QUERY: snapshots by status and by a combined filter
    println!("4. QUERY - Inspecting results...");
    for task in store.by_status(Status::Failed) {
        println!("   FAILED: #{} {}", task.id, task.title);
    }
    let high_done = store.list(&[Filter::Priority(Priority::High), Filter::Status(Status::Completed)]);
    println!("   Completed HIGH tasks: {}\n", high_done.len());

    // CLEAR: completed tasks go, failed ones stay, ids keep counting
    println!("5. CLEAR - Removing completed tasks...");
    let removed = store.clear_completed();
    let next = store.add_default("Follow up on flaky test");
    println!("   Removed {} tasks; next id is {}\n", removed, next);

    println!("{}", store.summary());
    println!("\nExample complete!");
    Ok(())
}
