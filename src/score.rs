// Keyword-based priority scoring

use crate::task::Priority;
use crate::utils::math::factorial;

const KEYWORD_WEIGHTS: [(&str, u64); 3] = [("urgent", 30), ("important", 20), ("high", 15)];

/// Heuristic urgency score for a task.
///
/// The title length contributes `factorial(len % 10) % 50`; each keyword
/// found in the lowercased title and description adds its weight once.
pub fn priority_score(title: &str, description: &str) -> u64 {
    let length = (title.chars().count() % 10) as u32;
    let mut score = factorial(length).unwrap_or(0) % 50;

    let combined = format!("{} {}", title, description).to_lowercase();
    for (keyword, weight) in KEYWORD_WEIGHTS {
        if combined.contains(keyword) {
            score += weight;
        }
    }
    score
}

/// Raise to high above 50, drop to low below 20, otherwise keep the request
pub fn adjust_priority(requested: Priority, score: u64) -> Priority {
    if score > 50 && requested != Priority::High {
        Priority::High
    } else if score < 20 && requested != Priority::Low {
        Priority::Low
    } else {
        requested
    }
}
