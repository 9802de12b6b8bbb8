use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use eyre::Result;
use std::path::PathBuf;
use taskproc::score::{adjust_priority, priority_score};
use taskproc::utils::{arrays, math, text};
use taskproc::{Checklist, Config, Priority, Status, Summary, Task, TaskStore};
use tracing::debug;

#[derive(Parser)]
#[command(name = "taskproc")]
#[command(about = "taskproc CLI - In-memory priority task processing walkthroughs")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/taskproc/taskproc.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through adding, processing and clearing prioritized tasks
    Demo {
        /// Print summaries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk through the plain string checklist
    Checklist,

    /// Walk through the math, string and array helpers
    Utils,

    /// Score a task title and show the adjusted priority
    Score {
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        #[arg(short, long, default_value = "medium")]
        priority: Priority,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Setup tracing
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level()?)
        .with_writer(std::io::stderr)
        .init();

    match &config.source {
        Some(path) => debug!(path = ?path, ?config, "Loaded config"),
        None => debug!(?config, "Config file not found, using defaults"),
    }

    colored::control::set_override(config.color);

    match cli.command {
        Commands::Demo { json } => run_demo(json)?,
        Commands::Checklist => run_checklist(),
        Commands::Utils => run_utils(),
        Commands::Score {
            title,
            description,
            priority,
        } => {
            let score = priority_score(&title, &description);
            let adjusted = adjust_priority(priority, score);
            println!("Score: {}", score);
            println!("Priority: {} -> {}", paint_priority(priority), paint_priority(adjusted));
        }
    }

    Ok(())
}

fn run_demo(json: bool) -> Result<()> {
    separator("Task store walkthrough");

    let mut store = TaskStore::new();
    store.add("Implement user authentication", "Add OAuth2 support", Priority::High);
    store.add("Fix memory leak in parser", "Valgrind reports leak", Priority::Critical);
    store.add("Update documentation", "Add API examples", Priority::Low);
    store.add("Optimize database queries", "Reduce query time by 50%", Priority::Medium);
    store.add("Add unit tests", "Cover edge cases", Priority::High);
    store.add("Deploy to production", "Schedule maintenance window", Priority::Critical);

    print_summary(&store.summary(), json)?;

    println!("\n--- Processing {} priority tasks ---", paint_priority(Priority::Critical));
    let done = store.process_by_priority(Priority::Critical);
    println!("Processed: {:?}", done);

    println!("\n--- Processing specific task #1 ---");
    println!("Result: {:?}", store.process(1));

    println!("\n--- Updating task #3 priority ---");
    store.set_priority(3, Priority::High);

    println!("\n--- Processing all remaining tasks ---");
    let done = store.process_all();
    println!("Processed: {:?}", done);

    print_summary(&store.summary(), json)?;

    let completed = store.by_status(Status::Completed);
    println!("\nCompleted tasks ({}):", completed.len());
    for task in &completed {
        print_task(task);
    }

    println!("\n--- Clearing completed tasks ---");
    let removed = store.clear_completed();
    println!("Cleared {} completed tasks", removed);

    print_summary(&store.summary(), json)?;
    Ok(())
}

fn run_checklist() {
    separator("Checklist walkthrough");

    let mut list = Checklist::new();
    list.add("Write release notes");
    list.add("Bump version");
    list.add("Tag release");
    list.add("Announce release");
    println!("{}", list);

    println!("\nEntries matching 'release': {:?}", list.find("release"));

    list.sort();
    println!("\nSorted:\n{}", list);

    list.remove(0);
    println!("\nAfter removing the first entry:\n{}", list);

    list.clear();
    println!("\nAfter clear: {} entries", list.count());
}

fn run_utils() {
    separator("Utility walkthrough");

    println!("\n--- Mathematical Functions ---");
    println!("factorial(7) = {:?}", math::factorial(7));
    println!("factorial(15) = {:?}", math::factorial(15));
    println!("fibonacci(12) = {:?}", math::fibonacci(12));
    println!("fibonacci(25) = {:?}", math::fibonacci(25));
    println!("is_prime(29) = {}", math::is_prime(29));
    println!("is_prime(30) = {}", math::is_prime(30));
    println!("gcd(56, 98) = {}", math::gcd(56, 98));
    println!("lcm(15, 25) = {:?}", math::lcm(15, 25));
    println!("power(2.5, 3) = {:.2}", math::power(2.5, 3));

    println!("\n--- String Functions ---");
    let sample = "Hello Rust World";
    println!("Original: {}", sample);
    println!("Length: {}", sample.chars().count());
    println!("Vowels: {}", text::count_vowels(sample));
    println!("Words: {}", text::count_words(sample));
    println!("Concatenated: {}", text::concat("Rust ", "Native Code"));
    println!("Uppercase: {}", text::to_upper(sample));
    println!("Lowercase: {}", text::to_lower(sample));
    println!("Reversed: {}", text::reverse(sample));

    println!("\n--- Array Functions ---");
    let mut values = [15, 3, 9, 21, 7, 12, 6, 18, 4];
    println!("Array: {:?}", values);
    println!("Sum: {:?}", arrays::sum(&values));
    println!("Average: {:.2}", arrays::average(&values));
    println!("Max: {:?}", arrays::max(&values));
    println!("Min: {:?}", arrays::min(&values));

    arrays::bubble_sort(&mut values);
    println!("Sorted: {:?}", values);
    println!("Index of 12: {:?}", arrays::binary_search(&values, 12));

    arrays::reverse(&mut values);
    println!("Reversed: {:?}", values);
}

fn print_summary(summary: &Summary, json: bool) -> Result<()> {
    println!();
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

fn print_task(task: &Task) {
    let finished = task
        .completed_at
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    println!(
        "  #{}: {} [{}] {} (finished {})",
        task.id,
        task.title,
        paint_priority(task.priority),
        paint_status(task.status),
        finished
    );
}

fn paint_priority(priority: Priority) -> ColoredString {
    match priority {
        Priority::Low => priority.as_str().dimmed(),
        Priority::Medium => priority.as_str().normal(),
        Priority::High => priority.as_str().yellow(),
        Priority::Critical => priority.as_str().red().bold(),
    }
}

fn paint_status(status: Status) -> ColoredString {
    match status {
        Status::Pending => status.as_str().normal(),
        Status::InProgress => status.as_str().cyan(),
        Status::Completed => status.as_str().green(),
        Status::Failed => status.as_str().red(),
    }
}

fn separator(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title.bold());
    println!("{}", "=".repeat(60));
}
