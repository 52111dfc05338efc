//! Task list commands.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use clap::Subcommand;
use ganttline_core::task::{Task, TaskStatus};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TasksAction {
    /// List tasks from the task service or a local file
    List {
        /// Task service base URL (overrides the configured one)
        #[arg(long)]
        url: Option<String>,
        /// Read tasks from a local JSON file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Emit a sample task list as JSON (useful as --file input)
    Sample {
        /// Number of tasks to generate
        #[arg(long, default_value = "8")]
        count: usize,
    },
}

pub fn run(action: TasksAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TasksAction::List { url, file, json } => {
            let tasks = super::fetch_tasks(file.as_deref(), url.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                println!(
                    "{:<38} {:<12} {:<12} {:<12} {}",
                    "ID", "STATUS", "START", "END", "NAME"
                );
                for task in &tasks {
                    println!(
                        "{:<38} {:<12} {:<12} {:<12} {}",
                        task.id,
                        task.status.as_str(),
                        format_date(task.start_date),
                        format_date(task.end_date),
                        task.name,
                    );
                }
                println!("{} task(s)", tasks.len());
            }
        }
        TasksAction::Sample { count } => {
            let tasks = sample_tasks(count);
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
    }
    Ok(())
}

fn format_date(instant: Option<chrono::DateTime<Utc>>) -> String {
    instant
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Demo tasks staggered around today, cycling through every status.
fn sample_tasks(count: usize) -> Vec<Task> {
    let statuses = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ];
    let now = Utc::now();

    (0..count)
        .map(|i| {
            let start = now + Duration::days(i as i64 * 3 - 10);
            let end = start + Duration::days(4 + (i as i64 % 5));
            Task::new(Uuid::new_v4().to_string(), format!("Sample task {}", i + 1))
                .with_dates(start, end)
                .with_status(statuses[i % statuses.len()])
                .with_assigned_count((i % 4) as u32 + 1)
        })
        .collect()
}
