//! Timeline layout inspection commands.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use ganttline_core::config::ChartConfig;
use ganttline_core::layout::{compute_timeline_with_config, LayoutConfig};

#[derive(Subcommand)]
pub enum LayoutAction {
    /// Compute and print the timeline for a task list
    Show {
        /// Task service base URL (overrides the configured one)
        #[arg(long)]
        url: Option<String>,
        /// Read tasks from a local JSON file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Render width in pixels (overrides the configured one)
        #[arg(long)]
        width: Option<f32>,
        /// Override the date treated as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Print the full layout as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: LayoutAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LayoutAction::Show {
            url,
            file,
            width,
            today,
            json,
        } => {
            let tasks = super::fetch_tasks(file.as_deref(), url.as_deref())?;
            let config = LayoutConfig {
                render_width: match width {
                    Some(w) => w,
                    None => ChartConfig::load()?.layout.render_width,
                },
                today: today.unwrap_or_else(|| Local::now().date_naive()),
            };
            let timeline = compute_timeline_with_config(&tasks, config);

            if json {
                println!("{}", serde_json::to_string_pretty(&timeline)?);
                return Ok(());
            }

            println!(
                "Window: {} .. {} ({} days, {} columns, {:.1}px/day)",
                timeline.window.start,
                timeline.window.end,
                timeline.window.total_days(),
                timeline.columns.len(),
                timeline.day_width,
            );
            let months: Vec<String> = timeline
                .months
                .iter()
                .map(|g| format!("{} ({}d)", g.label(), g.span))
                .collect();
            println!("Months: {}", months.join(", "));
            println!();
            for bar in &timeline.bars {
                println!(
                    "{:<38} {:<12} {} .. {}  offset {:>4}d  {:>3}d  x={:.0} w={:.0}",
                    bar.task_id,
                    bar.status.as_str(),
                    bar.start,
                    bar.end,
                    bar.offset_days,
                    bar.duration_days,
                    bar.left,
                    bar.width,
                );
            }
            println!("{} bar(s)", timeline.bars.len());
        }
    }
    Ok(())
}
