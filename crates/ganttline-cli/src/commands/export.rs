//! Chart export commands.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use ganttline_core::config::ChartConfig;
use ganttline_core::export::{ExportFormat, Exporter};
use ganttline_core::layout::{compute_timeline_with_config, LayoutConfig};
use ganttline_core::render::{Renderer, EXPORT_OVERSAMPLE};

#[derive(Subcommand)]
pub enum ExportAction {
    /// Render the timeline and write it as a PNG or PDF file
    Run {
        /// Task service base URL (overrides the configured one)
        #[arg(long)]
        url: Option<String>,
        /// Read tasks from a local JSON file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output format: png or pdf
        #[arg(long, default_value = "png")]
        format: String,
        /// Output directory (overrides the configured one)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Document title for the PDF header
        #[arg(long)]
        title: Option<String>,
        /// Override the date treated as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

pub fn run(action: ExportAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ExportAction::Run {
            url,
            file,
            format,
            out,
            title,
            today,
        } => {
            let format = match format.as_str() {
                "png" => ExportFormat::Png,
                "pdf" => ExportFormat::Pdf,
                other => return Err(format!("Unknown format: {other} (expected png or pdf)").into()),
            };

            let tasks = super::fetch_tasks(file.as_deref(), url.as_deref())?;
            let config = ChartConfig::load()?;
            let theme = config.theme.to_theme()?;

            let layout = LayoutConfig {
                render_width: config.layout.render_width,
                today: today.unwrap_or_else(|| Local::now().date_naive()),
            };
            let timeline = compute_timeline_with_config(&tasks, layout);
            let snapshot = Renderer::with_theme(theme).snapshot(&timeline, EXPORT_OVERSAMPLE);

            let output_dir = out.unwrap_or_else(|| PathBuf::from(&config.export.output_dir));
            let exporter = Exporter::new(output_dir)
                .with_title(title.unwrap_or_else(|| config.export.title.clone()));

            let path = exporter.export(&snapshot, format)?;
            println!(
                "Exported {} task(s) to {} ({}x{} px)",
                timeline.bars.len(),
                path.display(),
                snapshot.width(),
                snapshot.height(),
            );
        }
    }
    Ok(())
}
