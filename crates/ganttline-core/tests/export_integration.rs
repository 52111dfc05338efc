//! Integration tests for the render-then-export pipeline.

use chrono::{NaiveDate, TimeZone, Utc};

use ganttline_core::export::{ExportFormat, Exporter};
use ganttline_core::layout::{compute_timeline_with_config, LayoutConfig};
use ganttline_core::render::{Renderer, EXPORT_OVERSAMPLE};
use ganttline_core::task::{Task, TaskStatus};

fn sample_timeline() -> ganttline_core::layout::Timeline {
    let start = Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 3, 21, 0, 0, 0).unwrap();
    let tasks = vec![
        Task::new("t-1", "Vendor onboarding").with_dates(start, end),
        Task::new("t-2", "Quarterly audit")
            .with_status(TaskStatus::InProgress)
            .with_dates(start, end),
        Task::new("t-3", "No dates yet"),
    ];
    let config = LayoutConfig {
        render_width: 1200.0,
        today: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
    };
    compute_timeline_with_config(&tasks, config)
}

#[test]
fn test_png_export_writes_oversampled_bitmap() {
    let dir = tempfile::tempdir().unwrap();
    let timeline = sample_timeline();
    let snapshot = Renderer::new().snapshot(&timeline, EXPORT_OVERSAMPLE);

    let exporter = Exporter::new(dir.path());
    let path = exporter.export(&snapshot, ExportFormat::Png).unwrap();

    let name = path.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("gantt-chart-"));
    assert!(name.ends_with(".png"));

    let (width, height) = image::image_dimensions(&path).unwrap();
    assert_eq!(width, snapshot.width());
    assert_eq!(height, snapshot.height());
    // 2x oversampling doubles the CSS size
    assert_eq!(width, (snapshot.css_width * 2.0).ceil() as u32);
}

#[test]
fn test_pdf_export_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let timeline = sample_timeline();
    let snapshot = Renderer::new().snapshot(&timeline, EXPORT_OVERSAMPLE);

    let exporter = Exporter::new(dir.path()).with_title("March plan");
    let path = exporter.export(&snapshot, ExportFormat::Pdf).unwrap();

    assert!(path.file_name().unwrap().to_string_lossy().ends_with(".pdf"));
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_exports_do_not_collide() {
    // Two exports in quick succession both land on disk; names carry a
    // millisecond timestamp so at worst they differ by format.
    let dir = tempfile::tempdir().unwrap();
    let timeline = sample_timeline();
    let snapshot = Renderer::new().snapshot(&timeline, 1.0);

    let exporter = Exporter::new(dir.path());
    let png = exporter.export(&snapshot, ExportFormat::Png).unwrap();
    let pdf = exporter.export(&snapshot, ExportFormat::Pdf).unwrap();

    assert!(png.exists());
    assert!(pdf.exists());
    assert_ne!(png, pdf);
}

#[test]
fn test_empty_task_list_still_exports() {
    let dir = tempfile::tempdir().unwrap();
    let config = LayoutConfig {
        render_width: 1200.0,
        today: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
    };
    let timeline = compute_timeline_with_config(&[], config);
    let snapshot = Renderer::new().snapshot(&timeline, 1.0);

    // 91 columns and no bars is still a valid, non-empty chart
    let path = Exporter::new(dir.path())
        .export(&snapshot, ExportFormat::Png)
        .unwrap();
    assert!(path.exists());
}
