//! Task bar geometry.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::window::{floor_to_day, TimelineWindow};
use super::{DEFAULT_TASK_SPAN_DAYS, MIN_BAR_WIDTH};
use crate::task::{Task, TaskStatus};

/// The visual rectangle representing one task's clipped duration.
///
/// Bars reference their source task by id and carry enough annotation
/// (name, status) to render without looking the task up again. They are
/// recomputed from scratch on every layout pass and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskBar {
    pub task_id: String,
    pub name: String,
    pub status: TaskStatus,
    /// Start date after clipping into the window
    pub start: NaiveDate,
    /// End date after clipping into the window (inclusive)
    pub end: NaiveDate,
    /// Day offset of the bar's left edge from the window start
    pub offset_days: i64,
    /// Inclusive duration in days, floored at 1
    pub duration_days: i64,
    /// Left edge in pixels
    pub left: f32,
    /// Width in pixels
    pub width: f32,
}

/// Resolve a task's possibly-absent dates into a concrete day range.
///
/// A task with no usable dates renders as a `DEFAULT_TASK_SPAN_DAYS`-day
/// bar anchored at `today`; a half-specified task keeps its one known
/// endpoint. Renderability wins over accuracy here.
pub(super) fn resolve_range(task: &Task, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let span = Duration::days(DEFAULT_TASK_SPAN_DAYS - 1);
    let start = task.start_date.map(floor_to_day);
    let end = task.end_date.map(floor_to_day);

    match (start, end) {
        (Some(s), Some(e)) => (s, e),
        (Some(s), None) => (s, s + span),
        (None, Some(e)) => (e - span, e),
        (None, None) => (today, today + span),
    }
}

/// Build the bar for one task: clip its resolved range into the window,
/// floor the inclusive duration at one day, and convert to pixels using
/// the shared day width.
pub(super) fn build_bar(
    task: &Task,
    window: &TimelineWindow,
    day_width: f32,
    today: NaiveDate,
) -> TaskBar {
    let (raw_start, raw_end) = resolve_range(task, today);
    let start = window.clip(raw_start);
    let end = window.clip(raw_end);

    let offset_days = (start - window.start).num_days().max(0);
    // Same-day and inverted date pairs still get a visible one-day bar.
    let duration_days = ((end - start).num_days() + 1).max(1);

    TaskBar {
        task_id: task.id.clone(),
        name: task.name.clone(),
        status: task.status,
        start,
        end,
        offset_days,
        duration_days,
        left: offset_days as f32 * day_width,
        width: (duration_days as f32 * day_width).max(MIN_BAR_WIDTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn instant(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_resolve_full_range() {
        let task = Task::new("t", "T").with_dates(instant(2025, 1, 10), instant(2025, 1, 15));
        let (s, e) = resolve_range(&task, date(2025, 1, 1));
        assert_eq!(s, date(2025, 1, 10));
        assert_eq!(e, date(2025, 1, 15));
    }

    #[test]
    fn test_resolve_missing_both_anchors_at_today() {
        let task = Task::new("t", "T");
        let today = date(2025, 1, 1);
        let (s, e) = resolve_range(&task, today);
        assert_eq!(s, today);
        assert_eq!((e - s).num_days() + 1, DEFAULT_TASK_SPAN_DAYS);
    }

    #[test]
    fn test_resolve_missing_end_extends_forward() {
        let mut task = Task::new("t", "T");
        task.start_date = Some(instant(2025, 3, 1));
        let (s, e) = resolve_range(&task, date(2025, 1, 1));
        assert_eq!(s, date(2025, 3, 1));
        assert_eq!(e, date(2025, 3, 5));
    }

    #[test]
    fn test_inverted_range_floors_at_one_day() {
        let task = Task::new("t", "T").with_dates(instant(2025, 1, 15), instant(2025, 1, 10));
        let window = TimelineWindow {
            start: date(2025, 1, 1),
            end: date(2025, 1, 31),
        };
        let bar = build_bar(&task, &window, 40.0, date(2025, 1, 1));
        assert!(bar.duration_days >= 1);
        assert!(bar.width >= MIN_BAR_WIDTH);
    }

    #[test]
    fn test_bar_pixels_follow_day_width() {
        let task = Task::new("t", "T").with_dates(instant(2025, 1, 10), instant(2025, 1, 15));
        let window = TimelineWindow {
            start: date(2025, 1, 3),
            end: date(2025, 1, 29),
        };
        let bar = build_bar(&task, &window, 40.0, date(2025, 1, 1));
        assert_eq!(bar.offset_days, 7);
        assert_eq!(bar.duration_days, 6);
        assert_eq!(bar.left, 280.0);
        assert_eq!(bar.width, 240.0);
    }
}
