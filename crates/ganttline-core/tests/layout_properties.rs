//! Property tests for the timeline layout engine.
//!
//! These pin down the invariants the renderer relies on: window
//! containment, day-width bounds, minimum bar duration, today-flag
//! uniqueness, and full determinism of the computation.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use ganttline_core::layout::{
    compute_timeline_with_config, LayoutConfig, LEAD_DAYS, MAX_DAY_WIDTH, MIN_DAY_WIDTH,
    TRAIL_DAYS,
};
use ganttline_core::task::{Task, TaskStatus};

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn config() -> LayoutConfig {
    LayoutConfig {
        render_width: 1200.0,
        today: today(),
    }
}

fn instant_at(day_offset: i64) -> chrono::DateTime<Utc> {
    let date = epoch() + Duration::days(day_offset);
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
}

fn arb_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Pending),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Completed),
        Just(TaskStatus::Cancelled),
    ]
}

/// Tasks with optionally-missing dates, spanning up to ~2 years around
/// the epoch, including inverted ranges.
fn arb_task() -> impl Strategy<Value = Task> {
    (
        "[a-z]{1,8}",
        proptest::option::of(-400i64..400),
        proptest::option::of(-400i64..400),
        arb_status(),
    )
        .prop_map(|(id, start_off, end_off, status)| {
            let mut task = Task::new(id.clone(), format!("Task {id}")).with_status(status);
            task.start_date = start_off.map(instant_at);
            task.end_date = end_off.map(instant_at);
            task
        })
}

proptest! {
    #[test]
    fn window_contains_every_dated_task_with_margins(tasks in prop::collection::vec(arb_task(), 1..40)) {
        let timeline = compute_timeline_with_config(&tasks, config());

        for task in &tasks {
            if let (Some(start), Some(end)) = (task.start_date, task.end_date) {
                let lo = start.min(end).date_naive();
                let hi = start.max(end).date_naive();
                prop_assert!(timeline.window.start <= lo - Duration::days(LEAD_DAYS));
                prop_assert!(timeline.window.end >= hi + Duration::days(TRAIL_DAYS));
            }
        }
    }

    #[test]
    fn bars_are_clipped_into_the_window(tasks in prop::collection::vec(arb_task(), 0..40)) {
        let timeline = compute_timeline_with_config(&tasks, config());

        prop_assert_eq!(timeline.bars.len(), tasks.len());
        for bar in &timeline.bars {
            prop_assert!(timeline.window.contains(bar.start));
            prop_assert!(timeline.window.contains(bar.end));
            prop_assert!(bar.offset_days >= 0);
            prop_assert!(bar.left >= 0.0);
        }
    }

    #[test]
    fn day_width_stays_in_bounds(tasks in prop::collection::vec(arb_task(), 0..40)) {
        let timeline = compute_timeline_with_config(&tasks, config());
        prop_assert!(timeline.day_width >= MIN_DAY_WIDTH);
        prop_assert!(timeline.day_width <= MAX_DAY_WIDTH);
    }

    #[test]
    fn bar_duration_is_at_least_one_day(tasks in prop::collection::vec(arb_task(), 0..40)) {
        let timeline = compute_timeline_with_config(&tasks, config());
        for bar in &timeline.bars {
            prop_assert!(bar.duration_days >= 1);
            prop_assert!(bar.width > 0.0);
        }
    }

    #[test]
    fn at_most_one_today_column(tasks in prop::collection::vec(arb_task(), 0..40)) {
        let timeline = compute_timeline_with_config(&tasks, config());
        let marked: Vec<_> = timeline.columns.iter().filter(|c| c.is_today).collect();
        prop_assert!(marked.len() <= 1);
        if let Some(column) = marked.first() {
            prop_assert_eq!(column.date, today());
        }
    }

    #[test]
    fn computation_is_idempotent(tasks in prop::collection::vec(arb_task(), 0..30)) {
        let first = compute_timeline_with_config(&tasks, config());
        let second = compute_timeline_with_config(&tasks, config());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn columns_cover_the_window_exactly(tasks in prop::collection::vec(arb_task(), 0..40)) {
        let timeline = compute_timeline_with_config(&tasks, config());

        prop_assert_eq!(timeline.columns.len() as i64, timeline.window.total_days() + 1);
        for (i, column) in timeline.columns.iter().enumerate() {
            prop_assert_eq!(column.offset, i as i64);
            prop_assert_eq!(column.date, timeline.window.start + Duration::days(i as i64));
        }

        let month_span: i64 = timeline.months.iter().map(|g| g.span).sum();
        prop_assert_eq!(month_span, timeline.columns.len() as i64);
    }
}
