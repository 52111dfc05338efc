//! Timeline layout engine.
//!
//! This module turns a list of tasks into everything a renderer needs:
//! - A shared date window with lead-in and run-out margins
//! - One column per calendar day, flagged weekend/today, grouped by month
//! - One pixel-positioned bar per task, clipped into the window
//!
//! The computation is a pure function of (tasks, today, render width).
//! It never fails and never mutates its input; malformed or missing
//! dates degrade to documented defaults instead of raising.

mod bar;
mod column;
mod window;

pub use bar::TaskBar;
pub use column::{group_by_month, DayColumn, MonthGroup};
pub use window::TimelineWindow;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Days of lead-in shown before the earliest task start.
pub const LEAD_DAYS: i64 = 7;
/// Days of run-out shown after the latest task end.
pub const TRAIL_DAYS: i64 = 14;
/// Empty-list window: days shown before today.
pub const EMPTY_WINDOW_PAST_DAYS: i64 = 30;
/// Empty-list window: days shown after today.
pub const EMPTY_WINDOW_FUTURE_DAYS: i64 = 60;
/// Substituted span for tasks with missing dates, in inclusive days.
pub const DEFAULT_TASK_SPAN_DAYS: i64 = 5;
/// Lower bound on the uniform day-column width, in pixels.
pub const MIN_DAY_WIDTH: f32 = 30.0;
/// Upper bound on the uniform day-column width, in pixels.
pub const MAX_DAY_WIDTH: f32 = 50.0;
/// Reference render width used by the column density heuristic.
pub const DEFAULT_RENDER_WIDTH: f32 = 1200.0;
/// Bars never shrink below this width so they stay visible/clickable.
pub const MIN_BAR_WIDTH: f32 = 30.0;

/// The complete output of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub window: TimelineWindow,
    pub day_width: f32,
    pub columns: Vec<DayColumn>,
    pub months: Vec<MonthGroup>,
    pub bars: Vec<TaskBar>,
}

impl Timeline {
    /// Total chart width in CSS pixels (one slot per column).
    pub fn css_width(&self) -> f32 {
        self.columns.len() as f32 * self.day_width
    }
}

/// Layout configuration.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Total width the columns should try to fill, in pixels
    pub render_width: f32,
    /// Calendar date used for the today flag and missing-date defaults
    pub today: NaiveDate,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            today: Local::now().date_naive(),
        }
    }
}

/// Layout computer for timelines.
pub struct TimelineLayout {
    config: LayoutConfig,
}

impl TimelineLayout {
    /// Create a layout computer with default config (today = local
    /// calendar date).
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute the timeline for a task list.
    ///
    /// # Arguments
    /// * `tasks` - Zero or more tasks; dates may be absent
    ///
    /// # Returns
    /// Window, day columns, month groups, and one bar per task
    pub fn compute(&self, tasks: &[Task]) -> Timeline {
        let today = self.config.today;
        let window = self.derive_window(tasks, today);

        let total_days = window.total_days().max(1);
        let day_width =
            (self.config.render_width / total_days as f32).clamp(MIN_DAY_WIDTH, MAX_DAY_WIDTH);

        let columns = column::build_columns(&window, day_width, today);
        let months = group_by_month(&columns);
        let bars = tasks
            .iter()
            .map(|task| bar::build_bar(task, &window, day_width, today))
            .collect();

        Timeline {
            window,
            day_width,
            columns,
            months,
            bars,
        }
    }

    /// Window derivation: margins around the extreme resolved dates, or
    /// the default 90-day window when there are no tasks.
    fn derive_window(&self, tasks: &[Task], today: NaiveDate) -> TimelineWindow {
        let mut extremes: Option<(NaiveDate, NaiveDate)> = None;

        for task in tasks {
            let (start, end) = bar::resolve_range(task, today);
            // Inverted pairs still contribute both endpoints.
            let (lo, hi) = if end < start { (end, start) } else { (start, end) };
            extremes = Some(match extremes {
                Some((min, max)) => (min.min(lo), max.max(hi)),
                None => (lo, hi),
            });
        }

        match extremes {
            Some((min, max)) => TimelineWindow::from_dates(min, max),
            None => TimelineWindow::around(today),
        }
    }
}

impl Default for TimelineLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function: compute with default config.
pub fn compute_timeline(tasks: &[Task]) -> Timeline {
    TimelineLayout::new().compute(tasks)
}

/// Convenience function: compute with explicit config.
pub fn compute_timeline_with_config(tasks: &[Task], config: LayoutConfig) -> Timeline {
    TimelineLayout::with_config(config).compute(tasks)
}
