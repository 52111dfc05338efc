//! Day columns and month header grouping.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::window::TimelineWindow;

/// One calendar day's rendering slot within the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    /// Ordinal offset from the window start
    pub offset: i64,
    /// Uniform pixel width shared by every column
    pub width: f32,
    pub is_weekend: bool,
    pub is_today: bool,
}

/// A contiguous run of day columns sharing the same (year, month), used
/// for the two-tier header: one month row above the day row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGroup {
    pub year: i32,
    pub month: u32,
    /// Offset of the first column in the run
    pub start_offset: i64,
    /// Number of columns in the run
    pub span: i64,
}

impl MonthGroup {
    /// Header label, e.g. "Jan 2025".
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_default()
    }
}

/// Emit one column per day offset `0..=total_days`.
pub(super) fn build_columns(
    window: &TimelineWindow,
    day_width: f32,
    today: NaiveDate,
) -> Vec<DayColumn> {
    (0..=window.total_days())
        .map(|offset| {
            let date = window.start + Duration::days(offset);
            DayColumn {
                date,
                offset,
                width: day_width,
                is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
                is_today: date == today,
            }
        })
        .collect()
}

/// Group columns into contiguous month runs. Boundaries fall wherever
/// the (year, month) pair changes.
pub fn group_by_month(columns: &[DayColumn]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();

    for column in columns {
        let year = column.date.year();
        let month = column.date.month();

        match groups.last_mut() {
            Some(group) if group.year == year && group.month == month => {
                group.span += 1;
            }
            _ => groups.push(MonthGroup {
                year,
                month,
                start_offset: column.offset,
                span: 1,
            }),
        }
    }

    groups
}
