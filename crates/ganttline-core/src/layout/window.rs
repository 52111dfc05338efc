//! Visible date window derivation.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EMPTY_WINDOW_FUTURE_DAYS, EMPTY_WINDOW_PAST_DAYS, LEAD_DAYS, TRAIL_DAYS};

/// The visible date range used to lay out the timeline.
///
/// Both endpoints are calendar dates; `start` is inclusive and `end` is
/// the last visible day. Tasks outside the window are clipped into it,
/// never dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimelineWindow {
    /// Derive a window from the extreme dates of a task list: a week of
    /// lead-in before the earliest start and two weeks of run-out after
    /// the latest end.
    pub fn from_dates(min: NaiveDate, max: NaiveDate) -> Self {
        let start = min - Duration::days(LEAD_DAYS);
        let end = max + Duration::days(TRAIL_DAYS);
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Instant-based variant: floors the earliest instant to its day and
    /// rounds the latest one up before applying the margins.
    pub fn from_instants(min: DateTime<Utc>, max: DateTime<Utc>) -> Self {
        Self::from_dates(floor_to_day(min), ceil_to_day(max))
    }

    /// Default window for an empty task list: 30 days back, 60 days
    /// forward from `today`.
    pub fn around(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(EMPTY_WINDOW_PAST_DAYS),
            end: today + Duration::days(EMPTY_WINDOW_FUTURE_DAYS),
        }
    }

    /// Number of whole days spanned by the window.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Clamp a date into the window.
    pub fn clip(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.start, self.end)
    }
}

/// Truncate an instant to its UTC calendar day.
pub(super) fn floor_to_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Round an instant up to the next UTC calendar day unless it is
/// exactly midnight.
pub(super) fn ceil_to_day(instant: DateTime<Utc>) -> NaiveDate {
    let date = instant.date_naive();
    if instant.time() == NaiveTime::MIN {
        date
    } else {
        date.succ_opt().unwrap_or(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_from_instants_adds_margins() {
        let min = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        let window = TimelineWindow::from_instants(min, max);
        assert_eq!(window.start, date(2025, 1, 3));
        assert_eq!(window.end, date(2025, 1, 29));
    }

    #[test]
    fn test_ceil_rounds_partial_days_up() {
        let noon = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(ceil_to_day(noon), date(2025, 3, 2));

        let midnight = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(ceil_to_day(midnight), date(2025, 3, 1));
    }

    #[test]
    fn test_default_window_spans_90_days() {
        let today = date(2025, 5, 15);
        let window = TimelineWindow::around(today);
        assert_eq!(window.total_days(), 90);
        assert_eq!(window.start, date(2025, 4, 15));
        assert_eq!(window.end, date(2025, 7, 14));
    }

    #[test]
    fn test_clip_clamps_into_window() {
        let window = TimelineWindow::around(date(2025, 5, 15));
        assert_eq!(window.clip(date(2020, 1, 1)), window.start);
        assert_eq!(window.clip(date(2030, 1, 1)), window.end);
        assert_eq!(window.clip(date(2025, 5, 20)), date(2025, 5, 20));
    }
}
