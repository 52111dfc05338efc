//! Task records consumed by the timeline layout engine.
//!
//! Tasks are owned by the remote task service; this crate only reads
//! them. Date fields on the wire may be RFC 3339 strings, plain
//! `YYYY-MM-DD` strings, or epoch milliseconds -- and any of them may be
//! absent or garbage. Unparseable dates decode as `None` so a single bad
//! record never sinks the whole list.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    #[serde(alias = "active")]
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// A task as delivered by the task service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_instant")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_instant")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: TaskStatus,
    /// Number of people assigned, annotation only
    #[serde(default)]
    pub assigned_count: u32,
    /// Owning organization, annotation only
    #[serde(default)]
    pub organization_name: Option<String>,
}

impl Task {
    /// Create a task with no dates (the layout engine substitutes a
    /// default range for it).
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date: None,
            end_date: None,
            status: TaskStatus::default(),
            assigned_count: 0,
            organization_name: None,
        }
    }

    /// Set start and end instants.
    pub fn with_dates(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Set status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the assigned-people count.
    pub fn with_assigned_count(mut self, count: u32) -> Self {
        self.assigned_count = count;
        self
    }

    /// Set the owning organization name.
    pub fn with_organization(mut self, name: impl Into<String>) -> Self {
        self.organization_name = Some(name.into());
        self
    }
}

/// Parse a JSON value into an instant, accepting the formats the task
/// service has been observed to emit. Returns `None` for anything else.
pub fn parse_instant(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::String(s) => parse_instant_str(s),
        serde_json::Value::Number(n) => {
            let ms = n.as_i64()?;
            Utc.timestamp_millis_opt(ms).single()
        }
        _ => None,
    }
}

fn parse_instant_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // ISO datetime without an offset
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    // bare calendar date
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive));
    }
    None
}

fn lenient_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_rfc3339() {
        let v = serde_json::json!("2025-01-10T09:30:00Z");
        let dt = parse_instant(&v).unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    }

    #[test]
    fn test_parse_offsetless_datetime() {
        let v = serde_json::json!("2025-01-10T09:30:00");
        assert!(parse_instant(&v).is_some());
    }

    #[test]
    fn test_parse_bare_date() {
        let v = serde_json::json!("2025-06-01");
        let dt = parse_instant(&v).unwrap();
        assert_eq!(dt.date_naive().month(), 6);
    }

    #[test]
    fn test_parse_epoch_millis() {
        let v = serde_json::json!(1736467200000i64); // 2025-01-10T00:00:00Z
        let dt = parse_instant(&v).unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    }

    #[test]
    fn test_garbage_dates_decode_as_none() {
        let json = r#"{
            "id": "t-1",
            "name": "Broken dates",
            "startDate": "not a date",
            "endDate": {"nested": true}
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.start_date.is_none());
        assert!(task.end_date.is_none());
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_status_aliases() {
        let task: Task =
            serde_json::from_str(r#"{"id": "t", "name": "n", "status": "active"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);

        let task: Task =
            serde_json::from_str(r#"{"id": "t", "name": "n", "status": "in-progress"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_task_roundtrip_uses_camel_case() {
        let task = Task::new("t-1", "Quarterly report")
            .with_status(TaskStatus::Completed)
            .with_assigned_count(3)
            .with_organization("Acme");
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("organizationName").is_some());
        assert!(json.get("assignedCount").is_some());
        let decoded: Task = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.status, TaskStatus::Completed);
    }
}
