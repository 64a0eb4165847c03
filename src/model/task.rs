use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Task category / workflow status (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Review")]
    Review,
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    /// All statuses in workflow order
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::ToDo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Completed,
    ];

    /// The display string, matching the persisted wire form
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Parse a status from its label or a kebab/lowercase shorthand
    pub fn from_label(s: &str) -> Option<TaskStatus> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "to do" | "todo" => Some(TaskStatus::ToDo),
            "in progress" => Some(TaskStatus::InProgress),
            "review" => Some(TaskStatus::Review),
            "completed" | "done" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    /// Next status in workflow order, wrapping around
    pub fn next(self) -> TaskStatus {
        match self {
            TaskStatus::ToDo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Review,
            TaskStatus::Review => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::ToDo,
        }
    }

    /// Previous status in workflow order, wrapping around
    pub fn prev(self) -> TaskStatus {
        match self {
            TaskStatus::ToDo => TaskStatus::Completed,
            TaskStatus::InProgress => TaskStatus::ToDo,
            TaskStatus::Review => TaskStatus::InProgress,
            TaskStatus::Completed => TaskStatus::Review,
        }
    }
}

/// A task occupying an inclusive range of calendar days.
///
/// Start and end are absolute instants; all range math happens at day
/// granularity (see `util::dates::day_floor`). The wire form matches the
/// original web client: `{id, name, status, startDate, endDate}` with
/// ISO-8601 date strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub status: TaskStatus,
    #[serde(rename = "startDate", with = "iso_instant")]
    pub start: DateTime<Local>,
    #[serde(rename = "endDate", with = "iso_instant")]
    pub end: DateTime<Local>,
}

impl Task {
    /// Create a task, normalizing a reversed start/end pair by swapping.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: TaskStatus,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Self {
        let mut task = Task {
            id: id.into(),
            name: name.into(),
            status,
            start,
            end,
        };
        task.normalize();
        task
    }

    /// Swap start/end if reversed, restoring the start <= end invariant.
    pub fn normalize(&mut self) {
        if self.start > self.end {
            std::mem::swap(&mut self.start, &mut self.end);
        }
    }
}

/// Generate a fresh task id: a millisecond timestamp, matching the ids the
/// original web client writes.
pub fn fresh_task_id() -> String {
    Local::now().timestamp_millis().to_string()
}

/// Serde adapter for task date fields: RFC 3339 out, lenient in (also
/// accepts a bare `YYYY-MM-DD` as written by hand or by older exports).
mod iso_instant {
    use chrono::{DateTime, Local};
    use serde::{Deserialize, Deserializer, Serializer, de};

    use crate::util::dates;

    pub fn serialize<S: Serializer>(dt: &DateTime<Local>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Local>, D::Error> {
        let raw = String::deserialize(d)?;
        dates::parse_instant(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date string: {raw:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::dates::{at_local_midnight, day_floor};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Local> {
        at_local_midnight(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn status_labels_round_trip() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(TaskStatus::from_label("todo"), Some(TaskStatus::ToDo));
        assert_eq!(TaskStatus::from_label("in-progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::from_label("done"), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::from_label("bogus"), None);
    }

    #[test]
    fn status_cycle_wraps() {
        assert_eq!(TaskStatus::Completed.next(), TaskStatus::ToDo);
        assert_eq!(TaskStatus::ToDo.prev(), TaskStatus::Completed);
    }

    #[test]
    fn new_normalizes_reversed_range() {
        let t = Task::new("1", "Design", TaskStatus::ToDo, day(2024, 6, 12), day(2024, 6, 10));
        assert!(t.start <= t.end);
        assert_eq!(day_floor(t.start), NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(day_floor(t.end), NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
    }

    #[test]
    fn serde_uses_original_wire_format() {
        let t = Task::new("1", "Design", TaskStatus::InProgress, day(2024, 6, 10), day(2024, 6, 12));
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"startDate\""));
        assert!(json.contains("\"endDate\""));
        assert!(json.contains("\"In Progress\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn serde_reads_web_client_records() {
        let json = r#"{
            "id": "1718000000000",
            "name": "Design",
            "status": "To Do",
            "startDate": "2024-06-10T00:00:00.000Z",
            "endDate": "2024-06-12"
        }"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, "1718000000000");
        assert_eq!(t.status, TaskStatus::ToDo);
        assert_eq!(day_floor(t.end), NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
    }

    #[test]
    fn serde_rejects_bad_date_string() {
        let json = r#"{"id":"1","name":"x","status":"Review","startDate":"soon","endDate":"2024-06-12"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }
}
