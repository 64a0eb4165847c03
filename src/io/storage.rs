use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::filters::Filters;
use crate::model::task::Task;

/// Slot file holding the task list (a JSON array of task records)
pub const TASKS_SLOT: &str = "tasks.json";
/// Slot file holding the filter state
pub const FILTERS_SLOT: &str = "filters.json";

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("cannot create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot encode {slot}: {source}")]
    Encode {
        slot: &'static str,
        source: serde_json::Error,
    },
}

/// The persistence boundary: two independent JSON slots under a data
/// directory, each rewritten in full on every change.
///
/// Loads are lenient: an absent or malformed slot yields the documented
/// default instead of an error, so a damaged file never blocks startup.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Wrap an existing directory without touching the filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Storage {
        Storage { dir: dir.into() }
    }

    /// Open a data directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Storage, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::CreateDir {
            path: dir.clone(),
            source: e,
        })?;
        Ok(Storage { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the task list slot. Absent or malformed: empty list.
    /// Loaded tasks are normalized to the start <= end invariant.
    pub fn load_tasks(&self) -> Vec<Task> {
        let Some(raw) = self.read_slot(TASKS_SLOT) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(mut tasks) => {
                for task in &mut tasks {
                    task.normalize();
                }
                tasks
            }
            Err(_) => Vec::new(),
        }
    }

    /// Rewrite the task list slot in full.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(tasks).map_err(|e| StorageError::Encode {
            slot: TASKS_SLOT,
            source: e,
        })?;
        self.write_slot(TASKS_SLOT, &json)
    }

    /// Load the filters slot. Absent or malformed: default filters.
    pub fn load_filters(&self) -> Filters {
        let Some(raw) = self.read_slot(FILTERS_SLOT) else {
            return Filters::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Rewrite the filters slot in full.
    pub fn save_filters(&self, filters: &Filters) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(filters).map_err(|e| StorageError::Encode {
            slot: FILTERS_SLOT,
            source: e,
        })?;
        self.write_slot(FILTERS_SLOT, &json)
    }

    fn read_slot(&self, slot: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(slot)).ok()
    }

    /// Write a slot atomically: temp file in the same directory, then rename.
    fn write_slot(&self, slot: &'static str, content: &str) -> Result<(), StorageError> {
        let path = self.dir.join(slot);
        let write_err = |e: std::io::Error| StorageError::Write {
            path: path.clone(),
            source: e,
        };
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.persist(&path).map_err(|e| StorageError::Write {
            path: path.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskStatus;
    use crate::util::dates::{at_local_midnight, day_floor};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> chrono::DateTime<chrono::Local> {
        at_local_midnight(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("1", "Design", TaskStatus::ToDo, day(2024, 6, 10), day(2024, 6, 12)),
            Task::new("2", "Build", TaskStatus::InProgress, day(2024, 6, 11), day(2024, 6, 20)),
        ]
    }

    #[test]
    fn tasks_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        let tasks = sample_tasks();
        storage.save_tasks(&tasks).unwrap();
        assert_eq!(storage.load_tasks(), tasks);
    }

    #[test]
    fn filters_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        let filters = Filters {
            categories: vec![TaskStatus::ToDo, TaskStatus::Review],
            time: Some(crate::model::filters::Horizon::OneWeek),
            search: "design".into(),
        };
        storage.save_filters(&filters).unwrap();
        assert_eq!(storage.load_filters(), filters);
    }

    #[test]
    fn missing_slots_yield_defaults() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        assert!(storage.load_tasks().is_empty());
        assert_eq!(storage.load_filters(), Filters::default());
    }

    #[test]
    fn corrupted_slots_yield_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TASKS_SLOT), "not json {{{").unwrap();
        fs::write(dir.path().join(FILTERS_SLOT), "[1,2,3]").unwrap();
        let storage = Storage::new(dir.path());
        assert!(storage.load_tasks().is_empty());
        assert_eq!(storage.load_filters(), Filters::default());
    }

    #[test]
    fn loads_web_client_task_list() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(TASKS_SLOT),
            r#"[{"id":"1","name":"Design","status":"To Do","startDate":"2024-06-10T00:00:00.000Z","endDate":"2024-06-12"}]"#,
        )
        .unwrap();
        let tasks = Storage::new(dir.path()).load_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Design");
        assert_eq!(day_floor(tasks[0].end), NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
    }

    #[test]
    fn load_normalizes_reversed_ranges() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(TASKS_SLOT),
            r#"[{"id":"1","name":"x","status":"Review","startDate":"2024-06-20","endDate":"2024-06-10"}]"#,
        )
        .unwrap();
        let tasks = Storage::new(dir.path()).load_tasks();
        assert!(tasks[0].start <= tasks[0].end);
    }

    #[test]
    fn open_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("planner/data");
        let storage = Storage::open(&nested).unwrap();
        storage.save_tasks(&sample_tasks()).unwrap();
        assert!(nested.join(TASKS_SLOT).exists());
    }
}
