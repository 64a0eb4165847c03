use indexmap::IndexMap;

use crate::io::storage::Storage;
use crate::model::task::Task;

/// The single source of truth for tasks: an insertion-ordered, id-unique
/// list with a write-through persistence boundary.
///
/// Every mutation rewrites the tasks slot in full. Write failures are
/// swallowed; the in-memory state stays authoritative for the session.
#[derive(Debug)]
pub struct TaskStore {
    tasks: IndexMap<String, Task>,
    storage: Storage,
}

impl TaskStore {
    /// Load the committed task list from storage.
    pub fn load(storage: Storage) -> TaskStore {
        let mut tasks = IndexMap::new();
        for task in storage.load_tasks() {
            tasks.insert(task.id.clone(), task);
        }
        TaskStore { tasks, storage }
    }

    /// All tasks in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// A full copy of the task list (resize sessions preview against this).
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    /// Replace the task with a matching id in place, or append a new one.
    pub fn add_or_update(&mut self, mut task: Task) {
        task.normalize();
        self.tasks.insert(task.id.clone(), task);
        self.persist();
    }

    /// Remove a task, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let removed = self.tasks.shift_remove(id);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// Swap in a whole new task list (a committed resize preview).
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks.clear();
        for mut task in tasks {
            task.normalize();
            self.tasks.insert(task.id.clone(), task);
        }
        self.persist();
    }

    fn persist(&self) {
        let tasks: Vec<Task> = self.snapshot();
        let _ = self.storage.save_tasks(&tasks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskStatus;
    use crate::util::dates::at_local_midnight;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> chrono::DateTime<chrono::Local> {
        at_local_midnight(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn task(id: &str, name: &str) -> Task {
        Task::new(id, name, TaskStatus::ToDo, day(2024, 6, 10), day(2024, 6, 12))
    }

    fn fresh_store(dir: &TempDir) -> TaskStore {
        TaskStore::load(Storage::new(dir.path()))
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(&dir);
        store.add_or_update(task("1", "a"));
        store.add_or_update(task("2", "b"));
        store.add_or_update(task("3", "c"));
        let ids: Vec<&str> = store.all().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn update_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(&dir);
        store.add_or_update(task("1", "a"));
        store.add_or_update(task("2", "b"));
        store.add_or_update(task("3", "c"));

        store.add_or_update(task("2", "b-renamed"));
        let names: Vec<&str> = store.all().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b-renamed", "c"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(&dir);
        for (id, name) in [("1", "a"), ("2", "b"), ("3", "c")] {
            store.add_or_update(task(id, name));
        }
        assert!(store.remove("2").is_some());
        let ids: Vec<&str> = store.all().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert!(store.remove("2").is_none());
    }

    #[test]
    fn mutations_write_through_to_storage() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(&dir);
        store.add_or_update(task("1", "a"));
        store.add_or_update(task("2", "b"));
        store.remove("1");

        // A second store over the same directory sees the committed state.
        let reloaded = fresh_store(&dir);
        let ids: Vec<&str> = reloaded.all().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["2"]);
    }

    #[test]
    fn replace_all_swaps_the_list() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(&dir);
        store.add_or_update(task("1", "a"));
        store.replace_all(vec![task("9", "z"), task("8", "y")]);
        let ids: Vec<&str> = store.all().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["9", "8"]);
    }

    #[test]
    fn replace_all_normalizes_crossed_ranges() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(&dir);
        let mut crossed = task("1", "a");
        crossed.start = day(2024, 6, 20);
        crossed.end = day(2024, 6, 10);
        store.replace_all(vec![crossed]);
        let t = store.get("1").unwrap();
        assert!(t.start <= t.end);
    }
}
