use chrono::NaiveDate;

use crate::model::task::Task;
use crate::ops::store::TaskStore;
use crate::util::dates::at_local_midnight;

/// Which edge of a task bar is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// A live edge-resize gesture.
///
/// On start the session captures a full preview copy of the task list; every
/// resolved day overwrites the targeted edge in the preview only. The grid
/// renders from the preview while the session exists. Release always commits
/// the preview back to the store, even when no day was ever resolved.
///
/// The dragged edge is written as-is: start may cross past end, in which
/// case the bar renders as empty until the gesture ends (the store restores
/// the invariant on commit).
#[derive(Debug, Clone)]
pub struct ResizeSession {
    task_id: String,
    edge: Edge,
    preview: Vec<Task>,
}

impl ResizeSession {
    /// Capture a preview of the committed list and begin resizing.
    pub fn begin(store: &TaskStore, task_id: impl Into<String>, edge: Edge) -> ResizeSession {
        ResizeSession {
            task_id: task_id.into(),
            edge,
            preview: store.snapshot(),
        }
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// The in-flight task list the grid should render from.
    pub fn preview(&self) -> &[Task] {
        &self.preview
    }

    /// Move the live edge to `day`. Unknown task id: silent no-op.
    pub fn pointer_over(&mut self, day: NaiveDate) {
        let Some(task) = self.preview.iter_mut().find(|t| t.id == self.task_id) else {
            return;
        };
        let instant = at_local_midnight(day);
        match self.edge {
            Edge::Start => task.start = instant,
            Edge::End => task.end = instant,
        }
    }

    /// End the gesture: the preview becomes the committed store.
    pub fn commit(self, store: &mut TaskStore) {
        store.replace_all(self.preview);
    }
}
