use chrono::NaiveDate;

use crate::model::task::{Task, TaskStatus, fresh_task_id};
use crate::util::dates::{at_local_midnight, parse_day};
use crate::util::unicode;

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Status,
    Start,
    End,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Status,
            FormField::Status => FormField::Start,
            FormField::Start => FormField::End,
            FormField::End => FormField::Name,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Name => FormField::End,
            FormField::Status => FormField::Name,
            FormField::Start => FormField::Status,
            FormField::End => FormField::Start,
        }
    }
}

/// The create/edit task form (the original's modal dialog).
///
/// Saving with an empty trimmed name is blocked and the form stays open;
/// unparsable date text coerces back to the pre-filled day.
#[derive(Debug, Clone)]
pub struct TaskForm {
    /// Some = editing an existing task, None = creating
    pub editing_id: Option<String>,
    pub name: String,
    /// Byte offset of the name cursor (always on a grapheme boundary)
    pub cursor: usize,
    pub status: TaskStatus,
    pub start_text: String,
    pub end_text: String,
    pub field: FormField,
    default_start: NaiveDate,
    default_end: NaiveDate,
}

impl TaskForm {
    /// A creation form pre-filled with a committed selection range.
    pub fn create(start: NaiveDate, end: NaiveDate) -> TaskForm {
        TaskForm {
            editing_id: None,
            name: String::new(),
            cursor: 0,
            status: TaskStatus::ToDo,
            start_text: start.to_string(),
            end_text: end.to_string(),
            field: FormField::Name,
            default_start: start,
            default_end: end,
        }
    }

    /// An edit form pre-filled from an existing task.
    pub fn edit(task: &Task, start: NaiveDate, end: NaiveDate) -> TaskForm {
        TaskForm {
            editing_id: Some(task.id.clone()),
            cursor: task.name.len(),
            name: task.name.clone(),
            status: task.status,
            start_text: start.to_string(),
            end_text: end.to_string(),
            field: FormField::Name,
            default_start: start,
            default_end: end,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit Task"
        } else {
            "Create Task"
        }
    }

    // --- Field editing ---

    pub fn insert_char(&mut self, c: char) {
        match self.field {
            FormField::Name => {
                self.name.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            FormField::Start | FormField::End => {
                if c.is_ascii_digit() || c == '-' {
                    self.date_text_mut().push(c);
                }
            }
            FormField::Status => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            FormField::Name => {
                if let Some(prev) = unicode::prev_grapheme_boundary(&self.name, self.cursor) {
                    self.name.drain(prev..self.cursor);
                    self.cursor = prev;
                }
            }
            FormField::Start | FormField::End => {
                self.date_text_mut().pop();
            }
            FormField::Status => {}
        }
    }

    pub fn cursor_left(&mut self) {
        if self.field == FormField::Name
            && let Some(prev) = unicode::prev_grapheme_boundary(&self.name, self.cursor)
        {
            self.cursor = prev;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.field == FormField::Name
            && let Some(next) = unicode::next_grapheme_boundary(&self.name, self.cursor)
        {
            self.cursor = next;
        }
    }

    pub fn cycle_status_forward(&mut self) {
        self.status = self.status.next();
    }

    pub fn cycle_status_back(&mut self) {
        self.status = self.status.prev();
    }

    fn date_text_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Start => &mut self.start_text,
            _ => &mut self.end_text,
        }
    }

    // --- Save ---

    /// Build the task to commit, or None when the save is blocked by an
    /// empty trimmed name.
    pub fn build_task(&self) -> Option<Task> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let start = parse_day(&self.start_text).unwrap_or(self.default_start);
        let end = parse_day(&self.end_text).unwrap_or(self.default_end);
        let id = self.editing_id.clone().unwrap_or_else(fresh_task_id);
        Some(Task::new(
            id,
            name,
            self.status,
            at_local_midnight(start),
            at_local_midnight(end),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::dates::day_floor;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn create_form_prefills_selection_range() {
        let form = TaskForm::create(d(10), d(12));
        assert_eq!(form.start_text, "2024-06-10");
        assert_eq!(form.end_text, "2024-06-12");
        assert_eq!(form.status, TaskStatus::ToDo);
        assert_eq!(form.title(), "Create Task");
    }

    #[test]
    fn empty_name_blocks_save() {
        let mut form = TaskForm::create(d(10), d(12));
        assert!(form.build_task().is_none());
        form.name = "   ".into();
        assert!(form.build_task().is_none());
        form.name = "  Design  ".into();
        let task = form.build_task().unwrap();
        assert_eq!(task.name, "Design");
    }

    #[test]
    fn save_uses_edited_dates() {
        let mut form = TaskForm::create(d(10), d(12));
        form.name = "Design".into();
        form.field = FormField::End;
        form.end_text.clear();
        for c in "2024-06-20".chars() {
            form.insert_char(c);
        }
        let task = form.build_task().unwrap();
        assert_eq!(day_floor(task.start), d(10));
        assert_eq!(day_floor(task.end), d(20));
    }

    #[test]
    fn unparsable_date_coerces_to_prefill() {
        let mut form = TaskForm::create(d(10), d(12));
        form.name = "Design".into();
        form.start_text = "2024-99".into();
        let task = form.build_task().unwrap();
        assert_eq!(day_floor(task.start), d(10));
    }

    #[test]
    fn edit_form_keeps_the_task_id() {
        let task = Task::new(
            "42",
            "Design",
            TaskStatus::Review,
            at_local_midnight(d(10)),
            at_local_midnight(d(12)),
        );
        let mut form = TaskForm::edit(&task, d(10), d(12));
        assert_eq!(form.title(), "Edit Task");
        form.name.push('!');
        form.cursor = form.name.len();
        let saved = form.build_task().unwrap();
        assert_eq!(saved.id, "42");
        assert_eq!(saved.name, "Design!");
        assert_eq!(saved.status, TaskStatus::Review);
    }

    #[test]
    fn name_editing_is_grapheme_aware() {
        let mut form = TaskForm::create(d(10), d(10));
        for c in "caf\u{00E9}".chars() {
            form.insert_char(c);
        }
        form.backspace();
        assert_eq!(form.name, "caf");
        form.cursor_left();
        form.insert_char('x');
        assert_eq!(form.name, "caxf");
    }

    #[test]
    fn date_fields_accept_digits_and_dashes_only() {
        let mut form = TaskForm::create(d(10), d(10));
        form.field = FormField::Start;
        form.start_text.clear();
        for c in "2x0-2!4".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.start_text, "20-24");
    }

    #[test]
    fn field_cycle_wraps_both_ways() {
        assert_eq!(FormField::End.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::End);
    }
}
