use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::ops::resize::Edge;
use crate::ops::select::Selection;

use super::super::app::{App, Mode};

/// One-line status row: the live gesture, or key hints.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(status_text(app))).style(Style::default().fg(app.theme.dim)),
        area,
    );
}

fn status_text(app: &App) -> String {
    if let Some(session) = &app.resize {
        let name = session
            .preview()
            .iter()
            .find(|t| t.id == session.task_id())
            .map(|t| t.name.as_str())
            .unwrap_or("?");
        let edge = match session.edge() {
            Edge::Start => "start",
            Edge::End => "end",
        };
        format!("resizing {} of {} (release to commit)", edge, name)
    } else if let Some(drag) = &app.drag {
        match drag.hover {
            Some(day) => format!("moving to {}", day),
            None => "moving (drop on a day)".to_string(),
        }
    } else if let Selection::Selecting { anchor, current } = app.selection {
        format!("selecting {}..{}", anchor.min(current), anchor.max(current))
    } else {
        match app.mode {
            Mode::Form => "tab: next field · enter: save · esc: cancel".to_string(),
            Mode::Search => "type to search · enter/esc: done".to_string(),
            Mode::Navigate => {
                "drag days: new task · drag bar: move · drag edge: resize · [ ]: month · g: today · n: new · q: quit"
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::Storage;
    use crate::model::task::{Task, TaskStatus};
    use crate::ops::resize::ResizeSession;
    use crate::util::dates::at_local_midnight;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn sample_app(dir: &TempDir) -> App {
        let mut app = App::new(Storage::new(dir.path()));
        app.store.add_or_update(Task::new(
            "1",
            "Design",
            TaskStatus::ToDo,
            at_local_midnight(d(10)),
            at_local_midnight(d(12)),
        ));
        app
    }

    #[test]
    fn resize_status_names_the_dragged_edge() {
        let dir = TempDir::new().unwrap();
        let mut app = sample_app(&dir);

        app.resize = Some(ResizeSession::begin(&app.store, "1", Edge::Start));
        assert_eq!(status_text(&app), "resizing start of Design (release to commit)");

        app.resize = Some(ResizeSession::begin(&app.store, "1", Edge::End));
        assert_eq!(status_text(&app), "resizing end of Design (release to commit)");
    }

    #[test]
    fn selection_status_shows_the_normalized_range() {
        let dir = TempDir::new().unwrap();
        let mut app = sample_app(&dir);
        app.selection.pointer_down(d(14));
        app.selection.pointer_over(d(10));
        assert_eq!(status_text(&app), "selecting 2024-06-10..2024-06-14");
    }
}
