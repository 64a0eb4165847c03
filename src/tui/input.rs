use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::model::filters::Horizon;
use crate::model::task::TaskStatus;
use crate::ops::drag;
use crate::ops::resize::{Edge, ResizeSession};
use crate::ops::grid;
use crate::util::dates;
use crate::util::unicode;

use super::app::{App, DragState, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode {
        Mode::Form => handle_form_key(app, key),
        Mode::Search => handle_search_key(app, key),
        Mode::Navigate => handle_navigate_key(app, key),
    }
}

fn handle_navigate_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('[') | KeyCode::Left => app.month = grid::prev_month(app.month),
        KeyCode::Char(']') | KeyCode::Right => app.month = grid::next_month(app.month),
        KeyCode::Char('g') => {
            app.month = grid::first_of_month(dates::day_floor(chrono::Local::now()));
        }
        KeyCode::Char('n') => {
            let today = dates::day_floor(chrono::Local::now());
            app.open_create_form(today, today);
        }
        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Char('1') => toggle_time(app, Horizon::OneWeek),
        KeyCode::Char('2') => toggle_time(app, Horizon::TwoWeeks),
        KeyCode::Char('3') => toggle_time(app, Horizon::ThreeWeeks),
        KeyCode::Char('t') => toggle_category(app, TaskStatus::ToDo),
        KeyCode::Char('i') => toggle_category(app, TaskStatus::InProgress),
        KeyCode::Char('r') => toggle_category(app, TaskStatus::Review),
        KeyCode::Char('c') => toggle_category(app, TaskStatus::Completed),
        _ => {}
    }
}

fn toggle_time(app: &mut App, horizon: Horizon) {
    app.filters.toggle_time(horizon);
    app.save_filters();
}

fn toggle_category(app: &mut App, status: TaskStatus) {
    app.filters.toggle_category(status);
    app.save_filters();
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.mode = Mode::Navigate,
        KeyCode::Backspace => {
            let search = &mut app.filters.search;
            if let Some(prev) = unicode::prev_grapheme_boundary(search, search.len()) {
                search.truncate(prev);
                app.save_filters();
            }
        }
        KeyCode::Char(c) => {
            app.filters.search.push(c);
            app.save_filters();
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let Some(form) = app.form.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => {
            // Blocked save (empty name) keeps the form open.
            if let Some(task) = form.build_task() {
                app.store.add_or_update(task);
                app.close_form();
            }
        }
        KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
        KeyCode::BackTab | KeyCode::Up => form.field = form.field.prev(),
        KeyCode::Left => {
            if form.field == super::form::FormField::Status {
                form.cycle_status_back();
            } else {
                form.cursor_left();
            }
        }
        KeyCode::Right => {
            if form.field == super::form::FormField::Status {
                form.cycle_status_forward();
            } else {
                form.cursor_right();
            }
        }
        KeyCode::Char(' ') if form.field == super::form::FormField::Status => {
            form.cycle_status_forward();
        }
        KeyCode::Char(c) => form.insert_char(c),
        KeyCode::Backspace => form.backspace(),
        _ => {}
    }
}

/// Handle a mouse event: day selection, task-bar drag, and edge resize all
/// arrive as left down/drag/up sequences over the grid.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    // The form is modal; gestures are ignored while it is open.
    if app.mode == Mode::Form {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => on_left_down(app, mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => on_left_drag(app, mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => on_left_up(app),
        _ => {}
    }
}

fn on_left_down(app: &mut App, column: u16, row: u16) {
    if let Some((rect, task_id)) = app.bar_at(column, row) {
        let edge = if column == rect.x {
            Some(Edge::Start)
        } else if column == rect.x + rect.width.saturating_sub(1) {
            Some(Edge::End)
        } else {
            None
        };
        match edge {
            Some(edge) => app.resize = Some(ResizeSession::begin(&app.store, task_id, edge)),
            None => {
                app.drag = Some(DragState {
                    task_id,
                    hover: None,
                })
            }
        }
    } else if let Some(day) = app.day_at(column, row) {
        app.selection.pointer_down(day);
    }
}

fn on_left_drag(app: &mut App, column: u16, row: u16) {
    let day = app.day_at(column, row);
    if let Some(session) = app.resize.as_mut() {
        if let Some(day) = day {
            session.pointer_over(day);
        }
    } else if let Some(drag) = app.drag.as_mut() {
        if let Some(day) = day {
            drag.hover = Some(day);
        }
    } else if let Some(day) = day {
        app.selection.pointer_over(day);
    }
}

fn on_left_up(app: &mut App) {
    if let Some(session) = app.resize.take() {
        // Release always commits, even when no day was ever resolved.
        session.commit(&mut app.store);
    } else if let Some(drag) = app.drag.take() {
        match drag.hover {
            Some(day) => drag::relocate(&mut app.store, &drag.task_id, day),
            // A click without motion opens the edit form.
            None => {
                if let Some(task) = app.store.get(&drag.task_id).cloned() {
                    app.open_edit_form(&task);
                }
            }
        }
    } else if let Some((start, end)) = app.selection.release() {
        app.open_create_form(start, end);
    }
}
