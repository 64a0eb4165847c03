pub mod filter_bar;
pub mod helpers;
pub mod month_view;
pub mod status_row;
pub mod task_form;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use super::app::{App, Mode};

/// Top-level render: title, filter bar, grid, status row, then the form.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title | filter bar | weekday header | grid | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let title = app.month.format("%B %Y").to_string();
    frame.render_widget(
        Paragraph::new(Line::from(title)).centered().style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        chunks[0],
    );

    filter_bar::render_filter_bar(frame, app, chunks[1]);
    month_view::render_weekday_header(frame, app, chunks[2]);
    month_view::render_grid(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // The create/edit form floats over everything
    if app.mode == Mode::Form {
        task_form::render_task_form(frame, app, area);
    }
}
