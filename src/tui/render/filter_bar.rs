use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::filters::Horizon;
use crate::model::task::TaskStatus;

use super::super::app::{App, Mode};

const CATEGORY_KEYS: [(char, TaskStatus); 4] = [
    ('t', TaskStatus::ToDo),
    ('i', TaskStatus::InProgress),
    ('r', TaskStatus::Review),
    ('c', TaskStatus::Completed),
];

const HORIZON_KEYS: [(char, Horizon); 3] = [
    ('1', Horizon::OneWeek),
    ('2', Horizon::TwoWeeks),
    ('3', Horizon::ThreeWeeks),
];

/// One-line filter bar: category chips, horizon chips, search text.
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    let dim = Style::default().fg(app.theme.dim);

    for (key, status) in CATEGORY_KEYS {
        let active = app.filters.categories.contains(&status);
        let style = if active {
            Style::default()
                .fg(app.theme.bar_text)
                .bg(app.theme.status_color(status))
        } else {
            dim
        };
        spans.push(Span::styled(format!(" {}:{} ", key, status.label()), style));
    }

    spans.push(Span::styled("  ", dim));
    for (key, horizon) in HORIZON_KEYS {
        let style = if app.filters.time == Some(horizon) {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.today)
        } else {
            dim
        };
        spans.push(Span::styled(format!(" {}:{} ", key, horizon.label()), style));
    }

    spans.push(Span::styled("  /", dim));
    let search_style = if app.mode == Mode::Search {
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text)
    };
    spans.push(Span::styled(app.filters.search.clone(), search_style));
    if app.mode == Mode::Search {
        spans.push(Span::styled("\u{258F}", search_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
