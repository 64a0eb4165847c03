use chrono::{Datelike, Local, NaiveDate};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::task::Task;
use crate::ops::grid;
use crate::util::dates::day_floor;
use crate::util::unicode;

use super::super::app::App;
use super::helpers::split_even;

/// Render the weekday label row, aligned with the grid columns.
pub fn render_weekday_header(frame: &mut Frame, app: &App, area: Rect) {
    let widths = split_even(area.width, 7);
    let mut x = area.x;
    for (label, width) in app.week_start.header().iter().zip(widths) {
        let cell = Rect::new(x, area.y, width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(*label)).centered().style(
                Style::default()
                    .fg(app.theme.dim)
                    .add_modifier(Modifier::BOLD),
            ),
            cell,
        );
        x += width;
    }
}

/// Render the month grid and rebuild the mouse hit maps.
pub fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    app.day_rects.clear();
    app.bar_rects.clear();

    let weeks = grid::month_grid(app.month, app.week_start);
    let tasks = app.render_tasks();
    let today = day_floor(Local::now());

    let col_widths = split_even(area.width, 7);
    let row_heights = split_even(area.height, weeks.len() as u16);

    let mut y = area.y;
    for (week, height) in weeks.iter().zip(&row_heights) {
        let mut x = area.x;
        for (day, width) in week.iter().zip(&col_widths) {
            let cell = Rect::new(x, y, *width, *height);
            render_day_cell(frame, app, cell, *day, today, &tasks);
            app.day_rects.push((cell, *day));
            x += width;
        }
        y += height;
    }
}

fn render_day_cell(
    frame: &mut Frame,
    app: &mut App,
    cell: Rect,
    day: NaiveDate,
    today: NaiveDate,
    tasks: &[Task],
) {
    let selected = app.selection.contains(day);
    let in_month = day.month() == app.month.month() && day.year() == app.month.year();

    let border_style = if selected {
        Style::default().fg(app.theme.selection_border)
    } else {
        Style::default().fg(app.theme.grid_border)
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if selected {
        block = block.style(Style::default().bg(app.theme.selection_bg));
    }
    let inner = block.inner(cell);
    frame.render_widget(block, cell);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Day number line
    let number_style = if day == today {
        Style::default()
            .fg(app.theme.today)
            .add_modifier(Modifier::BOLD)
    } else if in_month {
        Style::default().fg(app.theme.text)
    } else {
        Style::default().fg(app.theme.dim)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(day.day().to_string(), number_style))),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    // Task bars, one row each, below the day number
    let on_day = grid::tasks_on_day(day, tasks.iter());
    let bar_rows = inner.height.saturating_sub(1) as usize;
    let shown = if on_day.len() > bar_rows && bar_rows > 0 {
        bar_rows - 1
    } else {
        on_day.len().min(bar_rows)
    };

    for (i, task) in on_day.iter().take(shown).enumerate() {
        let bar = Rect::new(inner.x, inner.y + 1 + i as u16, inner.width, 1);
        let label = unicode::center_in_width(&task.name, inner.width as usize);
        frame.render_widget(
            Paragraph::new(Line::from(label)).style(
                Style::default()
                    .fg(app.theme.bar_text)
                    .bg(app.theme.status_color(task.status)),
            ),
            bar,
        );
        app.bar_rects.push((bar, task.id.clone()));
    }

    if on_day.len() > shown && bar_rows > 0 {
        let more = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(unicode::truncate_to_width(
                &format!("+{} more", on_day.len() - shown),
                inner.width as usize,
            )))
            .style(Style::default().fg(app.theme.dim)),
            more,
        );
    }
}
