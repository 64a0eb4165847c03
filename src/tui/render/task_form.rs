use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::super::app::App;
use super::super::form::{FormField, TaskForm};
use super::helpers::centered_rect;

/// Render the create/edit form as a centered popup.
pub fn render_task_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };

    let popup = centered_rect(44, 8, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border))
        .style(Style::default().bg(app.theme.background))
        .title(form.title());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        field_line(app, form, FormField::Name, "Name", name_value(app, form)),
        field_line(
            app,
            form,
            FormField::Status,
            "Category",
            vec![Span::styled(
                format!("< {} >", form.status.label()),
                Style::default()
                    .fg(app.theme.bar_text)
                    .bg(app.theme.status_color(form.status)),
            )],
        ),
        field_line(
            app,
            form,
            FormField::Start,
            "Start",
            vec![Span::raw(form.start_text.clone())],
        ),
        field_line(
            app,
            form,
            FormField::End,
            "End",
            vec![Span::raw(form.end_text.clone())],
        ),
        Line::from(Span::styled(
            if form.name.trim().is_empty() {
                "name required"
            } else {
                ""
            },
            Style::default().fg(app.theme.dim),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn name_value<'a>(app: &App, form: &'a TaskForm) -> Vec<Span<'a>> {
    // Show the caret at the cursor position while the name has focus.
    if form.field != FormField::Name {
        return vec![Span::raw(form.name.as_str())];
    }
    let (before, after) = form.name.split_at(form.cursor);
    vec![
        Span::raw(before),
        Span::styled("\u{258F}", Style::default().fg(app.theme.title)),
        Span::raw(after),
    ]
}

fn field_line<'a>(
    app: &App,
    form: &TaskForm,
    field: FormField,
    label: &'a str,
    value: Vec<Span<'a>>,
) -> Line<'a> {
    let focused = form.field == field;
    let marker = if focused { "> " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim)
    };
    let mut spans = vec![
        Span::styled(marker, label_style),
        Span::styled(format!("{:<9}", label), label_style),
    ];
    spans.extend(value);
    Line::from(spans)
}
