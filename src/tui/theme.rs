use ratatui::style::Color;

use crate::model::config::UiConfig;
use crate::model::task::TaskStatus;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub title: Color,
    pub today: Color,
    pub grid_border: Color,
    pub selection_border: Color,
    pub selection_bg: Color,
    pub bar_text: Color,
    pub todo: Color,
    pub in_progress: Color,
    pub review: Color,
    pub completed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Status colors follow the original client's palette.
        Theme {
            background: Color::Rgb(0x10, 0x12, 0x18),
            text: Color::Rgb(0xC8, 0xCC, 0xD8),
            dim: Color::Rgb(0x60, 0x66, 0x78),
            title: Color::Rgb(0xFF, 0xFF, 0xFF),
            today: Color::Rgb(0x66, 0xCC, 0xFF),
            grid_border: Color::Rgb(0x3A, 0x3F, 0x4E),
            selection_border: Color::Rgb(0x44, 0x88, 0xFF),
            selection_bg: Color::Rgb(0x1A, 0x2A, 0x4A),
            bar_text: Color::Rgb(0xFF, 0xFF, 0xFF),
            todo: Color::Rgb(0x75, 0x75, 0x75),
            in_progress: Color::Rgb(0x02, 0x88, 0xD1),
            review: Color::Rgb(0xED, 0x6C, 0x02),
            completed: Color::Rgb(0x2E, 0x7D, 0x32),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from [ui.colors] overrides, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        let slots: [(&str, &mut Color); 13] = [
            ("background", &mut theme.background),
            ("text", &mut theme.text),
            ("dim", &mut theme.dim),
            ("title", &mut theme.title),
            ("today", &mut theme.today),
            ("grid_border", &mut theme.grid_border),
            ("selection_border", &mut theme.selection_border),
            ("selection_bg", &mut theme.selection_bg),
            ("bar_text", &mut theme.bar_text),
            ("todo", &mut theme.todo),
            ("in_progress", &mut theme.in_progress),
            ("review", &mut theme.review),
            ("completed", &mut theme.completed),
        ];
        for (key, slot) in slots {
            if let Some(color) = ui.colors.get(key).and_then(|hex| parse_hex_color(hex)) {
                *slot = color;
            }
        }
        theme
    }

    /// The bar color for a task's status
    pub fn status_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::ToDo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Review => self.review,
            TaskStatus::Completed => self.completed,
        }
    }
}
