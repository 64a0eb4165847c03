use ratatui::layout::Rect;

/// Evenly divide `total` cells into `parts`, spreading the remainder over
/// the leading parts so the grid fills the full width/height.
pub(super) fn split_even(total: u16, parts: u16) -> Vec<u16> {
    if parts == 0 {
        return Vec::new();
    }
    let base = total / parts;
    let extra = total % parts;
    (0..parts)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// A centered popup rect clamped to the containing area.
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
