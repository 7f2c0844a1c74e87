//! Custom cursor ring drawn over the page

use folio_core::page::CursorState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::tui::themes::Theme;

/// Paint the cursor at its last reported cell
pub fn render_cursor(buf: &mut Buffer, area: Rect, cursor: &CursorState, theme: &Theme) {
    if !cursor.is_visible() {
        return;
    }
    let (x, y) = cursor.position();
    let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
        return;
    };
    if x >= area.x + area.width || y >= area.y + area.height {
        return;
    }

    // Ring grows to three cells over links
    let reach = if cursor.ring_scale() > 1.0 { 1 } else { 0 };
    let from = x.saturating_sub(reach).max(area.x);
    let to = (x + reach).min(area.x + area.width - 1);
    for cx in from..=to {
        if let Some(cell) = buf.cell_mut((cx, y)) {
            if cx == x && !cursor.is_dot_expanded() {
                cell.set_bg(theme.accent_color).set_fg(theme.bg_color);
            } else {
                cell.set_style(
                    Style::default()
                        .fg(theme.accent_color)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            if cursor.is_clicked() {
                cell.set_style(Style::default().add_modifier(Modifier::BOLD));
            }
        }
    }
}
