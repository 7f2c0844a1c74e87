//! Page scrollbar
//!
//! 1-character wide, filled track with a solid thumb. Only drawn while the
//! document overflows and the body is not pinned.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::tui::themes::Theme;

/// Thumb position and size within a track of `height` cells
pub fn thumb_geometry(offset: usize, total: usize, visible: usize, height: usize) -> Option<(usize, usize)> {
    if total <= visible || height == 0 {
        return None;
    }

    // Minimum 2 for visibility
    let thumb_size = ((visible as f32 / total as f32) * height as f32)
        .max(2.0)
        .min(height as f32)
        .round() as usize;

    let max_offset = total.saturating_sub(visible);
    let thumb_pos = ((offset.min(max_offset) as f32 / max_offset as f32)
        * height.saturating_sub(thumb_size) as f32)
        .round() as usize;

    Some((thumb_pos, thumb_size))
}

/// Render the document scrollbar into a 1-column area
pub fn render_page_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    theme: &Theme,
) {
    for y in area.y..area.y + area.height {
        if let Some(cell) = buf.cell_mut((area.x, y)) {
            cell.set_char(' ').set_fg(Color::Reset);
        }
    }

    let Some((thumb_pos, thumb_size)) =
        thumb_geometry(offset, total, visible, area.height as usize)
    else {
        return;
    };

    for y in 0..area.height as usize {
        let is_thumb = y >= thumb_pos && y < thumb_pos + thumb_size;
        let (ch, color) = if is_thumb {
            ('█', theme.scrollbar_fg_color)
        } else {
            ('░', theme.scrollbar_bg_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + y as u16)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_thumb_without_overflow() {
        assert_eq!(thumb_geometry(0, 10, 20, 20), None);
        assert_eq!(thumb_geometry(0, 100, 20, 0), None);
    }

    #[test]
    fn test_thumb_tracks_offset() {
        assert_eq!(thumb_geometry(0, 100, 20, 20), Some((0, 4)));
        assert_eq!(thumb_geometry(80, 100, 20, 20), Some((16, 4)));
        assert_eq!(thumb_geometry(500, 100, 20, 20), Some((16, 4)));
    }
}
