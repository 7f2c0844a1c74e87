//! Common popup utilities

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::tui::themes::Theme;

/// Standard popup sizes (fixed width x height in characters)
#[derive(Debug, Clone, Copy)]
pub enum PopupSize {
    /// Language dropdown
    Small,
    /// Navigation overlay
    Medium,
}

impl PopupSize {
    pub fn dimensions(&self) -> (u16, u16) {
        match self {
            PopupSize::Small => (24, 6),
            PopupSize::Medium => (40, 14),
        }
    }
}

/// Calculate centered popup area with fixed size
pub fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

/// Dropdown area hanging below an anchor, kept inside `bounds`
pub fn anchored_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let available = (bounds.y + bounds.height).saturating_sub(anchor.y + 1);
    let height = height.min(available);
    let right = bounds.x + bounds.width;
    let x = (anchor.x + anchor.width)
        .saturating_sub(width)
        .max(bounds.x)
        .min(right.saturating_sub(width));
    Rect::new(x, anchor.y + 1, width, height)
}

/// Render popup background (clear + theme bg)
pub fn render_popup_background(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(Clear, area);
    let bg = Block::default().style(Style::default().bg(theme.bg_color));
    f.render_widget(bg, area);
}

/// Create standard popup block with rounded borders
pub fn popup_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color))
}

/// Create popup title lines (centered, with separator matching title width)
pub fn popup_title(title: &str, theme: &Theme) -> Vec<Line<'static>> {
    let sep_len = title.chars().count().max(16);
    let separator: String = "═".repeat(sep_len);

    vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            separator,
            Style::default().fg(theme.border_color),
        )),
    ]
}

/// Row style for list entries
pub fn item_style(selected: bool, theme: &Theme) -> Style {
    if selected {
        Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = center_rect(40, 14, area);
        assert_eq!(rect, Rect::new(2, 1, 26, 8));
    }

    #[test]
    fn test_anchored_rect_stays_inside() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(70, 0, 6, 1);
        let rect = anchored_rect(anchor, 24, 6, bounds);
        assert_eq!(rect, Rect::new(52, 1, 24, 6));

        let near_left = anchored_rect(Rect::new(2, 0, 4, 1), 24, 6, bounds);
        assert_eq!(near_left.x, 0);
    }
}
