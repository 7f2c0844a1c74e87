//! Floating scroll-to-top button

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::themes::Theme;

const BUTTON_WIDTH: u16 = 5;
const BUTTON_HEIGHT: u16 = 3;

/// Render the button in the body's bottom-right corner, returning its area
pub fn render_scroll_to_top(f: &mut Frame, body: Rect, theme: &Theme) -> Option<Rect> {
    if body.width < BUTTON_WIDTH + 4 || body.height < BUTTON_HEIGHT + 1 {
        return None;
    }
    let area = Rect::new(
        body.x + body.width - BUTTON_WIDTH - 3,
        body.y + body.height - BUTTON_HEIGHT - 1,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_color))
        .style(Style::default().bg(theme.bg_color));
    let arrow = Paragraph::new("↑")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);
    f.render_widget(arrow, area);
    Some(area)
}
