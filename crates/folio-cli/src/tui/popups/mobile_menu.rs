//! Mobile navigation overlay
//!
//! Shown while the header's menu is open. The page underneath is scroll
//! locked; choosing an entry closes the overlay and scrolls to the section.

use folio_core::{Section, Translator};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::common::{
    center_rect, item_style, popup_block, popup_title, render_popup_background, PopupSize,
};
use crate::tui::state::{HitTarget, LayoutState};
use crate::tui::themes::Theme;

#[derive(Debug, Default)]
pub struct MobileMenuPopup {
    selected: usize,
}

impl MobileMenuPopup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on the section currently in view
    pub fn reset(&mut self, active: Section) {
        self.selected = Section::ALL
            .iter()
            .position(|s| *s == active)
            .unwrap_or(0);
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % Section::ALL.len();
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + Section::ALL.len() - 1) % Section::ALL.len();
    }

    pub fn selected_section(&self) -> Section {
        Section::ALL[self.selected % Section::ALL.len()]
    }

    pub fn render(
        &self,
        f: &mut Frame,
        theme: &Theme,
        translator: &Translator,
        active: Section,
        layout: &mut LayoutState,
    ) {
        let (w, h) = PopupSize::Medium.dimensions();
        let area = center_rect(w, h, f.area());
        render_popup_background(f, area, theme);
        layout.menu_popup = Some(area);

        let block = popup_block(theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(Section::ALL.len() as u16),
                Constraint::Length(1),
            ])
            .split(inner);

        let title = Paragraph::new(popup_title(&translator.t("nav.menu"), theme))
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        for (i, section) in Section::ALL.into_iter().enumerate() {
            let row = chunks[1].y + i as u16;
            if row >= chunks[1].y + chunks[1].height {
                break;
            }
            let is_selected = i == self.selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let current = if section == active { " •" } else { "" };
            let line = Line::from(vec![
                Span::styled(marker, item_style(is_selected, theme)),
                Span::styled(translator.t(section.nav_key()), item_style(is_selected, theme)),
                Span::styled(current, Style::default().fg(theme.accent_color)),
            ]);
            let row_area = Rect::new(chunks[1].x + 2, row, chunks[1].width.saturating_sub(4), 1);
            f.render_widget(Paragraph::new(line), row_area);
            layout.push(row_area, HitTarget::MenuItem(section));
        }

        let footer = Line::from(vec![
            Span::styled("↑↓ Enter", Style::default().fg(theme.accent_color)),
            Span::styled(
                format!("  Esc: {}", translator.t("nav.closeMenu")),
                Style::default().fg(theme.dim_color),
            ),
        ]);
        f.render_widget(
            Paragraph::new(footer).alignment(Alignment::Center),
            chunks[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut menu = MobileMenuPopup::new();
        menu.reset(Section::Contact);
        assert_eq!(menu.selected_section(), Section::Contact);
        menu.next();
        assert_eq!(menu.selected_section(), Section::Hero);
        menu.prev();
        menu.prev();
        assert_eq!(menu.selected_section(), Section::Projects);
    }
}
