//! Navigation header - owner mark, section links, language and menu buttons

use folio_core::{Locale, Section, Translator};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::{HitTarget, LayoutState};
use crate::tui::themes::Theme;

/// Below this width the section links collapse into the menu button
pub const COMPACT_WIDTH: u16 = 90;

/// Header rows, including the bottom rule
pub const HEADER_HEIGHT: u16 = 2;

pub struct HeaderView<'a> {
    pub owner: &'a str,
    pub active: Section,
    pub scrolled: bool,
    pub menu_open: bool,
    pub locale: Locale,
    pub translator: &'a Translator,
}

/// Render the header and register its click targets
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    view: &HeaderView<'_>,
    layout: &mut LayoutState,
) {
    // Compact style once the page moves
    let (bg, rule) = if view.scrolled {
        (theme.header_scrolled_bg_color, theme.border_color)
    } else {
        (theme.bg_color, theme.bg_color)
    };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(rule))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let buf = f.buffer_mut();
    let y = inner.y;

    let mark = format!(" ◆ {}", view.owner);
    let mark_width = mark.width() as u16;
    buf.set_stringn(
        inner.x,
        y,
        &mark,
        inner.width as usize,
        Style::default()
            .fg(theme.title_color)
            .add_modifier(Modifier::BOLD),
    );
    layout.push(
        Rect::new(inner.x, y, mark_width.min(inner.width), 1),
        HitTarget::Nav(Section::Hero),
    );

    let mut items: Vec<(String, Style, HitTarget)> = Vec::new();
    if area.width >= COMPACT_WIDTH {
        for section in Section::ALL {
            let style = if section == view.active {
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text_color)
            };
            items.push((
                view.translator.t(section.nav_key()),
                style,
                HitTarget::Nav(section),
            ));
        }
    }
    items.push((
        format!("◍ {}", view.locale.code().to_uppercase()),
        Style::default().fg(theme.dim_color),
        HitTarget::LanguageButton,
    ));
    if area.width < COMPACT_WIDTH {
        let icon = if view.menu_open { "✕" } else { "☰" };
        items.push((
            icon.to_string(),
            Style::default().fg(theme.accent_color),
            HitTarget::MenuButton,
        ));
    }

    const GAP: u16 = 2;
    let total: u16 = items.iter().map(|(label, _, _)| label.width() as u16 + GAP).sum();
    let mut x = (inner.x + inner.width).saturating_sub(total);
    if x < inner.x + mark_width + GAP {
        return;
    }

    for (label, style, target) in items {
        let width = label.width() as u16;
        buf.set_string(x, y, &label, style);
        layout.push(Rect::new(x, y, width, 1), target);
        x += width + GAP;
    }
}
