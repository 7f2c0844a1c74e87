//! Status bar component - bottom bar with location and shortcuts

use folio_core::projects::LoadStatus;
use folio_core::{Section, Translator};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    translator: &Translator,
    active: Section,
    projects: LoadStatus,
    editing: bool,
) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let section = translator.t(active.nav_key());
    let (listing, listing_color) = match projects {
        LoadStatus::Loading => ("…", theme.warning_color),
        LoadStatus::Loaded => ("●", theme.success_color),
        LoadStatus::Failed => ("●", theme.error_color),
    };
    let locale = translator.locale().code().to_uppercase();

    let left_spans = vec![
        Span::raw(" "),
        Span::styled(section.clone(), Style::default().fg(theme.accent_color)),
        Span::styled(" │ ", Style::default().fg(theme.dim_color)),
        Span::styled(locale.clone(), Style::default().fg(theme.dim_color)),
        Span::styled(" │ ", Style::default().fg(theme.dim_color)),
        Span::styled(listing, Style::default().fg(listing_color)),
    ];
    let left_width = (1 + section.width() + 3 + locale.width() + 3 + listing.width()) as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width), Constraint::Fill(1)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

    let commands = build_commands_for_width(chunks[1].width as usize, theme, translator, editing);
    f.render_widget(
        Paragraph::new(Line::from(commands)).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Key hints, highest priority first, as many as fit
fn build_commands_for_width<'a>(
    width: usize,
    theme: &Theme,
    translator: &Translator,
    editing: bool,
) -> Vec<Span<'a>> {
    let commands: &[(&str, &str)] = if editing {
        &[
            (" ^S ", "status.send"),
            (" Esc ", "status.leave"),
            (" Tab ", "status.nextField"),
        ]
    } else {
        &[
            (" q ", "status.quit"),
            (" ↑↓ ", "status.scroll"),
            (" 1-5 ", "status.navigate"),
            (" m ", "status.menu"),
            (" l ", "status.language"),
            (" c ", "status.contact"),
            (" f ", "status.filter"),
            (" r ", "status.refresh"),
        ]
    };

    let mut spans = Vec::new();
    let mut used_width = 0;
    for (key, desc_key) in commands {
        let desc = format!(" {} ", translator.t(desc_key));
        let cmd_width = key.width() + desc.width();
        if used_width + cmd_width > width {
            break;
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().bg(theme.border_color).fg(theme.text_color),
        ));
        spans.push(Span::styled(desc, Style::default().fg(theme.dim_color)));
        used_width += cmd_width;
    }
    spans
}
