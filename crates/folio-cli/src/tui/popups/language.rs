//! Language dropdown under the header's language button

use folio_core::i18n::LanguageSelector;
use folio_core::{Locale, Translator};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::common::{anchored_rect, item_style, popup_block, render_popup_background, PopupSize};
use crate::tui::state::{HitTarget, LayoutState};
use crate::tui::themes::Theme;

/// Render the open dropdown below `anchor` and register its entries
pub fn render_language_dropdown(
    f: &mut Frame,
    anchor: Rect,
    selector: &LanguageSelector,
    translator: &Translator,
    theme: &Theme,
    layout: &mut LayoutState,
) {
    let (w, _) = PopupSize::Small.dimensions();
    let height = Locale::ALL.len() as u16 + 2;
    let area = anchored_rect(anchor, w, height, f.area());
    if area.height < 3 {
        return;
    }
    render_popup_background(f, area, theme);
    layout.language_popup = Some(area);

    let block = popup_block(theme).title(Span::styled(
        format!(" {} ", translator.t("nav.language")),
        Style::default().fg(theme.dim_color),
    ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    for (i, locale) in Locale::ALL.into_iter().enumerate() {
        let row = inner.y + i as u16;
        if row >= inner.y + inner.height {
            break;
        }
        let highlighted = i == selector.active_index();
        let check = if locale == translator.locale() { " ✓" } else { "" };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} {}", locale.flag(), locale.label()),
                item_style(highlighted, theme),
            ),
            Span::styled(check, Style::default().fg(theme.success_color)),
        ]);
        let row_area = Rect::new(inner.x, row, inner.width, 1);
        f.render_widget(Paragraph::new(line), row_area);
        layout.push(row_area, HitTarget::LanguageItem(locale));
    }
}
