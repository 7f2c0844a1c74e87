//! UI rendering coordinator
//!
//! Builds the document, keeps the page geometry in sync with it, then draws
//! the visible slice and the chrome on top.

mod sections;

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use folio_core::Section;

use crate::tui::app::App;
use crate::tui::components::{
    render_cursor, render_header, render_page_scrollbar, render_scroll_to_top, render_status_bar,
    render_toasts, HeaderView, HEADER_HEIGHT,
};
use crate::tui::popups::render_language_dropdown;
use crate::tui::state::{DocLine, HitTarget};

use sections::PageContent;

/// Columns left blank on each side of the content
const MARGIN: u16 = 2;

/// Columns a revealing row slides in from
const REVEAL_SLIDE: f32 = 4.0;

/// Narrowest width sections are laid out at
const MIN_CONTENT_WIDTH: usize = 16;

/// Layout passes per frame; a second one absorbs the scrollbar appearing
const LAYOUT_PASSES: usize = 2;

/// Document rows for one frame
struct BuiltPage {
    sections: Vec<(Section, Vec<DocLine>)>,
    footer: Vec<DocLine>,
}

impl BuiltPage {
    fn heights(&self) -> Vec<(Section, u32)> {
        self.sections
            .iter()
            .map(|(section, lines)| (*section, lines.len() as u32))
            .collect()
    }

    /// Row at a document offset, with the section it belongs to
    fn row(&self, index: usize) -> Option<(Option<Section>, usize, &DocLine)> {
        let mut start = 0;
        for (section, lines) in &self.sections {
            if index < start + lines.len() {
                return Some((Some(*section), index - start, &lines[index - start]));
            }
            start += lines.len();
        }
        self.footer
            .get(index - start)
            .map(|line| (None, index - start, line))
    }

    fn section_lines(&self, section: Section) -> &[DocLine] {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, lines)| lines.as_slice())
            .unwrap_or_default()
    }
}

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&mut self, f: &mut Frame, now: Instant) {
        self.layout.clear();
        let area = f.area();
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, area);

        let [header, body, status] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);
        self.layout.body = body;

        let page = self.relayout(body, now);
        self.render_body(f, body, &page, now);

        if self.page.chrome().shows_scroll_to_top() && !self.page.is_menu_open() {
            if let Some(button) = render_scroll_to_top(f, body, &self.theme) {
                self.layout.push(button, HitTarget::ScrollToTop);
            }
        }

        let active = self.page.active_section();
        let view = HeaderView {
            owner: &self.config.owner,
            active,
            scrolled: self.page.chrome().is_scrolled(),
            menu_open: self.page.is_menu_open(),
            locale: self.translator.locale(),
            translator: &self.translator,
        };
        render_header(f, header, &self.theme, &view, &mut self.layout);

        render_status_bar(
            f,
            status,
            &self.theme,
            &self.translator,
            active,
            self.listing.status(),
            self.contact_focus.is_some(),
        );

        if self.page.is_menu_open() {
            self.menu
                .render(f, &self.theme, &self.translator, active, &mut self.layout);
        }
        if self.language.is_open() {
            if let Some(anchor) = self.layout.area_of(&HitTarget::LanguageButton) {
                render_language_dropdown(
                    f,
                    anchor,
                    &self.language,
                    &self.translator,
                    &self.theme,
                    &mut self.layout,
                );
            }
        }

        render_toasts(f.buffer_mut(), area, &self.toasts, &self.theme, now);
        render_cursor(f.buffer_mut(), area, self.page.cursor(), &self.theme);
    }

    fn build_page(&self, viewport_height: u16) -> BuiltPage {
        let width = (self.page.host().content_width() as usize)
            .saturating_sub(2 * MARGIN as usize)
            .max(MIN_CONTENT_WIDTH);
        let content = PageContent {
            translator: &self.translator,
            theme: &self.theme,
            owner: &self.config.owner,
            profile: &self.config.profile,
            listing: &self.listing,
            contact: &self.contact,
            focus: self.contact_focus,
            width,
        };
        BuiltPage {
            sections: Section::ALL
                .into_iter()
                .map(|section| (section, content.build(section, viewport_height.into())))
                .collect(),
            footer: content.footer(),
        }
    }

    /// Rebuild the document and push changed heights into the page
    fn relayout(&mut self, body: Rect, now: Instant) -> BuiltPage {
        let viewport = (u32::from(body.width), u32::from(body.height));
        if self.page.host().viewport_size() != viewport {
            self.page
                .update_layout(now, |doc| doc.set_viewport(viewport.0, viewport.1));
        }

        let mut page = self.build_page(body.height);
        for _ in 0..LAYOUT_PASSES {
            let heights = page.heights();
            let footer = page.footer.len() as u32;

            let doc = self.page.host();
            let mounted: Vec<(Section, u32)> = doc.sections().collect();
            let mounted_footer =
                doc.content_height() - mounted.iter().map(|(_, h)| *h).sum::<u32>();
            if mounted == heights && mounted_footer == footer {
                break;
            }

            let width = doc.content_width();
            self.page.update_layout(now, |doc| {
                for (section, height) in heights {
                    doc.mount(section, height);
                }
                doc.set_footer_height(footer);
            });
            if self.page.host().content_width() == width {
                break;
            }
            page = self.build_page(body.height);
        }
        page
    }

    /// Draw the rows under the viewport with their reveal transitions
    fn render_body(&mut self, f: &mut Frame, body: Rect, page: &BuiltPage, now: Instant) {
        let offset = self.page.visual_offset() as usize;
        let content_width = (self.page.host().content_width() as u16).min(body.width);
        let text_width = content_width.saturating_sub(2 * MARGIN);
        let parallax = self.page.chrome().parallax_offset().round().max(0.0) as usize;
        let hero_len = page.section_lines(Section::Hero).len();

        for row in 0..body.height {
            let index = offset + usize::from(row);
            let Some((section, local, line)) = page.row(index) else {
                break;
            };

            // Hero content drifts down slower than the page scrolls
            let line = if section == Some(Section::Hero) {
                match local.checked_sub(parallax) {
                    Some(shifted) if shifted < hero_len => {
                        &page.section_lines(Section::Hero)[shifted]
                    }
                    _ => continue,
                }
            } else {
                line
            };

            let progress = match section.and_then(|s| self.page.reveals().get(s)) {
                Some(reveal) => match line.child {
                    Some(child) => reveal.staggered_progress(now, child),
                    None => reveal.progress(now),
                },
                None => 1.0,
            };
            if progress <= 0.0 {
                continue;
            }

            let slide = ((1.0 - progress) * REVEAL_SLIDE).round() as u16;
            let x = body.x + MARGIN + slide;
            let y = body.y + row;
            let width = text_width.saturating_sub(slide);
            let (end, _) = f.buffer_mut().set_line(x, y, &line.line, width);
            let drawn = Rect::new(x, y, end.saturating_sub(x), 1);

            if progress < 1.0 {
                f.buffer_mut()
                    .set_style(drawn, Style::default().fg(self.theme.dim_color));
            }
            if let Some(target) = &line.target {
                self.layout.push(drawn, HitTarget::Doc(target.clone()));
            }
        }

        if self.page.host().has_scrollbar() && body.width > 0 {
            let track = Rect::new(body.x + body.width - 1, body.y, 1, body.height);
            render_page_scrollbar(
                f.buffer_mut(),
                track,
                offset,
                self.page.host().content_height() as usize,
                usize::from(body.height),
                &self.theme,
            );
        }
    }
}
