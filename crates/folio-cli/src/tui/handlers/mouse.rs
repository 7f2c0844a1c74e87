//! Mouse event handlers

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tracing::{debug, warn};

use crate::tui::app::App;
use crate::tui::state::{DocTarget, HitTarget};

/// Rows per wheel notch
const WHEEL_STEP: i64 = 3;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let now = Instant::now();
        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                if !self.page.is_menu_open() {
                    self.page.scroll_by(WHEEL_STEP, now);
                }
            }
            MouseEventKind::ScrollUp => {
                if !self.page.is_menu_open() {
                    self.page.scroll_by(-WHEEL_STEP, now);
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.handle_hover(x, y),
            MouseEventKind::Down(MouseButton::Left) => {
                self.page.cursor_mut().on_down();
                self.handle_click(x, y, now);
            }
            MouseEventKind::Up(MouseButton::Left) => self.page.cursor_mut().on_up(),
            _ => {}
        }
    }

    fn handle_hover(&mut self, x: u16, y: u16) {
        let hit = self.layout.hit(x, y).cloned();
        let cursor = self.page.cursor_mut();
        cursor.on_move(u32::from(x), u32::from(y));
        cursor.set_link_hovered(hit.is_some());

        if let Some(HitTarget::LanguageItem(locale)) = hit {
            self.language.hover(locale.index());
        }
    }

    fn handle_click(&mut self, x: u16, y: u16, now: Instant) {
        let hit = self.layout.hit(x, y).cloned();
        let pos = Position::new(x, y);

        // Outside presses dismiss the dropdown, then proceed as usual
        if self.language.is_open() {
            let in_list = self
                .layout
                .language_popup
                .is_some_and(|area| area.contains(pos));
            if in_list && !matches!(hit, Some(HitTarget::LanguageItem(_))) {
                return;
            }
            if !in_list && hit != Some(HitTarget::LanguageButton) {
                self.language.click_outside();
            }
        }

        // The menu overlay swallows presses that miss it
        if self.page.is_menu_open()
            && !self.layout.in_menu_popup(x, y)
            && hit != Some(HitTarget::MenuButton)
        {
            self.page.close_menu();
            return;
        }
        if self.layout.in_menu_popup(x, y) && !matches!(hit, Some(HitTarget::MenuItem(_))) {
            return;
        }

        let Some(hit) = hit else {
            self.contact_focus = None;
            return;
        };
        debug!(?hit, "Click");

        match hit {
            HitTarget::Nav(section) | HitTarget::MenuItem(section) => {
                self.contact_focus = None;
                self.page.navigate_to(section, now);
            }
            HitTarget::MenuButton => self.toggle_menu(now),
            HitTarget::LanguageButton => self.language.toggle(self.translator.locale()),
            HitTarget::LanguageItem(locale) => {
                let chosen = self.language.select(locale);
                self.set_locale(chosen);
            }
            HitTarget::ScrollToTop => self.page.scroll_to_top(),
            HitTarget::Doc(target) => self.activate(target, now),
        }
    }

    fn activate(&mut self, target: DocTarget, now: Instant) {
        match target {
            DocTarget::Url(url) => {
                if let Err(e) = open::that_detached(&url) {
                    warn!(url = %url, "Failed to open link: {}", e);
                }
            }
            DocTarget::Section(section) => {
                self.contact_focus = None;
                self.page.navigate_to(section, now);
            }
            DocTarget::Field(field) => self.contact_focus = Some(field),
            DocTarget::Submit => self.submit_contact(),
        }
    }
}
