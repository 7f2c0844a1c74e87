//! Keyboard event handlers
//!
//! Main keyboard input handling. Popup-specific key handlers are in popup_keys.rs.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::contact::Field;
use folio_core::Section;

use crate::tui::app::{App, Popup};

/// Rows moved per arrow key
const LINE_STEP: i64 = 1;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            return;
        }
        let code = key_event.code;
        let modifiers = key_event.modifiers;
        let now = Instant::now();

        if modifiers.contains(KeyModifiers::CONTROL)
            && matches!(code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        match self.popup() {
            Popup::Language => return self.handle_language_key(code),
            Popup::Menu => return self.handle_menu_key(code, now),
            Popup::None => {}
        }

        if let Some(field) = self.contact_focus {
            self.handle_form_key(field, code, modifiers);
            return;
        }

        let page_step = i64::from(self.layout.body.height.saturating_sub(2).max(1));
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                self.page.scroll_by(LINE_STEP, now);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.page.scroll_by(-LINE_STEP, now);
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.page.scroll_by(page_step, now);
            }
            KeyCode::PageUp => {
                self.page.scroll_by(-page_step, now);
            }
            KeyCode::Home | KeyCode::Char('g') => self.page.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => {
                self.page.navigate_to(Section::Contact, now);
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.page.navigate_to(Section::ALL[index], now);
            }
            KeyCode::Tab => self.navigate_relative(1, now),
            KeyCode::BackTab => self.navigate_relative(-1, now),
            KeyCode::Char('m') => self.toggle_menu(now),
            KeyCode::Char('l') => self.language.toggle(self.translator.locale()),
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('f') => self.listing.cycle_filter(true),
            KeyCode::Char('F') => self.listing.cycle_filter(false),
            KeyCode::Char('r') => self.refresh_projects(),
            KeyCode::Char('c') => self.focus_contact(Field::Name, now),
            KeyCode::Esc => {
                self.page.handle_escape();
            }
            _ => {}
        }
    }

    /// Jump to the section before or after the active one
    fn navigate_relative(&mut self, step: isize, now: Instant) {
        let order = Section::ALL;
        let current = order
            .iter()
            .position(|s| *s == self.page.active_section())
            .unwrap_or(0) as isize;
        let target = (current + step).clamp(0, order.len() as isize - 1) as usize;
        self.page.navigate_to(order[target], now);
    }

    pub(crate) fn toggle_menu(&mut self, now: Instant) {
        self.page.toggle_menu(now);
        if self.page.is_menu_open() {
            self.menu.reset(self.page.active_section());
        }
    }

    /// Bring the form into view and start editing a field
    pub(crate) fn focus_contact(&mut self, field: Field, now: Instant) {
        if self.page.active_section() != Section::Contact {
            self.page.navigate_to(Section::Contact, now);
        }
        self.contact_focus = Some(field);
    }

    fn handle_form_key(&mut self, field: Field, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if code == KeyCode::Char('s') {
                self.submit_contact();
            }
            return;
        }
        if self.contact.status().is_sending() && code != KeyCode::Esc {
            return;
        }

        match code {
            KeyCode::Esc => self.contact_focus = None,
            KeyCode::Tab => self.contact_focus = Some(field.next()),
            KeyCode::BackTab => self.contact_focus = Some(field.prev()),
            KeyCode::Enter if field.is_multiline() => self.contact.insert_char(field, '\n'),
            KeyCode::Enter => self.contact_focus = Some(field.next()),
            KeyCode::Backspace => self.contact.delete_char(field),
            KeyCode::Char(c) => self.contact.insert_char(field, c),
            _ => {}
        }
    }
}
