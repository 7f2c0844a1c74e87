//! Popup keyboard event handlers

use std::time::Instant;

use crossterm::event::KeyCode;
use folio_core::i18n::SelectorKey;

use crate::tui::app::App;

impl App {
    /// Keys while the language dropdown is open
    pub(crate) fn handle_language_key(&mut self, code: KeyCode) {
        let key = match code {
            KeyCode::Up | KeyCode::Char('k') => SelectorKey::Up,
            KeyCode::Down | KeyCode::Char('j') => SelectorKey::Down,
            KeyCode::Enter => SelectorKey::Enter,
            KeyCode::Esc | KeyCode::Char('l') => SelectorKey::Escape,
            _ => return,
        };
        if let Some(locale) = self.language.handle_key(key, self.translator.locale()) {
            self.set_locale(locale);
        }
    }

    /// Keys while the mobile menu is open
    pub(crate) fn handle_menu_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Esc => {
                self.page.handle_escape();
            }
            KeyCode::Char('m') => self.toggle_menu(now),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.menu.prev(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.menu.next(),
            KeyCode::Enter => {
                let section = self.menu.selected_section();
                self.page.navigate_to(section, now);
            }
            _ => {}
        }
    }
}
