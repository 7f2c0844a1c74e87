//! Language dropdown state

use tracing::debug;

use super::Locale;

/// Keys the dropdown reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKey {
    Up,
    Down,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Default)]
pub struct LanguageSelector {
    open: bool,
    active_index: usize,
}

impl LanguageSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Highlighted row
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_locale(&self) -> Locale {
        Locale::ALL
            .get(self.active_index)
            .copied()
            .unwrap_or_default()
    }

    /// Open with the current language highlighted
    pub fn open(&mut self, current: Locale) {
        self.open = true;
        self.active_index = current.index();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self, current: Locale) {
        if self.open {
            self.close();
        } else {
            self.open(current);
        }
    }

    /// Pointer moved over a row
    pub fn hover(&mut self, index: usize) {
        if index < Locale::ALL.len() {
            self.active_index = index;
        }
    }

    /// A press landed outside the button and the list
    pub fn click_outside(&mut self) {
        self.close();
    }

    /// Choose a language and close
    pub fn select(&mut self, locale: Locale) -> Locale {
        debug!(locale = %locale, "Language selected");
        self.close();
        locale
    }

    /// Keyboard handling; returns the chosen language on Enter
    ///
    /// While closed, Down and Enter open the list.
    pub fn handle_key(&mut self, key: SelectorKey, current: Locale) -> Option<Locale> {
        let len = Locale::ALL.len();
        if !self.open {
            if matches!(key, SelectorKey::Down | SelectorKey::Enter) {
                self.open(current);
            }
            return None;
        }

        match key {
            SelectorKey::Down => self.active_index = (self.active_index + 1) % len,
            SelectorKey::Up => self.active_index = (self.active_index + len - 1) % len,
            SelectorKey::Enter => return Some(self.select(self.active_locale())),
            SelectorKey::Escape => self.close(),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_highlights_current() {
        let mut selector = LanguageSelector::new();
        selector.open(Locale::Pt);
        assert!(selector.is_open());
        assert_eq!(selector.active_locale(), Locale::Pt);
    }

    #[test]
    fn test_arrows_wrap_and_enter_selects() {
        let mut selector = LanguageSelector::new();
        assert_eq!(selector.handle_key(SelectorKey::Down, Locale::En), None);
        assert!(selector.is_open());
        assert_eq!(selector.active_index(), 0);

        selector.handle_key(SelectorKey::Up, Locale::En);
        assert_eq!(selector.active_locale(), Locale::Pt);
        selector.handle_key(SelectorKey::Down, Locale::En);
        assert_eq!(selector.active_locale(), Locale::En);
        selector.handle_key(SelectorKey::Down, Locale::En);

        assert_eq!(
            selector.handle_key(SelectorKey::Enter, Locale::En),
            Some(Locale::Pt)
        );
        assert!(!selector.is_open());
    }

    #[test]
    fn test_escape_and_outside_click_close() {
        let mut selector = LanguageSelector::new();
        selector.toggle(Locale::En);
        assert_eq!(selector.handle_key(SelectorKey::Escape, Locale::En), None);
        assert!(!selector.is_open());

        selector.toggle(Locale::En);
        selector.click_outside();
        assert!(!selector.is_open());

        // Escape while closed does nothing
        selector.handle_key(SelectorKey::Escape, Locale::En);
        assert!(!selector.is_open());
    }

    #[test]
    fn test_hover_ignores_out_of_range() {
        let mut selector = LanguageSelector::new();
        selector.open(Locale::En);
        selector.hover(1);
        assert_eq!(selector.active_index(), 1);
        selector.hover(5);
        assert_eq!(selector.active_index(), 1);
    }
}
