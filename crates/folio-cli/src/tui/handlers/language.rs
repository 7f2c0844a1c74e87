//! Language switching

use tracing::{info, warn};

use folio_core::Locale;

use crate::tui::app::App;
use crate::tui::components::Toast;

impl App {
    /// Switch the interface language and remember the choice
    pub(crate) fn set_locale(&mut self, locale: Locale) {
        if !self.translator.set_locale(locale) {
            return;
        }
        info!(locale = locale.code(), "Language changed");
        self.contact
            .set_error_message(self.translator.t("contact.form.error"));

        if let Some(preferences) = &self.preferences {
            if let Err(e) = preferences.set_locale(locale) {
                warn!("Failed to save language: {}", e);
            }
        }
        self.show_toast(Toast::info(format!("{} {}", locale.flag(), locale.label())));
    }
}
