//! Theme switching

use std::sync::Arc;

use tracing::{info, warn};

use crate::tui::app::App;
use crate::tui::components::Toast;
use crate::tui::themes::THEME_REGISTRY;

impl App {
    /// Apply a theme by name and persist it
    pub(crate) fn set_theme(&mut self, name: &str) {
        if !THEME_REGISTRY.contains(name) {
            warn!(theme = %name, "Unknown theme");
            return;
        }
        let theme = THEME_REGISTRY.get_or_default(name).clone();
        info!(theme = %name, "Theme changed");
        self.show_toast(Toast::info(theme.display_name.clone()));
        self.theme = Arc::new(theme);
        self.theme_name = name.to_string();

        if let Some(preferences) = &self.preferences {
            if let Err(e) = preferences.set_theme(name) {
                warn!("Failed to save theme: {}", e);
            }
        }
    }

    pub(crate) fn cycle_theme(&mut self) {
        let next = THEME_REGISTRY.next_name(&self.theme_name).to_string();
        self.set_theme(&next);
    }
}
