//! Repository listing updates

use std::time::Instant;

use tracing::debug;

use folio_core::projects::LoadStatus;
use folio_core::Section;

use crate::tui::app::App;
use crate::tui::components::Toast;

impl App {
    /// Drain refresh results; returns whether the listing changed
    pub fn poll_projects(&mut self) -> bool {
        let Some(handle) = self.channels.projects.as_mut() else {
            return false;
        };

        let mut changed = false;
        while let Some(result) = handle.try_recv() {
            let before = self.listing.status();
            self.listing.apply(result);
            if self.listing.status() == LoadStatus::Failed && before != LoadStatus::Failed {
                let message = self.translator.t("projects.error");
                self.toasts.push(Toast::error(message), Instant::now());
            }
            changed = true;
        }
        if changed {
            let cards = self.listing.visible().count();
            if let Some(reveal) = self.page.reveals_mut().get_mut(Section::Projects) {
                reveal.set_children(cards);
            }
        }

        if handle.is_finished() {
            debug!("Refresh task stopped");
            self.channels.projects = None;
        }
        changed
    }

    /// Manual refresh from the keyboard
    pub(crate) fn refresh_projects(&mut self) {
        match &self.channels.projects {
            Some(handle) => {
                handle.refresh_now();
                self.show_toast(Toast::info(self.translator.t("projects.loading")));
            }
            None => debug!("No refresh task running"),
        }
    }
}
