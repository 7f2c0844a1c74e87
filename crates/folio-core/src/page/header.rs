//! Navigation header with a full-screen mobile overlay
//!
//! Opening the overlay locks page scrolling; closing it unlocks. The header
//! is the only owner of the page's [`ScrollLock`].

use tracing::debug;

use super::{ScrollHost, ScrollLock};

#[derive(Debug, Default)]
pub struct NavigationHeader {
    menu_open: bool,
    lock: ScrollLock,
}

impl NavigationHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }

    pub fn open_menu<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.menu_open {
            return;
        }
        debug!("Mobile menu opened");
        self.menu_open = true;
        self.lock.lock(host);
    }

    pub fn close_menu<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if !self.menu_open {
            return;
        }
        debug!("Mobile menu closed");
        self.menu_open = false;
        self.lock.unlock(host);
    }

    pub fn toggle_menu<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.menu_open {
            self.close_menu(host);
        } else {
            self.open_menu(host);
        }
    }

    /// Escape closes the overlay; returns whether it was open
    pub fn handle_escape<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let was_open = self.menu_open;
        self.close_menu(host);
        was_open
    }

    /// Run the deferred scroll restoration, if any
    pub fn on_animation_frame<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.lock.on_animation_frame(host)
    }

    /// Release the lock immediately
    pub fn teardown<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        self.menu_open = false;
        self.lock.release(host);
    }
}
