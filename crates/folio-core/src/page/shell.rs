//! Page shell - owns every piece of scroll-driven page state
//!
//! The shell is the single owner of the active section, the header (and
//! through it the scroll lock), the reveal controllers and the cursor. Hosts
//! forward their events here and render from the accessors.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::{
    ActiveSectionTracker, CursorState, NavigationHeader, PageChrome, PageHost, RevealController,
    Section, SmoothScroll,
};
use crate::constants::page::SMOOTH_SCROLL_DURATION;

pub struct PageShell<H: PageHost> {
    host: H,
    tracker: ActiveSectionTracker,
    header: NavigationHeader,
    chrome: PageChrome,
    reveals: RevealController,
    cursor: CursorState,
    animation: Option<SmoothScroll>,
    pending_target: Option<u32>,
    smooth_duration: Duration,
    torn_down: bool,
}

impl<H: PageHost> PageShell<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            tracker: ActiveSectionTracker::new(),
            header: NavigationHeader::new(),
            chrome: PageChrome::default(),
            reveals: RevealController::new(),
            cursor: CursorState::new(true),
            animation: None,
            pending_target: None,
            smooth_duration: SMOOTH_SCROLL_DURATION,
            torn_down: false,
        }
    }

    pub fn with_tracker(mut self, tracker: ActiveSectionTracker) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn with_chrome(mut self, chrome: PageChrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn with_cursor(mut self, enabled: bool) -> Self {
        self.cursor = CursorState::new(enabled);
        self
    }

    pub fn with_smooth_duration(mut self, duration: Duration) -> Self {
        self.smooth_duration = duration;
        self
    }

    /// Initial evaluation once the sections are in the document
    pub fn mount(&mut self, now: Instant) {
        info!(sections = self.tracker.order().len(), "Page mounted");
        self.evaluate(now);
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn active_section(&self) -> Section {
        self.tracker.active_section()
    }

    pub fn chrome(&self) -> &PageChrome {
        &self.chrome
    }

    pub fn header(&self) -> &NavigationHeader {
        &self.header
    }

    pub fn reveals(&self) -> &RevealController {
        &self.reveals
    }

    pub fn reveals_mut(&mut self) -> &mut RevealController {
        &mut self.reveals
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut CursorState {
        &mut self.cursor
    }

    pub fn is_menu_open(&self) -> bool {
        self.header.is_menu_open()
    }

    /// Offset of the content at the viewport top, including while locked
    pub fn visual_offset(&self) -> u32 {
        self.header
            .scroll_lock()
            .state()
            .map(|s| s.scroll_offset)
            .unwrap_or_else(|| self.host.scroll_y())
    }

    /// Scroll event from the host
    pub fn on_scroll(&mut self, now: Instant) {
        self.evaluate(now);
    }

    /// User scroll; ignored while the page is locked
    pub fn scroll_by(&mut self, delta: i64, now: Instant) -> bool {
        if self.torn_down || self.header.scroll_lock().is_locked() {
            return false;
        }
        self.animation = None;
        self.pending_target = None;

        let before = self.host.scroll_y();
        let target = (i64::from(before) + delta).max(0);
        self.host
            .scroll_to(u32::try_from(target).unwrap_or(u32::MAX));
        let moved = self.host.scroll_y() != before;
        if moved {
            self.evaluate(now);
        }
        moved
    }

    /// Apply a layout change (resize, section height) and re-evaluate
    pub fn update_layout(&mut self, now: Instant, change: impl FnOnce(&mut H)) {
        change(&mut self.host);
        self.evaluate(now);
    }

    /// Smooth-scroll to a section's anchor, closing the overlay first
    pub fn navigate_to(&mut self, section: Section, now: Instant) -> bool {
        let Some(bounds) = self.host.section_bounds(section) else {
            debug!(section = %section, "Navigation target not mounted");
            return false;
        };
        let target = (bounds.top + f64::from(self.visual_offset())).max(0.0).round() as u32;

        self.header.close_menu(&mut self.host);
        if section == Section::Projects {
            self.reveals.replay(section, now);
        }
        debug!(section = %section, target, "Navigating");
        self.pending_target = Some(target);
        true
    }

    pub fn scroll_to_top(&mut self) {
        self.header.close_menu(&mut self.host);
        self.pending_target = Some(0);
    }

    pub fn toggle_menu(&mut self, now: Instant) {
        self.header.toggle_menu(&mut self.host);
        // Closing leaves the host at 0 until the next frame restores the offset
        if !self.header.scroll_lock().has_pending_restore() {
            self.evaluate(now);
        }
    }

    pub fn close_menu(&mut self) {
        self.header.close_menu(&mut self.host);
    }

    /// Escape key; returns whether it closed the overlay
    pub fn handle_escape(&mut self) -> bool {
        self.header.handle_escape(&mut self.host)
    }

    /// Animation frame; returns whether another frame is needed soon
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.torn_down {
            return false;
        }
        let mut moved = self.header.on_animation_frame(&mut self.host);

        if let Some(target) = self.pending_target.take() {
            let target = target.min(self.host.max_scroll_y());
            self.animation = Some(match self.animation {
                Some(mut running) => {
                    running.retarget(now, target);
                    running
                }
                None => SmoothScroll::new(self.host.scroll_y(), target, now, self.smooth_duration),
            });
        }

        if let Some(animation) = self.animation {
            self.host.scroll_to(animation.sample(now));
            if animation.is_done(now) {
                self.animation = None;
            }
            moved = true;
        }

        if moved {
            self.evaluate(now);
        } else {
            self.reveals.update(&self.host, now);
        }

        self.animation.is_some()
            || self.header.scroll_lock().has_pending_restore()
            || self.reveals.is_animating(now)
    }

    /// Release the scroll lock and stop observing
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.animation = None;
        self.pending_target = None;
        self.header.teardown(&mut self.host);
        self.reveals.teardown();
        debug!("Page torn down");
    }

    fn evaluate(&mut self, now: Instant) {
        self.tracker.on_scroll(&self.host);
        self.chrome.on_scroll(self.visual_offset());
        self.reveals.update(&self.host, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{ScrollHost, StackedDocument};

    fn shell() -> PageShell<StackedDocument> {
        let mut doc = StackedDocument::new(80, 20);
        doc.mount(Section::Hero, 20);
        doc.mount(Section::About, 30);
        doc.mount(Section::Skills, 30);
        doc.mount(Section::Projects, 40);
        doc.mount(Section::Contact, 30);
        PageShell::new(doc)
            .with_chrome(PageChrome::new(2, 25))
            .with_smooth_duration(Duration::from_millis(100))
    }

    /// Tick until animations settle, returning the time reached
    fn settle(shell: &mut PageShell<StackedDocument>, start: Instant) -> Instant {
        let mut now = start;
        for _ in 0..200 {
            if !shell.tick(now) {
                break;
            }
            now += Duration::from_millis(16);
        }
        now
    }

    #[test]
    fn test_mount_evaluates_initial_state() {
        let now = Instant::now();
        let mut shell = shell();
        shell.mount(now);
        assert_eq!(shell.active_section(), Section::Hero);
        assert!(shell.reveals().is_revealed(Section::Hero));
        assert!(!shell.chrome().is_scrolled());
    }

    #[test]
    fn test_scroll_updates_section_and_chrome() {
        let now = Instant::now();
        let mut shell = shell();
        shell.mount(now);

        assert!(shell.scroll_by(60, now));
        assert_eq!(shell.active_section(), Section::Skills);
        assert!(shell.chrome().is_scrolled());
        assert!(shell.chrome().shows_scroll_to_top());
        assert!((shell.chrome().parallax_offset() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_menu_freezes_scrolling_and_restores_offset() {
        let now = Instant::now();
        let mut shell = shell();
        shell.mount(now);
        shell.scroll_by(33, now);

        shell.toggle_menu(now);
        assert!(shell.is_menu_open());
        assert!(!shell.scroll_by(10, now));
        assert_eq!(shell.visual_offset(), 33);
        assert!(shell.chrome().is_scrolled());

        assert!(shell.handle_escape());
        settle(&mut shell, now);
        assert_eq!(shell.host().scroll_y(), 33);
    }

    #[test]
    fn test_closing_menu_keeps_section_and_reveals() {
        let now = Instant::now();
        let mut shell = shell();
        shell.mount(now);
        shell.scroll_by(85, now);
        let now = settle(&mut shell, now) + Duration::from_secs(5);
        shell.tick(now);
        assert_eq!(shell.active_section(), Section::Projects);
        assert!((shell.reveals().get(Section::Projects).unwrap().progress(now) - 1.0).abs() < 1e-6);

        shell.toggle_menu(now);
        shell.toggle_menu(now);
        assert!(!shell.is_menu_open());
        assert_eq!(shell.active_section(), Section::Projects);
        assert!(shell.reveals().is_revealed(Section::Projects));

        shell.tick(now);
        assert_eq!(shell.host().scroll_y(), 85);
        assert_eq!(shell.active_section(), Section::Projects);
        assert!((shell.reveals().get(Section::Projects).unwrap().progress(now) - 1.0).abs() < 1e-6);
        assert!(!shell.reveals().is_animating(now));
    }

    #[test]
    fn test_navigate_from_menu_lands_on_anchor() {
        let now = Instant::now();
        let mut shell = shell();
        shell.mount(now);
        shell.scroll_by(10, now);
        shell.toggle_menu(now);

        assert!(shell.navigate_to(Section::Projects, now));
        assert!(!shell.is_menu_open());
        settle(&mut shell, now);

        assert_eq!(shell.host().scroll_y(), 80);
        assert_eq!(shell.active_section(), Section::Projects);
        assert!(shell.reveals().is_revealed(Section::Projects));
    }

    #[test]
    fn test_navigate_to_missing_section() {
        let mut doc = StackedDocument::new(80, 20);
        doc.mount(Section::Hero, 40);
        let mut shell = PageShell::new(doc);
        assert!(!shell.navigate_to(Section::Contact, Instant::now()));
    }

    #[test]
    fn test_user_scroll_cancels_navigation() {
        let now = Instant::now();
        let mut shell = shell();
        shell.mount(now);
        shell.navigate_to(Section::Contact, now);
        shell.tick(now + Duration::from_millis(20));

        shell.scroll_by(1, now + Duration::from_millis(30));
        let here = shell.host().scroll_y();
        settle(&mut shell, now + Duration::from_millis(40));
        assert_eq!(shell.host().scroll_y(), here);
    }

    #[test]
    fn test_scroll_to_top() {
        let now = Instant::now();
        let mut shell = shell();
        shell.mount(now);
        shell.scroll_by(90, now);
        shell.scroll_to_top();
        settle(&mut shell, now);
        assert_eq!(shell.host().scroll_y(), 0);
        assert_eq!(shell.active_section(), Section::Hero);
    }

    #[test]
    fn test_teardown_releases_lock() {
        let now = Instant::now();
        let mut shell = shell();
        shell.mount(now);
        shell.scroll_by(42, now);
        shell.toggle_menu(now);

        shell.teardown();
        shell.teardown();
        assert!(!shell.host().is_scroll_frozen());
        assert_eq!(shell.host().scroll_y(), 42);
        assert!(!shell.tick(now));
    }
}
