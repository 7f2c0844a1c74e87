//! Body scroll lock
//!
//! Freezes the document while an overlay is open by pinning the body at its
//! current offset, and restores that exact offset afterwards. The restoration
//! is applied on the next animation frame, after the host has re-laid out the
//! unpinned body.

use tracing::debug;

use super::{Position, ScrollHost};

/// What `lock()` captured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockedState {
    /// Offset the document was scrolled to
    pub scroll_offset: u32,
    /// Scrollbar width reserved as right padding (0 when none was visible)
    pub scrollbar_compensation: u32,
    /// Right padding present before locking
    pub previous_padding: Option<u32>,
}

/// Idempotent lock/unlock coordinator for a page body
#[derive(Debug, Default)]
pub struct ScrollLock {
    state: Option<LockedState>,
    pending_restore: Option<u32>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_some()
    }

    /// Captured state while locked
    pub fn state(&self) -> Option<&LockedState> {
        self.state.as_ref()
    }

    /// An unlock is waiting for the next frame to restore its offset
    pub fn has_pending_restore(&self) -> bool {
        self.pending_restore.is_some()
    }

    /// Pin the body at the current scroll offset
    pub fn lock<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.state.is_some() {
            return;
        }

        // Relocking before the restore frame: the host still sits at 0
        let scroll_offset = self
            .pending_restore
            .take()
            .unwrap_or_else(|| host.scroll_y());
        let scrollbar = host.inner_width().saturating_sub(host.client_width());

        let mut style = host.body_style().clone();
        let previous_padding = style.padding_right;
        if scrollbar > 0 {
            style.padding_right = Some(scrollbar);
        }
        style.position = Position::Fixed;
        style.top = Some(-i64::from(scroll_offset));
        style.left = Some(0);
        style.right = Some(0);
        style.full_width = true;
        host.set_body_style(style);

        debug!(scroll_offset, scrollbar, "Scroll locked");
        self.state = Some(LockedState {
            scroll_offset,
            scrollbar_compensation: scrollbar,
            previous_padding,
        });
    }

    /// Unpin the body; the offset is restored on the next animation frame
    pub fn unlock<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        let Some(state) = self.state.take() else {
            return;
        };

        let mut style = host.body_style().clone();
        let applied = style
            .top
            .map(i64::unsigned_abs)
            .filter(|top| *top > 0)
            .and_then(|top| u32::try_from(top).ok());

        style.position = Position::Static;
        style.top = None;
        style.left = None;
        style.right = None;
        style.full_width = false;
        style.padding_right = state.previous_padding;
        host.set_body_style(style);

        let restore = applied.unwrap_or(state.scroll_offset);
        debug!(restore, "Scroll unlocked");
        self.pending_restore = Some(restore);
    }

    /// Apply a pending restoration; returns whether the host was scrolled
    pub fn on_animation_frame<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> bool {
        match self.pending_restore.take() {
            Some(offset) => {
                host.scroll_to(offset);
                true
            }
            None => false,
        }
    }

    /// Unlock and restore immediately, for teardown where no further frame runs
    pub fn release<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        self.unlock(host);
        self.on_animation_frame(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{BodyStyle, Section, StackedDocument};

    fn page() -> StackedDocument {
        let mut doc = StackedDocument::new(80, 20);
        doc.mount(Section::Hero, 20);
        doc.mount(Section::About, 40);
        doc.mount(Section::Skills, 40);
        doc
    }

    #[test]
    fn test_lock_unlock_restores_exact_offset() {
        let mut doc = page();
        doc.scroll_to(37);
        let mut lock = ScrollLock::new();

        lock.lock(&mut doc);
        assert!(lock.is_locked());
        assert_eq!(doc.body_style().top, Some(-37));
        assert_eq!(doc.body_style().padding_right, Some(1));
        assert_eq!(doc.visual_offset(), 37);

        lock.unlock(&mut doc);
        assert!(!lock.is_locked());
        assert!(lock.has_pending_restore());
        assert_eq!(doc.body_style(), &BodyStyle::default());

        assert!(lock.on_animation_frame(&mut doc));
        assert_eq!(doc.scroll_y(), 37);
        assert!(!lock.on_animation_frame(&mut doc));
    }

    #[test]
    fn test_second_lock_is_noop() {
        let mut doc = page();
        doc.scroll_to(12);
        let mut lock = ScrollLock::new();
        lock.lock(&mut doc);
        let captured = *lock.state().unwrap();
        let style = doc.body_style().clone();

        lock.lock(&mut doc);
        assert_eq!(lock.state(), Some(&captured));
        assert_eq!(doc.body_style(), &style);
        assert_eq!(captured.scroll_offset, 12);

        lock.unlock(&mut doc);
        lock.on_animation_frame(&mut doc);
        assert_eq!(doc.scroll_y(), 12);
    }

    #[test]
    fn test_unlock_without_lock_is_noop() {
        let mut doc = page();
        doc.scroll_to(5);
        let mut lock = ScrollLock::new();
        lock.unlock(&mut doc);

        assert!(!lock.has_pending_restore());
        assert_eq!(doc.scroll_y(), 5);
        assert_eq!(doc.body_style(), &BodyStyle::default());
    }

    #[test]
    fn test_previous_padding_is_restored() {
        let mut doc = page();
        doc.set_body_style(BodyStyle {
            padding_right: Some(3),
            ..BodyStyle::default()
        });
        let mut lock = ScrollLock::new();

        lock.lock(&mut doc);
        assert_eq!(doc.body_style().padding_right, Some(1));
        assert_eq!(lock.state().unwrap().previous_padding, Some(3));

        lock.unlock(&mut doc);
        assert_eq!(doc.body_style().padding_right, Some(3));
    }

    #[test]
    fn test_no_compensation_without_scrollbar() {
        let mut doc = StackedDocument::new(80, 20);
        doc.mount(Section::Hero, 10);
        let mut lock = ScrollLock::new();

        lock.lock(&mut doc);
        let state = lock.state().unwrap();
        assert_eq!(state.scrollbar_compensation, 0);
        assert_eq!(doc.body_style().padding_right, None);
    }

    #[test]
    fn test_lock_at_top_restores_zero() {
        let mut doc = page();
        let mut lock = ScrollLock::new();
        lock.lock(&mut doc);
        lock.unlock(&mut doc);
        lock.on_animation_frame(&mut doc);
        assert_eq!(doc.scroll_y(), 0);
    }

    #[test]
    fn test_relock_before_restore_frame_keeps_offset() {
        let mut doc = page();
        doc.scroll_to(25);
        let mut lock = ScrollLock::new();

        lock.lock(&mut doc);
        lock.unlock(&mut doc);
        lock.lock(&mut doc);
        assert_eq!(lock.state().unwrap().scroll_offset, 25);

        lock.release(&mut doc);
        assert_eq!(doc.scroll_y(), 25);
        assert!(!lock.has_pending_restore());
    }

    #[test]
    fn test_locked_body_blocks_scrolling() {
        let mut doc = page();
        doc.scroll_to(8);
        let mut lock = ScrollLock::new();
        lock.lock(&mut doc);

        assert!(!doc.scroll_by(4));
        lock.release(&mut doc);
        assert_eq!(doc.scroll_y(), 8);
    }
}
