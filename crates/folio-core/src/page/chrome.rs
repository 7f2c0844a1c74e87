//! Scroll-driven page chrome: compact header, scroll-to-top button, hero parallax

use crate::constants::page::{
    HEADER_SCROLLED_THRESHOLD, PARALLAX_FACTOR, SCROLL_TO_TOP_THRESHOLD,
};

/// Derived presentation flags for the current scroll offset
#[derive(Debug, Clone, PartialEq)]
pub struct PageChrome {
    scrolled_threshold: u32,
    scroll_to_top_threshold: u32,
    parallax_factor: f64,
    offset: u32,
}

impl Default for PageChrome {
    fn default() -> Self {
        Self::new(HEADER_SCROLLED_THRESHOLD, SCROLL_TO_TOP_THRESHOLD)
    }
}

impl PageChrome {
    pub fn new(scrolled_threshold: u32, scroll_to_top_threshold: u32) -> Self {
        Self {
            scrolled_threshold,
            scroll_to_top_threshold,
            parallax_factor: PARALLAX_FACTOR,
            offset: 0,
        }
    }

    pub fn with_parallax_factor(mut self, factor: f64) -> Self {
        self.parallax_factor = factor;
        self
    }

    /// Record the visual offset; returns whether a visible flag changed
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        let before = (self.is_scrolled(), self.shows_scroll_to_top());
        self.offset = offset;
        before != (self.is_scrolled(), self.shows_scroll_to_top())
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Header switches to its compact style
    pub fn is_scrolled(&self) -> bool {
        self.offset > self.scrolled_threshold
    }

    pub fn shows_scroll_to_top(&self) -> bool {
        self.offset > self.scroll_to_top_threshold
    }

    /// How far the hero content trails the scroll
    pub fn parallax_offset(&self) -> f64 {
        f64::from(self.offset) * self.parallax_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_exclusive() {
        let mut chrome = PageChrome::new(2, 10);
        assert!(!chrome.on_scroll(2));
        assert!(!chrome.is_scrolled());

        assert!(chrome.on_scroll(3));
        assert!(chrome.is_scrolled());
        assert!(!chrome.shows_scroll_to_top());

        assert!(chrome.on_scroll(11));
        assert!(chrome.shows_scroll_to_top());
        assert!(!chrome.on_scroll(40));
    }

    #[test]
    fn test_parallax_follows_offset() {
        let mut chrome = PageChrome::default();
        chrome.on_scroll(100);
        assert!((chrome.parallax_offset() - 40.0).abs() < 1e-9);
        assert_eq!(PageChrome::default().with_parallax_factor(0.0).parallax_offset(), 0.0);
    }
}
