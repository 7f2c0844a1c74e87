//! Stacked document - sections laid out top to bottom in a scrollable viewport
//!
//! Units are abstract (terminal rows/columns in the TUI). A fixed body
//! collapses the scrollable document the same way a browser does: the native
//! scroll offset drops to zero and the body's `top` carries the visual offset.

use super::{BodyStyle, Bounds, ScrollHost, Section, SectionLayout};

/// Document of vertically stacked sections
#[derive(Debug, Clone)]
pub struct StackedDocument {
    /// Mounted sections in document order with their heights
    sections: Vec<(Section, u32)>,
    /// Height of trailing content below the last section (footer)
    footer_height: u32,
    viewport_width: u32,
    viewport_height: u32,
    /// Width taken by the scrollbar when the content overflows
    scrollbar_width: u32,
    scroll_y: u32,
    body: BodyStyle,
}

impl StackedDocument {
    /// Create an empty document for a viewport
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            sections: Vec::new(),
            footer_height: 0,
            viewport_width,
            viewport_height,
            scrollbar_width: 1,
            scroll_y: 0,
            body: BodyStyle::default(),
        }
    }

    /// Override the scrollbar width (0 for overlay scrollbars)
    pub fn with_scrollbar_width(mut self, width: u32) -> Self {
        self.scrollbar_width = width;
        self
    }

    /// Resize the viewport, keeping the scroll offset in range
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.clamp_scroll();
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Mount a section, or update its height when already mounted
    pub fn mount(&mut self, section: Section, height: u32) {
        match self.sections.iter_mut().find(|(s, _)| *s == section) {
            Some(entry) => entry.1 = height,
            None => self.sections.push((section, height)),
        }
        self.clamp_scroll();
    }

    /// Remove a section from the document
    pub fn unmount(&mut self, section: Section) {
        self.sections.retain(|(s, _)| *s != section);
        self.clamp_scroll();
    }

    pub fn set_footer_height(&mut self, height: u32) {
        self.footer_height = height;
        self.clamp_scroll();
    }

    /// Mounted sections with their heights, in document order
    pub fn sections(&self) -> impl Iterator<Item = (Section, u32)> + '_ {
        self.sections.iter().copied()
    }

    /// Distance from the document top to a section's top edge
    pub fn section_offset(&self, section: Section) -> Option<u32> {
        let mut offset = 0u32;
        for (s, height) in &self.sections {
            if *s == section {
                return Some(offset);
            }
            offset = offset.saturating_add(*height);
        }
        None
    }

    /// Total document height
    pub fn content_height(&self) -> u32 {
        self.sections
            .iter()
            .map(|(_, h)| *h)
            .fold(self.footer_height, u32::saturating_add)
    }

    /// Whether user scrolling is currently impossible
    pub fn is_scroll_frozen(&self) -> bool {
        self.body.is_fixed()
    }

    /// Offset of the content currently shown at the viewport top
    pub fn visual_offset(&self) -> u32 {
        if self.body.is_fixed() {
            let top = self.body.top.unwrap_or(0);
            u32::try_from(top.saturating_neg().max(0)).unwrap_or(u32::MAX)
        } else {
            self.scroll_y
        }
    }

    /// Scroll relative to the current offset; returns whether the offset moved
    pub fn scroll_by(&mut self, delta: i64) -> bool {
        if self.is_scroll_frozen() {
            return false;
        }
        let before = self.scroll_y;
        let target = (i64::from(self.scroll_y) + delta).max(0);
        self.scroll_to(u32::try_from(target).unwrap_or(u32::MAX));
        self.scroll_y != before
    }

    /// Whether the scrollbar is drawn and takes layout space
    pub fn has_scrollbar(&self) -> bool {
        !self.is_scroll_frozen() && self.content_height() > self.viewport_height
    }

    /// Width available to section content after scrollbar and body padding
    pub fn content_width(&self) -> u32 {
        self.client_width()
            .saturating_sub(self.body.padding_right.unwrap_or(0))
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll_y();
        if self.scroll_y > max {
            self.scroll_y = max;
        }
    }
}

impl SectionLayout for StackedDocument {
    fn viewport_width(&self) -> f64 {
        f64::from(self.viewport_width)
    }

    fn viewport_height(&self) -> f64 {
        f64::from(self.viewport_height)
    }

    fn section_bounds(&self, section: Section) -> Option<Bounds> {
        let offset = self.section_offset(section)?;
        let height = self
            .sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, h)| *h)?;
        let top = f64::from(offset) - f64::from(self.visual_offset());
        Some(Bounds::new(
            0.0,
            top,
            f64::from(self.content_width()),
            f64::from(height),
        ))
    }
}

impl ScrollHost for StackedDocument {
    fn scroll_y(&self) -> u32 {
        if self.is_scroll_frozen() {
            0
        } else {
            self.scroll_y
        }
    }

    fn max_scroll_y(&self) -> u32 {
        self.content_height().saturating_sub(self.viewport_height)
    }

    fn scroll_to(&mut self, y: u32) {
        if self.is_scroll_frozen() {
            return;
        }
        self.scroll_y = y.min(self.max_scroll_y());
    }

    fn inner_width(&self) -> u32 {
        self.viewport_width
    }

    fn client_width(&self) -> u32 {
        if self.has_scrollbar() {
            self.viewport_width.saturating_sub(self.scrollbar_width)
        } else {
            self.viewport_width
        }
    }

    fn body_style(&self) -> &BodyStyle {
        &self.body
    }

    fn set_body_style(&mut self, style: BodyStyle) {
        // A fixed body takes the content out of flow; the document stops scrolling
        if style.is_fixed() && !self.body.is_fixed() {
            self.scroll_y = 0;
        }
        self.body = style;
        self.clamp_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Position;

    fn document() -> StackedDocument {
        let mut doc = StackedDocument::new(80, 20);
        doc.mount(Section::Hero, 20);
        doc.mount(Section::About, 30);
        doc.set_footer_height(5);
        doc
    }

    #[test]
    fn test_offsets_and_bounds_follow_scroll() {
        let mut doc = document();
        assert_eq!(doc.section_offset(Section::About), Some(20));
        assert_eq!(doc.content_height(), 55);
        assert_eq!(doc.max_scroll_y(), 35);

        doc.scroll_to(12);
        let about = doc.section_bounds(Section::About).unwrap();
        assert_eq!(about.top, 8.0);
        assert_eq!(about.height, 30.0);
        assert!(doc.section_bounds(Section::Contact).is_none());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut doc = document();
        assert!(doc.scroll_by(100));
        assert_eq!(doc.scroll_y(), 35);
        assert!(doc.scroll_by(-100));
        assert_eq!(doc.scroll_y(), 0);
        assert!(!doc.scroll_by(-1));
    }

    #[test]
    fn test_scrollbar_only_when_overflowing() {
        let mut doc = StackedDocument::new(80, 20);
        doc.mount(Section::Hero, 10);
        assert_eq!(doc.client_width(), 80);

        doc.mount(Section::About, 30);
        assert_eq!(doc.client_width(), 79);
    }

    #[test]
    fn test_fixed_body_freezes_document() {
        let mut doc = document();
        doc.scroll_to(10);

        doc.set_body_style(BodyStyle {
            position: Position::Fixed,
            top: Some(-10),
            ..BodyStyle::default()
        });

        assert_eq!(doc.scroll_y(), 0);
        assert_eq!(doc.visual_offset(), 10);
        assert!(!doc.scroll_by(3));
        assert_eq!(doc.client_width(), 80);
        assert_eq!(doc.section_bounds(Section::About).unwrap().top, 10.0);
    }
}
