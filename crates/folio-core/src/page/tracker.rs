//! Active section tracking
//!
//! A horizontal reference line sits at a fixed fraction of the viewport height.
//! The first section (in document order) whose box straddles the line becomes
//! active. When no section does, the previous answer sticks.

use tracing::debug;

use super::{Section, SectionLayout};
use crate::constants::page::REFERENCE_LINE_RATIO;
use crate::error::{FolioError, Result};

/// Tracks which section the reader is currently looking at
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    order: Vec<Section>,
    active: Section,
    line_ratio: f64,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveSectionTracker {
    /// Track every section in document order, starting on the hero
    pub fn new() -> Self {
        Self {
            order: Section::ALL.to_vec(),
            active: Section::Hero,
            line_ratio: REFERENCE_LINE_RATIO,
        }
    }

    /// Track a custom ordered subset; the first entry is the initial answer
    pub fn with_order(order: Vec<Section>) -> Result<Self> {
        let first = *order.first().ok_or(FolioError::EmptySectionOrder)?;
        Ok(Self {
            order,
            active: first,
            line_ratio: REFERENCE_LINE_RATIO,
        })
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn order(&self) -> &[Section] {
        &self.order
    }

    /// Reference line position for a layout, in viewport coordinates
    pub fn reference_line<L: SectionLayout + ?Sized>(&self, layout: &L) -> f64 {
        layout.viewport_height() * self.line_ratio
    }

    /// Re-evaluate against the current layout; returns whether the active section changed
    pub fn on_scroll<L: SectionLayout + ?Sized>(&mut self, layout: &L) -> bool {
        let line = self.reference_line(layout);

        let hit = self.order.iter().copied().find(|section| {
            layout
                .section_bounds(*section)
                .is_some_and(|b| b.top <= line && b.bottom() >= line)
        });

        match hit {
            Some(section) if section != self.active => {
                debug!(from = %self.active, to = %section, "Active section changed");
                self.active = section;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::page::{Bounds, ScrollHost, StackedDocument};

    /// Layout with hand-placed section boxes
    struct FixedLayout {
        height: f64,
        boxes: HashMap<Section, Bounds>,
    }

    impl FixedLayout {
        fn new(height: f64) -> Self {
            Self {
                height,
                boxes: HashMap::new(),
            }
        }

        fn place(mut self, section: Section, top: f64, height: f64) -> Self {
            self.boxes
                .insert(section, Bounds::new(0.0, top, 100.0, height));
            self
        }
    }

    impl SectionLayout for FixedLayout {
        fn viewport_width(&self) -> f64 {
            100.0
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn section_bounds(&self, section: Section) -> Option<Bounds> {
            self.boxes.get(&section).copied()
        }
    }

    fn portfolio() -> StackedDocument {
        let mut doc = StackedDocument::new(80, 100);
        doc.mount(Section::Hero, 100);
        doc.mount(Section::About, 80);
        doc.mount(Section::Skills, 120);
        doc.mount(Section::Projects, 150);
        doc.mount(Section::Contact, 90);
        doc
    }

    #[test]
    fn test_initial_section_is_hero() {
        assert_eq!(ActiveSectionTracker::new().active_section(), Section::Hero);
    }

    #[test]
    fn test_reference_line_selects_section() {
        let mut doc = portfolio();
        let mut tracker = ActiveSectionTracker::new();

        // Line at row 30; about starts at 100
        doc.scroll_to(75);
        assert!(tracker.on_scroll(&doc));
        assert_eq!(tracker.active_section(), Section::About);

        doc.scroll_to(400);
        tracker.on_scroll(&doc);
        assert_eq!(tracker.active_section(), Section::Projects);
    }

    #[test]
    fn test_every_scroll_position_has_a_member_active() {
        let mut doc = portfolio();
        let mut tracker = ActiveSectionTracker::new();

        for y in 0..=doc.max_scroll_y() {
            doc.scroll_to(y);
            tracker.on_scroll(&doc);
            assert!(Section::ALL.contains(&tracker.active_section()));
        }
        assert_eq!(tracker.active_section(), Section::Contact);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut tracker = ActiveSectionTracker::new();
        let layout = FixedLayout::new(100.0).place(Section::Skills, 0.0, 50.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active_section(), Section::Skills);

        // Gap around the line
        let gap = FixedLayout::new(100.0)
            .place(Section::Skills, -60.0, 50.0)
            .place(Section::Projects, 40.0, 50.0);
        assert!(!tracker.on_scroll(&gap));
        assert_eq!(tracker.active_section(), Section::Skills);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let mut tracker = ActiveSectionTracker::new();
        let layout = FixedLayout::new(100.0)
            .place(Section::Projects, 0.0, 60.0)
            .place(Section::About, 10.0, 60.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active_section(), Section::About);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let mut tracker = ActiveSectionTracker::new();
        let layout = FixedLayout::new(100.0).place(Section::Contact, 30.0, 10.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active_section(), Section::Contact);

        let layout = FixedLayout::new(100.0).place(Section::About, -10.0, 40.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active_section(), Section::About);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut doc = StackedDocument::new(80, 100);
        doc.mount(Section::Hero, 100);
        doc.mount(Section::Contact, 200);
        let mut tracker = ActiveSectionTracker::new();

        doc.scroll_to(100);
        tracker.on_scroll(&doc);
        assert_eq!(tracker.active_section(), Section::Contact);
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let mut doc = portfolio();
        doc.scroll_to(250);
        let mut tracker = ActiveSectionTracker::new();
        tracker.on_scroll(&doc);
        let first = tracker.active_section();
        assert!(!tracker.on_scroll(&doc));
        assert_eq!(tracker.active_section(), first);
    }

    #[test]
    fn test_custom_order() {
        assert!(matches!(
            ActiveSectionTracker::with_order(Vec::new()),
            Err(FolioError::EmptySectionOrder)
        ));
        let tracker =
            ActiveSectionTracker::with_order(vec![Section::About, Section::Contact]).unwrap();
        assert_eq!(tracker.active_section(), Section::About);
        assert_eq!(tracker.order(), &[Section::About, Section::Contact]);
    }
}
