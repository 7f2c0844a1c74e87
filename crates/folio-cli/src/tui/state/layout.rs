//! Layout State - cached areas for hit testing
//!
//! Rebuilt on every draw; mouse handlers read it back.

use folio_core::{Locale, Section};
use ratatui::layout::{Position, Rect};

use super::DocTarget;

/// Something a click can land on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Nav(Section),
    MenuButton,
    MenuItem(Section),
    LanguageButton,
    LanguageItem(Locale),
    ScrollToTop,
    Doc(DocTarget),
}

#[derive(Debug, Default)]
pub struct LayoutState {
    /// Document viewport
    pub body: Rect,
    /// Mobile menu overlay, when open
    pub menu_popup: Option<Rect>,
    /// Language dropdown, when open
    pub language_popup: Option<Rect>,
    /// Clickable areas in paint order
    hits: Vec<(Rect, HitTarget)>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.menu_popup = None;
        self.language_popup = None;
        self.hits.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        self.hits.push((area, target));
    }

    /// Topmost target under a cell
    pub fn hit(&self, x: u16, y: u16) -> Option<&HitTarget> {
        let pos = Position::new(x, y);
        self.hits
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| target)
    }

    /// Area registered for a target, if drawn this frame
    pub fn area_of(&self, target: &HitTarget) -> Option<Rect> {
        self.hits
            .iter()
            .find(|(_, t)| t == target)
            .map(|(area, _)| *area)
    }

    pub fn in_menu_popup(&self, x: u16, y: u16) -> bool {
        self.menu_popup
            .is_some_and(|area| area.contains(Position::new(x, y)))
    }
}
