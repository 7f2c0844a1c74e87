//! Page geometry and scroll-driven state
//!
//! The page is a vertical stack of sections inside a scrollable viewport.
//! Hosts (a terminal document, a test fixture) expose their geometry through
//! [`SectionLayout`] and their scroll/body state through [`ScrollHost`]; every
//! component in this module works against those two seams.

mod chrome;
mod cursor;
mod document;
mod header;
mod navigation;
mod reveal;
mod scroll_lock;
mod shell;
mod tracker;
mod viewport;

use std::fmt;

pub use chrome::PageChrome;
pub use cursor::CursorState;
pub use document::StackedDocument;
pub use header::NavigationHeader;
pub use navigation::{Easing, SmoothScroll};
pub use reveal::{Reveal, RevealController};
pub use scroll_lock::{LockedState, ScrollLock};
pub use shell::PageShell;
pub use tracker::ActiveSectionTracker;
pub use viewport::{
    intersection_ratio, MarginLength, ObserverOptions, RootMargin, ViewportObserver,
};

/// Top-level page regions, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Every section in document order
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Anchor id
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Resolve an anchor id (with or without a leading `#`)
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.strip_prefix('#').unwrap_or(id);
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Translation key of the navigation label
    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Hero => "nav.home",
            Section::About => "nav.about",
            Section::Skills => "nav.skills",
            Section::Projects => "nav.projects",
            Section::Contact => "nav.contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An axis-aligned box relative to the viewport's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlapping region; edge-adjacent boxes intersect with zero area
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }
        Some(Bounds::new(left, top, right - left, bottom - top))
    }
}

/// Body positioning mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Fixed,
}

/// Inline style of the document body
///
/// Only the scroll lock writes this; hosts read it to decide how to lay out
/// and whether user scrolling is possible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BodyStyle {
    pub position: Position,
    /// Offset of a fixed body from the top of the viewport
    pub top: Option<i64>,
    pub left: Option<i64>,
    pub right: Option<i64>,
    /// Body spans the full viewport width
    pub full_width: bool,
    /// Reserved space on the right edge
    pub padding_right: Option<u32>,
}

impl BodyStyle {
    pub fn is_fixed(&self) -> bool {
        self.position == Position::Fixed
    }
}

/// Read-only page geometry
pub trait SectionLayout {
    /// Viewport width including any scrollbar
    fn viewport_width(&self) -> f64;

    /// Viewport height
    fn viewport_height(&self) -> f64;

    /// Current viewport-relative box of a section, `None` when not mounted
    fn section_bounds(&self, section: Section) -> Option<Bounds>;

    /// The viewport itself, as an intersection root
    fn viewport_bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.viewport_width(), self.viewport_height())
    }
}

/// Native scroll state and body style of a page
pub trait ScrollHost {
    /// Current vertical scroll offset
    fn scroll_y(&self) -> u32;

    /// Largest reachable scroll offset
    fn max_scroll_y(&self) -> u32;

    /// Jump to an offset (clamped by the host)
    fn scroll_to(&mut self, y: u32);

    /// Window width including the scrollbar
    fn inner_width(&self) -> u32;

    /// Document content width excluding the scrollbar
    fn client_width(&self) -> u32;

    fn body_style(&self) -> &BodyStyle;

    fn set_body_style(&mut self, style: BodyStyle);
}

/// A host providing both geometry and scroll control
pub trait PageHost: SectionLayout + ScrollHost {}

impl<T: SectionLayout + ScrollHost> PageHost for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_round_trip_with_anchor() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("#projects"), Some(Section::Projects));
        assert_eq!(Section::from_id("footer"), None);
    }

    #[test]
    fn test_intersection_edges() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let touching = Bounds::new(0.0, 10.0, 10.0, 5.0);
        let apart = Bounds::new(0.0, 11.0, 10.0, 5.0);

        let edge = a.intersection(&touching).unwrap();
        assert_eq!(edge.area(), 0.0);
        assert!(a.intersection(&apart).is_none());

        let overlap = a.intersection(&Bounds::new(5.0, 5.0, 10.0, 10.0)).unwrap();
        assert_eq!(overlap, Bounds::new(5.0, 5.0, 5.0, 5.0));
    }
}
