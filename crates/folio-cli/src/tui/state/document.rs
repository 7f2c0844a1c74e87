//! Rendered document lines

use folio_core::contact::Field;
use folio_core::Section;
use ratatui::text::Line;

/// What activating a document line does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocTarget {
    /// Open an external link
    Url(String),
    /// In-page anchor
    Section(Section),
    /// Focus a contact form field
    Field(Field),
    /// Submit the contact form
    Submit,
}

/// One row of the page document
#[derive(Debug, Clone)]
pub struct DocLine {
    pub line: Line<'static>,
    /// Staggered reveal index, for card rows
    pub child: Option<usize>,
    pub target: Option<DocTarget>,
}

impl DocLine {
    pub fn new(line: impl Into<Line<'static>>) -> Self {
        Self {
            line: line.into(),
            child: None,
            target: None,
        }
    }

    pub fn blank() -> Self {
        Self::new(Line::default())
    }

    pub fn child(mut self, index: usize) -> Self {
        self.child = Some(index);
        self
    }

    pub fn target(mut self, target: DocTarget) -> Self {
        self.target = Some(target);
        self
    }
}

impl From<Line<'static>> for DocLine {
    fn from(line: Line<'static>) -> Self {
        Self::new(line)
    }
}
