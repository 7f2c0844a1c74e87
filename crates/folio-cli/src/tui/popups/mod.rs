//! Popup system for the Folio TUI
//!
//! Consistent sizing, rounded borders and theme-aware colors.

pub mod common;
pub mod language;
pub mod mobile_menu;

pub use language::render_language_dropdown;
pub use mobile_menu::MobileMenuPopup;
