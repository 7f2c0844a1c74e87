//! UI components for the Folio TUI
//!
//! Reusable rendering pieces: header, status bar, scrollbar, toasts, the
//! scroll-to-top button and the custom cursor.

pub mod cursor;
pub mod header;
pub mod scroll_to_top;
pub mod scrollbar;
pub mod status_bar;
pub mod toast;

pub use cursor::render_cursor;
pub use header::{render_header, HeaderView, HEADER_HEIGHT};
pub use scroll_to_top::render_scroll_to_top;
pub use scrollbar::render_page_scrollbar;
pub use status_bar::render_status_bar;
pub use toast::{render_toasts, Toast, ToastQueue};
