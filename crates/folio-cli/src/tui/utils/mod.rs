//! Utilities for the TUI

mod channels;
mod text;

pub use channels::AsyncChannels;
pub use text::{pad_to_width, truncate_ellipsis, wrap_text};
