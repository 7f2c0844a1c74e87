//! App State Components
//!
//! Per-frame render products the input handlers read back.

mod document;
mod layout;

pub use document::{DocLine, DocTarget};
pub use layout::{HitTarget, LayoutState};
