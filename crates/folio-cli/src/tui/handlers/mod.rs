//! Event handlers
//!
//! `impl App` blocks split by concern: input routing, popups, background
//! polling, preference changes and rendering.

mod contact;
mod keyboard;
mod language;
mod mouse;
mod popup_keys;
mod projects;
mod rendering;
mod themes;
