//! Folio Core - Shared library for the Folio portfolio
//!
//! This crate provides everything the portfolio needs apart from drawing:
//! - Page geometry: active-section tracking, scroll locking, viewport observation
//! - Reveal animations driven by section visibility
//! - GitHub repository listing with periodic refresh
//! - Contact form submission through EmailJS
//! - Translation bundles and persisted preferences

pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod page;
pub mod paths;
pub mod projects;
pub mod storage;

// Re-exports for convenience
pub use config::FolioConfig;
pub use error::{FolioError, Result};
pub use i18n::{Locale, Translator};
pub use page::{PageShell, Section, StackedDocument};
pub use storage::{Database, Preferences};
