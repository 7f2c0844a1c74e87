//! Persistence layer
//!
//! SQLite-based storage for user preferences (language, theme).

mod database;
mod database_tests;
mod preferences;

pub use database::Database;
pub use preferences::Preferences;
