//! User preferences storage

use rusqlite::{params, OptionalExtension};

use super::database::Database;
use crate::error::Result;
use crate::i18n::Locale;

const LOCALE_KEY: &str = "locale";
const THEME_KEY: &str = "theme";

/// Key/value preferences backed by the database
pub struct Preferences {
    db: Database,
}

impl Preferences {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get a preference value
    pub fn get(&self, key: &str) -> Option<String> {
        self.db
            .conn()
            .query_row(
                "SELECT value FROM user_preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .unwrap_or_else(|e| {
                tracing::warn!(key, error = %e, "Failed to read preference");
                None
            })
    }

    /// Set a preference value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db.conn().execute(
            "INSERT INTO user_preferences (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = strftime('%s', 'now')",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        self.db
            .conn()
            .execute("DELETE FROM user_preferences WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Stored language, if one was chosen and is still supported
    pub fn get_locale(&self) -> Option<Locale> {
        self.get(LOCALE_KEY).and_then(|code| Locale::parse(&code))
    }

    pub fn set_locale(&self, locale: Locale) -> Result<()> {
        self.set(LOCALE_KEY, locale.code())
    }

    pub fn get_theme(&self) -> Option<String> {
        self.get(THEME_KEY)
    }

    pub fn set_theme(&self, theme: &str) -> Result<()> {
        self.set(THEME_KEY, theme)
    }
}
