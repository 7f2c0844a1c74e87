//! Theme registry for discovering and accessing themes

use std::collections::HashMap;

use super::{definitions, Theme, DEFAULT_THEME};

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
    fallback: Theme,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
            fallback: definitions::folio(),
        };

        registry.register(definitions::folio());
        registry.register(definitions::terminal());
        registry.register(definitions::tokyo_night());
        registry.register(definitions::dracula());
        registry.register(definitions::catppuccin_mocha());
        registry.register(definitions::gruvbox_dark());
        registry.register(definitions::nord());
        registry.register(definitions::solarized_light());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or(&self.fallback)
    }

    /// Theme after `current` in registration order, wrapping around
    pub fn next_name(&self, current: &str) -> &str {
        let next = self
            .ordered_names
            .iter()
            .position(|n| n == current)
            .map_or(0, |i| (i + 1) % self.ordered_names.len());
        self.ordered_names
            .get(next)
            .map_or(DEFAULT_THEME, String::as_str)
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get_or_default("nope").name, DEFAULT_THEME);
        assert_eq!(registry.get_or_default("nord").name, "nord");
    }

    #[test]
    fn test_next_name_wraps() {
        let registry = ThemeRegistry::new();
        let names: Vec<String> = registry.list().iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(registry.next_name(&names[0]), names[1]);
        assert_eq!(registry.next_name(names.last().unwrap()), names[0]);
        assert_eq!(registry.next_name("unknown"), names[0]);
        assert_eq!(registry.count(), names.len());
    }
}
