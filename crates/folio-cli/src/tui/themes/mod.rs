//! Color themes
//!
//! Every widget reads its colors from a [`Theme`]; the active one is picked by
//! name from [`THEME_REGISTRY`] and persisted in preferences.

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// Theme used when nothing else is selected
pub const DEFAULT_THEME: &str = "folio";

/// All built-in themes
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    pub link_color: Color,

    pub success_color: Color,
    pub warning_color: Color,
    pub error_color: Color,

    /// Header background once the page is scrolled
    pub header_scrolled_bg_color: Color,
    pub status_bar_bg_color: Color,
    pub scrollbar_bg_color: Color,
    pub scrollbar_fg_color: Color,
}

impl Theme {
    /// Palette with the theme's own background and foreground
    pub(crate) fn rgb(
        name: &str,
        display_name: &str,
        bg: (u8, u8, u8),
        surface: (u8, u8, u8),
        text: (u8, u8, u8),
        dim: (u8, u8, u8),
        accent: (u8, u8, u8),
        secondary: (u8, u8, u8),
        success: (u8, u8, u8),
        warning: (u8, u8, u8),
        error: (u8, u8, u8),
    ) -> Self {
        let c = |(r, g, b): (u8, u8, u8)| Color::Rgb(r, g, b);
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            bg_color: c(bg),
            text_color: c(text),
            dim_color: c(dim),
            border_color: c(dim),
            title_color: c(accent),
            accent_color: c(accent),
            link_color: c(secondary),
            success_color: c(success),
            warning_color: c(warning),
            error_color: c(error),
            header_scrolled_bg_color: c(surface),
            status_bar_bg_color: c(surface),
            scrollbar_bg_color: c(surface),
            scrollbar_fg_color: c(dim),
        }
    }
}
