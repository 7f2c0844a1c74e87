//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Native terminal colors
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        border_color: Color::DarkGray,
        title_color: Color::Cyan,
        accent_color: Color::Cyan,
        link_color: Color::Blue,
        success_color: Color::Green,
        warning_color: Color::Yellow,
        error_color: Color::Red,
        header_scrolled_bg_color: Color::Black,
        status_bar_bg_color: Color::Black,
        scrollbar_bg_color: Color::Reset,
        scrollbar_fg_color: Color::DarkGray,
    }
}

pub fn folio() -> Theme {
    Theme::rgb(
        "folio",
        "Folio",
        (10, 10, 18),
        (22, 22, 36),
        (228, 228, 240),
        (110, 110, 140),
        (139, 92, 246),
        (56, 189, 248),
        (52, 211, 153),
        (251, 191, 36),
        (248, 113, 113),
    )
}

pub fn tokyo_night() -> Theme {
    Theme::rgb(
        "tokyo_night",
        "Tokyo Night",
        (26, 27, 38),
        (36, 40, 59),
        (192, 202, 245),
        (86, 95, 137),
        (122, 162, 247),
        (125, 207, 255),
        (158, 206, 106),
        (224, 175, 104),
        (247, 118, 142),
    )
}

pub fn dracula() -> Theme {
    Theme::rgb(
        "dracula",
        "Dracula",
        (40, 42, 54),
        (68, 71, 90),
        (248, 248, 242),
        (98, 114, 164),
        (189, 147, 249),
        (139, 233, 253),
        (80, 250, 123),
        (241, 250, 140),
        (255, 85, 85),
    )
}

pub fn nord() -> Theme {
    Theme::rgb(
        "nord",
        "Nord",
        (46, 52, 64),
        (59, 66, 82),
        (236, 239, 244),
        (97, 110, 136),
        (136, 192, 208),
        (129, 161, 193),
        (163, 190, 140),
        (235, 203, 139),
        (191, 97, 106),
    )
}

pub fn gruvbox_dark() -> Theme {
    Theme::rgb(
        "gruvbox_dark",
        "Gruvbox Dark",
        (40, 40, 40),
        (60, 56, 54),
        (235, 219, 178),
        (146, 131, 116),
        (250, 189, 47),
        (131, 165, 152),
        (184, 187, 38),
        (254, 128, 25),
        (251, 73, 52),
    )
}

pub fn catppuccin_mocha() -> Theme {
    Theme::rgb(
        "catppuccin_mocha",
        "Catppuccin Mocha",
        (30, 30, 46),
        (49, 50, 68),
        (205, 214, 244),
        (108, 112, 134),
        (203, 166, 247),
        (137, 180, 250),
        (166, 227, 161),
        (249, 226, 175),
        (243, 139, 168),
    )
}

pub fn solarized_light() -> Theme {
    Theme::rgb(
        "solarized_light",
        "Solarized Light",
        (253, 246, 227),
        (238, 232, 213),
        (88, 110, 117),
        (147, 161, 161),
        (38, 139, 210),
        (42, 161, 152),
        (133, 153, 0),
        (181, 137, 0),
        (220, 50, 47),
    )
}
