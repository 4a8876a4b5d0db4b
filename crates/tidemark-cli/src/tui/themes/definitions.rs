//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Default theme - deep blue background with cyan accents
pub fn tidemark() -> Theme {
    Theme {
        name: "tidemark".to_string(),
        display_name: "Tidemark".to_string(),
        bg_color: Color::Rgb(13, 17, 23),
        text_color: Color::Rgb(201, 209, 217),
        dim_color: Color::Rgb(110, 118, 129),
        border_color: Color::Rgb(48, 54, 61),
        accent_color: Color::Rgb(83, 177, 224),
        user_color: Color::Rgb(88, 166, 255),
        assistant_color: Color::Rgb(126, 231, 135),
        marker_color: Color::Rgb(248, 81, 73),
        status_bar_bg_color: Color::Rgb(22, 27, 34),
    }
}

/// Nord - arctic, bluish palette
pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        display_name: "Nord".to_string(),
        bg_color: Color::Rgb(46, 52, 64),
        text_color: Color::Rgb(216, 222, 233),
        dim_color: Color::Rgb(76, 86, 106),
        border_color: Color::Rgb(59, 66, 82),
        accent_color: Color::Rgb(136, 192, 208),
        user_color: Color::Rgb(129, 161, 193),
        assistant_color: Color::Rgb(163, 190, 140),
        marker_color: Color::Rgb(191, 97, 106),
        status_bar_bg_color: Color::Rgb(59, 66, 82),
    }
}

/// Terminal theme - native terminal colors throughout
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        border_color: Color::DarkGray,
        accent_color: Color::Cyan,
        user_color: Color::Blue,
        assistant_color: Color::Green,
        marker_color: Color::Red,
        status_bar_bg_color: Color::Reset,
    }
}
