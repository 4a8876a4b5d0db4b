//! Color themes for the TUI

mod definitions;
mod registry;

pub use registry::{ThemeRegistry, THEME_REGISTRY};

use ratatui::style::Color;

/// Colors used across the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,
    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub border_color: Color,
    pub accent_color: Color,
    pub user_color: Color,
    pub assistant_color: Color,
    pub marker_color: Color,
    pub status_bar_bg_color: Color,
}
