//! Input bar rendering
//!
//! Single-line input with a visible cursor; long input scrolls horizontally
//! to keep the cursor on screen.

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::state::InputState;
use crate::tui::themes::Theme;

const PROMPT: &str = "> ";

/// Render the input bar and place the terminal cursor
pub fn render_input_bar(f: &mut Frame, area: Rect, theme: &Theme, input: &InputState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text_width = inner.width.saturating_sub(PROMPT.len() as u16);
    let cursor_col = input.cursor_col();

    // Keep the cursor inside the visible window
    let skip = cursor_col.saturating_sub(text_width.saturating_sub(1));
    let visible: String = input.as_str().chars().skip(skip as usize).collect();

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(theme.accent_color)),
        Span::styled(visible, Style::default().fg(theme.text_color)),
    ]);
    f.render_widget(Paragraph::new(line), inner);

    f.set_cursor_position(Position::new(
        inner.x + PROMPT.len() as u16 + (cursor_col - skip),
        inner.y,
    ));
}
