//! Message list rendering
//!
//! Renders the conversation with per-role gutter symbols and marker
//! indicators. Wrapping here must agree with `MessageLayout` line counts,
//! which is why both sides use [`wrap_width`] and `textwrap`.

use std::collections::HashSet;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{
        Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
    Frame,
};
use tidemark_core::ChatMessage;

use crate::tui::state::ScrollState;
use crate::tui::themes::Theme;

/// Symbol prefixes for message roles (with trailing space)
const USER_SYMBOL: &str = "❯ ";
const ASSISTANT_SYMBOL: &str = "⬡ ";

/// Marker gutter cell for messages covered by a bookmark's visible set
const MARKER_GUTTER: &str = "▎ ";
const PLAIN_GUTTER: &str = "  ";

/// Columns taken by gutter + symbol + right padding before text starts
const TEXT_INSET: usize = 5;

/// Wrap width for message text inside a messages area of `inner_width`
pub fn wrap_width(inner_width: u16) -> usize {
    (inner_width as usize).saturating_sub(TEXT_INSET).max(1)
}

/// Render the messages panel
pub fn render_messages(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    messages: &[ChatMessage],
    scroll: &ScrollState,
    total_lines: usize,
    marked_ids: &HashSet<u64>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = wrap_width(inner.width);
    let mut lines: Vec<Line> = Vec::new();

    for message in messages {
        let gutter = if marked_ids.contains(&message.id) {
            Span::styled(MARKER_GUTTER, Style::default().fg(theme.marker_color))
        } else {
            Span::raw(PLAIN_GUTTER)
        };
        let (symbol, color) = if message.is_user() {
            (USER_SYMBOL, theme.user_color)
        } else {
            (ASSISTANT_SYMBOL, theme.assistant_color)
        };

        let mut first = true;
        for source_line in message.text.lines() {
            let wrapped = if source_line.is_empty() {
                vec![std::borrow::Cow::Borrowed("")]
            } else {
                textwrap::wrap(source_line, width)
            };
            for piece in wrapped {
                let prefix = if first {
                    Span::styled(symbol, Style::default().fg(color))
                } else {
                    Span::raw("  ")
                };
                lines.push(Line::from(vec![
                    gutter.clone(),
                    prefix,
                    Span::styled(piece.into_owned(), Style::default().fg(theme.text_color)),
                ]));
                first = false;
            }
        }
        if first {
            // Empty message still takes one row
            lines.push(Line::from(vec![
                gutter.clone(),
                Span::styled(symbol, Style::default().fg(color)),
            ]));
        }
        lines.push(Line::default()); // blank after
    }

    let offset = scroll.offset.min(u16::MAX as usize) as u16;
    let paragraph = Paragraph::new(Text::from(lines)).scroll((offset, 0));
    f.render_widget(paragraph, inner);

    if total_lines > inner.height as usize {
        let mut scrollbar_state = ScrollbarState::new(scroll.max_scroll).position(scroll.offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(theme.dim_color)),
            area,
            &mut scrollbar_state,
        );
    }
}
