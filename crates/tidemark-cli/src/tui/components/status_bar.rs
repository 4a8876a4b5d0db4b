//! Status bar component - bottom bar with counts and key hints

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::themes::Theme;

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    message_count: usize,
    marker_label: &str,
) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let dim = Style::default().fg(theme.dim_color);
    let left = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            concat!("tidemark v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.accent_color),
        ),
        Span::styled(" │ ", dim),
        Span::styled(format!("{message_count} messages"), dim),
        Span::styled(" │ ", dim),
        Span::styled(format!("markers {marker_label}"), dim),
    ]);
    f.render_widget(
        Paragraph::new(left).style(Style::default().bg(theme.status_bar_bg_color)),
        area,
    );

    let hints = Line::from(Span::styled(
        "C-b mark  C-↑/C-↓ jump  C-e bottom  C-q quit ",
        dim,
    ));
    f.render_widget(
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .style(Style::default().bg(theme.status_bar_bg_color)),
        area,
    );
}
