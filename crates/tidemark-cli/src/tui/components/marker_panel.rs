//! Marker navigation panel
//!
//! Right-hand panel with the current position label and the marker actions.
//! Rows are fixed so mouse hit testing and rendering stay in sync.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tidemark_core::ScrollEdges;

use crate::tui::themes::Theme;

/// Panel width including borders
pub const PANEL_WIDTH: u16 = 18;

// Row offsets inside the panel's inner area
const ROW_LABEL: u16 = 0;
const ROW_PREV: u16 = 2;
const ROW_NEXT: u16 = 3;
const ROW_ADD: u16 = 5;
const ROW_REMOVE: u16 = 6;
const ROW_BOTTOM: u16 = 8;

/// An action triggered from the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Previous,
    Next,
    Add,
    Remove,
    Bottom,
}

/// Map a click at screen row `y` inside the panel to its action
pub fn hit_test(panel: Rect, y: u16) -> Option<PanelAction> {
    // Skip the top border; rows are relative to the inner area
    let row = y.checked_sub(panel.y.saturating_add(1))?;
    if row >= panel.height.saturating_sub(2) {
        return None;
    }
    match row {
        ROW_PREV => Some(PanelAction::Previous),
        ROW_NEXT => Some(PanelAction::Next),
        ROW_ADD => Some(PanelAction::Add),
        ROW_REMOVE => Some(PanelAction::Remove),
        ROW_BOTTOM => Some(PanelAction::Bottom),
        _ => None,
    }
}

/// Render the marker panel
pub fn render_marker_panel(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    label: &str,
    has_bookmarks: bool,
    has_current: bool,
    edges: ScrollEdges,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color))
        .title(" Markers ")
        .title_style(Style::default().fg(theme.accent_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let enabled = Style::default().fg(theme.text_color);
    let disabled = Style::default().fg(theme.dim_color);
    let nav_style = if has_bookmarks { enabled } else { disabled };
    let remove_style = if has_current { enabled } else { disabled };

    // Scroll affordance arrows flank the position label
    let up = if edges.can_scroll_up { "↑" } else { " " };
    let down = if edges.can_scroll_down { "↓" } else { " " };
    let label_line = Line::from(vec![
        Span::styled(up, Style::default().fg(theme.dim_color)),
        Span::raw(" "),
        Span::styled(
            label.to_string(),
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(down, Style::default().fg(theme.dim_color)),
    ]);

    let rows: Vec<(u16, Line)> = vec![
        (ROW_LABEL, label_line.alignment(Alignment::Center)),
        (ROW_PREV, action_line("▲ prev", "C-↑", nav_style, theme)),
        (ROW_NEXT, action_line("▼ next", "C-↓", nav_style, theme)),
        (ROW_ADD, action_line("+ add", "C-b", enabled, theme)),
        (ROW_REMOVE, action_line("- remove", "C-x", remove_style, theme)),
        (ROW_BOTTOM, action_line("⤓ bottom", "C-e", enabled, theme)),
    ];

    for (row, line) in rows {
        if row >= inner.height {
            break;
        }
        let row_area = Rect::new(inner.x, inner.y + row, inner.width, 1);
        f.render_widget(Paragraph::new(line), row_area);
    }
}

fn action_line<'a>(label: &'a str, key: &'a str, style: Style, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("{label:<9}"), style),
        Span::styled(key, Style::default().fg(theme.dim_color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_maps_rows_to_actions() {
        let panel = Rect::new(50, 5, 18, 14);
        assert_eq!(hit_test(panel, 6), None); // label row
        assert_eq!(hit_test(panel, 8), Some(PanelAction::Previous));
        assert_eq!(hit_test(panel, 9), Some(PanelAction::Next));
        assert_eq!(hit_test(panel, 11), Some(PanelAction::Add));
        assert_eq!(hit_test(panel, 12), Some(PanelAction::Remove));
        assert_eq!(hit_test(panel, 14), Some(PanelAction::Bottom));
        assert_eq!(hit_test(panel, 15), None);
    }

    #[test]
    fn test_hit_test_outside_panel_rows() {
        let panel = Rect::new(50, 5, 18, 14);
        // Above the panel and on the bottom border
        assert_eq!(hit_test(panel, 2), None);
        assert_eq!(hit_test(panel, 18), None);
    }
}
