//! Mouse event handling
//!
//! Wheel scrolling over the messages area and clicks on the marker panel.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tidemark_core::Direction;

use crate::tui::app::App;
use crate::tui::components::marker_panel::{self, PanelAction};

/// Lines moved per wheel notch
const WHEEL_SCROLL: usize = 3;

impl App {
    /// Handle mouse events for scrolling and panel clicks
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let now = Instant::now();
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                if self.over_messages(mouse.column, mouse.row) {
                    self.scroll_by(now, -(WHEEL_SCROLL as isize));
                }
            }
            MouseEventKind::ScrollDown => {
                if self.over_messages(mouse.column, mouse.row) {
                    self.scroll_by(now, WHEEL_SCROLL as isize);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(now, mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn over_messages(&self, x: u16, y: u16) -> bool {
        self.layout
            .messages_area
            .is_some_and(|area| area.contains(Position::new(x, y)))
    }

    fn handle_left_click(&mut self, now: Instant, x: u16, y: u16) {
        let Some(panel) = self.layout.panel_area else {
            return;
        };
        if !panel.contains(Position::new(x, y)) {
            return;
        }
        match marker_panel::hit_test(panel, y) {
            Some(PanelAction::Previous) => self.navigate_marker(now, Direction::Previous),
            Some(PanelAction::Next) => self.navigate_marker(now, Direction::Next),
            Some(PanelAction::Add) => self.add_marker(),
            Some(PanelAction::Remove) => self.remove_current_marker(),
            Some(PanelAction::Bottom) => self.jump_to_bottom(now),
            None => {}
        }
    }
}
