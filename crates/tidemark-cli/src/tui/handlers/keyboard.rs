//! Keyboard event handlers

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tidemark_core::Direction;

use crate::tui::app::App;

/// Lines moved per PageUp/PageDown press
const PAGE_SCROLL: usize = 10;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press && key_event.kind != KeyEventKind::Repeat {
            return;
        }
        let code = key_event.code;
        let modifiers = key_event.modifiers;
        let now = Instant::now();

        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                }
                KeyCode::Char('b') => self.add_marker(),
                KeyCode::Char('x') => self.remove_current_marker(),
                KeyCode::Up => self.navigate_marker(now, Direction::Previous),
                KeyCode::Down => self.navigate_marker(now, Direction::Next),
                KeyCode::Char('e') => self.jump_to_bottom(now),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Enter => self.send_message(now),
            KeyCode::PageUp => self.scroll_by(now, -(PAGE_SCROLL as isize)),
            KeyCode::PageDown => self.scroll_by(now, PAGE_SCROLL as isize),
            KeyCode::Char(c) => self.chat.input.insert_char(c),
            KeyCode::Backspace => self.chat.input.backspace(),
            KeyCode::Delete => self.chat.input.delete(),
            KeyCode::Left => self.chat.input.move_left(),
            KeyCode::Right => self.chat.input.move_right(),
            KeyCode::Home => self.chat.input.move_home(),
            KeyCode::End => self.chat.input.move_end(),
            _ => {}
        }
    }

    /// Send the input line and pin the view back to the bottom
    fn send_message(&mut self, now: Instant) {
        if self.chat.send(now) {
            self.scroll.request_scroll_to_bottom();
        }
    }
}
