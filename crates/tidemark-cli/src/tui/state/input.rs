//! Single-line input state
//!
//! Cursor positions are char indices; rendering converts to display columns.

use unicode_width::UnicodeWidthStr;

/// Text input line with a cursor
#[derive(Debug, Default)]
pub struct InputState {
    buffer: String,
    /// Cursor position as a char index into `buffer`
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// Display column of the cursor
    pub fn cursor_col(&self) -> u16 {
        let byte_idx = self.byte_index(self.cursor);
        self.buffer[..byte_idx].width() as u16
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = self.byte_index(self.cursor);
        self.buffer.remove(byte_idx);
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.buffer.remove(byte_idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Take the buffer contents, resetting the input
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_take() {
        let mut input = InputState::new();
        for c in "hello".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.as_str(), "hello");
        assert_eq!(input.take(), "hello");
        assert_eq!(input.as_str(), "");
    }

    #[test]
    fn test_edit_in_the_middle() {
        let mut input = InputState::new();
        for c in "hllo".chars() {
            input.insert_char(c);
        }
        input.move_home();
        input.move_right();
        input.insert_char('e');
        assert_eq!(input.as_str(), "hello");

        input.backspace();
        assert_eq!(input.as_str(), "hllo");
        input.delete();
        assert_eq!(input.as_str(), "hlo");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = InputState::new();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        input.move_home();
        input.move_right();
        input.move_right();
        input.backspace();
        assert_eq!(input.as_str(), "hllo");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut input = InputState::new();
        input.move_left();
        input.backspace();
        input.delete();
        assert_eq!(input.as_str(), "");

        input.insert_char('a');
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor_col(), 1);
    }
}
