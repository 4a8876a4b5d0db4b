//! Scroll state for the messages area
//!
//! Line-based scroll position with stick-to-bottom behavior: new content
//! keeps the view pinned to the bottom until the user scrolls away.

/// Manages scroll state for the messages area
pub struct ScrollState {
    /// Current scroll offset (0 = top, max = bottom)
    pub offset: usize,
    /// Maximum scroll offset for bounds checking
    pub max_scroll: usize,
    /// Whether to auto-scroll to bottom on new content
    pub auto_scroll: bool,
    /// Flag to jump to bottom on next render
    scroll_to_bottom: bool,
}

impl ScrollState {
    /// Create a new scroll state with auto-scroll enabled
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_scroll: 0,
            auto_scroll: true,
            scroll_to_bottom: false,
        }
    }

    /// Scroll up by the given amount
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
        // Scrolling away from the bottom releases the stick-to-bottom pin
        if self.offset < self.max_scroll {
            self.auto_scroll = false;
        }
    }

    /// Scroll down by the given amount
    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = self.offset.saturating_add(amount).min(self.max_scroll);
        if self.offset >= self.max_scroll {
            self.auto_scroll = true;
        }
    }

    /// Scroll to a specific line
    pub fn scroll_to_line(&mut self, line: usize) {
        self.offset = line.min(self.max_scroll);
        self.auto_scroll = self.offset >= self.max_scroll;
    }

    /// Jump to the bottom
    pub fn scroll_to_end(&mut self) {
        self.offset = self.max_scroll;
        self.auto_scroll = true;
    }

    /// Request scroll to bottom on next render
    pub fn request_scroll_to_bottom(&mut self) {
        self.scroll_to_bottom = true;
    }

    /// Apply a pending scroll-to-bottom request
    pub fn apply_scroll_to_bottom(&mut self) {
        if self.scroll_to_bottom {
            self.scroll_to_end();
            self.scroll_to_bottom = false;
        }
    }

    /// Update the maximum scroll value from total lines and viewport height
    pub fn update_max_scroll(&mut self, total_lines: usize, viewport_height: u16) {
        self.max_scroll = total_lines.saturating_sub(viewport_height as usize);

        if self.offset > self.max_scroll {
            self.offset = self.max_scroll;
        }
        if self.auto_scroll {
            self.offset = self.max_scroll;
        }
    }

    /// Check if the view can move up (not at top)
    pub fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    /// Check if the view can move down (not at bottom)
    pub fn can_scroll_down(&self) -> bool {
        self.offset < self.max_scroll
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
