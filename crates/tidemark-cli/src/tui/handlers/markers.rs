//! Marker actions and user-scroll plumbing
//!
//! Every user-initiated viewport movement funnels through
//! [`App::scroll_by`] so the tracker sees each offset change exactly once;
//! tracker-initiated movements (navigation, jump-to-bottom) deliberately
//! bypass it.

use std::time::Instant;

use tidemark_core::Direction;

use crate::tui::app::App;

impl App {
    /// Record a bookmark at the current scroll position
    pub(crate) fn add_marker(&mut self) {
        let height = self.viewport_height();
        let visible = self
            .message_layout
            .visible_ids(self.scroll.offset, height);
        self.tracker.record_bookmark(self.scroll.offset, visible);
    }

    /// Remove the current bookmark, if any
    pub(crate) fn remove_current_marker(&mut self) {
        self.tracker.remove_current();
    }

    /// Navigate to the previous/next bookmark and apply the target offset
    pub(crate) fn navigate_marker(&mut self, now: Instant, direction: Direction) {
        if let Some(target) = self.tracker.navigate(now, direction) {
            self.scroll.scroll_to_line(target);
        }
    }

    /// Jump to the bottom of the conversation
    pub(crate) fn jump_to_bottom(&mut self, now: Instant) {
        let viewport = self.viewport();
        self.tracker.scroll_to_bottom(now, &viewport);
        self.scroll.scroll_to_end();
    }

    /// Move the viewport by `delta` lines as a user action and feed the
    /// resulting offset change to the tracker
    pub(crate) fn scroll_by(&mut self, now: Instant, delta: isize) {
        let before = self.scroll.offset;
        if delta < 0 {
            self.scroll.scroll_up(delta.unsigned_abs());
        } else {
            self.scroll.scroll_down(delta as usize);
        }
        if self.scroll.offset == before {
            // Pinned against an edge; the position did not change
            return;
        }
        let height = self.viewport_height();
        self.edges = self.tracker.handle_scroll_event(
            now,
            self.scroll.offset,
            self.message_layout.total_lines(),
            height,
        );
    }
}
