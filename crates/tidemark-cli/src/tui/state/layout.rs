//! Message layout cache and area tracking
//!
//! `MessageLayout` records the wrapped line span of every message. Scrollbar
//! math, visible-item lookups, and rendering must all agree on line counts,
//! so they all pull from this one cache.

use ratatui::layout::Rect;
use tidemark_core::ChatMessage;

/// Cached screen areas for hit testing
#[derive(Debug, Default)]
pub struct LayoutState {
    pub messages_area: Option<Rect>,
    pub panel_area: Option<Rect>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Line span of one message in the rendered list
#[derive(Debug, Clone)]
pub struct MessageSpan {
    pub id: u64,
    /// First line of the message in the full rendered text
    pub start: usize,
    /// Rendered line count, excluding the trailing blank
    pub lines: usize,
}

/// Per-message wrapped line spans for the current width
#[derive(Debug, Default)]
pub struct MessageLayout {
    spans: Vec<MessageSpan>,
    total_lines: usize,
    cached_width: usize,
    cached_count: usize,
}

impl MessageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild spans if the wrap width or message count changed.
    ///
    /// Every message renders as its wrapped lines plus one blank separator;
    /// the separator belongs to the span above it for visibility purposes.
    pub fn rebuild(&mut self, messages: &[ChatMessage], wrap_width: usize) {
        let wrap_width = wrap_width.max(1);
        if self.cached_width == wrap_width && self.cached_count == messages.len() {
            return;
        }
        self.cached_width = wrap_width;
        self.cached_count = messages.len();

        self.spans.clear();
        let mut line = 0;
        for message in messages {
            let lines = wrapped_line_count(&message.text, wrap_width);
            self.spans.push(MessageSpan {
                id: message.id,
                start: line,
                lines,
            });
            line += lines + 1; // blank after
        }
        self.total_lines = line;
    }

    /// Total rendered lines, including blank separators
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Ids of messages at least partially visible in the window
    /// `[offset, offset + viewport_height)`, top to bottom
    pub fn visible_ids(&self, offset: usize, viewport_height: usize) -> Vec<u64> {
        let end = offset + viewport_height;
        self.spans
            .iter()
            .filter(|span| span.start < end && span.start + span.lines > offset)
            .map(|span| span.id)
            .collect()
    }
}

/// Number of wrapped lines `text` renders as at `width`.
///
/// Must match the rendering in `components::messages` exactly: each source
/// line wraps independently and empty lines still take one row.
pub fn wrapped_line_count(text: &str, width: usize) -> usize {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                1
            } else {
                textwrap::wrap(line, width).len()
            }
        })
        .sum::<usize>()
        .max(1)
}
