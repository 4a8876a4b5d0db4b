//! Main TUI application
//!
//! Application state and the event loop. Input handling lives in the
//! handlers/ module, rendering in components/.

use std::collections::HashSet;
use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tidemark_core::{Config, ScrollEdges, Viewport, ViewportBookmarkTracker};

use crate::tui::components::{input_bar, marker_panel, messages, status_bar};
use crate::tui::state::{ChatState, LayoutState, MessageLayout, ScrollState};
use crate::tui::themes::{Theme, THEME_REGISTRY};

/// Event poll timeout - roughly 60fps for timer-driven updates
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Application state
pub struct App {
    pub theme: Theme,
    pub chat: ChatState,
    pub scroll: ScrollState,
    pub layout: LayoutState,
    pub message_layout: MessageLayout,
    pub tracker: ViewportBookmarkTracker,
    /// Scroll affordances from the last tracker-observed scroll event
    pub edges: ScrollEdges,
    pub should_quit: bool,

    // Dirty-tracking for render optimization
    needs_redraw: bool,
}

/// Point-in-time view of the messages viewport, fed to the tracker
pub(crate) struct ViewportSnapshot {
    offset: usize,
    content: usize,
    height: usize,
    visible: Vec<u64>,
}

impl Viewport for ViewportSnapshot {
    fn scroll_offset(&self) -> usize {
        self.offset
    }
    fn content_extent(&self) -> usize {
        self.content
    }
    fn viewport_extent(&self) -> usize {
        self.height
    }
    fn visible_item_ids(&self) -> Vec<u64> {
        self.visible.clone()
    }
}

impl App {
    /// Create a new app, optionally with a CLI theme override
    pub fn new(config: &Config, cli_theme: Option<&str>) -> Self {
        let theme_name = cli_theme.unwrap_or(config.ui.theme.as_str());
        let theme = THEME_REGISTRY.get_or_default(theme_name).clone();
        tracing::info!(theme = %theme.name, "starting chat session");

        Self {
            theme,
            chat: ChatState::new(),
            scroll: ScrollState::new(),
            layout: LayoutState::new(),
            message_layout: MessageLayout::new(),
            tracker: ViewportBookmarkTracker::new(config.tracker.clone()),
            edges: ScrollEdges::default(),
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Visible height of the messages area in lines
    pub(crate) fn viewport_height(&self) -> usize {
        self.layout
            .messages_area
            .map(|area| area.height.saturating_sub(2) as usize)
            .unwrap_or(0)
    }

    /// Snapshot the viewport for tracker queries
    pub(crate) fn viewport(&self) -> ViewportSnapshot {
        let height = self.viewport_height();
        ViewportSnapshot {
            offset: self.scroll.offset,
            content: self.message_layout.total_lines(),
            height,
            visible: self.message_layout.visible_ids(self.scroll.offset, height),
        }
    }

    /// Run the TUI until quit
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        // Cancel pending tracker deadlines before anything is torn down
        self.tracker.dispose();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        // Async event stream so timers keep firing while input is idle
        let mut event_stream = EventStream::new();

        loop {
            let now = Instant::now();

            // Deliver due mock replies; new content sticks to the bottom
            // unless the user scrolled away
            if self.chat.poll_replies(now) {
                if self.scroll.auto_scroll {
                    self.scroll.request_scroll_to_bottom();
                }
                self.needs_redraw = true;
            }

            // Advance tracker deadlines (idle debounce, settle delay)
            let viewport = self.viewport();
            if self.tracker.tick(now, &viewport) {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased; // Prefer events over the timeout when both are ready

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) => {
                                self.handle_key(key);
                                self.needs_redraw = true;
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse_event(mouse);
                                self.needs_redraw = true;
                            }
                            Event::Resize(_, _) => {
                                self.needs_redraw = true;
                            }
                            _ => {}
                        }
                    }
                }
                _ = tokio::time::sleep(POLL_INTERVAL) => {
                    // Timeout - continue loop for timer-driven updates
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Render one frame
    fn ui(&mut self, f: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(f.area());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(marker_panel::PANEL_WIDTH),
            ])
            .split(rows[0]);

        self.layout.messages_area = Some(columns[0]);
        self.layout.panel_area = Some(columns[1]);

        // Layout cache and scroll bounds must be current before drawing
        let inner_width = columns[0].width.saturating_sub(2);
        self.message_layout
            .rebuild(&self.chat.messages, messages::wrap_width(inner_width));
        self.scroll.update_max_scroll(
            self.message_layout.total_lines(),
            columns[0].height.saturating_sub(2),
        );
        self.scroll.apply_scroll_to_bottom();

        // Content growth can change the affordances without a scroll event
        self.edges = ScrollEdges {
            can_scroll_up: self.scroll.can_scroll_up(),
            can_scroll_down: self.scroll.can_scroll_down(),
        };

        let marked: HashSet<u64> = self
            .tracker
            .bookmarks()
            .flat_map(|b| b.visible_item_ids().iter().copied())
            .collect();

        messages::render_messages(
            f,
            columns[0],
            &self.theme,
            &self.chat.messages,
            &self.scroll,
            self.message_layout.total_lines(),
            &marked,
        );
        marker_panel::render_marker_panel(
            f,
            columns[1],
            &self.theme,
            &self.tracker.position_label(),
            self.tracker.has_bookmarks(),
            self.tracker.has_current(),
            self.edges,
        );
        input_bar::render_input_bar(f, rows[1], &self.theme, &self.chat.input);
        status_bar::render_status_bar(
            f,
            rows[2],
            &self.theme,
            self.chat.messages.len(),
            &self.tracker.position_label(),
        );
    }
}
