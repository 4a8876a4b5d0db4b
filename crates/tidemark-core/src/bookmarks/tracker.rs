//! Scroll observation and bookmark capture
//!
//! Owns the bookmark collection and decides when idle scrolling should
//! materialize a new bookmark. Scroll activity drives a three-state machine;
//! each deadline lives inside the state variant that owns it, so the idle
//! debounce and the programmatic-scroll settle timer can never be confused
//! for one another or leak across transitions.
//!
//! Time is passed in explicitly. The tracker never reads the clock itself,
//! which keeps every transition deterministic under test.

use std::time::Instant;

use tracing::debug;

use super::collection::{Bookmark, BookmarkCollection, BookmarkId, Direction};
use super::viewport::{ScrollEdges, Viewport};
use crate::config::TrackerConfig;

/// Scroll activity phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No recent scroll activity
    Idle,
    /// User is scrolling; auto-capture fires at `deadline` unless restarted
    UserScrolling { deadline: Instant },
    /// Tracker-initiated scroll; events are ignored until `settle_until`
    ProgrammaticScroll { settle_until: Instant },
}

/// Tracks viewport scroll state and owns the bookmark collection
///
/// All operations are total: an empty collection, an unknown id, or a missing
/// current reference degrade to no-ops and sentinels rather than errors. The
/// one discipline the caller owes is [`dispose`](Self::dispose) at teardown,
/// after which every entry point is inert.
pub struct ViewportBookmarkTracker {
    collection: BookmarkCollection,
    phase: Phase,
    /// Geometry from the most recent scroll event
    last_offset: usize,
    last_content_extent: usize,
    last_viewport_extent: usize,
    config: TrackerConfig,
    disposed: bool,
}

impl ViewportBookmarkTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            collection: BookmarkCollection::new(),
            phase: Phase::Idle,
            last_offset: 0,
            last_content_extent: 0,
            last_viewport_extent: 0,
            config,
            disposed: false,
        }
    }

    // =========================================================================
    // Bookmark operations
    // =========================================================================

    /// Record a bookmark at `scroll_offset` and make it current.
    ///
    /// The offset is clamped to the bottom-most offset last reported by the
    /// viewport. Explicit adds always succeed; only a disposed tracker
    /// returns `None`.
    pub fn record_bookmark(
        &mut self,
        scroll_offset: usize,
        visible_item_ids: Vec<u64>,
    ) -> Option<BookmarkId> {
        if self.disposed {
            return None;
        }
        let offset = match self.max_offset() {
            Some(max) => scroll_offset.min(max),
            None => scroll_offset,
        };
        let id = self.collection.insert(offset, visible_item_ids);
        debug!(offset, total = self.collection.len(), "bookmark recorded");
        Some(id)
    }

    /// Remove a bookmark by id. Absent ids are a no-op.
    pub fn remove_bookmark(&mut self, id: BookmarkId) {
        if self.disposed {
            return;
        }
        self.collection.remove(id);
        debug!(total = self.collection.len(), "bookmark removed");
    }

    /// Remove the current bookmark, if one is set
    pub fn remove_current(&mut self) {
        if let Some(id) = self.collection.current() {
            self.remove_bookmark(id);
        }
    }

    /// Resolve a navigation request to a target scroll offset.
    ///
    /// Returns `None` when the collection is empty. The resolved bookmark
    /// becomes current and the tracker enters the programmatic-scroll phase,
    /// so the resulting viewport movement is not mistaken for user scrolling.
    pub fn navigate(&mut self, now: Instant, direction: Direction) -> Option<usize> {
        if self.disposed {
            return None;
        }
        let target = self.collection.step(direction)?.scroll_offset();
        self.phase = Phase::ProgrammaticScroll {
            settle_until: now + self.config.settle_delay(),
        };
        debug!(target, ?direction, "navigating to bookmark");
        Some(target)
    }

    /// Bottom-most offset for the viewport, entering the programmatic-scroll
    /// phase so the jump is not captured as user activity
    pub fn scroll_to_bottom<V: Viewport>(&mut self, now: Instant, viewport: &V) -> usize {
        let bottom = viewport
            .content_extent()
            .saturating_sub(viewport.viewport_extent());
        if !self.disposed {
            self.phase = Phase::ProgrammaticScroll {
                settle_until: now + self.config.settle_delay(),
            };
        }
        bottom
    }

    // =========================================================================
    // Scroll event handling
    // =========================================================================

    /// Feed a scroll-position change into the state machine.
    ///
    /// Returns whether the viewport can still move in each direction, for UI
    /// affordances. Events arriving while a programmatic scroll settles do
    /// not restart the idle debounce and never lead to auto-capture.
    pub fn handle_scroll_event(
        &mut self,
        now: Instant,
        offset: usize,
        content_extent: usize,
        viewport_extent: usize,
    ) -> ScrollEdges {
        let edges = ScrollEdges::at(offset, content_extent, viewport_extent);
        if self.disposed {
            return edges;
        }

        self.last_offset = offset;
        self.last_content_extent = content_extent;
        self.last_viewport_extent = viewport_extent;

        self.expire_settle(now);
        if matches!(self.phase, Phase::ProgrammaticScroll { .. }) {
            return edges;
        }

        self.phase = Phase::UserScrolling {
            deadline: now + self.config.idle_debounce(),
        };
        edges
    }

    /// Advance deadline-based transitions. Call once per UI tick.
    ///
    /// When the idle debounce expires away from the bottom, one bookmark is
    /// auto-captured at the last observed offset (suppressed within the
    /// de-duplication tolerance of an existing bookmark). Returns `true` when
    /// a bookmark was captured, so the caller can redraw.
    pub fn tick<V: Viewport>(&mut self, now: Instant, viewport: &V) -> bool {
        if self.disposed {
            return false;
        }
        self.expire_settle(now);

        let Phase::UserScrolling { deadline } = self.phase else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.phase = Phase::Idle;

        if self.at_bottom() {
            // Stopping at the bottom never captures
            return false;
        }
        if self
            .collection
            .has_near(self.last_offset, self.config.dedup_tolerance)
        {
            debug!(
                offset = self.last_offset,
                "auto-capture suppressed, existing bookmark nearby"
            );
            return false;
        }

        let ids = viewport.visible_item_ids();
        self.collection.insert(self.last_offset, ids);
        debug!(
            offset = self.last_offset,
            total = self.collection.len(),
            "auto-captured bookmark"
        );
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// `"<rank>/<total>"` for the current bookmark in offset order, or `"-"`
    pub fn position_label(&self) -> String {
        match self.collection.current_rank() {
            Some(rank) => format!("{}/{}", rank, self.collection.len()),
            None => "-".to_string(),
        }
    }

    pub fn bookmark_count(&self) -> usize {
        self.collection.len()
    }

    pub fn has_bookmarks(&self) -> bool {
        !self.collection.is_empty()
    }

    /// Bookmarks in ascending offset order
    pub fn bookmarks(&self) -> impl Iterator<Item = &Bookmark> {
        self.collection.iter()
    }

    pub fn current_id(&self) -> Option<BookmarkId> {
        self.collection.current()
    }

    /// True while the remove action applies (a current bookmark is set)
    pub fn has_current(&self) -> bool {
        self.collection.current().is_some()
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Cancel all pending deadlines. No bookmark mutation occurs afterwards.
    pub fn dispose(&mut self) {
        self.phase = Phase::Idle;
        self.disposed = true;
    }

    fn expire_settle(&mut self, now: Instant) {
        if let Phase::ProgrammaticScroll { settle_until } = self.phase {
            if now >= settle_until {
                self.phase = Phase::Idle;
            }
        }
    }

    /// Bottom-most valid offset, when geometry has been observed
    fn max_offset(&self) -> Option<usize> {
        if self.last_content_extent == 0 && self.last_viewport_extent == 0 {
            return None;
        }
        Some(
            self.last_content_extent
                .saturating_sub(self.last_viewport_extent),
        )
    }

    fn at_bottom(&self) -> bool {
        self.last_offset + self.last_viewport_extent >= self.last_content_extent
    }
}

impl Default for ViewportBookmarkTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Content of 1000 lines viewed through a 40-line window
    struct FakeViewport {
        offset: usize,
        content: usize,
        viewport: usize,
        visible: Vec<u64>,
    }

    impl Default for FakeViewport {
        fn default() -> Self {
            Self {
                offset: 0,
                content: 1000,
                viewport: 40,
                visible: vec![7, 8, 9],
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> usize {
            self.offset
        }
        fn content_extent(&self) -> usize {
            self.content
        }
        fn viewport_extent(&self) -> usize {
            self.viewport
        }
        fn visible_item_ids(&self) -> Vec<u64> {
            self.visible.clone()
        }
    }

    fn tracker() -> ViewportBookmarkTracker {
        ViewportBookmarkTracker::default()
    }

    fn debounce() -> Duration {
        TrackerConfig::default().idle_debounce()
    }

    fn settle() -> Duration {
        TrackerConfig::default().settle_delay()
    }

    #[test]
    fn test_empty_collection_degrades_gracefully() {
        // Scenario A: navigation is a no-op and the label shows the sentinel
        let mut tracker = tracker();
        let now = Instant::now();
        assert_eq!(tracker.navigate(now, Direction::Next), None);
        assert_eq!(tracker.navigate(now, Direction::Previous), None);
        assert_eq!(tracker.position_label(), "-");
        assert!(!tracker.has_bookmarks());
    }

    #[test]
    fn test_navigate_orders_by_offset() {
        // Scenario B: inserted [50, 200, 120], navigate(next) from no-current
        // resolves to offset 50 with label "1/3"
        let mut tracker = tracker();
        let now = Instant::now();
        tracker.record_bookmark(50, vec![]);
        tracker.record_bookmark(200, vec![]);
        tracker.record_bookmark(120, vec![]);
        let offsets: Vec<usize> = tracker.bookmarks().map(|b| b.scroll_offset()).collect();
        assert_eq!(offsets, vec![50, 120, 200]);

        // Reach the no-current state by removing a throwaway current bookmark
        let tmp = tracker.record_bookmark(999, vec![]).unwrap();
        tracker.remove_bookmark(tmp);
        assert_eq!(tracker.position_label(), "-");

        assert_eq!(tracker.navigate(now, Direction::Next), Some(50));
        assert_eq!(tracker.position_label(), "1/3");
    }

    #[test]
    fn test_navigate_cycles_with_period_equal_to_count() {
        let mut tracker = tracker();
        let now = Instant::now();
        tracker.record_bookmark(10, vec![]);
        tracker.record_bookmark(20, vec![]);
        tracker.record_bookmark(30, vec![]);

        let first = tracker.navigate(now, Direction::Next);
        let mut last = first;
        for _ in 0..3 {
            last = tracker.navigate(now, Direction::Next);
        }
        assert_eq!(first, last);
    }

    #[test]
    fn test_previous_then_next_round_trips() {
        let mut tracker = tracker();
        let now = Instant::now();
        tracker.record_bookmark(10, vec![]);
        tracker.record_bookmark(20, vec![]);
        tracker.record_bookmark(30, vec![]);

        // From the middle
        tracker.navigate(now, Direction::Next); // 10
        tracker.navigate(now, Direction::Next); // 20
        let before = tracker.current_id();
        tracker.navigate(now, Direction::Previous);
        tracker.navigate(now, Direction::Next);
        assert_eq!(tracker.current_id(), before);

        // Across the wrap boundary: previous from the first entry crosses to
        // the last, and next crosses straight back
        tracker.navigate(now, Direction::Previous); // 10
        let at_first = tracker.current_id();
        assert_eq!(tracker.navigate(now, Direction::Previous), Some(30));
        assert_eq!(tracker.navigate(now, Direction::Next), Some(10));
        assert_eq!(tracker.current_id(), at_first);
    }

    #[test]
    fn test_idle_scroll_captures_once() {
        // Scenario C: stop at offset 300 away from the bottom, debounce
        // elapses, exactly one bookmark appears at 300
        let mut tracker = tracker();
        let viewport = FakeViewport {
            offset: 300,
            ..Default::default()
        };
        let t0 = Instant::now();
        tracker.handle_scroll_event(t0, 300, 1000, 40);

        assert!(!tracker.tick(t0 + debounce() / 2, &viewport));
        assert!(tracker.tick(t0 + debounce(), &viewport));
        assert_eq!(tracker.bookmark_count(), 1);

        let bookmark = tracker.bookmarks().next().unwrap();
        assert_eq!(bookmark.scroll_offset(), 300);
        assert_eq!(bookmark.visible_item_ids(), &[7, 8, 9]);

        // Debounce consumed; later ticks stay quiet
        assert!(!tracker.tick(t0 + debounce() * 2, &viewport));
        assert_eq!(tracker.bookmark_count(), 1);
    }

    #[test]
    fn test_scroll_events_restart_debounce() {
        let mut tracker = tracker();
        let viewport = FakeViewport::default();
        let t0 = Instant::now();
        tracker.handle_scroll_event(t0, 100, 1000, 40);
        let t1 = t0 + debounce() / 2;
        tracker.handle_scroll_event(t1, 150, 1000, 40);

        // The first deadline passes without capture; the restarted one fires
        assert!(!tracker.tick(t0 + debounce(), &viewport));
        assert!(tracker.tick(t1 + debounce(), &viewport));
        assert_eq!(tracker.bookmarks().next().unwrap().scroll_offset(), 150);
    }

    #[test]
    fn test_no_capture_at_bottom() {
        // Scenario D: stopping at the bottom-most offset captures nothing
        let mut tracker = tracker();
        let viewport = FakeViewport {
            offset: 960,
            ..Default::default()
        };
        let t0 = Instant::now();
        tracker.handle_scroll_event(t0, 960, 1000, 40);
        assert!(!tracker.tick(t0 + debounce(), &viewport));
        assert_eq!(tracker.bookmark_count(), 0);
    }

    #[test]
    fn test_programmatic_scroll_is_ignored() {
        // Scenario E: the scroll event caused by navigation must not restart
        // the debounce or trigger capture
        let mut tracker = tracker();
        let viewport = FakeViewport::default();
        let t0 = Instant::now();
        tracker.record_bookmark(200, vec![]);

        let target = tracker.navigate(t0, Direction::Next);
        assert_eq!(target, Some(200));

        // Viewport applies the offset and echoes a scroll event synchronously
        tracker.handle_scroll_event(t0, 200, 1000, 40);
        assert!(!tracker.tick(t0 + debounce() * 2, &viewport));
        assert_eq!(tracker.bookmark_count(), 1);
    }

    #[test]
    fn test_user_scroll_after_settle_captures_again() {
        let mut tracker = tracker();
        let viewport = FakeViewport {
            offset: 500,
            ..Default::default()
        };
        let t0 = Instant::now();
        tracker.record_bookmark(200, vec![]);
        tracker.navigate(t0, Direction::Next);

        // After the settle delay the user scrolls somewhere new
        let t1 = t0 + settle();
        tracker.handle_scroll_event(t1, 500, 1000, 40);
        assert!(tracker.tick(t1 + debounce(), &viewport));
        assert_eq!(tracker.bookmark_count(), 2);
    }

    #[test]
    fn test_auto_capture_deduplicates_nearby() {
        let mut tracker = tracker();
        let viewport = FakeViewport::default();
        let t0 = Instant::now();
        tracker.handle_scroll_event(t0, 300, 1000, 40);
        assert!(tracker.tick(t0 + debounce(), &viewport));

        // One line away from the existing bookmark: suppressed
        let t1 = t0 + debounce() + Duration::from_secs(1);
        tracker.handle_scroll_event(t1, 301, 1000, 40);
        assert!(!tracker.tick(t1 + debounce(), &viewport));
        assert_eq!(tracker.bookmark_count(), 1);

        // Far away: captured
        let t2 = t1 + debounce() + Duration::from_secs(1);
        tracker.handle_scroll_event(t2, 400, 1000, 40);
        assert!(tracker.tick(t2 + debounce(), &viewport));
        assert_eq!(tracker.bookmark_count(), 2);
    }

    #[test]
    fn test_explicit_add_is_never_suppressed() {
        let mut tracker = tracker();
        tracker.record_bookmark(300, vec![]);
        tracker.record_bookmark(300, vec![]);
        assert_eq!(tracker.bookmark_count(), 2);
    }

    #[test]
    fn test_record_clamps_to_known_bottom() {
        let mut tracker = tracker();
        let t0 = Instant::now();
        tracker.handle_scroll_event(t0, 100, 1000, 40);
        tracker.record_bookmark(5000, vec![]);
        assert_eq!(tracker.bookmarks().next().unwrap().scroll_offset(), 960);
    }

    #[test]
    fn test_scroll_edges() {
        let mut tracker = tracker();
        let now = Instant::now();

        let edges = tracker.handle_scroll_event(now, 0, 1000, 40);
        assert!(!edges.can_scroll_up);
        assert!(edges.can_scroll_down);

        let edges = tracker.handle_scroll_event(now, 960, 1000, 40);
        assert!(edges.can_scroll_up);
        assert!(!edges.can_scroll_down);

        // Content shorter than the viewport scrolls in neither direction
        let edges = tracker.handle_scroll_event(now, 0, 20, 40);
        assert!(!edges.can_scroll_up);
        assert!(!edges.can_scroll_down);
    }

    #[test]
    fn test_remove_bookmark_is_idempotent() {
        let mut tracker = tracker();
        let id = tracker.record_bookmark(100, vec![]).unwrap();
        tracker.remove_bookmark(id);
        tracker.remove_bookmark(id);
        assert_eq!(tracker.bookmark_count(), 0);
        assert_eq!(tracker.position_label(), "-");
    }

    #[test]
    fn test_dispose_cancels_everything() {
        let mut tracker = tracker();
        let viewport = FakeViewport::default();
        let t0 = Instant::now();
        tracker.handle_scroll_event(t0, 300, 1000, 40);
        tracker.dispose();

        // The pending debounce never fires and no mutation goes through
        assert!(!tracker.tick(t0 + debounce() * 2, &viewport));
        assert_eq!(tracker.record_bookmark(100, vec![]), None);
        assert_eq!(tracker.navigate(t0, Direction::Next), None);
        assert_eq!(tracker.bookmark_count(), 0);
    }

    #[test]
    fn test_position_label_tracks_navigation() {
        let mut tracker = tracker();
        let now = Instant::now();
        tracker.record_bookmark(10, vec![]);
        tracker.record_bookmark(30, vec![]);
        tracker.record_bookmark(20, vec![]);

        // Last insert (offset 20) is current, rank 2 of 3
        assert_eq!(tracker.position_label(), "2/3");
        tracker.navigate(now, Direction::Next);
        assert_eq!(tracker.position_label(), "3/3");
        tracker.navigate(now, Direction::Next);
        assert_eq!(tracker.position_label(), "1/3");
    }
}
