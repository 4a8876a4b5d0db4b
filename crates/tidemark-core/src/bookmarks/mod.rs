//! Viewport bookmark tracking
//!
//! A small stateful subsystem usable by any scrollable-list UI: it observes
//! scroll events, infers when the user has stopped scrolling, captures
//! bookmarks tied to scroll offsets, and resolves next/previous navigation
//! to a target offset. Nothing here knows about a concrete UI framework.

mod collection;
mod tracker;
mod viewport;

pub use collection::{Bookmark, BookmarkCollection, BookmarkId, Direction};
pub use tracker::ViewportBookmarkTracker;
pub use viewport::{ScrollEdges, Viewport};
