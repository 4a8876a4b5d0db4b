//! Tidemark Core - Shared library for the Tidemark chat scaffold
//!
//! This crate provides the framework-independent pieces of the TUI:
//! - Viewport bookmark tracking (scroll markers)
//! - Chat message model and mock reply generation
//! - Configuration and platform paths

pub mod bookmarks;
pub mod chat;
pub mod config;
pub mod constants;
pub mod paths;

// Re-exports for convenience
pub use bookmarks::{
    Bookmark, BookmarkId, Direction, ScrollEdges, Viewport, ViewportBookmarkTracker,
};
pub use chat::{ChatMessage, MockResponder, Role};
pub use config::{Config, ConfigError, TrackerConfig};
